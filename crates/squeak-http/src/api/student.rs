use tracing::instrument;

use squeak_core::Result;
use squeak_core::models::{
    Empty, JoinClassroomRequest, MessageResponse, StudentClassroomResponse, StudentStatusResponse,
};

use crate::endpoints::{JOIN_CLASSROOM, STUDENT_CLASSROOM, STUDENT_STATUS};
use crate::gate::AccessGate;

#[derive(Debug, Clone, Copy)]
pub struct StudentApi<'a> {
    gate: &'a AccessGate,
}

impl<'a> StudentApi<'a> {
    pub(crate) fn new(gate: &'a AccessGate) -> Self {
        Self { gate }
    }

    #[instrument(skip(self))]
    pub async fn get_student_status(&self) -> Result<StudentStatusResponse> {
        self.gate.call(&STUDENT_STATUS, &Empty {}).await
    }

    #[instrument(skip(self))]
    pub async fn get_classroom(&self) -> Result<StudentClassroomResponse> {
        self.gate.call(&STUDENT_CLASSROOM, &Empty {}).await
    }

    #[instrument(skip(self))]
    pub async fn join_classroom(&self, request: &JoinClassroomRequest) -> Result<MessageResponse> {
        self.gate.call(&JOIN_CLASSROOM, request).await
    }
}
