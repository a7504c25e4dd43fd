//! Teacher status, classrooms and content moderation.

use tracing::instrument;

use squeak_core::models::{
    ClassroomContentItem, ClassroomContentParams, ClassroomContentQuery, ClassroomListResponse,
    CreateClassroomRequest, CreateClassroomResponse, Empty, MessageResponse,
    ModerateContentRequest, TeacherStatusResponse, UpdateClassroomRequest,
    UpdateClassroomResponse,
};
use squeak_core::{ApiResult, Result};

use crate::endpoints::{
    ACCEPT_CONTENT, CLASSROOM_CONTENT, CREATE_CLASSROOM, REJECT_CONTENT, TEACHER_CLASSROOMS,
    TEACHER_STATUS, UPDATE_CLASSROOM,
};
use crate::gate::AccessGate;

/// Classroom reads and moderation return `Result`; classroom create and
/// update return [`ApiResult`] for inline form errors.
#[derive(Debug, Clone, Copy)]
pub struct TeacherApi<'a> {
    gate: &'a AccessGate,
}

impl<'a> TeacherApi<'a> {
    pub(crate) fn new(gate: &'a AccessGate) -> Self {
        Self { gate }
    }

    /// Check whether the caller is registered as a teacher.
    #[instrument(skip(self))]
    pub async fn verify_teacher(&self) -> Result<TeacherStatusResponse> {
        self.gate.call(&TEACHER_STATUS, &Empty {}).await
    }

    #[instrument(skip(self))]
    pub async fn get_classroom_list(&self) -> Result<ClassroomListResponse> {
        self.gate.call(&TEACHER_CLASSROOMS, &Empty {}).await
    }

    /// List classroom content of every type matching `query`.
    #[instrument(skip(self))]
    pub async fn fetch_content(
        &self,
        query: &ClassroomContentQuery,
    ) -> Result<Vec<ClassroomContentItem>> {
        let params = ClassroomContentParams::all_types(query.clone());
        self.gate.call(&CLASSROOM_CONTENT, &params).await
    }

    #[instrument(skip(self))]
    pub async fn accept_content(&self, request: &ModerateContentRequest) -> Result<MessageResponse> {
        self.gate.call(&ACCEPT_CONTENT, request).await
    }

    #[instrument(skip(self))]
    pub async fn reject_content(&self, request: &ModerateContentRequest) -> Result<MessageResponse> {
        self.gate.call(&REJECT_CONTENT, request).await
    }

    #[instrument(skip(self))]
    pub async fn create_classroom(
        &self,
        request: &CreateClassroomRequest,
    ) -> ApiResult<CreateClassroomResponse> {
        self.gate.call_with_errors(&CREATE_CLASSROOM, request).await
    }

    #[instrument(skip(self))]
    pub async fn update_classroom(
        &self,
        request: &UpdateClassroomRequest,
    ) -> ApiResult<UpdateClassroomResponse> {
        self.gate.call_with_errors(&UPDATE_CLASSROOM, request).await
    }
}
