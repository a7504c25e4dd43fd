//! Student commands.

use anyhow::{Context, Result};
use clap::Subcommand;

use squeak_core::models::JoinClassroomRequest;
use squeak_http::SqueakClient;

use crate::output;

#[derive(Subcommand, Debug)]
pub enum StudentCommand {
    /// Show the caller's student record
    Status,

    /// Show the caller's classroom
    Classroom,

    /// Join a classroom
    Join {
        classroom_id: String,
    },
}

pub async fn run(cmd: StudentCommand, client: &SqueakClient) -> Result<()> {
    let student = client.student();
    match cmd {
        StudentCommand::Status => {
            let status = student
                .get_student_status()
                .await
                .context("Failed to fetch student status")?;
            output::json_pretty(&status)
        }
        StudentCommand::Classroom => {
            let classroom = student
                .get_classroom()
                .await
                .context("Failed to fetch classroom")?;
            output::json_pretty(&classroom)
        }
        StudentCommand::Join { classroom_id } => {
            let response = student
                .join_classroom(&JoinClassroomRequest { classroom_id })
                .await
                .context("Failed to join classroom")?;
            output::json_pretty(&response)
        }
    }
}
