//! Teacher and classroom commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use squeak_core::models::{
    ClassroomContentQuery, CreateClassroomRequest, ModerateContentRequest, UpdateClassroomRequest,
};
use squeak_http::SqueakClient;

use crate::output;

use super::ContentFilter;

#[derive(Subcommand, Debug)]
pub enum TeacherCommand {
    /// Check whether the caller is a teacher
    Verify,

    /// List the caller's classrooms
    Classrooms,

    /// List content of every type available to a classroom
    Content(ContentArgs),

    /// Allow a piece of content in a classroom
    Accept(ModerateArgs),

    /// Block a piece of content in a classroom
    Reject(ModerateArgs),

    /// Create a classroom
    CreateClassroom {
        #[arg(long)]
        name: String,

        #[arg(long, default_value_t = 0)]
        students_count: u32,
    },

    /// Rename a classroom
    UpdateClassroom {
        #[arg(long)]
        classroom_id: String,

        #[arg(long)]
        name: String,
    },
}

#[derive(Args, Debug)]
pub struct ContentArgs {
    #[command(flatten)]
    pub filter: ContentFilter,

    /// Only list whitelisted content
    #[arg(long)]
    pub whitelist: bool,

    #[arg(long)]
    pub classroom_id: Option<String>,
}

#[derive(Args, Debug)]
pub struct ModerateArgs {
    #[arg(long)]
    pub classroom_id: String,

    /// `Story` or `News`
    #[arg(long)]
    pub content_type: String,

    #[arg(long)]
    pub content_id: u64,
}

impl From<ModerateArgs> for ModerateContentRequest {
    fn from(args: ModerateArgs) -> Self {
        Self {
            classroom_id: args.classroom_id,
            content_type: args.content_type,
            content_id: args.content_id,
        }
    }
}

pub async fn run(cmd: TeacherCommand, client: &SqueakClient) -> Result<()> {
    let teacher = client.teacher();
    match cmd {
        TeacherCommand::Verify => {
            let status = teacher
                .verify_teacher()
                .await
                .context("Failed to verify teacher")?;
            output::json_pretty(&status)
        }
        TeacherCommand::Classrooms => {
            let classrooms = teacher
                .get_classroom_list()
                .await
                .context("Failed to list classrooms")?;
            output::json_pretty(&classrooms)
        }
        TeacherCommand::Content(args) => {
            let query = ClassroomContentQuery {
                language: args.filter.language,
                cefr: args.filter.cefr,
                subject: args.filter.subject,
                page: args.filter.page,
                pagesize: args.filter.pagesize,
                whitelist: args.whitelist,
                classroom_id: args.classroom_id,
            };
            let items = teacher
                .fetch_content(&query)
                .await
                .context("Failed to fetch classroom content")?;
            output::json_pretty(&items)
        }
        TeacherCommand::Accept(args) => {
            let response = teacher
                .accept_content(&args.into())
                .await
                .context("Failed to accept content")?;
            output::json_pretty(&response)
        }
        TeacherCommand::Reject(args) => {
            let response = teacher
                .reject_content(&args.into())
                .await
                .context("Failed to reject content")?;
            output::json_pretty(&response)
        }
        TeacherCommand::CreateClassroom {
            name,
            students_count,
        } => {
            let request = CreateClassroomRequest {
                name,
                students_count,
            };
            output::api_result(teacher.create_classroom(&request).await)
        }
        TeacherCommand::UpdateClassroom { classroom_id, name } => {
            let request = UpdateClassroomRequest { classroom_id, name };
            output::api_result(teacher.update_classroom(&request).await)
        }
    }
}
