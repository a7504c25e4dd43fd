//! Question and answer commands.

use anyhow::{Context, Result};
use clap::Subcommand;

use squeak_core::models::{EvaluateAnswerRequest, GetQuestionRequest};
use squeak_http::SqueakClient;

use crate::output;

#[derive(Subcommand, Debug)]
pub enum QnaCommand {
    /// Generate a question about a story or article
    Question {
        /// `Story` or `News`
        #[arg(long)]
        content_type: String,

        #[arg(long)]
        id: String,

        #[arg(long)]
        cefr: String,

        /// e.g. `vocab` or `understanding`
        #[arg(long)]
        question_type: String,
    },

    /// Grade an answer
    Evaluate {
        #[arg(long)]
        cefr: String,

        /// Passage the question is about
        #[arg(long)]
        content: String,

        #[arg(long)]
        question: String,

        #[arg(long)]
        answer: String,
    },
}

pub async fn run(cmd: QnaCommand, client: &SqueakClient) -> Result<()> {
    let qna = client.qna();
    match cmd {
        QnaCommand::Question {
            content_type,
            id,
            cefr,
            question_type,
        } => {
            let request = GetQuestionRequest {
                content_type,
                id,
                cefr_level: cefr,
                question_type,
            };
            let question = qna
                .get_question(&request)
                .await
                .context("Failed to generate question")?;
            output::json_pretty(&question)
        }
        QnaCommand::Evaluate {
            cefr,
            content,
            question,
            answer,
        } => {
            let request = EvaluateAnswerRequest {
                cefr,
                content,
                question,
                answer,
            };
            let evaluation = qna
                .evaluate_answer(&request)
                .await
                .context("Failed to evaluate answer")?;
            output::json_pretty(&evaluation)
        }
    }
}
