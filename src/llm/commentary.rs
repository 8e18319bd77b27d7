use crate::error::{AnalysisError, Result};
use crate::llm::client::GeminiClient;
use crate::llm::prompts::{self, ANALYST_SYSTEM_PROMPT, COMMENTARY_INSTRUCTIONS};
use crate::llm::types::{AnswerResponse, CommentaryResponse, Content};
use crate::report::ReportSummary;
use crate::session::{ChatRole, SessionContext};
use log::debug;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Generates analyst commentary and grounded answers from a formatted
/// report summary. Holds no analysis state of its own.
pub struct CommentaryGenerator {
    client: GeminiClient,
    model: String,
}

impl CommentaryGenerator {
    pub fn new(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// One-shot commentary over the full report summary.
    pub async fn comment(&self, summary: &ReportSummary) -> Result<String> {
        let schema = serde_json::to_value(schemars::schema_for!(CommentaryResponse))?;
        let request = format!(
            "{}\n\nRaw data and computed metrics:\n{}",
            COMMENTARY_INSTRUCTIONS,
            summary.to_markdown()
        );

        debug!("requesting commentary from model {}", self.model);
        let raw = self
            .client
            .generate_content(
                &self.model,
                ANALYST_SYSTEM_PROMPT,
                vec![Content::user(request)],
                Some(schema),
            )
            .await?;

        let parsed: CommentaryResponse = serde_json::from_str(&raw).map_err(|e| {
            AnalysisError::CommentaryFailed(format!("Commentary response parse failed: {}", e))
        })?;
        Ok(parsed.commentary)
    }

    /// Answers a follow-up question, replaying the session transcript and
    /// grounding the prompt in the session's processed statement when one
    /// is cached. The caller owns the session and decides what to append.
    pub async fn answer(&self, session: &SessionContext, question: &str) -> Result<String> {
        let schema = serde_json::to_value(schemars::schema_for!(AnswerResponse))?;

        let mut contents: Vec<Content> = session
            .messages()
            .iter()
            .map(|message| match message.role {
                ChatRole::User => Content::user(message.content.clone()),
                ChatRole::Assistant => Content::model(message.content.clone()),
            })
            .collect();
        contents.push(Content::user(prompts::grounded_question(
            session.report_markdown(),
            question,
        )));

        let raw = self
            .client
            .generate_content(&self.model, ANALYST_SYSTEM_PROMPT, contents, Some(schema))
            .await?;

        let parsed: AnswerResponse = serde_json::from_str(&raw).map_err(|e| {
            AnalysisError::CommentaryFailed(format!("Answer response parse failed: {}", e))
        })?;
        Ok(parsed.answer)
    }
}
