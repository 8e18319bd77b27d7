use crate::error::{AnalysisError, Result};
use crate::llm::types::*;
use reqwest::Client;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Thin REST client for the Gemini generateContent endpoint. Text in, text
/// out; the analysis engines never go near it.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    pub(crate) async fn generate_content(
        &self,
        model: &str,
        system_prompt: &str,
        messages: Vec<Content>,
        response_schema: Option<serde_json::Value>,
    ) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let payload = GenerateContentRequest {
            contents: messages,
            system_instruction: Some(Content::user(system_prompt)),
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            },
        };

        let res = self.client.post(&url).json(&payload).send().await?;
        let status = res.status();

        if !status.is_success() {
            let err_text = res.text().await?;
            return Err(AnalysisError::CommentaryFailed(format!(
                "Gemini API error (status {}): {}",
                status, err_text
            )));
        }

        let body: GenerateContentResponse = res.json().await?;

        let part = body
            .candidates
            .ok_or_else(|| AnalysisError::CommentaryFailed("No candidates returned".to_string()))?
            .first()
            .ok_or_else(|| AnalysisError::CommentaryFailed("Empty candidates list".to_string()))?
            .content
            .parts
            .first()
            .ok_or_else(|| AnalysisError::CommentaryFailed("No parts in content".to_string()))?
            .clone();

        let Part::Text { text } = part;
        Ok(text)
    }
}
