//! Best-effort tag suggestion via an OpenAI-compatible chat-completion API.
//!
//! Failures here must never block snippet creation: the add command
//! downgrades every [`SnipError::TagService`] to a warning and proceeds with
//! the caller-supplied tags.

use crate::config::TagApiConfig;
use crate::error::{Result, SnipError};
use crate::model::parse_tag_list;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_REPLY_TOKENS: u32 = 60;

/// Seam for tag generation, so the add command can be tested with mocks.
pub trait TagSuggester {
    /// Generate candidate tags for `content`.
    ///
    /// # Errors
    ///
    /// Returns `SnipError::TagService` on any transport, status, or reply
    /// shape failure.
    fn suggest_tags(&self, content: &str) -> Result<Vec<String>>;
}

pub struct OpenAiTagClient {
    http: reqwest::blocking::Client,
    config: TagApiConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiTagClient {
    pub fn new(config: TagApiConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SnipError::TagService(e.to_string()))?;
        Ok(Self { http, config })
    }
}

impl TagSuggester for OpenAiTagClient {
    fn suggest_tags(&self, content: &str) -> Result<Vec<String>> {
        let prompt = format!(
            "Given the following code snippet, generate 3-5 concise tags separated by commas:\n\n{}",
            content
        );
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            max_tokens: MAX_REPLY_TOKENS,
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .map_err(|e| SnipError::TagService(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SnipError::TagService(format!(
                "tag API returned {}",
                status
            )));
        }

        let body: ChatResponse = response
            .json()
            .map_err(|e| SnipError::TagService(format!("malformed tag API reply: {}", e)))?;

        let reply = body
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| SnipError::TagService("tag API reply had no choices".to_string()))?;

        Ok(parse_tag_list(reply))
    }
}
