use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::text::truncate_chars;

use super::error::LlmError;

pub const PROMPT_CONTENT_MAX_CHARS: usize = 3_000;
const ERROR_BODY_MAX_CHARS: usize = 500;

pub fn build_prompt(url: &str, content: &str) -> String {
    format!(
        r#"You are a cybersecurity expert analyzing whether a given website is legitimate or a phishing attempt.
Consider the following aspects:
1. URL Structure: excessive special characters, long URLs, multiple dots, misleading words, missing HTTPS.
2. Website Content: urgent requests, requests for personal/financial details, spelling/grammar errors.
3. Conclude with one of: "Legitimate", "Phishing", "Uncertain", plus brief reasoning.

URL: {url}
Website Content: {content}"#,
        content = truncate_chars(content, PROMPT_CONTENT_MAX_CHARS)
    )
}

pub fn build_request(model: String, prompt: String) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model,
        messages: vec![ChatMessage {
            role: "user".into(),
            content: prompt,
        }],
    }
}

pub fn parse_response(body: &str) -> Result<String, LlmError> {
    let completion: ChatCompletionResponse = serde_json::from_str(body)?;
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|msg| msg.content)
        .ok_or(LlmError::EmptyResponse)
}

/// Prefers the provider's `error.message`, else the start of the raw body.
pub fn status_error(status: StatusCode, body: &str) -> LlmError {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| truncate_chars(body.trim(), ERROR_BODY_MAX_CHARS).to_string());
    LlmError::Status { status, message }
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChatCompletionMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}
