use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API returned {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response did not contain any message content")]
    EmptyResponse,
}

impl LlmError {
    /// Text form used where the failure is shown in place of a model reply.
    pub fn legacy_text(&self) -> String {
        format!("Error in OpenAI API: {self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::resolve_label;
    use crate::domain::FinalLabel;

    #[test]
    fn legacy_text_resolves_to_uncertain() {
        let err = LlmError::Status {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: "Rate limit reached for gpt-4".into(),
        };
        let text = err.legacy_text();
        assert!(text.starts_with("Error in OpenAI API: API returned 429 Too Many Requests"));
        assert_eq!(resolve_label(&text), FinalLabel::Uncertain);
    }
}
