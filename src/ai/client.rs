use async_trait::async_trait;
use reqwest::Client;

use crate::{analysis::VerdictSource, config::OpenAiConfig};

use super::{
    error::LlmError,
    inference::{build_prompt, build_request, parse_response, status_error},
};

#[derive(Clone)]
pub struct OpenAiClient {
    http: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(http: Client, config: OpenAiConfig) -> Self {
        Self { http, config }
    }

    pub async fn classify(&self, url: &str, content: &str) -> Result<String, LlmError> {
        let request = build_request(self.config.model.clone(), build_prompt(url, content));
        tracing::debug!(target: "llm", model = %self.config.model, url, "sending classification request");

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        parse_response(&body)
    }
}

#[async_trait]
impl VerdictSource for OpenAiClient {
    async fn classify(&self, url: &str, content: &str) -> Result<String, LlmError> {
        OpenAiClient::classify(self, url, content).await
    }
}
