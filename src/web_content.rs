use anyhow::{Context, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, warn};
use url::Url;

use crate::{
    analysis::ContentSource, config::WebContentConfig, domain::PageContent, text::truncate_chars,
};

static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("valid paragraph selector"));

pub struct WebContentFetcher {
    client: Client,
    config: WebContentConfig,
}

impl WebContentFetcher {
    pub fn new(client: Client, config: WebContentConfig) -> Self {
        Self { client, config }
    }

    pub async fn fetch(&self, raw_url: &str) -> PageContent {
        match self.fetch_body(raw_url).await {
            Ok(body) => {
                let text = extract_paragraph_text(&body, self.config.content_max_length);
                if text.trim().is_empty() {
                    debug!(target: "web", url = raw_url, "no paragraph text found");
                    PageContent::Empty
                } else {
                    PageContent::Fetched(text)
                }
            }
            Err(err) => {
                warn!(target: "web", error = %err, url = raw_url, "failed to fetch page content");
                PageContent::FetchFailed(format!("{err:#}"))
            }
        }
    }

    async fn fetch_body(&self, raw_url: &str) -> Result<String> {
        let url = Url::parse(raw_url).with_context(|| format!("invalid URL {raw_url}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("unsupported URL scheme {}", url.scheme());
        }

        let response = self
            .client
            .get(url.clone())
            .timeout(self.config.fetch_timeout)
            .send()
            .await
            .with_context(|| format!("failed to fetch {}", url))?;

        let status = response.status();
        if !status.is_success() {
            warn!(target: "web", status = %status, url = %url, "non-success status, parsing body anyway");
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read body of {}", url))?;
        Ok(body)
    }
}

#[async_trait]
impl ContentSource for WebContentFetcher {
    async fn fetch_content(&self, url: &str) -> PageContent {
        self.fetch(url).await
    }
}

/// Text of every `<p>` in document order, joined by single spaces and cut to
/// `max_chars` characters.
pub fn extract_paragraph_text(html: &str, max_chars: usize) -> String {
    let document = Html::parse_document(html);
    let joined = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");
    truncate_chars(&joined, max_chars).to_string()
}
