use async_trait::async_trait;
use chrono::Utc;

use crate::{
    ai::LlmError,
    domain::{AnalysisOutcome, AnalysisReport, PageContent},
};

use super::{features::extract_features, verdict::resolve_label};

#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_content(&self, url: &str) -> PageContent;
}

#[async_trait]
pub trait VerdictSource: Send + Sync {
    async fn classify(&self, url: &str, content: &str) -> Result<String, LlmError>;
}

/// Runs features → fetch → model → label for one URL at a time. A failed
/// fetch stops the run before the model is called.
pub struct Analyzer<F, V> {
    fetcher: F,
    classifier: V,
}

impl<F, V> Analyzer<F, V>
where
    F: ContentSource,
    V: VerdictSource,
{
    pub fn new(fetcher: F, classifier: V) -> Self {
        Self {
            fetcher,
            classifier,
        }
    }

    pub async fn analyze(&self, url: &str) -> AnalysisReport {
        let features = extract_features(url);
        tracing::info!(
            target: "analyzer",
            url,
            length = features.length,
            special_chars = features.special_char_count,
            domain_dots = features.domain_dot_count,
            https = features.uses_https,
            "url features extracted"
        );

        let content = self.fetcher.fetch_content(url).await;

        let outcome = if content.is_failure() {
            tracing::info!(target: "analyzer", url, "content fetch failed; skipping model call");
            AnalysisOutcome::Skipped
        } else {
            match self.classifier.classify(url, content.prompt_text()).await {
                Ok(response) => {
                    let label = resolve_label(&response);
                    tracing::info!(target: "analyzer", url, %label, "url classified");
                    AnalysisOutcome::Classified { response, label }
                }
                Err(err) => {
                    tracing::error!(target: "analyzer", url, error = %err, "classification unavailable");
                    AnalysisOutcome::Unavailable(err)
                }
            }
        };

        AnalysisReport {
            url: url.to_string(),
            features,
            content,
            outcome,
            analyzed_at: Utc::now(),
        }
    }
}
