use chrono::{DateTime, Utc};

use crate::ai::LlmError;

use super::types::{FinalLabel, PageContent, UrlFeatures};

#[derive(Debug)]
pub enum AnalysisOutcome {
    /// Content could not be fetched, so the model was never asked.
    Skipped,
    Classified { response: String, label: FinalLabel },
    Unavailable(LlmError),
}

#[derive(Debug)]
pub struct AnalysisReport {
    pub url: String,
    pub features: UrlFeatures,
    pub content: PageContent,
    pub outcome: AnalysisOutcome,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn label(&self) -> Option<FinalLabel> {
        match &self.outcome {
            AnalysisOutcome::Classified { label, .. } => Some(*label),
            _ => None,
        }
    }
}
