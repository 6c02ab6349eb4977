pub mod report;
pub mod types;

pub use report::{AnalysisOutcome, AnalysisReport};
pub use types::{FinalLabel, PageContent, UrlFeatures};
