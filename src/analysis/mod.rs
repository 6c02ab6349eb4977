pub mod features;
pub mod pipeline;
pub mod verdict;

pub use features::extract_features;
pub use pipeline::{Analyzer, ContentSource, VerdictSource};
pub use verdict::resolve_label;
