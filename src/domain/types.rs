use std::fmt;

pub const EMPTY_CONTENT_TEXT: &str = "No readable content found.";
pub const FETCH_FAILED_TEXT: &str = "Error fetching content";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlFeatures {
    pub length: usize,
    pub special_char_count: usize,
    pub domain_dot_count: usize,
    pub uses_https: bool,
}

/// Outcome of scraping a page's paragraph text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    Fetched(String),
    Empty,
    FetchFailed(String),
}

impl PageContent {
    /// Text embedded in the classification prompt for this outcome.
    pub fn prompt_text(&self) -> &str {
        match self {
            PageContent::Fetched(text) => text,
            PageContent::Empty => EMPTY_CONTENT_TEXT,
            PageContent::FetchFailed(_) => FETCH_FAILED_TEXT,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, PageContent::FetchFailed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinalLabel {
    Legitimate,
    Phishing,
    Uncertain,
}

impl fmt::Display for FinalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FinalLabel::Legitimate => "Legitimate",
            FinalLabel::Phishing => "Phishing",
            FinalLabel::Uncertain => "Uncertain",
        };
        f.write_str(name)
    }
}
