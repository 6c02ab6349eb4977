use crate::domain::FinalLabel;

/// Maps free-text model output onto a label. "phishing" wins over
/// "legitimate" when both appear.
pub fn resolve_label(response_text: &str) -> FinalLabel {
    let lowered = response_text.to_lowercase();
    if lowered.contains("phishing") {
        FinalLabel::Phishing
    } else if lowered.contains("legitimate") {
        FinalLabel::Legitimate
    } else {
        FinalLabel::Uncertain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::FETCH_FAILED_TEXT;

    #[test]
    fn phishing_wins_ties() {
        assert_eq!(
            resolve_label("This site looks legitimate and shows no signs of phishing"),
            FinalLabel::Phishing
        );
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(
            resolve_label("This appears Legitimate based on the content."),
            FinalLabel::Legitimate
        );
        assert_eq!(resolve_label("PHISHING"), FinalLabel::Phishing);
    }

    #[test]
    fn no_keyword_is_uncertain() {
        assert_eq!(
            resolve_label("I cannot determine this with confidence."),
            FinalLabel::Uncertain
        );
        assert_eq!(resolve_label(""), FinalLabel::Uncertain);
    }

    #[test]
    fn api_error_text_reads_as_uncertain() {
        assert_eq!(
            resolve_label("Error in OpenAI API: rate limit exceeded"),
            FinalLabel::Uncertain
        );
    }

    #[test]
    fn fetch_sentinel_in_reply_is_plain_text() {
        let reply = format!("Content was '{FETCH_FAILED_TEXT}', so this is Uncertain");
        assert_eq!(resolve_label(&reply), FinalLabel::Uncertain);
        let reply = format!("{FETCH_FAILED_TEXT}; URL alone looks legitimate");
        assert_eq!(resolve_label(&reply), FinalLabel::Legitimate);
    }
}
