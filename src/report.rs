use std::fmt::Write;

use crate::domain::{AnalysisOutcome, AnalysisReport, FinalLabel, PageContent};

/// Console rendering of one analysis, mirroring the original four-step
/// walk-through: features, content, model reply, verdict.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let features = &report.features;

    let _ = writeln!(out, "URL: {}", report.url);
    let _ = writeln!(out, "Analyzed at: {}", report.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC"));
    out.push('\n');

    out.push_str("== URL Features\n");
    let _ = writeln!(out, "URL Length: {}", features.length);
    let _ = writeln!(out, "Special Characters Count: {}", features.special_char_count);
    let _ = writeln!(out, "Dot Count in Domain: {}", features.domain_dot_count);
    let _ = writeln!(out, "Uses HTTPS: {}", if features.uses_https { "Yes" } else { "No" });
    out.push('\n');

    out.push_str("== Website Content\n");
    match &report.content {
        PageContent::Fetched(text) => {
            let _ = writeln!(
                out,
                "[OK] Website content extracted successfully ({} characters).",
                text.chars().count()
            );
        }
        PageContent::Empty => out.push_str("[OK] No readable content found.\n"),
        PageContent::FetchFailed(reason) => {
            let _ = writeln!(out, "[!!] Failed to extract website content: {reason}");
            return out;
        }
    }
    out.push('\n');

    out.push_str("== AI Analysis\n");
    match &report.outcome {
        AnalysisOutcome::Skipped => {
            out.push_str("[??] Analysis skipped.\n");
        }
        AnalysisOutcome::Classified { response, label } => {
            out.push_str(response.trim_end());
            out.push_str("\n\n");
            out.push_str(verdict_line(*label));
            out.push('\n');
        }
        AnalysisOutcome::Unavailable(err) => {
            out.push_str(&err.legacy_text());
            out.push_str("\n\n");
            out.push_str("[??] The classifier is unavailable; no verdict could be reached.\n");
        }
    }
    out
}

fn verdict_line(label: FinalLabel) -> &'static str {
    match label {
        FinalLabel::Phishing => "[!!] This website is classified as Phishing.",
        FinalLabel::Legitimate => "[OK] This website is classified as Legitimate.",
        FinalLabel::Uncertain => {
            "[??] Unable to confidently classify the website. Proceed with caution."
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{ai::LlmError, analysis::extract_features};

    fn report(content: PageContent, outcome: AnalysisOutcome) -> AnalysisReport {
        AnalysisReport {
            url: "http://a.b.c.com/x?y=1".into(),
            features: extract_features("http://a.b.c.com/x?y=1"),
            content,
            outcome,
            analyzed_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn classified_report_lists_every_signal() {
        let rendered = render_report(&report(
            PageContent::Fetched("Verify your account".into()),
            AnalysisOutcome::Classified {
                response: "Phishing: urgent language".into(),
                label: FinalLabel::Phishing,
            },
        ));

        assert!(rendered.contains("Analyzed at: 2024-05-01 12:00:00 UTC"));
        assert!(rendered.contains("URL Length: 22\n"));
        assert!(rendered.contains("Special Characters Count: 8\n"));
        assert!(rendered.contains("Dot Count in Domain: 3\n"));
        assert!(rendered.contains("Uses HTTPS: No\n"));
        assert!(rendered.contains("(19 characters)"));
        assert!(rendered.contains("Phishing: urgent language\n"));
        assert!(rendered.ends_with("[!!] This website is classified as Phishing.\n"));
    }

    #[test]
    fn fetch_failure_stops_after_content_section() {
        let rendered = render_report(&report(
            PageContent::FetchFailed("timed out".into()),
            AnalysisOutcome::Skipped,
        ));
        assert!(rendered.ends_with("[!!] Failed to extract website content: timed out\n"));
        assert!(!rendered.contains("== AI Analysis"));
    }

    #[test]
    fn unavailable_model_is_distinct_from_uncertain() {
        let rendered = render_report(&report(
            PageContent::Empty,
            AnalysisOutcome::Unavailable(LlmError::EmptyResponse),
        ));
        assert!(rendered.contains("[OK] No readable content found."));
        assert!(rendered.contains("Error in OpenAI API: response did not contain any message content"));
        assert!(rendered.contains("classifier is unavailable"));
        assert!(!rendered.contains("Proceed with caution"));
    }

    #[test]
    fn uncertain_verdict_gets_a_warning() {
        let rendered = render_report(&report(
            PageContent::Empty,
            AnalysisOutcome::Classified {
                response: "Cannot tell.".into(),
                label: FinalLabel::Uncertain,
            },
        ));
        assert!(rendered.ends_with("Proceed with caution.\n"));
    }
}
