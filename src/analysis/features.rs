use crate::domain::UrlFeatures;

const SPECIAL_CHARS: [char; 10] = ['@', '?', '-', '=', '.', '_', '&', '~', '%', '/'];

#[derive(Debug, Default, PartialEq, Eq)]
struct UrlParts {
    scheme: String,
    netloc: String,
}

/// Structural metrics of a URL. Never fails; unparsable input degrades to
/// empty scheme and network location.
///
/// The domain is taken as typed: no IP, percent or IDNA normalization, so
/// obfuscated hosts keep their shape.
pub fn extract_features(raw_url: &str) -> UrlFeatures {
    let parts = split_url(raw_url);

    UrlFeatures {
        length: raw_url.chars().count(),
        special_char_count: raw_url
            .chars()
            .filter(|ch| SPECIAL_CHARS.contains(ch))
            .count(),
        domain_dot_count: parts.netloc.matches('.').count(),
        uses_https: parts.scheme == "https",
    }
}

// Generic `scheme:[//netloc]path` split. Surrounding blanks and embedded
// tab/CR/LF are ignored, as generic URL splitters do.
fn split_url(raw_url: &str) -> UrlParts {
    let cleaned: String = raw_url
        .trim_matches(|ch: char| ch <= ' ')
        .chars()
        .filter(|ch| !matches!(ch, '\t' | '\r' | '\n'))
        .collect();

    let (scheme, rest) = match cleaned.split_once(':') {
        Some((candidate, rest)) if is_scheme(candidate) => (candidate.to_ascii_lowercase(), rest),
        _ => (String::new(), cleaned.as_str()),
    };

    let netloc = rest
        .strip_prefix("//")
        .map(|after| {
            let end = after.find(&['/', '?', '#'][..]).unwrap_or(after.len());
            after[..end].to_string()
        })
        .unwrap_or_default();

    UrlParts { scheme, netloc }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'))
        }
        _ => false,
    }
}
