//! Endpoint URL normalization.

use std::sync::OnceLock;

use regex::Regex;

const CHAT_COMPLETIONS_SUFFIX: &str = "/chat/completions";

static VERSION_SEGMENT: OnceLock<Regex> = OnceLock::new();

fn version_segment() -> &'static Regex {
    VERSION_SEGMENT.get_or_init(|| {
        Regex::new(r"(?i)/v\d+[a-z0-9]*$").expect("version segment pattern is valid")
    })
}

/// Turn a user-supplied base URL into a full chat-completions endpoint.
///
/// - blank input yields `None`
/// - a missing scheme is filled in with `https://`
/// - `.../chat/completions` is kept as-is
/// - `.../v1` (any version segment) gets `/chat/completions` appended
/// - anything else gets `/v1/chat/completions` appended
pub fn normalize_chat_completions_url(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    let mut url = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    if url.ends_with(CHAT_COMPLETIONS_SUFFIX) {
        return Some(url);
    }
    if !version_segment().is_match(&url) {
        url.push_str("/v1");
    }
    url.push_str(CHAT_COMPLETIONS_SUFFIX);
    Some(url)
}

fn has_http_scheme(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
