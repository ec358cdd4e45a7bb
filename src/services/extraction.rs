//! Pulling a JSON object out of free-form model output.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use crate::error::{PlannerError, Result};

fn fenced_json_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)```json[ \t]*\r?\n(.*?)\r?\n[ \t]*```").expect("fence pattern compiles")
    })
}

/// Locate the JSON text inside a model response.
///
/// Prefers the body of a ```` ```json ```` fenced block; otherwise takes the
/// span from the first `{` to the last `}`.
pub fn extract_json_block(text: &str) -> Option<&str> {
    if let Some(captures) = fenced_json_pattern().captures(text) {
        return captures.get(1).map(|body| body.as_str());
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Extract and parse the JSON object in a model response.
pub fn parse_json_payload(text: &str) -> Result<Value> {
    let block = extract_json_block(text).ok_or(PlannerError::NoJsonFound)?;
    Ok(serde_json::from_str(block)?)
}

/// Shorten raw service text for log output.
pub(crate) fn truncate_for_log(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
