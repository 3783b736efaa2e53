use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Readable article text recovered from one HTML document. Built fresh per
/// extraction call and never mutated afterwards; extracting the same input
/// twice yields identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub published_date: Option<String>,
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("content too short ({len} chars)")]
    ContentTooShort { len: usize },
}

static SPACE_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static BLANK_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n+").unwrap());

/// Collapse space runs to one space and blank-line runs to one blank line.
pub fn normalize_whitespace(text: &str) -> String {
    let text = text.trim();
    let spaced = SPACE_RUN_REGEX.replace_all(text, " ");
    BLANK_LINE_REGEX.replace_all(&spaced, "\n\n").to_string()
}
