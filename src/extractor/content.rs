//! Body-content extraction.
//!
//! Real-world blog markup is too heterogeneous for a single selector, so this
//! runs an ordered container cascade with length thresholds as a cheap
//! relevance signal, excludes known chrome subtrees (nav, ads, comments) from
//! the read, and degrades through a paragraph aggregation and finally a raw
//! body-text truncation before giving up.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::extractor::model::{ExtractError, normalize_whitespace};

/// Container candidates in priority order: semantic tags and ARIA first, then
/// common content classes, then broad class-substring matches.
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    r#"[role="main"]"#,
    ".post-content",
    ".entry-content",
    ".article-content",
    ".content",
    "main",
    ".post-body",
    ".story-body",
    ".story-content",
    ".article-body",
    ".post",
    ".entry",
    ".story",
    r#"[class*="content"]"#,
    r#"[class*="post"]"#,
    r#"[class*="article"]"#,
];

/// Subtrees that are never article text.
const NOISE_SELECTORS: &[&str] = &[
    "script",
    "style",
    "nav",
    "footer",
    "header",
    ".ad",
    ".advertisement",
    ".social",
    ".share",
    ".comment",
    ".sidebar",
    ".widget",
    ".menu",
];

const MIN_CONTAINER_CHARS: usize = 100;
const MIN_PARAGRAPH_CHARS: usize = 30;
const MIN_CONTENT_CHARS: usize = 50;
const BODY_FALLBACK_MIN_CHARS: usize = 200;
const BODY_FALLBACK_MAX_CHARS: usize = 2000;

static NOISE: Lazy<Vec<Selector>> = Lazy::new(|| {
    NOISE_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("invalid noise selector"))
        .collect()
});

static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());
static BODY: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());

pub(crate) fn resolve_content(doc: &Html) -> Result<String, ExtractError> {
    let raw = match find_container(doc) {
        Some(container) => text_without_noise(container),
        None => paragraph_text(doc),
    };
    let content = normalize_whitespace(&raw);
    if content.chars().count() >= MIN_CONTENT_CHARS {
        return Ok(content);
    }

    // Last resort: the whole body, truncated.
    let body = normalize_whitespace(&body_text(doc));
    if body.chars().count() > BODY_FALLBACK_MIN_CHARS {
        tracing::debug!("no extractable container, using truncated body text");
        return Ok(body.chars().take(BODY_FALLBACK_MAX_CHARS).collect());
    }

    Err(ExtractError::ContentTooShort {
        len: content.chars().count(),
    })
}

/// First candidate whose raw text clears the length threshold. The threshold
/// is checked before noise removal, mirroring how the candidate was judged
/// when the cascade was tuned.
fn find_container(doc: &Html) -> Option<ElementRef<'_>> {
    for selector_str in CONTENT_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(element) = doc.select(&selector).next() {
            let text = element.text().collect::<String>();
            if text.trim().chars().count() > MIN_CONTAINER_CHARS {
                tracing::debug!(selector = selector_str, "content container matched");
                return Some(element);
            }
        }
    }
    None
}

/// Text of the container with noise subtrees skipped entirely.
fn text_without_noise(container: ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_text(container, &mut out);
    out
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for node in element.children() {
        if let Some(child) = ElementRef::wrap(node) {
            if NOISE.iter().any(|selector| selector.matches(&child)) {
                continue;
            }
            collect_text(child, out);
        } else if let Some(text) = node.value().as_text() {
            out.push_str(&text.text);
        }
    }
}

/// Aggregate meaningful paragraphs when no container candidate is usable.
fn paragraph_text(doc: &Html) -> String {
    doc.select(&PARAGRAPH)
        .filter_map(|p| {
            let text = p.text().collect::<String>().trim().to_string();
            (text.chars().count() > MIN_PARAGRAPH_CHARS).then_some(text)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn body_text(doc: &Html) -> String {
    doc.select(&BODY)
        .next()
        .map(|body| body.text().collect::<String>())
        .unwrap_or_default()
}
