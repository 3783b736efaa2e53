//! Selector cascades for the single-value fields (title, author, date).
//!
//! Each field is an ordered list of rules tried until one yields a non-empty
//! value. A rule is a CSS selector plus a read strategy: attribute-read rules
//! try named attributes in order before falling back to the element text,
//! text-read rules take the trimmed text directly. Only the first element
//! matching a rule's selector is considered.

use scraper::{Html, Selector};

pub(crate) enum Rule {
    /// Try each attribute in order, then fall back to the element text.
    Attr(&'static str, &'static [&'static str]),
    /// Read the trimmed text content of the element.
    Text(&'static str),
}

const TITLE_RULES: &[Rule] = &[
    Rule::Text("title"),
    Rule::Text("h1"),
    Rule::Attr(r#"[property="og:title"]"#, &["content"]),
    Rule::Attr(r#"[name="twitter:title"]"#, &["content"]),
    Rule::Text(".post-title"),
    Rule::Text(".entry-title"),
    Rule::Text(".article-title"),
    Rule::Text(".story-title"),
];

const AUTHOR_RULES: &[Rule] = &[
    Rule::Attr(r#"[rel="author"]"#, &["content"]),
    Rule::Attr(".author", &["content"]),
    Rule::Attr(".byline", &["content"]),
    Rule::Attr(r#"[property="article:author"]"#, &["content"]),
    Rule::Attr(".post-author", &["content"]),
    Rule::Attr(".story-author", &["content"]),
    Rule::Attr(r#"[class*="author"]"#, &["content"]),
    Rule::Attr(r#"[name="author"]"#, &["content"]),
];

const DATE_RULES: &[Rule] = &[
    Rule::Attr(r#"[property="article:published_time"]"#, &["datetime", "content"]),
    Rule::Attr(r#"[property="article:modified_time"]"#, &["datetime", "content"]),
    Rule::Attr("time[datetime]", &["datetime", "content"]),
    Rule::Attr(".published", &["datetime", "content"]),
    Rule::Attr(".date", &["datetime", "content"]),
    Rule::Attr(".post-date", &["datetime", "content"]),
    Rule::Attr(".story-date", &["datetime", "content"]),
    Rule::Attr(r#"[class*="date"]"#, &["datetime", "content"]),
];

impl Rule {
    fn evaluate(&self, doc: &Html) -> Option<String> {
        let (selector_str, attrs): (&str, &[&str]) = match self {
            Rule::Attr(selector, attrs) => (selector, attrs),
            Rule::Text(selector) => (selector, &[]),
        };
        let selector = Selector::parse(selector_str).ok()?;
        let element = doc.select(&selector).next()?;

        for attr in attrs {
            if let Some(value) = element.value().attr(attr) {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }

        let text = element.text().collect::<String>().trim().to_string();
        (!text.is_empty()).then_some(text)
    }
}

fn first_match(doc: &Html, rules: &[Rule]) -> Option<String> {
    rules.iter().find_map(|rule| rule.evaluate(doc))
}

pub(crate) fn resolve_title(doc: &Html) -> String {
    first_match(doc, TITLE_RULES).unwrap_or_else(|| "Untitled".to_string())
}

pub(crate) fn resolve_author(doc: &Html) -> Option<String> {
    first_match(doc, AUTHOR_RULES)
}

pub(crate) fn resolve_date(doc: &Html) -> Option<String> {
    first_match(doc, DATE_RULES)
}
