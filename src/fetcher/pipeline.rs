//! Charset resolution and decoding for fetched pages.
//!
//! Blog hosts lie about encodings often enough that the Content-Type header
//! alone is not trustworthy. Resolution order: header charset, `<meta>`
//! charset in the first 4KB, then chardetng's statistical guess.

use crate::fetcher::errors::FetchError;
use encoding_rs::Encoding;
use regex::Regex;
use std::sync::LazyLock;

static HEADER_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

/// Decode a raw body to UTF-8 using the resolved charset.
pub fn decode_body(content_type: &str, body_bytes: &[u8]) -> Result<String, FetchError> {
    let encoding = resolve_encoding(content_type, body_bytes);
    let (decoded, _encoding, had_errors) = encoding.decode(body_bytes);

    if had_errors {
        return Err(FetchError::Charset(format!(
            "failed to decode body as {}",
            encoding.name()
        )));
    }

    Ok(decoded.into_owned())
}

fn resolve_encoding(content_type: &str, body_bytes: &[u8]) -> &'static Encoding {
    if let Some(encoding) = encoding_from_capture(&HEADER_CHARSET_REGEX, content_type) {
        return encoding;
    }

    // Meta tags only need the document prologue.
    let head = &body_bytes[..body_bytes.len().min(4096)];
    let head_str = String::from_utf8_lossy(head);
    if let Some(encoding) = encoding_from_capture(&META_CHARSET_REGEX, &head_str) {
        return encoding;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, false);
    detector.guess(None, true)
}

fn encoding_from_capture(regex: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = regex.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}
