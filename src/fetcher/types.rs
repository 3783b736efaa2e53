use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use url::Url;

/// A fetched page, already decoded to UTF-8.
#[derive(Debug)]
pub struct PageResponse {
    /// URL after following redirects.
    pub url_final: Url,
    pub status: StatusCode,
    /// Decoded document body. The wire charset is resolved in
    /// `pipeline::decode_body` and not carried further; everything past the
    /// fetcher works on UTF-8 strings.
    pub body_utf8: String,
    pub fetched_at: DateTime<Utc>,
}
