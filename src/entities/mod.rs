use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Full article text as recovered by the extractor, one row per URL.
#[derive(Debug, Clone, FromRow)]
pub struct Blog {
    pub id: Uuid,
    pub url: String,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub published_date: Option<String>,
    pub lang: Option<String>,
    pub checksum: String,
    pub created_at: DateTime<Utc>,
}

/// Cached summary, one row per URL. `summary` holds the combined
/// "English: ...\n\nUrdu: ..." text; see `repositories::summaries` for the
/// encode/split helpers.
#[derive(Debug, Clone, FromRow)]
pub struct Summary {
    pub id: Uuid,
    pub url: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}
