//! URL-keyed summary cache.
//!
//! The English and Urdu texts are persisted as one combined field with
//! labeled sections. `combine_summary` and `split_summary` are the only two
//! places that know the literal format; keep them in sync.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::Summary;
use crate::repositories::StoreError;

const TRANSLATION_NOT_AVAILABLE: &str = "Translation not available";

/// Stored format: `"English: {english}\n\nUrdu: {urdu}"`.
pub fn combine_summary(english: &str, urdu: &str) -> String {
    format!("English: {english}\n\nUrdu: {urdu}")
}

/// Split a combined field back into (english, urdu). Splits on the literal
/// `"Urdu:"` and strips a leading `"English:"` label; a missing Urdu section
/// reads as a fixed not-available marker.
pub fn split_summary(combined: &str) -> (String, String) {
    let (head, tail) = match combined.split_once("Urdu:") {
        Some((head, tail)) => (head, Some(tail)),
        None => (combined, None),
    };
    let english = head
        .trim_start()
        .strip_prefix("English:")
        .unwrap_or(head)
        .trim()
        .to_string();
    let urdu = tail
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(TRANSLATION_NOT_AVAILABLE)
        .to_string();
    (english, urdu)
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SummaryStore: Send + Sync {
    /// Exact-URL cache lookup.
    async fn find_by_url(&self, url: &str) -> Result<Option<Summary>, StoreError>;
    /// Write-through after a pipeline run. `combined` is the labeled text
    /// from `combine_summary`.
    async fn insert(&self, url: &str, combined: &str) -> Result<(), StoreError>;
    async fn list_recent(&self, limit: i64) -> Result<Vec<Summary>, StoreError>;
}

#[derive(Clone)]
pub struct SummaryRepository {
    pool: PgPool,
}

impl SummaryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SummaryStore for SummaryRepository {
    async fn find_by_url(&self, url: &str) -> Result<Option<Summary>, StoreError> {
        let summary = sqlx::query_as::<_, Summary>(
            "SELECT id, url, summary, created_at FROM summaries WHERE url = $1",
        )
        .bind(url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(summary)
    }

    async fn insert(&self, url: &str, combined: &str) -> Result<(), StoreError> {
        // No upsert here: the unique index on url makes the loser of a
        // concurrent first-request race fail loudly rather than silently
        // overwrite. See DESIGN.md on the check-then-write race.
        sqlx::query("INSERT INTO summaries (id, url, summary) VALUES ($1, $2, $3)")
            .bind(Uuid::new_v4())
            .bind(url)
            .bind(combined)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Summary>, StoreError> {
        let summaries = sqlx::query_as::<_, Summary>(
            "SELECT id, url, summary, created_at FROM summaries ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(summaries)
    }
}
