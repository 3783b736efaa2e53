//! Document store for full article text, one row per URL.

use async_trait::async_trait;
use md5::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::extractor::ExtractedDocument;
use crate::repositories::StoreError;

/// What the pipeline hands to the store: the extracted fields plus the
/// request URL and detected language.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub url: String,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub published_date: Option<String>,
    pub lang: Option<String>,
}

impl NewBlog {
    pub fn from_extracted(url: &str, doc: &ExtractedDocument, lang: Option<String>) -> Self {
        Self {
            url: url.to_string(),
            title: doc.title.clone(),
            content: doc.content.clone(),
            author: doc.author.clone(),
            published_date: doc.published_date.clone(),
            lang,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogStore: Send + Sync {
    async fn upsert(&self, blog: &NewBlog) -> Result<Uuid, StoreError>;
}

#[derive(Clone)]
pub struct BlogRepository {
    pool: PgPool,
}

impl BlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// MD5 over the extracted fields; used to skip writes when a re-run
    /// produced identical content.
    fn compute_checksum(blog: &NewBlog) -> String {
        let mut hasher = Context::new();
        hasher.consume(blog.title.as_bytes());
        hasher.consume(blog.content.as_bytes());
        format!("{:x}", hasher.compute())
    }
}

#[async_trait]
impl BlogStore for BlogRepository {
    async fn upsert(&self, blog: &NewBlog) -> Result<Uuid, StoreError> {
        let checksum = Self::compute_checksum(blog);

        // No-op when the stored content is identical.
        let existing =
            sqlx::query_as::<_, (Uuid, String)>("SELECT id, checksum FROM blogs WHERE url = $1")
                .bind(&blog.url)
                .fetch_optional(&self.pool)
                .await?;

        if let Some((id, existing_checksum)) = existing
            && existing_checksum == checksum
        {
            return Ok(id);
        }

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO blogs (id, url, title, content, author, published_date, lang, checksum)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (url) DO UPDATE
              SET title          = EXCLUDED.title,
                  content        = EXCLUDED.content,
                  author         = EXCLUDED.author,
                  published_date = EXCLUDED.published_date,
                  lang           = EXCLUDED.lang,
                  checksum       = EXCLUDED.checksum
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&blog.url)
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(&blog.author)
        .bind(&blog.published_date)
        .bind(&blog.lang)
        .bind(&checksum)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}
