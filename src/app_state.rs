use crate::ai::{HfSummarizer, MyMemoryTranslator, Summarizer, Translator};
use crate::config::Config;
use crate::repositories::{BlogRepository, BlogStore, SummaryRepository, SummaryStore};
use sqlx::{Pool, Postgres};
use std::sync::Arc;

/// Shared per-process state, constructed once at startup and injected into
/// handlers. The pool is the only connection handle in the process; there is
/// no lazy singleton behind it.
#[derive(Clone)]
pub struct AppState {
    pub blog_repo: Arc<dyn BlogStore>,
    pub summary_repo: Arc<dyn SummaryStore>,
    pub summarizer: Arc<dyn Summarizer>,
    pub translator: Arc<dyn Translator>,
    pub db_pool: Pool<Postgres>,
}

impl AppState {
    pub fn new(pool: Pool<Postgres>, config: &Config) -> Self {
        Self {
            blog_repo: Arc::new(BlogRepository::new(pool.clone())),
            summary_repo: Arc::new(SummaryRepository::new(pool.clone())),
            summarizer: Arc::new(HfSummarizer::new(
                config.summarizer_url(),
                config.summarizer_api_key(),
            )),
            translator: Arc::new(MyMemoryTranslator::new(config.translator_url())),
            db_pool: pool,
        }
    }
}
