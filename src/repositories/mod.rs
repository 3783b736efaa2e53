pub mod blogs;
pub mod summaries;

pub use blogs::{BlogRepository, BlogStore, NewBlog};
pub use summaries::{SummaryRepository, SummaryStore, combine_summary, split_summary};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
