//! The content-extraction heuristic pipeline: HTML in, structured article
//! text out. Pure — each call is a function of the input string and the
//! static selector cascades, with no I/O and no shared state.

pub mod cascade;
pub mod content;
pub mod language;
pub mod model;


pub use language::detect_language;
pub use model::{ExtractError, ExtractedDocument};

use scraper::Html;

pub fn extract(html: &str) -> Result<ExtractedDocument, ExtractError> {
    let doc = Html::parse_document(html);

    let title = cascade::resolve_title(&doc);
    let content = content::resolve_content(&doc)?;
    let author = cascade::resolve_author(&doc);
    let published_date = cascade::resolve_date(&doc);

    Ok(ExtractedDocument {
        title,
        content,
        author,
        published_date,
    })
}
