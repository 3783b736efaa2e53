pub mod errors;
pub mod summarizer;
pub mod translator;

pub use errors::UpstreamError;
pub use summarizer::{HfSummarizer, Summarizer};
pub use translator::{MyMemoryTranslator, Translator};
