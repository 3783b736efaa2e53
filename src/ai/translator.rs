//! Translation adapter for a MyMemory-shaped endpoint.
//!
//! Deliberately asymmetric with the summarizer: a translation outage degrades
//! the output to a clearly-marked placeholder embedding the English text, so
//! the pipeline always completes with best-effort output. Summarization
//! failures, by contrast, fail the whole request.

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use std::time::Duration;

use crate::ai::errors::UpstreamError;

const TRANSLATE_TIMEOUT: Duration = Duration::from_secs(20);

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Never fails: sustained upstream failure yields a placeholder that
    /// embeds `text` verbatim.
    async fn translate(&self, text: &str, target_lang: &str) -> String;
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

pub struct MyMemoryTranslator {
    client: Client,
    api_url: String,
}

impl MyMemoryTranslator {
    pub fn new(api_url: impl Into<String>) -> Self {
        let client = ClientBuilder::new()
            .timeout(TRANSLATE_TIMEOUT)
            .build()
            .expect("Failed to build translator HTTP client");
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    async fn request_translation(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<String, UpstreamError> {
        let langpair = format!("en|{target_lang}");
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await
            .map_err(UpstreamError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(UpstreamError::from_status(status, message));
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|_| UpstreamError::EmptyResponse)?;

        body.response_data
            .and_then(|d| d.translated_text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(UpstreamError::EmptyResponse)
    }
}

/// Placeholder returned when translation is unavailable. Embeds the source
/// text verbatim so the caller still gets the full summary.
pub fn translation_placeholder(text: &str) -> String {
    format!(
        "[اردو ترجمہ - Urdu Translation]\n\n{text}\n\n[Note: Automatic translation services are temporarily unavailable. The above English text would be translated to Urdu.]"
    )
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> String {
        match self.request_translation(text, target_lang).await {
            Ok(translated) => translated,
            Err(err) => {
                tracing::warn!(error = %err, "translation failed, using placeholder");
                translation_placeholder(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_embeds_source_verbatim() {
        let text = "An English summary of the article.";
        let placeholder = translation_placeholder(text);
        assert!(placeholder.contains(text));
        assert!(placeholder.contains("اردو ترجمہ"));
    }
}
