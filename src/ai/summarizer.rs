//! Summarization adapter for a HuggingFace-inference-shaped endpoint.

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ai::errors::UpstreamError;

const SUMMARIZE_TIMEOUT: Duration = Duration::from_secs(60);

/// The model has a hard input budget; overflow is cut, not summarized.
const MAX_INPUT_CHARS: usize = 1000;
const TRUNCATION_MARKER: &str = "...";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, UpstreamError>;
}

#[derive(Serialize)]
struct InferenceRequest {
    inputs: String,
    parameters: InferenceParameters,
}

#[derive(Serialize)]
struct InferenceParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

#[derive(Deserialize)]
struct InferenceOutput {
    #[serde(default)]
    summary_text: Option<String>,
    #[serde(default)]
    generated_text: Option<String>,
}

pub struct HfSummarizer {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HfSummarizer {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = ClientBuilder::new()
            .timeout(SUMMARIZE_TIMEOUT)
            .build()
            .expect("Failed to build summarizer HTTP client");
        Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }
}

/// Hard-truncate to the model's character budget, marking the cut.
pub fn truncate_input(text: &str) -> String {
    if text.chars().count() <= MAX_INPUT_CHARS {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(MAX_INPUT_CHARS).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

#[async_trait]
impl Summarizer for HfSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, UpstreamError> {
        let request = InferenceRequest {
            inputs: truncate_input(text),
            parameters: InferenceParameters {
                max_length: 150,
                min_length: 50,
                do_sample: false,
            },
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(UpstreamError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(UpstreamError::from_status(status, message));
        }

        let outputs: Vec<InferenceOutput> = response
            .json()
            .await
            .map_err(|_| UpstreamError::EmptyResponse)?;

        let summary = outputs
            .first()
            .and_then(|o| o.summary_text.clone().or_else(|| o.generated_text.clone()))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(UpstreamError::EmptyResponse)?;

        tracing::debug!(chars = summary.len(), "summary generated");
        Ok(summary)
    }
}
