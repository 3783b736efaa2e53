use thiserror::Error;

/// Failures from the text-generation upstream. Classified so callers can tell
/// a transient condition (model still loading, rate limit) from a dead end.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("summarization request timed out")]
    Timeout,

    #[error("model is loading upstream, retry shortly")]
    ModelLoading,

    #[error("rate limited by upstream")]
    RateLimited,

    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    #[error("upstream returned no usable text")]
    EmptyResponse,

    #[error("upstream error {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
}

impl UpstreamError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Unreachable(err.to_string())
        }
    }

    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            503 => Self::ModelLoading,
            429 => Self::RateLimited,
            _ => Self::Api { status, message },
        }
    }
}
