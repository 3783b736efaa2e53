use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    /// Defaulted so an absent field reaches the handler's own validation
    /// (400) instead of axum's deserialization rejection.
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<SummaryData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryData {
    pub title: String,
    pub summary: String,
    pub summary_urdu: String,
    pub blog_id: String,
}

#[derive(Debug, Serialize)]
pub struct RecentSummariesResponse {
    pub success: bool,
    pub data: Vec<RecentSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSummary {
    pub id: Uuid,
    pub original_url: String,
    pub title: String,
    pub summary: String,
    pub summary_urdu: String,
    pub created_at: DateTime<Utc>,
}
