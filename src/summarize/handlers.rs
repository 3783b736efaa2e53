use axum::{Json, extract::State};
use tracing::info;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::extractor;
use crate::fetcher::fetch;
use crate::repositories::{NewBlog, combine_summary, split_summary};
use crate::summarize::dtos::{
    RecentSummariesResponse, RecentSummary, SummarizeRequest, SummarizeResponse, SummaryData,
};

const TARGET_LANG: &str = "ur";

/// POST /summarize — cache-aside pipeline.
///
/// Cache check and write-through are not serialized per URL: two concurrent
/// first requests for the same URL can both run the pipeline, and the loser
/// hits the unique index on insert. Documented trade-off, see DESIGN.md.
pub async fn create_summary(
    State(state): State<AppState>,
    Json(payload): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let url = payload.url.trim();
    if url.is_empty() {
        return Err(ApiError::Validation("URL is required".to_string()));
    }

    if let Some(existing) = state.summary_repo.find_by_url(url).await? {
        info!(%url, "cache hit, returning stored summary");
        let (summary, summary_urdu) = split_summary(&existing.summary);
        return Ok(Json(SummarizeResponse {
            success: true,
            data: Some(SummaryData {
                title: format!("Cached Summary from {}", host_of(url)),
                summary,
                summary_urdu,
                blog_id: "cached".to_string(),
            }),
            error: None,
            cached: Some(true),
        }));
    }

    info!(%url, "cache miss, running pipeline");
    let page = fetch(url).await?;
    let doc = extractor::extract(&page.body_utf8)?;
    let lang = extractor::detect_language(&doc.content);

    let blog_id = state
        .blog_repo
        .upsert(&NewBlog::from_extracted(url, &doc, lang))
        .await?;
    let summary = state.summarizer.summarize(&doc.content).await?;
    let summary_urdu = state.translator.translate(&summary, TARGET_LANG).await;

    state
        .summary_repo
        .insert(url, &combine_summary(&summary, &summary_urdu))
        .await?;

    Ok(Json(SummarizeResponse {
        success: true,
        data: Some(SummaryData {
            title: doc.title,
            summary,
            summary_urdu,
            blog_id: blog_id.to_string(),
        }),
        error: None,
        cached: None,
    }))
}

/// GET /summarize — the ten most recent summaries, decomposed.
pub async fn list_summaries(
    State(state): State<AppState>,
) -> Result<Json<RecentSummariesResponse>, ApiError> {
    let rows = state.summary_repo.list_recent(10).await?;

    let data = rows
        .into_iter()
        .map(|row| {
            let (summary, summary_urdu) = split_summary(&row.summary);
            RecentSummary {
                id: row.id,
                title: format!("Summary from {}", host_of(&row.url)),
                original_url: row.url,
                summary,
                summary_urdu,
                created_at: row.created_at,
            }
        })
        .collect();

    Ok(Json(RecentSummariesResponse {
        success: true,
        data,
    }))
}

fn host_of(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::summarizer::MockSummarizer;
    use crate::ai::translator::MockTranslator;
    use crate::entities::Summary;
    use crate::repositories::blogs::MockBlogStore;
    use crate::repositories::summaries::MockSummaryStore;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use chrono::Utc;
    use sqlx::{Pool, Postgres};
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn create_test_pool() -> Pool<Postgres> {
        // Dummy pool; handlers under test never touch it.
        Pool::<Postgres>::connect_lazy("postgresql://dummy").expect("Failed to create test pool")
    }

    fn test_state(
        summary_repo: MockSummaryStore,
        blog_repo: MockBlogStore,
        summarizer: MockSummarizer,
        translator: MockTranslator,
    ) -> AppState {
        AppState {
            blog_repo: Arc::new(blog_repo),
            summary_repo: Arc::new(summary_repo),
            summarizer: Arc::new(summarizer),
            translator: Arc::new(translator),
            db_pool: create_test_pool(),
        }
    }

    fn test_app(state: AppState) -> Router {
        Router::new()
            .route("/summarize", post(create_summary).get(list_summaries))
            .with_state(state)
    }

    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_url_is_400() {
        let state = test_state(
            MockSummaryStore::new(),
            MockBlogStore::new(),
            MockSummarizer::new(),
            MockTranslator::new(),
        );
        let app = test_app(state);

        let request = Request::builder()
            .method("POST")
            .uri("/summarize")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "URL is required");
    }

    #[tokio::test]
    async fn cache_hit_skips_pipeline() {
        let mut summary_repo = MockSummaryStore::new();
        summary_repo
            .expect_find_by_url()
            .withf(|url| url == "https://blog.example.com/post")
            .returning(|url| {
                Ok(Some(Summary {
                    id: Uuid::new_v4(),
                    url: url.to_string(),
                    summary: "English: A\n\nUrdu: ب".to_string(),
                    created_at: Utc::now(),
                }))
            });

        // No expectations on the other collaborators: any call panics the
        // test, proving the fetch/extract/summarize stages were skipped.
        let state = test_state(
            summary_repo,
            MockBlogStore::new(),
            MockSummarizer::new(),
            MockTranslator::new(),
        );
        let app = test_app(state);

        let request = Request::builder()
            .method("POST")
            .uri("/summarize")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"url":"https://blog.example.com/post"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["cached"], true);
        assert_eq!(body["data"]["summary"], "A");
        assert_eq!(body["data"]["summaryUrdu"], "ب");
        assert_eq!(body["data"]["blogId"], "cached");
        assert_eq!(body["data"]["title"], "Cached Summary from blog.example.com");
    }

    #[tokio::test]
    async fn full_pipeline_on_cache_miss() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;
        let article = r#"<html><head><title>Pipeline Post</title></head><body>
<article>
<p>A long enough paragraph of article text so the container cascade accepts this element without falling back.</p>
<p>And a second paragraph to make the extracted body unambiguous in the assertions below.</p>
</article>
</body></html>"#;
        Mock::given(method("GET"))
            .and(path("/post"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(article.as_bytes())
                    .insert_header("Content-Type", "text/html; charset=utf-8"),
            )
            .mount(&mock_server)
            .await;

        let blog_id = Uuid::new_v4();

        let mut summary_repo = MockSummaryStore::new();
        summary_repo.expect_find_by_url().returning(|_| Ok(None));
        summary_repo
            .expect_insert()
            .withf(|_, combined| combined == "English: A concise summary.\n\nUrdu: اردو خلاصہ")
            .returning(|_, _| Ok(()));

        let mut blog_repo = MockBlogStore::new();
        blog_repo
            .expect_upsert()
            .withf(|blog| blog.title == "Pipeline Post")
            .returning(move |_| Ok(blog_id));

        let mut summarizer = MockSummarizer::new();
        summarizer
            .expect_summarize()
            .returning(|_| Ok("A concise summary.".to_string()));

        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .withf(|text, lang| text == "A concise summary." && lang == "ur")
            .returning(|_, _| "اردو خلاصہ".to_string());

        let state = test_state(summary_repo, blog_repo, summarizer, translator);
        let app = test_app(state);

        let url = format!("{}/post", mock_server.uri());
        let request = Request::builder()
            .method("POST")
            .uri("/summarize")
            .header("content-type", "application/json")
            .body(Body::from(format!(r#"{{"url":"{url}"}}"#)))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["success"], true);
        assert!(body.get("cached").is_none());
        assert_eq!(body["data"]["title"], "Pipeline Post");
        assert_eq!(body["data"]["summary"], "A concise summary.");
        assert_eq!(body["data"]["summaryUrdu"], "اردو خلاصہ");
        assert_eq!(body["data"]["blogId"], blog_id.to_string());
    }

    #[tokio::test]
    async fn fetch_failure_is_500() {
        let mut summary_repo = MockSummaryStore::new();
        summary_repo.expect_find_by_url().returning(|_| Ok(None));

        let state = test_state(
            summary_repo,
            MockBlogStore::new(),
            MockSummarizer::new(),
            MockTranslator::new(),
        );
        let app = test_app(state);

        let request = Request::builder()
            .method("POST")
            .uri("/summarize")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"url":"not a url at all"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_json(response).await;
        assert_eq!(body["success"], false);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("failed to fetch blog content")
        );
    }

    #[tokio::test]
    async fn recent_summaries_are_decomposed() {
        let mut summary_repo = MockSummaryStore::new();
        summary_repo.expect_list_recent().returning(|limit| {
            assert_eq!(limit, 10);
            Ok(vec![
                Summary {
                    id: Uuid::new_v4(),
                    url: "https://a.example.com/one".to_string(),
                    summary: "English: first\n\nUrdu: پہلا".to_string(),
                    created_at: Utc::now(),
                },
                Summary {
                    id: Uuid::new_v4(),
                    url: "https://b.example.com/two".to_string(),
                    summary: "unlabeled legacy row".to_string(),
                    created_at: Utc::now(),
                },
            ])
        });

        let state = test_state(
            summary_repo,
            MockBlogStore::new(),
            MockSummarizer::new(),
            MockTranslator::new(),
        );
        let app = test_app(state);

        let request = Request::builder()
            .method("GET")
            .uri("/summarize")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["success"], true);
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["title"], "Summary from a.example.com");
        assert_eq!(data[0]["summary"], "first");
        assert_eq!(data[0]["summaryUrdu"], "پہلا");
        assert_eq!(data[1]["summary"], "unlabeled legacy row");
        assert_eq!(data[1]["summaryUrdu"], "Translation not available");
    }
}
