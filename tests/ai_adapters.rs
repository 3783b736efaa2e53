use khulasa::ai::{
    HfSummarizer, MyMemoryTranslator, Summarizer, Translator, UpstreamError,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn summarizer_for(server: &MockServer) -> HfSummarizer {
    HfSummarizer::new(format!("{}/models/test", server.uri()), "test-key")
}

fn translator_for(server: &MockServer) -> MyMemoryTranslator {
    MyMemoryTranslator::new(format!("{}/get", server.uri()))
}

#[tokio::test]
async fn summarize_happy_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/test"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"summary_text": "  A tidy summary.  "}])),
        )
        .mount(&server)
        .await;

    let summary = summarizer_for(&server)
        .summarize("a long article body")
        .await
        .unwrap();
    assert_eq!(summary, "A tidy summary.");
}

#[tokio::test]
async fn summarize_accepts_generated_text_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/test"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"generated_text": "Alt field."}])),
        )
        .mount(&server)
        .await;

    let summary = summarizer_for(&server).summarize("text").await.unwrap();
    assert_eq!(summary, "Alt field.");
}

#[tokio::test]
async fn summarize_503_is_model_loading() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/test"))
        .respond_with(ResponseTemplate::new(503).set_body_string("loading"))
        .mount(&server)
        .await;

    match summarizer_for(&server).summarize("text").await {
        Err(UpstreamError::ModelLoading) => {}
        other => panic!("expected ModelLoading, got {other:?}"),
    }
}

#[tokio::test]
async fn summarize_429_is_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/test"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    match summarizer_for(&server).summarize("text").await {
        Err(UpstreamError::RateLimited) => {}
        other => panic!("expected RateLimited, got {other:?}"),
    }
}

#[tokio::test]
async fn summarize_other_status_carries_details() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/test"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    match summarizer_for(&server).summarize("text").await {
        Err(UpstreamError::Api { status, message }) => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(message, "bad key");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn summarize_empty_output_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    match summarizer_for(&server).summarize("text").await {
        Err(UpstreamError::EmptyResponse) => {}
        other => panic!("expected EmptyResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn summarize_blank_text_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"summary_text": "   "}])))
        .mount(&server)
        .await;

    match summarizer_for(&server).summarize("text").await {
        Err(UpstreamError::EmptyResponse) => {}
        other => panic!("expected EmptyResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn summarize_unreachable_host() {
    // Port 9 is discard; nothing is listening there.
    let summarizer = HfSummarizer::new("http://127.0.0.1:9/models/test", "key");
    match summarizer.summarize("text").await {
        Err(UpstreamError::Unreachable(_)) | Err(UpstreamError::Timeout) => {}
        other => panic!("expected Unreachable or Timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn translate_happy_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .and(query_param("langpair", "en|ur"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseData": {"translatedText": "اردو متن"}
        })))
        .mount(&server)
        .await;

    let translated = translator_for(&server).translate("English text", "ur").await;
    assert_eq!(translated, "اردو متن");
}

#[tokio::test]
async fn translate_outage_degrades_to_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let source = "An English summary that must survive verbatim.";
    let translated = translator_for(&server).translate(source, "ur").await;
    assert!(translated.contains(source));
    assert!(translated.contains("temporarily unavailable"));
}

#[tokio::test]
async fn translate_empty_body_degrades_to_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"responseData": {}})))
        .mount(&server)
        .await;

    let source = "Summary text.";
    let translated = translator_for(&server).translate(source, "ur").await;
    assert!(translated.contains(source));
}
