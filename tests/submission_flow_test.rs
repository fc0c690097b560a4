//! Integration tests for the submission flow
//!
//! Each test drives the dashboard model through begin → execute → complete
//! against a mocked verification service.

use std::io::Write;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use factdash::api::VerifyClient;
use factdash::classifier::UnavailableImageClassifier;
use factdash::logic::errors::SubmitError;
use factdash::model::{Completion, DashboardModel, Submission, TagCount};
use factdash::services::api::execute_request;

// ============================================================================
// Helpers
// ============================================================================

fn client_for(server: &MockServer) -> VerifyClient {
    VerifyClient::new(format!("{}/process", server.uri()), None)
}

/// Run one submission the way the dashboard does
async fn submit(
    model: &mut DashboardModel,
    client: &VerifyClient,
    submission: Submission,
) -> Result<Completion, SubmitError> {
    let seq = model.begin_submission(&submission)?;
    let outcome = execute_request(client, &UnavailableImageClassifier, &submission).await;
    Ok(model.complete_submission(seq, outcome))
}

fn text_body(verdict: bool, confidence: f64, reason: &str, tag: &str) -> serde_json::Value {
    json!({ "result": [verdict, confidence, reason, [tag]] })
}

fn video_fixture() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".mp4")
        .tempfile()
        .expect("create temp video");
    file.write_all(b"\x00\x00\x00\x18ftypmp42fake-video-bytes")
        .expect("write temp video");
    file
}

// ============================================================================
// Text path
// ============================================================================

#[tokio::test]
async fn test_text_submission_populates_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .and(body_json(json!({ "query": "The Eiffel Tower is in Paris" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body(
            true,
            91.0,
            "Confirmed by 4 sources",
            "geography",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let mut model = DashboardModel::default();
    let completion = submit(
        &mut model,
        &client_for(&server),
        Submission::text("The Eiffel Tower is in Paris"),
    )
    .await
    .unwrap();

    assert_eq!(completion, Completion::Applied);
    let current = model.current.as_ref().expect("result set");
    assert!(current.result);
    assert_eq!(current.confidence, 91.0);
    assert_eq!(current.reason_to_trust.as_deref(), Some("Confirmed by 4 sources"));
    assert_eq!(current.source.as_deref(), Some("https://example.com/fact-check"));
    assert!(!model.processing);
    assert!(model.expanded);
    assert_eq!(model.history.len(), 1);
    assert_eq!(
        model.tags,
        vec![TagCount {
            tag: "geography".to_string(),
            count: 1
        }]
    );
}

#[tokio::test]
async fn test_knowledge_graph_answer_forces_confidence_100() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body(
            true,
            3.5,
            "Retrieved from knowledge graph",
            "science",
        )))
        .mount(&server)
        .await;

    let mut model = DashboardModel::default();
    submit(&mut model, &client_for(&server), Submission::text("Water boils at 100C"))
        .await
        .unwrap();

    assert_eq!(model.current.as_ref().unwrap().confidence, 100.0);
}

#[tokio::test]
async fn test_repeated_tag_counts_once_per_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body(
            false,
            60.0,
            "Contradicted by sources",
            "misinformation",
        )))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut model = DashboardModel::default();
    submit(&mut model, &client, Submission::text("claim one")).await.unwrap();
    submit(&mut model, &client, Submission::text("claim two")).await.unwrap();

    assert_eq!(
        model.tags,
        vec![TagCount {
            tag: "misinformation".to_string(),
            count: 2
        }]
    );
}

#[tokio::test]
async fn test_history_capped_at_five_most_recent_first() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(text_body(true, 50.0, "Search", "misc")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut model = DashboardModel::default();
    for i in 0..8 {
        submit(&mut model, &client, Submission::text(format!("claim {}", i)))
            .await
            .unwrap();
        assert!(model.history.len() <= 5);
    }

    let queries: Vec<&str> = model.history.iter().map(|r| r.query.as_str()).collect();
    assert_eq!(
        queries,
        vec!["claim 7", "claim 6", "claim 5", "claim 4", "claim 3"]
    );
}

#[tokio::test]
async fn test_text_response_without_tags_records_result_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "result": [true, 70, "Search", []] })),
        )
        .mount(&server)
        .await;

    let mut model = DashboardModel::default();
    submit(&mut model, &client_for(&server), Submission::text("q"))
        .await
        .unwrap();

    assert!(model.current.is_some());
    assert!(model.tags.is_empty());
}

// ============================================================================
// Video path
// ============================================================================

#[tokio::test]
async fn test_video_real_label() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .and(body_string_contains("name=\"video\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deepfake_result": { "label": "Real", "probability": 0.87 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let video = video_fixture();
    let mut model = DashboardModel::default();
    submit(
        &mut model,
        &client_for(&server),
        Submission::video("interview clip", Some(video.path().to_path_buf())),
    )
    .await
    .unwrap();

    let current = model.current.as_ref().expect("result set");
    assert!(current.result);
    assert!((current.confidence - 87.0).abs() < 1e-9);
    assert_eq!(current.source.as_deref(), Some("Deepfake Model"));
    assert!(model.tags.is_empty(), "video results never touch tags");
}

#[tokio::test]
async fn test_video_deepfake_label() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deepfake_result": { "label": "Deepfake", "probability": 0.2 }
        })))
        .mount(&server)
        .await;

    let video = video_fixture();
    let mut model = DashboardModel::default();
    submit(
        &mut model,
        &client_for(&server),
        Submission::video("clip", Some(video.path().to_path_buf())),
    )
    .await
    .unwrap();

    let current = model.current.as_ref().unwrap();
    assert!(!current.result);
    assert!((current.confidence - 20.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_video_without_file_never_contacts_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut model = DashboardModel::default();
    let result = submit(&mut model, &client_for(&server), Submission::video("clip", None)).await;

    assert_eq!(result, Err(SubmitError::MissingFile));
    assert!(!model.processing);
    assert!(model.current.is_none());
    assert!(model.history.is_empty());
    // MockServer verifies expect(0) on drop
}

#[tokio::test]
async fn test_unreadable_video_file_is_reported() {
    let server = MockServer::start().await;
    let mut model = DashboardModel::default();

    let completion = submit(
        &mut model,
        &client_for(&server),
        Submission::video("clip", Some("/definitely/missing/clip.mp4".into())),
    )
    .await
    .unwrap();

    assert_eq!(completion, Completion::Failed);
    assert!(matches!(model.last_error, Some(SubmitError::File { .. })));
    assert!(!model.processing);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_server_error_leaves_current_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({ "query": "good" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(text_body(true, 80.0, "Search", "misc")),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_json(json!({ "query": "bad" })))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut model = DashboardModel::default();
    submit(&mut model, &client, Submission::text("good")).await.unwrap();
    let completion = submit(&mut model, &client, Submission::text("bad")).await.unwrap();

    assert_eq!(completion, Completion::Failed);
    assert_eq!(model.current.as_ref().unwrap().query, "good");
    assert_eq!(model.history.len(), 1);
    assert_eq!(model.last_error, Some(SubmitError::Status(500)));
    assert!(!model.processing);
}

#[tokio::test]
async fn test_malformed_response_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": [true] })))
        .mount(&server)
        .await;

    let mut model = DashboardModel::default();
    submit(&mut model, &client_for(&server), Submission::text("q"))
        .await
        .unwrap();

    assert!(matches!(model.last_error, Some(SubmitError::Decode(_))));
    assert!(model.current.is_none());
    assert!(model.tags.is_empty());
}

#[tokio::test]
async fn test_unreachable_service_clears_processing() {
    // Nothing listens on port 1
    let client = VerifyClient::new("http://127.0.0.1:1/process".to_string(), None);
    let mut model = DashboardModel::default();

    let completion = submit(&mut model, &client, Submission::text("q")).await.unwrap();

    assert_eq!(completion, Completion::Failed);
    assert!(model.current.is_none());
    assert!(!model.processing);
    assert!(model.last_error.is_some());
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(text_body(true, 80.0, "Search", "misc"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = VerifyClient::new(
        format!("{}/process", server.uri()),
        Some(Duration::from_millis(100)),
    );
    let mut model = DashboardModel::default();

    let completion = submit(&mut model, &client, Submission::text("q")).await.unwrap();

    assert_eq!(completion, Completion::Failed);
    assert_eq!(model.last_error, Some(SubmitError::Timeout));
    assert!(model.current.is_none());
    assert!(!model.processing);
}
