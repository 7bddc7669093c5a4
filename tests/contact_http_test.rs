use brand_site::{
    BackendConfig, ContactSubmissionFlow, FormState, ReqwestTransport, SubmissionResult,
    SubmitEvent, SubmitOutcome,
};
use httpmock::prelude::*;
use serde_json::json;

fn filled_form() -> FormState {
    FormState {
        name: "Priya S.".to_string(),
        email: "priya@example.com".to_string(),
        subject: String::new(),
        message: "We need a new landing page.".to_string(),
    }
}

fn flow_for(base_url: String) -> ContactSubmissionFlow<ReqwestTransport> {
    let mut flow = ContactSubmissionFlow::new(ReqwestTransport::new(), &BackendConfig::new(base_url));
    flow.fill(filled_form());
    flow
}

/// 成功送出後表單應被清空
#[tokio::test]
async fn test_successful_submission_posts_json_and_clears_form() {
    let server = MockServer::start_async().await;

    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/contact")
                .header("content-type", "application/json")
                .json_body(json!({
                    "name": "Priya S.",
                    "email": "priya@example.com",
                    "subject": "",
                    "message": "We need a new landing page."
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({}));
        })
        .await;

    let mut flow = flow_for(server.base_url());
    let outcome = flow.submit(&mut SubmitEvent::new()).await;

    api_mock.assert_async().await;
    assert_eq!(outcome, SubmitOutcome::Accepted(SubmissionResult::success()));
    assert_eq!(flow.form(), &FormState::default());
    assert!(!flow.is_submitting());
}

#[tokio::test]
async fn test_rejection_detail_is_shown_and_form_kept() {
    let server = MockServer::start_async().await;

    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(400).json_body(json!({ "detail": "Invalid email" }));
        })
        .await;

    let mut flow = flow_for(server.base_url());
    flow.submit(&mut SubmitEvent::new()).await;

    api_mock.assert_async().await;
    assert_eq!(flow.result(), Some(&SubmissionResult::failure("Invalid email")));
    assert_eq!(flow.form(), &filled_form());
}

#[tokio::test]
async fn test_rejection_without_detail_uses_fallback_message() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(500).json_body(json!({}));
        })
        .await;

    let mut flow = flow_for(server.base_url());
    flow.submit(&mut SubmitEvent::new()).await;

    assert_eq!(flow.result(), Some(&SubmissionResult::failure("Submission failed")));
    assert_eq!(flow.form(), &filled_form());
}

#[tokio::test]
async fn test_non_json_body_is_a_parse_failure() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(502).body("<html>Bad Gateway</html>");
        })
        .await;

    let mut flow = flow_for(server.base_url());
    flow.submit(&mut SubmitEvent::new()).await;

    let result = flow.result().unwrap();
    assert!(!result.ok);
    assert_ne!(result.message, "Submission failed");
    assert!(!result.message.is_empty());
    assert_eq!(flow.form(), &filled_form());
}

#[tokio::test]
async fn test_unreachable_backend_reports_transport_error() {
    // 沒有服務在監聽的埠
    let mut flow = flow_for("http://127.0.0.1:9".to_string());
    flow.submit(&mut SubmitEvent::new()).await;

    let result = flow.result().unwrap();
    assert!(!result.ok);
    assert!(!result.message.is_empty());
    assert_ne!(result.message, "Submission failed");
    assert_eq!(flow.form(), &filled_form());
    assert!(!flow.is_submitting());
}

#[tokio::test]
async fn test_failure_then_success_shows_only_latest_result() {
    let server = MockServer::start_async().await;

    let mut reject = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(400).json_body(json!({ "detail": "Invalid email" }));
        })
        .await;

    let mut flow = flow_for(server.base_url());
    flow.submit(&mut SubmitEvent::new()).await;
    assert_eq!(flow.result(), Some(&SubmissionResult::failure("Invalid email")));

    reject.delete_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(201).json_body(json!({ "id": 42 }));
        })
        .await;

    flow.submit(&mut SubmitEvent::new()).await;
    assert_eq!(flow.result(), Some(&SubmissionResult::success()));
    assert_eq!(flow.form(), &FormState::default());
}
