use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use mockito::Server;
use serde_json::json;
use vscan_cli::enums::job_state::JobState;
use vscan_cli::errors::VscanError;
use vscan_cli::structs::analysis_job::AnalysisJob;

use crate::common::test_client;

#[tokio::test]
async fn await_completion_terminates_after_three_polls() {
    let mut server = Server::new_async().await;

    let hits = Arc::new(AtomicUsize::new(0));
    let hits_in_mock = Arc::clone(&hits);

    let mock = server
        .mock("GET", "/status/abc-123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body_from_request(move |_| {
            let status = match hits_in_mock.fetch_add(1, Ordering::SeqCst) {
                0 => "pending",
                1 => "running",
                _ => "completed",
            };
            json!({ "status": status }).to_string().into_bytes()
        })
        .expect(3)
        .create_async()
        .await;

    let client = test_client(&server.url(), 0, 30);
    let terminal = client.await_completion("abc-123", 0, 30).await.unwrap();

    mock.assert_async().await;
    assert_eq!(terminal, JobState::Completed);
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn await_completion_returns_the_failed_terminal_state() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/status/abc-123")
        .with_status(200)
        .with_body(json!({ "status": "failed" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server.url(), 0, 30);
    let terminal = client.await_completion("abc-123", 0, 30).await.unwrap();

    mock.assert_async().await;
    assert_eq!(terminal, JobState::Failed);
}

#[tokio::test]
async fn await_completion_times_out_when_the_deadline_precedes_the_next_poll() {
    let mut server = Server::new_async().await;

    // max_wait below the poll interval: the wait must end right after the
    // first non-terminal poll instead of sleeping past the deadline.
    let mock = server
        .mock("GET", "/status/abc-123")
        .with_status(200)
        .with_body(json!({ "status": "running", "progress": 10 }).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server.url(), 2, 1);
    let result = client.await_completion("abc-123", 2, 1).await;

    mock.assert_async().await;
    match result {
        Err(VscanError::TimeoutError { analysis_id, last_status, .. }) => {
            assert_eq!(analysis_id, "abc-123");
            assert_eq!(last_status, "running");
        }
        other => panic!("expected TimeoutError, got {:?}", other),
    }
}

#[tokio::test]
async fn await_completion_loops_on_unrecognized_statuses() {
    let mut server = Server::new_async().await;

    let hits = Arc::new(AtomicUsize::new(0));
    let hits_in_mock = Arc::clone(&hits);

    let mock = server
        .mock("GET", "/status/abc-123")
        .with_status(200)
        .with_body_from_request(move |_| {
            let status = match hits_in_mock.fetch_add(1, Ordering::SeqCst) {
                0 => "indexing",
                _ => "completed",
            };
            json!({ "status": status }).to_string().into_bytes()
        })
        .expect(2)
        .create_async()
        .await;

    let client = test_client(&server.url(), 0, 30);
    let terminal = client.await_completion("abc-123", 0, 30).await.unwrap();

    mock.assert_async().await;
    assert_eq!(terminal, JobState::Completed);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn await_completion_aborts_on_the_first_poll_failure() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/status/abc-123")
        .with_status(500)
        .with_body(json!({ "error": "boom" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server.url(), 0, 30);
    let result = client.await_completion("abc-123", 0, 30).await;

    mock.assert_async().await;
    assert!(matches!(result, Err(VscanError::StatusError { .. })));
}

#[tokio::test]
async fn run_workflow_without_waiting_makes_exactly_one_network_call() {
    let mut server = Server::new_async().await;

    let submit_mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_body(json!({ "analysisId": "abc-123" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let status_mock = server
        .mock("GET", "/status/abc-123")
        .with_status(200)
        .with_body(json!({ "status": "completed" }).to_string())
        .expect(0)
        .create_async()
        .await;

    let client = test_client(&server.url(), 0, 30);
    let mut job = AnalysisJob::new("ms-python", "python");
    let outcome = client.run_workflow(&mut job, false).await;

    submit_mock.assert_async().await;
    status_mock.assert_async().await;

    assert!(outcome.success);
    assert_eq!(outcome.status, "submitted");
    assert_eq!(outcome.analysis_id.as_deref(), Some("abc-123"));
    assert!(outcome.security_score.is_none());
    assert!(outcome.risk_level.is_none());
    assert!(outcome.vulnerability_summary.is_none());
    assert_eq!(job.analysis_id(), Some("abc-123"));
}

#[tokio::test]
async fn run_workflow_aggregates_the_full_happy_path() {
    let mut server = Server::new_async().await;

    let submit_mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_body(json!({ "analysisId": "wf-1" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let status_mock = server
        .mock("GET", "/status/wf-1")
        .with_status(200)
        .with_body(json!({ "status": "completed", "progress": 100 }).to_string())
        .expect(1)
        .create_async()
        .await;

    let results_mock = server
        .mock("GET", "/results/wf-1")
        .with_status(200)
        .with_body(json!({ "securityScore": { "score": 87, "riskLevel": "low" } }).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server.url(), 0, 30);
    let mut job = AnalysisJob::new("ms-python", "python");
    let outcome = client.run_workflow(&mut job, true).await;

    submit_mock.assert_async().await;
    status_mock.assert_async().await;
    results_mock.assert_async().await;

    assert!(outcome.success);
    assert_eq!(outcome.status, "completed");
    assert_eq!(outcome.analysis_id.as_deref(), Some("wf-1"));
    assert_eq!(outcome.security_score, Some(87));
    assert_eq!(outcome.risk_level.as_deref(), Some("low"));
    assert!(outcome.failed_stage.is_none());
    assert!(outcome.error.is_none());
}

#[tokio::test]
async fn run_workflow_tags_submission_failures() {
    let mut server = Server::new_async().await;

    let submit_mock = server
        .mock("POST", "/analyze")
        .with_status(500)
        .with_body(json!({ "error": "out of capacity" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server.url(), 0, 30);
    let mut job = AnalysisJob::new("ms-python", "python");
    let outcome = client.run_workflow(&mut job, true).await;

    submit_mock.assert_async().await;

    assert!(!outcome.success);
    assert_eq!(outcome.status, "error");
    assert_eq!(outcome.failed_stage.as_deref(), Some("submission"));
    assert!(outcome.error.is_some());
    assert!(outcome.analysis_id.is_none());
}

#[tokio::test]
async fn run_workflow_reports_a_failed_analysis_without_fetching_results() {
    let mut server = Server::new_async().await;

    let submit_mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_body(json!({ "analysisId": "wf-2" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let status_mock = server
        .mock("GET", "/status/wf-2")
        .with_status(200)
        .with_body(json!({ "status": "failed" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let results_mock = server
        .mock("GET", "/results/wf-2")
        .with_status(200)
        .with_body("{}")
        .expect(0)
        .create_async()
        .await;

    let client = test_client(&server.url(), 0, 30);
    let mut job = AnalysisJob::new("ms-python", "python");
    let outcome = client.run_workflow(&mut job, true).await;

    submit_mock.assert_async().await;
    status_mock.assert_async().await;
    results_mock.assert_async().await;

    assert!(!outcome.success);
    assert_eq!(outcome.status, "failed");
    assert!(outcome.failed_stage.is_none());
    assert!(outcome.security_score.is_none());
}

#[tokio::test]
async fn run_workflow_tags_polling_timeouts() {
    let mut server = Server::new_async().await;

    let submit_mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_body(json!({ "analysisId": "wf-3" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let status_mock = server
        .mock("GET", "/status/wf-3")
        .with_status(200)
        .with_body(json!({ "status": "running" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server.url(), 2, 1);
    let mut job = AnalysisJob::new("ms-python", "python");
    let outcome = client.run_workflow(&mut job, true).await;

    submit_mock.assert_async().await;
    status_mock.assert_async().await;

    assert!(!outcome.success);
    assert_eq!(outcome.status, "timeout");
    assert_eq!(outcome.failed_stage.as_deref(), Some("polling"));
}

#[tokio::test]
async fn run_workflow_tags_fetch_failures() {
    let mut server = Server::new_async().await;

    let submit_mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_body(json!({ "analysisId": "wf-4" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let status_mock = server
        .mock("GET", "/status/wf-4")
        .with_status(200)
        .with_body(json!({ "status": "completed" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let results_mock = server
        .mock("GET", "/results/wf-4")
        .with_status(404)
        .with_body(json!({ "error": "expired" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server.url(), 0, 30);
    let mut job = AnalysisJob::new("ms-python", "python");
    let outcome = client.run_workflow(&mut job, true).await;

    submit_mock.assert_async().await;
    status_mock.assert_async().await;
    results_mock.assert_async().await;

    assert!(!outcome.success);
    assert_eq!(outcome.status, "error");
    assert_eq!(outcome.failed_stage.as_deref(), Some("fetch"));
}
