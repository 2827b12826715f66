//! Integration tests for the vqeviz dashboard API.

use std::fs;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use tempfile::TempDir;
use vqeviz_dashboard::{AppState, DashboardConfig, create_router};

// ============================================================================
// Test helpers
// ============================================================================

/// A state pointed at `contents` written to a temporary results file.
/// `None` leaves the file missing.
fn test_state(contents: Option<&str>) -> (TempDir, Arc<AppState>) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("quantum_results.json");
    if let Some(contents) = contents {
        fs::write(&path, contents).expect("write results");
    }
    let state = AppState::with_config(DashboardConfig::default()).with_results_path(path);
    (dir, Arc::new(state))
}

fn test_server(state: Arc<AppState>) -> TestServer {
    let router = create_router(state);
    TestServer::new(router).expect("test server")
}

const H2_RESULTS: &str = r#"{
    "ground_state_energy": -1.137283,
    "iterations": 5,
    "energy_convergence": [0.6, 0.1, -0.7, -1.1, -1.137283]
}"#;

fn chart_ids(body: &Value) -> Vec<String> {
    body["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|b| b["type"] == "chart")
        .map(|b| b["chart"]["id"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Health endpoint
// ============================================================================

#[tokio::test]
async fn test_health_returns_ok() {
    let (_dir, state) = test_state(None);
    let server = test_server(state);
    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].as_str().is_some());
}

// ============================================================================
// Raw results
// ============================================================================

#[tokio::test]
async fn test_results_returns_stored_document() {
    let (_dir, state) = test_state(Some(r#"{"iterations": 12}"#));
    let server = test_server(state);
    let response = server.get("/api/results").await;
    response.assert_status_ok();

    // Stored as-is: no synthesized fields.
    let body: Value = response.json();
    assert_eq!(body, json!({ "iterations": 12 }));
}

#[tokio::test]
async fn test_results_missing_file_returns_404() {
    let (_dir, state) = test_state(None);
    let server = test_server(state);
    let response = server.get("/api/results").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "missing_input_file");
    assert!(body["message"].as_str().unwrap().contains("file not found"));
}

#[tokio::test]
async fn test_results_malformed_json_returns_422() {
    let (_dir, state) = test_state(Some("{ \"iterations\": "));
    let server = test_server(state);
    let response = server.get("/api/results").await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["error"], "malformed_input");
}

// ============================================================================
// Dashboard model
// ============================================================================

#[tokio::test]
async fn test_dashboard_model_default_toggles() {
    let (_dir, state) = test_state(Some(H2_RESULTS));
    let server = test_server(state);
    let response = server.get("/api/dashboard").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["backend"], "plotly");
    assert_eq!(body["toggles"]["show_histogram"], true);
    assert_eq!(
        chart_ids(&body),
        vec!["convergence", "distribution", "running-average"]
    );
}

#[tokio::test]
async fn test_dashboard_model_running_average_values() {
    let (_dir, state) = test_state(Some(r#"{"energy_convergence": [1.0, 3.0, 5.0]}"#));
    let server = test_server(state);
    let body: Value = server.get("/api/dashboard").await.json();

    let avg = body["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["type"] == "chart" && b["chart"]["id"] == "running-average")
        .unwrap();
    assert_eq!(avg["chart"]["y"], json!([1.0, 2.0, 3.0]));
    assert_eq!(avg["chart"]["title"], "Running Average of Energy");
}

#[tokio::test]
async fn test_dashboard_model_synthesizes_sequence() {
    let (_dir, state) = test_state(Some(r#"{"iterations": 8}"#));
    let server = test_server(state);
    let body: Value = server.get("/api/dashboard").await.json();

    let conv = &body["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["type"] == "chart")
        .unwrap()["chart"];
    let y = conv["y"].as_array().unwrap();
    assert_eq!(y.len(), 8);
    assert_eq!(y[0], 0.6);
    assert_eq!(y[7], -0.886786);
}

#[tokio::test]
async fn test_dashboard_model_toggles_are_independent() {
    let (_dir, state) = test_state(Some(H2_RESULTS));
    let server = test_server(state);

    let body: Value = server
        .get("/api/dashboard?show_histogram=false")
        .await
        .json();
    assert_eq!(chart_ids(&body), vec!["convergence", "running-average"]);

    let body: Value = server
        .get("/api/dashboard?show_running_average=false")
        .await
        .json();
    assert_eq!(chart_ids(&body), vec!["convergence", "distribution"]);

    let body: Value = server.get("/api/dashboard?interactive=false").await.json();
    assert_eq!(body["backend"], "svg");
    assert_eq!(
        chart_ids(&body),
        vec!["convergence", "distribution", "running-average"]
    );
}

#[tokio::test]
async fn test_dashboard_model_invalid_toggle_returns_400() {
    let (_dir, state) = test_state(Some(H2_RESULTS));
    let server = test_server(state);
    let response = server.get("/api/dashboard?interactive=sometimes").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_dashboard_model_wrong_field_type_returns_422() {
    let (_dir, state) = test_state(Some(r#"{"iterations": "many"}"#));
    let server = test_server(state);
    let response = server.get("/api/dashboard").await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

// ============================================================================
// HTML page
// ============================================================================

#[tokio::test]
async fn test_page_renders_interactive_charts() {
    let (_dir, state) = test_state(Some(H2_RESULTS));
    let server = test_server(state);
    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Quantum Simulation - VQE Visualization"));
    assert!(html.contains("cdn.plot.ly"));
    assert!(html.contains("chart-convergence"));
    assert!(html.contains("chart-distribution"));
    assert!(html.contains("chart-running-average"));
    assert!(html.contains("-1.137283 Hartree"));
    assert!(html.contains(r#"data-steps="5""#));
}

#[tokio::test]
async fn test_page_form_submission_unchecks_absent_boxes() {
    let (_dir, state) = test_state(Some(H2_RESULTS));
    let server = test_server(state);
    let response = server
        .get("/?controls=1&show_running_average=on")
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(!html.contains("cdn.plot.ly"));
    assert!(html.contains("<svg"));
    assert!(!html.contains("chart-distribution"));
    assert!(html.contains("chart-running-average"));
}

#[tokio::test]
async fn test_page_missing_file_shows_only_error() {
    let (_dir, state) = test_state(None);
    let server = test_server(state);
    let response = server.get("/").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let html = response.text();
    assert!(html.contains("file not found!"));
    assert!(!html.contains("chart-convergence"));
    assert!(!html.contains("Computed Ground-State Energy"));
}

#[tokio::test]
async fn test_page_malformed_file_shows_only_error() {
    let (_dir, state) = test_state(Some("not json at all"));
    let server = test_server(state);
    let response = server.get("/").await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let html = response.text();
    assert!(html.contains("Invalid JSON format"));
    assert!(!html.contains("chart-convergence"));
}

#[tokio::test]
async fn test_page_reloads_file_on_every_request() {
    let (dir, state) = test_state(Some(r#"{"ground_state_energy": -0.5}"#));
    let server = test_server(state);
    assert!(server.get("/").await.text().contains("-0.500000 Hartree"));

    fs::write(
        dir.path().join("quantum_results.json"),
        r#"{"ground_state_energy": -0.75}"#,
    )
    .unwrap();
    assert!(server.get("/").await.text().contains("-0.750000 Hartree"));
}
