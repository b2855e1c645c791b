use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use plumber_board::config::BoardConfig;
use plumber_board::dashboard::{router, DashboardState};

fn test_app() -> Router {
    let state = DashboardState::seeded().expect("seed fixtures are valid");
    router(&BoardConfig::default(), state)
}

async fn get_json(app: Router, uri: &str) -> Value {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_index_serves_html() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_list_jobs_unfiltered() {
    let json = get_json(test_app(), "/api/jobs").await;

    let jobs = json["jobs"].as_array().unwrap();
    assert_eq!(jobs.len(), 5);
    assert_eq!(json["total"], 5);

    assert_eq!(json["tallies"]["pending"], 1);
    assert_eq!(json["tallies"]["assigned"], 2);
    assert_eq!(json["tallies"]["in-progress"], 1);
    assert_eq!(json["tallies"]["completed"], 1);
}

#[tokio::test]
async fn test_list_jobs_search() {
    let json = get_json(test_app(), "/api/jobs?search=leak").await;

    let jobs = json["jobs"].as_array().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["customerName"], "John Smith");
    assert_eq!(jobs[0]["status"], "assigned");
}

#[tokio::test]
async fn test_list_jobs_combined_filters() {
    let json = get_json(test_app(), "/api/jobs?status=assigned&severity=medium").await;

    let jobs = json["jobs"].as_array().unwrap();
    assert_eq!(jobs.len(), 2);
    for job in jobs {
        assert_eq!(job["status"], "assigned");
        assert_eq!(job["severity"], "medium");
    }

    // Tallies stay scoped to the whole board.
    assert_eq!(json["tallies"]["completed"], 1);
    assert_eq!(json["total"], 5);
}

#[tokio::test]
async fn test_list_jobs_empty_result_is_ok() {
    let json = get_json(test_app(), "/api/jobs?search=leak&status=completed").await;

    let jobs = json["jobs"].as_array().unwrap();
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn test_list_technicians_unfiltered() {
    let json = get_json(test_app(), "/api/technicians").await;

    let technicians = json["technicians"].as_array().unwrap();
    assert_eq!(technicians.len(), 5);
    assert_eq!(json["tallies"]["available"], 2);
    assert_eq!(json["tallies"]["busy"], 2);
    assert_eq!(json["tallies"]["offline"], 1);
}

#[tokio::test]
async fn test_list_technicians_specialty_search() {
    let json = get_json(test_app(), "/api/technicians?search=drain").await;

    let technicians = json["technicians"].as_array().unwrap();
    assert_eq!(technicians.len(), 1);
    assert_eq!(technicians[0]["name"], "Mike Johnson");
}

#[tokio::test]
async fn test_list_technicians_status_filter() {
    let json = get_json(test_app(), "/api/technicians?status=busy").await;

    let technicians = json["technicians"].as_array().unwrap();
    assert_eq!(technicians.len(), 2);
    for tech in technicians {
        assert_eq!(tech["status"], "busy");
        assert!(tech["currentJob"].is_string());
    }
}

#[tokio::test]
async fn test_get_job_by_id() {
    let json = get_json(test_app(), "/api/jobs/3").await;
    assert_eq!(json["customerName"], "Robert Chen");
    assert_eq!(json["status"], "pending");
    assert!(json.get("assignedTo").is_none());
}

#[tokio::test]
async fn test_get_unknown_job_is_404() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/jobs/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Job not found: 999");
}

#[tokio::test]
async fn test_get_technician_by_id() {
    let json = get_json(test_app(), "/api/technicians/2").await;
    assert_eq!(json["name"], "Tom Davis");
    assert_eq!(json["status"], "busy");
}

#[tokio::test]
async fn test_get_unknown_technician_is_404() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/technicians/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reports_endpoint() {
    let json = get_json(test_app(), "/api/reports").await;

    assert_eq!(json["periods"].as_array().unwrap().len(), 3);
    assert_eq!(json["categories"].as_array().unwrap().len(), 5);
    assert_eq!(json["performance"].as_array().unwrap().len(), 5);
    assert_eq!(json["periods"][0]["period"], "Jan 2024");
}

async fn post_classify(app: Router, description: &str) -> (StatusCode, Value) {
    let body = serde_json::to_string(&serde_json::json!({ "description": description })).unwrap();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/classify")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_classify_endpoint() {
    let (status, json) =
        post_classify(test_app(), "water is leaking from under the kitchen sink").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["category"], "leak");
    assert!(json["confidence"].as_f64().unwrap() > 0.0);
    assert!(!json["requiredTools"].as_array().unwrap().is_empty());
    assert!(!json["nextSteps"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_classify_rejects_short_description() {
    let (status, json) = post_classify(test_app(), "help").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("at least"));
}

#[tokio::test]
async fn test_jobs_returns_json_content_type() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/jobs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.contains("application/json"));
}
