use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::board::{JobBoard, TechnicianRoster};
use crate::classify::classify_issue;
use crate::config::BoardConfig;
use crate::data;
use crate::error::Result;
use crate::filter::{FilterSet, ALL};
use crate::records::{JobRecord, JobStatus, TechStatus, TechnicianRecord};
use crate::reports::ReportBundle;

/// Shared, immutable view data. Nothing mutates after seeding, so plain
/// `Arc`s are enough; each handler reads the same collections.
#[derive(Clone)]
pub struct DashboardState {
    pub jobs: Arc<JobBoard>,
    pub technicians: Arc<TechnicianRoster>,
    pub reports: Arc<ReportBundle>,
}

impl DashboardState {
    /// State backed by the seed fixtures.
    pub fn seeded() -> Result<Self> {
        Ok(Self {
            jobs: Arc::new(JobBoard::from_records(data::sample_jobs())?),
            technicians: Arc::new(TechnicianRoster::from_records(data::sample_technicians())?),
            reports: Arc::new(ReportBundle {
                periods: data::sample_periods(),
                categories: data::sample_categories(),
                performance: data::sample_performance(),
            }),
        })
    }
}

#[derive(Deserialize)]
struct JobQuery {
    search: Option<String>,
    status: Option<String>,
    severity: Option<String>,
}

#[derive(Deserialize)]
struct ClassifyRequest {
    description: String,
}

#[derive(Deserialize)]
struct TechQuery {
    search: Option<String>,
    status: Option<String>,
}

#[derive(Serialize)]
struct JobTallies {
    pending: usize,
    assigned: usize,
    #[serde(rename = "in-progress")]
    in_progress: usize,
    completed: usize,
}

#[derive(Serialize)]
struct ListJobsResponse {
    jobs: Vec<JobRecord>,
    tallies: JobTallies,
    total: usize,
}

#[derive(Serialize)]
struct TechTallies {
    available: usize,
    busy: usize,
    offline: usize,
}

#[derive(Serialize)]
struct ListTechniciansResponse {
    technicians: Vec<TechnicianRecord>,
    tallies: TechTallies,
    total: usize,
}

/// Router over the given state. Kept separate from [`run_dashboard`] so
/// tests can drive it without binding a socket.
pub fn router(config: &BoardConfig, state: DashboardState) -> Router {
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/api/jobs", get(list_jobs_handler))
        .route("/api/jobs/:id", get(get_job_handler))
        .route("/api/technicians", get(list_technicians_handler))
        .route("/api/technicians/:id", get(get_technician_handler))
        .route("/api/reports", get(reports_handler))
        .route("/api/classify", post(classify_handler));

    let app = if config.permissive_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app.layer(cors)
    } else {
        app
    };

    app.with_state(state)
}

pub async fn run_dashboard(config: BoardConfig, state: DashboardState) {
    let app = router(&config, state);

    tracing::info!(addr = %config.listen_addr, "Starting dashboard server");

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "Failed to bind dashboard server");
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Dashboard server failed");
    }
}

async fn index_handler() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

async fn list_jobs_handler(
    State(state): State<DashboardState>,
    Query(query): Query<JobQuery>,
) -> impl IntoResponse {
    let search = query.search.unwrap_or_default();
    let filters = FilterSet::new()
        .with("status", query.status.unwrap_or_else(|| ALL.to_string()))
        .with("severity", query.severity.unwrap_or_else(|| ALL.to_string()));

    let jobs: Vec<JobRecord> = state
        .jobs
        .search(&search, &filters)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(search = %search, matched = jobs.len(), "Filtered jobs");

    // Tallies are over the whole board, not the filtered subset.
    Json(ListJobsResponse {
        tallies: JobTallies {
            pending: state.jobs.status_tally(JobStatus::Pending),
            assigned: state.jobs.status_tally(JobStatus::Assigned),
            in_progress: state.jobs.status_tally(JobStatus::InProgress),
            completed: state.jobs.status_tally(JobStatus::Completed),
        },
        total: state.jobs.len(),
        jobs,
    })
}

async fn list_technicians_handler(
    State(state): State<DashboardState>,
    Query(query): Query<TechQuery>,
) -> impl IntoResponse {
    let search = query.search.unwrap_or_default();
    let filters =
        FilterSet::new().with("status", query.status.unwrap_or_else(|| ALL.to_string()));

    let technicians: Vec<TechnicianRecord> = state
        .technicians
        .search(&search, &filters)
        .into_iter()
        .cloned()
        .collect();

    Json(ListTechniciansResponse {
        tallies: TechTallies {
            available: state.technicians.status_tally(TechStatus::Available),
            busy: state.technicians.status_tally(TechStatus::Busy),
            offline: state.technicians.status_tally(TechStatus::Offline),
        },
        total: state.technicians.len(),
        technicians,
    })
}

async fn get_job_handler(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> Response {
    match state.jobs.get(&id) {
        Some(job) => Json(job.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Job not found: {id}") })),
        )
            .into_response(),
    }
}

async fn get_technician_handler(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> Response {
    match state.technicians.get(&id) {
        Some(tech) => Json(tech.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Technician not found: {id}") })),
        )
            .into_response(),
    }
}

async fn reports_handler(State(state): State<DashboardState>) -> impl IntoResponse {
    Json(state.reports.as_ref().clone())
}

/// Descriptions shorter than this carry too little signal to triage.
const MIN_DESCRIPTION_LEN: usize = 10;

async fn classify_handler(Json(payload): Json<ClassifyRequest>) -> Response {
    let description = payload.description.trim();
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!(
                    "Description must be at least {MIN_DESCRIPTION_LEN} characters"
                )
            })),
        )
            .into_response();
    }

    let classification = classify_issue(description);
    tracing::debug!(category = %classification.category, "Classified issue");
    Json(classification).into_response()
}
