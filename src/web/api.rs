use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::algorithm::dijkstra::compute_distances;
use crate::graph::Graph;
use crate::io::{load_graph_from_value, DistanceReport, Timed};
use crate::web::models::*;
use crate::Error;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<Uuid, Session>> {
        // Sessions are only inserted whole, so a poisoned map is still consistent
        self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/:session_id", get(get_session))
        .route("/api/graphs/:session_id/distances", post(run_distances))
        .route("/api/sessions", get(list_sessions))
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        sessions: state.sessions().len(),
    })
}

/// Upload a graph in the loader's JSON format
pub async fn create_graph(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<SessionSummary> {
    let graph = load_graph_from_value(&body).map_err(|err| error_response(StatusCode::BAD_REQUEST, &err))?;

    let session = Session::new(graph);
    let summary = session.summary();
    log::info!(
        "created session {} ({} nodes, {} edges)",
        summary.id,
        summary.node_count,
        summary.edge_count
    );

    state.sessions().insert(session.id, session);
    Ok(Json(summary))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<SessionSummary> {
    match state.sessions().get(&session_id) {
        Some(session) => Ok(Json(session.summary())),
        None => Err(session_not_found(session_id)),
    }
}

pub async fn list_sessions(State(state): State<AppState>) -> Json<Vec<SessionSummary>> {
    let mut summaries: Vec<SessionSummary> = state.sessions().values().map(Session::summary).collect();
    summaries.sort_by_key(|s| s.created_at);
    Json(summaries)
}

/// Compute distances from a source on a stored graph
pub async fn run_distances(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<DistancesRequest>,
) -> ApiResult<DistancesResponse> {
    let graph = match state.sessions().get(&session_id) {
        Some(session) => Arc::clone(&session.graph),
        None => return Err(session_not_found(session_id)),
    };

    let source = request.source;
    let run = tokio::task::spawn_blocking(move || {
        Timed::measure(|| compute_distances(&*graph, source, graph.node_count())).transpose()
    })
    .await
    .map_err(|err| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "internal_error".to_string(),
                message: err.to_string(),
            }),
        )
    })?
    .map_err(|err| error_response(StatusCode::BAD_REQUEST, &err))?;

    Ok(Json(DistanceReport::new(&run.value, Some(run.elapsed))))
}

fn session_not_found(session_id: Uuid) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "session_not_found".to_string(),
            message: format!("Session {} not found", session_id),
        }),
    )
}

fn error_response(status: StatusCode, err: &Error) -> (StatusCode, Json<ErrorResponse>) {
    let code = match err {
        Error::InvalidSource { .. } => "invalid_source",
        Error::InvalidWeight { .. } => "invalid_weight",
        Error::InvalidNodeCount { .. } => "invalid_node_count",
        Error::DistanceOverflow { .. } => "distance_overflow",
        Error::MalformedGraph(_) => "malformed_graph",
        Error::InvalidConfig(_) => "invalid_config",
        Error::Io(_) => "io_error",
        Error::Json(_) => "invalid_json",
    };
    log::warn!("request rejected: {}", err);

    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
        }),
    )
}
