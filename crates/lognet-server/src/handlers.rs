//! HTTP request handlers for the logging service API.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use indexmap::IndexMap;
use lognet_core::LogEntry;
use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};
use crate::state::ServiceState;

/// Query parameters for `/retrieve`.
#[derive(Debug, Deserialize)]
pub struct RetrieveQuery {
    /// Identifier to retrieve logs for.
    pub id: Option<String>,
}

/// Query parameters for `/clear-service-logs`.
#[derive(Debug, Deserialize)]
pub struct ClearServiceQuery {
    /// Identifier whose logs should be cleared.
    pub service_name: Option<String>,
}

/// Plain status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Status message.
    pub status: String,
}

/// Response for a submitted log entry.
#[derive(Debug, Serialize)]
pub struct LogResponse {
    /// The rendered log line as stored.
    pub log: String,
}

/// Response for `/services`.
#[derive(Debug, Serialize)]
pub struct ServicesResponse {
    /// Known identifiers, in first-record order.
    pub services: Vec<String>,
}

/// Response for `/retrieve`.
#[derive(Debug, Serialize)]
pub struct LogsResponse {
    /// Rendered log lines, in arrival order.
    pub logs: Vec<String>,
}

/// Response for `/get-all`.
#[derive(Debug, Serialize)]
pub struct AllLogsResponse {
    /// Identifier -> rendered log lines.
    pub all_logs: IndexMap<String, Vec<String>>,
}

/// Response for `/get-log-queue`.
#[derive(Debug, Serialize)]
pub struct LogQueueResponse {
    /// Pending-queue view; empty by contract.
    pub log_queue: Vec<String>,
}

/// Handle GET `/{ping_path}` - health check.
pub async fn ping() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
    })
}

/// Handle POST `/{log_path}` - record a submitted entry.
pub async fn submit_log(
    State(state): State<Arc<ServiceState>>,
    Json(entry): Json<LogEntry>,
) -> (StatusCode, Json<LogResponse>) {
    let log = state.registry().record(entry);
    (StatusCode::CREATED, Json(LogResponse { log }))
}

/// Handle GET `/services` - list known identifiers.
pub async fn get_services(State(state): State<Arc<ServiceState>>) -> Json<ServicesResponse> {
    Json(ServicesResponse {
        services: state.registry().get_services(),
    })
}

/// Handle GET `/retrieve?id=` - logs for one identifier.
///
/// An unknown identifier yields an empty list; a missing `id` parameter is
/// a bad request.
pub async fn retrieve_logs(
    State(state): State<Arc<ServiceState>>,
    Query(query): Query<RetrieveQuery>,
) -> ServiceResult<Json<LogsResponse>> {
    let id = query
        .id
        .ok_or_else(|| ServiceError::InvalidRequest("missing query parameter: id".to_string()))?;

    let logs = state
        .registry()
        .retrieve(&id)
        .iter()
        .map(ToString::to_string)
        .collect();
    Ok(Json(LogsResponse { logs }))
}

/// Handle GET `/get-all` - logs for every identifier.
pub async fn get_all(State(state): State<Arc<ServiceState>>) -> Json<AllLogsResponse> {
    let all_logs = state
        .registry()
        .get_all()
        .into_iter()
        .map(|(id, logs)| (id, logs.iter().map(ToString::to_string).collect()))
        .collect();
    Json(AllLogsResponse { all_logs })
}

/// Handle GET `/get-log-queue` - pending-queue view (always empty).
pub async fn get_log_queue(State(state): State<Arc<ServiceState>>) -> Json<LogQueueResponse> {
    Json(LogQueueResponse {
        log_queue: state.registry().get_log_queue(),
    })
}

/// Handle DELETE `/clear-logs` - drop every identifier's logs.
pub async fn clear_logs(State(state): State<Arc<ServiceState>>) -> Json<StatusResponse> {
    state.registry().clear_logs();
    Json(StatusResponse {
        status: "logs cleared".to_string(),
    })
}

/// Handle DELETE `/clear-service-logs?service_name=` - drop one identifier.
pub async fn clear_service_logs(
    State(state): State<Arc<ServiceState>>,
    Query(query): Query<ClearServiceQuery>,
) -> ServiceResult<Json<StatusResponse>> {
    let name = query.service_name.ok_or_else(|| {
        ServiceError::InvalidRequest("missing query parameter: service_name".to_string())
    })?;

    state.registry().clear_service_logs(&name);
    Ok(Json(StatusResponse {
        status: format!("logs for service '{name}' cleared"),
    }))
}

/// Handle DELETE `/clear-log-queue` - discard the pending queue.
pub async fn clear_log_queue(State(state): State<Arc<ServiceState>>) -> Json<StatusResponse> {
    state.registry().clear_log_queue();
    Json(StatusResponse {
        status: "log queue cleared".to_string(),
    })
}
