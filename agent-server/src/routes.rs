//! HTTP route handlers for the agent API.

use std::fs;
use std::io::ErrorKind;

use agent::core::operation::Operation;
use agent::dispatch;
use agent::interpreter::SYSTEM_PROMPT;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::state::AppState;

/// Build the API router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/run", post(run_task))
        .route("/read", get(read_file))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Deserialize)]
struct TaskRequest {
    task: String,
}

#[derive(Serialize)]
struct RunResponse {
    status: &'static str,
    output: String,
}

/// POST /run - interpret a free-text task and execute the resulting operation.
async fn run_task(
    State(state): State<AppState>,
    Json(request): Json<TaskRequest>,
) -> Result<Json<RunResponse>, ApiError> {
    debug!(task = %request.task, "interpreting task");

    let reply = state
        .completions
        .complete(SYSTEM_PROMPT, &request.task)
        .await
        .map_err(|err| {
            warn!(error = %format!("{err:#}"), "completion call failed");
            ApiError::internal(format!("{err:#}"))
        })?;

    let reply: Value = serde_json::from_str(&reply)
        .map_err(|_| ApiError::internal("Failed to parse LLM response"))?;

    let operation =
        Operation::from_reply(&reply).map_err(|err| ApiError::internal(format!("{err:#}")))?;

    let output = dispatch::execute(&state.guard, &operation)
        .map_err(|err| ApiError::internal(format!("{err:#}")))?;

    Ok(Json(RunResponse {
        status: "success",
        output,
    }))
}

#[derive(Deserialize)]
struct ReadQuery {
    /// Path to the file.
    path: String,
}

/// GET /read - return the raw content of a file under the data root.
async fn read_file(
    State(state): State<AppState>,
    Query(query): Query<ReadQuery>,
) -> Result<String, ApiError> {
    if !state.guard.permits(&query.path) {
        return Err(ApiError::forbidden("Access to this file is not allowed"));
    }

    match fs::read_to_string(&query.path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == ErrorKind::NotFound => Err(ApiError::not_found("File not found")),
        Err(err) => Err(ApiError::internal(err.to_string())),
    }
}

/// API failure carrying an HTTP status and a human-readable detail string.
///
/// Every error body has the shape `{"detail": "<message>"}`.
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.into(),
        }
    }

    fn forbidden(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            detail: detail.into(),
        }
    }

    fn not_found(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "detail": self.detail }));
        (self.status, body).into_response()
    }
}
