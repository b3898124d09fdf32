use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

use super::domain::{BasicInfoForm, HealthHistoryForm};
use super::error::AssessmentError;
use super::repository::{RepositoryError, SessionRepository};
use super::scoring::{AssessmentRequest, DigitalEngagement};
use super::service::{AssessmentService, AssessmentServiceError};
use super::session::{AssessmentSession, SessionId};

/// Router builder exposing the step-by-step and one-shot assessment endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/assess", post(assess_handler::<R>))
        .route("/api/v1/assessments", post(start_handler::<R>))
        .route(
            "/api/v1/assessments/:session_id",
            get(status_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:session_id/basics",
            post(basics_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:session_id/history",
            post(history_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:session_id/digital",
            post(digital_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:session_id/back",
            post(back_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn start_handler<R>(State(service): State<Arc<AssessmentService<R>>>) -> Response
where
    R: SessionRepository + 'static,
{
    match service.start() {
        Ok(session) => {
            let view = session.view(service.config().outcome_mode);
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(other) => internal_error(&other),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let id = SessionId(session_id);
    let result = service.get(&id);
    step_response(&service, &id, result)
}

pub(crate) async fn basics_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
    axum::Json(form): axum::Json<BasicInfoForm>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let id = SessionId(session_id);
    let result = service.submit_basics(&id, form);
    step_response(&service, &id, result)
}

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
    axum::Json(form): axum::Json<HealthHistoryForm>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let id = SessionId(session_id);
    let result = service.submit_history(&id, form);
    step_response(&service, &id, result)
}

pub(crate) async fn digital_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
    axum::Json(engagement): axum::Json<DigitalEngagement>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let id = SessionId(session_id);
    let result = service.submit_digital(&id, engagement);
    step_response(&service, &id, result)
}

pub(crate) async fn back_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let id = SessionId(session_id);
    let result = service.go_back(&id);
    step_response(&service, &id, result)
}

pub(crate) async fn assess_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.assess(request) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(AssessmentServiceError::Assessment(error)) => {
            let payload = json!({
                "error": error.to_string(),
                "details": error_details(&error),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(&other),
    }
}

fn step_response<R>(
    service: &AssessmentService<R>,
    id: &SessionId,
    result: Result<AssessmentSession, AssessmentServiceError>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let mode = service.config().outcome_mode;
    match result {
        Ok(session) => (StatusCode::OK, axum::Json(session.view(mode))).into_response(),
        Err(AssessmentServiceError::Rejected { error, session }) => {
            let status = if error.is_input_error() {
                StatusCode::UNPROCESSABLE_ENTITY
            } else {
                StatusCode::CONFLICT
            };
            let payload = json!({
                "error": error.to_string(),
                "details": error_details(&error),
                "session": session.view(mode),
            });
            (status, axum::Json(payload)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "session_id": id.0,
                "error": "assessment session not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(&other),
    }
}

fn error_details(error: &AssessmentError) -> Value {
    match error {
        AssessmentError::Validation(validation) => {
            serde_json::to_value(validation).unwrap_or(Value::Null)
        }
        AssessmentError::Incomplete(incomplete) => {
            serde_json::to_value(incomplete).unwrap_or(Value::Null)
        }
        AssessmentError::OutOfOrder { expected, actual } => json!({
            "expected_stage": expected.label(),
            "current_stage": actual.label(),
        }),
        AssessmentError::AtFirstStage => Value::Null,
    }
}

fn internal_error(error: &AssessmentServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
