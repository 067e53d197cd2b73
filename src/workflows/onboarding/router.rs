use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::catalog::OptionCatalog;
use super::events::OnboardingEvent;
use super::repository::{RepositoryError, SessionId, SessionRepository};
use super::service::{OnboardingService, OnboardingServiceError};

/// Router builder exposing the onboarding flow to a remote renderer.
pub fn onboarding_router<R>(service: Arc<OnboardingService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/onboarding/options", get(options_handler))
        .route("/api/v1/onboarding/sessions", post(start_handler::<R>))
        .route(
            "/api/v1/onboarding/sessions/:session_id",
            get(session_handler::<R>).delete(discard_handler::<R>),
        )
        .route(
            "/api/v1/onboarding/sessions/:session_id/events",
            post(event_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn options_handler() -> Json<OptionCatalog> {
    Json(OptionCatalog::standard())
}

pub(crate) async fn start_handler<R>(State(service): State<Arc<OnboardingService<R>>>) -> Response
where
    R: SessionRepository + 'static,
{
    match service.start() {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn session_handler<R>(
    State(service): State<Arc<OnboardingService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.get(&SessionId(session_id)) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn discard_handler<R>(
    State(service): State<Arc<OnboardingService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.discard(&SessionId(session_id)) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn event_handler<R>(
    State(service): State<Arc<OnboardingService<R>>>,
    Path(session_id): Path<String>,
    Json(event): Json<OnboardingEvent>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.apply(&SessionId(session_id), event) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: OnboardingServiceError) -> Response {
    match error {
        OnboardingServiceError::Validation(rejection) => {
            let payload = json!({
                "error": rejection.message,
                "screen": rejection.screen,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        OnboardingServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({ "error": "onboarding session not found" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        OnboardingServiceError::Repository(RepositoryError::Unavailable(reason)) => {
            let payload = json!({ "error": format!("session store unavailable: {reason}") });
            (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response()
        }
        other => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
