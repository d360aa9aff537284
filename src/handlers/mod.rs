// HTTP surface for the activity roster

pub mod activities;
pub mod health;

use crate::roster::RosterError;
use crate::storage::{RosterStore, StoreError};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;

/// Shared handler state
pub type SharedStore = Arc<dyn RosterStore>;

/// Standard error response for the roster API
pub type ApiError = (StatusCode, Json<Value>);

/// Create a standard error response
pub fn error_response(status: StatusCode, error: &str, description: &str) -> ApiError {
    (
        status,
        Json(serde_json::json!({
            "error": error,
            "error_description": description
        })),
    )
}

/// Create a validation error response
pub fn validation_error(message: &str) -> ApiError {
    error_response(StatusCode::BAD_REQUEST, "validation_error", message)
}

/// Create a not found error response
pub fn not_found(message: &str) -> ApiError {
    error_response(StatusCode::NOT_FOUND, "not_found", message)
}

/// Map a store failure onto its HTTP response
pub fn store_error(err: &StoreError) -> ApiError {
    match err {
        StoreError::Roster(
            RosterError::ActivityNotFound { .. } | RosterError::ParticipantNotFound { .. },
        ) => not_found(&err.to_string()),
        StoreError::Roster(RosterError::AlreadySignedUp { .. }) => {
            validation_error(&err.to_string())
        }
        StoreError::Unavailable(_) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            &err.to_string(),
        ),
    }
}

/// Build the application router over `store`
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(health::health_check))
        .route("/health", get(health::health_check))
        .route("/activities", get(activities::list_activities))
        .route("/activities/:activity_name", get(activities::get_activity))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::unregister),
        )
        .with_state(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_mapping() {
        let (status, _) = store_error(&StoreError::Roster(RosterError::ActivityNotFound {
            activity: "Yoga Club".to_string(),
        }));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, Json(body)) = store_error(&StoreError::Roster(RosterError::AlreadySignedUp {
            activity: "Chess Club".to_string(),
            participant: "alice@school.edu".to_string(),
        }));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_description"], "Student already signed up");

        let (status, Json(body)) =
            store_error(&StoreError::Unavailable("Lock poisoned".to_string()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal_error");
    }
}
