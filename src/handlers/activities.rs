// Activity listing and signup endpoints

use super::{ApiError, SharedStore, not_found, store_error, validation_error};
use crate::models::{Activity, MessageResponse, ParticipantQuery, Roster};
use crate::storage::RosterStore;
use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::debug;

/// List all activities
/// GET /activities
pub async fn list_activities(State(store): State<SharedStore>) -> Result<Json<Roster>, ApiError> {
    debug!("List all activities");

    let roster = store.list_activities().await.map_err(|e| store_error(&e))?;
    Ok(Json(roster))
}

/// Get a specific activity
/// GET /activities/{activity_name}
pub async fn get_activity(
    State(store): State<SharedStore>,
    Path(activity_name): Path<String>,
) -> Result<Json<Activity>, ApiError> {
    debug!("Get activity '{}'", activity_name);

    store
        .get_activity(&activity_name)
        .await
        .map_err(|e| store_error(&e))?
        .map(Json)
        .ok_or_else(|| not_found(&format!("Activity '{}' not found", activity_name)))
}

/// Sign up a student for an activity
/// POST /activities/{activity_name}/signup?email=...
pub async fn signup(
    State(store): State<SharedStore>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!("Signup request for '{}'", activity_name);

    let email = required_email(&query)?;
    store
        .signup(&activity_name, email)
        .await
        .map_err(|e| store_error(&e))?;

    Ok(Json(MessageResponse::new(format!(
        "Signed up {} for {}",
        email, activity_name
    ))))
}

/// Unregister a student from an activity
/// DELETE /activities/{activity_name}/unregister?email=...
pub async fn unregister(
    State(store): State<SharedStore>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!("Unregister request for '{}'", activity_name);

    let email = required_email(&query)?;
    store
        .unregister(&activity_name, email)
        .await
        .map_err(|e| store_error(&e))?;

    Ok(Json(MessageResponse::new(format!(
        "Unregistered {} from {}",
        email, activity_name
    ))))
}

fn required_email(query: &ParticipantQuery) -> Result<&str, ApiError> {
    let email = query.email.trim();
    if email.is_empty() {
        return Err(validation_error("Email cannot be empty"));
    }
    Ok(email)
}
