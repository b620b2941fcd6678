use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Public probe for whether any user is registered at all.
///
/// A fresh blog instance uses this to decide whether to show the
/// first-registration screen.
pub async fn user_exists(
    State(state): State<AppState>,
) -> Result<ApiSuccess<()>, ApiError> {
    let exists = state
        .user_service
        .any_user_exists()
        .await
        .map_err(ApiError::from)?;

    if exists {
        Ok(ApiSuccess::message(StatusCode::OK, "User exist"))
    } else {
        Err(ApiError::NotFound("User not exist".to_string()))
    }
}
