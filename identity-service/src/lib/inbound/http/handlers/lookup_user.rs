use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupUserQuery {
    email: String,
}

pub async fn lookup_user(
    State(state): State<AppState>,
    Query(query): Query<LookupUserQuery>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    state
        .user_service
        .get_user_by_email(&query.email)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, "Ok", user.into()))
}
