use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::UsernameError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Username;
use crate::inbound::http::router::AppState;

pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    state
        .user_service
        .register_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, "Register success", user.into()))
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterUserRequest {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterUserRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl RegisterUserRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterUserRequestError> {
        let name = Username::new(self.name)?;
        let email = EmailAddress::new(self.email)?;
        let password = self.password;
        Ok(RegisterUserCommand::new(name, email, password))
    }
}

impl From<ParseRegisterUserRequestError> for ApiError {
    fn from(err: ParseRegisterUserRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
