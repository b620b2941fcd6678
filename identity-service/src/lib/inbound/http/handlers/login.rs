use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::errors::UserError;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // Look up the account by email
    let user = state
        .user_service
        .get_user_by_email(&body.email)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByEmail(_) => ApiError::NotFound("User not exist".to_string()),
            _ => ApiError::from(e),
        })?;

    // Verify password and issue an identity token
    let result = state
        .authenticator
        .authenticate(
            &body.password,
            &user.password_hash,
            &user.id.to_string(),
            user.email.as_str(),
            user.name.as_str(),
        )
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Password error".to_string())
            }
            auth::AuthenticationError::TokenError(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        "Login success",
        LoginResponseData {
            user: (&user).into(),
            token: result.access_token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub user: UserData,
    pub token: String,
}
