use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::user::errors::UserError;

pub mod get_user;
pub mod login;
pub mod lookup_user;
pub mod register_user;
pub mod user_exists;

/// Machine-stable status tag for an outcome class.
///
/// These tags are part of the response contract and must never be renamed
/// for a given class.
fn result_tag(status: StatusCode) -> &'static str {
    match status.as_u16() {
        200 => "200Ok",
        201 => "201Created",
        400 => "400BadRequest",
        401 => "401Unauthorized",
        404 => "404NotFound",
        409 => "409Conflict",
        422 => "422UnprocessableEntity",
        _ => "500InternalServerError",
    }
}

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, message: &str, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, message, data)))
    }
}

impl ApiSuccess<()> {
    /// Success envelope with a message but no payload.
    pub fn message(status: StatusCode, message: &str) -> Self {
        ApiSuccess(
            status,
            Json(ApiResponseBody {
                code: status.as_u16(),
                message: message.to_string(),
                result: result_tag(status),
                data: None,
            }),
        )
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByEmail(_) => {
                ApiError::NotFound(err.to_string())
            }
            UserError::NameAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidUserId(_) => ApiError::UnprocessableEntity(err.to_string()),
            UserError::PasswordHashing(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Uniform response wrapper returned by every API operation.
///
/// Decouples transport status codes from business outcome classification:
/// `code` mirrors the HTTP status, `result` is the stable outcome tag, and
/// `data` carries the payload on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    code: u16,
    message: String,
    result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status: StatusCode, message: &str, data: T) -> Self {
        Self {
            code: status.as_u16(),
            message: message.to_string(),
            result: result_tag(status),
            data: Some(data),
        }
    }
}

impl ApiResponseBody<()> {
    pub fn new_error(status: StatusCode, message: String) -> Self {
        Self {
            code: status.as_u16(),
            message,
            result: result_tag(status),
            data: None,
        }
    }
}

/// Outward-facing user payload.
///
/// Timestamps are rendered as milliseconds since epoch; the password hash
/// never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub signature: String,
    pub background: String,
    pub create_time: i64,
    pub update_time: i64,
}

impl From<&crate::domain::user::models::User> for UserData {
    fn from(user: &crate::domain::user::models::User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            avatar: user.avatar.clone(),
            signature: user.signature.clone(),
            background: user.background.clone(),
            create_time: user.created_at.timestamp_millis(),
            update_time: user.updated_at.timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_tags_are_stable() {
        assert_eq!(result_tag(StatusCode::OK), "200Ok");
        assert_eq!(result_tag(StatusCode::CREATED), "201Created");
        assert_eq!(result_tag(StatusCode::UNAUTHORIZED), "401Unauthorized");
        assert_eq!(result_tag(StatusCode::NOT_FOUND), "404NotFound");
        assert_eq!(result_tag(StatusCode::CONFLICT), "409Conflict");
        assert_eq!(
            result_tag(StatusCode::UNPROCESSABLE_ENTITY),
            "422UnprocessableEntity"
        );
        assert_eq!(
            result_tag(StatusCode::INTERNAL_SERVER_ERROR),
            "500InternalServerError"
        );
    }

    #[test]
    fn test_conflict_errors_map_to_conflict() {
        let err = ApiError::from(UserError::EmailAlreadyExists("a@x.com".to_string()));
        assert!(matches!(err, ApiError::Conflict(_)));

        let err = ApiError::from(UserError::NameAlreadyExists("alice".to_string()));
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[test]
    fn test_infrastructure_errors_map_to_internal() {
        let err = ApiError::from(UserError::DatabaseError("connection lost".to_string()));
        assert!(matches!(err, ApiError::InternalServerError(_)));
    }
}
