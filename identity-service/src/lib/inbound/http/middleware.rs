use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiResponseBody;
use crate::inbound::http::router::AppState;

/// Extension type to store authenticated user identity in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

/// Middleware that validates identity tokens and adds user info to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // Extract token from Authorization header
    let token = extract_token_from_header(&req)?;

    // Validate token and extract claims; signature, expiry, issuer, and
    // audience are checked together
    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        unauthorized("Invalid or expired token")
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::error!("Failed to parse user ID from token: {}", e);
        unauthorized("Invalid token format")
    })?;

    // Add authenticated user info to request extensions
    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        name: claims.name,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponseBody::new_error(
            StatusCode::UNAUTHORIZED,
            message.to_string(),
        )),
    )
        .into_response()
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    if !auth_str.starts_with("Bearer ") {
        return Err(unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>",
        ));
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
