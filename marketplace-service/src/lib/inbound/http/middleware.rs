use axum::extract::Request;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::auth::models::UserId;
use crate::inbound::http::router::AppState;

/// Request headers mirroring the authenticated identity for handlers
/// and collaborating services behind this one.
pub const USER_ID_HEADER: &str = "user-id";
pub const USER_LOGIN_HEADER: &str = "user-login";

/// Extension type to store the authenticated identity in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub login: String,
}

/// Middleware that validates bearer tokens and adds user info to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // Extract token from Authorization header
    let token = extract_token_from_header(&req)?;

    let claims = state.auth_service.parse_token(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        unauthorized("invalid or expired token")
    })?;

    let user = AuthenticatedUser {
        user_id: UserId(claims.user_id),
        login: claims.login,
    };

    // Mirror the identity into request headers
    let headers = req.headers_mut();
    headers.insert(
        http::HeaderName::from_static(USER_ID_HEADER),
        HeaderValue::from(user.user_id.0),
    );
    if let Ok(login) = HeaderValue::from_str(&user.login) {
        headers.insert(http::HeaderName::from_static(USER_LOGIN_HEADER), login);
    }

    // Add authenticated user info to request extensions
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("authorization token required"))?;

    auth_header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| unauthorized("invalid authorization header format"))
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": message
        })),
    )
        .into_response()
}
