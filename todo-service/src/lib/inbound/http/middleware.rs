use auth::AccessError;
use auth::Requirement;
use auth::Role;
use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Identity of an admitted caller, stored in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
    pub role: Role,
}

/// Gate for routes open to any authenticated caller.
pub async fn require_authenticated(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    gate(&state, req, next, Requirement::Authenticated).await
}

/// Gate for routes that need the `User` role (administrators pass too).
pub async fn require_user(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    gate(&state, req, next, Requirement::Role(Role::User)).await
}

/// Gate for administrator-only routes.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    gate(&state, req, next, Requirement::Role(Role::Admin)).await
}

async fn gate(
    state: &AppState,
    mut req: Request,
    next: Next,
    requirement: Requirement,
) -> Result<Response, Response> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let claims = state
        .authenticator
        .authorize(header, requirement)
        .map_err(|e| {
            tracing::warn!(
                method = %req.method(),
                uri = %req.uri(),
                requirement = %requirement,
                reason = %e,
                "Request rejected by authorization gate"
            );
            rejection(&e).into_response()
        })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a user id");
        ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

fn rejection(error: &AccessError) -> ApiError {
    match error {
        AccessError::Forbidden { .. } => ApiError::Forbidden("Insufficient permissions".to_string()),
        AccessError::MissingToken | AccessError::MalformedHeader => {
            ApiError::Unauthorized("Missing or malformed bearer token".to_string())
        }
        AccessError::InvalidToken(_) => {
            ApiError::Unauthorized("Invalid or expired token".to_string())
        }
    }
}
