use auth::Subject;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<AuthenticateRequestBody>,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    // Unknown user and wrong password must look the same to the caller.
    let user = state
        .user_service
        .verify_credentials(&body.username, &body.password)
        .await
        .map_err(|e| match e {
            UserError::InvalidCredentials => ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()),
            _ => ApiError::from(e),
        })?;

    let user_id = user.id.to_string();
    let result = state
        .authenticator
        .issue_token(Subject {
            user_id: &user_id,
            username: user.username.as_str(),
            role: user.role,
        })
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    tracing::info!(user_id = %user.id, role = %user.role, "User logged in");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthenticateResponseData {
            user: (&user).into(),
            token: result.access_token,
            expires_at: result.expires_at,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateResponseData {
    pub user: UserData,
    pub token: String,
    pub expires_at: i64,
}
