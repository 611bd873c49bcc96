use auth::Role;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::register::ParseCredentialsError;
use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::Password;
use crate::domain::user::models::Username;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Create an account with an explicit role.
pub async fn admin_create_user(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedUser>,
    Json(body): Json<AdminCreateUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let user = state
        .user_service
        .create_user(body.try_into_command()?)
        .await?;

    tracing::info!(
        admin_id = %admin.user_id,
        user_id = %user.id,
        role = %user.role,
        "Administrator created user"
    );

    Ok(ApiSuccess::new(StatusCode::CREATED, (&user).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdminCreateUserRequest {
    username: String,
    password: String,
    #[serde(default = "default_role")]
    role: Role,
}

fn default_role() -> Role {
    Role::User
}

impl AdminCreateUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, ParseCredentialsError> {
        let username = Username::new(self.username)?;
        let password = Password::new(self.password)?;
        Ok(CreateUserCommand::new(username, password, self.role))
    }
}
