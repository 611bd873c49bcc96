use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Role;
use chrono::Utc;

use crate::domain::user::models::ChangePasswordCommand;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Password;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Plaintext behind the hash that failed lookups are verified against.
const DUMMY_PASSWORD: &str = "todo-service-dummy-password";

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
/// Argon2 work runs on the blocking pool so request workers stay responsive.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    /// Verified against when the username is unknown, so every failed login
    /// pays for one Argon2 run.
    dummy_hash: String,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and verification
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        let dummy_hash = authenticator
            .hash_password(DUMMY_PASSWORD)
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Failed to prepare dummy password hash");
                String::new()
            });

        Self {
            repository,
            authenticator,
            dummy_hash,
        }
    }

    async fn hash_password(&self, password: &Password) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = password.as_str().to_string();

        tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| UserError::Unknown(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| UserError::PasswordHashing(e.to_string()))
    }

    async fn verify_password(&self, password: &str, password_hash: &str) -> bool {
        let authenticator = Arc::clone(&self.authenticator);
        let password = password.to_string();
        let password_hash = password_hash.to_string();

        tokio::task::spawn_blocking(move || {
            authenticator.verify_password(&password, &password_hash)
        })
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Password verification task failed");
            false
        })
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self.hash_password(&command.password).await?;

        let user = NewUser {
            username: command.username,
            password_hash,
            role: command.role,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            role = %created_user.role,
            "User created"
        );

        Ok(created_user)
    }

    async fn verify_credentials(&self, username: &str, password: &str) -> Result<User, UserError> {
        let Ok(username) = Username::new(username.to_string()) else {
            self.verify_password(password, &self.dummy_hash).await;
            return Err(UserError::InvalidCredentials);
        };

        let Some(user) = self.repository.find_by_username(&username).await? else {
            tracing::debug!(username = %username, "Login attempt for unknown user");
            self.verify_password(password, &self.dummy_hash).await;
            return Err(UserError::InvalidCredentials);
        };

        if !self.verify_password(password, &user.password_hash).await {
            tracing::debug!(user_id = %user.id, "Login attempt with wrong password");
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn change_password(
        &self,
        id: &UserId,
        command: ChangePasswordCommand,
    ) -> Result<User, UserError> {
        let mut user = self.get_user(id).await?;

        if !self
            .verify_password(&command.current_password, &user.password_hash)
            .await
        {
            return Err(UserError::InvalidCredentials);
        }

        user.password_hash = self.hash_password(&command.new_password).await?;
        self.repository
            .update_password_hash(&user.id, &user.password_hash)
            .await?;

        tracing::info!(user_id = %user.id, "Password changed");

        Ok(user)
    }

    async fn ensure_admin(
        &self,
        username: Username,
        password: Password,
    ) -> Result<(User, bool), UserError> {
        if let Some(existing) = self.repository.find_by_username(&username).await? {
            if existing.role != Role::Admin {
                tracing::warn!(
                    username = %existing.username,
                    role = %existing.role,
                    "Bootstrap admin username belongs to a non-admin account"
                );
            }
            return Ok((existing, false));
        }

        let command = CreateUserCommand::new(username.clone(), password, Role::Admin);
        match self.create_user(command).await {
            Ok(user) => Ok((user, true)),
            // Another instance seeded it between the lookup and the insert.
            Err(UserError::UsernameAlreadyExists(_)) => self
                .repository
                .find_by_username(&username)
                .await?
                .map(|user| (user, false))
                .ok_or(UserError::NotFound(username.to_string())),
            Err(e) => Err(e),
        }
    }
}
