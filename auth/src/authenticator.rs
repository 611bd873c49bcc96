use chrono::Duration;
use chrono::Utc;

use crate::gate;
use crate::gate::AccessError;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::role::Requirement;
use crate::role::Role;

/// Authentication coordinator combining password verification, token
/// issuance and the authorization gate.
///
/// Holds the signing secret for the lifetime of the process. Immutable after
/// construction, so one instance can be shared behind an `Arc` by every
/// request worker.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,

    /// Expiration of the access token (Unix timestamp)
    pub expires_at: i64,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

/// Identity a token is minted for.
#[derive(Debug, Clone, Copy)]
pub struct Subject<'a> {
    pub user_id: &'a str,
    pub username: &'a str,
    pub role: Role,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `token_ttl` - Lifetime of issued tokens
    /// * `password_hasher` - Hasher configured with the desired cost
    pub fn new(jwt_secret: &[u8], token_ttl: Duration, password_hasher: PasswordHasher) -> Self {
        Self {
            password_hasher,
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl,
        }
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash. Fails closed.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and generate a JWT token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match or the hash is unusable
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: Subject<'_>,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.verify_password(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(subject)?)
    }

    /// Generate a JWT token without password verification.
    pub fn issue_token(&self, subject: Subject<'_>) -> Result<AuthenticationResult, JwtError> {
        self.issue_token_at(subject, Utc::now().timestamp())
    }

    /// Generate a JWT token issued at `now` (Unix timestamp).
    pub fn issue_token_at(
        &self,
        subject: Subject<'_>,
        now: i64,
    ) -> Result<AuthenticationResult, JwtError> {
        let claims = Claims::for_user(
            subject.user_id,
            subject.username,
            subject.role,
            now,
            self.token_ttl,
        );
        let access_token = self.jwt_handler.encode(&claims)?;

        Ok(AuthenticationResult {
            access_token,
            expires_at: claims.exp,
        })
    }

    /// Validate and decode a JWT token.
    ///
    /// # Errors
    /// * `Malformed`, `InvalidSignature`, `Expired`
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }

    /// Validate and decode a JWT token as of `now` (Unix timestamp).
    pub fn validate_token_at(&self, token: &str, now: i64) -> Result<Claims, JwtError> {
        self.jwt_handler.decode_at(token, now)
    }

    /// Run the authorization gate on an `Authorization` header value.
    pub fn authorize(
        &self,
        header: Option<&str>,
        requirement: Requirement,
    ) -> Result<Claims, AccessError> {
        self.authorize_at(header, requirement, Utc::now().timestamp())
    }

    /// Run the authorization gate as of `now` (Unix timestamp).
    pub fn authorize_at(
        &self,
        header: Option<&str>,
        requirement: Requirement,
        now: i64,
    ) -> Result<Claims, AccessError> {
        gate::authorize(&self.jwt_handler, header, requirement, now)
    }
}
