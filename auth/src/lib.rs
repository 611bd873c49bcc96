//! Authentication utilities library
//!
//! Provides the authentication core shared by the service:
//! - Password hashing (Argon2id, configurable cost)
//! - JWT token issuance and validation (HS256, fixed TTL)
//! - Role-gated request authorization
//!
//! Everything here is synchronous and free of I/O. The signing secret is
//! passed in at construction and never read from globals.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_cost(1).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, PasswordHasher, Requirement, Role, Subject};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Duration::hours(1),
//!     PasswordHasher::with_cost(1).unwrap(),
//! );
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let subject = Subject { user_id: "1", username: "alice", role: Role::User };
//! let result = auth.authenticate("password123", &hash, subject).unwrap();
//!
//! // Gate a request
//! let header = format!("Bearer {}", result.access_token);
//! let claims = auth
//!     .authorize(Some(header.as_str()), Requirement::Role(Role::User))
//!     .unwrap();
//! assert_eq!(claims.sub, "1");
//! ```

pub mod authenticator;
pub mod gate;
pub mod jwt;
pub mod password;
pub mod role;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::Subject;
pub use gate::AccessError;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use role::Requirement;
pub use role::Role;
