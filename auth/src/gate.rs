use thiserror::Error;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::role::Requirement;
use crate::role::Role;

/// Rejection produced by the authorization gate.
///
/// Everything except `Forbidden` means the caller is not authenticated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Authorization header is not of the form 'Bearer <token>'")]
    MalformedHeader,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] JwtError),

    #[error("Role {actual} does not satisfy {required}")]
    Forbidden { required: Requirement, actual: Role },
}

impl AccessError {
    pub fn is_unauthenticated(&self) -> bool {
        !self.is_forbidden()
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, AccessError::Forbidden { .. })
    }
}

/// Extract the token from an `Authorization` header value.
///
/// The scheme is matched case-insensitively; surrounding whitespace is ignored.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AccessError> {
    let header = header.map(str::trim).filter(|h| !h.is_empty());
    let Some(header) = header else {
        return Err(AccessError::MissingToken);
    };

    let (scheme, token) = header
        .split_once(' ')
        .ok_or(AccessError::MalformedHeader)?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(AccessError::MalformedHeader);
    }

    Ok(token)
}

/// Decide whether a request may reach an operation with `requirement`.
///
/// Verifies the bearer token as of `now` and checks the role it carries.
/// Returns the verified claims when the request is admitted.
pub fn authorize(
    jwt_handler: &JwtHandler,
    header: Option<&str>,
    requirement: Requirement,
    now: i64,
) -> Result<Claims, AccessError> {
    let token = bearer_token(header)?;
    let claims = jwt_handler.decode_at(token, now)?;

    if !claims.role.satisfies(requirement) {
        return Err(AccessError::Forbidden {
            required: requirement,
            actual: claims.role,
        });
    }

    Ok(claims)
}
