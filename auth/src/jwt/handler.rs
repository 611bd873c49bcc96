use chrono::Utc;
use jsonwebtoken::crypto;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// JWT token handler for encoding and decoding tokens.
///
/// Uses HS256 (HMAC with SHA-256). The keys are derived once from the secret
/// and never change for the lifetime of the handler.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token against the current time.
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        self.decode_at(token, Utc::now().timestamp())
    }

    /// Decode and validate a JWT token as of `now` (Unix timestamp).
    ///
    /// The signature is checked over the raw `header.payload` bytes before
    /// either segment is parsed, so any change to a well-formed token is
    /// reported as `InvalidSignature`.
    ///
    /// # Errors
    /// * `Malformed` - Token is not `header.payload.signature`, or the signed
    ///   parts do not decode to our claims
    /// * `InvalidSignature` - Signature does not match under this secret
    /// * `Expired` - `now` is at or past the `exp` claim
    pub fn decode_at(&self, token: &str, now: i64) -> Result<Claims, JwtError> {
        self.verify_signature(token)?;

        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below with zero leeway and an inclusive bound.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    ErrorKind::ExpiredSignature => JwtError::Expired,
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        if claims.is_expired(now) {
            return Err(JwtError::Expired);
        }

        Ok(claims)
    }

    fn verify_signature(&self, token: &str) -> Result<(), JwtError> {
        let malformed = || JwtError::Malformed("expected header.payload.signature".to_string());

        let (message, signature) = token.rsplit_once('.').ok_or_else(malformed)?;
        if signature.is_empty() || message.split('.').count() != 2 {
            return Err(malformed());
        }

        let valid = crypto::verify(
            signature,
            message.as_bytes(),
            &self.decoding_key,
            self.algorithm,
        )
        .map_err(|e| JwtError::Malformed(e.to_string()))?;

        if !valid {
            return Err(JwtError::InvalidSignature);
        }

        Ok(())
    }
}
