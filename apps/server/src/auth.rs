use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use spendwise_core::users::User;

use crate::error::ApiError;
use crate::main_lib::AppState;

const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: usize,
    iat: usize,
}

impl AuthManager {
    pub fn new(secret: &[u8]) -> Self {
        let encoding_key = EncodingKey::from_secret(secret);
        let decoding_key = DecodingKey::from_secret(secret);
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            encoding_key,
            decoding_key,
            validation,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    pub fn issue_token(&self, user_id: &str) -> Result<String, ApiError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| ApiError::Internal("System clock is before UNIX_EPOCH".into()))?;
        let exp = now + self.token_ttl;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.as_secs() as usize,
            exp: exp.as_secs() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(format!("Failed to sign token: {e}")))
    }

    /// Returns the user id encoded in a valid token.
    pub fn validate_token(&self, token: &str) -> Result<String, ApiError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature
                | jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature
                | jsonwebtoken::errors::ErrorKind::MissingRequiredClaim(_) => {
                    ApiError::Unauthorized("Unauthorized".to_string())
                }
                other => ApiError::Internal(format!("Failed to validate token: {other:?}")),
            })
    }

    pub fn expires_in(&self) -> Duration {
        self.token_ttl
    }
}

/// Resolves the signing secret: a base64 or 32-byte ASCII SECRET_KEY when
/// provided, otherwise a random per-process key (sessions won't survive a
/// restart in that mode).
pub fn resolve_secret(raw: Option<&str>) -> anyhow::Result<Vec<u8>> {
    match raw {
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                anyhow::bail!("SECRET_KEY cannot be empty");
            }
            let decoded = match BASE64.decode(trimmed) {
                Ok(bytes) => bytes,
                Err(_) if trimmed.len() >= 32 => trimmed.as_bytes().to_vec(),
                Err(_) => {
                    anyhow::bail!(
                        "SECRET_KEY must be base64 encoded or at least 32 ASCII characters"
                    )
                }
            };
            if decoded.len() < 32 {
                anyhow::bail!("SECRET_KEY must decode to at least 32 bytes");
            }
            Ok(decoded)
        }
        None => {
            tracing::warn!(
                "SECRET_KEY is not set; using a random signing key, tokens expire on restart"
            );
            let mut bytes = vec![0u8; 32];
            rand::thread_rng().fill_bytes(&mut bytes);
            Ok(bytes)
        }
    }
}

/// Extractor for the authenticated user behind a Bearer token.
pub struct CurrentUser(pub User);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        let mut pieces = header.splitn(2, ' ');
        let (Some(scheme), Some(token)) = (pieces.next(), pieces.next()) else {
            return Err(ApiError::Unauthorized("Invalid authorization header".to_string()));
        };
        if !scheme.eq_ignore_ascii_case("Bearer") {
            return Err(ApiError::Unauthorized("Invalid authorization scheme".to_string()));
        }
        let token = token.trim();
        if token.is_empty() {
            return Err(ApiError::Unauthorized("Empty bearer token".to_string()));
        }

        let user_id = state.auth.validate_token(token)?;
        let user = state
            .user_service
            .get_user(&user_id)
            .map_err(|_| ApiError::Unauthorized("Unknown user".to_string()))?;
        Ok(CurrentUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_round_trips() {
        let manager = AuthManager::new(b"0123456789abcdef0123456789abcdef");
        let token = manager.issue_token("user-1").unwrap();
        assert_eq!(manager.validate_token(&token).unwrap(), "user-1");
    }

    #[test]
    fn token_signed_with_other_key_is_rejected() {
        let manager = AuthManager::new(b"0123456789abcdef0123456789abcdef");
        let other = AuthManager::new(b"fedcba9876543210fedcba9876543210");
        let token = other.issue_token("user-1").unwrap();
        assert!(manager.validate_token(&token).is_err());
    }

    #[test]
    fn resolve_secret_accepts_ascii_key() {
        let secret = resolve_secret(Some("a-very-secret-key-of-32-bytes!!!")).unwrap();
        assert_eq!(secret.len(), 32);
    }

    #[test]
    fn resolve_secret_rejects_short_key() {
        assert!(resolve_secret(Some("too-short")).is_err());
    }
}
