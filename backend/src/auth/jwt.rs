//! Token issuing and verification
//!
//! Tokens are JWTs carrying `{payload: {username, id}}`. The algorithm is
//! pinned to HS256 on both sides; a token signed with anything else is
//! rejected even when the secret matches.

use anyhow::Result;
use chrono::{Duration, Utc};
use hoot_shared::TokenPayload;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The only algorithm tokens are signed and verified with
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub payload: TokenPayload,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signing keys derived from the shared secret
#[derive(Clone)]
pub struct TokenKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// Issues and verifies bearer tokens
///
/// Built once at startup from configuration and shared through `AppState`.
#[derive(Clone)]
pub struct TokenService {
    keys: TokenKeys,
    validation: Arc<Validation>,
    expiry_secs: i64,
}

impl TokenService {
    pub fn new(secret: &str, expiry_secs: i64) -> Self {
        let mut validation = Validation::new(TOKEN_ALGORITHM);
        validation.set_required_spec_claims(&["exp"]);

        Self {
            keys: TokenKeys::new(secret),
            validation: Arc::new(validation),
            expiry_secs,
        }
    }

    /// Sign a payload into a token
    pub fn issue(&self, payload: TokenPayload) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            payload,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.expiry_secs)).timestamp(),
        };

        encode(&Header::new(TOKEN_ALGORITHM), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))
    }

    /// Verify a token's signature and expiry and return its payload
    pub fn verify(&self, token: &str) -> Result<TokenPayload> {
        let data = decode::<Claims>(token, &self.keys.decoding, &self.validation)
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(data.claims.payload)
    }

    /// Token lifetime in seconds
    #[inline]
    pub fn expiry_secs(&self) -> i64 {
        self.expiry_secs
    }
}
