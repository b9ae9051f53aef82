//! Application state management
//!
//! Shared, immutable resources handed to every handler through Axum's
//! state extraction. Configuration is injected here once at startup; no
//! handler reads process-wide globals.

use crate::auth::TokenService;
use crate::config::AppConfig;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
///
/// Cloning is cheap: the pool and token keys are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Credential store connection pool
    pub db: PgPool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Token issuer/verifier keyed with the configured secret
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        let tokens = TokenService::new(&config.jwt.secret, config.jwt.token_expiry_secs);

        Self {
            db,
            config: Arc::new(config),
            tokens,
        }
    }

    #[inline]
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
}
