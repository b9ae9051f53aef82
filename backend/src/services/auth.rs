//! Sign-up and sign-in

use crate::auth::{PasswordService, TokenService};
use crate::error::ApiError;
use crate::repositories::{is_unique_violation, UserRecord, UserRepository};
use hoot_shared::{
    validation::{validate_credentials, validate_present},
    AuthError, TokenPayload, TokenResponse,
};
use sqlx::PgPool;
use tracing::{error, info, warn};

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user and return a token for it
    ///
    /// Store, hashing and signing failures surface as
    /// [`ApiError::SignUpFailed`] (401) rather than a bare 500.
    pub async fn sign_up(
        pool: &PgPool,
        tokens: &TokenService,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse, ApiError> {
        Self::register(pool, tokens, username, password)
            .await
            .map_err(|e| match e {
                ApiError::Internal(err) => ApiError::SignUpFailed(err),
                other => other,
            })
    }

    async fn register(
        pool: &PgPool,
        tokens: &TokenService,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse, ApiError> {
        validate_credentials(username, password)?;

        if UserRepository::username_exists(pool, username)
            .await
            .map_err(ApiError::Internal)?
        {
            warn!(username, "Sign-up rejected: username taken");
            return Err(AuthError::DuplicateUsername.into());
        }

        let password_hash = PasswordService::hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        // A concurrent sign-up can win between the check and the insert
        let user = UserRepository::create(pool, username, &password_hash)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ApiError::Auth(AuthError::DuplicateUsername)
                } else {
                    ApiError::Internal(e)
                }
            })?;

        info!(user_id = user.id, "User signed up");
        Self::token_for(tokens, user)
    }

    /// Check credentials and return a token for the matching user
    ///
    /// Unknown usernames and wrong passwords fail identically. Only empty
    /// fields are rejected up front; any other malformed input is just a
    /// credential that does not match.
    pub async fn sign_in(
        pool: &PgPool,
        tokens: &TokenService,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse, ApiError> {
        validate_present(username, password)?;

        let user = UserRepository::find_by_username(pool, username)
            .await
            .map_err(ApiError::Internal)?
            .ok_or(AuthError::InvalidCredentials)?;

        let valid = PasswordService::verify_async(password.to_string(), user.password.clone())
            .await
            .unwrap_or_else(|e| {
                error!(user_id = user.id, error = %e, "Stored password hash is unreadable");
                false
            });

        if !valid {
            warn!(user_id = user.id, "Sign-in rejected");
            return Err(AuthError::InvalidCredentials.into());
        }

        info!(user_id = user.id, "User signed in");
        Self::token_for(tokens, user)
    }

    fn token_for(tokens: &TokenService, user: UserRecord) -> Result<TokenResponse, ApiError> {
        let token = tokens
            .issue(TokenPayload {
                username: user.username,
                id: user.id,
            })
            .map_err(ApiError::Internal)?;

        Ok(TokenResponse { token })
    }
}
