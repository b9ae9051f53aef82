//! Authentication guard
//!
//! [`require_auth`] is layered over protected routers. It validates the
//! bearer token before the wrapped handler runs and stores the caller's
//! identity in the request extensions, where handlers read it through the
//! [`AuthUser`] extractor.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use hoot_shared::{AuthError, TokenPayload};
use tracing::debug;

/// Authenticated identity of the current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
}

impl From<TokenPayload> for AuthUser {
    fn from(payload: TokenPayload) -> Self {
        Self {
            id: payload.id,
            username: payload.username,
        }
    }
}

/// Pull the token out of `Authorization: Bearer <token>`
fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::Unauthenticated)?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AuthError::Unauthenticated.into())
}

/// Reject requests without a valid bearer token
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;

    let payload = state.tokens().verify(token).map_err(|e| {
        debug!(error = %e, "Rejected bearer token");
        AuthError::Unauthenticated
    })?;

    request.extensions_mut().insert(AuthUser::from(payload));

    Ok(next.run(request).await)
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Present only when `require_auth` ran for this route
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AuthError::Unauthenticated.into())
    }
}
