//! Authentication routes
//!
//! `POST /auth/sign-up` and `POST /auth/sign-in`. Both answer 201 with a
//! `{token}` body.

use crate::error::ApiResult;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use hoot_shared::{Credentials, TokenResponse};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
}

/// Register a new user
async fn sign_up(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    let Json(req) = body?;
    let token =
        AuthService::sign_up(state.db(), state.tokens(), &req.username, &req.password).await?;
    Ok((StatusCode::CREATED, Json(token)))
}

/// Exchange credentials for a token
async fn sign_in(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    let Json(req) = body?;
    let token =
        AuthService::sign_in(state.db(), state.tokens(), &req.username, &req.password).await?;
    Ok((StatusCode::CREATED, Json(token)))
}
