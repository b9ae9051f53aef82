//! User directory routes
//!
//! Every route here sits behind [`require_auth`].

use crate::auth::{require_auth, AuthUser};
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    middleware,
    routing::get,
    Json, Router,
};
use hoot_shared::PublicUser;

/// Create user directory routes, guarded by bearer-token auth
pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

/// GET /users
async fn list_users(
    State(state): State<AppState>,
    _caller: AuthUser,
) -> ApiResult<Json<Vec<PublicUser>>> {
    let users = UserService::list_users(state.db()).await?;
    Ok(Json(users))
}

/// GET /users/:id
///
/// The path id is parsed as `i32`, the same type as the token's id, so
/// `/users/07` is the same user as `/users/7`.
async fn get_user(
    State(state): State<AppState>,
    caller: AuthUser,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<PublicUser>> {
    let Path(user_id) = path?;
    let user = UserService::get_user(state.db(), &caller, user_id).await?;
    Ok(Json(user))
}
