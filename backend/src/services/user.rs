//! User directory

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::UserRepository;
use hoot_shared::{AuthError, PublicUser};
use sqlx::PgPool;

/// User directory service
pub struct UserService;

impl UserService {
    /// List every user
    pub async fn list_users(pool: &PgPool) -> Result<Vec<PublicUser>, ApiError> {
        UserRepository::list(pool).await.map_err(ApiError::Internal)
    }

    /// Fetch one user; callers may only fetch themselves
    pub async fn get_user(
        pool: &PgPool,
        caller: &AuthUser,
        user_id: i32,
    ) -> Result<PublicUser, ApiError> {
        Self::ensure_owner(caller, user_id)?;

        UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .map(PublicUser::from)
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }

    /// Both ids are `i32` here; the path id was parsed before this point
    pub fn ensure_owner(caller: &AuthUser, user_id: i32) -> Result<(), ApiError> {
        if caller.id == user_id {
            Ok(())
        } else {
            Err(AuthError::Forbidden.into())
        }
    }
}
