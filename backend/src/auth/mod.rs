//! Authentication module
//!
//! HS256-signed bearer tokens, argon2 password hashing, and the guard
//! middleware that turns a bearer token into an [`AuthUser`].

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, TokenKeys, TokenService, TOKEN_ALGORITHM};
pub use middleware::{require_auth, AuthUser};
pub use password::PasswordService;
