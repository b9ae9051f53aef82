//! Business logic services
//!
//! Services validate input and coordinate between repositories, the
//! password hasher and the token issuer.

pub mod auth;
pub mod user;

pub use auth::AuthService;
pub use user::UserService;
