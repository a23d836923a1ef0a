//! # Auth Module
//!
//! Bearer token verification only: the `AuthedUser` extractor checks an
//! HS256 JWT and loads the user row. Tokens are issued elsewhere.

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

pub use extractors::AuthedUser;
pub use models::{Role, User};
pub use routes::auth_routes;
