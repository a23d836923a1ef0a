//! Authentication routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `GET /api/v1/user/me` - Get current user information
pub fn auth_routes() -> Router {
    Router::new().route("/api/v1/user/me", get(handlers::me_handler))
}
