// src/companies/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Create the companies router
///
/// # Routes
/// - `POST /api/v1/company/register` - Register a company (recruiter)
/// - `GET /api/v1/company/get` - Companies owned by the caller
pub fn companies_routes() -> Router {
    Router::new()
        .route("/api/v1/company/register", post(handlers::register_company))
        .route("/api/v1/company/get", get(handlers::list_my_companies))
}
