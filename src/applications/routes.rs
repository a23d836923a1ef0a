// src/applications/routes.rs

use axum::{routing::get, Router};

use super::handlers;

/// Application routes, all scoped to the authenticated applicant
pub fn applications_routes() -> Router {
    Router::new()
        .route("/api/v1/application/apply/:job_id", get(handlers::apply_job))
        .route("/api/v1/application/get", get(handlers::get_applied_jobs))
        .route("/api/v1/application/isApplied/:job_id", get(handlers::is_job_applied))
}
