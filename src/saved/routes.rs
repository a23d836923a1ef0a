// src/saved/routes.rs

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers;

/// Saved job routes, all scoped to the authenticated user
pub fn saved_jobs_routes() -> Router {
    Router::new()
        .route("/api/v1/user/saveJob/:job_id", post(handlers::save_job))
        .route("/api/v1/user/unsaveJob/:job_id", delete(handlers::unsave_job))
        .route("/api/v1/user/savedJobs", get(handlers::get_saved_jobs))
        .route("/api/v1/user/isJobSaved/:job_id", get(handlers::is_job_saved))
}
