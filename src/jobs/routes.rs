// src/jobs/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Create the jobs router with all job-related routes
pub fn jobs_routes() -> Router {
    Router::new()
        // Public routes
        .route("/api/v1/job/get", get(handlers::list_jobs))
        .route("/api/v1/job/get/:id", get(handlers::get_job_by_id))
        .route("/api/v1/job/search", post(handlers::advanced_search))
        // Recruiter routes
        .route("/api/v1/job/post", post(handlers::post_job))
}
