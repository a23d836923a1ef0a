// src/lib.rs
//! Job portal: REST backend for listing, searching, saving and applying to jobs, and the
//! client-side board and saved-state reconciler that consume it.

use axum::{extract::Extension, middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

pub mod applications;
pub mod auth;
pub mod client;
pub mod common;
pub mod companies;
pub mod jobs;
pub mod logging_middleware;
pub mod saved;
pub mod search;

use common::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "success": true, "message": "OK" }))
}

/// Every API route with request logging and shared state attached.
/// CORS and HTTP tracing are added by the binary.
pub fn app_router(state: Arc<RwLock<AppState>>) -> Router {
    Router::new()
        .route("/health", get(health))
        // ====================================================================
        // AUTHENTICATION ROUTES
        // ====================================================================
        .merge(auth::auth_routes())
        // ====================================================================
        // JOB ROUTES (Public and Recruiter)
        // ====================================================================
        .merge(jobs::jobs_routes())
        // ====================================================================
        // SAVED JOB ROUTES
        // ====================================================================
        .merge(saved::saved_jobs_routes())
        // ====================================================================
        // APPLICATION ROUTES
        // ====================================================================
        .merge(applications::applications_routes())
        // ====================================================================
        // COMPANY ROUTES
        // ====================================================================
        .merge(companies::companies_routes())
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(state))
}
