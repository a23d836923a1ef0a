// src/saved/handlers.rs
//! Saved jobs handlers for user job bookmarking functionality

use axum::{
    extract::{Extension, Path},
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::models::*;
use crate::auth::AuthedUser;
use crate::common::{generate_saved_job_id, ApiError, AppState};
use crate::jobs::queries;

/// POST /api/v1/user/saveJob/:job_id - Save a job for the authenticated user
pub async fn save_job(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(job_id): Path<String>,
) -> Result<Json<SaveJobResponse>, ApiError> {
    let state = state_lock.read().await.clone();
    let user_id = &authed.id;

    let job_exists: Option<(String,)> = sqlx::query_as("SELECT id FROM jobs WHERE id = ?")
        .bind(&job_id)
        .fetch_optional(&state.db)
        .await?;

    if job_exists.is_none() {
        warn!(user_id = %user_id, job_id = %job_id, "Save rejected: job not found");
        return Err(ApiError::NotFound("Job not found".to_string()));
    }

    // The unique (user_id, job_id) index turns a racing duplicate into a no-op
    let result = sqlx::query(
        r#"
        INSERT INTO saved_jobs (id, user_id, job_id, saved_at)
        VALUES (?, ?, ?, datetime('now'))
        ON CONFLICT(user_id, job_id) DO NOTHING
        "#,
    )
    .bind(generate_saved_job_id())
    .bind(user_id)
    .bind(&job_id)
    .execute(&state.db)
    .await?;

    if result.rows_affected() == 0 {
        debug!(user_id = %user_id, job_id = %job_id, "Save rejected: already saved");
        return Err(ApiError::BadRequest(ALREADY_SAVED_MESSAGE.to_string()));
    }

    info!(user_id = %user_id, job_id = %job_id, "Job saved");

    let saved_jobs = queries::saved_job_ids_for(&state.db, user_id).await?;
    Ok(Json(SaveJobResponse {
        success: true,
        message: "Job saved successfully".to_string(),
        saved_jobs,
    }))
}

/// DELETE /api/v1/user/unsaveJob/:job_id - Remove a saved job; idempotent
pub async fn unsave_job(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(job_id): Path<String>,
) -> Result<Json<SaveJobResponse>, ApiError> {
    let state = state_lock.read().await.clone();
    let user_id = &authed.id;

    let result = sqlx::query("DELETE FROM saved_jobs WHERE user_id = ? AND job_id = ?")
        .bind(user_id)
        .bind(&job_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        debug!(user_id = %user_id, job_id = %job_id, "Unsave of a job that was not saved");
    } else {
        info!(user_id = %user_id, job_id = %job_id, "Job unsaved");
    }

    let saved_jobs = queries::saved_job_ids_for(&state.db, user_id).await?;
    Ok(Json(SaveJobResponse {
        success: true,
        message: "Job unsaved successfully".to_string(),
        saved_jobs,
    }))
}

/// GET /api/v1/user/savedJobs - All saved jobs for the authenticated user
pub async fn get_saved_jobs(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<SavedJobsResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let jobs = queries::saved_jobs_for(&state.db, &authed.id).await?;
    debug!(user_id = %authed.id, count = jobs.len(), "Loaded saved jobs");

    Ok(Json(SavedJobsResponse {
        success: true,
        jobs,
    }))
}

/// GET /api/v1/user/isJobSaved/:job_id - Check if a job is saved by the user
pub async fn is_job_saved(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(job_id): Path<String>,
) -> Result<Json<IsJobSavedResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let existing: Option<(String,)> =
        sqlx::query_as("SELECT id FROM saved_jobs WHERE user_id = ? AND job_id = ?")
            .bind(&authed.id)
            .bind(&job_id)
            .fetch_optional(&state.db)
            .await?;

    Ok(Json(IsJobSavedResponse {
        success: true,
        is_saved: existing.is_some(),
    }))
}
