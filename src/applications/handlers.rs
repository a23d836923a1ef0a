// src/applications/handlers.rs
//! Handlers for applying to jobs

use axum::{
    extract::{Extension, Path},
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::models::*;
use crate::auth::AuthedUser;
use crate::common::{generate_application_id, ApiError, AppState};
use crate::jobs::queries;

/// GET /api/v1/application/apply/:job_id - Apply to a job as the authenticated user
pub async fn apply_job(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(job_id): Path<String>,
) -> Result<Json<ApplyResponse>, ApiError> {
    let state = state_lock.read().await.clone();
    let applicant_id = &authed.id;

    if queries::job_by_id(&state.db, &job_id).await?.is_none() {
        warn!(applicant_id = %applicant_id, job_id = %job_id, "Application rejected: job not found");
        return Err(ApiError::NotFound("Job not found".to_string()));
    }

    let application_id = generate_application_id();

    // UNIQUE(job_id, applicant_id) settles concurrent duplicates
    let result = sqlx::query(
        r#"
        INSERT INTO applications (id, job_id, applicant_id, status, created_at)
        VALUES (?, ?, ?, 'pending', datetime('now'))
        ON CONFLICT(job_id, applicant_id) DO NOTHING
        "#,
    )
    .bind(&application_id)
    .bind(&job_id)
    .bind(applicant_id)
    .execute(&state.db)
    .await?;

    if result.rows_affected() == 0 {
        debug!(applicant_id = %applicant_id, job_id = %job_id, "Application rejected: already applied");
        return Err(ApiError::BadRequest(ALREADY_APPLIED_MESSAGE.to_string()));
    }

    let application = sqlx::query_as::<_, Application>(
        "SELECT id, job_id, applicant_id, status, created_at FROM applications WHERE id = ?",
    )
    .bind(&application_id)
    .fetch_one(&state.db)
    .await?;

    info!(
        applicant_id = %applicant_id,
        application_id = %application_id,
        job_id = %job_id,
        "Application submitted"
    );

    Ok(Json(ApplyResponse {
        success: true,
        message: "Job applied successfully".to_string(),
        application,
    }))
}

/// GET /api/v1/application/get - Jobs the authenticated user applied to
pub async fn get_applied_jobs(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<AppliedJobsResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let jobs = queries::applied_jobs_for(&state.db, &authed.id).await?;
    debug!(applicant_id = %authed.id, count = jobs.len(), "Loaded applied jobs");

    Ok(Json(AppliedJobsResponse {
        success: true,
        jobs,
    }))
}

/// GET /api/v1/application/isApplied/:job_id
pub async fn is_job_applied(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(job_id): Path<String>,
) -> Result<Json<IsJobAppliedResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let existing: Option<(String,)> =
        sqlx::query_as("SELECT id FROM applications WHERE job_id = ? AND applicant_id = ?")
            .bind(&job_id)
            .bind(&authed.id)
            .fetch_optional(&state.db)
            .await?;

    Ok(Json(IsJobAppliedResponse {
        success: true,
        is_applied: existing.is_some(),
    }))
}
