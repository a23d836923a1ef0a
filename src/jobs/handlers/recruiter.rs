// src/jobs/handlers/recruiter.rs

use axum::{extract::Extension, response::Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::auth::AuthedUser;
use crate::common::{generate_job_id, ApiError, AppState, Validator};
use crate::jobs::models::*;
use crate::jobs::queries;
use crate::jobs::validators::JobValidator;

/// POST /api/v1/job/post - Post a job under one of the caller's companies
pub async fn post_job(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<CreateJob>,
) -> Result<Json<JobCreatedResponse>, ApiError> {
    authed.require_recruiter()?;
    let state = state_lock.read().await.clone();

    let validation_result = JobValidator.validate(&request);
    if !validation_result.is_valid {
        warn!(
            user_id = %authed.id,
            errors = ?validation_result.errors,
            "Job creation validation failed"
        );
        return Err(ApiError::from(validation_result));
    }

    let owner: Option<(String,)> = sqlx::query_as("SELECT owner_id FROM companies WHERE id = ?")
        .bind(&request.company_id)
        .fetch_optional(&state.db)
        .await?;

    match owner {
        None => return Err(ApiError::NotFound("Company not found".to_string())),
        Some((owner_id,)) if owner_id != authed.id => {
            warn!(
                user_id = %authed.id,
                company_id = %request.company_id,
                "Job post rejected: company owned by another recruiter"
            );
            return Err(ApiError::Forbidden(
                "You can only post jobs for your own companies".to_string(),
            ));
        }
        Some(_) => {}
    }

    let job_id = generate_job_id();
    sqlx::query(
        r#"
        INSERT INTO jobs (id, title, description, location, salary, company_id, created_by, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, datetime('now'))
        "#,
    )
    .bind(&job_id)
    .bind(request.title.trim())
    .bind(&request.description)
    .bind(&request.location)
    .bind(&request.salary)
    .bind(&request.company_id)
    .bind(&authed.id)
    .execute(&state.db)
    .await?;

    let job = queries::job_by_id(&state.db, &job_id)
        .await?
        .ok_or_else(|| ApiError::InternalServer("Created job could not be loaded".to_string()))?;

    info!(job_id = %job_id, company_id = %request.company_id, "Job posted");

    Ok(Json(JobCreatedResponse {
        success: true,
        message: "New job created successfully.".to_string(),
        job,
    }))
}
