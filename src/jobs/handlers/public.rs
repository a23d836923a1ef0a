// src/jobs/handlers/public.rs

use axum::{
    extract::{Extension, Path, Query},
    response::Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::common::{ApiError, AppState, Validator};
use crate::jobs::models::*;
use crate::jobs::queries;
use crate::jobs::validators::SearchParamsValidator;
use crate::search::matchers::matches_salary;
use crate::search::{AdvancedFilter, JobFilter};

/// GET /api/v1/job/get - List jobs, optionally filtered by keyword and salary window.
///
/// When both are given a job must pass the keyword filter and fall inside the
/// window.
pub async fn list_jobs(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Query(params): Query<JobSearchParams>,
) -> Result<Json<JobListResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let validation_result = SearchParamsValidator.validate(&params);
    if !validation_result.is_valid {
        warn!(errors = ?validation_result.errors, "Job search validation failed");
        return Err(ApiError::from(validation_result));
    }

    let mut jobs = queries::all_jobs(&state.db).await?;
    let total = jobs.len();

    if let Some(keyword) = params.keyword.as_deref() {
        let filter = JobFilter::new(state.facet_tables, keyword);
        if let Some(facet) = filter.facet() {
            debug!(keyword = %keyword, facet = facet.kind(), "Applying keyword filter");
        }
        jobs = filter.retain(jobs);
    }

    if let Some(window) = params.salary_window() {
        jobs.retain(|job| matches_salary(job, window));
    }

    debug!(
        total = total,
        matched = jobs.len(),
        keyword = ?params.keyword,
        min_salary = ?params.min_salary,
        max_salary = ?params.max_salary,
        "Loaded jobs list"
    );

    Ok(Json(JobListResponse {
        success: true,
        jobs,
    }))
}

/// GET /api/v1/job/get/:id - Get a specific job by ID
pub async fn get_job_by_id(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Path(job_id): Path<String>,
) -> Result<Json<JobResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let job = queries::job_by_id(&state.db, &job_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))?;

    debug!(job_id = %job_id, job_title = %job.title, "Loaded job details");

    Ok(Json(JobResponse { success: true, job }))
}

/// POST /api/v1/job/search - Multi-field search where every field must match
pub async fn advanced_search(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(filter): Json<AdvancedFilter>,
) -> Result<Json<JobListResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let all = queries::all_jobs(&state.db).await?;
    let jobs: Vec<Job> = filter
        .apply(state.facet_tables, &all)
        .cloned()
        .collect();

    debug!(
        total = all.len(),
        matched = jobs.len(),
        filter = ?filter,
        "Advanced job search"
    );

    Ok(Json(JobListResponse {
        success: true,
        jobs,
    }))
}
