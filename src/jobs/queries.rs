// src/jobs/queries.rs
//! Job lookups shared by the job, saved-job and application handlers

use sqlx::SqlitePool;

use super::models::{Job, JobRow};

const JOB_SELECT: &str = r#"SELECT
        j.id, j.title, j.description, j.location, j.salary,
        j.company_id, c.name AS company_name, j.created_at
    FROM jobs j
    LEFT JOIN companies c ON c.id = j.company_id"#;

/// Every job, newest first
pub async fn all_jobs(db: &SqlitePool) -> Result<Vec<Job>, sqlx::Error> {
    let rows = sqlx::query_as::<_, JobRow>(&format!(
        "{} ORDER BY j.created_at DESC, j.rowid DESC",
        JOB_SELECT
    ))
    .fetch_all(db)
    .await?;
    Ok(rows.into_iter().map(Job::from).collect())
}

pub async fn job_by_id(db: &SqlitePool, job_id: &str) -> Result<Option<Job>, sqlx::Error> {
    let row = sqlx::query_as::<_, JobRow>(&format!("{} WHERE j.id = ?", JOB_SELECT))
        .bind(job_id)
        .fetch_optional(db)
        .await?;
    Ok(row.map(Job::from))
}

/// Jobs saved by `user_id`, most recently saved first
pub async fn saved_jobs_for(db: &SqlitePool, user_id: &str) -> Result<Vec<Job>, sqlx::Error> {
    let rows = sqlx::query_as::<_, JobRow>(&format!(
        "{} JOIN saved_jobs sj ON sj.job_id = j.id WHERE sj.user_id = ? ORDER BY sj.saved_at DESC, sj.rowid DESC",
        JOB_SELECT
    ))
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows.into_iter().map(Job::from).collect())
}

/// Jobs `applicant_id` applied to, most recent application first
pub async fn applied_jobs_for(db: &SqlitePool, applicant_id: &str) -> Result<Vec<Job>, sqlx::Error> {
    let rows = sqlx::query_as::<_, JobRow>(&format!(
        "{} JOIN applications a ON a.job_id = j.id WHERE a.applicant_id = ? ORDER BY a.created_at DESC, a.rowid DESC",
        JOB_SELECT
    ))
    .bind(applicant_id)
    .fetch_all(db)
    .await?;
    Ok(rows.into_iter().map(Job::from).collect())
}

/// IDs of the jobs saved by `user_id`, oldest save first
pub async fn saved_job_ids_for(db: &SqlitePool, user_id: &str) -> Result<Vec<String>, sqlx::Error> {
    let ids: Vec<(String,)> = sqlx::query_as(
        "SELECT job_id FROM saved_jobs WHERE user_id = ? ORDER BY saved_at ASC, rowid ASC",
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(ids.into_iter().map(|(id,)| id).collect())
}
