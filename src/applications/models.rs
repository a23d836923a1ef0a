// src/applications/models.rs

use serde::{Deserialize, Serialize};

use crate::jobs::models::Job;

/// Rejection text for a second application to the same job
pub const ALREADY_APPLIED_MESSAGE: &str = "You have already applied for this job";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub applicant_id: String,
    /// pending, accepted or rejected
    pub status: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyResponse {
    pub success: bool,
    pub message: String,
    pub application: Application,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AppliedJobsResponse {
    pub success: bool,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsJobAppliedResponse {
    pub success: bool,
    pub is_applied: bool,
}
