// src/saved/models.rs

use serde::{Deserialize, Serialize};

use crate::jobs::models::Job;

/// Rejection text for a duplicate save; clients match on it
pub const ALREADY_SAVED_MESSAGE: &str = "Job already saved";

/// Response to save and unsave: the caller's saved set after the change
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveJobResponse {
    pub success: bool,
    pub message: String,
    pub saved_jobs: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedJobsResponse {
    pub success: bool,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsJobSavedResponse {
    pub success: bool,
    pub is_saved: bool,
}
