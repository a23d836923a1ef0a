// src/client/sources.rs
//! The remote collaborators the client depends on

use async_trait::async_trait;
use std::collections::HashSet;

use super::errors::SyncError;
use crate::jobs::models::{Job, JobSearchParams};

/// Job listing endpoint
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_jobs(&self, params: &JobSearchParams) -> Result<Vec<Job>, SyncError>;
}

/// Server-authoritative saved set of the signed-in user
#[async_trait]
pub trait SaveStateSource: Send + Sync {
    async fn saved_job_ids(&self) -> Result<HashSet<String>, SyncError>;

    async fn save(&self, job_id: &str) -> Result<(), SyncError>;

    async fn unsave(&self, job_id: &str) -> Result<(), SyncError>;
}

/// Applications of the signed-in user. Applying is one-way.
#[async_trait]
pub trait ApplicationSource: Send + Sync {
    async fn applied_job_ids(&self) -> Result<HashSet<String>, SyncError>;

    async fn apply(&self, job_id: &str) -> Result<(), SyncError>;
}
