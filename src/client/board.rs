// src/client/board.rs

use tracing::{debug, info, warn};

use super::controller::DEFAULT_REQUEST_TIMEOUT;
use super::errors::SyncError;
use super::sources::JobSource;
use crate::jobs::models::{Job, JobSearchParams};
use crate::search::{filter_jobs, FacetTables, Filtered};

/// Job list as shown in the portal, with the current search query
#[derive(Debug, Clone)]
pub struct JobBoard<'t> {
    tables: &'t FacetTables,
    jobs: Vec<Job>,
    query: String,
}

impl<'t> JobBoard<'t> {
    pub fn new(tables: &'t FacetTables) -> Self {
        Self {
            tables,
            jobs: Vec::new(),
            query: String::new(),
        }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_jobs(&mut self, jobs: Vec<Job>) {
        self.jobs = jobs;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        debug!(query = %self.query, "Search query updated");
    }

    /// Jobs matching the current query, in list order
    pub fn visible(&self) -> Filtered<'_, 't> {
        filter_jobs(self.tables, &self.jobs, &self.query)
    }

    /// Reload the list from `source` using parameters derived from the query.
    /// On failure or after [`DEFAULT_REQUEST_TIMEOUT`] the current list is kept.
    pub async fn refresh<S>(&mut self, source: &S) -> Result<usize, SyncError>
    where
        S: JobSource + ?Sized,
    {
        let params = JobSearchParams::for_query(self.tables, &self.query);
        let request = source.fetch_jobs(&params);
        let jobs = match tokio::time::timeout(DEFAULT_REQUEST_TIMEOUT, request).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(query = %self.query, "Job list refresh timed out");
                return Err(SyncError::timed_out());
            }
        };
        info!(count = jobs.len(), query = %self.query, "Job list refreshed");
        self.jobs = jobs;
        Ok(self.jobs.len())
    }
}
