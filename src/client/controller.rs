// src/client/controller.rs
//! Drives the reconciler against a live [`SaveStateSource`].

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::errors::SyncError;
use super::notifications::Notifier;
use super::reconciler::{Completion, MutationKind, SaveState, SaveStateReconciler, ToggleRejected};
use super::sources::SaveStateSource;

/// Upper bound on a single save or unsave request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct SaveController<S> {
    reconciler: Arc<Mutex<SaveStateReconciler>>,
    source: Arc<S>,
    timeout: Duration,
}

impl<S> Clone for SaveController<S> {
    fn clone(&self) -> Self {
        Self {
            reconciler: Arc::clone(&self.reconciler),
            source: Arc::clone(&self.source),
            timeout: self.timeout,
        }
    }
}

impl<S: SaveStateSource> SaveController<S> {
    pub fn new(source: S, notifier: Notifier) -> Self {
        Self {
            reconciler: Arc::new(Mutex::new(SaveStateReconciler::new(notifier))),
            source: Arc::new(source),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn sign_in(&self, user_id: &str) {
        self.reconciler.lock().await.sign_in(user_id);
    }

    pub async fn sign_out(&self) {
        self.reconciler.lock().await.sign_out();
    }

    pub async fn track<I, T>(&self, job_ids: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut reconciler = self.reconciler.lock().await;
        for job_id in job_ids {
            reconciler.track(job_id.as_ref());
        }
    }

    pub async fn untrack(&self, job_id: &str) {
        self.reconciler.lock().await.untrack(job_id);
    }

    pub async fn state(&self, job_id: &str) -> SaveState {
        self.reconciler.lock().await.state(job_id)
    }

    pub async fn displayed(&self, job_id: &str) -> bool {
        self.reconciler.lock().await.displayed(job_id)
    }

    /// Fetch the saved set and apply it to every tracked job.
    ///
    /// On failure the jobs stay `Unknown` and no notification is sent.
    pub async fn hydrate(&self) -> Result<usize, SyncError> {
        let Some(ticket) = self.reconciler.lock().await.hydration_ticket() else {
            debug!("Skipping saved-set fetch: not signed in");
            return Ok(0);
        };

        let saved: HashSet<String> =
            match tokio::time::timeout(self.timeout, self.source.saved_job_ids()).await {
                Ok(Ok(saved)) => saved,
                Ok(Err(e)) => {
                    warn!(user_id = %ticket.user_id, error = %e, "Failed to fetch saved jobs");
                    return Err(e);
                }
                Err(_) => {
                    warn!(user_id = %ticket.user_id, "Saved jobs fetch timed out");
                    return Err(SyncError::timed_out());
                }
            };

        let updated = self
            .reconciler
            .lock()
            .await
            .apply_saved_set(&ticket, &saved)
            .unwrap_or(0);
        info!(user_id = %ticket.user_id, saved = saved.len(), updated, "Saved state hydrated");
        Ok(updated)
    }

    /// Toggle the saved flag of `job_id`.
    ///
    /// The lock is not held across the request, so other jobs can toggle
    /// concurrently while this one is pending.
    pub async fn toggle(&self, job_id: &str) -> Result<Completion, ToggleRejected> {
        let mutation = self.reconciler.lock().await.begin_toggle(job_id)?;

        let request = async {
            match mutation.kind() {
                MutationKind::Save => self.source.save(&mutation.job_id).await,
                MutationKind::Unsave => self.source.unsave(&mutation.job_id).await,
            }
        };
        let outcome = match tokio::time::timeout(self.timeout, request).await {
            Ok(outcome) => outcome,
            Err(_) => Err(SyncError::timed_out()),
        };

        Ok(self.reconciler.lock().await.complete(&mutation, outcome))
    }
}
