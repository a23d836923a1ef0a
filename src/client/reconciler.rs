// src/client/reconciler.rs
//! Per-job saved state with optimistic updates.
//!
//! A toggle flips the displayed value at once and hands back a [`Mutation`]
//! describing the request to send. Feeding the request outcome to
//! [`SaveStateReconciler::complete`] either confirms the new value or rolls
//! back to the old one. Only one mutation per (user, job) may be in flight,
//! even across untrack, sign out and sign in.

use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::errors::SyncError;
use super::notifications::{Notification, Notifier};

/// Client-side saved state of one job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    /// Not fetched yet, or the fetch failed; shown as unsaved
    Unknown,
    Known { saved: bool },
    /// A request moving the job to `target` is in flight
    Pending { target: bool },
}

impl SaveState {
    /// Value the UI shows
    pub fn displayed(&self) -> bool {
        match self {
            SaveState::Unknown => false,
            SaveState::Known { saved } => *saved,
            SaveState::Pending { target } => *target,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SaveState::Pending { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Save,
    Unsave,
}

/// A save or unsave request issued by a toggle, keyed by (user, job, session)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub user_id: String,
    pub job_id: String,
    pub target: bool,
    epoch: u64,
    seq: u64,
}

impl Mutation {
    pub fn kind(&self) -> MutationKind {
        if self.target {
            MutationKind::Save
        } else {
            MutationKind::Unsave
        }
    }
}

/// Session marker for a saved-set fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HydrationTicket {
    pub user_id: String,
    epoch: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleRejected {
    #[error("Sign in to save jobs")]
    NotSignedIn,

    #[error("Job {0} is not in view")]
    NotTracked(String),

    #[error("A save request for job {0} is already in flight")]
    InFlight(String),
}

/// What a request outcome did to the local state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Confirmed { saved: bool },
    RolledBack { saved: bool },
    /// The user signed out, switched account, or the job left the view
    Discarded,
}

#[derive(Debug)]
struct Session {
    user_id: String,
    epoch: u64,
}

#[derive(Debug)]
pub struct SaveStateReconciler {
    session: Option<Session>,
    last_epoch: u64,
    states: HashMap<String, SaveState>,
    /// Outstanding requests by (user, job); outlives view and session changes
    pending: HashMap<(String, String), u64>,
    last_seq: u64,
    notifier: Notifier,
}

impl SaveStateReconciler {
    pub fn new(notifier: Notifier) -> Self {
        Self {
            session: None,
            last_epoch: 0,
            states: HashMap::new(),
            pending: HashMap::new(),
            last_seq: 0,
            notifier,
        }
    }

    /// Start a session for `user_id`. Signing in as the current user keeps
    /// the state; any other user starts from scratch.
    pub fn sign_in(&mut self, user_id: &str) {
        if self.user_id() == Some(user_id) {
            return;
        }
        self.reset();
        self.last_epoch += 1;
        self.session = Some(Session {
            user_id: user_id.to_string(),
            epoch: self.last_epoch,
        });
        info!(user_id = %user_id, epoch = self.last_epoch, "Save state session started");
    }

    pub fn sign_out(&mut self) {
        if let Some(session) = self.session.take() {
            info!(user_id = %session.user_id, "Save state session ended");
        }
        self.reset();
    }

    fn reset(&mut self) {
        for state in self.states.values_mut() {
            *state = SaveState::Unknown;
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user_id.as_str())
    }

    /// A job card came into view
    pub fn track(&mut self, job_id: &str) {
        self.states
            .entry(job_id.to_string())
            .or_insert(SaveState::Unknown);
    }

    /// A job card left the view; late responses for it are dropped
    pub fn untrack(&mut self, job_id: &str) {
        self.states.remove(job_id);
    }

    pub fn is_tracked(&self, job_id: &str) -> bool {
        self.states.contains_key(job_id)
    }

    pub fn state(&self, job_id: &str) -> SaveState {
        self.states.get(job_id).copied().unwrap_or(SaveState::Unknown)
    }

    pub fn displayed(&self, job_id: &str) -> bool {
        self.state(job_id).displayed()
    }

    /// Requests of the current user still waiting for a response
    pub fn in_flight(&self) -> usize {
        let Some(user_id) = self.user_id() else {
            return 0;
        };
        self.pending.keys().filter(|(user, _)| user == user_id).count()
    }

    /// Ticket for fetching the saved set of the current session
    pub fn hydration_ticket(&self) -> Option<HydrationTicket> {
        self.session.as_ref().map(|s| HydrationTicket {
            user_id: s.user_id.clone(),
            epoch: s.epoch,
        })
    }

    /// Apply the authoritative saved set. Pending jobs are left alone.
    /// Returns how many jobs were updated, or `None` if the ticket is stale.
    pub fn apply_saved_set(
        &mut self,
        ticket: &HydrationTicket,
        saved: &HashSet<String>,
    ) -> Option<usize> {
        if !self.is_current(&ticket.user_id, ticket.epoch) {
            debug!(user_id = %ticket.user_id, "Discarding saved set from a previous session");
            return None;
        }

        let mut updated = 0;
        for (job_id, state) in self.states.iter_mut() {
            if state.is_pending() {
                continue;
            }
            *state = SaveState::Known {
                saved: saved.contains(job_id),
            };
            updated += 1;
        }
        Some(updated)
    }

    /// Flip the saved flag of `job_id` optimistically.
    ///
    /// An `Unknown` job is treated as unsaved.
    pub fn begin_toggle(&mut self, job_id: &str) -> Result<Mutation, ToggleRejected> {
        let Some(session) = &self.session else {
            return Err(ToggleRejected::NotSignedIn);
        };
        let Some(state) = self.states.get_mut(job_id) else {
            return Err(ToggleRejected::NotTracked(job_id.to_string()));
        };

        let key = (session.user_id.clone(), job_id.to_string());
        if self.pending.contains_key(&key) {
            debug!(job_id = %job_id, "Toggle ignored: earlier request still unanswered");
            return Err(ToggleRejected::InFlight(job_id.to_string()));
        }

        let current = match *state {
            SaveState::Pending { .. } => {
                debug!(job_id = %job_id, "Toggle ignored: request in flight");
                return Err(ToggleRejected::InFlight(job_id.to_string()));
            }
            SaveState::Unknown => false,
            SaveState::Known { saved } => saved,
        };

        let target = !current;
        *state = SaveState::Pending { target };
        self.last_seq += 1;
        self.pending.insert(key, self.last_seq);

        Ok(Mutation {
            user_id: session.user_id.clone(),
            job_id: job_id.to_string(),
            target,
            epoch: session.epoch,
            seq: self.last_seq,
        })
    }

    /// Settle `mutation` with the outcome of its request
    ///
    /// A job that left the view and came back while the request was out
    /// takes a confirmed value but is left alone on failure.
    pub fn complete(&mut self, mutation: &Mutation, outcome: Result<(), SyncError>) -> Completion {
        let key = (mutation.user_id.clone(), mutation.job_id.clone());
        if self.pending.get(&key) != Some(&mutation.seq) {
            warn!(job_id = %mutation.job_id, "Discarding response for a settled request");
            return Completion::Discarded;
        }
        self.pending.remove(&key);

        // A save the server already holds is a success
        let outcome = match outcome {
            Err(error) if mutation.kind() == MutationKind::Save && error.is_already_saved() => {
                debug!(job_id = %mutation.job_id, "Job was already saved on the server");
                Ok(())
            }
            other => other,
        };

        if !self.is_current(&mutation.user_id, mutation.epoch) {
            debug!(
                job_id = %mutation.job_id,
                user_id = %mutation.user_id,
                "Discarding response from a previous session"
            );
            return Completion::Discarded;
        }

        let Some(state) = self.states.get_mut(&mutation.job_id) else {
            debug!(job_id = %mutation.job_id, "Discarding response for a job no longer in view");
            return Completion::Discarded;
        };

        if *state != (SaveState::Pending { target: mutation.target }) {
            if outcome.is_err() {
                debug!(
                    job_id = %mutation.job_id,
                    state = ?state,
                    "Failed request for a re-tracked job leaves it untouched"
                );
                return Completion::Discarded;
            }
            debug!(job_id = %mutation.job_id, "Request for a re-tracked job confirmed");
            *state = SaveState::Known {
                saved: mutation.target,
            };
            return Completion::Confirmed {
                saved: mutation.target,
            };
        }

        match outcome {
            Ok(()) => {
                *state = SaveState::Known {
                    saved: mutation.target,
                };
                let message = match mutation.kind() {
                    MutationKind::Save => "Job saved successfully",
                    MutationKind::Unsave => "Job removed from saved jobs",
                };
                self.notifier.send(Notification::Success {
                    job_id: mutation.job_id.clone(),
                    message: message.to_string(),
                });
                Completion::Confirmed {
                    saved: mutation.target,
                }
            }
            Err(error) => {
                let previous = !mutation.target;
                *state = SaveState::Known { saved: previous };
                warn!(
                    job_id = %mutation.job_id,
                    error = %error,
                    "Save state rolled back"
                );
                self.notifier.send(Notification::Error {
                    job_id: mutation.job_id.clone(),
                    message: error.user_message(),
                    reauthenticate: error.requires_reauthentication(),
                });
                Completion::RolledBack { saved: previous }
            }
        }
    }

    fn is_current(&self, user_id: &str, epoch: u64) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.user_id == user_id && s.epoch == epoch)
    }
}
