// src/client/mod.rs
//! Portal client: job board, optimistic saved-job state, applications and the HTTP
//! sources behind them

pub mod board;
pub mod controller;
pub mod errors;
pub mod http;
pub mod notifications;
pub mod reconciler;
pub mod sources;


pub use board::JobBoard;
pub use controller::{SaveController, DEFAULT_REQUEST_TIMEOUT};
pub use errors::SyncError;
pub use http::PortalClient;
pub use notifications::{Notification, Notifier};
pub use reconciler::{Completion, Mutation, MutationKind, SaveState, SaveStateReconciler, ToggleRejected};
pub use sources::{ApplicationSource, JobSource, SaveStateSource};
