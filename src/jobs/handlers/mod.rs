// src/jobs/handlers/mod.rs

pub mod public;
pub mod recruiter;

pub use public::*;
pub use recruiter::*;
