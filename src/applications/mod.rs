// src/applications/mod.rs
//! Job applications: one per (job, applicant), applied flag per user

pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

pub use models::*;
pub use routes::applications_routes;
