// src/saved/mod.rs
//! Job bookmarking: the server-authoritative saved set per user

pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

pub use models::*;
pub use routes::saved_jobs_routes;
