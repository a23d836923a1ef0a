// src/companies/mod.rs
//! Companies that recruiters post jobs under

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;


pub use models::*;
pub use routes::companies_routes;
