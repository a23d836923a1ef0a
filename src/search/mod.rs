// src/search/mod.rs
//! Job search: query classification, facet matchers and the filters built on them

pub mod advanced;
pub mod classifier;
pub mod facets;
pub mod filter;
pub mod matchers;


pub use advanced::AdvancedFilter;
pub use classifier::{canonicalize, Facet};
pub use facets::{FacetTableError, FacetTables, KeywordEntry, SalaryBand};
pub use filter::{filter_jobs, Filtered, JobFilter};
