// Application state shared across all modules

use sqlx::SqlitePool;

use crate::common::dev_mode::DevModeConfig;
use crate::search::FacetTables;

/// Application state containing database pool, keyword tables, and configuration
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub jwt_secret: String,
    pub dev_mode: DevModeConfig,
    pub facet_tables: &'static FacetTables,
}
