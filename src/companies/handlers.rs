// src/companies/handlers.rs

use axum::{extract::Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::models::*;
use super::validators::CompanyValidator;
use crate::auth::AuthedUser;
use crate::common::{generate_company_id, ApiError, AppState, Validator};

/// POST /api/v1/company/register - Register a company owned by the caller
pub async fn register_company(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<RegisterCompanyRequest>,
) -> Result<Json<CompanyResponse>, ApiError> {
    authed.require_recruiter()?;
    let state = state_lock.read().await.clone();

    let validation_result = CompanyValidator.validate(&request);
    if !validation_result.is_valid {
        warn!(
            user_id = %authed.id,
            errors = ?validation_result.errors,
            "Company registration validation failed"
        );
        return Err(ApiError::from(validation_result));
    }

    let name = request.name.trim().to_string();

    let existing: Option<(String,)> =
        sqlx::query_as("SELECT id FROM companies WHERE name = ? COLLATE NOCASE")
            .bind(&name)
            .fetch_optional(&state.db)
            .await?;
    if existing.is_some() {
        return Err(ApiError::BadRequest(
            "You can't register same company.".to_string(),
        ));
    }

    let id = generate_company_id();
    sqlx::query(
        r#"
        INSERT INTO companies (id, name, description, website, location, owner_id, created_at)
        VALUES (?, ?, ?, ?, ?, ?, datetime('now'))
        "#,
    )
    .bind(&id)
    .bind(&name)
    .bind(&request.description)
    .bind(&request.website)
    .bind(&request.location)
    .bind(&authed.id)
    .execute(&state.db)
    .await?;

    let company = sqlx::query_as::<_, Company>(
        "SELECT id, name, description, website, location, owner_id, created_at FROM companies WHERE id = ?",
    )
    .bind(&id)
    .fetch_one(&state.db)
    .await?;

    info!(company_id = %id, owner_id = %authed.id, "Company registered");

    Ok(Json(CompanyResponse {
        success: true,
        message: "Company registered successfully.".to_string(),
        company,
    }))
}

/// GET /api/v1/company/get - Companies registered by the caller
pub async fn list_my_companies(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<CompanyListResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let companies = sqlx::query_as::<_, Company>(
        r#"SELECT id, name, description, website, location, owner_id, created_at
        FROM companies WHERE owner_id = ? ORDER BY created_at DESC"#,
    )
    .bind(&authed.id)
    .fetch_all(&state.db)
    .await?;

    debug!(owner_id = %authed.id, count = companies.len(), "Loaded companies");

    Ok(Json(CompanyListResponse {
        success: true,
        companies,
    }))
}
