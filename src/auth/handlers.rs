//! Authentication handlers

use axum::{extract::Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::extractors::AuthedUser;
use super::models::{MeResponse, User};
use crate::common::{ApiError, AppState};

/// GET /api/v1/user/me - Current user profile
pub async fn me_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<MeResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let user = sqlx::query_as::<_, User>(
        "SELECT id, email, fullname, role, created_at FROM users WHERE id = ?",
    )
    .bind(&authed.id)
    .fetch_optional(&state.db)
    .await?;

    let Some(user) = user else {
        warn!(user_id = %authed.id, "Authenticated user has no profile row");
        return Err(ApiError::NotFound("User not found".to_string()));
    };

    debug!(user_id = %user.id, role = %user.role, "Loaded current user");

    Ok(Json(MeResponse {
        success: true,
        user,
    }))
}
