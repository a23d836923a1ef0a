// src/common/dev_mode.rs
//! Development mode configuration and utilities
//! Allows bypassing authentication for testing purposes

use chrono::Utc;
use sqlx::SqlitePool;
use std::env;
use tracing::info;

use crate::auth::models::{Role, User};

/// Fixed ID so saved jobs persist across dev-mode restarts
pub const DEV_USER_ID: &str = "U_000DEV";

#[derive(Debug, Clone)]
pub struct DevModeConfig {
    pub enabled: bool,
    pub user_email: String,
    pub user_name: String,
    pub user_role: Role,
}

impl DevModeConfig {
    pub fn from_env() -> Self {
        let enabled = env::var("DEV_MODE")
            .unwrap_or_else(|_| "false".to_string())
            .to_lowercase()
            == "true";

        let user_email = env::var("DEV_USER_EMAIL").unwrap_or_else(|_| "dev@test.com".to_string());

        let user_name = env::var("DEV_USER_NAME").unwrap_or_else(|_| "Dev User".to_string());

        let user_role = env::var("DEV_USER_ROLE")
            .map(|r| Role::parse(&r))
            .unwrap_or(Role::Student);

        Self {
            enabled,
            user_email,
            user_name,
            user_role,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            user_email: "dev@test.com".to_string(),
            user_name: "Dev User".to_string(),
            user_role: Role::Student,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn create_dev_user(&self) -> User {
        User {
            id: DEV_USER_ID.to_string(),
            email: self.user_email.clone(),
            fullname: Some(self.user_name.clone()),
            role: self.user_role.as_str().to_string(),
            created_at: Some(Utc::now().to_rfc3339()),
        }
    }
}

/// Insert or refresh the dev user row so foreign keys on `users` hold
pub async fn ensure_dev_user(pool: &SqlitePool, config: &DevModeConfig) -> Result<(), sqlx::Error> {
    if !config.enabled {
        return Ok(());
    }

    let user = config.create_dev_user();
    sqlx::query(
        r#"
        INSERT INTO users (id, email, fullname, role, created_at)
        VALUES (?, ?, ?, ?, datetime('now'))
        ON CONFLICT(id) DO UPDATE SET email = excluded.email,
            fullname = excluded.fullname, role = excluded.role
        "#,
    )
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.fullname)
    .bind(&user.role)
    .execute(pool)
    .await?;

    info!(user_id = %user.id, role = %user.role, "Dev user ensured");
    Ok(())
}

/// Print dev mode status on startup
pub fn print_dev_mode_status(config: &DevModeConfig) {
    if config.enabled {
        println!("⚠️  🔓 DEV MODE ENABLED 🔓 ⚠️");
        println!("   Authentication bypassed for testing");
        println!("   Dev User: {} ({})", config.user_name, config.user_email);
        println!("   Role: {}", config.user_role.as_str());
        println!("   ⚠️  DO NOT USE IN PRODUCTION ⚠️");
        println!();
    } else {
        println!("🔒 Production mode - Authentication required");
    }
}

/// CLI argument parsing for dev mode
fn parse_dev_mode_args<I>(args: I) -> Option<bool>
where
    I: IntoIterator<Item = String>,
{
    for arg in args {
        match arg.as_str() {
            "--dev" | "--dev-mode" => return Some(true),
            "--no-dev" | "--prod" | "--production" => return Some(false),
            _ => {}
        }
    }

    None
}

/// Override dev mode from CLI args
pub fn apply_cli_override(mut config: DevModeConfig) -> DevModeConfig {
    if let Some(cli_dev_mode) = parse_dev_mode_args(env::args()) {
        println!("🔧 CLI override: DEV_MODE = {}", cli_dev_mode);
        config.enabled = cli_dev_mode;
    }

    config
}
