// src/common/test_support.rs
//! Fixtures for router-level tests: in-memory database, tokens and seed rows

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

use super::dev_mode::DevModeConfig;
use super::migrations::apply_schema;
use super::AppState;
use crate::auth::models::Claims;
use crate::search::facets;

pub const TEST_SECRET: &str = "test_secret_key";

pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    apply_schema(&pool).await.unwrap();
    pool
}

pub fn test_app(pool: SqlitePool) -> Router {
    let state = AppState {
        db: pool,
        jwt_secret: TEST_SECRET.to_string(),
        dev_mode: DevModeConfig::disabled(),
        facet_tables: facets::global(),
    };
    crate::app_router(Arc::new(RwLock::new(state)))
}

pub fn token_for(user_id: &str) -> String {
    let claims = Claims {
        sub: user_id.to_string(),
        exp: 9_999_999_999,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

pub async fn insert_user(pool: &SqlitePool, id: &str, role: &str) {
    sqlx::query("INSERT INTO users (id, email, fullname, role) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(format!("{}@example.com", id.to_lowercase()))
        .bind("Test User")
        .bind(role)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_company(pool: &SqlitePool, id: &str, name: &str, owner_id: &str) {
    sqlx::query("INSERT INTO companies (id, name, owner_id) VALUES (?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(owner_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_job(
    pool: &SqlitePool,
    id: &str,
    title: &str,
    location: &str,
    salary: &str,
    company_id: &str,
) {
    sqlx::query(
        r#"
        INSERT INTO jobs (id, title, location, salary, company_id, created_by)
        SELECT ?, ?, ?, ?, id, owner_id FROM companies WHERE id = ?
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(location)
    .bind(salary)
    .bind(company_id)
    .execute(pool)
    .await
    .unwrap();
}

/// Send one request through the router and decode the JSON body
pub async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
