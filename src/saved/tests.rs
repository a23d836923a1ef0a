// src/saved/tests.rs

use axum::http::{Method, StatusCode};
use serde_json::Value;

use crate::common::test_support::*;

async fn seeded() -> (axum::Router, String) {
    let pool = test_pool().await;
    insert_user(&pool, "U_RECRUIT", "recruiter").await;
    insert_user(&pool, "U_STUDENT", "student").await;
    insert_company(&pool, "C_ACME001", "Acme Labs", "U_RECRUIT").await;
    insert_job(&pool, "J_BACKEND", "Backend Engineer", "Pune", "1200000", "C_ACME001").await;
    insert_job(&pool, "J_REACT01", "React Developer", "Bengaluru", "850000", "C_ACME001").await;
    (test_app(pool), token_for("U_STUDENT"))
}

fn saved_ids(body: &Value) -> Vec<&str> {
    body["savedJobs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_save_and_list() {
    let (app, token) = seeded().await;

    let (status, body) = call(&app, Method::POST, "/api/v1/user/saveJob/J_BACKEND", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Job saved successfully");
    assert_eq!(saved_ids(&body), vec!["J_BACKEND"]);

    let (status, body) = call(&app, Method::GET, "/api/v1/user/savedJobs", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jobs"][0]["id"], "J_BACKEND");
    assert_eq!(body["jobs"].as_array().unwrap().len(), 1);

    let (_, body) = call(&app, Method::GET, "/api/v1/user/isJobSaved/J_BACKEND", Some(&token), None).await;
    assert_eq!(body["isSaved"], true);
    let (_, body) = call(&app, Method::GET, "/api/v1/user/isJobSaved/J_REACT01", Some(&token), None).await;
    assert_eq!(body["isSaved"], false);
}

#[tokio::test]
async fn test_duplicate_save_is_rejected() {
    let (app, token) = seeded().await;
    call(&app, Method::POST, "/api/v1/user/saveJob/J_BACKEND", Some(&token), None).await;

    let (status, body) = call(&app, Method::POST, "/api/v1/user/saveJob/J_BACKEND", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Job already saved");
}

#[tokio::test]
async fn test_save_unknown_job_is_not_found() {
    let (app, token) = seeded().await;
    let (status, body) = call(&app, Method::POST, "/api/v1/user/saveJob/J_MISSING", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Job not found");
}

#[tokio::test]
async fn test_unsave_is_idempotent() {
    let (app, token) = seeded().await;
    call(&app, Method::POST, "/api/v1/user/saveJob/J_BACKEND", Some(&token), None).await;
    call(&app, Method::POST, "/api/v1/user/saveJob/J_REACT01", Some(&token), None).await;

    for _ in 0..2 {
        let (status, body) =
            call(&app, Method::DELETE, "/api/v1/user/unsaveJob/J_BACKEND", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved_ids(&body), vec!["J_REACT01"]);
    }
}

#[tokio::test]
async fn test_saved_set_is_per_user() {
    let (app, token) = seeded().await;
    call(&app, Method::POST, "/api/v1/user/saveJob/J_BACKEND", Some(&token), None).await;

    let recruiter = token_for("U_RECRUIT");
    let (_, body) = call(&app, Method::GET, "/api/v1/user/savedJobs", Some(&recruiter), None).await;
    assert!(body["jobs"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_saved_routes_require_auth() {
    let (app, _) = seeded().await;

    let (status, body) = call(&app, Method::GET, "/api/v1/user/savedJobs", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");

    let (status, _) = call(&app, Method::POST, "/api/v1/user/saveJob/J_BACKEND", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
