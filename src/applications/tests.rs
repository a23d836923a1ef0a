// src/applications/tests.rs

use axum::http::{Method, StatusCode};

use crate::common::test_support::*;
use crate::common::{has_prefix, EntityPrefix};

async fn seeded() -> (axum::Router, String) {
    let pool = test_pool().await;
    insert_user(&pool, "U_RECRUIT", "recruiter").await;
    insert_user(&pool, "U_STUDENT", "student").await;
    insert_company(&pool, "C_ACME001", "Acme Labs", "U_RECRUIT").await;
    insert_job(&pool, "J_BACKEND", "Backend Engineer", "Pune", "1200000", "C_ACME001").await;
    insert_job(&pool, "J_REACT01", "React Developer", "Bengaluru", "850000", "C_ACME001").await;
    (test_app(pool), token_for("U_STUDENT"))
}

#[tokio::test]
async fn test_apply_and_list() {
    let (app, token) = seeded().await;

    let (status, body) =
        call(&app, Method::GET, "/api/v1/application/apply/J_BACKEND", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Job applied successfully");
    assert_eq!(body["application"]["jobId"], "J_BACKEND");
    assert_eq!(body["application"]["applicantId"], "U_STUDENT");
    assert_eq!(body["application"]["status"], "pending");
    let id = body["application"]["id"].as_str().unwrap();
    assert!(has_prefix(id, EntityPrefix::Application));

    let (status, body) = call(&app, Method::GET, "/api/v1/application/get", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jobs"].as_array().unwrap().len(), 1);
    assert_eq!(body["jobs"][0]["id"], "J_BACKEND");
    assert_eq!(body["jobs"][0]["company"]["name"], "Acme Labs");
}

#[tokio::test]
async fn test_applied_flag() {
    let (app, token) = seeded().await;
    call(&app, Method::GET, "/api/v1/application/apply/J_REACT01", Some(&token), None).await;

    let (_, body) =
        call(&app, Method::GET, "/api/v1/application/isApplied/J_REACT01", Some(&token), None).await;
    assert_eq!(body["isApplied"], true);
    let (_, body) =
        call(&app, Method::GET, "/api/v1/application/isApplied/J_BACKEND", Some(&token), None).await;
    assert_eq!(body["isApplied"], false);

    let recruiter = token_for("U_RECRUIT");
    let (_, body) =
        call(&app, Method::GET, "/api/v1/application/isApplied/J_REACT01", Some(&recruiter), None).await;
    assert_eq!(body["isApplied"], false);
}

#[tokio::test]
async fn test_second_application_is_rejected() {
    let (app, token) = seeded().await;
    call(&app, Method::GET, "/api/v1/application/apply/J_BACKEND", Some(&token), None).await;

    let (status, body) =
        call(&app, Method::GET, "/api/v1/application/apply/J_BACKEND", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "You have already applied for this job");

    let (_, body) = call(&app, Method::GET, "/api/v1/application/get", Some(&token), None).await;
    assert_eq!(body["jobs"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_apply_to_unknown_job_is_not_found() {
    let (app, token) = seeded().await;
    let (status, body) =
        call(&app, Method::GET, "/api/v1/application/apply/J_MISSING", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Job not found");
}

#[tokio::test]
async fn test_application_routes_require_auth() {
    let (app, _) = seeded().await;

    let (status, body) = call(&app, Method::GET, "/api/v1/application/apply/J_BACKEND", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");

    let (status, _) = call(&app, Method::GET, "/api/v1/application/get", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
