// src/jobs/tests/api_tests.rs

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};
    use sqlx::SqlitePool;

    use crate::common::test_support::*;

    async fn seeded() -> (SqlitePool, axum::Router) {
        let pool = test_pool().await;
        insert_user(&pool, "U_RECRUIT", "recruiter").await;
        insert_company(&pool, "C_ACME001", "Acme Labs", "U_RECRUIT").await;
        insert_job(&pool, "J_BACKEND", "Backend Engineer", "Pune", "1200000", "C_ACME001").await;
        insert_job(&pool, "J_REACT01", "React Developer", "Bengaluru", "₹8,50,000", "C_ACME001").await;
        insert_job(&pool, "J_INTERN1", "Support Intern", "Chennai", "30000", "C_ACME001").await;
        let app = test_app(pool.clone());
        (pool, app)
    }

    fn ids(body: &Value) -> Vec<&str> {
        body["jobs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|j| j["id"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app(test_pool().await);
        let (status, body) = call(&app, Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_list_jobs_without_filters_returns_all() {
        let (_pool, app) = seeded().await;
        let (status, body) = call(&app, Method::GET, "/api/v1/job/get", None, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(ids(&body), vec!["J_INTERN1", "J_REACT01", "J_BACKEND"]);
        assert_eq!(body["jobs"][2]["company"]["name"], "Acme Labs");
        assert_eq!(body["jobs"][2]["salary"], "1200000");
    }

    #[tokio::test]
    async fn test_list_jobs_keyword_uses_facets() {
        let (_pool, app) = seeded().await;

        let (_, body) = call(&app, Method::GET, "/api/v1/job/get?keyword=bangalore", None, None).await;
        assert_eq!(ids(&body), vec!["J_REACT01"]);

        let (_, body) = call(
            &app,
            Method::GET,
            "/api/v1/job/get?keyword=backend%20developer",
            None,
            None,
        )
        .await;
        assert_eq!(ids(&body), vec!["J_BACKEND"]);

        // Company name matches every query kind
        let (_, body) = call(&app, Method::GET, "/api/v1/job/get?keyword=acme", None, None).await;
        assert_eq!(ids(&body).len(), 3);
    }

    #[tokio::test]
    async fn test_list_jobs_salary_window() {
        let (_pool, app) = seeded().await;
        let (status, body) = call(
            &app,
            Method::GET,
            "/api/v1/job/get?minSalary=500000&maxSalary=1000000",
            None,
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec!["J_REACT01"]);
    }

    #[tokio::test]
    async fn test_list_jobs_keyword_and_window_both_apply() {
        let (_pool, app) = seeded().await;

        let (status, body) = call(
            &app,
            Method::GET,
            "/api/v1/job/get?keyword=pune&minSalary=500000&maxSalary=1000000",
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(ids(&body).is_empty());

        let (_, body) = call(
            &app,
            Method::GET,
            "/api/v1/job/get?keyword=bangalore&minSalary=500000&maxSalary=1000000",
            None,
            None,
        )
        .await;
        assert_eq!(ids(&body), vec!["J_REACT01"]);
    }

    #[tokio::test]
    async fn test_list_jobs_rejects_inverted_window() {
        let (_pool, app) = seeded().await;
        let (status, body) = call(
            &app,
            Method::GET,
            "/api/v1/job/get?minSalary=10&maxSalary=1",
            None,
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_get_job_by_id() {
        let (_pool, app) = seeded().await;

        let (status, body) = call(&app, Method::GET, "/api/v1/job/get/J_BACKEND", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["job"]["title"], "Backend Engineer");

        let (status, body) = call(&app, Method::GET, "/api/v1/job/get/J_MISSING", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Job not found");
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_advanced_search() {
        let (_pool, app) = seeded().await;
        let (status, body) = call(
            &app,
            Method::POST,
            "/api/v1/job/search",
            None,
            Some(json!({ "location": "pune", "salaryRange": "10lakh to 20lakh" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec!["J_BACKEND"]);
    }

    #[tokio::test]
    async fn test_post_job_as_recruiter() {
        let (_pool, app) = seeded().await;
        let token = token_for("U_RECRUIT");

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/v1/job/post",
            Some(&token),
            Some(json!({
                "title": "Data Scientist",
                "location": "Gurugram",
                "salary": 2500000,
                "companyId": "C_ACME001"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["job"]["salary"], "2500000");
        assert!(body["job"]["id"].as_str().unwrap().starts_with("J_"));

        let (_, body) = call(&app, Method::GET, "/api/v1/job/get?keyword=delhi%20ncr", None, None).await;
        assert_eq!(body["jobs"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_post_job_requires_recruiter_owning_company() {
        let (pool, app) = seeded().await;
        insert_user(&pool, "U_STUDENT", "student").await;
        insert_user(&pool, "U_OTHERRC", "recruiter").await;
        let payload = json!({ "title": "Intern", "companyId": "C_ACME001" });

        let (status, _) = call(&app, Method::POST, "/api/v1/job/post", None, Some(payload.clone())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let student = token_for("U_STUDENT");
        let (status, _) = call(
            &app,
            Method::POST,
            "/api/v1/job/post",
            Some(&student),
            Some(payload.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let other = token_for("U_OTHERRC");
        let (status, _) = call(&app, Method::POST, "/api/v1/job/post", Some(&other), Some(payload)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
