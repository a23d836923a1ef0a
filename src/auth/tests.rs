//! Tests for auth module
//!
//! These tests verify core authentication functionality including:
//! - JWT token validation
//! - Role parsing
//! - The `AuthedUser` extractor through `/api/v1/user/me`, with and without dev mode

#[cfg(test)]
mod tests {
    use super::super::*;
    use axum::http::{Method, StatusCode};
    use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use crate::common::dev_mode::{ensure_dev_user, DevModeConfig, DEV_USER_ID};
    use crate::common::test_support::*;
    use crate::common::AppState;
    use crate::search::facets;

    #[test]
    fn test_jwt_encoding_and_decoding() {
        let token = token_for("U_TEST123");

        let decoded = decode::<models::Claims>(
            &token,
            &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .expect("Failed to decode token");

        assert_eq!(decoded.claims.sub, "U_TEST123");
    }

    #[test]
    fn test_jwt_wrong_secret_is_rejected() {
        let token = token_for("U_TEST123");

        let result = decode::<models::Claims>(
            &token,
            &DecodingKey::from_secret(b"another_secret"),
            &Validation::new(Algorithm::HS256),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("recruiter"), Role::Recruiter);
        assert_eq!(Role::parse(" Recruiter "), Role::Recruiter);
        assert_eq!(Role::parse("student"), Role::Student);
        assert_eq!(Role::parse("admin"), Role::Student);
        assert_eq!(Role::Recruiter.as_str(), "recruiter");
    }

    #[tokio::test]
    async fn test_me_with_valid_token() {
        let pool = test_pool().await;
        insert_user(&pool, "U_ALICE01", "recruiter").await;
        let app = test_app(pool);

        let token = token_for("U_ALICE01");
        let (status, body) = call(&app, Method::GET, "/api/v1/user/me", Some(&token), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["id"], "U_ALICE01");
        assert_eq!(body["user"]["role"], "recruiter");
    }

    #[tokio::test]
    async fn test_me_with_expired_token() {
        let pool = test_pool().await;
        insert_user(&pool, "U_ALICE01", "student").await;
        let app = test_app(pool);

        let claims = models::Claims {
            sub: "U_ALICE01".to_string(),
            exp: 1,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        let (status, body) = call(&app, Method::GET, "/api/v1/user/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_me_with_unknown_user() {
        let app = test_app(test_pool().await);
        let token = token_for("U_GHOST01");

        let (status, _) = call(&app, Method::GET, "/api/v1/user/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_dev_mode_bypasses_token() {
        let pool = test_pool().await;
        let mut dev_mode = DevModeConfig::disabled();
        dev_mode.enabled = true;
        dev_mode.user_role = Role::Recruiter;
        ensure_dev_user(&pool, &dev_mode).await.unwrap();

        let state = AppState {
            db: pool,
            jwt_secret: TEST_SECRET.to_string(),
            dev_mode,
            facet_tables: facets::global(),
        };
        let app = crate::app_router(Arc::new(RwLock::new(state)));

        let (status, body) = call(&app, Method::GET, "/api/v1/user/me", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["id"], DEV_USER_ID);
        assert_eq!(body["user"]["role"], "recruiter");
    }
}
