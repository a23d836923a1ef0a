//! Authentication data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// JWT claims structure
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Portal roles; recruiters may register companies and post jobs
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Recruiter,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Recruiter => "recruiter",
        }
    }

    /// Unknown role strings fall back to the least privileged role
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "recruiter" => Role::Recruiter,
            _ => Role::Student,
        }
    }
}

/// User database model
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub fullname: Option<String>,
    pub role: String,
    pub created_at: Option<String>,
}

impl User {
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }
}

/// `GET /api/v1/user/me` response
#[derive(Serialize, Debug)]
pub struct MeResponse {
    pub success: bool,
    pub user: User,
}
