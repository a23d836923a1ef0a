// src/companies/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub owner_id: String,
    pub created_at: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCompanyRequest {
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct CompanyResponse {
    pub success: bool,
    pub message: String,
    pub company: Company,
}

#[derive(Serialize, Debug)]
pub struct CompanyListResponse {
    pub success: bool,
    pub companies: Vec<Company>,
}
