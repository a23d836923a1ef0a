// src/jobs/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::helpers::deserialize_salary;
use crate::search::{FacetTables, Facet, SalaryBand};

// ============================================================================
// Job Models
// ============================================================================

/// Company reference embedded in a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRef {
    pub id: String,
    pub name: String,
}

/// A job posting as listed and searched.
///
/// `salary` stays textual; only the salary matcher interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_salary")]
    pub salary: Option<String>,
    #[serde(default)]
    pub company: Option<CompanyRef>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Job {
    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref().map(|c| c.name.as_str())
    }
}

/// Row shape of the jobs/companies join
#[derive(FromRow, Debug)]
pub struct JobRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub company_id: Option<String>,
    pub company_name: Option<String>,
    pub created_at: Option<String>,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        let company = match (row.company_id, row.company_name) {
            (Some(id), Some(name)) => Some(CompanyRef { id, name }),
            _ => None,
        };

        Job {
            id: row.id,
            title: row.title,
            description: row.description,
            location: row.location,
            salary: row.salary,
            company,
            created_at: row.created_at,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateJob {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_salary")]
    pub salary: Option<String>,
    pub company_id: String,
}

// ============================================================================
// Search Parameters
// ============================================================================

/// Query string of `GET /api/v1/job/get`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_salary: Option<u64>,
}

impl JobSearchParams {
    /// Pick the parameter set for a user query: a salary band becomes a
    /// numeric window, anything else is sent as a keyword.
    pub fn for_query(tables: &FacetTables, query: &str) -> Self {
        let query = query.trim();
        if query.is_empty() {
            return Self::default();
        }

        match tables.classify(query) {
            Facet::SalaryBand(band) => Self {
                keyword: None,
                min_salary: Some(band.min),
                max_salary: Some(band.max),
            },
            _ => Self {
                keyword: Some(query.to_string()),
                min_salary: None,
                max_salary: None,
            },
        }
    }

    /// Salary window requested, open-ended on a missing side
    pub fn salary_window(&self) -> Option<SalaryBand> {
        if self.min_salary.is_none() && self.max_salary.is_none() {
            return None;
        }
        Some(SalaryBand {
            min: self.min_salary.unwrap_or(0),
            max: self.max_salary.unwrap_or(u64::MAX),
        })
    }
}

// ============================================================================
// Response Envelopes
// ============================================================================

#[derive(Serialize, Deserialize, Debug)]
pub struct JobListResponse {
    pub success: bool,
    pub jobs: Vec<Job>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JobResponse {
    pub success: bool,
    pub job: Job,
}

#[derive(Serialize, Debug)]
pub struct JobCreatedResponse {
    pub success: bool,
    pub message: String,
    pub job: Job,
}
