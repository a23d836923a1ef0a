// src/jobs/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};
use crate::search::matchers::parse_salary;

// ============================================================================
// Job Validators
// ============================================================================

pub struct JobValidator;

impl Validator<CreateJob> for JobValidator {
    fn validate(&self, data: &CreateJob) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.require_text("title", &data.title, "Job title", 255);
        result.limit_text("description", data.description.as_deref(), "Description", 10000);
        result.limit_text("location", data.location.as_deref(), "Location", 255);

        // A salary without digits would never satisfy a salary filter
        if let Some(salary) = &data.salary {
            if salary.chars().count() > 64 {
                result.add_error("salary", "Salary must be less than 64 characters");
            } else if parse_salary(salary).is_none() {
                result.add_error("salary", "Salary must contain a numeric amount");
            }
        }

        if data.company_id.trim().is_empty() {
            result.add_error("companyId", "Company is required");
        }

        result
    }
}

// ============================================================================
// Search Validators
// ============================================================================

pub struct SearchParamsValidator;

impl Validator<JobSearchParams> for SearchParamsValidator {
    fn validate(&self, data: &JobSearchParams) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let (Some(min), Some(max)) = (data.min_salary, data.max_salary) {
            if min > max {
                result.add_error(
                    "salary_range",
                    "Minimum salary cannot be greater than maximum salary",
                );
            }
        }

        result.limit_text("keyword", data.keyword.as_deref(), "Keyword", 200);

        result
    }
}
