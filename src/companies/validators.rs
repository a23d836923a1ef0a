// src/companies/validators.rs

use super::models::RegisterCompanyRequest;
use crate::common::{ValidationResult, Validator};

pub struct CompanyValidator;

impl Validator<RegisterCompanyRequest> for CompanyValidator {
    fn validate(&self, data: &RegisterCompanyRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.require_text("name", &data.name, "Company name", 255);
        result.limit_text("description", data.description.as_deref(), "Description", 2000);
        result.limit_text("location", data.location.as_deref(), "Location", 255);

        if let Some(website) = &data.website {
            if !website.is_empty()
                && !website.starts_with("http://")
                && !website.starts_with("https://")
            {
                result.add_error(
                    "website",
                    "Website must be a valid URL starting with http:// or https://",
                );
            }
        }

        result
    }
}
