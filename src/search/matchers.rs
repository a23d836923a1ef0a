// src/search/matchers.rs
//! Per-facet predicates over a single job

use super::facets::{KeywordEntry, SalaryBand};
use crate::jobs::models::Job;

fn lowered(field: Option<&str>) -> String {
    field.unwrap_or_default().to_lowercase()
}

/// Job location contains the canonical key or any of its synonyms
pub fn matches_location(job: &Job, entry: &KeywordEntry) -> bool {
    let Some(location) = job.location.as_deref() else {
        return false;
    };
    let location = location.to_lowercase();
    entry.terms().any(|term| location.contains(term))
}

/// Job title or description contains the canonical key or any of its synonyms
pub fn matches_industry(job: &Job, entry: &KeywordEntry) -> bool {
    let title = job.title.to_lowercase();
    let description = lowered(job.description.as_deref());
    entry
        .terms()
        .any(|term| title.contains(term) || description.contains(term))
}

/// Parse a salary by discarding every non-digit character.
///
/// Separators and currency symbols carry no meaning, so "₹12,00,000" and
/// "1200000" are the same amount while "12k" reads as 12.
pub fn parse_salary(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Parsed job salary lies inside `band`; jobs without a readable salary never match
pub fn matches_salary(job: &Job, band: SalaryBand) -> bool {
    job.salary
        .as_deref()
        .and_then(parse_salary)
        .is_some_and(|amount| band.contains(amount))
}

/// Case-insensitive substring of the company name
pub fn matches_company(job: &Job, text: &str) -> bool {
    let text = text.to_lowercase();
    job.company_name()
        .is_some_and(|name| name.to_lowercase().contains(&text))
}

/// Case-insensitive substring of title, description or company name
pub fn matches_literal(job: &Job, text: &str) -> bool {
    let text = text.to_lowercase();
    job.title.to_lowercase().contains(&text)
        || lowered(job.description.as_deref()).contains(&text)
        || matches_company(job, &text)
}
