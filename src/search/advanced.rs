// src/search/advanced.rs
//! Multi-field search where every supplied field must match

use serde::{Deserialize, Serialize};

use super::classifier::canonicalize;
use super::facets::FacetTables;
use super::matchers::{matches_company, matches_industry, matches_location, matches_salary};
use crate::jobs::models::Job;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedFilter {
    pub location: Option<String>,
    pub industry: Option<String>,
    pub salary_range: Option<String>,
    pub company: Option<String>,
    pub keywords: Option<String>,
}

fn field(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(canonicalize)
        .filter(|v| !v.is_empty())
}

impl AdvancedFilter {
    pub fn is_empty(&self) -> bool {
        [
            &self.location,
            &self.industry,
            &self.salary_range,
            &self.company,
            &self.keywords,
        ]
        .into_iter()
        .all(|v| field(v).is_none())
    }

    pub fn matches(&self, tables: &FacetTables, job: &Job) -> bool {
        if let Some(location) = field(&self.location) {
            let hit = match tables.resolve_location(&location) {
                Some(entry) => matches_location(job, entry),
                None => job
                    .location
                    .as_deref()
                    .is_some_and(|l| l.to_lowercase().contains(&location)),
            };
            if !hit {
                return false;
            }
        }

        if let Some(industry) = field(&self.industry) {
            let hit = match tables.resolve_industry(&industry) {
                Some(entry) => matches_industry(job, entry),
                None => {
                    job.title.to_lowercase().contains(&industry)
                        || job
                            .description
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(&industry))
                }
            };
            if !hit {
                return false;
            }
        }

        if let Some(range) = field(&self.salary_range) {
            // an unknown band cannot be satisfied
            let hit = tables
                .salary_band(&range)
                .is_some_and(|band| matches_salary(job, band));
            if !hit {
                return false;
            }
        }

        if let Some(company) = field(&self.company) {
            if !matches_company(job, &company) {
                return false;
            }
        }

        if let Some(keywords) = field(&self.keywords) {
            let title = job.title.to_lowercase();
            let description = job.description.as_deref().unwrap_or_default().to_lowercase();
            let hit = keywords
                .split_whitespace()
                .any(|word| title.contains(word) || description.contains(word));
            if !hit {
                return false;
            }
        }

        true
    }

    /// Order-preserving view over the accepted jobs
    pub fn apply<'a>(
        &'a self,
        tables: &'a FacetTables,
        jobs: &'a [Job],
    ) -> impl Iterator<Item = &'a Job> + Clone + 'a {
        jobs.iter().filter(move |job| self.matches(tables, job))
    }
}
