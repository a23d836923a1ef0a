// src/search/filter.rs
//! Query filter shared by the job listing endpoint and the client job board

use super::classifier::{canonicalize, Facet};
use super::facets::FacetTables;
use super::matchers::{
    matches_company, matches_industry, matches_literal, matches_location, matches_salary,
};
use crate::jobs::models::Job;

/// A query classified once and reusable across any number of jobs.
///
/// A job is kept when the facet-specific matcher accepts it or when the
/// company name contains the query.
#[derive(Debug, Clone)]
pub struct JobFilter<'t> {
    facet: Option<Facet<'t>>,
    query: String,
}

impl<'t> JobFilter<'t> {
    pub fn new(tables: &'t FacetTables, query: &str) -> Self {
        let canonical = canonicalize(query);
        let facet = if canonical.is_empty() {
            None
        } else {
            Some(tables.classify(&canonical))
        };
        Self {
            facet,
            query: canonical,
        }
    }

    /// True for an empty or whitespace-only query
    pub fn is_identity(&self) -> bool {
        self.facet.is_none()
    }

    pub fn facet(&self) -> Option<&Facet<'t>> {
        self.facet.as_ref()
    }

    pub fn matches(&self, job: &Job) -> bool {
        let Some(facet) = &self.facet else {
            return true;
        };

        let facet_match = match facet {
            Facet::Location(entry) => matches_location(job, entry),
            Facet::Industry(entry) => matches_industry(job, entry),
            Facet::SalaryBand(band) => matches_salary(job, *band),
            Facet::Literal(text) => matches_literal(job, text),
        };

        facet_match || matches_company(job, &self.query)
    }

    /// Owned variant used where the job list is consumed, e.g. a handler
    pub fn retain(&self, jobs: Vec<Job>) -> Vec<Job> {
        if self.is_identity() {
            return jobs;
        }
        jobs.into_iter().filter(|job| self.matches(job)).collect()
    }
}

/// Lazy, order-preserving view over the jobs accepted by a [`JobFilter`].
/// Cloning yields an independent iterator from the same position.
#[derive(Debug, Clone)]
pub struct Filtered<'a, 't> {
    jobs: std::slice::Iter<'a, Job>,
    filter: JobFilter<'t>,
}

impl<'a> Iterator for Filtered<'a, '_> {
    type Item = &'a Job;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = &self.filter;
        self.jobs.find(|job| filter.matches(job))
    }
}

/// Filter `jobs` by `query`. An empty query yields every job unchanged.
pub fn filter_jobs<'a, 't>(tables: &'t FacetTables, jobs: &'a [Job], query: &str) -> Filtered<'a, 't> {
    Filtered {
        jobs: jobs.iter(),
        filter: JobFilter::new(tables, query),
    }
}
