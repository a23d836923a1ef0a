// src/search/facets.rs
//! Keyword tables used to classify search queries.
//!
//! Tables are ordered: when a query hits more than one entry the first entry
//! wins, so the order below is part of the matching behaviour.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum FacetTableError {
    #[error("Failed to read facet tables: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse facet tables: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid facet table: {0}")]
    Invalid(String),
}

/// Inclusive salary window in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBand {
    pub min: u64,
    pub max: u64,
}

impl SalaryBand {
    pub fn contains(&self, amount: u64) -> bool {
        self.min <= amount && amount <= self.max
    }
}

/// A canonical key with the synonyms that also select it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub key: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl KeywordEntry {
    fn new(key: &str, synonyms: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The canonical key followed by every synonym
    pub fn terms(&self) -> impl Iterator<Item = &str> + Clone {
        std::iter::once(self.key.as_str()).chain(self.synonyms.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBandEntry {
    pub key: String,
    pub min: u64,
    pub max: u64,
}

impl SalaryBandEntry {
    pub fn band(&self) -> SalaryBand {
        SalaryBand {
            min: self.min,
            max: self.max,
        }
    }
}

/// Location, industry and salary tables consulted by the classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetTables {
    pub locations: Vec<KeywordEntry>,
    pub industries: Vec<KeywordEntry>,
    pub salary_bands: Vec<SalaryBandEntry>,
}

impl Default for FacetTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FacetTables {
    /// Tables shipped with the portal (Indian metro areas, tech roles, INR bands)
    pub fn builtin() -> Self {
        let locations = vec![
            KeywordEntry::new("bangalore", &["bangalore", "bengaluru", "blr"]),
            KeywordEntry::new(
                "delhi ncr",
                &["delhi", "ncr", "gurgaon", "gurugram", "noida", "faridabad", "ghaziabad"],
            ),
            KeywordEntry::new("hyderabad", &["hyderabad", "hyd", "secunderabad"]),
            KeywordEntry::new("pune", &["pune", "puna"]),
            KeywordEntry::new("mumbai", &["mumbai", "bombay", "bom"]),
            KeywordEntry::new("chennai", &["chennai", "madras"]),
            KeywordEntry::new("vellore", &["vellore", "vit"]),
        ];

        let industries = vec![
            KeywordEntry::new(
                "frontend developer",
                &["frontend", "front-end", "react", "vue", "angular"],
            ),
            KeywordEntry::new(
                "backend developer",
                &["backend", "back-end", "node", "python", "java", "api"],
            ),
            KeywordEntry::new(
                "fullstack developer",
                &["fullstack", "full-stack", "full stack"],
            ),
            KeywordEntry::new(
                "ai/ml engineer",
                &["ai", "ml", "machine learning", "artificial intelligence", "data science"],
            ),
            KeywordEntry::new(
                "data scientist",
                &["data scientist", "data science", "analytics", "statistics"],
            ),
            KeywordEntry::new(
                "data analyst",
                &["data analyst", "business analyst", "analytics"],
            ),
            KeywordEntry::new(
                "devops engineer",
                &["devops", "dev ops", "infrastructure", "deployment", "ci/cd"],
            ),
            KeywordEntry::new(
                "software engineer",
                &["software engineer", "software developer", "programmer"],
            ),
        ];

        let salary_bands = [
            ("0-40k", 0, 40_000),
            ("42-1lakh", 42_000, 100_000),
            ("1lakh to 5lakh", 100_000, 500_000),
            ("5lakh to 10lakh", 500_000, 1_000_000),
            ("10lakh to 20lakh", 1_000_000, 2_000_000),
            ("20lakh to 50lakh", 2_000_000, 5_000_000),
            ("50lakh to 1 crore", 5_000_000, 10_000_000),
        ]
        .into_iter()
        .map(|(key, min, max)| SalaryBandEntry {
            key: key.to_string(),
            min,
            max,
        })
        .collect();

        Self {
            locations,
            industries,
            salary_bands,
        }
    }

    /// Parse tables from JSON, lower-casing every key and synonym
    pub fn from_json(raw: &str) -> Result<Self, FacetTableError> {
        let mut tables: FacetTables = serde_json::from_str(raw)?;
        tables.normalize();
        tables.check()?;
        Ok(tables)
    }

    pub fn load(path: &Path) -> Result<Self, FacetTableError> {
        let raw = std::fs::read_to_string(path)?;
        let tables = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            locations = tables.locations.len(),
            industries = tables.industries.len(),
            salary_bands = tables.salary_bands.len(),
            "Loaded facet tables"
        );
        Ok(tables)
    }

    fn normalize(&mut self) {
        for entry in self.locations.iter_mut().chain(self.industries.iter_mut()) {
            entry.key = entry.key.trim().to_lowercase();
            for synonym in entry.synonyms.iter_mut() {
                *synonym = synonym.trim().to_lowercase();
            }
            entry.synonyms.retain(|s| !s.is_empty());
        }
        for band in self.salary_bands.iter_mut() {
            band.key = band.key.trim().to_lowercase();
        }
    }

    fn check(&self) -> Result<(), FacetTableError> {
        let keys = self
            .locations
            .iter()
            .chain(self.industries.iter())
            .map(|e| e.key.as_str())
            .chain(self.salary_bands.iter().map(|b| b.key.as_str()));
        for key in keys {
            if key.is_empty() {
                return Err(FacetTableError::Invalid("empty canonical key".to_string()));
            }
        }

        if let Some(band) = self.salary_bands.iter().find(|b| b.min > b.max) {
            return Err(FacetTableError::Invalid(format!(
                "salary band '{}' has min greater than max",
                band.key
            )));
        }

        Ok(())
    }

    pub fn location(&self, key: &str) -> Option<&KeywordEntry> {
        find_by_key(&self.locations, key)
    }

    pub fn industry(&self, key: &str) -> Option<&KeywordEntry> {
        find_by_key(&self.industries, key)
    }

    pub fn salary_band(&self, key: &str) -> Option<SalaryBand> {
        self.salary_bands
            .iter()
            .find(|b| b.key == key)
            .map(SalaryBandEntry::band)
    }

    /// Location entry selected by `term`, either as key or as synonym
    pub fn resolve_location(&self, term: &str) -> Option<&KeywordEntry> {
        find_by_key(&self.locations, term).or_else(|| find_by_synonym(&self.locations, term))
    }

    /// Industry entry selected by `term`, either as key or as synonym
    pub fn resolve_industry(&self, term: &str) -> Option<&KeywordEntry> {
        find_by_key(&self.industries, term).or_else(|| find_by_synonym(&self.industries, term))
    }
}

pub(crate) fn find_by_key<'t>(entries: &'t [KeywordEntry], key: &str) -> Option<&'t KeywordEntry> {
    entries.iter().find(|e| e.key == key)
}

pub(crate) fn find_by_synonym<'t>(
    entries: &'t [KeywordEntry],
    term: &str,
) -> Option<&'t KeywordEntry> {
    entries
        .iter()
        .find(|e| e.synonyms.iter().any(|s| s == term))
}

static GLOBAL_TABLES: OnceLock<FacetTables> = OnceLock::new();

/// Install process-wide tables. Only the first call has an effect; later
/// calls hand the rejected tables back.
pub fn install(tables: FacetTables) -> Result<(), FacetTables> {
    GLOBAL_TABLES.set(tables)
}

/// Process-wide tables, falling back to the built-in set
pub fn global() -> &'static FacetTables {
    GLOBAL_TABLES.get_or_init(|| {
        debug!("Facet tables not installed, using built-in tables");
        FacetTables::builtin()
    })
}
