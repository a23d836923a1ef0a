// src/search/classifier.rs
//! Maps a free-text query onto the facet it should be matched against

use super::facets::{find_by_key, find_by_synonym, FacetTables, KeywordEntry, SalaryBand};

/// Semantic category of a search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet<'t> {
    Location(&'t KeywordEntry),
    Industry(&'t KeywordEntry),
    SalaryBand(SalaryBand),
    /// Plain substring search; holds the canonicalized query
    Literal(String),
}

impl Facet<'_> {
    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Facet::Location(_) => "location",
            Facet::Industry(_) => "industry",
            Facet::SalaryBand(_) => "salary",
            Facet::Literal(_) => "literal",
        }
    }
}

/// Trim and lower-case a query before any table lookup
pub fn canonicalize(query: &str) -> String {
    query.trim().to_lowercase()
}

impl FacetTables {
    /// Classify `query`.
    ///
    /// Canonical keys are tried first across all tables (location, industry,
    /// salary), then synonym lists (location, industry). Anything else is a
    /// literal search.
    pub fn classify(&self, query: &str) -> Facet<'_> {
        let query = canonicalize(query);
        if query.is_empty() {
            return Facet::Literal(query);
        }

        if let Some(entry) = find_by_key(&self.locations, &query) {
            return Facet::Location(entry);
        }
        if let Some(entry) = find_by_key(&self.industries, &query) {
            return Facet::Industry(entry);
        }
        if let Some(band) = self.salary_band(&query) {
            return Facet::SalaryBand(band);
        }

        if let Some(entry) = find_by_synonym(&self.locations, &query) {
            return Facet::Location(entry);
        }
        if let Some(entry) = find_by_synonym(&self.industries, &query) {
            return Facet::Industry(entry);
        }

        Facet::Literal(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_location_key() {
        let tables = FacetTables::builtin();
        match tables.classify("  Bangalore ") {
            Facet::Location(entry) => assert_eq!(entry.key, "bangalore"),
            other => panic!("expected location, got {:?}", other),
        }
    }

    #[test]
    fn test_location_synonym() {
        let tables = FacetTables::builtin();
        match tables.classify("Gurugram") {
            Facet::Location(entry) => assert_eq!(entry.key, "delhi ncr"),
            other => panic!("expected location, got {:?}", other),
        }
    }

    #[test]
    fn test_industry_key_and_synonym() {
        let tables = FacetTables::builtin();
        match tables.classify("FullStack Developer") {
            Facet::Industry(entry) => assert_eq!(entry.key, "fullstack developer"),
            other => panic!("expected industry, got {:?}", other),
        }
        match tables.classify("react") {
            Facet::Industry(entry) => assert_eq!(entry.key, "frontend developer"),
            other => panic!("expected industry, got {:?}", other),
        }
    }

    #[test]
    fn test_shared_synonym_picks_first_entry() {
        // "analytics" is listed under both data scientist and data analyst
        let tables = FacetTables::builtin();
        match tables.classify("analytics") {
            Facet::Industry(entry) => assert_eq!(entry.key, "data scientist"),
            other => panic!("expected industry, got {:?}", other),
        }
    }

    #[test]
    fn test_salary_band() {
        let tables = FacetTables::builtin();
        assert_eq!(
            tables.classify("10lakh to 20lakh"),
            Facet::SalaryBand(SalaryBand {
                min: 1_000_000,
                max: 2_000_000
            })
        );
    }

    #[test]
    fn test_unknown_query_is_literal() {
        let tables = FacetTables::builtin();
        assert_eq!(tables.classify(" Acme Corp "), Facet::Literal("acme corp".to_string()));
        assert_eq!(tables.classify("   "), Facet::Literal(String::new()));
    }

    #[test]
    fn test_synonym_substring_is_not_a_hit() {
        // only whole synonyms select an entry
        let tables = FacetTables::builtin();
        assert_eq!(tables.classify("mumbai central").kind(), "literal");
    }
}
