// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Generates prefixed IDs such as `J_K7NP3X` for jobs. The alphabet leaves
//! out I, L, O and U, so IDs survive being read aloud or retyped.

use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

const ID_LENGTH: usize = 6;

static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(J|C|SV|AP|U)_[0-9A-HJKMNP-TV-Z]{6}$").expect("id pattern is valid")
});

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityPrefix {
    /// Job posting (J_)
    Job,
    /// Company (C_)
    Company,
    /// Saved job bookmark (SV_)
    SavedJob,
    /// Job application (AP_)
    Application,
    /// User (U_)
    User,
}

impl EntityPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::Job => "J",
            EntityPrefix::Company => "C",
            EntityPrefix::SavedJob => "SV",
            EntityPrefix::Application => "AP",
            EntityPrefix::User => "U",
        }
    }
}

fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a prefixed ID in the form `PREFIX_XXXXXX`
pub fn generate_id(prefix: EntityPrefix) -> String {
    format!("{}_{}", prefix.as_str(), generate_crockford_string(ID_LENGTH))
}

pub fn generate_job_id() -> String {
    generate_id(EntityPrefix::Job)
}

pub fn generate_company_id() -> String {
    generate_id(EntityPrefix::Company)
}

pub fn generate_saved_job_id() -> String {
    generate_id(EntityPrefix::SavedJob)
}

pub fn generate_application_id() -> String {
    generate_id(EntityPrefix::Application)
}

/// True when `id` has the shape produced by [`generate_id`]
pub fn is_valid_id(id: &str) -> bool {
    ID_PATTERN.is_match(id)
}

/// True when `id` is a well-formed ID carrying `prefix`
pub fn has_prefix(id: &str, prefix: EntityPrefix) -> bool {
    is_valid_id(id)
        && id
            .split_once('_')
            .is_some_and(|(p, _)| p == prefix.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_format() {
        let job_id = generate_job_id();
        assert!(job_id.starts_with("J_"));
        assert_eq!(job_id.len(), 8); // "J_" + 6 chars

        let saved_id = generate_saved_job_id();
        assert!(saved_id.starts_with("SV_"));
        assert_eq!(saved_id.len(), 9);
    }

    #[test]
    fn test_crockford_alphabet_only() {
        let id = generate_company_id();
        for c in id[2..].chars() {
            assert!(
                CROCKFORD_ALPHABET.contains(&(c as u8)),
                "Character '{}' not in Crockford alphabet",
                c
            );
        }
    }

    #[test]
    fn test_uniqueness() {
        let mut ids = HashSet::new();
        for _ in 0..1000 {
            assert!(ids.insert(generate_job_id()), "Duplicate ID generated");
        }
    }

    #[test]
    fn test_id_validation() {
        assert!(is_valid_id(&generate_job_id()));
        assert!(is_valid_id(&generate_saved_job_id()));
        assert!(is_valid_id(&generate_application_id()));
        assert!(is_valid_id("C_K7NP3X"));
        assert!(!is_valid_id("J_K7NP3"));
        assert!(!is_valid_id("J_K7NP3I")); // I is not in the alphabet
        assert!(!is_valid_id("Q_K7NP3X"));
        assert!(!is_valid_id("../etc/passwd"));

        assert!(has_prefix("J_K7NP3X", EntityPrefix::Job));
        assert!(!has_prefix("C_K7NP3X", EntityPrefix::Job));
        assert!(has_prefix("AP_K7NP3X", EntityPrefix::Application));
    }
}
