// Helper functions for safe logging and serialization

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// `"user@example.com"` becomes `"u***@example.com"`.
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 {
            format!("{}***@{}", &parts[0][..1.min(parts[0].len())], parts[1])
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

/// Masks tokens for safe logging
/// Shows only first and last 4 characters
pub fn safe_token_log(token: &str) -> String {
    if token.len() > 8 && token.is_ascii() {
        format!("{}...{}", &token[..4], &token[token.len() - 4..])
    } else {
        "***".to_string()
    }
}

/// Deserializes a salary given either as a JSON number or a string.
/// The value is kept as text; interpretation belongs to the salary matcher.
pub fn deserialize_salary<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!("invalid salary value: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Salaried {
        #[serde(default, deserialize_with = "deserialize_salary")]
        salary: Option<String>,
    }

    #[test]
    fn test_salary_accepts_number_and_string() {
        let n: Salaried = serde_json::from_str(r#"{"salary": 1200000}"#).unwrap();
        assert_eq!(n.salary.as_deref(), Some("1200000"));

        let s: Salaried = serde_json::from_str(r#"{"salary": "₹12,00,000"}"#).unwrap();
        assert_eq!(s.salary.as_deref(), Some("₹12,00,000"));

        let missing: Salaried = serde_json::from_str("{}").unwrap();
        assert!(missing.salary.is_none());

        let null: Salaried = serde_json::from_str(r#"{"salary": null}"#).unwrap();
        assert!(null.salary.is_none());
    }

    #[test]
    fn test_salary_rejects_objects() {
        let result = serde_json::from_str::<Salaried>(r#"{"salary": {"min": 1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_masking() {
        assert_eq!(safe_email_log("user@example.com"), "u***@example.com");
        assert_eq!(safe_token_log("eyJhbGciOiJIUzI1NiJ9"), "eyJh...NiJ9");
        assert_eq!(safe_token_log("short"), "***");
    }
}
