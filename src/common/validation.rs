// Request validation shared by the job and company handlers

#[derive(Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Accumulates field errors; a result with no errors is valid
#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    /// Record an error when a required text field is blank or longer than `max`
    pub fn require_text(&mut self, field: &str, value: &str, label: &str, max: usize) {
        if value.trim().is_empty() {
            self.add_error(field, &format!("{} is required", label));
        } else if value.chars().count() > max {
            self.add_error(
                field,
                &format!("{} must be less than {} characters", label, max),
            );
        }
    }

    /// Record an error when an optional text field is longer than `max`
    pub fn limit_text(&mut self, field: &str, value: Option<&str>, label: &str, max: usize) {
        if let Some(value) = value {
            if value.chars().count() > max {
                self.add_error(
                    field,
                    &format!("{} must be less than {} characters", label, max),
                );
            }
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}
