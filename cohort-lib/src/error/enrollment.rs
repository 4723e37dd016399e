//! EnrollmentError for the enrollment form

/// Error type for enrollment form input and submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrollmentError {
    /// A required field was left empty on submit.
    #[error("Field '{field}' is required")]
    MissingField { field: &'static str },

    /// The term input could not be read as a number.
    #[error("Invalid term '{input}'")]
    InvalidTerm { input: String },

    /// A date input could not be parsed.
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },
}

impl EnrollmentError {
    /// Creates a new missing field error.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates a new invalid term error.
    pub fn invalid_term(input: impl Into<String>) -> Self {
        Self::InvalidTerm {
            input: input.into(),
        }
    }

    /// Creates a new invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }
}
