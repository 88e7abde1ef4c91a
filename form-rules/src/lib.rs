//! Field rules shared by the portal forms and the API.
//!
//! Every validator here is a pure function over a raw request: it never
//! fails, it reports. The API runs the same functions the dry-run endpoints
//! expose to the forms, so a payload judged valid in one place is valid in
//! the other.

mod checks;

pub mod course_feedback;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
pub mod job_notification;
pub mod listing;
pub mod patterns;
pub mod placement_feedback;
pub mod review;
pub mod sanitize;
pub mod vocab;

pub use shared_types::FieldErrors;

/// Error map plus validity flag. `is_valid` is true exactly when `errors`
/// is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: FieldErrors,
}

impl ValidationOutcome {
    pub fn from_errors(errors: FieldErrors) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Merges section error maps. Keys already present are kept.
pub fn merge_errors<I>(sections: I) -> FieldErrors
where
    I: IntoIterator<Item = FieldErrors>,
{
    let mut merged = FieldErrors::new();
    for section in sections {
        for (field, message) in section {
            merged.entry(field).or_insert(message);
        }
    }
    merged
}

pub fn single_error(field: &str, message: impl Into<String>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field.to_string(), message.into());
    errors
}
