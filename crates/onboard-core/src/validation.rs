//! Per-step validation gate.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use onboard_domain::{canonical_option, Field, ProfileDraft, Step, COMPANY_SIZES, INDUSTRIES};

// Shape check only: something, "@", something, ".", something.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Why a single field failed its step's gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
    UnknownOption,
}

impl FieldError {
    /// Inline message shown beneath the offending input.
    pub fn message(self, field: Field) -> String {
        let subject = subject(field);
        match self {
            FieldError::Required => format!("{subject} is required"),
            FieldError::InvalidFormat => format!("{subject} is invalid"),
            FieldError::UnknownOption => match field.options() {
                Some(options) => format!("{subject} must be one of: {}", options.join(", ")),
                None => format!("{subject} is invalid"),
            },
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldError::Required => "required",
            FieldError::InvalidFormat => "invalid format",
            FieldError::UnknownOption => "unknown option",
        };
        f.write_str(label)
    }
}

fn subject(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Email => "Email",
        Field::CompanyName => "Company name",
        Field::Industry => "Industry",
        Field::Size => "Company size",
        Field::Theme => "Theme",
        Field::Layout => "Layout",
    }
}

/// Field-level failures for one step. Empty means the step may be left.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.entries.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) -> Option<FieldError> {
        self.entries.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.entries.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.entries.iter().map(|(field, error)| (*field, *error))
    }

    /// Human-readable message for the field, if it failed.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|error| error.message(field))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .iter()
            .map(|(field, error)| format!("{field}: {error}"))
            .collect();
        f.write_str(&rendered.join(", "))
    }
}

/// Checks the required fields of `step` against `draft`.
pub fn validate(step: Step, draft: &ProfileDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    match step {
        Step::Personal => {
            require_text(&mut errors, Field::Name, &draft.name);
            if draft.email.trim().is_empty() {
                errors.insert(Field::Email, FieldError::Required);
            } else if !is_email_shaped(&draft.email) {
                errors.insert(Field::Email, FieldError::InvalidFormat);
            }
        }
        Step::Business => {
            require_text(&mut errors, Field::CompanyName, &draft.company_name);
            require_option(&mut errors, Field::Industry, &draft.industry, INDUSTRIES);
            require_option(&mut errors, Field::Size, &draft.size, COMPANY_SIZES);
        }
        Step::Preferences => {}
    }
    errors
}

/// Permissive `local@domain.tld` shape test; not an RFC 5322 grammar.
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

fn require_text(errors: &mut ValidationErrors, field: Field, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, FieldError::Required);
    }
}

fn require_option(
    errors: &mut ValidationErrors,
    field: Field,
    value: &str,
    options: &[&'static str],
) {
    if value.trim().is_empty() {
        errors.insert(field, FieldError::Required);
    } else if canonical_option(options, value).is_none() {
        errors.insert(field, FieldError::UnknownOption);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal(name: &str, email: &str) -> ProfileDraft {
        ProfileDraft::default()
            .with_field(Field::Name, name)
            .with_field(Field::Email, email)
    }

    #[test]
    fn blank_or_whitespace_name_is_required() {
        for name in ["", "   ", "\t\n"] {
            let errors = validate(Step::Personal, &personal(name, "a@b.co"));
            assert_eq!(errors.get(Field::Name), Some(FieldError::Required));
        }
    }

    #[test]
    fn email_requires_at_and_dot_after_it() {
        for email in ["ada", "ada.example.com", "ada@example", "ada@", "@b.co", "a@b."] {
            let errors = validate(Step::Personal, &personal("Ada", email));
            assert_eq!(
                errors.get(Field::Email),
                Some(FieldError::InvalidFormat),
                "{email} should be rejected"
            );
        }
        let errors = validate(Step::Personal, &personal("Ada", "a@b.co"));
        assert!(errors.is_empty());
    }

    #[test]
    fn empty_email_reports_required_not_format() {
        let errors = validate(Step::Personal, &personal("Ada", "  "));
        assert_eq!(errors.get(Field::Email), Some(FieldError::Required));
        assert_eq!(errors.message(Field::Email).as_deref(), Some("Email is required"));
    }

    #[test]
    fn business_step_accepts_catalog_values() {
        let draft = ProfileDraft::default()
            .with_field(Field::CompanyName, "Acme")
            .with_field(Field::Industry, "Tech")
            .with_field(Field::Size, "1-10");
        assert!(validate(Step::Business, &draft).is_empty());
    }

    #[test]
    fn business_step_reports_every_missing_field() {
        let errors = validate(Step::Business, &ProfileDraft::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.message(Field::CompanyName).as_deref(),
            Some("Company name is required")
        );
        assert_eq!(
            errors.message(Field::Size).as_deref(),
            Some("Company size is required")
        );
    }

    #[test]
    fn business_step_rejects_values_outside_catalog() {
        let draft = ProfileDraft::default()
            .with_field(Field::CompanyName, "Acme")
            .with_field(Field::Industry, "Mining")
            .with_field(Field::Size, "11-50");
        let errors = validate(Step::Business, &draft);
        assert_eq!(errors.get(Field::Industry), Some(FieldError::UnknownOption));
        assert!(!errors.contains(Field::Size));
    }

    #[test]
    fn preferences_step_always_passes() {
        let draft = ProfileDraft::default()
            .with_field(Field::Theme, "")
            .with_field(Field::Layout, "carousel");
        assert!(validate(Step::Preferences, &draft).is_empty());
    }

    #[test]
    fn display_lists_fields_in_wizard_order() {
        let errors = validate(Step::Personal, &personal("", "nope"));
        assert_eq!(errors.to_string(), "name: required, email: invalid format");
    }
}
