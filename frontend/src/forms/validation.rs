use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Field, FormFields};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Structural email check: something, `@`, something, `.`, something.
/// Not RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Field-level messages. Empty means every rule passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(ValidationResult),
    /// Honeypot was filled in. Invalid, but nothing is shown to the sender.
    Rejected,
}

/// Runs every rule and reports all violations together.
pub fn validate(fields: &FormFields) -> Validation {
    if !fields.honeypot.is_empty() {
        return Validation::Rejected;
    }

    let mut result = ValidationResult::default();

    if fields.name.trim().is_empty() {
        result.insert(Field::Name, "Name is required");
    }

    if fields.email.trim().is_empty() {
        result.insert(Field::Email, "Email is required");
    } else if !is_valid_email(&fields.email) {
        result.insert(Field::Email, "Please enter a valid email address");
    }

    if fields.kind.requires_comment() && fields.comment.trim().is_empty() {
        result.insert(Field::Comment, "Feedback is required");
    }

    if fields.kind.requires_platform() && fields.platform.is_none() {
        result.insert(Field::Platform, "Please choose a platform");
    }

    if result.is_empty() {
        Validation::Valid
    } else {
        Validation::Invalid(result)
    }
}
