// File: src/validation/validators.rs
// Purpose: The supported validator set and its pure predicates

use once_cell::sync::Lazy;
use regex::Regex;

use crate::field::FieldDescriptor;

// Email pattern: local part, a domain label, then a 2-4 letter TLD with one
// optional 2-4 letter segment before it
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9_.-]+@[a-z0-9-]+\.(?:[a-z]{2,4}\.)?[a-z]{2,4}$").unwrap()
});

// Login pattern: 6 to 50 letters, digits or hyphens
static LOGIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z0-9-]{6,50}$").unwrap());

/// The closed set of supported validators.
///
/// Directive names map onto variants through [`Validator::from_name`]; a name
/// outside this set is the engine's `UnknownValidator` error, not a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validator {
    Required,
    Email,
    Login,
    Checkbox,
    Min,
    Max,
}

impl Validator {
    /// Look up a validator by its directive name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "required" => Some(Validator::Required),
            "email" => Some(Validator::Email),
            "login" => Some(Validator::Login),
            "checkbox" => Some(Validator::Checkbox),
            "min" => Some(Validator::Min),
            "max" => Some(Validator::Max),
            _ => None,
        }
    }

    /// Directive name of this validator
    pub fn name(&self) -> &'static str {
        match self {
            Validator::Required => "required",
            Validator::Email => "email",
            Validator::Login => "login",
            Validator::Checkbox => "checkbox",
            Validator::Min => "min",
            Validator::Max => "max",
        }
    }

    /// Evaluate this validator against a field.
    ///
    /// Pure: reads the descriptor, returns the outcome, mutates nothing.
    pub fn run(&self, field: &FieldDescriptor) -> bool {
        match self {
            Validator::Required => required(field),
            Validator::Email => email(field),
            Validator::Login => login(field),
            Validator::Checkbox => checkbox(field),
            Validator::Min => min_length(field),
            Validator::Max => max_length(field),
        }
    }
}

/// Value exists and trims to non-empty; a checked state always counts as present
pub fn required(field: &FieldDescriptor) -> bool {
    match field.value.as_text() {
        Some(text) => !text.trim().is_empty(),
        None => true,
    }
}

/// Value matches the email pattern
pub fn email(field: &FieldDescriptor) -> bool {
    field
        .value
        .as_text()
        .map(|text| EMAIL_REGEX.is_match(text))
        .unwrap_or(false)
}

/// Value matches the login pattern
pub fn login(field: &FieldDescriptor) -> bool {
    field
        .value
        .as_text()
        .map(|text| LOGIN_REGEX.is_match(text))
        .unwrap_or(false)
}

/// Checked state is set
pub fn checkbox(field: &FieldDescriptor) -> bool {
    field.value.is_checked()
}

/// Character count of the value is at least the declared `min` threshold
pub fn min_length(field: &FieldDescriptor) -> bool {
    match (field.value.as_text(), threshold(field.min.as_deref())) {
        (Some(text), Some(min)) => text.chars().count() as f64 >= min,
        _ => false,
    }
}

/// Character count of the value is at most the declared `max` threshold
pub fn max_length(field: &FieldDescriptor) -> bool {
    match threshold(field.max.as_deref()) {
        Some(max) => {
            let len = field
                .value
                .as_text()
                .map(|text| text.chars().count())
                .unwrap_or(0);
            len as f64 <= max
        }
        None => false,
    }
}

// Numeric coercion of a raw threshold attribute; an absent or malformed
// attribute reads as no threshold and the length validator fails
fn threshold(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|text| text.trim().parse::<f64>().ok())
        .filter(|number| !number.is_nan())
}
