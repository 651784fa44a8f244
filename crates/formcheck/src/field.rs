// File: src/field.rs
// Purpose: Field descriptor and value types

use serde::{Deserialize, Serialize};

/// Value carried by a form field: text content, or the checked state of a
/// checkbox-type input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// Text content of the field, if it carries any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Checked(_) => None,
        }
    }

    /// Checked state of the field; text fields are never checked
    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Checked(true))
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        FieldValue::Checked(checked)
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

/// One validatable form input.
///
/// `directive` holds the whitespace-separated validator names declared on the
/// element; `None` means the element carries no directive and does not
/// participate in validation. The `min`/`max` thresholds are kept as raw
/// attribute text and coerced when the matching validator runs.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub value: FieldValue,
    pub directive: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
}

impl FieldDescriptor {
    /// Create a text field without a directive
    pub fn text(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: FieldValue::Text(value.to_string()),
            directive: None,
            min: None,
            max: None,
        }
    }

    /// Create a checkbox field without a directive
    pub fn checkbox(name: &str, checked: bool) -> Self {
        Self {
            name: name.to_string(),
            value: FieldValue::Checked(checked),
            directive: None,
            min: None,
            max: None,
        }
    }

    /// Declare the validators for this field (whitespace-separated names)
    pub fn with_directive(mut self, directive: &str) -> Self {
        self.directive = Some(directive.to_string());
        self
    }

    /// Set the raw `min` length threshold attribute
    pub fn with_min(mut self, min: &str) -> Self {
        self.min = Some(min.to_string());
        self
    }

    /// Set the raw `max` length threshold attribute
    pub fn with_max(mut self, max: &str) -> Self {
        self.max = Some(max.to_string());
        self
    }

    /// Validator names declared on this field, in declaration order
    pub fn declared_validators(&self) -> std::str::SplitWhitespace<'_> {
        self.directive.as_deref().unwrap_or("").split_whitespace()
    }
}
