// File: src/validation/mod.rs
// Purpose: Validator dispatch and result aggregation

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidateError;
use crate::field::{FieldDescriptor, FieldValue};
use crate::form::Form;

pub mod validators;

use validators::Validator;

/// Outcome for a single field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldResult {
    pub name: String,
    pub value: FieldValue,
    /// AND of every entry in `validators`; vacuously true when the map is empty
    pub valid: bool,
    /// Validator name to outcome; a duplicate name in the directive is
    /// re-evaluated and overwrites the earlier entry
    pub validators: HashMap<String, bool>,
}

/// Aggregated outcome of one validation run.
///
/// Plain data, suitable for serialization; the JSON shape uses the camelCase
/// keys the result object is consumed with (`isFormValid`, `controls`,
/// `values`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormReport {
    /// AND of every field's `valid` flag
    pub is_form_valid: bool,
    /// Per-field results in document order; duplicate names stay separate
    pub controls: Vec<FieldResult>,
    /// Field name to final value; a later duplicate name overwrites an earlier one
    pub values: HashMap<String, FieldValue>,
}

impl FormReport {
    fn new() -> Self {
        Self {
            is_form_valid: true,
            controls: Vec::new(),
            values: HashMap::new(),
        }
    }

    /// Result for a named field; the last one in document order when names repeat
    pub fn field(&self, name: &str) -> Option<&FieldResult> {
        self.controls.iter().rev().find(|control| control.name == name)
    }

    /// Collected value for a named field
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Fields that failed at least one validator, in document order
    pub fn invalid_fields(&self) -> Vec<&FieldResult> {
        self.controls.iter().filter(|control| !control.valid).collect()
    }
}

/// Run every declared validator across the form's annotated fields.
///
/// A fresh report is built per call and threaded through the run as the only
/// accumulator; nothing is shared between calls. Fields appear in `controls`
/// in document order, `values` keeps one entry per distinct field name (last
/// write wins), and `is_form_valid` is the AND of every field's validity.
///
/// Fails with [`ValidateError::UnknownValidator`] when a directive names a
/// validator outside the supported set.
pub fn validate(form: &Form) -> Result<FormReport, ValidateError> {
    let mut report = FormReport::new();

    for field in form.annotated_fields() {
        let result = validate_field(field)?;
        tracing::trace!(field = %result.name, valid = result.valid, "field validated");

        report.is_form_valid = report.is_form_valid && result.valid;
        report.values.insert(result.name.clone(), result.value.clone());
        report.controls.push(result);
    }

    tracing::debug!(
        fields = report.controls.len(),
        valid = report.is_form_valid,
        "form validated"
    );
    Ok(report)
}

fn validate_field(field: &FieldDescriptor) -> Result<FieldResult, ValidateError> {
    let mut outcomes = HashMap::new();

    for name in field.declared_validators() {
        let validator =
            Validator::from_name(name).ok_or_else(|| ValidateError::UnknownValidator {
                field: field.name.clone(),
                validator: name.to_string(),
            })?;
        outcomes.insert(name.to_string(), validator.run(field));
    }

    let valid = outcomes.values().all(|outcome| *outcome);

    Ok(FieldResult {
        name: field.name.clone(),
        value: field.value.clone(),
        valid,
        validators: outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_is_valid() {
        let report = validate(&Form::new()).unwrap();
        assert!(report.is_form_valid);
        assert!(report.controls.is_empty());
        assert!(report.values.is_empty());
    }

    #[test]
    fn test_field_without_directive_is_not_discovered() {
        let form = Form::new().with_field(FieldDescriptor::text("plain", ""));
        let report = validate(&form).unwrap();
        assert!(report.is_form_valid);
        assert!(report.controls.is_empty());
        assert!(report.values.is_empty());
    }

    #[test]
    fn test_empty_directive_is_trivially_valid() {
        let form = Form::new().with_field(FieldDescriptor::text("note", "").with_directive(""));
        let report = validate(&form).unwrap();

        assert!(report.is_form_valid);
        let control = report.field("note").unwrap();
        assert!(control.valid);
        assert!(control.validators.is_empty());
        assert_eq!(report.value("note"), Some(&FieldValue::Text(String::new())));
    }

    #[test]
    fn test_failing_validator_invalidates_field_and_form() {
        let form = Form::new().with_field(
            FieldDescriptor::text("email", "not-an-email").with_directive("required email"),
        );
        let report = validate(&form).unwrap();

        assert!(!report.is_form_valid);
        let control = report.field("email").unwrap();
        assert!(!control.valid);
        assert_eq!(control.validators.get("required"), Some(&true));
        assert_eq!(control.validators.get("email"), Some(&false));
    }

    #[test]
    fn test_one_invalid_field_among_valid_ones() {
        let form = Form::new()
            .with_field(FieldDescriptor::text("title", "Hello").with_directive("required"))
            .with_field(FieldDescriptor::text("age", "12345").with_directive("min").with_min("6"))
            .with_field(FieldDescriptor::checkbox("agree", true).with_directive("checkbox"));
        let report = validate(&form).unwrap();

        assert!(!report.is_form_valid);
        assert!(report.field("title").unwrap().valid);
        assert!(!report.field("age").unwrap().valid);
        assert!(report.field("agree").unwrap().valid);
        assert_eq!(report.invalid_fields().len(), 1);
    }

    #[test]
    fn test_unknown_validator_is_a_checked_error() {
        let form = Form::new()
            .with_field(FieldDescriptor::text("phone", "555-0100").with_directive("required phone"));
        let err = validate(&form).unwrap_err();

        assert_eq!(
            err,
            ValidateError::UnknownValidator {
                field: "phone".to_string(),
                validator: "phone".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_validator_names_collapse_in_map() {
        let form = Form::new()
            .with_field(FieldDescriptor::text("title", "Hello").with_directive("required required"));
        let report = validate(&form).unwrap();

        let control = report.field("title").unwrap();
        assert_eq!(control.validators.len(), 1);
        assert_eq!(control.validators.get("required"), Some(&true));
        assert!(control.valid);
    }

    #[test]
    fn test_duplicate_field_names_last_write_wins() {
        let form = Form::new()
            .with_field(FieldDescriptor::text("title", "Hi").with_directive("required"))
            .with_field(FieldDescriptor::text("title", "abcdef").with_directive("login"));
        let report = validate(&form).unwrap();

        assert_eq!(report.controls.len(), 2);
        assert_eq!(report.values.len(), 1);
        assert_eq!(
            report.value("title"),
            Some(&FieldValue::Text("abcdef".to_string()))
        );
        assert!(report.is_form_valid);
    }

    #[test]
    fn test_consecutive_runs_are_independent() {
        let invalid = Form::new()
            .with_field(FieldDescriptor::text("title", "").with_directive("required"));
        let valid = Form::new()
            .with_field(FieldDescriptor::text("title", "Hello").with_directive("required"));

        assert!(!validate(&invalid).unwrap().is_form_valid);
        // a prior invalid run leaves no trace behind
        assert!(validate(&valid).unwrap().is_form_valid);
    }

    #[test]
    fn test_field_valid_equals_and_of_outcomes() {
        let form = Form::new().with_field(
            FieldDescriptor::text("login", "abcdef")
                .with_directive("required login max")
                .with_max("10"),
        );
        let report = validate(&form).unwrap();

        let control = report.field("login").unwrap();
        assert_eq!(control.valid, control.validators.values().all(|ok| *ok));
        assert!(control.valid);
    }
}
