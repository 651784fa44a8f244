// File: src/error.rs
// Purpose: Validator engine error type

use thiserror::Error;

/// Errors surfaced by the validator engine.
///
/// Failed validations are not errors; they show up as `false` outcomes in the
/// report. An error means the form declaration itself is broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// A field declared a validator name outside the supported set
    #[error("unknown validator `{validator}` on field `{field}`")]
    UnknownValidator { field: String, validator: String },
}
