//! Declarative form validation.
//!
//! Fields declare which validators apply to them through a whitespace-separated
//! directive (`"required email"`), and [`validate`] runs every declared
//! validator, aggregating per-field and whole-form validity plus the collected
//! values into a single [`FormReport`].
//!
//! Supported validators: `required`, `email`, `login`, `min`, `max`,
//! `checkbox`. The `min` and `max` validators read their length threshold from
//! the field's own `min`/`max` attribute.
//!
//! ```
//! use formcheck::{validate, FieldDescriptor, Form};
//!
//! let form = Form::new()
//!     .with_field(
//!         FieldDescriptor::text("name", "Grace")
//!             .with_directive("required min")
//!             .with_min("3"),
//!     )
//!     .with_field(FieldDescriptor::text("email", "grace@example.com").with_directive("email"));
//!
//! let report = validate(&form).unwrap();
//! assert!(report.is_form_valid);
//! assert_eq!(report.controls.len(), 2);
//! ```
//!
//! The report is plain data and serializes to the same shape the result is
//! consumed in: `isFormValid`, `controls`, `values`.

pub mod error;
pub mod field;
pub mod form;
pub mod validation;

pub use error::ValidateError;
pub use field::{FieldDescriptor, FieldValue};
pub use form::Form;
pub use validation::validators::Validator;
pub use validation::{validate, FieldResult, FormReport};
