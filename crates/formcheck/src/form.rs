// File: src/form.rs
// Purpose: Document-ordered collection of form fields

use crate::field::FieldDescriptor;

/// A form-like collection of fields, kept in document order.
///
/// Hosts either build one directly or let an adapter (such as
/// `formcheck-html`) discover the fields from markup. Insertion order is
/// document order and determines the order of `controls` in the report.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<FieldDescriptor>,
}

impl Form {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field after the existing ones
    pub fn push(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    /// Builder-style append
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// All fields, annotated or not
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Fields carrying a validation directive, in document order
    pub fn annotated_fields(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter().filter(|field| field.directive.is_some())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
