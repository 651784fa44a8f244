//! HTML fragment field discovery for `formcheck`.
//!
//! Scans markup for elements carrying the `data-validation-type` attribute
//! and turns them into a [`Form`] in document order, ready for
//! [`formcheck::validate`]. Only the attributes the validators consume are
//! read: `name`, `value`, `min`, `max`, plus `type="checkbox"` with the bare
//! `checked` flag.
//!
//! ```
//! use formcheck::validate;
//! use formcheck_html::parse_form;
//!
//! let form = parse_form(
//!     r#"<form class="user-form">
//!         <input type="text" data-validation-type="required" name="title" value="Hello" />
//!         <input type="checkbox" data-validation-type="checkbox" name="agree" checked />
//!     </form>"#,
//! );
//!
//! let report = validate(&form).unwrap();
//! assert!(report.is_form_valid);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use formcheck::{FieldDescriptor, FieldValue, Form};

/// The attribute naming a field's validators
pub const VALIDATION_ATTR: &str = "data-validation-type";

// Opening tags only; closing tags and comments never carry attributes
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[a-zA-Z][^>]*>").unwrap());

/// Collect the annotated fields of an HTML fragment into a [`Form`].
///
/// Elements appear in the form in document order. An element without the
/// validation attribute is not discovered at all; one with an empty attribute
/// is discovered and trivially valid.
pub fn parse_form(html: &str) -> Form {
    let mut form = Form::new();

    for tag_match in TAG_REGEX.find_iter(html) {
        let tag = tag_match.as_str();

        let directive = match attr_value(tag, VALIDATION_ATTR) {
            Some(value) => value,
            None if has_attr(tag, VALIDATION_ATTR) => String::new(),
            None => continue,
        };

        form.push(FieldDescriptor {
            name: attr_value(tag, "name").unwrap_or_default(),
            value: field_value(tag),
            directive: Some(directive),
            min: attr_value(tag, "min"),
            max: attr_value(tag, "max"),
        });
    }

    form
}

// Checkbox-type elements carry their checked state; everything else carries
// its value attribute (an empty input reads as the empty string)
fn field_value(tag: &str) -> FieldValue {
    if is_checkbox(tag) {
        FieldValue::Checked(has_attr(tag, "checked"))
    } else {
        FieldValue::Text(attr_value(tag, "value").unwrap_or_default())
    }
}

fn is_checkbox(tag: &str) -> bool {
    attr_value(tag, "type")
        .map(|kind| kind.eq_ignore_ascii_case("checkbox"))
        .unwrap_or(false)
}

/// Extract a quoted attribute value from a tag.
///
/// The attribute name must follow whitespace, so `min` never matches inside
/// `data-min` and `type` never matches inside `data-validation-type`.
///
/// # Examples
/// ```
/// # use formcheck_html::attr_value;
/// let tag = r#"<input class="wide" name="email" value="" />"#;
/// assert_eq!(attr_value(tag, "name"), Some("email".to_string()));
/// assert_eq!(attr_value(tag, "value"), Some(String::new()));
/// assert_eq!(attr_value(tag, "min"), None);
/// ```
pub fn attr_value(tag: &str, attr: &str) -> Option<String> {
    // Match: attr="value" or attr='value'
    let pattern = format!(r#"(?i)\s{}\s*=\s*["']([^"']*)["']"#, regex::escape(attr));
    let re = Regex::new(&pattern).ok()?;

    re.captures(tag)
        .map(|captures| captures[1].to_string())
}

/// Whether a tag carries an attribute at all, valued or bare (`checked`)
pub fn has_attr(tag: &str, attr: &str) -> bool {
    let pattern = format!(r#"(?i)\s{}[\s=/>]"#, regex::escape(attr));
    Regex::new(&pattern)
        .map(|re| re.is_match(tag))
        .unwrap_or(false)
}
