//! Field validation as an explicit rule table.
//!
//! # Design
//! Each validated field maps to a predicate and a fixed message. Two entry
//! points cover the two uses a form has for validation: `validate_field`
//! produces the inline error for the control the user just touched, and
//! `validate_all` gates the submit button on the whole value snapshot.
//!
//! The size field is deliberately asymmetric between the two: an empty
//! size (the user has not picked one yet) keeps the form unsubmittable,
//! but showing "size must be S or M or L" before the user has touched the
//! select would be noise, so `validate_field` reports nothing for it.

use crate::types::FormValues;

pub const FULL_NAME_TOO_SHORT: &str = "full name must be at least 3 characters";
pub const FULL_NAME_TOO_LONG: &str = "full name must be at most 20 characters";
pub const SIZE_INCORRECT: &str = "size must be S or M or L";

const FULL_NAME_MIN: usize = 3;
const FULL_NAME_MAX: usize = 20;
const SIZES: [&str; 3] = ["S", "M", "L"];

/// A form field subject to validation. Toppings carry no rule and are not
/// listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Size,
}

/// Run the single-field rule for `field` against a raw control value.
///
/// Returns the inline error message, or `None` when the value passes.
/// Full-name length is measured on the trimmed value, in characters.
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::FullName => {
            let len = value.trim().chars().count();
            if len < FULL_NAME_MIN {
                Some(FULL_NAME_TOO_SHORT)
            } else if len > FULL_NAME_MAX {
                Some(FULL_NAME_TOO_LONG)
            } else {
                None
            }
        }
        Field::Size => {
            // Empty means "not chosen yet": invalid for submit gating
            // (see validate_all) but not an inline error.
            if value.is_empty() || SIZES.contains(&value) {
                None
            } else {
                Some(SIZE_INCORRECT)
            }
        }
    }
}

/// Whole-form validity: every rule passes on the current snapshot.
///
/// This is the only input to the submit-enabled flag. Unlike
/// `validate_field`, an empty size fails here — an order without a size
/// must not be submittable. Toppings are unconstrained and ignored.
pub fn validate_all(values: &FormValues) -> bool {
    validate_field(Field::FullName, &values.full_name).is_none()
        && SIZES.contains(&values.size.as_str())
}
