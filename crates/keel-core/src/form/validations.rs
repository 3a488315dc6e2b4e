//! Small rule helpers for [`Form::validate`](super::Form::validate).

use std::ops::RangeInclusive;

use keel_model::FormErrors;

/// `attribute` must contain non-whitespace text.
pub fn presence(errors: &mut FormErrors, attribute: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(attribute, "can't be blank");
    }
}

/// `attribute` must fall inside `range`.
pub fn within(errors: &mut FormErrors, attribute: &str, value: i64, range: RangeInclusive<i64>) {
    if !range.contains(&value) {
        errors.add(
            attribute,
            format!("must be between {} and {}", range.start(), range.end()),
        );
    }
}

/// `attribute` must have between `range` characters.
pub fn length(errors: &mut FormErrors, attribute: &str, value: &str, range: RangeInclusive<usize>) {
    let len = value.chars().count();
    if len < *range.start() {
        errors.add(
            attribute,
            format!("is too short (minimum is {} characters)", range.start()),
        );
    } else if len > *range.end() {
        errors.add(
            attribute,
            format!("is too long (maximum is {} characters)", range.end()),
        );
    }
}
