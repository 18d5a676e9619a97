use lazy_static::lazy_static;
use regex::Regex;

use super::FieldValue;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    )
    .unwrap();
}

/// A field counts as present only when it carries a non-zero value: absent
/// keys, empty strings and zero integers are all treated as "not provided".
pub fn is_present(value: &FieldValue<'_>) -> bool {
    match value {
        FieldValue::Absent => false,
        FieldValue::Str(s) => !s.is_empty(),
        FieldValue::Int(n) => *n != 0,
    }
}

/// Lower bound check. Strings compare by character count, integers by value.
/// Absent values compare as the zero value.
pub fn meets_min(value: &FieldValue<'_>, min: i64) -> bool {
    match value {
        FieldValue::Absent => min <= 0,
        FieldValue::Str(s) => s.chars().count() as i64 >= min,
        FieldValue::Int(n) => *n >= min,
    }
}

/// Upper bound check, mirroring `meets_min`.
pub fn meets_max(value: &FieldValue<'_>, max: i64) -> bool {
    match value {
        FieldValue::Absent => max >= 0,
        FieldValue::Str(s) => s.chars().count() as i64 <= max,
        FieldValue::Int(n) => *n <= max,
    }
}

/// Email format check. Only string values can match.
pub fn is_valid_email(value: &FieldValue<'_>) -> bool {
    match value {
        FieldValue::Str(s) => EMAIL_REGEX.is_match(s),
        _ => false,
    }
}
