//! Request validation against compile-time-declared schemas.
//!
//! A [`RequestSchema`] lists each field's internal identifier, optional wire
//! name and ordered rule set as `static` data. [`validate`] walks a decoded
//! request against its schema and yields [`Violation`]s carrying resolved
//! wire names, which [`error_report`] turns into the per-field message map
//! returned to callers.

pub mod validators;

use std::collections::BTreeMap;

use crate::i18n::Translator;

/// A single declared constraint on a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Min(i64),
    Max(i64),
    Email,
}

impl Rule {
    /// Catalog key used for message lookup.
    pub fn key(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Min(_) => "min",
            Rule::Max(_) => "max",
            Rule::Email => "email",
        }
    }

    /// Constraint parameter interpolated into message templates, if any.
    pub fn param(&self) -> Option<i64> {
        match self {
            Rule::Min(n) | Rule::Max(n) => Some(*n),
            Rule::Required | Rule::Email => None,
        }
    }
}

/// One field of a request schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub ident: &'static str,
    pub wire: Option<&'static str>,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    /// Resolves the name callers know this field by. An explicit annotation
    /// wins unless it is empty or the `-` ignore marker; otherwise the
    /// internal identifier with its first character lowercased. Total, so a
    /// violation can always be keyed by something the caller recognizes.
    pub fn wire_name(&self) -> String {
        match self.wire {
            Some(wire) if !wire.is_empty() && wire != "-" => wire.to_string(),
            _ => lower_first(self.ident),
        }
    }
}

fn lower_first(ident: &str) -> String {
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A named, immutable request shape. Declared as a `static` next to the
/// request type it describes.
#[derive(Debug, Clone, Copy)]
pub struct RequestSchema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

/// A decoded field value as seen by the validator. `Absent` covers both a
/// missing key and an explicit null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Absent,
    Str(&'a str),
    Int(i64),
}

impl<'a> FieldValue<'a> {
    pub fn from_opt_str(value: &'a Option<String>) -> Self {
        match value {
            Some(s) => FieldValue::Str(s),
            None => FieldValue::Absent,
        }
    }

    pub fn from_opt_int(value: Option<i64>) -> Self {
        match value {
            Some(n) => FieldValue::Int(n),
            None => FieldValue::Absent,
        }
    }
}

/// One constraint failure for one field. `field` is always the resolved wire
/// name, never the internal identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub rule: Rule,
}

/// Decoded request types that can hand the validator their schema and values.
///
/// `values` must yield one entry per schema field, in declaration order.
pub trait Validatable {
    fn schema() -> &'static RequestSchema;
    fn values(&self) -> Vec<FieldValue<'_>>;
}

/// Runs every schema rule against the decoded values, in field declaration
/// order and rule declaration order within a field.
///
/// Policy: a `Required` failure suppresses the field's remaining rules for
/// this request. Any other failure is recorded and evaluation continues, so
/// a field may still accrue several violations.
pub fn validate<T: Validatable>(request: &T) -> Vec<Violation> {
    let schema = T::schema();
    let values = request.values();
    debug_assert_eq!(
        schema.fields.len(),
        values.len(),
        "schema/value arity mismatch in {}",
        schema.name
    );

    let mut violations = Vec::new();
    for (spec, value) in schema.fields.iter().zip(values.iter()) {
        for rule in spec.rules {
            let ok = match rule {
                Rule::Required => validators::is_present(value),
                Rule::Min(min) => validators::meets_min(value, *min),
                Rule::Max(max) => validators::meets_max(value, *max),
                Rule::Email => validators::is_valid_email(value),
            };
            if !ok {
                violations.push(Violation {
                    field: spec.wire_name(),
                    rule: *rule,
                });
                if matches!(rule, Rule::Required) {
                    break;
                }
            }
        }
    }
    violations
}

/// Wire field name to ordered translated messages. A `BTreeMap` keeps the
/// serialized report deterministic.
pub type ErrorReport = BTreeMap<String, Vec<String>>;

/// Translates violations into the per-field report returned to callers.
/// Produces `None` when there is nothing to report.
pub fn error_report(violations: &[Violation], translator: &Translator) -> Option<ErrorReport> {
    if violations.is_empty() {
        return None;
    }
    let mut report = ErrorReport::new();
    for violation in violations {
        report
            .entry(violation.field.clone())
            .or_default()
            .push(translator.message(violation.rule.key(), violation.rule.param()));
    }
    Some(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, Translator};

    static SIGNUP_SCHEMA: RequestSchema = RequestSchema {
        name: "Signup",
        fields: &[
            FieldSpec {
                ident: "Name",
                wire: Some("name"),
                rules: &[Rule::Required, Rule::Min(2), Rule::Max(100)],
            },
            FieldSpec {
                ident: "Email",
                wire: Some("email"),
                rules: &[Rule::Required, Rule::Email],
            },
            FieldSpec {
                ident: "Age",
                wire: None,
                rules: &[Rule::Required],
            },
        ],
    };

    struct Signup {
        name: Option<String>,
        email: Option<String>,
        age: Option<i64>,
    }

    impl Signup {
        fn new(name: &str, email: &str, age: i64) -> Self {
            Self {
                name: Some(name.to_string()),
                email: Some(email.to_string()),
                age: Some(age),
            }
        }
    }

    impl Validatable for Signup {
        fn schema() -> &'static RequestSchema {
            &SIGNUP_SCHEMA
        }

        fn values(&self) -> Vec<FieldValue<'_>> {
            vec![
                FieldValue::from_opt_str(&self.name),
                FieldValue::from_opt_str(&self.email),
                FieldValue::from_opt_int(self.age),
            ]
        }
    }

    #[test]
    fn test_valid_request_has_no_violations() {
        let request = Signup::new("Alice", "alice@example.com", 30);
        assert!(validate(&request).is_empty());
    }

    #[test]
    fn test_violations_follow_declaration_order() {
        let request = Signup::new("A", "bad", 0);
        let violations = validate(&request);
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "age"]);
        assert_eq!(violations[0].rule, Rule::Min(2));
        assert_eq!(violations[1].rule, Rule::Email);
        assert_eq!(violations[2].rule, Rule::Required);
    }

    #[test]
    fn test_required_failure_suppresses_remaining_rules() {
        let request = Signup {
            name: Some(String::new()),
            email: None,
            age: Some(30),
        };
        let violations = validate(&request);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field, "name");
        assert_eq!(violations[0].rule, Rule::Required);
        assert_eq!(violations[1].field, "email");
        assert_eq!(violations[1].rule, Rule::Required);
    }

    #[test]
    fn test_zero_age_is_a_required_violation() {
        let request = Signup::new("Alice", "alice@example.com", 0);
        let violations = validate(&request);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "age");
        assert_eq!(violations[0].rule, Rule::Required);
    }

    #[test]
    fn test_field_can_accrue_multiple_violations() {
        static STRICT_SCHEMA: RequestSchema = RequestSchema {
            name: "Strict",
            fields: &[FieldSpec {
                ident: "Contact",
                wire: Some("contact"),
                rules: &[Rule::Min(5), Rule::Email],
            }],
        };

        struct Strict {
            contact: Option<String>,
        }

        impl Validatable for Strict {
            fn schema() -> &'static RequestSchema {
                &STRICT_SCHEMA
            }

            fn values(&self) -> Vec<FieldValue<'_>> {
                vec![FieldValue::from_opt_str(&self.contact)]
            }
        }

        let request = Strict {
            contact: Some("abc".to_string()),
        };
        let violations = validate(&request);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].rule, Rule::Min(5));
        assert_eq!(violations[1].rule, Rule::Email);
    }

    #[test]
    fn test_wire_name_prefers_annotation() {
        let spec = FieldSpec {
            ident: "EmailAddress",
            wire: Some("email"),
            rules: &[],
        };
        assert_eq!(spec.wire_name(), "email");
    }

    #[test]
    fn test_wire_name_falls_back_to_lowercased_identifier() {
        for wire in [None, Some(""), Some("-")] {
            let spec = FieldSpec {
                ident: "UserName",
                wire,
                rules: &[],
            };
            assert_eq!(spec.wire_name(), "userName");
        }
    }

    #[test]
    fn test_report_keys_are_wire_names() {
        let translator = Translator::new(Locale::En);
        let request = Signup::new("A", "bad", 0);
        let report = error_report(&validate(&request), &translator).unwrap();
        assert_eq!(report["name"], vec!["Minimum value is 2"]);
        assert_eq!(report["email"], vec!["Invalid email format"]);
        assert_eq!(report["age"], vec!["This field is required"]);
        assert!(!report.contains_key("Age"));
    }

    #[test]
    fn test_no_violations_produce_no_report() {
        let translator = Translator::new(Locale::En);
        assert!(error_report(&[], &translator).is_none());
    }
}
