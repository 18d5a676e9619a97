//! Localized messages for constraint violations.
//!
//! Catalogs are static template tables keyed by constraint kind, one per
//! supported locale, materialized into lookup maps once and read-only
//! thereafter. Lookup never fails: a missing entry falls back to the default
//! locale's catalog, then to a generic message.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Locales with a message catalog. The set is closed and known at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Tr,
    Ru,
}

pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Tr, Locale::Ru];

pub const DEFAULT_LOCALE: Locale = Locale::En;

/// Catch-all for constraint kinds with no catalog entry anywhere.
pub const GENERIC_MESSAGE: &str = "Invalid value";

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Tr => "tr",
            Locale::Ru => "ru",
        }
    }

    /// Tolerant tag parse: trims, lowercases and ignores region subtags, so
    /// "TR", " tr " and "tr-TR" all resolve to `Tr`. Unsupported tags yield
    /// `None`; callers decide whether to warn before falling back.
    pub fn parse(tag: &str) -> Option<Locale> {
        let normalized = tag.trim().to_lowercase();
        let primary = normalized.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "en" => Some(Locale::En),
            "tr" => Some(Locale::Tr),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }
}

static EN_MESSAGES: &[(&str, &str)] = &[
    ("required", "This field is required"),
    ("email", "Invalid email format"),
    ("min", "Minimum value is {param}"),
    ("max", "Maximum value is {param}"),
];

static TR_MESSAGES: &[(&str, &str)] = &[
    ("required", "Bu alan zorunludur"),
    ("email", "Geçersiz e-posta adresi"),
    ("min", "En az {param} olmalıdır"),
    ("max", "En fazla {param} olmalıdır"),
];

static RU_MESSAGES: &[(&str, &str)] = &[
    ("required", "Это поле обязательно для заполнения"),
    ("email", "Некорректный адрес электронной почты"),
    ("min", "Минимальное значение {param}"),
    ("max", "Максимальное значение {param}"),
];

fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static EN: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static TR: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static RU: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match locale {
        Locale::En => EN.get_or_init(|| EN_MESSAGES.iter().copied().collect()),
        Locale::Tr => TR.get_or_init(|| TR_MESSAGES.iter().copied().collect()),
        Locale::Ru => RU.get_or_init(|| RU_MESSAGES.iter().copied().collect()),
    }
}

/// Message translator fixed to one locale.
///
/// Immutable and `Copy`: all catalog data is static, so a translator can be
/// shared across requests without locking.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Renders the message for one constraint kind, interpolating `{param}`
    /// when the constraint carries a parameter. Lookup order: this locale's
    /// catalog, the default locale's catalog, the generic message.
    pub fn message(&self, kind: &str, param: Option<i64>) -> String {
        let template = catalog_for(self.locale)
            .get(kind)
            .or_else(|| catalog_for(DEFAULT_LOCALE).get(kind))
            .copied()
            .unwrap_or(GENERIC_MESSAGE);
        match param {
            Some(param) => template.replace("{param}", &param.to_string()),
            None => template.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tolerates_case_whitespace_and_region() {
        assert_eq!(Locale::parse("tr"), Some(Locale::Tr));
        assert_eq!(Locale::parse("TR"), Some(Locale::Tr));
        assert_eq!(Locale::parse("  ru  "), Some(Locale::Ru));
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse("tr_TR"), Some(Locale::Tr));
    }

    #[test]
    fn test_parse_rejects_unsupported_tags() {
        assert_eq!(Locale::parse("de"), None);
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse("english"), None);
    }

    #[test]
    fn test_every_locale_covers_every_rule_kind() {
        for locale in SUPPORTED_LOCALES {
            for kind in ["required", "email", "min", "max"] {
                assert!(
                    catalog_for(*locale).contains_key(kind),
                    "{} missing {}",
                    locale.as_str(),
                    kind
                );
            }
        }
    }

    #[test]
    fn test_param_interpolation() {
        let translator = Translator::new(Locale::En);
        assert_eq!(translator.message("min", Some(2)), "Minimum value is 2");
        assert_eq!(translator.message("max", Some(100)), "Maximum value is 100");
        assert_eq!(translator.message("required", None), "This field is required");
    }

    #[test]
    fn test_localized_templates() {
        let translator = Translator::new(Locale::Tr);
        assert_eq!(translator.message("required", None), "Bu alan zorunludur");
        assert_eq!(translator.message("min", Some(2)), "En az 2 olmalıdır");

        let translator = Translator::new(Locale::Ru);
        assert_eq!(
            translator.message("min", Some(2)),
            "Минимальное значение 2"
        );
    }

    #[test]
    fn test_unknown_kind_degrades_to_generic_message() {
        for locale in SUPPORTED_LOCALES {
            let translator = Translator::new(*locale);
            assert_eq!(translator.message("uuid", None), GENERIC_MESSAGE);
        }
    }

    #[test]
    fn test_unsupported_tag_matches_default_locale_output() {
        let fallback = Translator::new(Locale::parse("de").unwrap_or(DEFAULT_LOCALE));
        let default = Translator::new(DEFAULT_LOCALE);
        for kind in ["required", "email", "min", "max"] {
            assert_eq!(fallback.message(kind, Some(7)), default.message(kind, Some(7)));
        }
    }

    #[test]
    fn test_translation_is_idempotent() {
        let translator = Translator::new(Locale::Tr);
        assert_eq!(
            translator.message("max", Some(100)),
            translator.message("max", Some(100))
        );
    }
}
