use anyhow::{Context, Result};
use shared::i18n::{Locale, DEFAULT_LOCALE};

const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub lang: Locale,
    pub api_secret_key: String,
}

impl Config {
    /// Reads configuration from the environment. A missing or empty
    /// `API_SECRET_KEY` is fatal: serving without the shared secret would
    /// leave the gated routes open.
    pub fn from_env() -> Result<Self> {
        let port = env_u16("PORT", DEFAULT_PORT);
        let lang = env_locale("APP_LANG");
        let api_secret_key = std::env::var("API_SECRET_KEY")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .context("API_SECRET_KEY is not set; refusing to start without it")?;

        Ok(Self {
            port,
            lang,
            api_secret_key,
        })
    }
}

fn env_u16(key: &str, default: u16) -> u16 {
    match std::env::var(key) {
        Ok(raw) => match raw.parse::<u16>() {
            Ok(value) if value > 0 => value,
            _ => {
                tracing::warn!("Invalid value for {key} (`{raw}`), using default {default}");
                default
            }
        },
        Err(_) => default,
    }
}

fn env_locale(key: &str) -> Locale {
    match std::env::var(key) {
        Ok(raw) => match Locale::parse(&raw) {
            Some(locale) => locale,
            None => {
                tracing::warn!(
                    "Unsupported {key} (`{raw}`), using default {}",
                    DEFAULT_LOCALE.as_str()
                );
                DEFAULT_LOCALE
            }
        },
        Err(_) => DEFAULT_LOCALE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_u16_defaults_when_unset() {
        assert_eq!(env_u16("PORT_TEST_UNSET", DEFAULT_PORT), DEFAULT_PORT);
    }

    #[test]
    fn test_env_u16_rejects_garbage_and_zero() {
        std::env::set_var("PORT_TEST_GARBAGE", "not-a-port");
        assert_eq!(env_u16("PORT_TEST_GARBAGE", DEFAULT_PORT), DEFAULT_PORT);

        std::env::set_var("PORT_TEST_ZERO", "0");
        assert_eq!(env_u16("PORT_TEST_ZERO", DEFAULT_PORT), DEFAULT_PORT);

        std::env::set_var("PORT_TEST_OK", "3000");
        assert_eq!(env_u16("PORT_TEST_OK", DEFAULT_PORT), 3000);
    }

    #[test]
    fn test_env_locale_tolerates_tags_and_falls_back() {
        std::env::set_var("APP_LANG_TEST_TR", " TR ");
        assert_eq!(env_locale("APP_LANG_TEST_TR"), Locale::Tr);

        std::env::set_var("APP_LANG_TEST_BAD", "klingon");
        assert_eq!(env_locale("APP_LANG_TEST_BAD"), DEFAULT_LOCALE);

        assert_eq!(env_locale("APP_LANG_TEST_UNSET"), DEFAULT_LOCALE);
    }

    #[test]
    fn test_secret_is_required() {
        std::env::remove_var("API_SECRET_KEY");
        assert!(Config::from_env().is_err());

        std::env::set_var("API_SECRET_KEY", "   ");
        assert!(Config::from_env().is_err());

        std::env::set_var("API_SECRET_KEY", "s3cr3t");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_secret_key, "s3cr3t");
    }
}
