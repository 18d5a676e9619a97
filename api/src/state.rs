use std::sync::Arc;
use std::time::Instant;

use shared::i18n::Translator;

use crate::config::Config;

/// Application state shared across handlers. The translator is resolved once
/// from the configured locale and never mutated afterward.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<Translator>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let translator = Translator::new(config.lang);
        Self {
            config: Arc::new(config),
            translator: Arc::new(translator),
            started_at: Instant::now(),
        }
    }
}
