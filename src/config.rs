//! Config module contains the top-level config for the app.
use std::env;

use config_crate::{Config as RawConfig, ConfigError, Environment, File};

use models::Language;

/// Basic settings - HTTP binding address and database DSN
#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub host: String,
    pub port: String,
    pub database: String,
    pub thread_count: usize,
}

/// Catalogue defaults applied when a request does not carry its own
#[derive(Debug, Deserialize, Clone)]
pub struct Catalogue {
    pub default_lang: Language,
    pub default_city: String,
    pub products_limit: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SentryConfig {
    pub dsn: String,
}

/// Service configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: Server,
    pub catalogue: Catalogue,
    pub sentry: Option<SentryConfig>,
}

/// Creates new app config struct
/// #Examples
/// ```
/// use catalogue_lib::config::*;
///
/// let config = Config::new();
/// ```
impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        let mut s = RawConfig::new();

        s.merge(File::with_name("config/base"))?;

        // Note that this file is _optional_
        let env = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        s.merge(File::with_name(&format!("config/{}", env)).required(false))?;

        // Add in settings from the environment (with a prefix of STQ_CATALOGUE)
        s.merge(Environment::with_prefix("STQ_CATALOGUE").separator("__"))?;

        s.try_into()
    }
}
