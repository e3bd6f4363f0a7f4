//! Error reporting to sentry, enabled when a dsn is configured
use sentry;
use sentry::internals::ClientInitGuard;

use config::SentryConfig;

/// Keep the returned guard alive for the lifetime of the app
pub fn init(sentry_config: Option<&SentryConfig>) -> Option<ClientInitGuard> {
    sentry_config.map(|config_sentry| {
        info!("Initialization of sentry support");
        let guard = sentry::init(config_sentry.dsn.as_str());
        sentry::integrations::panic::register_panic_handler();
        guard
    })
}
