use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::error::TelemetryError;

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. A `format` of
/// "pretty" selects multi-line output; anything else uses the default
/// single-line formatter. Fails if a global subscriber is already set.
pub fn init_tracing(settings: &LoggingSettings) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)?,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let installed = if settings.format == "pretty" {
        subscriber.pretty().try_init()
    } else {
        subscriber.try_init()
    };

    installed.map_err(|e| TelemetryError::Install(e.to_string()))
}
