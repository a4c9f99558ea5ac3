use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Crates whose events follow `PREQUAL_LOG_LEVEL`; everything else stays at `warn`.
const SERVICE_TARGETS: [&str; 2] = ["prequal", "prequal_api"];

#[derive(Debug)]
pub enum TelemetryError {
    LogLevel { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::LogLevel { value, .. } => {
                write!(f, "PREQUAL_LOG_LEVEL is not a valid log filter ({:?})", value)
            }
            TelemetryError::Subscriber(err) => {
                write!(f, "failed to install the pre-qualification log subscriber: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::LogLevel { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `PREQUAL_LOG_LEVEL`.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => service_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

fn service_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    let directives = service_directives(level);
    EnvFilter::try_new(&directives).map_err(|source| TelemetryError::LogLevel {
        value: level.to_string(),
        source,
    })
}

/// A bare level such as `debug` applies to the service crates only; full directive strings
/// are passed through untouched.
fn service_directives(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }

    let mut directives = vec!["warn".to_string()];
    directives.extend(SERVICE_TARGETS.iter().map(|target| format!("{target}={level}")));
    directives.join(",")
}
