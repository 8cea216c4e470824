//! Navigator
//!
//! Host glue around a [`NavigationSession`]: configuration loading, logging
//! setup and replay of recorded detector output.

pub mod replay;

pub use replay::{replay, InputRecord, OutputRecord, ReplaySummary, FRAME_QUEUE_DEPTH};

use advisory::{AdvisoryError, SessionConfig};
use std::path::Path;
use thiserror::Error;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Navigator errors
#[derive(Error, Debug)]
pub enum NavigatorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Session error: {0}")]
    Advisory(#[from] AdvisoryError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Frame reader task failed: {0}")]
    Reader(String),
}

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "NAVASSIST";

/// Install the global tracing subscriber, writing to stderr
pub fn init_logging(verbose: bool, json: bool) -> Result<(), NavigatorError> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| NavigatorError::Logging(e.to_string()))
}

/// Load session settings from an optional file, then `NAVASSIST_*` variables.
///
/// Nested keys use a double underscore, e.g. `NAVASSIST_PROMPT__MAX_SAFE_ITEMS`.
pub fn load_config(path: Option<&Path>) -> Result<SessionConfig, NavigatorError> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        info!("Loading configuration from {}", path.display());
        builder = builder.add_source(config::File::from(path).required(true));
    }
    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let session: SessionConfig = builder.build()?.try_deserialize()?;
    session.validate()?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisory::{Locale, ThrottlePolicy};
    use std::fs;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("navassist-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_config_from_toml() {
        let path = write_temp(
            "session.toml",
            r#"
cooldown_seconds = 45
throttle_policy = "fixed_interval"
locale = "ar"

[position]
corridor_min = 0.35
corridor_max = 0.65

[prompt]
max_safe_items = 2
"#,
        );

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.cooldown_seconds, 45);
        assert_eq!(config.throttle_policy, ThrottlePolicy::FixedInterval);
        assert_eq!(config.locale, Locale::Ar);
        assert_eq!(config.position.corridor_min, 0.35);
        assert_eq!(config.prompt.max_safe_items, 2);
        assert_eq!(config.prompt.reply_word_target, 30);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_invalid_config_rejected() {
        let path = write_temp("bad.toml", "confidence_floor = 2.0\n");
        let result = load_config(Some(&path));
        assert!(matches!(result, Err(NavigatorError::Advisory(_))));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("navassist-does-not-exist.toml");
        assert!(matches!(
            load_config(Some(&path)),
            Err(NavigatorError::Config(_))
        ));
    }
}
