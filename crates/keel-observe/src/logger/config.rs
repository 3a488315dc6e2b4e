use std::io::IsTerminal;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::logger::{error::LoggerError, format::LoggerFormat};

/// Target prefix shared by every event the keel crates emit.
pub const KEEL_TARGET: &str = "keel_core";

/// Settings for [`logger_init`](crate::logger_init).
///
/// Deserializes from a partial object; missing fields take their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// `EnvFilter` directives for the application, e.g. `"info"` or `"warn,my_app=debug"`.
    pub level: String,
    /// Level applied to [`KEEL_TARGET`] on top of `level`.
    ///
    /// Defaults to `warn`: deprecation warnings from the query layer stay visible even under a
    /// quieter application level, while keel's debug events stay hidden under a louder one.
    pub keel_level: String,
    pub with_targets: bool,
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::Text,
            level: "info".to_string(),
            keel_level: "warn".to_string(),
            with_targets: true,
            use_color: std::io::stdout().is_terminal(),
        }
    }
}

impl LoggerConfig {
    /// Full directive string: the application's directives followed by the keel override.
    pub fn directives(&self) -> String {
        let level = self.level.trim().trim_end_matches(',');
        if level.is_empty() {
            format!("{KEEL_TARGET}={}", self.keel_level.trim())
        } else {
            format!("{level},{KEEL_TARGET}={}", self.keel_level.trim())
        }
    }

    pub fn filter(&self) -> Result<EnvFilter, LoggerError> {
        let directives = self.directives();
        EnvFilter::try_new(&directives)
            .map_err(|source| LoggerError::InvalidFilter { directives, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = LoggerConfig::default();
        assert_eq!(cfg.format, LoggerFormat::Text);
        assert_eq!(cfg.level, "info");
        assert_eq!(cfg.keel_level, "warn");
        assert!(cfg.with_targets);
    }

    #[test]
    fn directives_append_keel_override() {
        let cfg = LoggerConfig {
            level: "error,my_app=debug".into(),
            ..LoggerConfig::default()
        };
        assert_eq!(cfg.directives(), "error,my_app=debug,keel_core=warn");
        assert!(cfg.filter().is_ok());

        let cfg = LoggerConfig {
            level: " ".into(),
            keel_level: "debug".into(),
            ..LoggerConfig::default()
        };
        assert_eq!(cfg.directives(), "keel_core=debug");
    }

    #[test]
    fn invalid_keel_level_is_rejected() {
        let cfg = LoggerConfig {
            keel_level: "loudest".into(),
            ..LoggerConfig::default()
        };
        let err = cfg.filter().unwrap_err();
        assert!(
            matches!(err, LoggerError::InvalidFilter { ref directives, .. } if directives == "info,keel_core=loudest")
        );
    }

    #[test]
    fn deserialize_partial() {
        let cfg: LoggerConfig =
            serde_json::from_str(r#"{"format":"json","level":"my_app=debug"}"#).unwrap();
        assert_eq!(cfg.format, LoggerFormat::Json);
        assert_eq!(cfg.level, "my_app=debug");
        assert_eq!(cfg.keel_level, "warn");
        assert!(cfg.with_targets);
    }

    #[test]
    fn deserialize_rejects_unknown_format() {
        assert!(serde_json::from_str::<LoggerConfig>(r#"{"format":"xml"}"#).is_err());
    }
}
