//! Runtime configuration for the planner binary.
//!
//! # Responsibility
//! - Name the default catalog source and logging knobs in one place.
//! - Apply environment overrides once at startup.
//!
//! # Invariants
//! - Blank override values are ignored rather than treated as paths.
//! - Nothing re-reads the environment after `from_env` returns.

use crate::logging::default_log_level;
use std::env;
use std::path::PathBuf;

/// Default catalog file consumed by menu option 1.
pub const DEFAULT_CATALOG_FILE: &str = "CS 300 ABCU_Advising_Program_Input.csv";

/// Environment override for the catalog file path.
pub const CATALOG_FILE_ENV: &str = "ADVISOR_CATALOG_FILE";
/// Environment override for the rolling-log directory (absolute path).
pub const LOG_DIR_ENV: &str = "ADVISOR_LOG_DIR";
/// Environment override for the log level.
pub const LOG_LEVEL_ENV: &str = "ADVISOR_LOG_LEVEL";

/// Startup configuration assembled by the binary and passed down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog source consumed by menu option 1.
    pub catalog_path: PathBuf,
    /// Rolling-log directory; `None` leaves logging uninitialized.
    pub log_dir: Option<PathBuf>,
    /// Log level passed to `init_logging`.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_FILE),
            log_dir: None,
            log_level: default_log_level().to_string(),
        }
    }
}

impl AppConfig {
    /// Builds the config from defaults plus environment overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = non_blank(env::var(CATALOG_FILE_ENV).ok()) {
            config.catalog_path = PathBuf::from(path);
        }
        if let Some(dir) = non_blank(env::var(LOG_DIR_ENV).ok()) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(level) = non_blank(env::var(LOG_LEVEL_ENV).ok()) {
            config.log_level = level;
        }
        config
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{non_blank, AppConfig, DEFAULT_CATALOG_FILE};
    use std::path::PathBuf;

    #[test]
    fn default_points_at_the_bundled_catalog_name() {
        let config = AppConfig::default();
        assert_eq!(config.catalog_path, PathBuf::from(DEFAULT_CATALOG_FILE));
        assert_eq!(config.log_dir, None);
        assert!(!config.log_level.is_empty());
    }

    #[test]
    fn non_blank_filters_whitespace_only_values() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(
            non_blank(Some(" value ".to_string())),
            Some("value".to_string())
        );
    }
}
