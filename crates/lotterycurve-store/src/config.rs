//! Store configuration.
//!
//! Provides [`StoreConfig`] with defaults for the data directory and log
//! level. Values can be overridden programmatically or from the
//! `LOTTERYCURVE_DATA_DIR` and `LOTTERYCURVE_LOG` environment variables.

use std::path::PathBuf;

use lotterycurve_core::constants::STATE_KEY;

/// Environment variable overriding [`StoreConfig::data_dir`].
pub const ENV_DATA_DIR: &str = "LOTTERYCURVE_DATA_DIR";

/// Environment variable overriding [`StoreConfig::log_level`].
pub const ENV_LOG: &str = "LOTTERYCURVE_LOG";

/// Where curve state lives and how loudly to log about it.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the state file.
    pub data_dir: PathBuf,
    /// Log level filter string (e.g. "info", "debug", "lotterycurve_store=trace").
    pub log_level: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lotterycurve");

        Self {
            data_dir,
            log_level: "info".to_string(),
        }
    }
}

impl StoreConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|d| !d.is_empty()) {
            cfg.data_dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup(ENV_LOG).filter(|l| !l.is_empty()) {
            cfg.log_level = level;
        }
        cfg
    }

    /// Path of the JSON state file.
    pub fn state_path(&self) -> PathBuf {
        self.data_dir.join(format!("{STATE_KEY}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_level_is_info() {
        assert_eq!(StoreConfig::default().log_level, "info");
    }

    #[test]
    fn default_data_dir_ends_with_lotterycurve() {
        let cfg = StoreConfig::default();
        assert!(
            cfg.data_dir.ends_with("lotterycurve"),
            "data_dir should end with 'lotterycurve': {:?}",
            cfg.data_dir
        );
    }

    #[test]
    fn state_path_appends_file_name() {
        let cfg = StoreConfig {
            data_dir: PathBuf::from("/tmp/lc-test"),
            ..StoreConfig::default()
        };
        assert_eq!(cfg.state_path(), PathBuf::from("/tmp/lc-test/lotterycurve.json"));
    }

    #[test]
    fn lookup_overrides() {
        let cfg = StoreConfig::from_lookup(|key| match key {
            ENV_DATA_DIR => Some("/srv/curves".to_string()),
            ENV_LOG => Some("debug".to_string()),
            _ => None,
        });
        assert_eq!(cfg.data_dir, PathBuf::from("/srv/curves"));
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn empty_lookup_values_ignored() {
        let cfg = StoreConfig::from_lookup(|_| Some(String::new()));
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.data_dir.ends_with("lotterycurve"));
    }

    #[test]
    fn config_is_clone_and_debug() {
        let cfg = StoreConfig::default();
        let debug = format!("{:?}", cfg.clone());
        assert!(debug.contains("StoreConfig"));
    }
}
