use crate::error::{LedgerError, Result};
use log::{error, LevelFilter};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::str::FromStr;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

static DEFAULT_LOG_LEVEL: &str = "info";

const LOG_LEVEL_KEY: &str = "LOG_LEVEL";
const MINING_TIMEOUT_SECS_KEY: &str = "MINING_TIMEOUT_SECS";

/// Environment variables are the setting keys with this prefix
const ENV_PREFIX: &str = "LEDGER_";

/// Shape of the optional TOML settings file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    log_level: Option<String>,
    mining_timeout_secs: Option<u64>,
}

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Defaults overridden by `LEDGER_*` environment variables
    pub fn new() -> Config {
        Self::with_overrides(env::vars())
    }

    /// Defaults overridden by the given `LEDGER_*` variables
    pub fn with_overrides<I>(vars: I) -> Config
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut map = HashMap::new();
        map.insert(String::from(LOG_LEVEL_KEY), String::from(DEFAULT_LOG_LEVEL));

        for (name, value) in vars {
            if let Some(key) = name.strip_prefix(ENV_PREFIX) {
                if key == LOG_LEVEL_KEY || key == MINING_TIMEOUT_SECS_KEY {
                    map.insert(key.to_string(), value);
                }
            }
        }

        Config {
            inner: RwLock::new(map),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.inner.read().unwrap_or_else(|poisoned| {
            error!("Config lock was poisoned; using the last stored settings");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.inner.write().unwrap_or_else(|poisoned| {
            error!("Config lock was poisoned; using the last stored settings");
            poisoned.into_inner()
        })
    }

    /// Merge settings from a TOML file; keys present in the file win
    pub fn load_file(&self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path)?;
        self.load_str(&text)
    }

    pub fn load_str(&self, text: &str) -> Result<()> {
        let settings: FileSettings = toml::from_str(text)?;
        if let Some(level) = settings.log_level {
            self.set_log_level(level);
        }
        if let Some(secs) = settings.mining_timeout_secs {
            self.set_mining_timeout_secs(secs);
        }
        Ok(())
    }

    pub fn get_log_level(&self) -> Result<LevelFilter> {
        let inner = self.read();
        let raw = inner
            .get(LOG_LEVEL_KEY)
            .map(String::as_str)
            .unwrap_or(DEFAULT_LOG_LEVEL);
        LevelFilter::from_str(raw)
            .map_err(|_| LedgerError::Config(format!("Invalid log level: {raw}")))
    }

    /// The configured level, or `info` together with the reason the setting was rejected
    pub fn get_log_level_or_default(&self) -> (LevelFilter, Option<LedgerError>) {
        match self.get_log_level() {
            Ok(level) => (level, None),
            Err(e) => (LevelFilter::Info, Some(e)),
        }
    }

    pub fn set_log_level(&self, level: String) {
        self.write().insert(String::from(LOG_LEVEL_KEY), level);
    }

    /// Bound on a single puzzle search; `None` means search without limit
    pub fn get_mining_timeout(&self) -> Result<Option<Duration>> {
        let inner = self.read();
        match inner.get(MINING_TIMEOUT_SECS_KEY) {
            None => Ok(None),
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    LedgerError::Config(format!("Invalid mining timeout '{raw}': {e}"))
                })?;
                if secs == 0 {
                    Ok(None)
                } else {
                    Ok(Some(Duration::from_secs(secs)))
                }
            }
        }
    }

    pub fn set_mining_timeout_secs(&self, secs: u64) {
        self.write()
            .insert(String::from(MINING_TIMEOUT_SECS_KEY), secs.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::with_overrides(Vec::new());
        assert_eq!(config.get_log_level().unwrap(), LevelFilter::Info);
        assert_eq!(config.get_mining_timeout().unwrap(), None);
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::with_overrides(vars(&[
            ("LEDGER_LOG_LEVEL", "debug"),
            ("LEDGER_MINING_TIMEOUT_SECS", "30"),
            ("LOG_LEVEL", "error"),
            ("LEDGER_UNKNOWN", "ignored"),
        ]));

        assert_eq!(config.get_log_level().unwrap(), LevelFilter::Debug);
        assert_eq!(
            config.get_mining_timeout().unwrap(),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_zero_timeout_means_unbounded() {
        let config = Config::with_overrides(vars(&[("LEDGER_MINING_TIMEOUT_SECS", "0")]));
        assert_eq!(config.get_mining_timeout().unwrap(), None);
    }

    #[test]
    fn test_malformed_values_are_config_errors() {
        let config = Config::with_overrides(vars(&[
            ("LEDGER_LOG_LEVEL", "chatty"),
            ("LEDGER_MINING_TIMEOUT_SECS", "soon"),
        ]));

        assert!(matches!(config.get_log_level(), Err(LedgerError::Config(_))));
        assert!(matches!(
            config.get_mining_timeout(),
            Err(LedgerError::Config(_))
        ));
    }

    #[test]
    fn test_malformed_log_level_falls_back_with_reason() {
        let config = Config::with_overrides(vars(&[("LEDGER_LOG_LEVEL", "chatty")]));
        let (level, problem) = config.get_log_level_or_default();

        assert_eq!(level, LevelFilter::Info);
        assert_eq!(
            problem,
            Some(LedgerError::Config("Invalid log level: chatty".to_string()))
        );

        config.set_log_level("trace".to_string());
        assert_eq!(config.get_log_level_or_default(), (LevelFilter::Trace, None));
    }

    #[test]
    fn test_load_file_overrides_environment() {
        let config = Config::with_overrides(vars(&[("LEDGER_LOG_LEVEL", "debug")]));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"warn\"").unwrap();
        writeln!(file, "mining_timeout_secs = 5").unwrap();

        config.load_file(file.path()).unwrap();
        assert_eq!(config.get_log_level().unwrap(), LevelFilter::Warn);
        assert_eq!(
            config.get_mining_timeout().unwrap(),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn test_load_str_rejects_unknown_keys() {
        let config = Config::with_overrides(Vec::new());
        let result = config.load_str("difficulty = 5");
        assert!(matches!(result, Err(LedgerError::Config(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_overrides(Vec::new());
        let result = config.load_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(LedgerError::Io(_))));
    }
}
