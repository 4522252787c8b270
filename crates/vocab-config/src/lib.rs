use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::log::LogConfig;

pub mod dictionary;
pub mod log;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to open config {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults with `VOCAB_*` environment variables applied
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            dictionary: DictionaryConfig::new(&var),
            log: LogConfig::new(&var),
        }
    }

    /// Load a JSON config file. Missing sections fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Open {
            path: path.display().to_string(),
            source,
        })?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_vars() {
        let config = Config::from_vars(vars(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.log.level, "info");
        assert!(config.dictionary.path.is_none());
    }

    #[test]
    fn test_vars_override() {
        let config = Config::from_vars(vars(&[
            ("VOCAB_DICTIONARY_PATH", "/tmp/words.json"),
            ("VOCAB_LOG_LEVEL", "debug"),
            ("VOCAB_LOG_JSON", "true"),
        ]));

        assert_eq!(config.dictionary.path, Some(PathBuf::from("/tmp/words.json")));
        assert_eq!(config.log.level, "debug");
        assert!(config.log.json);
    }

    #[test]
    fn test_bad_bool_falls_back() {
        let config = Config::from_vars(vars(&[("VOCAB_LOG_JSON", "yes please")]));
        assert!(!config.log.json);
    }

    #[test]
    fn test_from_file_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"log": {"json": true}}"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(config.log.json);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.dictionary, DictionaryConfig::default());
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            Config::from_file(&missing),
            Err(ConfigError::Open { .. })
        ));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "[1, 2]").unwrap();
        assert!(matches!(Config::from_file(&bad), Err(ConfigError::Parse(_))));
    }
}
