use serde::{Deserialize, Serialize};

fn default_level() -> String {
    "info".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl LogConfig {
    pub fn new<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let level = var("VOCAB_LOG_LEVEL").unwrap_or_else(default_level);

        let json = var("VOCAB_LOG_JSON")
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Self { level, json }
    }
}
