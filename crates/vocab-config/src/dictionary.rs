use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Dictionary file to use instead of the bundled one
    pub path: Option<PathBuf>,
}

impl DictionaryConfig {
    pub fn new<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            path: var("VOCAB_DICTIONARY_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }
}
