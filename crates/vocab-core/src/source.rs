use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::DictionaryError;

/// Dictionary shipped inside the binary
const BUNDLED_DICTIONARY: &[u8] = include_bytes!("../data/dictionary.json");

/// Where dictionary JSON comes from
pub trait DictionarySource {
    /// Read the raw JSON bytes
    fn read(&self) -> Result<Vec<u8>, DictionaryError>;

    /// Human readable origin, used in logs
    fn describe(&self) -> String;
}

/// The `dictionary.json` bundled with the application
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl DictionarySource for BundledSource {
    fn read(&self) -> Result<Vec<u8>, DictionaryError> {
        Ok(BUNDLED_DICTIONARY.to_vec())
    }

    fn describe(&self) -> String {
        "bundled dictionary.json".to_string()
    }
}

/// A dictionary file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DictionarySource for FileSource {
    fn read(&self) -> Result<Vec<u8>, DictionaryError> {
        // Raw bytes, UTF-8 is checked by the JSON parser
        std::fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DictionaryError::ResourceNotFound(self.path.display().to_string()),
            _ => DictionaryError::IoError(e),
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
