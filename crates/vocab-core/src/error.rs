#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Dictionary resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Dictionary is empty")]
    EmptyDictionary,

    #[error("Index {index} out of range for {len} saved words")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
