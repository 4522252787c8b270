use std::collections::HashMap;

use rand::Rng;
use rand::seq::IteratorRandom;
use vocab_types::Word;

use crate::error::DictionaryError;
use crate::source::DictionarySource;

/// Term to definition mapping. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Parse a flat JSON object of string keys to string values
    pub fn from_json(json_str: &str) -> Result<Self, DictionaryError> {
        Self::from_slice(json_str.as_bytes())
    }

    /// Same as [`Dictionary::from_json`] over raw bytes. Bad UTF-8 is a parse error.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DictionaryError> {
        let entries: HashMap<String, String> = serde_json::from_slice(bytes)?;
        Ok(Self { entries })
    }

    /// Read and parse a dictionary from `source`
    pub fn load(source: &dyn DictionarySource) -> Result<Self, DictionaryError> {
        tracing::info!("Loading dictionary from {}", source.describe());
        let bytes = source.read()?;
        let dict = Self::from_slice(&bytes)?;
        tracing::info!("Loaded {} dictionary entries", dict.len());
        Ok(dict)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// All terms, in no particular order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Pick one entry uniformly at random
    pub fn pick_random(&self) -> Result<Word, DictionaryError> {
        self.pick_random_with(&mut rand::thread_rng())
    }

    /// Same as [`Dictionary::pick_random`] with a caller supplied generator
    pub fn pick_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, DictionaryError> {
        // Key and value come from the same map slot
        let (term, definition) = self
            .entries
            .iter()
            .choose(rng)
            .ok_or(DictionaryError::EmptyDictionary)?;

        tracing::debug!("Term: {term}");
        tracing::debug!("Definition: {definition}");

        Ok(Word::new(term.clone(), definition.clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::source::{BundledSource, FileSource};

    const PAIR_JSON: &str =
        r#"{"ephemeral": "lasting a short time", "lucid": "clear, easily understood"}"#;

    #[test]
    fn test_pick_returns_matching_pair() {
        let dict = Dictionary::from_json(PAIR_JSON).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            let word = dict.pick_random_with(&mut rng).unwrap();
            assert_eq!(dict.get(&word.term), Some(word.definition.as_str()));
            seen.insert(word.term);
        }

        // Both keys reachable
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_pick_never_crosses_pairs() {
        let dict = Dictionary::from_json(PAIR_JSON).unwrap();
        let allowed = [
            Word::new("ephemeral", "lasting a short time"),
            Word::new("lucid", "clear, easily understood"),
        ];

        for _ in 0..100 {
            let word = dict.pick_random().unwrap();
            assert!(allowed.contains(&word), "unexpected pair {word:?}");
        }
    }

    #[test]
    fn test_pick_from_empty_fails() {
        let dict = Dictionary::from_json("{}").unwrap();
        assert!(dict.is_empty());
        assert!(matches!(dict.pick_random(), Err(DictionaryError::EmptyDictionary)));
    }

    #[test]
    fn test_from_json_rejects_array() {
        let err = Dictionary::from_json(r#"["lucid", "clear"]"#).unwrap_err();
        assert!(matches!(err, DictionaryError::ParseError(_)));
    }

    #[test]
    fn test_from_json_rejects_non_string_values() {
        let err = Dictionary::from_json(r#"{"lucid": 3}"#).unwrap_err();
        assert!(matches!(err, DictionaryError::ParseError(_)));

        let err = Dictionary::from_json(r#"{"lucid": {"text": "clear"}}"#).unwrap_err();
        assert!(matches!(err, DictionaryError::ParseError(_)));
    }

    #[test]
    fn test_load_bundled() {
        let dict = Dictionary::load(&BundledSource).unwrap();
        assert!(!dict.is_empty());
        assert_eq!(dict.get("lucid"), Some("clear, easily understood"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.json"));
        assert!(matches!(
            Dictionary::load(&source),
            Err(DictionaryError::ResourceNotFound(_))
        ));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = Dictionary::load(&FileSource::new(path)).unwrap_err();
        assert!(matches!(err, DictionaryError::ParseError(_)));
    }

    #[test]
    fn test_load_invalid_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.json");
        std::fs::write(&path, b"{\"lucid\": \"\xff\xfe\"}").unwrap();

        let err = Dictionary::load(&FileSource::new(path)).unwrap_err();
        assert!(matches!(err, DictionaryError::ParseError(_)), "got {err:?}");
    }

    #[test]
    fn test_terms_and_contains() {
        let dict = Dictionary::from_json(PAIR_JSON).unwrap();
        let mut terms: Vec<&str> = dict.terms().collect();
        terms.sort_unstable();

        assert_eq!(terms, ["ephemeral", "lucid"]);
        assert!(dict.contains("lucid"));
        assert!(!dict.contains("laconic"));
        assert_eq!(dict.len(), 2);
    }
}
