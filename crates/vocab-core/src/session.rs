use std::collections::BTreeSet;

use rand::Rng;
use vocab_types::{DictionaryEntry, Word};

use crate::dictionary::Dictionary;
use crate::error::DictionaryError;
use crate::saved;
use crate::source::DictionarySource;

/// State of one application session.
///
/// Every method that fails leaves the session exactly as it was.
#[derive(Debug, Default)]
pub struct Session {
    dictionary: Option<Dictionary>,
    current: Option<Word>,
    saved: Vec<DictionaryEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary: Some(dictionary),
            ..Self::default()
        }
    }

    pub fn dictionary(&self) -> Option<&Dictionary> {
        self.dictionary.as_ref()
    }

    /// Word currently on screen
    pub fn current(&self) -> Option<&Word> {
        self.current.as_ref()
    }

    pub fn saved(&self) -> &[DictionaryEntry] {
        &self.saved
    }

    /// Replace the dictionary with a fresh load, returning its size
    pub fn load_from(&mut self, source: &dyn DictionarySource) -> Result<usize, DictionaryError> {
        match Dictionary::load(source) {
            Ok(dict) => {
                let count = dict.len();
                self.dictionary = Some(dict);
                Ok(count)
            }
            Err(e) => {
                tracing::warn!("Keeping previous dictionary, load failed: {e}");
                Err(e)
            }
        }
    }

    pub fn next_word(&mut self) -> Result<&Word, DictionaryError> {
        self.next_word_with(&mut rand::thread_rng())
    }

    /// Pick a new current word. No dictionary counts as an empty one.
    pub fn next_word_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Word, DictionaryError> {
        let picked = match &self.dictionary {
            Some(dict) => dict.pick_random_with(rng),
            None => Err(DictionaryError::EmptyDictionary),
        };

        match picked {
            Ok(word) => Ok(self.current.insert(word)),
            Err(e) => {
                tracing::warn!("Keeping previous word: {e}");
                Err(e)
            }
        }
    }

    /// Save the current word. `None` if nothing is shown yet.
    pub fn save_current(&mut self) -> Option<&DictionaryEntry> {
        let word = self.current.clone()?;
        self.saved = saved::save(&self.saved, word);
        let entry = self.saved.last();
        if let Some(entry) = entry {
            tracing::info!("Saved '{}' ({})", entry.term(), entry.id());
        }
        entry
    }

    /// Remove saved entries by offset, returning how many were removed
    pub fn delete_saved(&mut self, indices: &BTreeSet<usize>) -> Result<usize, DictionaryError> {
        let next = saved::delete_at(&self.saved, indices).inspect_err(|e| {
            tracing::warn!("Saved words unchanged: {e}");
        })?;
        let removed = self.saved.len() - next.len();
        self.saved = next;
        Ok(removed)
    }

    /// Saved entry at `index`, for its detail page
    pub fn saved_entry(&self, index: usize) -> Result<&DictionaryEntry, DictionaryError> {
        self.saved.get(index).ok_or(DictionaryError::IndexOutOfRange {
            index,
            len: self.saved.len(),
        })
    }
}
