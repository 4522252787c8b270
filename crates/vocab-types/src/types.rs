use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A term paired with its definition, as shown on screen.
///
/// Not identified: a new one is built on every pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub term: String,
    pub definition: String,
}

impl Word {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// A word the user saved. Gets its id once, at save time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    id: Uuid,
    term: String,
    definition: String,
}

impl DictionaryEntry {
    pub fn new(word: Word) -> Self {
        Self {
            id: Uuid::new_v4(),
            term: word.term,
            definition: word.definition,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// The term/definition pair this entry was saved from
    pub fn word(&self) -> Word {
        Word::new(self.term.clone(), self.definition.clone())
    }
}

impl From<Word> for DictionaryEntry {
    fn from(word: Word) -> Self {
        Self::new(word)
    }
}
