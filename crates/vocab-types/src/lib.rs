mod event;
mod types;

pub use event::{AppEvent, ParseEventError};
pub use types::{DictionaryEntry, Word};
