pub mod dictionary;
pub mod error;
pub mod saved;
pub mod session;
pub mod source;

pub use dictionary::Dictionary;
pub use error::DictionaryError;
pub use session::Session;
pub use source::{BundledSource, DictionarySource, FileSource};
