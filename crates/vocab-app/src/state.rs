use vocab_config::Config;
use vocab_core::{BundledSource, DictionaryError, DictionarySource, FileSource, Session};

pub struct AppState {
    pub config: Config,
    pub session: Session,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            session: Session::new(),
        }
    }

    /// Configured dictionary file, or the bundled one
    pub fn dictionary_source(&self) -> Box<dyn DictionarySource> {
        match &self.config.dictionary.path {
            Some(path) => Box::new(FileSource::new(path)),
            None => Box::new(BundledSource),
        }
    }

    pub fn load_dictionary(&mut self) -> Result<usize, DictionaryError> {
        let source = self.dictionary_source();
        self.session.load_from(source.as_ref())
    }
}
