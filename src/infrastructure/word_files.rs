// src/infrastructure/word_files.rs
use crate::application::WordListRepository;
use crate::domain::{DomainError, Level, VocabEntry};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Word lists stored as one JSON array per level: `<data_dir>/a1.json`, ...
#[derive(Debug, Clone)]
pub struct JsonWordListRepository {
    data_dir: PathBuf,
}

impl JsonWordListRepository {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, level: Level) -> PathBuf {
        self.data_dir.join(format!("{}.json", level.file_stem()))
    }
}

impl WordListRepository for JsonWordListRepository {
    #[instrument(level = "debug", skip(self))]
    fn load_words(&self, level: Level) -> Result<Vec<VocabEntry>, DomainError> {
        let path = self.path_for(level);

        let content = fs::read_to_string(&path).map_err(|e| DomainError::WordListUnavailable {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let words: Vec<VocabEntry> =
            serde_json::from_str(&content).map_err(|e| DomainError::WordListUnavailable {
                path: path.clone(),
                reason: format!("invalid word list: {}", e),
            })?;

        debug!(?path, count = words.len(), "Loaded word list");
        Ok(words)
    }
}
