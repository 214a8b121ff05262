//! JSON-lines question store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use qbank_model::QuestionRecord;
use tracing::{debug, info};

use super::QuestionStore;
use crate::error::{PersistenceError, Result};
use crate::io::write_atomic;
use crate::validate::validate_batch;

/// File-backed store holding one JSON record per line.
///
/// Each insert rewrites the file through a temp file and rename, so readers
/// see either the old contents or the new contents.
#[derive(Debug, Clone)]
pub struct JsonlQuestionStore {
    path: PathBuf,
}

impl JsonlQuestionStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every stored record. A missing file is an empty store.
    pub fn load_all(&self) -> Result<Vec<QuestionRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(PersistenceError::Io {
                    operation: "read",
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(n, line)| {
                serde_json::from_str(line).map_err(|source| PersistenceError::Corrupt {
                    path: self.path.clone(),
                    line: n + 1,
                    source,
                })
            })
            .collect()
    }

    fn existing_bytes(&self) -> Result<Vec<u8>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(PersistenceError::Io {
                operation: "read",
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

impl QuestionStore for JsonlQuestionStore {
    fn insert_many(&mut self, records: &[QuestionRecord]) -> Result<usize> {
        validate_batch(records)?;
        if records.is_empty() {
            return Ok(0);
        }

        let mut bytes = self.existing_bytes()?;
        if bytes.last().is_some_and(|b| *b != b'\n') {
            bytes.push(b'\n');
        }
        for record in records {
            let line = serde_json::to_vec(record)
                .map_err(|source| PersistenceError::Serialization { source })?;
            bytes.extend_from_slice(&line);
            bytes.push(b'\n');
        }
        debug!(path = %self.path.display(), bytes = bytes.len(), "writing store");

        write_atomic(&self.path, &bytes)?;
        info!(
            path = %self.path.display(),
            inserted = records.len(),
            "questions inserted"
        );
        Ok(records.len())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.load_all()?.len())
    }
}
