//! Upload staging directory and the stale-file sweep.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{PersistenceError, Result};

/// Largest upload accepted by default: 5 MB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Age after which a staged upload is considered leaked.
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(24 * 60 * 60);

/// Extensions accepted at the upload boundary: images, CSV, and Excel.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "csv", "xls", "xlsx",
];

/// A file written into the staging directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedUpload {
    /// Name the uploader gave the file.
    pub original_name: String,
    /// Where the bytes now live.
    pub path: PathBuf,
    pub size: u64,
}

/// Directory holding uploads until they are imported.
#[derive(Debug, Clone)]
pub struct UploadStaging {
    dir: PathBuf,
    max_bytes: u64,
}

impl UploadStaging {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes an upload under a collision-resistant name.
    ///
    /// The stored name is `<unix-millis>-<random><ext>`, keeping the
    /// original extension so format dispatch still works.
    pub fn stage(&self, original_name: &str, bytes: &[u8]) -> Result<StagedUpload> {
        let size = bytes.len() as u64;
        if size > self.max_bytes {
            return Err(PersistenceError::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }
        let extension = allowed_extension(original_name).ok_or_else(|| {
            PersistenceError::DisallowedType {
                name: original_name.to_string(),
            }
        })?;

        fs::create_dir_all(&self.dir).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: self.dir.clone(),
            source: e,
        })?;

        let suffix = Uuid::new_v4().as_u128() % 1_000_000_000;
        let file_name = format!("{}-{suffix}.{extension}", Utc::now().timestamp_millis());
        let path = self.dir.join(file_name);
        fs::write(&path, bytes).map_err(|e| PersistenceError::Io {
            operation: "write",
            path: path.clone(),
            source: e,
        })?;

        debug!(original = original_name, path = %path.display(), size, "upload staged");
        Ok(StagedUpload {
            original_name: original_name.to_string(),
            path,
            size,
        })
    }
}

/// Lower-cased extension of `name` if it is on the allow-list.
fn allowed_extension(name: &str) -> Option<String> {
    let extension = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
    ALLOWED_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(extension)
}

/// Deletes a staged upload. A file that is already gone is fine.
pub fn remove_upload(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => debug!(path = %path.display(), "upload removed"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "failed to remove upload"),
    }
}

/// Deletes regular files in `dir` last modified more than `max_age` ago.
///
/// Returns how many files were removed. Entries that cannot be inspected or
/// removed are logged and skipped.
pub fn sweep_stale(dir: &Path, max_age: Duration) -> Result<usize> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
        Err(e) => {
            return Err(PersistenceError::Io {
                operation: "list",
                path: dir.to_path_buf(),
                source: e,
            });
        }
    };

    let now = SystemTime::now();
    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        let modified = match entry.metadata().and_then(|m| {
            if m.is_file() {
                m.modified().map(Some)
            } else {
                Ok(None)
            }
        }) {
            Ok(Some(modified)) => modified,
            Ok(None) => continue,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot inspect staged file");
                continue;
            }
        };

        let age = now.duration_since(modified).unwrap_or_default();
        if age <= max_age {
            continue;
        }
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), age_secs = age.as_secs(), "stale upload deleted");
                removed += 1;
            }
            Err(e) => warn!(path = %path.display(), error = %e, "failed to delete stale upload"),
        }
    }
    Ok(removed)
}
