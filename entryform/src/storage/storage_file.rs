//! File-based implementation of the RecordStore trait.
//!
//! Each slot is one JSON file `<base_path>/<slot>.json`. Writes go to a temporary file in
//! the same directory which is then renamed over the slot file.

use super::types::RecordStore;
use crate::error::{EntryFormError, EntryFormResult};
use crate::utils::fs::sanitize_filename;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileRecordStore {
    /// Directory holding the slot files
    base_path: PathBuf,
}

impl FileRecordStore {
    /// Create a store rooted at `base_path`, creating the directory if needed
    pub fn new(base_path: PathBuf) -> EntryFormResult<Self> {
        if !base_path.exists() {
            std::fs::create_dir_all(&base_path).map_err(|e| {
                EntryFormError::IoError(format!(
                    "Failed to create storage directory {}: {}",
                    base_path.display(),
                    e
                ))
            })?;
        }
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the file backing `slot`
    pub fn slot_path(&self, slot: &str) -> EntryFormResult<PathBuf> {
        let name = sanitize_filename(slot);
        if name.is_empty() {
            return Err(EntryFormError::InvalidInput(format!(
                "slot name '{}' has no usable characters",
                slot
            )));
        }
        Ok(self.base_path.join(format!("{}.json", name)))
    }
}

impl RecordStore for FileRecordStore {
    fn load_slot(&self, slot: &str) -> EntryFormResult<Option<String>> {
        let path = self.slot_path(slot)?;
        if !path.exists() {
            debug!(path = %path.display(), "slot file does not exist yet");
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path).map_err(|e| {
            EntryFormError::IoError(format!("Failed to read slot file {}: {}", path.display(), e))
        })?;
        Ok(Some(content))
    }

    fn save_slot(&self, slot: &str, payload: &str) -> EntryFormResult<()> {
        let path = self.slot_path(slot)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&self.base_path).map_err(|e| {
            EntryFormError::IoError(format!(
                "Failed to create temporary file in {}: {}",
                self.base_path.display(),
                e
            ))
        })?;
        tmp.write_all(payload.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&path).map_err(|e| {
            EntryFormError::IoError(format!(
                "Failed to write slot file {}: {}",
                path.display(),
                e.error
            ))
        })?;
        debug!(path = %path.display(), bytes = payload.len(), "slot written");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file:{}", self.base_path.display())
    }
}
