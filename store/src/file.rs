//! JSON-file identity backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{IdentityStore, StoreError, IDENTITY_KEY};

/// Stores the identity record as `<data_dir>/user.json`.
#[derive(Clone, Debug)]
pub struct FileIdentityStore {
    path: PathBuf,
}

impl FileIdentityStore {
    /// Open (without touching disk) the identity slot under `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{IDENTITY_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IdentityStore for FileIdentityStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, record: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write-then-rename: readers never observe a partial record.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, record)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "identity record saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
