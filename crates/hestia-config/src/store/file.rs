//! One JSON file per namespace.
//!
//! Writes are atomic (write to `.tmp`, then rename) so a crash mid-write
//! never leaves a truncated payload behind.

use std::path::{Path, PathBuf};

use hestia_common::store::PersistenceGateway;
use hestia_common::StoreError;
use tracing::{debug, warn};

/// [`PersistenceGateway`] storing `<namespace>.json` files in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at `root`. The directory is created on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `namespace`.
    pub fn path_for(&self, namespace: &str) -> PathBuf {
        self.root.join(format!("{namespace}.json"))
    }
}

impl PersistenceGateway for JsonFileStore {
    fn load_raw(&self, namespace: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(namespace);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StoreError::Read {
                namespace: namespace.to_string(),
                reason: format!("{}: {e}", path.display()),
            })
    }

    fn save_raw(&mut self, namespace: &str, payload: &str) -> Result<(), StoreError> {
        let write_err = |e: std::io::Error, path: &Path| StoreError::Write {
            namespace: namespace.to_string(),
            reason: format!("{}: {e}", path.display()),
        };

        std::fs::create_dir_all(&self.root).map_err(|e| write_err(e, &self.root))?;

        let path = self.path_for(namespace);
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, payload).map_err(|e| write_err(e, &tmp_path))?;

        if let Err(e) = std::fs::rename(&tmp_path, &path) {
            // Rename failed: fall back to a direct write.
            warn!("atomic rename failed ({e}), falling back to direct write");
            std::fs::write(&path, payload).map_err(|e| write_err(e, &path))?;
            let _ = std::fs::remove_file(&tmp_path);
        }

        debug!(namespace, path = %path.display(), "store written");
        Ok(())
    }
}
