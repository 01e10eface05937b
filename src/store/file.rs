use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, Result};
use crate::models::Inventory;

/// What to do when the inventory file exists but cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptionPolicy {
    /// Treat the file as empty; the next write overwrites it.
    Discard,
    /// Copy the file to `<file>.corrupt`, then treat it as empty.
    #[default]
    Backup,
    /// Refuse to load.
    Fail,
}

/// File-backed inventory.
///
/// Holds no data between calls: every read parses the whole file and every
/// mutation rewrites it. There is no locking, so two writers racing on the
/// same file lose one side's changes.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    path: PathBuf,
    on_corrupt: CorruptionPolicy,
}

impl InventoryStore {
    /// Store backed by the file at `path`. The file need not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            on_corrupt: CorruptionPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, on_corrupt: CorruptionPolicy) -> Self {
        self.on_corrupt = on_corrupt;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection.
    ///
    /// A missing file is created empty. An unparseable file, or one holding
    /// product ID 0, is handled per the store's [`CorruptionPolicy`].
    pub fn load_all(&self) -> Result<Inventory> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "initializing empty inventory");
                let empty = Inventory::new();
                self.save_all(&empty)?;
                return Ok(empty);
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Inventory>(&content) {
            Ok(inventory) if inventory.contains_key(&0) => {
                self.recover(&content, "product IDs must be positive, found 0")
            }
            Ok(inventory) => {
                tracing::debug!(products = inventory.len(), "loaded inventory");
                Ok(inventory)
            }
            Err(e) => self.recover(&content, &e.to_string()),
        }
    }

    fn recover(&self, content: &str, err: &str) -> Result<Inventory> {
        match self.on_corrupt {
            CorruptionPolicy::Fail => Err(InventoryError::StorageCorruption {
                path: self.path.display().to_string(),
                detail: err.to_string(),
            }),
            CorruptionPolicy::Discard => {
                tracing::warn!(path = %self.path.display(), error = %err, "discarding unreadable inventory");
                Ok(Inventory::new())
            }
            CorruptionPolicy::Backup => {
                let Some(backup) = self.backup_corrupt(content)? else {
                    tracing::debug!(path = %self.path.display(), "unreadable inventory already backed up");
                    return Ok(Inventory::new());
                };
                tracing::warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    error = %err,
                    "inventory unreadable, starting empty"
                );
                Ok(Inventory::new())
            }
        }
    }

    /// Copy unreadable `content` aside, returning the backup path.
    ///
    /// The first backup goes to `<file>.corrupt`. Content already saved there
    /// is not copied again; different content goes to a timestamped
    /// `<file>.corrupt-YYYYMMDDHHMMSS` so earlier backups survive.
    fn backup_corrupt(&self, content: &str) -> Result<Option<PathBuf>> {
        let primary = sibling(&self.path, ".corrupt");
        let backup = match std::fs::read_to_string(&primary) {
            Ok(existing) if existing == content => return Ok(None),
            Ok(_) => {
                let stamp = Local::now().format("%Y%m%d%H%M%S");
                let stamped = sibling(&self.path, &format!(".corrupt-{stamp}"));
                if std::fs::read_to_string(&stamped).is_ok_and(|existing| existing == content) {
                    return Ok(None);
                }
                stamped
            }
            Err(e) if e.kind() == ErrorKind::NotFound => primary,
            Err(e) => return Err(e.into()),
        };
        std::fs::write(&backup, content)?;
        Ok(Some(backup))
    }

    /// Overwrite the file with the full collection.
    ///
    /// The document is written to a temporary sibling and renamed into place.
    pub fn save_all(&self, inventory: &Inventory) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(inventory)?;
        let tmp = sibling(&self.path, ".tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        tracing::debug!(products = inventory.len(), "saved inventory");
        Ok(())
    }

    /// Load, apply `f`, and persist if `f` succeeds.
    ///
    /// On error nothing is written and the file keeps its previous content.
    pub fn update<T>(&self, f: impl FnOnce(&mut Inventory) -> Result<T>) -> Result<T> {
        let mut inventory = self.load_all()?;
        let out = f(&mut inventory)?;
        self.save_all(&inventory)?;
        Ok(out)
    }
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
