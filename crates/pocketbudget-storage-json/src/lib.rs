//! pocketbudget-storage-json
//!
//! Filesystem-backed JSON persistence for the tracker snapshot: one blob
//! under one fixed storage key, overwritten whole on every save.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use pocketbudget_core::{CoreError, StateStore};
use pocketbudget_domain::Ledger;
use tracing::{debug, warn};

/// Fixed key naming the persisted snapshot; doubles as the blob's file stem.
pub const STORAGE_KEY: &str = "expense_tracker_data";

const STORAGE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// JSON store holding the single tracker snapshot inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    data_dir: PathBuf,
}

impl JsonStateStore {
    pub fn new(data_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// Path of the snapshot blob under the fixed storage key.
    pub fn blob_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", STORAGE_KEY, STORAGE_EXTENSION))
    }

    fn read_snapshot(&self, path: &Path) -> Result<Ledger, CoreError> {
        let data = fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|err| CoreError::Storage(err.to_string()))
    }
}

impl StateStore for JsonStateStore {
    /// Loads the snapshot, falling back to the documented defaults when the
    /// blob is absent, unreadable, or structurally invalid. The fallback is
    /// logged and never fatal; per-field absence inside a parseable blob is
    /// handled by the domain's serde defaults.
    fn load(&self) -> Ledger {
        let path = self.blob_path();
        if !path.exists() {
            return Ledger::default();
        }
        match self.read_snapshot(&path) {
            Ok(ledger) => ledger,
            Err(err) => {
                warn!(
                    "discarding unreadable snapshot at {}: {err}",
                    path.display()
                );
                Ledger::default()
            }
        }
    }

    fn save(&self, ledger: &Ledger) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(ledger)
            .map_err(|err| CoreError::Storage(err.to_string()))?;
        let path = self.blob_path();
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        debug!("snapshot written to {}", path.display());
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
