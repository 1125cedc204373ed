//! Storage backends
//!
//! A backend is the injected persistence capability: string keys mapped to
//! string payloads, read, written, and removed whole. The browser build of
//! the site hands its local storage to the stores; native embeddings use
//! [`FileBackend`]; tests use [`MemoryBackend`].

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::warn;

use crate::error::Result;

/// Key-value persistence capability injected into the stores
///
/// Read failures collapse to `None`; write failures surface as errors that
/// the slot layer downgrades to warnings, since in-memory state stays
/// authoritative for the session.
pub trait StorageBackend {
    /// Read the raw payload stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous payload.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete the payload under `key`. Absent keys are not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Ephemeral in-memory backend for tests and previews
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-per-slot backend rooted at a directory
///
/// Each slot is one UTF-8 JSON file, `<root>/<key>.json`, mirroring the
/// one-string-per-key model of the browser's local storage.
#[derive(Debug)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Open a backend rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Open a backend in the platform data directory
    /// (`$SHOWREEL_DATA_DIR` overrides).
    pub fn open_default() -> anyhow::Result<Self> {
        let root = super::paths::data_dir()?;
        Ok(Self::open(root)?)
    }

    /// Directory this backend stores its slot files in.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(payload) => Some(payload),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read slot file");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.slot_path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
