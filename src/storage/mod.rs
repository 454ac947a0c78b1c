// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persistent key-value storage backing the history log and language preference.
//!
//! The core only needs three string operations. [`FileStore`] keeps one file
//! per key on disk; [`MemoryStore`] keeps everything in-process and can be told
//! to fail, which is how the degrade-to-default paths are tested.

use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// String key-value store consumed by the history log and language preference.
///
/// Reading a key that was never written is `Ok(None)`, and deleting one is
/// `Ok(())`; only genuine I/O problems are errors.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn delete(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `get` return an error.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `set` and `delete` return an error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(anyhow!("read of {} refused", key));
        }
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("write of {} refused", key));
        }
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("delete of {} refused", key));
        }
        self.entries()?.remove(key);
        Ok(())
    }
}

/// One file per key under a directory.
///
/// File names are the hex-encoded key so keys such as `@insectaid_history`
/// map to portable names. Writes go through a temp file in the same
/// directory and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating store directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.val", hex::encode(key.as_bytes())))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("reading {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let mut temp = NamedTempFile::new_in(&self.dir)
            .with_context(|| format!("creating temp file in {}", self.dir.display()))?;
        temp.write_all(value.as_bytes())
            .with_context(|| format!("writing value for {}", key))?;
        temp.persist(&path)
            .map_err(|err| anyhow!("replacing {}: {}", path.display(), err.error))?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("removing {}", path.display())),
        }
    }
}
