//! Durable, collision-free employee identifier allocation.
//!
//! The counter is the only shared mutable state in the whole service. The
//! allocator serializes the load-increment-persist sequence behind a mutex
//! so no two submissions ever observe the same pre-increment value, and the
//! file backend replaces the counter atomically so a reader never sees a
//! partial write.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use parking_lot::Mutex;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Identifiers start one above this baseline; the first allocation returns
/// 20,000,001.
pub const ID_BASELINE: u64 = 20_000_000;

/// Errors raised by the counter store or output folder layout.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read counter store: {0}")]
    ReadCounter(#[source] io::Error),
    #[error("failed to persist counter store: {0}")]
    WriteCounter(#[source] io::Error),
    #[error("failed to create output folder {path}: {source}")]
    CreateFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Durable backend holding the single counter record.
pub trait CounterStore: Send {
    /// Load the raw counter text; `None` when no counter exists yet.
    fn load(&self) -> Result<Option<String>, StorageError>;
    /// Durably replace the counter with `value`; the write must be atomic.
    fn save(&mut self, value: &str) -> Result<(), StorageError>;
}

/// File-backed counter store (one decimal integer in a text file).
#[derive(Debug)]
pub struct FileCounterStore {
    path: PathBuf,
}

impl FileCounterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CounterStore for FileCounterStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadCounter(e)),
        }
    }

    fn save(&mut self, value: &str) -> Result<(), StorageError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(StorageError::WriteCounter)?;
                parent.to_path_buf()
            }
            _ => PathBuf::from("."),
        };

        // Write-then-rename so the counter is replaced in one step.
        let mut tmp = NamedTempFile::new_in(parent).map_err(StorageError::WriteCounter)?;
        tmp.write_all(value.as_bytes())
            .map_err(StorageError::WriteCounter)?;
        tmp.flush().map_err(StorageError::WriteCounter)?;
        tmp.persist(&self.path)
            .map_err(|e| StorageError::WriteCounter(e.error))?;
        Ok(())
    }
}

/// Hands out unique, monotonically increasing employee identifiers.
pub struct EmployeeIdAllocator {
    store: Mutex<Box<dyn CounterStore>>,
}

impl EmployeeIdAllocator {
    pub fn new(store: impl CounterStore + 'static) -> Self {
        Self {
            store: Mutex::new(Box::new(store)),
        }
    }

    /// Allocate the next identifier.
    ///
    /// A missing, unreadable or non-numeric counter silently restarts the
    /// sequence at the baseline instead of aborting; only a failed persist
    /// is an error. Gaps left by downstream failures are acceptable,
    /// uniqueness is the guarantee.
    pub fn next_id(&self) -> Result<u64, StorageError> {
        let mut store = self.store.lock();

        let last = match store.load() {
            Ok(Some(content)) => content.trim().parse::<u64>().unwrap_or_else(|_| {
                log::warn!("counter store held non-numeric content, resetting to baseline");
                ID_BASELINE
            }),
            Ok(None) => ID_BASELINE,
            Err(e) => {
                log::warn!("counter store unreadable ({e}), resetting to baseline");
                ID_BASELINE
            }
        };

        let next = last + 1;
        store.save(&next.to_string())?;
        Ok(next)
    }
}
