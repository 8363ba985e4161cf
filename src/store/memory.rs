/*!
 * In-Memory Store
 * Journal-backed store used by tests and the demo shell
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{BackingStore, Stat, StoreError, StoreResult};
use crate::assoc::HandlerId;

/// Operations observed by a `MemStore`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Move(Vec<PathBuf>),
    Copy(Vec<PathBuf>),
    Delete(PathBuf),
    Extract(PathBuf),
    Archive(Vec<PathBuf>),
    Download(Vec<PathBuf>),
    Shortcut { target: PathBuf, handler: HandlerId },
}

/// In-memory backing store that journals every mutation.
///
/// Holds only stat facts, not file bytes; mutations succeed and are
/// recorded in arrival order, or fail with a single injected error.
pub struct MemStore {
    name: String,
    entries: Mutex<HashMap<PathBuf, Stat>>,
    journal: Mutex<Vec<StoreOp>>,
    fail_next: Mutex<Option<StoreError>>,
}

impl MemStore {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            entries: Mutex::new(HashMap::new()),
            journal: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
        }
    }

    pub fn add_file<P: Into<PathBuf>>(&self, path: P) -> &Self {
        self.entries
            .lock()
            .insert(path.into(), Stat { is_directory: false });
        self
    }

    pub fn add_dir<P: Into<PathBuf>>(&self, path: P) -> &Self {
        self.entries
            .lock()
            .insert(path.into(), Stat { is_directory: true });
        self
    }

    /// Make the next mutation fail with the given error
    pub fn inject_error(&self, error: StoreError) {
        *self.fail_next.lock() = Some(error);
    }

    pub fn journal(&self) -> Vec<StoreOp> {
        self.journal.lock().clone()
    }

    fn record(&self, op: StoreOp) -> StoreResult<()> {
        if let Some(error) = self.fail_next.lock().take() {
            return Err(error);
        }
        self.journal.lock().push(op);
        Ok(())
    }
}

#[async_trait]
impl BackingStore for MemStore {
    async fn stat(&self, path: &Path) -> StoreResult<Stat> {
        self.entries
            .lock()
            .get(path)
            .copied()
            .ok_or_else(|| StoreError::NotFound(path.display().to_string()))
    }

    async fn move_entries(&self, paths: &[PathBuf]) -> StoreResult<()> {
        self.record(StoreOp::Move(paths.to_vec()))
    }

    async fn copy_entries(&self, paths: &[PathBuf]) -> StoreResult<()> {
        self.record(StoreOp::Copy(paths.to_vec()))
    }

    async fn delete(&self, path: &Path) -> StoreResult<()> {
        self.record(StoreOp::Delete(path.to_path_buf()))
    }

    async fn extract(&self, path: &Path) -> StoreResult<()> {
        self.record(StoreOp::Extract(path.to_path_buf()))
    }

    async fn archive(&self, paths: &[PathBuf]) -> StoreResult<()> {
        self.record(StoreOp::Archive(paths.to_vec()))
    }

    async fn download(&self, paths: &[PathBuf]) -> StoreResult<()> {
        self.record(StoreOp::Download(paths.to_vec()))
    }

    async fn create_shortcut(&self, target: &Path, handler: HandlerId) -> StoreResult<()> {
        self.record(StoreOp::Shortcut {
            target: target.to_path_buf(),
            handler,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
