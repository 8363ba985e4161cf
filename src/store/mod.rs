/*!
 * Collaborator Contracts
 * Backing store, wallpaper, and navigation interfaces consumed by the core
 */

pub mod memory;

pub use memory::{MemStore, StoreOp};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::assoc::HandlerId;
use crate::menu::WallpaperMode;

/// Backing-store operation result
pub type StoreResult<T> = Result<T, StoreError>;

/// Backing-store errors
///
/// Only the asynchronous store calls can fail; failures surface to the
/// UI layer as-is, never swallowed, never fatal. There is no retry
/// policy here; retries belong to the store implementation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("read-only mount: {0}")]
    ReadOnly(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Result of a stat query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub is_directory: bool,
}

/// A mounted backing store.
///
/// Every method may suspend and must be treated as cancellable by the
/// caller; no ordering is guaranteed between concurrent queries against
/// different mounts. Mutations report completion through their result so
/// the caller can refresh the affected directory listing.
#[async_trait]
pub trait BackingStore: Send + Sync {
    /// Stat a path; fails with `StoreError::NotFound` for vanished paths
    async fn stat(&self, path: &Path) -> StoreResult<Stat>;

    /// Stage the given paths for a move
    async fn move_entries(&self, paths: &[PathBuf]) -> StoreResult<()>;

    /// Stage the given paths for a copy
    async fn copy_entries(&self, paths: &[PathBuf]) -> StoreResult<()>;

    /// Delete a single path
    async fn delete(&self, path: &Path) -> StoreResult<()>;

    /// Extract an archive next to itself
    async fn extract(&self, path: &Path) -> StoreResult<()>;

    /// Pack the given paths into a new archive
    async fn archive(&self, paths: &[PathBuf]) -> StoreResult<()>;

    /// Download the given paths to the host machine
    async fn download(&self, paths: &[PathBuf]) -> StoreResult<()>;

    /// Create a shortcut to `target`, opened by `handler`
    async fn create_shortcut(&self, target: &Path, handler: HandlerId) -> StoreResult<()>;

    /// Store name, for logging and diagnostics
    fn name(&self) -> &str;
}

/// Launch parameters handed to the navigation bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchIntent {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Wallpaper-setting collaborator; fire-and-forget
pub trait WallpaperSetter: Send + Sync {
    fn set_wallpaper(&self, path: &Path, mode: WallpaperMode);
}

/// Window/process routing collaborator
pub trait NavigationBridge: Send + Sync {
    /// Route an existing container window to a new path
    fn navigate(&self, container_id: &str, path: &Path);

    /// Spawn a handler instance on a path
    fn launch(&self, handler: HandlerId, intent: LaunchIntent);
}
