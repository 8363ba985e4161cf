/*!
 * Mount Types
 * Mount point descriptors and registry errors
 */

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Mount registry operation result
pub type MountResult<T> = Result<T, MountError>;

/// Mount registry errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum MountError {
    #[error("mount point already exists: {0}")]
    DuplicateMount(String),

    #[error("mount point not found: {0}")]
    NotFound(String),
}

/// Kind of store backing a mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Persisted local store (the primary store)
    Local,
    /// Just-in-time bridge to a device on the host machine
    RemoteAccess,
    /// Virtual mount synthesized from archive bytes
    Archive,
}

impl BackendKind {
    /// Remote-backed mounts are treated as read-only for destructive
    /// actions regardless of the bridge's own permission model, to avoid
    /// partial-failure states when the bridge is unavailable.
    pub fn is_remote(&self) -> bool {
        matches!(self, BackendKind::RemoteAccess)
    }
}

/// Mount point configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountPoint {
    pub path: PathBuf,
    pub name: String,
    pub kind: BackendKind,
    pub read_only: bool,
}

impl MountPoint {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(path: P, name: S, kind: BackendKind) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            kind,
            read_only: false,
        }
    }

    pub fn readonly<P: Into<PathBuf>, S: Into<String>>(path: P, name: S, kind: BackendKind) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            kind,
            read_only: true,
        }
    }
}
