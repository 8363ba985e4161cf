/*!
 * Path Resolver
 * Maps a path onto mount ownership and read-only status
 */

pub mod ext;

use serde::Serialize;
use std::path::Path;

use crate::mount::{MountPoint, MountTable};

pub use ext::{
    extension_of, is_disk_image, is_image, is_mountable, is_shortcut, is_web_target,
};

/// Facts resolved for a single path against a mount snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Resolved {
    /// Mount owning the path; `None` means the primary local store
    pub owning_mount: Option<MountPoint>,
    /// True iff the path exactly matches a remote-backed mount
    pub read_only: bool,
    /// True iff the path exactly matches a mount root
    pub is_mount_root: bool,
}

/// Resolve a path against a point-in-time mount table.
///
/// Read-only status is decided by exact match against a remote-backed
/// mount root (conservative remote policy); ownership falls back to
/// longest-prefix matching, and a path no mount owns belongs to the
/// primary local store, writable. The caller's own read-only constraint
/// is a separate gate, applied at synthesis time, never merged here.
pub fn resolve(path: &Path, mounts: &MountTable) -> Resolved {
    if let Some(point) = mounts.exact(path) {
        return Resolved {
            read_only: point.kind.is_remote(),
            is_mount_root: true,
            owning_mount: Some(point.clone()),
        };
    }

    Resolved {
        owning_mount: mounts.owner_of(path).cloned(),
        read_only: false,
        is_mount_root: false,
    }
}
