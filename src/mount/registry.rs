/*!
 * Mount Registry
 * Process-wide mount table with lock-free snapshot reads
 */

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use path_clean::PathClean;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use super::types::{MountError, MountPoint, MountResult};
use crate::store::BackingStore;

/// One registered mount: descriptor plus the store handle effects are
/// routed to.
#[derive(Clone)]
pub struct MountEntry {
    pub point: MountPoint,
    pub store: Arc<dyn BackingStore>,
}

/// Point-in-time view of the mount table.
///
/// Snapshots are immutable; a snapshot taken before a mutation never
/// observes it. Mount paths are unique within a table.
#[derive(Clone, Default)]
pub struct MountTable {
    entries: HashMap<PathBuf, MountEntry>,
    // Longest paths first, for prefix ownership resolution
    order: Vec<PathBuf>,
}

/// Shared handle to a point-in-time mount table
pub type MountSnapshot = Arc<MountTable>;

impl MountTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Exact-match lookup against the mount path set
    pub fn exact(&self, path: &Path) -> Option<&MountPoint> {
        self.entries.get(path).map(|e| &e.point)
    }

    /// Longest-prefix owner of a path; `None` means the primary local
    /// store owns it (absence of registry data is the common case)
    pub fn owner_of(&self, path: &Path) -> Option<&MountPoint> {
        self.order
            .iter()
            .find(|mount_path| path.starts_with(mount_path))
            .and_then(|mount_path| self.exact(mount_path))
    }

    /// Store handle owning a path, if a mount owns it
    pub fn store_for(&self, path: &Path) -> Option<Arc<dyn BackingStore>> {
        self.order
            .iter()
            .find(|mount_path| path.starts_with(mount_path))
            .and_then(|mount_path| self.entries.get(mount_path))
            .map(|e| Arc::clone(&e.store))
    }

    pub fn points(&self) -> impl Iterator<Item = &MountPoint> {
        self.order.iter().filter_map(|p| self.exact(p))
    }
}

/// Mount registry with explicit attach/detach lifecycle.
///
/// Readers take a point-in-time snapshot via an atomic pointer load and
/// never block. Writers serialize on a mutex and publish a new table
/// with a clone-modify-swap, so a concurrent reader observes either the
/// pre- or post-mutation table, never a partial one.
pub struct MountRegistry {
    table: ArcSwap<MountTable>,
    write_lock: Mutex<()>,
}

impl MountRegistry {
    pub fn new() -> Self {
        Self {
            table: ArcSwap::from_pointee(MountTable::default()),
            write_lock: Mutex::new(()),
        }
    }

    /// Attach a mount. Fails with `DuplicateMount` if the path is
    /// already present; the registry is left unchanged on failure.
    pub fn attach(&self, point: MountPoint, store: Arc<dyn BackingStore>) -> MountResult<()> {
        let path = normalize_path(&point.path);
        let _guard = self.write_lock.lock();

        let current = self.table.load();
        if current.contains(&path) {
            return Err(MountError::DuplicateMount(path.display().to_string()));
        }

        let mut next = (**current).clone();
        let point = MountPoint { path: path.clone(), ..point };
        info!(path = %path.display(), name = %point.name, kind = ?point.kind, "Attaching mount");
        next.entries.insert(path.clone(), MountEntry { point, store });
        next.order.push(path);
        next.order
            .sort_by(|a, b| b.as_os_str().len().cmp(&a.as_os_str().len()));
        self.table.store(Arc::new(next));
        Ok(())
    }

    /// Detach the mount at a path, returning its descriptor.
    pub fn detach<P: AsRef<Path>>(&self, path: P) -> MountResult<MountPoint> {
        let path = normalize_path(path.as_ref());
        let _guard = self.write_lock.lock();

        let current = self.table.load();
        if !current.contains(&path) {
            return Err(MountError::NotFound(path.display().to_string()));
        }

        let mut next = (**current).clone();
        let entry = next
            .entries
            .remove(&path)
            .ok_or_else(|| MountError::NotFound(path.display().to_string()))?;
        next.order.retain(|p| p != &path);
        info!(path = %path.display(), name = %entry.point.name, "Detaching mount");
        self.table.store(Arc::new(next));
        Ok(entry.point)
    }

    pub fn is_mounted<P: AsRef<Path>>(&self, path: P) -> bool {
        self.snapshot().contains(&normalize_path(path.as_ref()))
    }

    pub fn mount_info<P: AsRef<Path>>(&self, path: P) -> Option<MountPoint> {
        self.snapshot()
            .exact(&normalize_path(path.as_ref()))
            .cloned()
    }

    /// Lock-free point-in-time snapshot
    pub fn snapshot(&self) -> MountSnapshot {
        self.table.load_full()
    }
}

impl Default for MountRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize path (absolute, cleaned)
pub fn normalize_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.clean()
    } else {
        PathBuf::from("/").join(path).clean()
    }
}
