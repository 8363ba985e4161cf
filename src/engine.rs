/*!
 * File Menu Engine
 * Lazy, snapshot-at-call menu synthesis and open routing
 */

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::assoc::{AssociationTable, HandlerDirectory, HandlerId};
use crate::dispatch::{self, Outcome};
use crate::menu::{synthesize, Facts, MenuAction, MenuEntry};
use crate::mount::{normalize_path, MountRegistry};
use crate::open::{resolve_open, OpenEffect};
use crate::resolve::{self, extension_of, is_shortcut};
use crate::selection;
use crate::store::{BackingStore, NavigationBridge, StoreResult, WallpaperSetter};

/// One context-menu or open gesture, as reported by the UI surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuRequest {
    /// Absolute path of the focused entry
    pub path: PathBuf,
    /// Shortcut target, when the entry is a shortcut the surface has
    /// already read; `None` for plain entries
    pub target: Option<PathBuf>,
    /// Handler the entry is already open in, if any
    pub active_handler: Option<HandlerId>,
    /// Id of the folder-browser window containing the entry, if any
    pub container_id: Option<String>,
    /// Read-only constraint imposed by the calling surface
    pub read_only: bool,
    /// Names of the sibling entries in the active selection
    pub selection: Vec<String>,
}

impl MenuRequest {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

/// The file-interaction engine.
///
/// Holds the mount registry and the static tables; every query reads a
/// fresh registry snapshot, so menus always reflect mount state at the
/// moment of the gesture. The engine holds no lock across calls and is
/// re-entrant.
pub struct FileMenuEngine {
    mounts: Arc<MountRegistry>,
    primary: Arc<dyn BackingStore>,
    associations: AssociationTable,
    directory: HandlerDirectory,
}

impl FileMenuEngine {
    /// Engine with the builtin association table and handler directory.
    pub fn new(mounts: Arc<MountRegistry>, primary: Arc<dyn BackingStore>) -> Self {
        Self::with_tables(
            mounts,
            primary,
            AssociationTable::builtin(),
            HandlerDirectory::builtin(),
        )
    }

    pub fn with_tables(
        mounts: Arc<MountRegistry>,
        primary: Arc<dyn BackingStore>,
        associations: AssociationTable,
        directory: HandlerDirectory,
    ) -> Self {
        Self {
            mounts,
            primary,
            associations,
            directory,
        }
    }

    pub fn mounts(&self) -> &Arc<MountRegistry> {
        &self.mounts
    }

    pub fn directory(&self) -> &HandlerDirectory {
        &self.directory
    }

    /// Assemble synthesis facts for a request against current state.
    pub fn facts(&self, request: &MenuRequest) -> Facts {
        let path = if request.path.as_os_str().is_empty() {
            PathBuf::new()
        } else {
            normalize_path(&request.path)
        };
        let target = request.target.clone().unwrap_or_else(|| path.clone());
        let path_ext = extension_of(&path);
        let target_ext = extension_of(&target);

        let snapshot = self.mounts.snapshot();

        Facts {
            is_shortcut: is_shortcut(&path_ext),
            resolved: resolve::resolve(&path, &snapshot),
            selection: selection::expand(&path, &request.selection),
            handlers: self.associations.handlers_for(&target_ext).to_vec(),
            default_handler: self.associations.default_for(&target_ext),
            active_handler: request.active_handler,
            container_id: request.container_id.clone(),
            caller_read_only: request.read_only,
            path,
            target,
            path_ext,
            target_ext,
        }
    }

    /// The produced query: the ordered context menu for a request,
    /// computed lazily at gesture time.
    pub fn menu_items(&self, request: &MenuRequest) -> Vec<MenuEntry> {
        synthesize(&self.facts(request), &self.directory)
    }

    /// Routing decision for the primary open action.
    pub fn open_effect(&self, request: &MenuRequest) -> OpenEffect {
        resolve_open(&self.facts(request), &self.directory)
    }

    /// Store handle owning a path; unowned paths belong to the primary
    /// local store.
    pub fn store_for(&self, path: &Path) -> Arc<dyn BackingStore> {
        self.mounts
            .snapshot()
            .store_for(path)
            .unwrap_or_else(|| Arc::clone(&self.primary))
    }

    /// Execute a synthesized action, re-reading mount state first.
    #[tracing::instrument(skip_all, fields(action = ?action, path = %request.path.display()))]
    pub async fn execute(
        &self,
        action: &MenuAction,
        request: &MenuRequest,
        wallpaper: &dyn WallpaperSetter,
        nav: &dyn NavigationBridge,
    ) -> StoreResult<Outcome> {
        let facts = self.facts(request);
        let store = self.store_for(&facts.path);
        dispatch::execute(action, &facts, store.as_ref(), wallpaper, nav, &self.directory).await
    }
}
