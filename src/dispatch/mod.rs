/*!
 * Effect Executor
 * Routes menu actions onto the collaborator contracts
 */

use std::path::Path;
use tracing::warn;

use crate::assoc::{HandlerDirectory, HandlerId};
use crate::menu::{Facts, MenuAction};
use crate::open::{resolve_open, OpenEffect};
use crate::store::{
    BackingStore, LaunchIntent, NavigationBridge, StoreError, StoreResult, WallpaperSetter,
};

/// What the caller should do after an action executes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Effect issued; refresh the affected listing when it reports back
    Completed,
    /// Begin inline rename of the focused entry
    RenameRequested { name: String },
}

/// Execute a synthesized action against the collaborators.
///
/// Batch actions apply to the full expanded selection, in expansion
/// order. Mutations against read-only paths are rejected here as well,
/// since mount state may have changed since synthesis. Failures are
/// surfaced as-is; a failed effect leaves no engine state behind.
pub async fn execute(
    action: &MenuAction,
    facts: &Facts,
    store: &dyn BackingStore,
    wallpaper: &dyn WallpaperSetter,
    nav: &dyn NavigationBridge,
    directory: &HandlerDirectory,
) -> StoreResult<Outcome> {
    if action.is_mutation() {
        if let Some(reason) = mutation_denied(facts) {
            return Err(StoreError::ReadOnly(reason));
        }
    }

    let result = run(action, facts, store, wallpaper, nav, directory).await;
    if let Err(error) = &result {
        warn!(action = ?action, path = %facts.path.display(), error = %error, "File action failed");
    }
    result
}

fn mutation_denied(facts: &Facts) -> Option<String> {
    if facts.caller_read_only || facts.resolved.read_only {
        return Some(facts.path.display().to_string());
    }
    facts
        .resolved
        .owning_mount
        .as_ref()
        .filter(|mount| mount.read_only)
        .map(|mount| mount.path.display().to_string())
}

async fn run(
    action: &MenuAction,
    facts: &Facts,
    store: &dyn BackingStore,
    wallpaper: &dyn WallpaperSetter,
    nav: &dyn NavigationBridge,
    directory: &HandlerDirectory,
) -> StoreResult<Outcome> {
    match action {
        MenuAction::Open => {
            match resolve_open(facts, directory) {
                OpenEffect::Navigate { container_id, path } => nav.navigate(&container_id, &path),
                OpenEffect::Launch { handler, intent } => nav.launch(handler, intent),
            }
            Ok(Outcome::Completed)
        }
        MenuAction::OpenInNewWindow => {
            let handler = facts.active_handler.unwrap_or(HandlerId::FileBrowser);
            nav.launch(
                handler,
                LaunchIntent {
                    path: facts.target.clone(),
                    icon: directory.icon(handler),
                },
            );
            Ok(Outcome::Completed)
        }
        MenuAction::OpenLocation { dir } => {
            nav.launch(
                HandlerId::FileBrowser,
                LaunchIntent {
                    path: dir.clone(),
                    icon: directory.icon(HandlerId::FileBrowser),
                },
            );
            Ok(Outcome::Completed)
        }
        MenuAction::OpenWith { handler } => {
            nav.launch(
                *handler,
                LaunchIntent {
                    path: facts.target.clone(),
                    icon: directory.icon(*handler),
                },
            );
            Ok(Outcome::Completed)
        }
        MenuAction::SetWallpaper { mode } => {
            wallpaper.set_wallpaper(&facts.path, *mode);
            Ok(Outcome::Completed)
        }
        MenuAction::Download => {
            store.download(&facts.selection).await?;
            Ok(Outcome::Completed)
        }
        MenuAction::AddToArchive => {
            store.archive(&facts.selection).await?;
            Ok(Outcome::Completed)
        }
        MenuAction::ExtractHere => {
            store.extract(&facts.path).await?;
            Ok(Outcome::Completed)
        }
        MenuAction::Cut => {
            store.move_entries(&facts.selection).await?;
            Ok(Outcome::Completed)
        }
        MenuAction::Copy => {
            store.copy_entries(&facts.selection).await?;
            Ok(Outcome::Completed)
        }
        MenuAction::CreateShortcut => {
            for entry in &facts.selection {
                let stat = store.stat(entry).await?;
                let handler = match facts.default_handler {
                    Some(default) if !stat.is_directory => default,
                    _ => HandlerId::FileBrowser,
                };
                store.create_shortcut(entry, handler).await?;
            }
            Ok(Outcome::Completed)
        }
        MenuAction::Delete => {
            for entry in &facts.selection {
                store.delete(entry).await?;
            }
            Ok(Outcome::Completed)
        }
        MenuAction::Rename => {
            let name = basename(&facts.path);
            Ok(Outcome::RenameRequested { name })
        }
    }
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
