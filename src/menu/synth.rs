/*!
 * Action Synthesizer
 * Pure rule engine producing the ordered context-menu entries
 */

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::builder::MenuBuilder;
use super::types::{ActionItem, MenuAction, MenuEntry, WallpaperMode};
use crate::assoc::{HandlerDirectory, HandlerId};
use crate::resolve::{is_disk_image, is_image, is_mountable, is_web_target, Resolved};

/// Resolved facts for one synthesis call.
///
/// Everything synthesis depends on is bundled here, assembled by the
/// engine from a registry snapshot and the static tables at the moment
/// the menu gesture occurs. Identical facts yield identical output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facts {
    /// Absolute path of the focused entry
    pub path: PathBuf,
    /// What opening the entry operates on: the shortcut target for
    /// shortcuts, otherwise the entry path itself
    pub target: PathBuf,
    /// Extension of `path`, lowercase, no dot
    pub path_ext: String,
    /// Extension of `target`, lowercase, no dot
    pub target_ext: String,
    /// Whether the entry is a shortcut
    pub is_shortcut: bool,
    /// Handler the entry is already open in, if any
    pub active_handler: Option<HandlerId>,
    /// Id of the folder-browser window containing the entry, if any
    pub container_id: Option<String>,
    /// Read-only constraint imposed by the calling surface
    pub caller_read_only: bool,
    /// Mount facts resolved for `path`
    pub resolved: Resolved,
    /// Expanded selection the batch actions apply to
    pub selection: Vec<PathBuf>,
    /// Ordered handlers associated with `target_ext`
    pub handlers: Vec<HandlerId>,
    /// Default handler for `target_ext`
    pub default_handler: Option<HandlerId>,
}

impl Facts {
    fn mutation_allowed(&self) -> bool {
        // Two independent gates: the caller's constraint and the
        // resolver's remote-mount policy
        !self.caller_read_only && !self.resolved.read_only
    }

    fn has_path(&self) -> bool {
        !self.path.as_os_str().is_empty()
    }
}

/// Synthesize the ordered context menu for the given facts.
///
/// Total over well-formed facts: unknown extensions, missing mounts,
/// and empty handler lists all produce a menu, never an error.
pub fn synthesize(facts: &Facts, directory: &HandlerDirectory) -> Vec<MenuEntry> {
    let mut builder = MenuBuilder::new();

    push_open_items(facts, directory, &mut builder);
    push_open_with(facts, directory, &mut builder);

    if is_image(&facts.path_ext) {
        builder.push_after_open_with(wallpaper_submenu());
    }

    if facts.mutation_allowed() {
        push_mutation_block(facts, &mut builder);
    }

    builder.finish()
}

fn push_open_items(facts: &Facts, directory: &HandlerDirectory, builder: &mut MenuBuilder) {
    if let Some(active) = facts.active_handler {
        builder.push_top(MenuEntry::Item(
            ActionItem::new("Open", MenuAction::Open)
                .icon(directory.icon(active))
                .primary(),
        ));

        if active == HandlerId::FileBrowser
            && facts.container_id.is_some()
            && !is_mountable(&facts.target_ext)
        {
            builder.push_top(MenuEntry::item(
                "Open in new window",
                MenuAction::OpenInNewWindow,
            ));
        }
    }

    if facts.is_shortcut && has_locatable_target(&facts.target) {
        let noun = if facts.target_ext.is_empty() { "folder" } else { "file" };
        let dir = facts
            .target
            .parent()
            .unwrap_or_else(|| Path::new("/"))
            .to_path_buf();
        builder.push_top(MenuEntry::item(
            format!("Open {noun} location"),
            MenuAction::OpenLocation { dir },
        ));
    }
}

/// A shortcut target can be located when it is non-empty, not the root,
/// and not a network URL.
fn has_locatable_target(target: &Path) -> bool {
    !target.as_os_str().is_empty() && target != Path::new("/") && !is_web_target(target)
}

fn push_open_with(facts: &Facts, directory: &HandlerDirectory, builder: &mut MenuBuilder) {
    let mut candidates: Vec<HandlerId> = facts
        .handlers
        .iter()
        .copied()
        .filter(|handler| Some(*handler) != facts.active_handler)
        .collect();

    // Every file keeps at least one alternate opener
    if candidates.is_empty() {
        candidates.push(HandlerId::FALLBACK);
    }

    let items = candidates
        .into_iter()
        .map(|handler| {
            MenuEntry::Item(
                ActionItem::new(directory.title(handler), MenuAction::OpenWith { handler })
                    .icon(directory.icon(handler)),
            )
        })
        .collect();
    builder.push_top(MenuEntry::submenu("Open with", items));
}

fn wallpaper_submenu() -> MenuEntry {
    let items = WallpaperMode::ALL
        .iter()
        .map(|&mode| MenuEntry::item(mode.label(), MenuAction::SetWallpaper { mode }))
        .collect();
    MenuEntry::submenu("Set as desktop background", items)
}

fn push_mutation_block(facts: &Facts, builder: &mut MenuBuilder) {
    if facts.has_path() {
        if is_mountable(&facts.path_ext) && !is_disk_image(&facts.path_ext) {
            builder.push_mutation(MenuEntry::item("Extract Here", MenuAction::ExtractHere));
        }
        builder.push_mutation(MenuEntry::item("Add to archive...", MenuAction::AddToArchive));
        builder.push_mutation(MenuEntry::item("Download", MenuAction::Download));
        builder.push_mutation(MenuEntry::Separator);
    }

    builder.push_mutation(MenuEntry::item("Cut", MenuAction::Cut));
    builder.push_mutation(MenuEntry::item("Copy", MenuAction::Copy));
    builder.push_mutation(MenuEntry::Separator);

    let plain_folder = facts.path_ext.is_empty() && facts.target_ext.is_empty();
    if facts.default_handler.is_some() || facts.is_shortcut || plain_folder {
        builder.push_mutation(MenuEntry::item("Create shortcut", MenuAction::CreateShortcut));
    }

    builder.push_mutation(MenuEntry::item("Delete", MenuAction::Delete));
    builder.push_mutation(MenuEntry::item("Rename", MenuAction::Rename));
}
