/*!
 * Menu Types
 * Ordered menu entries and their effects-as-data actions
 */

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::assoc::HandlerId;

/// Wallpaper layout modes exposed by "Set as desktop background"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallpaperMode {
    Fill,
    Fit,
    Stretch,
    Tile,
    Center,
}

impl WallpaperMode {
    pub const ALL: [WallpaperMode; 5] = [
        WallpaperMode::Fill,
        WallpaperMode::Fit,
        WallpaperMode::Stretch,
        WallpaperMode::Tile,
        WallpaperMode::Center,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WallpaperMode::Fill => "Fill",
            WallpaperMode::Fit => "Fit",
            WallpaperMode::Stretch => "Stretch",
            WallpaperMode::Tile => "Tile",
            WallpaperMode::Center => "Center",
        }
    }
}

/// Effect a menu item triggers, expressed as data.
///
/// Actions carry no closures; the effect executor routes them onto the
/// collaborator contracts, applying the expanded selection where the
/// action has batch semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum MenuAction {
    Open,
    OpenInNewWindow,
    OpenLocation { dir: PathBuf },
    OpenWith { handler: HandlerId },
    SetWallpaper { mode: WallpaperMode },
    Download,
    AddToArchive,
    ExtractHere,
    Cut,
    Copy,
    CreateShortcut,
    Delete,
    Rename,
}

impl MenuAction {
    /// Whether the action mutates the backing store (or stages a
    /// mutation, as cut/copy do). Mutations are suppressed on read-only
    /// paths and rejected by the executor as a second line of defense.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            MenuAction::Download
                | MenuAction::AddToArchive
                | MenuAction::ExtractHere
                | MenuAction::Cut
                | MenuAction::Copy
                | MenuAction::CreateShortcut
                | MenuAction::Delete
                | MenuAction::Rename
        )
    }
}

/// A leaf menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionItem {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub primary: bool,
    pub action: MenuAction,
}

impl ActionItem {
    pub fn new<L: Into<String>>(label: L, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            icon: None,
            primary: false,
            action,
        }
    }

    pub fn icon(mut self, icon: Option<String>) -> Self {
        self.icon = icon;
        self
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }
}

/// One entry of the produced menu. Ordering within the produced list is
/// significant: the first entry renders topmost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntry {
    Item(ActionItem),
    Submenu { label: String, items: Vec<MenuEntry> },
    Separator,
}

impl MenuEntry {
    pub fn item<L: Into<String>>(label: L, action: MenuAction) -> Self {
        MenuEntry::Item(ActionItem::new(label, action))
    }

    pub fn submenu<L: Into<String>>(label: L, items: Vec<MenuEntry>) -> Self {
        MenuEntry::Submenu {
            label: label.into(),
            items,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, MenuEntry::Separator)
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            MenuEntry::Item(item) => Some(&item.label),
            MenuEntry::Submenu { label, .. } => Some(label),
            MenuEntry::Separator => None,
        }
    }
}
