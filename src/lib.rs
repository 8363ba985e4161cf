/*!
 * Deskfiles
 * File-interaction core for a browser-hosted desktop environment:
 * mount-aware path resolution and ordered action synthesis
 */

pub mod assoc;
pub mod dispatch;
pub mod engine;
pub mod menu;
pub mod mount;
pub mod open;
pub mod resolve;
pub mod selection;
pub mod store;

// Re-exports
pub use assoc::{AssociationTable, HandlerDirectory, HandlerId};
pub use dispatch::Outcome;
pub use engine::{FileMenuEngine, MenuRequest};
pub use menu::{synthesize, ActionItem, Facts, MenuAction, MenuEntry, WallpaperMode};
pub use mount::{BackendKind, MountError, MountPoint, MountRegistry};
pub use open::{resolve_open, OpenEffect};
pub use resolve::{resolve, Resolved};
pub use selection::expand;
pub use store::{BackingStore, LaunchIntent, NavigationBridge, Stat, StoreError, WallpaperSetter};
