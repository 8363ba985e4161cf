/*!
 * Menu Module
 * Context-menu synthesis: entries, ordering, and the rule engine
 */

pub mod builder;
pub mod synth;
pub mod types;

// Re-exports
pub use builder::MenuBuilder;
pub use synth::{synthesize, Facts};
pub use types::{ActionItem, MenuAction, MenuEntry, WallpaperMode};
