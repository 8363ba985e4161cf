/*!
 * Handler Associations
 * Extension-to-handler mapping and handler metadata
 */

pub mod directory;
pub mod table;
pub mod types;

// Re-exports
pub use directory::{HandlerDirectory, HandlerMeta};
pub use table::{Association, AssociationTable};
pub use types::HandlerId;
