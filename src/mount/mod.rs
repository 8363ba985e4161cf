/*!
 * Mount Module
 * Mount points, lifecycle, and snapshot reads
 */

pub mod registry;
pub mod types;

// Re-exports
pub use registry::{normalize_path, MountEntry, MountRegistry, MountSnapshot, MountTable};
pub use types::{BackendKind, MountError, MountPoint, MountResult};
