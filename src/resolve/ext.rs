/*!
 * Extension Classes
 * Static extension class sets used by resolution and synthesis
 */

use std::path::Path;

/// Extensions the desktop can set as a wallpaper
pub const IMAGE_EXTENSIONS: &[&str] = &["apng", "avif", "bmp", "gif", "ico", "jfif", "jpeg", "jpg", "png", "svg", "tif", "tiff", "webp"];

/// Extensions that mount as virtual folders instead of opening in a handler
pub const MOUNTABLE_EXTENSIONS: &[&str] = &["iso", "jsdos", "zip"];

/// Mountable extensions that are disk images; mounted, never extracted
pub const DISK_IMAGE_EXTENSIONS: &[&str] = &["iso"];

/// Extension marking a shortcut entry
pub const SHORTCUT_EXTENSION: &str = "url";

/// Extension of a path's final segment: rightmost-dot split, lowercased,
/// without the dot. No dot yields the empty string.
pub fn extension_of(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    match name.rfind('.') {
        Some(idx) if idx > 0 => name[idx + 1..].to_lowercase(),
        _ => String::new(),
    }
}

pub fn is_image(extension: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&extension)
}

pub fn is_mountable(extension: &str) -> bool {
    MOUNTABLE_EXTENSIONS.contains(&extension)
}

pub fn is_disk_image(extension: &str) -> bool {
    DISK_IMAGE_EXTENSIONS.contains(&extension)
}

pub fn is_shortcut(extension: &str) -> bool {
    extension == SHORTCUT_EXTENSION
}

/// Network targets are opened in place, never located on disk.
pub fn is_web_target(target: &Path) -> bool {
    let target = target.to_string_lossy();
    target.starts_with("http:") || target.starts_with("https:")
}
