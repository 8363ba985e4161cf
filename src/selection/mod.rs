/*!
 * Selection Expander
 * Canonical absolute-path expansion of a multi-select gesture
 */

use std::path::{Path, PathBuf};

/// Expand the focused entry and its sibling selection names into the
/// ordered, deduplicated list of absolute paths an action applies to.
///
/// Selection state is honored only when the focused entry is genuinely
/// part of a multi-select gesture: with one selected name or less, or
/// when the focused entry's own name is absent from the selection, the
/// expansion degenerates to the focused path alone. Otherwise the
/// focused path comes first, followed by each name resolved against the
/// focused path's parent directory in insertion order.
pub fn expand(focused: &Path, names: &[String]) -> Vec<PathBuf> {
    let base_name = focused
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if names.len() <= 1 || !names.iter().any(|n| *n == base_name) {
        return vec![focused.to_path_buf()];
    }

    let dir = focused.parent().unwrap_or_else(|| Path::new("/"));
    let mut paths = vec![focused.to_path_buf()];
    for name in names {
        let path = dir.join(name);
        if !paths.contains(&path) {
            paths.push(path);
        }
    }
    paths
}
