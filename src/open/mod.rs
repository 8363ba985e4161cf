/*!
 * Open Dispatcher
 * Resolves the primary "open" action to a window-reuse or launch effect
 */

use serde::Serialize;

use crate::assoc::{HandlerDirectory, HandlerId};
use crate::menu::Facts;
use crate::resolve::is_mountable;
use crate::store::LaunchIntent;

/// Routing decision for the primary open action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum OpenEffect {
    /// Route an already-open folder browser to the path
    Navigate {
        container_id: String,
        path: std::path::PathBuf,
    },
    /// Spawn a handler instance
    Launch {
        handler: HandlerId,
        intent: LaunchIntent,
    },
}

/// Resolve the primary open effect for the given facts.
///
/// Folder-browser entries inside a known container navigate that
/// container instead of spawning a new window, except for mountable
/// archives, which are presented as navigation into the mount. Without
/// an active handler, the extension's default handler is launched,
/// falling back to the text editor.
pub fn resolve_open(facts: &Facts, directory: &HandlerDirectory) -> OpenEffect {
    if facts.active_handler == Some(HandlerId::FileBrowser) && !is_mountable(&facts.target_ext) {
        if let Some(container_id) = &facts.container_id {
            return OpenEffect::Navigate {
                container_id: container_id.clone(),
                path: facts.target.clone(),
            };
        }
    }

    let handler = facts
        .active_handler
        .or(facts.default_handler)
        .unwrap_or(HandlerId::FALLBACK);

    OpenEffect::Launch {
        handler,
        intent: LaunchIntent {
            path: facts.target.clone(),
            icon: directory.icon(handler),
        },
    }
}
