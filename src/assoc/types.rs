/*!
 * Handler Identity
 * Closed set of external handlers that can open files
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an external handler ("process") capable of opening files.
///
/// A closed enumeration with an explicit equality contract. Handler
/// identity is matched structurally, never by string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerId {
    /// Folder browser; also the navigation target for mounted archives
    FileBrowser,
    /// Generic text editor, the universal fallback opener
    TextEditor,
    PdfViewer,
    ImageViewer,
    MarkdownViewer,
    MediaPlayer,
    Browser,
    Terminal,
}

impl HandlerId {
    /// Handler injected when an "Open with" list would otherwise be empty
    pub const FALLBACK: HandlerId = HandlerId::TextEditor;

    pub fn as_str(&self) -> &'static str {
        match self {
            HandlerId::FileBrowser => "file_browser",
            HandlerId::TextEditor => "text_editor",
            HandlerId::PdfViewer => "pdf_viewer",
            HandlerId::ImageViewer => "image_viewer",
            HandlerId::MarkdownViewer => "markdown_viewer",
            HandlerId::MediaPlayer => "media_player",
            HandlerId::Browser => "browser",
            HandlerId::Terminal => "terminal",
        }
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
