/*!
 * Extension Association Table
 * Static mapping from file extension to capable handlers
 */

use std::collections::HashMap;

use super::types::HandlerId;

/// Handlers associated with a single extension.
///
/// `handlers` is the ordered list of everything capable of opening the
/// extension; `default` is the handler used for plain "open" when no
/// handler is already active. An extension may have openers but no
/// default (opening is then an explicit user choice).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    pub handlers: Vec<HandlerId>,
    pub default: Option<HandlerId>,
}

impl Association {
    pub fn new(handlers: Vec<HandlerId>, default: Option<HandlerId>) -> Self {
        Self { handlers, default }
    }
}

/// Immutable extension-to-handler table, built once at process start.
///
/// Extensions are stored lowercase without the leading dot. An unknown
/// extension is not an error; lookups yield an empty handler list and
/// no default.
#[derive(Debug, Clone, Default)]
pub struct AssociationTable {
    map: HashMap<String, Association>,
}

impl AssociationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table covering the handlers bundled with the desktop.
    pub fn builtin() -> Self {
        use HandlerId::*;

        let mut table = Self::new();
        for ext in ["txt", "log", "json", "js", "rs", "toml", "css"] {
            table.insert(ext, vec![TextEditor], Some(TextEditor));
        }
        table.insert("md", vec![MarkdownViewer, TextEditor], Some(MarkdownViewer));
        table.insert("pdf", vec![PdfViewer], None);
        for ext in ["bmp", "gif", "ico", "jpeg", "jpg", "png", "webp"] {
            table.insert(ext, vec![ImageViewer], Some(ImageViewer));
        }
        for ext in ["mp3", "wav", "ogg", "mp4", "webm"] {
            table.insert(ext, vec![MediaPlayer], Some(MediaPlayer));
        }
        for ext in ["zip", "jsdos", "iso"] {
            table.insert(ext, vec![FileBrowser], Some(FileBrowser));
        }
        for ext in ["htm", "html"] {
            table.insert(ext, vec![Browser, TextEditor], Some(Browser));
        }
        table.insert("sh", vec![Terminal, TextEditor], Some(Terminal));
        table
    }

    pub fn insert(&mut self, extension: &str, handlers: Vec<HandlerId>, default: Option<HandlerId>) {
        self.map
            .insert(extension.to_lowercase(), Association::new(handlers, default));
    }

    pub fn lookup(&self, extension: &str) -> Option<&Association> {
        self.map.get(extension)
    }

    /// Ordered handlers for an extension; empty for unknown extensions.
    pub fn handlers_for(&self, extension: &str) -> &[HandlerId] {
        self.lookup(extension)
            .map(|a| a.handlers.as_slice())
            .unwrap_or(&[])
    }

    /// Default handler for an extension, if one is registered.
    pub fn default_for(&self, extension: &str) -> Option<HandlerId> {
        self.lookup(extension).and_then(|a| a.default)
    }
}
