/*!
 * Handler Directory
 * Icon/title decoration for menu items
 */

use std::collections::HashMap;

use super::types::HandlerId;

/// Presentation metadata for a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerMeta {
    pub icon: String,
    pub title: String,
}

impl HandlerMeta {
    pub fn new<I: Into<String>, T: Into<String>>(icon: I, title: T) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
        }
    }
}

/// Directory of handler presentation metadata.
///
/// Used only to decorate menu items. A missing entry yields undecorated
/// fields, never an error.
#[derive(Debug, Clone, Default)]
pub struct HandlerDirectory {
    map: HashMap<HandlerId, HandlerMeta>,
}

impl HandlerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        use HandlerId::*;

        let mut dir = Self::new();
        dir.insert(FileBrowser, HandlerMeta::new("/system/icons/explorer.webp", "File Browser"));
        dir.insert(TextEditor, HandlerMeta::new("/system/icons/editor.webp", "Text Editor"));
        dir.insert(PdfViewer, HandlerMeta::new("/system/icons/pdf.webp", "PDF Viewer"));
        dir.insert(ImageViewer, HandlerMeta::new("/system/icons/photos.webp", "Photos"));
        dir.insert(MarkdownViewer, HandlerMeta::new("/system/icons/marked.webp", "Markdown Viewer"));
        dir.insert(MediaPlayer, HandlerMeta::new("/system/icons/player.webp", "Media Player"));
        dir.insert(Browser, HandlerMeta::new("/system/icons/browser.webp", "Browser"));
        dir.insert(Terminal, HandlerMeta::new("/system/icons/terminal.webp", "Terminal"));
        dir
    }

    pub fn insert(&mut self, id: HandlerId, meta: HandlerMeta) {
        self.map.insert(id, meta);
    }

    pub fn meta(&self, id: HandlerId) -> Option<&HandlerMeta> {
        self.map.get(&id)
    }

    pub fn icon(&self, id: HandlerId) -> Option<String> {
        self.meta(id).map(|m| m.icon.clone())
    }

    /// Menu label for a handler; falls back to the handler's own name.
    pub fn title(&self, id: HandlerId) -> String {
        self.meta(id)
            .map(|m| m.title.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_is_undecorated() {
        let dir = HandlerDirectory::new();
        assert_eq!(dir.meta(HandlerId::PdfViewer), None);
        assert_eq!(dir.icon(HandlerId::PdfViewer), None);
        assert_eq!(dir.title(HandlerId::PdfViewer), "pdf_viewer");
    }

    #[test]
    fn test_builtin_decoration() {
        let dir = HandlerDirectory::builtin();
        assert_eq!(dir.title(HandlerId::FileBrowser), "File Browser");
        assert!(dir.icon(HandlerId::FileBrowser).unwrap().ends_with(".webp"));
    }
}
