/*!
 * Menu Builder
 * Ordered-list builder with named insertion points
 */

use super::types::MenuEntry;

/// Builds the final ordered menu from named sections instead of a
/// prepend discipline, so ordering intent stays visible:
///
/// - `top`: open/navigation items, appended in visible order
/// - `after_open_with`: non-mutating extras (wallpaper submenu)
/// - `mutation`: the destructive block; `finish` inserts the separator
///   ahead of it only when the block is non-empty
#[derive(Debug, Default)]
pub struct MenuBuilder {
    top: Vec<MenuEntry>,
    after_open_with: Vec<MenuEntry>,
    mutation: Vec<MenuEntry>,
}

impl MenuBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_top(&mut self, entry: MenuEntry) -> &mut Self {
        self.top.push(entry);
        self
    }

    pub fn push_after_open_with(&mut self, entry: MenuEntry) -> &mut Self {
        self.after_open_with.push(entry);
        self
    }

    pub fn push_mutation(&mut self, entry: MenuEntry) -> &mut Self {
        self.mutation.push(entry);
        self
    }

    pub fn finish(self) -> Vec<MenuEntry> {
        let mut items = self.top;
        items.extend(self.after_open_with);
        if !self.mutation.is_empty() {
            items.push(MenuEntry::Separator);
            items.extend(self.mutation);
        }
        items
    }
}
