//! Newsletter document model.
//!
//! # Responsibility
//! - Own a titled, ordered sequence of `Item` values.
//! - Render the canonical text form used for display and persistence.
//! - Offer path-based save/load entry points over `FileNewsletterStore`.
//!
//! # Invariants
//! - `items` only ever holds fully constructed items; decode failures are
//!   never stored as placeholders.
//! - Items are exclusively owned; cloning a newsletter clones every item.
//! - Appends preserve insertion order.

use crate::codec::line::{encode, encode_title};
use crate::model::item::Item;
use crate::store::file_store::{FileNewsletterStore, LoadReport};
use crate::store::{NewsletterStore, StoreResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Titled collection of newsletter items.
///
/// `Default` yields an empty title and no items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Newsletter {
    title: String,
    items: Vec<Item>,
}

impl Newsletter {
    /// Creates an empty newsletter with `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Creates a newsletter that takes ownership of `items` as-is.
    pub fn with_items(title: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an independent copy of `item` at the end.
    pub fn add_item(&mut self, item: &Item) {
        self.items.push(item.clone());
    }

    /// Appends `item` at the end, taking ownership.
    pub fn push_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Renders `Title: <title>\n` followed by one `\n`-terminated line per item.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Writes the rendered document to `path`, replacing any existing file.
    ///
    /// # Errors
    /// - Returns `StoreError::Open` when the file cannot be created.
    /// - Returns `StoreError::Write` when writing or flushing fails.
    pub fn save(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        FileNewsletterStore::new(path.as_ref()).save(self)
    }

    /// Replaces title and items with the document stored at `path`.
    ///
    /// Undecodable item lines are skipped and listed in the returned report.
    /// On error the newsletter is left exactly as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> StoreResult<LoadReport> {
        FileNewsletterStore::new(path.as_ref()).load_into(self)
    }
}

impl Display for Newsletter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", encode_title(&self.title))?;
        for item in &self.items {
            writeln!(f, "{}", encode(item))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Newsletter;
    use crate::model::item::Item;

    #[test]
    fn default_has_empty_title() {
        let newsletter = Newsletter::default();
        assert_eq!(newsletter.title(), "");
        assert!(newsletter.is_empty());
        assert_eq!(newsletter.render(), "Title: \n");
    }

    #[test]
    fn push_item_takes_ownership_without_reordering() {
        let mut newsletter = Newsletter::new("T");
        newsletter.push_item(Item::picture("a.png"));
        newsletter.push_item(Item::text("b"));
        assert_eq!(newsletter.len(), 2);
        assert_eq!(newsletter.render(), "Title: T\nPicture:a.png\nText:b\n");
    }

    #[test]
    fn display_matches_render() {
        let mut newsletter = Newsletter::new("Weekly");
        newsletter.add_item(&Item::text("note"));
        assert_eq!(format!("{newsletter}"), newsletter.render());
    }
}
