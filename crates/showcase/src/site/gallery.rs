//! Image grid with a single expanded image.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub image: String,
    #[serde(default)]
    pub description: String,
}

/// A gallery of images where at most one is shown enlarged.
///
/// Opening an index outside the list is ignored, so the expanded image is
/// always one of the gallery's items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    expanded: Option<usize>,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            items,
            expanded: None,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Enlarges the image at `index`; returns whether anything is expanded.
    pub fn open(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.expanded = Some(index);
        }
        self.expanded.is_some()
    }

    /// Dismisses the overlay.
    pub fn close(&mut self) {
        self.expanded = None;
    }

    pub fn expanded(&self) -> Option<&GalleryItem> {
        self.expanded.and_then(|index| self.items.get(index))
    }

    pub fn expanded_index(&self) -> Option<usize> {
        self.expanded
    }
}
