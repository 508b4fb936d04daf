//! Reading, applying and persisting the theme preference.

use tracing::debug;

use super::detect::detect_mode;
use super::document::DocumentRoot;
use super::preference::Theme;
use super::store::PreferenceStore;

/// Storage key the preference is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "site-theme";

/// Root attribute stylesheets branch on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Keeps one light/dark preference consistent across reloads.
///
/// Storage access is best-effort: a failed read falls back to the ambient
/// mode and a failed write is dropped, so no operation here returns an error.
///
/// # Example
///
/// ```rust
/// use showcase::{MemoryStore, Theme, ThemeController};
///
/// let store = MemoryStore::with_entry("site-theme", "dark");
/// let mut controller = ThemeController::new(Box::new(store));
///
/// let theme = controller.initial_preference();
/// assert_eq!(theme, Theme::Dark);
///
/// controller.apply(theme.toggle());
/// assert_eq!(controller.document().attribute("data-theme"), Some("light"));
/// ```
pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
    key: String,
    document: DocumentRoot,
}

impl ThemeController {
    /// Creates a controller using [`DEFAULT_STORAGE_KEY`].
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Creates a controller persisting under a custom key.
    pub fn with_key(store: Box<dyn PreferenceStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            document: DocumentRoot::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the stored preference when valid, else the ambient mode.
    pub fn initial_preference(&self) -> Theme {
        match self.store.get(&self.key) {
            Ok(Some(value)) => match Theme::from_stored(&value) {
                Some(theme) => return theme,
                None => debug!(key = %self.key, value = %value, "ignoring unrecognised stored theme"),
            },
            Ok(None) => {}
            Err(e) => debug!(key = %self.key, error = %e, "theme preference read failed"),
        }
        detect_mode()
    }

    /// Reflects `theme` on the document root, then persists it.
    ///
    /// The document is updated before the write so a storage failure never
    /// holds back the visual change.
    pub fn apply(&mut self, theme: Theme) {
        self.document.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        if let Err(e) = self.store.set(&self.key, theme.as_str()) {
            debug!(key = %self.key, theme = %theme, error = %e, "theme preference write dropped");
        }
    }

    /// The theme currently reflected on the document, if any was applied.
    pub fn applied(&self) -> Option<Theme> {
        self.document
            .attribute(THEME_ATTRIBUTE)
            .and_then(Theme::from_stored)
    }

    pub fn document(&self) -> &DocumentRoot {
        &self.document
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("key", &self.key)
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}
