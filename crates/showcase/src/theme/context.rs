//! The single process-wide theme.
//!
//! Every page reads the theme from one [`ThemeContext`] instead of deriving
//! and applying it on its own. The context derives the initial value once,
//! applies every change through its [`ThemeController`], and publishes the
//! value on a [`watch`] channel so views can follow updates.

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::debug;

use super::controller::ThemeController;
use super::document::DocumentRoot;
use super::preference::Theme;

static GLOBAL: OnceCell<ThemeContext> = OnceCell::new();

/// Errors from the process-wide context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("theme context is already installed")]
    AlreadyInstalled,
}

/// Shared theme state with change notification.
///
/// # Example
///
/// ```rust
/// use showcase::{MemoryStore, Theme, ThemeContext, ThemeController};
///
/// let store = MemoryStore::with_entry("site-theme", "light");
/// let context = ThemeContext::new(ThemeController::new(Box::new(store)));
/// let updates = context.subscribe();
///
/// assert_eq!(context.toggle(), Theme::Dark);
/// assert_eq!(*updates.borrow(), Theme::Dark);
/// ```
pub struct ThemeContext {
    controller: Mutex<ThemeController>,
    sender: watch::Sender<Theme>,
}

impl ThemeContext {
    /// Derives the initial preference and applies it.
    pub fn new(mut controller: ThemeController) -> Self {
        let initial = controller.initial_preference();
        controller.apply(initial);
        debug!(theme = %initial, "theme context initialised");

        let (sender, _) = watch::channel(initial);
        Self {
            controller: Mutex::new(controller),
            sender,
        }
    }

    /// Installs `context` as the process-wide instance.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::AlreadyInstalled`] if a context was installed before.
    pub fn install(context: ThemeContext) -> Result<&'static ThemeContext, ThemeError> {
        GLOBAL
            .set(context)
            .map_err(|_| ThemeError::AlreadyInstalled)?;
        GLOBAL.get().ok_or(ThemeError::AlreadyInstalled)
    }

    /// The process-wide instance, if one was installed.
    pub fn global() -> Option<&'static ThemeContext> {
        GLOBAL.get()
    }

    pub fn current(&self) -> Theme {
        *self.sender.borrow()
    }

    /// Applies `theme`; subscribers are notified only when it changes.
    pub fn set(&self, theme: Theme) {
        let mut controller = self.controller.lock();
        self.set_locked(&mut controller, theme);
    }

    /// Switches to the other mode and returns it.
    ///
    /// The current value is read under the controller lock, so concurrent
    /// toggles each flip the theme once.
    pub fn toggle(&self) -> Theme {
        let mut controller = self.controller.lock();
        let next = self.sender.borrow().toggle();
        self.set_locked(&mut controller, next);
        next
    }

    fn set_locked(&self, controller: &mut ThemeController, theme: Theme) {
        controller.apply(theme);
        self.sender.send_if_modified(|current| {
            let changed = *current != theme;
            *current = theme;
            changed
        });
    }

    /// Receives every subsequent theme change.
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.sender.subscribe()
    }

    /// Snapshot of the root attributes currently applied.
    pub fn document(&self) -> DocumentRoot {
        self.controller.lock().document().clone()
    }
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeContext")
            .field("current", &self.current())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::store::MemoryStore;
    use crate::theme::THEME_ATTRIBUTE;

    fn context_with(stored: &str) -> ThemeContext {
        let store = MemoryStore::with_entry("site-theme", stored);
        ThemeContext::new(ThemeController::new(Box::new(store)))
    }

    #[test]
    fn test_new_applies_initial_preference() {
        let context = context_with("dark");
        assert_eq!(context.current(), Theme::Dark);
        assert_eq!(context.document().attribute(THEME_ATTRIBUTE), Some("dark"));
    }

    #[test]
    fn test_toggle_notifies_subscribers() {
        let context = context_with("light");
        let mut updates = context.subscribe();
        assert!(!updates.has_changed().unwrap());

        assert_eq!(context.toggle(), Theme::Dark);
        assert!(updates.has_changed().unwrap());
        assert_eq!(*updates.borrow_and_update(), Theme::Dark);
        assert_eq!(context.document().attribute(THEME_ATTRIBUTE), Some("dark"));
    }

    #[test]
    fn test_setting_same_value_does_not_notify() {
        let context = context_with("light");
        let updates = context.subscribe();

        context.set(Theme::Light);
        assert!(!updates.has_changed().unwrap());
    }

    #[test]
    fn test_document_matches_last_write() {
        let context = context_with("light");
        for _ in 0..3 {
            let theme = context.toggle();
            assert_eq!(context.document().attribute(THEME_ATTRIBUTE), Some(theme.as_str()));
        }
    }

    #[test]
    fn test_concurrent_toggles_are_not_lost() {
        let context = context_with("light");
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..1001 {
                        context.toggle();
                    }
                });
            }
        });

        // 4004 toggles in total: back where we started.
        assert_eq!(context.current(), Theme::Light);
        assert_eq!(context.document().attribute(THEME_ATTRIBUTE), Some("light"));
    }

    #[test]
    fn test_install_only_once() {
        // Only this test touches the global.
        let first = ThemeContext::install(context_with("dark"));
        assert!(first.is_ok());
        assert_eq!(ThemeContext::global().map(ThemeContext::current), Some(Theme::Dark));

        let second = ThemeContext::install(context_with("light"));
        assert_eq!(second.unwrap_err(), ThemeError::AlreadyInstalled);
    }
}
