//! Light/dark theme preference.
//!
//! This module provides:
//!
//! - [`Theme`]: The two display modes and their persisted string form
//! - [`PreferenceStore`]: Best-effort key/value storage for the preference
//! - [`DocumentRoot`]: Root element attributes the stylesheet branches on
//! - [`ThemeController`]: Reads, applies and persists the preference
//! - [`ThemeContext`]: The single process-wide theme with change subscriptions
//!
//! The ambient color-scheme signal is read through [`detect_mode`], which can be
//! overridden with [`set_mode_detector`] for tests or forced modes.

mod context;
mod controller;
mod detect;
mod document;
mod preference;
mod store;

pub use context::{ThemeContext, ThemeError};
pub use controller::{ThemeController, DEFAULT_STORAGE_KEY, THEME_ATTRIBUTE};
pub use detect::{detect_mode, reset_mode_detector, set_mode_detector};
pub use document::DocumentRoot;
pub use preference::{ParseThemeError, Theme};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError};
