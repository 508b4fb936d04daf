//! # Showcase - a themed portfolio site core
//!
//! Showcase renders a personal portfolio site from a YAML description and
//! carries the two pieces of interactive state such a site needs:
//!
//! - **Theme**: a persisted light/dark preference. On first use it falls back
//!   to the operating system's mode, and every change is mirrored to the
//!   document root attribute and written back to the preference store.
//! - **Carousel**: a circular project carousel driven by dots, arrow keys,
//!   swipe gestures and an autoplay timer that pauses while hovered.
//!
//! ## Theme
//!
//! ```rust
//! use showcase::{MemoryStore, Theme, ThemeContext, ThemeController};
//!
//! let store = MemoryStore::with_entry("site-theme", "dark");
//! let theme = ThemeContext::new(ThemeController::new(Box::new(store)));
//! assert_eq!(theme.current(), Theme::Dark);
//!
//! assert_eq!(theme.toggle(), Theme::Light);
//! assert_eq!(theme.document().attribute("data-theme"), Some("light"));
//! ```
//!
//! One context is shared by every page. Install it once with
//! [`ThemeContext::install`] and read it back with [`ThemeContext::global`].
//!
//! ## Carousel
//!
//! ```rust
//! use showcase::{neighbors_of, Carousel, Direction};
//!
//! let mut carousel = Carousel::new(vec!["a", "b", "c", "d"]).unwrap();
//! carousel.advance(Direction::Backward);
//! assert_eq!(carousel.cursor(), 3);
//!
//! let n = neighbors_of(0, 4);
//! assert_eq!((n.previous, n.next), (3, 1));
//! ```
//!
//! [`SharedCarousel`] wraps a carousel for concurrent use, and [`Autoplay`]
//! advances it on a tokio interval.
//!
//! ## Pages
//!
//! ```rust
//! use showcase::{MemoryStore, Site, SiteConfig, SiteRenderer, ThemeContext, ThemeController};
//!
//! let site = Site::new(SiteConfig::sample().unwrap(), SiteRenderer::builtin()).unwrap();
//! let theme = ThemeContext::new(ThemeController::new(Box::new(MemoryStore::new())));
//! let pages = site.render_all(&theme).unwrap();
//! assert!(pages.iter().all(|p| p.html.contains("data-theme")));
//! ```

pub mod carousel;
mod error;
pub mod render;
pub mod site;
pub mod theme;

pub use carousel::{
    neighbors_of, Autoplay, Carousel, CarouselError, Direction, Neighbors, SharedCarousel, Slot,
    SwipeTracker,
};
pub use error::Error;
pub use render::{SiteRenderer, TemplateRegistry};
pub use site::{ContactMessage, Page, RenderedPage, Site, SiteConfig};
pub use theme::{
    detect_mode, reset_mode_detector, set_mode_detector, DocumentRoot, FileStore, MemoryStore,
    PreferenceStore, Theme, ThemeContext, ThemeController,
};
