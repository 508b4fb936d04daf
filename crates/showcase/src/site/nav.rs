//! Shared navigation chrome.

use serde::Serialize;

use crate::theme::Theme;

/// A top-level page in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub label: &'static str,
}

/// Navigation bar entries, in display order.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/home",
        label: "Home & Portfolio",
    },
    Route {
        path: "/skills",
        label: "Skills & CV",
    },
    Route {
        path: "/about",
        label: "About Me",
    },
    Route {
        path: "/contact",
        label: "Contact",
    },
];

/// Whether `route` should be highlighted while `current` is displayed.
///
/// Child paths keep their parent active: `/about/education` activates `/about`,
/// but `/aboutness` does not.
pub fn is_active(route: &str, current: &str) -> bool {
    current == route
        || current
            .strip_prefix(route)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Whether `path` is taken by a navigation route (or one of its children).
pub fn is_reserved(path: &str) -> bool {
    ROUTES.iter().any(|route| is_active(route.path, path))
}

/// A rendered navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Navigation chrome state for one page view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavBar {
    pub items: Vec<NavItem>,
    pub theme: Theme,
    /// Text of the theme toggle: the mode it switches to.
    pub toggle_label: &'static str,
    /// `aria-pressed` for the toggle.
    pub dark: bool,
}

impl NavBar {
    pub fn new(current: &str, theme: Theme) -> Self {
        let items = ROUTES
            .iter()
            .map(|route| NavItem {
                label: route.label,
                path: route.path,
                active: is_active(route.path, current),
            })
            .collect();
        Self {
            items,
            theme,
            toggle_label: theme.toggle_label(),
            dark: theme.is_dark(),
        }
    }

    pub fn active(&self) -> Option<&NavItem> {
        self.items.iter().find(|item| item.active)
    }
}
