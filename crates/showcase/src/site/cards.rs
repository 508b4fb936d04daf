//! Expandable about-cards.

use serde::{Deserialize, Serialize};

/// A titled card whose body is hidden until expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutCard {
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    /// Whether the card starts expanded.
    #[serde(default)]
    pub open: bool,
}

impl AboutCard {
    pub fn new(title: impl Into<String>, paragraphs: Vec<String>) -> Self {
        Self {
            title: title.into(),
            paragraphs,
            open: false,
        }
    }

    /// Flips the expanded state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Label of the expand/collapse button.
    pub fn toggle_label(&self) -> &'static str {
        if self.open {
            "Hide"
        } else {
            "More"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_label() {
        let mut card = AboutCard::new("EDUCATION", vec!["A levels".into()]);
        assert_eq!(card.toggle_label(), "More");

        assert!(card.toggle());
        assert_eq!(card.toggle_label(), "Hide");

        assert!(!card.toggle());
        assert_eq!(card.toggle_label(), "More");
    }

    #[test]
    fn test_deserialize_defaults_closed() {
        let card: AboutCard = serde_yaml::from_str("title: SPORT\n").unwrap();
        assert!(!card.open);
        assert!(card.paragraphs.is_empty());
    }
}
