//! Carousel state and index arithmetic.

use serde::Serialize;

/// Error returned when constructing a carousel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one item")]
    Empty,
}

/// Cursor movement by one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// `+1` or `-1`.
    pub fn offset(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// Maps a keyboard key name to a direction.
    ///
    /// Only `"ArrowRight"` and `"ArrowLeft"` move the cursor.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Direction::Forward),
            "ArrowLeft" => Some(Direction::Backward),
            _ => None,
        }
    }
}

/// Positions around the current item under cyclic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbors {
    pub previous: usize,
    pub current: usize,
    pub next: usize,
}

/// Computes the cyclic neighbours of `current` in a list of `len` items.
///
/// With a single item all three positions are the same index.
///
/// # Panics
///
/// Panics if `len` is zero.
///
/// ```rust
/// use showcase::neighbors_of;
///
/// let n = neighbors_of(0, 5);
/// assert_eq!((n.previous, n.next), (4, 1));
/// ```
pub fn neighbors_of(current: usize, len: usize) -> Neighbors {
    assert!(len > 0, "neighbors_of needs a non-empty list");
    let current = current % len;
    Neighbors {
        previous: (current + len - 1) % len,
        current,
        next: (current + 1) % len,
    }
}

/// An item's visual position relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Previous,
    Current,
    Next,
}

impl Slot {
    /// Stylesheet class for the slot.
    pub fn class(self) -> &'static str {
        match self {
            Slot::Previous => "is-left",
            Slot::Current => "is-center",
            Slot::Next => "is-right",
        }
    }
}

/// A fixed, non-empty list of items with one current position.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    cursor: usize,
    hovering: bool,
}

impl<T> Carousel<T> {
    /// Creates a carousel positioned on the first item.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Empty`] if `items` is empty.
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            items,
            cursor: 0,
            hovering: false,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> &T {
        &self.items[self.cursor]
    }

    /// Jumps to `index mod len`; negative indices count from the end.
    pub fn select(&mut self, index: i64) -> usize {
        self.cursor = self.wrap(index);
        self.cursor
    }

    /// Moves one position, wrapping at either end.
    pub fn advance(&mut self, direction: Direction) -> usize {
        self.cursor = self.wrap(self.cursor as i64 + direction.offset());
        self.cursor
    }

    pub fn neighbors(&self) -> Neighbors {
        neighbors_of(self.cursor, self.len())
    }

    /// Classifies `index` relative to the cursor.
    ///
    /// The current position wins when neighbours coincide with it (one item),
    /// and "previous" wins over "next" when they coincide (two items).
    pub fn slot(&self, index: usize) -> Option<Slot> {
        let n = self.neighbors();
        if index == n.current {
            Some(Slot::Current)
        } else if index == n.previous {
            Some(Slot::Previous)
        } else if index == n.next {
            Some(Slot::Next)
        } else {
            None
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Updates the hover flag, returning whether it changed.
    pub fn set_hovering(&mut self, hovering: bool) -> bool {
        let changed = self.hovering != hovering;
        self.hovering = hovering;
        changed
    }

    fn wrap(&self, index: i64) -> usize {
        index.rem_euclid(self.len() as i64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn five() -> Carousel<&'static str> {
        Carousel::new(vec!["a", "b", "c", "d", "e"]).unwrap()
    }

    #[test]
    fn test_empty_rejected() {
        let result: Result<Carousel<u8>, _> = Carousel::new(vec![]);
        assert_eq!(result.unwrap_err(), CarouselError::Empty);
    }

    #[test]
    fn test_neighbors_at_edges() {
        assert_eq!(
            neighbors_of(0, 5),
            Neighbors {
                previous: 4,
                current: 0,
                next: 1
            }
        );
        assert_eq!(
            neighbors_of(4, 5),
            Neighbors {
                previous: 3,
                current: 4,
                next: 0
            }
        );
    }

    #[test]
    fn test_single_item_self_neighboring() {
        let mut carousel = Carousel::new(vec!["only"]).unwrap();
        let n = carousel.neighbors();
        assert_eq!((n.previous, n.current, n.next), (0, 0, 0));

        assert_eq!(carousel.advance(Direction::Forward), 0);
        assert_eq!(carousel.advance(Direction::Backward), 0);
        assert_eq!(carousel.select(-7), 0);
        assert_eq!(carousel.slot(0), Some(Slot::Current));
    }

    #[test]
    fn test_backward_from_zero_wraps() {
        let mut carousel = five();
        assert_eq!(carousel.advance(Direction::Backward), 4);
    }

    #[test]
    fn test_select_wraps() {
        let mut carousel = five();
        assert_eq!(carousel.select(7), 2);
        assert_eq!(carousel.select(-1), 4);
        assert_eq!(carousel.select(5), 0);
        assert_eq!(*carousel.current(), "a");
    }

    #[test]
    fn test_slots_classify_three_cards() {
        let mut carousel = five();
        carousel.select(2);

        assert_eq!(carousel.slot(1), Some(Slot::Previous));
        assert_eq!(carousel.slot(2), Some(Slot::Current));
        assert_eq!(carousel.slot(3), Some(Slot::Next));
        assert_eq!(carousel.slot(0), None);
        assert_eq!(carousel.slot(4), None);
    }

    #[test]
    fn test_two_items_previous_wins() {
        let carousel = Carousel::new(vec![1, 2]).unwrap();
        assert_eq!(carousel.slot(0), Some(Slot::Current));
        assert_eq!(carousel.slot(1), Some(Slot::Previous));
    }

    #[test]
    fn test_slot_classes() {
        assert_eq!(Slot::Previous.class(), "is-left");
        assert_eq!(Slot::Current.class(), "is-center");
        assert_eq!(Slot::Next.class(), "is-right");
    }

    #[test]
    fn test_keys() {
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Forward));
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Backward));
        assert_eq!(Direction::from_key("ArrowUp"), None);
        assert_eq!(Direction::from_key("Enter"), None);
    }

    #[test]
    fn test_set_hovering_reports_change() {
        let mut carousel = five();
        assert!(carousel.set_hovering(true));
        assert!(!carousel.set_hovering(true));
        assert!(carousel.is_hovering());
        assert!(carousel.set_hovering(false));
    }

    proptest! {
        #[test]
        fn prop_repeated_advance_is_modulo(len in 1usize..12, k in -60i64..60) {
            let mut carousel = Carousel::new(vec![(); len]).unwrap();
            let direction = if k >= 0 { Direction::Forward } else { Direction::Backward };
            for _ in 0..k.unsigned_abs() {
                carousel.advance(direction);
            }
            prop_assert_eq!(carousel.cursor() as i64, k.rem_euclid(len as i64));
        }

        #[test]
        fn prop_cursor_stays_in_range(len in 1usize..12, index in any::<i64>()) {
            let mut carousel = Carousel::new(vec![(); len]).unwrap();
            prop_assert!(carousel.select(index) < len);
        }

        #[test]
        fn prop_neighbors_are_adjacent(len in 1usize..12, current in 0usize..12) {
            let n = neighbors_of(current, len);
            prop_assert_eq!((n.previous + 1) % len, n.current);
            prop_assert_eq!((n.current + 1) % len, n.next);
        }
    }
}
