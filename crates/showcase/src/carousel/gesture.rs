//! Touch swipe detection.

use super::state::Direction;

/// Horizontal distance, in pixels, a swipe must exceed to count.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 40.0;

/// Turns a touch-start/touch-end pair into at most one cursor movement.
///
/// A leftward swipe (negative delta) moves forward and a rightward swipe
/// moves backward. Deltas whose magnitude does not exceed the threshold
/// are ignored.
///
/// ```rust
/// use showcase::{Direction, SwipeTracker};
///
/// let mut swipe = SwipeTracker::default();
/// swipe.touch_start(200.0);
/// assert_eq!(swipe.touch_end(120.0), Some(Direction::Forward));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.abs(),
            start_x: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Records where a touch began, replacing any unfinished touch.
    pub fn touch_start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finishes the touch started by [`touch_start`](Self::touch_start).
    ///
    /// Returns `None` for sub-threshold movement or when no touch was started.
    pub fn touch_end(&mut self, x: f64) -> Option<Direction> {
        let start = self.start_x.take()?;
        let dx = x - start;
        if dx < -self.threshold {
            Some(Direction::Forward)
        } else if dx > self.threshold {
            Some(Direction::Backward)
        } else {
            None
        }
    }

    /// Abandons an in-progress touch.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(dx: f64) -> Option<Direction> {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(500.0);
        tracker.touch_end(500.0 + dx)
    }

    #[test]
    fn test_exact_threshold_is_noop() {
        assert_eq!(swipe(40.0), None);
        assert_eq!(swipe(-40.0), None);
    }

    #[test]
    fn test_past_threshold_moves() {
        assert_eq!(swipe(-41.0), Some(Direction::Forward));
        assert_eq!(swipe(41.0), Some(Direction::Backward));
    }

    #[test]
    fn test_small_movement_ignored() {
        assert_eq!(swipe(0.0), None);
        assert_eq!(swipe(12.5), None);
    }

    #[test]
    fn test_end_without_start() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.touch_end(10.0), None);
    }

    #[test]
    fn test_start_consumed_by_end() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(300.0);
        assert_eq!(tracker.touch_end(100.0), Some(Direction::Forward));
        assert_eq!(tracker.touch_end(100.0), None);
    }

    #[test]
    fn test_cancel_discards_start() {
        let mut tracker = SwipeTracker::new(10.0);
        tracker.touch_start(0.0);
        tracker.cancel();
        assert_eq!(tracker.touch_end(-100.0), None);
    }

    #[test]
    fn test_negative_threshold_normalised() {
        let tracker = SwipeTracker::new(-25.0);
        assert_eq!(tracker.threshold(), 25.0);
    }
}
