//! A carousel shared between event handlers and the autoplay task.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::trace;

use super::gesture::SwipeTracker;
use super::state::{Carousel, Direction, Neighbors};

struct Inner<T> {
    carousel: Mutex<Carousel<T>>,
    swipe: Mutex<SwipeTracker>,
    cursor: watch::Sender<usize>,
    steps: watch::Sender<u64>,
}

/// Cloneable handle to one carousel.
///
/// Every mutation happens under a single lock and publishes the resulting
/// cursor, so the autoplay timer, clicks, keys and swipes all go through the
/// same wraparound rule. Touch input goes through a [`SwipeTracker`] owned
/// by the handle.
pub struct SharedCarousel<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for SharedCarousel<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedCarousel<T> {
    /// Wraps `carousel` with the default swipe threshold.
    pub fn new(carousel: Carousel<T>) -> Self {
        Self::with_swipe(carousel, SwipeTracker::default())
    }

    /// Wraps `carousel`, recognising swipes longer than `threshold` pixels.
    pub fn with_swipe_threshold(carousel: Carousel<T>, threshold: f64) -> Self {
        Self::with_swipe(carousel, SwipeTracker::new(threshold))
    }

    fn with_swipe(carousel: Carousel<T>, swipe: SwipeTracker) -> Self {
        let (cursor, _) = watch::channel(carousel.cursor());
        let (steps, _) = watch::channel(0);
        Self {
            inner: Arc::new(Inner {
                carousel: Mutex::new(carousel),
                swipe: Mutex::new(swipe),
                cursor,
                steps,
            }),
        }
    }

    pub fn cursor(&self) -> usize {
        self.inner.carousel.lock().cursor()
    }

    pub fn neighbors(&self) -> Neighbors {
        self.inner.carousel.lock().neighbors()
    }

    pub fn is_hovering(&self) -> bool {
        self.inner.carousel.lock().is_hovering()
    }

    /// Runs `f` against the locked carousel.
    pub fn with<R>(&self, f: impl FnOnce(&Carousel<T>) -> R) -> R {
        f(&self.inner.carousel.lock())
    }

    /// Manual selection, e.g. clicking a card or a dot.
    pub fn select(&self, index: i64) -> usize {
        self.update(|carousel| carousel.select(index))
    }

    pub fn advance(&self, direction: Direction) -> usize {
        self.update(|carousel| carousel.advance(direction))
    }

    /// Handles a key press; returns whether the key moved the cursor.
    pub fn handle_key(&self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.advance(direction);
                true
            }
            None => false,
        }
    }

    pub fn swipe_threshold(&self) -> f64 {
        self.inner.swipe.lock().threshold()
    }

    /// A finger touched down at horizontal position `x`.
    pub fn touch_start(&self, x: f64) {
        self.inner.swipe.lock().touch_start(x);
    }

    /// The finger lifted at `x`; returns whether the swipe moved the cursor.
    pub fn touch_end(&self, x: f64) -> bool {
        let direction = self.inner.swipe.lock().touch_end(x);
        match direction {
            Some(direction) => {
                self.advance(direction);
                true
            }
            None => false,
        }
    }

    pub fn touch_cancel(&self) {
        self.inner.swipe.lock().cancel();
    }

    /// Receives the cursor after every change.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.inner.cursor.subscribe()
    }

    /// Receives a running count of moves, including ones that leave the
    /// cursor in place (any move on a single-item carousel).
    pub fn subscribe_steps(&self) -> watch::Receiver<u64> {
        self.inner.steps.subscribe()
    }

    pub(crate) fn set_hovering(&self, hovering: bool) -> bool {
        self.inner.carousel.lock().set_hovering(hovering)
    }

    fn update(&self, f: impl FnOnce(&mut Carousel<T>) -> usize) -> usize {
        let mut carousel = self.inner.carousel.lock();
        let before = carousel.cursor();
        let after = f(&mut carousel);
        if before != after {
            trace!(from = before, to = after, "carousel moved");
        }
        self.inner.cursor.send_if_modified(|cursor| {
            let changed = *cursor != after;
            *cursor = after;
            changed
        });
        self.inner.steps.send_modify(|steps| *steps += 1);
        after
    }
}

impl<T> std::fmt::Debug for SharedCarousel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedCarousel")
            .field("cursor", &self.cursor())
            .finish_non_exhaustive()
    }
}
