//! Rotating carousel.
//!
//! This module provides:
//!
//! - [`Carousel`]: The item list, cursor and hover flag
//! - [`Direction`], [`Neighbors`], [`Slot`]: Cursor movement and positional state
//! - [`SwipeTracker`]: Touch-gesture threshold detection
//! - [`SharedCarousel`]: A carousel shared between event handlers and autoplay
//! - [`Autoplay`]: The single repeating timer that advances a shared carousel
//!
//! All cursor arithmetic uses true modulo, so the cursor never leaves
//! `[0, len)` regardless of how it is moved.

mod autoplay;
mod gesture;
mod shared;
mod state;

pub use autoplay::{Autoplay, DEFAULT_INTERVAL};
pub use gesture::{SwipeTracker, DEFAULT_SWIPE_THRESHOLD};
pub use shared::SharedCarousel;
pub use state::{neighbors_of, Carousel, CarouselError, Direction, Neighbors, Slot};
