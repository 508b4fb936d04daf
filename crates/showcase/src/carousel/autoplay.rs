//! Timer-driven autoplay.
//!
//! Autoplay is one tokio task per carousel that advances the cursor on a
//! fixed interval. The task is started and cancelled at lifecycle
//! boundaries:
//!
//! | Event        | Effect                                  |
//! |--------------|-----------------------------------------|
//! | mount        | [`Autoplay::start`]                     |
//! | hover enter  | hover flag set, task cancelled          |
//! | hover leave  | hover flag cleared, task restarted      |
//! | unmount      | [`Autoplay::stop`], or dropping the value |
//!
//! Starting always cancels the previous task first, so at most one timer
//! advances the carousel. Cancelling an already cancelled task does nothing.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use super::shared::SharedCarousel;
use super::state::Direction;

/// Time between automatic advances.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5500);

/// Owns the autoplay task for one carousel.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use showcase::{Autoplay, Carousel, SharedCarousel};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let carousel = SharedCarousel::new(Carousel::new(vec!["a", "b", "c"]).unwrap());
/// let mut autoplay = Autoplay::new(carousel.clone(), Duration::from_millis(5500));
/// assert!(autoplay.start());
/// autoplay.hover_enter();
/// assert!(!autoplay.is_running());
/// # }
/// ```
pub struct Autoplay<T> {
    carousel: SharedCarousel<T>,
    interval: Duration,
    task: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Autoplay<T> {
    /// Creates a stopped autoplay controller.
    ///
    /// A zero interval is raised to one millisecond.
    pub fn new(carousel: SharedCarousel<T>, interval: Duration) -> Self {
        Self {
            carousel,
            interval: interval.max(Duration::from_millis(1)),
            task: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn carousel(&self) -> &SharedCarousel<T> {
        &self.carousel
    }

    /// Whether a timer task is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// (Re)starts the timer unless the pointer is hovering.
    ///
    /// Any existing task is cancelled first. Returns whether a task is now
    /// running; outside a tokio runtime nothing is scheduled.
    pub fn start(&mut self) -> bool {
        self.stop();

        if self.carousel.is_hovering() {
            return false;
        }

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                warn!(error = %e, "carousel autoplay needs a tokio runtime");
                return false;
            }
        };

        let carousel = self.carousel.clone();
        let period = self.interval;
        self.task = Some(runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                carousel.advance(Direction::Forward);
            }
        }));
        debug!(interval_ms = period.as_millis() as u64, "carousel autoplay started");
        true
    }

    /// Cancels the timer; a no-op when none is running.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("carousel autoplay stopped");
        }
    }

    /// Pointer entered the carousel: pause.
    pub fn hover_enter(&mut self) {
        self.carousel.set_hovering(true);
        self.stop();
    }

    /// Pointer left the carousel: resume.
    pub fn hover_leave(&mut self) -> bool {
        self.carousel.set_hovering(false);
        self.start()
    }
}

impl<T> Drop for Autoplay<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<T> std::fmt::Debug for Autoplay<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autoplay")
            .field("interval", &self.interval)
            .field("scheduled", &self.task.is_some())
            .finish_non_exhaustive()
    }
}
