//! Ambient color-scheme detection.

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use super::preference::Theme;

type ModeDetector = fn() -> Theme;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used when no stored preference exists.
///
/// This is useful for testing or when the environment's signal should be
/// ignored in favour of a fixed mode.
///
/// # Example
///
/// ```rust
/// use showcase::{detect_mode, reset_mode_detector, set_mode_detector, Theme};
///
/// set_mode_detector(|| Theme::Dark);
/// assert_eq!(detect_mode(), Theme::Dark);
/// reset_mode_detector();
/// ```
pub fn set_mode_detector(detector: ModeDetector) {
    *MODE_DETECTOR.lock() = detector;
}

/// Restores the operating system detector.
pub fn reset_mode_detector() {
    set_mode_detector(os_mode_detector);
}

/// Returns the environment-derived mode.
pub fn detect_mode() -> Theme {
    let detector = *MODE_DETECTOR.lock();
    detector()
}

fn os_mode_detector() -> Theme {
    match detect_os_mode() {
        OsMode::Dark => Theme::Dark,
        _ => Theme::Light,
    }
}
