//! Light-schedule window computation.
//!
//! A project's lamps are on while the current time-of-day sits inside its
//! configured `[start, end]` window, both endpoints inclusive.

use chrono::NaiveTime;

/// Whether `now` falls within `[start, end]`.
///
/// A window with `start > end` is empty and never matches; schedules that
/// span midnight are stored as two projects.
pub fn window_contains(start: NaiveTime, end: NaiveTime, now: NaiveTime) -> bool {
    start <= now && now <= end
}
