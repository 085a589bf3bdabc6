//! Rollover tracking for dragged hands
//!
//! A single angle sample cannot tell "moved 10° clockwise" from "moved 350°
//! counter-clockwise". The trackers remember the previous sample and decide
//! whether the hand crossed the 12 o'clock seam, and in which direction.
//!
//! Both detectors are heuristics tuned for interactive pointer sampling:
//!
//! - The hour hand treats any jump of more than half a turn between two
//!   samples as a wrap across 12.
//! - The minute hand treats a move between the last five minutes (55-59)
//!   and the first five (0-5) as a wrap across the hour.
//!
//! On a very slow device or with sparse samples a legitimate move of more
//! than half a turn reads as a wrap in the wrong direction. This is a known
//! approximation, kept as-is.

use libm::fabsf;

use crate::angle::{hour_and_minute_from_angle, hour_to_angle, normalize, HalfDayPosition};
use crate::time::{next_hour, prev_hour, Meridiem, Time, HOURS_PER_DAY};

/// Jump between two hour-hand samples that counts as a wrap
pub const WRAP_THRESHOLD_DEGREES: f32 = 180.0;

/// Distance from the 0/59 seam within which a minute move can be a wrap
pub const SEAM_WINDOW_MINUTES: u8 = 5;

/// Hours and minutes decoded from one hour-hand sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HourSample {
    /// New 24-hour value
    pub hours: u8,
    /// Minute encoded by the hour hand position
    pub minutes: u8,
}

/// Resolve one hour-hand sample against the previous one
///
/// `prev_angle` is the previous normalized sample and `current_hours` the
/// 24-hour value before this update.
pub fn resolve_hour(angle: f32, prev_angle: f32, current_hours: u8) -> HourSample {
    let angle = normalize(angle);
    let prev_angle = normalize(prev_angle);
    let HalfDayPosition { hour, minute } = hour_and_minute_from_angle(angle);
    let meridiem = Meridiem::of(current_hours);

    let crossed_twelve = fabsf(angle - prev_angle) > WRAP_THRESHOLD_DEGREES;

    let hours = if crossed_twelve {
        if prev_angle > WRAP_THRESHOLD_DEGREES && angle < WRAP_THRESHOLD_DEGREES {
            // Clockwise through 12: 11 -> 12 enters PM, 23 -> 0 is midnight
            match current_hours {
                11 => 12,
                23 => 0,
                hours => hours + 1,
            }
        } else if prev_angle < WRAP_THRESHOLD_DEGREES && angle > WRAP_THRESHOLD_DEGREES {
            // Counter-clockwise through 12
            match current_hours {
                12 => 11,
                0 => 23,
                hours => hours - 1,
            }
        } else {
            // Unreachable with both samples normalized; rebuild from the half
            meridiem.to_full_day(hour)
        }
    } else {
        meridiem.to_full_day(hour)
    };

    HourSample {
        hours: hours % HOURS_PER_DAY,
        minutes: minute,
    }
}

/// Rollover state for the hour hand
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HourHandTracker {
    /// Last normalized angle observed for the hour hand
    prev_angle: f32,
}

impl HourHandTracker {
    /// Create a tracker seeded at 12 o'clock
    pub const fn new() -> Self {
        Self { prev_angle: 0.0 }
    }

    /// Create a tracker seeded from where the hour hand shows `time`
    pub fn from_time(time: &Time) -> Self {
        let mut tracker = Self::new();
        tracker.sync(time);
        tracker
    }

    /// Re-seed from the current time after it changed outside a drag sample
    pub fn sync(&mut self, time: &Time) {
        self.prev_angle = normalize(hour_to_angle(time.hours(), time.minutes()));
    }

    /// Previous angle
    pub fn prev_angle(&self) -> f32 {
        self.prev_angle
    }

    /// Apply a new hour-hand sample and remember it
    pub fn update(&mut self, angle: f32, current_hours: u8) -> HourSample {
        let sample = resolve_hour(angle, self.prev_angle, current_hours);
        self.prev_angle = normalize(angle);
        sample
    }
}

/// Direction in which the minute hand crossed the top of the dial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MinuteCrossing {
    /// No crossing
    None,
    /// Clockwise, 59 -> 0: the hour advances
    Forward,
    /// Counter-clockwise, 0 -> 59: the hour goes back
    Backward,
}

/// Classify a minute-hand move between two samples
pub fn minute_crossing(prev_minute: u8, new_minute: u8) -> MinuteCrossing {
    let late = 60 - SEAM_WINDOW_MINUTES;
    if prev_minute >= late && new_minute <= SEAM_WINDOW_MINUTES {
        MinuteCrossing::Forward
    } else if prev_minute <= SEAM_WINDOW_MINUTES && new_minute >= late {
        MinuteCrossing::Backward
    } else {
        MinuteCrossing::None
    }
}

/// Hour after the minute hand moved from `prev_minute` to `new_minute`
pub fn hour_after_minute_move(current_hours: u8, prev_minute: u8, new_minute: u8) -> u8 {
    match minute_crossing(prev_minute, new_minute) {
        MinuteCrossing::Forward => next_hour(current_hours),
        MinuteCrossing::Backward => prev_hour(current_hours),
        MinuteCrossing::None => current_hours,
    }
}

/// Rollover state for the minute hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MinuteHandTracker {
    /// Last minute value observed
    prev_minute: u8,
}

impl MinuteHandTracker {
    /// Create a tracker seeded at minute 0
    pub const fn new() -> Self {
        Self { prev_minute: 0 }
    }

    /// Create a tracker seeded from `time`
    pub fn from_time(time: &Time) -> Self {
        Self {
            prev_minute: time.minutes(),
        }
    }

    /// Re-seed from the current time after it changed outside a drag sample
    pub fn sync(&mut self, time: &Time) {
        self.prev_minute = time.minutes();
    }

    /// Previous minute
    pub fn prev_minute(&self) -> u8 {
        self.prev_minute
    }

    /// Apply a new minute sample, returning the (possibly rolled) hour
    pub fn update(&mut self, minute: u8, current_hours: u8) -> u8 {
        let hours = hour_after_minute_move(current_hours, self.prev_minute, minute);
        self.prev_minute = minute;
        hours
    }
}
