//! Angle ⇄ time conversion
//!
//! Clock-face angles are degrees in `[0, 360)`, 0° at 12 o'clock and
//! increasing clockwise. All conversions are stateless; boundary crossings
//! between successive samples are the business of [`crate::rollover`].
//!
//! Rounding is half-up everywhere, so an angle exactly between two ticks
//! resolves to the higher tick.

use core::f32::consts::PI;

use libm::{atan2f, floorf, fmodf};

use crate::time::Time;

/// Full turn in degrees
pub const FULL_TURN: f32 = 360.0;

/// Hour hand travel per hour
pub const DEGREES_PER_HOUR: f32 = 30.0;

/// Minute hand travel per minute
pub const DEGREES_PER_MINUTE: f32 = 6.0;

/// Second hand travel per second
pub const DEGREES_PER_SECOND: f32 = 6.0;

/// Hour hand travel per minute of the hour
pub const HOUR_HAND_DEGREES_PER_MINUTE: f32 = 0.5;

/// Minutes in half a day (one full sweep of the hour hand)
const MINUTES_PER_HALF_DAY: u32 = 720;

/// Quarter turn between screen atan2 (0° = right) and the dial (0° = up)
const SCREEN_TO_DIAL_OFFSET: f32 = 90.0;

/// Normalize any finite angle into `[0, 360)`
pub fn normalize(angle: f32) -> f32 {
    let wrapped = fmodf(angle, FULL_TURN);
    let positive = if wrapped < 0.0 {
        wrapped + FULL_TURN
    } else {
        wrapped
    };
    // A tiny negative remainder can round up to exactly 360.0
    if positive >= FULL_TURN {
        0.0
    } else {
        positive
    }
}

fn round_half_up(value: f32) -> f32 {
    floorf(value + 0.5)
}

/// Dial angle of a pointer relative to the face center
///
/// Screen y grows downward, which makes screen atan2 run clockwise; the
/// +90° rotation moves 0° from 3 o'clock to 12 o'clock. A pointer exactly
/// on the center reads as 90°.
pub fn angle_from_pointer(pointer_x: f32, pointer_y: f32, center_x: f32, center_y: f32) -> f32 {
    let dx = pointer_x - center_x;
    let dy = pointer_y - center_y;
    let screen_angle = atan2f(dy, dx) * (180.0 / PI);
    normalize(screen_angle + SCREEN_TO_DIAL_OFFSET)
}

/// Minute the minute hand points at (6° per minute)
pub fn angle_to_minute(angle: f32) -> u8 {
    let ticks = round_half_up(normalize(angle) / DEGREES_PER_MINUTE) as u32;
    (ticks % 60) as u8
}

/// Hour (0-11) and minute encoded by the hour hand's angle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HalfDayPosition {
    /// Hour within the half day, 0-11
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
}

/// Decode the hour hand's angle into hour and minute
///
/// The hour hand sweeps 360° per 12 hours, so 1° is 2 minutes.
pub fn hour_and_minute_from_angle(angle: f32) -> HalfDayPosition {
    let total = round_half_up(normalize(angle) * 2.0) as u32 % MINUTES_PER_HALF_DAY;
    HalfDayPosition {
        hour: (total / 60) as u8,
        minute: (total % 60) as u8,
    }
}

/// Hour hand angle for a time; the hand creeps forward with the minutes
pub fn hour_to_angle(hour: u8, minute: u8) -> f32 {
    f32::from(hour % 12) * DEGREES_PER_HOUR + f32::from(minute) * HOUR_HAND_DEGREES_PER_MINUTE
}

/// Minute hand angle
pub fn minute_to_angle(minute: u8) -> f32 {
    f32::from(minute) * DEGREES_PER_MINUTE
}

/// Second hand angle
pub fn second_to_angle(second: u8) -> f32 {
    f32::from(second) * DEGREES_PER_SECOND
}

/// Angles of all three hands, for the rendering layer
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    /// Hand angles showing `time`
    pub fn of(time: &Time) -> Self {
        Self {
            hour: hour_to_angle(time.hours(), time.minutes()),
            minute: minute_to_angle(time.minutes()),
            second: second_to_angle(time.seconds()),
        }
    }
}

/// Bounding circle of the clock face in screen coordinates
///
/// Supplied by the rendering layer. Pointer positions outside the circle
/// are still valid input; only the direction from the center matters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceGeometry {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
}

impl FaceGeometry {
    /// Create from center and radius
    pub const fn new(center_x: f32, center_y: f32, radius: f32) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    /// Derive the face circle from its bounding rectangle
    pub fn from_rect(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            center_x: left + width / 2.0,
            center_y: top + height / 2.0,
            radius: width.min(height) / 2.0,
        }
    }

    /// Dial angle of a pointer position
    pub fn angle_of(&self, x: f32, y: f32) -> f32 {
        angle_from_pointer(x, y, self.center_x, self.center_y)
    }
}
