//! Canonical time-of-day value
//!
//! `Time` is always held in 24-hour form. The 12-hour view and the AM/PM
//! half are derived from `hours` on demand and never stored separately.

use crate::angle::HandAngles;

/// Hours in a full day
pub const HOURS_PER_DAY: u8 = 24;

/// Hours in one AM or PM half
pub const HOURS_PER_HALF_DAY: u8 = 12;

/// Minutes in an hour
pub const MINUTES_PER_HOUR: u8 = 60;

/// Seconds in a minute
pub const SECONDS_PER_MINUTE: u8 = 60;

/// A field was outside its valid range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// Hours not in 0..=23
    HourOutOfRange,
    /// Minutes not in 0..=59
    MinuteOutOfRange,
    /// Seconds not in 0..=59
    SecondOutOfRange,
}

/// Time of day in 24-hour form
///
/// Fields are private so that every value in circulation has passed
/// through [`Time::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Time {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl Time {
    /// 00:00:00
    pub const MIDNIGHT: Time = Time {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// 12:00:00
    pub const NOON: Time = Time {
        hours: 12,
        minutes: 0,
        seconds: 0,
    };

    /// Create a time, validating every field
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, TimeError> {
        if hours >= HOURS_PER_DAY {
            return Err(TimeError::HourOutOfRange);
        }
        if minutes >= MINUTES_PER_HOUR {
            return Err(TimeError::MinuteOutOfRange);
        }
        if seconds >= SECONDS_PER_MINUTE {
            return Err(TimeError::SecondOutOfRange);
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Hours, 0-23
    pub const fn hours(&self) -> u8 {
        self.hours
    }

    /// Minutes, 0-59
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Seconds, 0-59
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Same time with hours and minutes replaced, seconds kept
    pub const fn with_hm(self, hours: u8, minutes: u8) -> Result<Self, TimeError> {
        Self::new(hours, minutes, self.seconds)
    }

    /// Which half of the day this time falls in
    pub const fn meridiem(&self) -> Meridiem {
        Meridiem::of(self.hours)
    }

    /// True before noon
    pub const fn is_am(&self) -> bool {
        self.hours < HOURS_PER_HALF_DAY
    }

    /// Angles of the three hands for this time
    pub fn hand_angles(&self) -> HandAngles {
        HandAngles::of(self)
    }
}

/// AM/PM half of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Meridiem {
    /// 00:00 - 11:59
    Am,
    /// 12:00 - 23:59
    Pm,
}

impl Meridiem {
    /// Half of the day a 24-hour value belongs to
    pub const fn of(hours: u8) -> Self {
        if hours < HOURS_PER_HALF_DAY {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    }

    /// Check if this is the AM half
    pub const fn is_am(&self) -> bool {
        matches!(self, Meridiem::Am)
    }

    /// Readout label
    pub const fn label(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }

    /// Map a half-day hour (0-11) into this half of the full day
    ///
    /// A half-day "12" is accepted too and lands on 0 in the AM half and
    /// 12 in the PM half.
    pub const fn to_full_day(&self, half_day_hour: u8) -> u8 {
        let hour = half_day_hour % HOURS_PER_HALF_DAY;
        match self {
            Meridiem::Am => hour,
            Meridiem::Pm => hour + HOURS_PER_HALF_DAY,
        }
    }
}

/// How the hour field is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HourCycle {
    /// 12-hour readout, hours 0 and 12 both shown as "12"
    #[default]
    H12,
    /// 24-hour readout
    H24,
}

impl HourCycle {
    /// Check if this is the 24-hour cycle
    pub const fn is_24_hour(&self) -> bool {
        matches!(self, HourCycle::H24)
    }

    /// The other cycle
    pub const fn toggled(self) -> Self {
        match self {
            HourCycle::H12 => HourCycle::H24,
            HourCycle::H24 => HourCycle::H12,
        }
    }
}

/// Source of the current wall-clock time of day
pub trait TimeSource {
    /// Read the current local time
    fn now(&self) -> Time;
}

/// Next hour on a 24-hour dial, 23 wraps to 0
pub(crate) const fn next_hour(hours: u8) -> u8 {
    (hours + 1) % HOURS_PER_DAY
}

/// Previous hour on a 24-hour dial, 0 wraps to 23
pub(crate) const fn prev_hour(hours: u8) -> u8 {
    if hours == 0 {
        HOURS_PER_DAY - 1
    } else {
        hours - 1
    }
}
