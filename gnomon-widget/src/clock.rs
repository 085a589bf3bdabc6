//! System time of day

use chrono::{Local, Timelike};

use gnomon_core::{Time, TimeSource};

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> Time {
        time_of_day(&Local::now())
    }
}

/// Hours, minutes and seconds of any chrono time value
pub fn time_of_day<T: Timelike>(value: &T) -> Time {
    // Leap seconds are reported through the nanosecond field, so these are
    // always in range
    Time::new(value.hour() as u8, value.minute() as u8, value.second() as u8)
        .unwrap_or(Time::MIDNIGHT)
}
