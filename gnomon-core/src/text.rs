//! Digital readout formatting and parsing
//!
//! Converts between the canonical 24-hour `Time` and the text shown in (and
//! typed into) the inline edit field. The edit field carries no AM/PM
//! marker; in 12-hour mode the half of the day comes from the meridiem that
//! was frozen when editing began.

use core::fmt::Write;

use heapless::String;

use crate::engine::DisplayOptions;
use crate::time::{HourCycle, Meridiem, Time, TimeError, HOURS_PER_DAY, HOURS_PER_HALF_DAY};

/// Capacity of a formatted readout ("HH:MM:SS")
pub const TIME_TEXT_LEN: usize = 8;

/// Capacity of the inline edit buffer
pub const EDIT_TEXT_LEN: usize = 32;

/// Formatted readout
pub type TimeText = String<TIME_TEXT_LEN>;

/// Inline edit buffer
pub type EditText = String<EDIT_TEXT_LEN>;

/// Reasons a readout string was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Wrong number of groups, empty group, non-digit, or more than 2 digits
    Malformed,
    /// Hour literal outside the accepted range
    HourOutOfRange,
    /// Minute above 59
    MinuteOutOfRange,
    /// Second above 59
    SecondOutOfRange,
}

/// Reasons an edit could not be committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommitError {
    /// No edit in progress
    NotEditing,
    /// Text did not parse
    Parse(ParseError),
    /// Parsed fields did not form a valid time after 12-hour conversion
    Time(TimeError),
}

impl From<ParseError> for CommitError {
    fn from(e: ParseError) -> Self {
        CommitError::Parse(e)
    }
}

impl From<TimeError> for CommitError {
    fn from(e: TimeError) -> Self {
        CommitError::Time(e)
    }
}

/// Fields read from a readout string, hour still as typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParsedTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

/// Hour as displayed: unchanged in 24-hour mode, 1-12 in 12-hour mode
pub const fn display_hour(hours: u8, cycle: HourCycle) -> u8 {
    match cycle {
        HourCycle::H24 => hours,
        HourCycle::H12 => {
            if hours % HOURS_PER_HALF_DAY == 0 {
                HOURS_PER_HALF_DAY
            } else {
                hours % HOURS_PER_HALF_DAY
            }
        }
    }
}

/// Zero-padded `HH:MM` or `HH:MM:SS`
pub fn format_time(time: &Time, cycle: HourCycle, show_seconds: bool) -> TimeText {
    let mut text = TimeText::new();
    let hour = display_hour(time.hours(), cycle);
    // Eight bytes always fit
    let _ = if show_seconds {
        write!(text, "{:02}:{:02}:{:02}", hour, time.minutes(), time.seconds())
    } else {
        write!(text, "{:02}:{:02}", hour, time.minutes())
    };
    text
}

/// Parse `H:M` / `HH:MM` (or with `:SS` when `show_seconds`)
///
/// Each group is one or two ASCII digits. Hours above 23, minutes above 59
/// and seconds above 59 are rejected. Seconds read as 0 when not shown.
pub fn parse_time_string(text: &str, show_seconds: bool) -> Result<ParsedTime, ParseError> {
    let expected = if show_seconds { 3 } else { 2 };
    let mut fields = [0u8; 3];
    let mut count = 0;

    for group in text.split(':') {
        if count == expected {
            return Err(ParseError::Malformed);
        }
        fields[count] = parse_group(group)?;
        count += 1;
    }
    if count != expected {
        return Err(ParseError::Malformed);
    }

    let [hours, minutes, seconds] = fields;
    if hours >= HOURS_PER_DAY {
        return Err(ParseError::HourOutOfRange);
    }
    if minutes > 59 {
        return Err(ParseError::MinuteOutOfRange);
    }
    if seconds > 59 {
        return Err(ParseError::SecondOutOfRange);
    }

    Ok(ParsedTime {
        hours,
        minutes,
        seconds,
    })
}

fn parse_group(group: &str) -> Result<u8, ParseError> {
    let digits = group.as_bytes();
    if digits.is_empty() || digits.len() > 2 || !digits.iter().all(u8::is_ascii_digit) {
        return Err(ParseError::Malformed);
    }
    Ok(digits.iter().fold(0, |acc, d| acc * 10 + (d - b'0')))
}

/// Convert a typed hour to 24-hour form
///
/// 24-hour mode passes the literal through. In 12-hour mode 12 AM is 0,
/// any other PM hour gains 12, and everything else is unchanged. The result
/// is not range checked; PM literals above 11 overflow the day.
pub const fn to_24_hour(literal_hour: u8, meridiem: Meridiem, cycle: HourCycle) -> u8 {
    if cycle.is_24_hour() {
        return literal_hour;
    }
    match meridiem {
        Meridiem::Am if literal_hour == HOURS_PER_HALF_DAY => 0,
        Meridiem::Pm if literal_hour != HOURS_PER_HALF_DAY => literal_hour + HOURS_PER_HALF_DAY,
        _ => literal_hour,
    }
}

/// Turn edit text into the time to commit
///
/// In 12-hour mode the literal hour must be 1-23; 0 has no 12-hour
/// spelling. A PM literal that overflows the day is rejected rather than
/// wrapped.
pub fn commit_text(
    text: &str,
    options: DisplayOptions,
    meridiem: Meridiem,
) -> Result<Time, CommitError> {
    let parsed = parse_time_string(text, options.show_seconds)?;
    if !options.cycle.is_24_hour() && parsed.hours == 0 {
        return Err(CommitError::Parse(ParseError::HourOutOfRange));
    }
    let hours = to_24_hour(parsed.hours, meridiem, options.cycle);
    Ok(Time::new(hours, parsed.minutes, parsed.seconds)?)
}

/// Replace the contents of an edit buffer, truncating at a char boundary
///
/// Anything longer than the buffer is far longer than any readout, so the
/// truncated text still fails to parse.
pub fn fill_edit_text(buffer: &mut EditText, text: &str) {
    buffer.clear();
    let mut end = text.len().min(EDIT_TEXT_LEN);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let _ = buffer.push_str(&text[..end]);
}
