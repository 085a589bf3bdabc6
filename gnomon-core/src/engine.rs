//! Stateful clock engine
//!
//! One `ClockEngine` backs one widget instance. It owns the time, the
//! interaction state, both rollover trackers and the inline edit session,
//! and is the only place any of them change.
//!
//! Every external change to the time (tick, edit, reset, drag start)
//! re-seeds the trackers, so the first drag sample is always compared
//! against the hand position the user actually sees.

use crate::angle::{angle_to_minute, FaceGeometry};
use crate::rollover::{HourHandTracker, MinuteHandTracker};
use crate::state::{DragState, Event, Hand, State};
use crate::text::{commit_text, fill_edit_text, format_time, CommitError, EditText, TimeText};
use crate::time::{HourCycle, Meridiem, Time};

/// How the digital readout is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayOptions {
    /// 12-hour or 24-hour readout
    pub cycle: HourCycle,
    /// Whether the readout includes seconds
    pub show_seconds: bool,
}

impl DisplayOptions {
    /// Create display options
    pub const fn new(cycle: HourCycle, show_seconds: bool) -> Self {
        Self {
            cycle,
            show_seconds,
        }
    }
}

/// In-progress inline edit
#[derive(Debug, Clone, PartialEq, Eq)]
struct EditSession {
    buffer: EditText,
    /// Half of the day the typed hour belongs to, fixed when editing began
    meridiem: Meridiem,
    /// Readout format the buffer was seeded with
    options: DisplayOptions,
}

/// Time, drag and edit state of one clock
#[derive(Debug, Clone)]
pub struct ClockEngine {
    time: Time,
    state: State,
    running: bool,
    hour_tracker: HourHandTracker,
    minute_tracker: MinuteHandTracker,
    edit: Option<EditSession>,
    options: DisplayOptions,
}

impl ClockEngine {
    /// Mount a clock showing `now`, running
    pub fn new(now: Time, options: DisplayOptions) -> Self {
        Self {
            time: now,
            state: State::Idle,
            running: true,
            hour_tracker: HourHandTracker::from_time(&now),
            minute_tracker: MinuteHandTracker::from_time(&now),
            edit: None,
            options,
        }
    }

    /// Current time
    pub fn time(&self) -> Time {
        self.time
    }

    /// Current interaction state
    pub fn state(&self) -> State {
        self.state
    }

    /// Which hand is being dragged
    pub fn drag_state(&self) -> DragState {
        self.state.drag_state()
    }

    /// Check if the clock follows the system time
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Readout options
    pub fn options(&self) -> DisplayOptions {
        self.options
    }

    /// Check if the 1-second tick may overwrite the time
    pub fn tick_enabled(&self) -> bool {
        self.running && !self.state.suspends_tick()
    }

    /// Apply a fresh system-clock read
    ///
    /// Ignored unless ticking is enabled. Missed ticks are not replayed;
    /// the next read simply lands on the current time. Returns whether the
    /// time changed.
    pub fn tick(&mut self, now: Time) -> bool {
        if !self.tick_enabled() {
            return false;
        }
        let changed = now != self.time;
        self.set_time(now);
        changed
    }

    /// Grab a hand to start dragging it
    ///
    /// Only possible from idle. Stops the clock so the tick does not fight
    /// the drag after release.
    pub fn grab_hand(&mut self, hand: Hand) -> bool {
        let next = self.state.transition(Event::GrabHand(hand));
        if next == self.state {
            return false;
        }
        self.state = next;
        self.running = false;
        self.sync_trackers();
        true
    }

    /// Move the dragged hand towards a pointer position
    pub fn drag_to(&mut self, x: f32, y: f32, geometry: &FaceGeometry) -> Option<Time> {
        self.drag_to_angle(geometry.angle_of(x, y))
    }

    /// Move the dragged hand to an angle
    ///
    /// Returns the new time, or `None` when no hand is being dragged.
    pub fn drag_to_angle(&mut self, angle: f32) -> Option<Time> {
        let hand = self.state.drag_state().hand()?;
        let time = match hand {
            Hand::Hour => {
                let sample = self.hour_tracker.update(angle, self.time.hours());
                let time = self.time.with_hm(sample.hours, sample.minutes).ok()?;
                self.minute_tracker.sync(&time);
                time
            }
            Hand::Minute => {
                let minute = angle_to_minute(angle);
                let hours = self.minute_tracker.update(minute, self.time.hours());
                let time = self.time.with_hm(hours, minute).ok()?;
                self.hour_tracker.sync(&time);
                time
            }
        };
        self.time = time;
        Some(time)
    }

    /// End a drag on pointer-up, touch-end or touch-cancel
    ///
    /// Returns whether a drag actually ended.
    pub fn release(&mut self, event: Event) -> bool {
        if !event.is_release() || !self.state.is_dragging() {
            return false;
        }
        self.state = self.state.transition(event);
        true
    }

    /// Turn the readout into an edit field seeded with the current time
    ///
    /// Stops the clock and freezes the half of the day that a typed 12-hour
    /// value will be read in. Returns the initial text, or `None` when a
    /// hand is being dragged or an edit is already open.
    pub fn begin_edit(&mut self) -> Option<&str> {
        let next = self.state.transition(Event::BeginEdit);
        if next == self.state {
            return None;
        }
        self.state = next;
        self.running = false;

        let text = format_time(&self.time, self.options.cycle, self.options.show_seconds);
        let mut buffer = EditText::new();
        fill_edit_text(&mut buffer, &text);
        let session = self.edit.insert(EditSession {
            buffer,
            meridiem: self.time.meridiem(),
            options: self.options,
        });
        Some(session.buffer.as_str())
    }

    /// Replace the edit field contents
    ///
    /// Returns `false` when no edit is open.
    pub fn set_edit_text(&mut self, text: &str) -> bool {
        match self.edit.as_mut() {
            Some(session) => {
                fill_edit_text(&mut session.buffer, text);
                true
            }
            None => false,
        }
    }

    /// Current edit field contents
    pub fn edit_text(&self) -> Option<&str> {
        self.edit.as_ref().map(|session| session.buffer.as_str())
    }

    /// Parse and apply the edit field
    ///
    /// The text is read in the format it was seeded with, even if the
    /// display options changed meanwhile. The edit ends whether or not the
    /// text is valid. On failure the time is left unchanged.
    pub fn commit_edit(&mut self) -> Result<Time, CommitError> {
        let session = self.edit.take().ok_or(CommitError::NotEditing)?;
        self.state = self.state.transition(Event::CommitEdit);

        let time = commit_text(&session.buffer, session.options, session.meridiem)?;
        self.set_time(time);
        Ok(time)
    }

    /// Close the edit field without changing the time
    pub fn cancel_edit(&mut self) -> bool {
        if self.edit.take().is_none() {
            return false;
        }
        self.state = self.state.transition(Event::CancelEdit);
        true
    }

    /// Start or stop following the system time
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Toggle following the system time, returning the new value
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Jump back to the system time and resume running
    ///
    /// An open edit is discarded. A drag in progress keeps going from the
    /// new time.
    pub fn reset_to(&mut self, now: Time) {
        self.cancel_edit();
        self.running = true;
        self.set_time(now);
    }

    /// Select 12-hour or 24-hour display
    pub fn set_hour_cycle(&mut self, cycle: HourCycle) {
        self.options.cycle = cycle;
    }

    /// Switch between 12-hour and 24-hour display
    pub fn toggle_hour_cycle(&mut self) -> HourCycle {
        self.options.cycle = self.options.cycle.toggled();
        self.options.cycle
    }

    /// Show or hide seconds in the readout
    pub fn set_show_seconds(&mut self, show_seconds: bool) {
        self.options.show_seconds = show_seconds;
    }

    /// Toggle seconds in the readout, returning the new value
    pub fn toggle_show_seconds(&mut self) -> bool {
        self.options.show_seconds = !self.options.show_seconds;
        self.options.show_seconds
    }

    /// AM/PM indicator
    ///
    /// While editing this is the frozen meridiem the commit will use.
    pub fn meridiem(&self) -> Meridiem {
        match &self.edit {
            Some(session) => session.meridiem,
            None => self.time.meridiem(),
        }
    }

    /// Formatted digital readout
    pub fn readout(&self) -> TimeText {
        format_time(&self.time, self.options.cycle, self.options.show_seconds)
    }

    fn set_time(&mut self, time: Time) {
        self.time = time;
        self.sync_trackers();
    }

    fn sync_trackers(&mut self) {
        self.hour_tracker.sync(&self.time);
        self.minute_tracker.sync(&self.time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{hour_to_angle, minute_to_angle};
    use crate::text::ParseError;
    use proptest::prelude::*;

    fn t(h: u8, m: u8, s: u8) -> Time {
        Time::new(h, m, s).unwrap()
    }

    fn engine_at(h: u8, m: u8, s: u8) -> ClockEngine {
        ClockEngine::new(t(h, m, s), DisplayOptions::new(HourCycle::H12, false))
    }

    #[test]
    fn test_mount() {
        let engine = engine_at(10, 30, 15);
        assert_eq!(engine.time(), t(10, 30, 15));
        assert_eq!(engine.state(), State::Idle);
        assert!(engine.is_running());
        assert!(engine.tick_enabled());
        assert_eq!(engine.readout().as_str(), "10:30");
    }

    #[test]
    fn test_tick_applies_fresh_read() {
        let mut engine = engine_at(10, 30, 15);
        assert!(engine.tick(t(10, 30, 16)));
        assert!(!engine.tick(t(10, 30, 16)));
        // A late tick lands on the current time, nothing replayed
        assert!(engine.tick(t(10, 30, 20)));
        assert_eq!(engine.time(), t(10, 30, 20));
    }

    #[test]
    fn test_tick_gating() {
        let mut engine = engine_at(10, 30, 15);
        engine.set_running(false);
        assert!(!engine.tick(t(11, 0, 0)));

        let mut engine = engine_at(10, 30, 15);
        engine.grab_hand(Hand::Minute);
        engine.set_running(true);
        assert!(!engine.tick_enabled());
        assert!(!engine.tick(t(11, 0, 0)));
        engine.release(Event::PointerUp);
        assert!(engine.tick(t(11, 0, 0)));

        let mut engine = engine_at(10, 30, 15);
        engine.begin_edit();
        engine.set_running(true);
        assert!(!engine.tick(t(11, 0, 0)));
        assert_eq!(engine.time(), t(10, 30, 15));
    }

    #[test]
    fn test_grab_stops_clock() {
        let mut engine = engine_at(10, 30, 15);
        assert!(engine.grab_hand(Hand::Hour));
        assert!(!engine.is_running());
        assert_eq!(engine.drag_state(), DragState::DraggingHour);
        assert!(!engine.grab_hand(Hand::Minute));
        assert!(engine.release(Event::TouchCancel));
        assert_eq!(engine.state(), State::Idle);
        assert!(!engine.is_running());
        assert!(!engine.release(Event::PointerUp));
    }

    #[test]
    fn test_drag_without_grab_is_ignored() {
        let mut engine = engine_at(10, 30, 15);
        assert_eq!(engine.drag_to_angle(90.0), None);
        assert_eq!(engine.time(), t(10, 30, 15));
    }

    #[test]
    fn test_minute_drag_rolls_hour_forward() {
        let mut engine = engine_at(23, 58, 0);
        engine.grab_hand(Hand::Minute);
        assert_eq!(engine.drag_to_angle(minute_to_angle(59)), Some(t(23, 59, 0)));
        assert_eq!(engine.drag_to_angle(minute_to_angle(2)), Some(t(0, 2, 0)));
    }

    #[test]
    fn test_minute_drag_rolls_hour_back() {
        let mut engine = engine_at(0, 2, 0);
        engine.grab_hand(Hand::Minute);
        assert_eq!(engine.drag_to_angle(minute_to_angle(58)), Some(t(23, 58, 0)));
    }

    #[test]
    fn test_minute_drag_within_hour() {
        let mut engine = engine_at(9, 30, 45);
        engine.grab_hand(Hand::Minute);
        assert_eq!(engine.drag_to_angle(minute_to_angle(35)), Some(t(9, 35, 45)));
    }

    #[test]
    fn test_hour_drag_crosses_noon_and_midnight() {
        let mut engine = engine_at(11, 58, 0);
        engine.grab_hand(Hand::Hour);
        assert_eq!(engine.drag_to_angle(1.0).map(|t| t.hours()), Some(12));

        let mut engine = engine_at(23, 58, 0);
        engine.grab_hand(Hand::Hour);
        assert_eq!(engine.drag_to_angle(1.0).map(|t| t.hours()), Some(0));

        let mut engine = engine_at(12, 1, 0);
        engine.grab_hand(Hand::Hour);
        assert_eq!(engine.drag_to_angle(359.0).map(|t| t.hours()), Some(11));
    }

    #[test]
    fn test_hour_drag_keeps_half_of_day() {
        let mut engine = engine_at(15, 0, 0);
        engine.grab_hand(Hand::Hour);
        assert_eq!(engine.drag_to_angle(hour_to_angle(4, 30)), Some(t(16, 30, 0)));
    }

    #[test]
    fn test_drag_start_resyncs_after_tick() {
        let mut engine = engine_at(11, 0, 0);
        // Clock ticks to just before noon before the user grabs the hour hand
        engine.tick(t(11, 59, 0));
        engine.grab_hand(Hand::Hour);
        assert_eq!(engine.drag_to_angle(2.0).map(|t| t.hours()), Some(12));
    }

    #[test]
    fn test_hour_then_minute_drag_share_state() {
        let mut engine = engine_at(10, 58, 0);
        engine.grab_hand(Hand::Hour);
        engine.drag_to_angle(hour_to_angle(10, 58));
        engine.release(Event::PointerUp);

        engine.grab_hand(Hand::Minute);
        assert_eq!(engine.drag_to_angle(minute_to_angle(1)), Some(t(11, 1, 0)));
    }

    #[test]
    fn test_edit_commit_twelve_hour() {
        let mut engine = engine_at(0, 15, 0);
        assert_eq!(engine.begin_edit(), Some("12:15"));
        assert!(!engine.is_running());
        assert!(engine.set_edit_text("12:00"));
        assert_eq!(engine.commit_edit(), Ok(t(0, 0, 0)));
        assert_eq!(engine.state(), State::Idle);
        assert!(!engine.is_running());

        let mut engine = engine_at(14, 0, 0);
        engine.begin_edit();
        engine.set_edit_text("05:00");
        assert_eq!(engine.commit_edit(), Ok(t(17, 0, 0)));

        let mut engine = engine_at(12, 30, 0);
        engine.begin_edit();
        engine.set_edit_text("12:00");
        assert_eq!(engine.commit_edit(), Ok(t(12, 0, 0)));
    }

    #[test]
    fn test_meridiem_frozen_at_edit_start() {
        let mut engine = engine_at(11, 59, 0);
        engine.begin_edit();
        assert_eq!(engine.meridiem(), Meridiem::Am);
        engine.set_edit_text("05:00");
        assert_eq!(engine.commit_edit(), Ok(t(5, 0, 0)));
    }

    #[test]
    fn test_display_change_during_edit_keeps_seeded_format() {
        let mut engine = engine_at(14, 0, 0);
        assert_eq!(engine.begin_edit(), Some("02:00"));
        engine.toggle_hour_cycle();
        assert_eq!(engine.commit_edit(), Ok(t(14, 0, 0)));

        let mut engine = engine_at(14, 0, 0);
        engine.begin_edit();
        engine.toggle_show_seconds();
        assert_eq!(engine.commit_edit(), Ok(t(14, 0, 0)));
        assert_eq!(engine.readout().as_str(), "02:00:00");
    }

    #[test]
    fn test_invalid_commit_ends_edit() {
        let mut engine = engine_at(9, 0, 0);
        engine.begin_edit();
        engine.set_edit_text("25:00");
        assert_eq!(
            engine.commit_edit(),
            Err(CommitError::Parse(ParseError::HourOutOfRange))
        );
        assert_eq!(engine.state(), State::Idle);
        assert_eq!(engine.edit_text(), None);
        assert_eq!(engine.time(), t(9, 0, 0));
        assert_eq!(engine.commit_edit(), Err(CommitError::NotEditing));
    }

    #[test]
    fn test_cancel_edit() {
        let mut engine = engine_at(9, 0, 0);
        assert!(!engine.cancel_edit());
        engine.begin_edit();
        engine.set_edit_text("10:00");
        assert!(engine.cancel_edit());
        assert_eq!(engine.state(), State::Idle);
        assert_eq!(engine.time(), t(9, 0, 0));
    }

    #[test]
    fn test_edit_and_drag_are_exclusive() {
        let mut engine = engine_at(9, 0, 0);
        engine.grab_hand(Hand::Hour);
        assert_eq!(engine.begin_edit(), None);
        assert!(!engine.set_edit_text("10:00"));
        engine.release(Event::TouchEnd);

        engine.begin_edit();
        assert!(!engine.grab_hand(Hand::Hour));
        assert_eq!(engine.begin_edit(), None);
    }

    #[test]
    fn test_reset_resumes_and_discards_edit() {
        let mut engine = engine_at(9, 0, 0);
        engine.begin_edit();
        engine.reset_to(t(13, 45, 10));
        assert!(engine.is_running());
        assert_eq!(engine.state(), State::Idle);
        assert_eq!(engine.time(), t(13, 45, 10));
        assert!(engine.tick(t(13, 45, 11)));
    }

    #[test]
    fn test_display_toggles() {
        let mut engine = engine_at(17, 5, 9);
        assert_eq!(engine.toggle_hour_cycle(), HourCycle::H24);
        assert_eq!(engine.readout().as_str(), "17:05");
        assert!(engine.toggle_show_seconds());
        assert_eq!(engine.readout().as_str(), "17:05:09");
        engine.set_hour_cycle(HourCycle::H12);
        assert_eq!(engine.readout().as_str(), "05:05:09");
        assert_eq!(engine.meridiem(), Meridiem::Pm);
        assert!(!engine.toggle_running());
    }

    #[test]
    fn test_drag_to_pointer() {
        let geometry = FaceGeometry::new(100.0, 100.0, 90.0);
        let mut engine = engine_at(8, 10, 0);
        engine.grab_hand(Hand::Minute);
        // Straight right of center is the 15 minute mark
        assert_eq!(engine.drag_to(180.0, 100.0, &geometry), Some(t(8, 15, 0)));
    }

    proptest! {
        #[test]
        fn minute_drag_without_crossing_keeps_hour(
            h in 0u8..24,
            from in 6u8..54,
            to in 6u8..54,
        ) {
            let mut engine = engine_at(h, from, 0);
            engine.grab_hand(Hand::Minute);
            let time = engine.drag_to_angle(minute_to_angle(to)).unwrap();
            prop_assert_eq!((time.hours(), time.minutes()), (h, to));
        }

        #[test]
        fn hour_drag_in_place_is_stable(h in 0u8..24, m in 0u8..60) {
            let mut engine = engine_at(h, m, 0);
            engine.grab_hand(Hand::Hour);
            let time = engine.drag_to_angle(hour_to_angle(h, m)).unwrap();
            prop_assert_eq!((time.hours(), time.minutes()), (h, m));
        }
    }
}
