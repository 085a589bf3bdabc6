//! Controller coordinating the clock engine, gestures and configuration
//!
//! The controller is the single owner of widget state. It:
//! - Applies input events to the engine one at a time
//! - Turns touch sequences into swipe shortcuts
//! - Feeds the 1-second tick with a fresh clock read
//! - Builds view snapshots for the renderer

use log::{debug, info, warn};

use gnomon_core::angle::FaceGeometry;
use gnomon_core::config::{ClockConfig, ClockFace, ThemeKey};
use gnomon_core::gesture::{Swipe, SwipeDirection, SwipeTracker};
use gnomon_core::state::Event;
use gnomon_core::{ClockEngine, HourCycle, TimeSource};

use crate::input::InputEvent;
use crate::view::ClockView;

/// Face used until the renderer reports its layout
pub const DEFAULT_FACE: FaceGeometry = FaceGeometry::new(150.0, 150.0, 140.0);

/// Widget state for one clock
pub struct Controller<C> {
    engine: ClockEngine,
    swipe: SwipeTracker,
    config: ClockConfig,
    geometry: FaceGeometry,
    clock: C,
}

impl<C: TimeSource> Controller<C> {
    /// Mount a clock at the current time
    pub fn new(config: ClockConfig, clock: C) -> Self {
        let mut engine = ClockEngine::new(clock.now(), config.display_options());
        engine.set_running(config.running);
        Self {
            engine,
            swipe: SwipeTracker::new(config.swipe),
            config,
            geometry: DEFAULT_FACE,
            clock,
        }
    }

    /// Clock engine
    pub fn engine(&self) -> &ClockEngine {
        &self.engine
    }

    /// Current configuration, including theme and display changes
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Face geometry used for pointer input
    pub fn geometry(&self) -> FaceGeometry {
        self.geometry
    }

    /// Apply one input event, returning whether the view changed
    pub fn process_input(&mut self, input: InputEvent) -> bool {
        match input {
            InputEvent::GrabHand(hand) => {
                let grabbed = self.engine.grab_hand(hand);
                if grabbed {
                    debug!("Grabbed {:?} hand", hand);
                }
                grabbed
            }
            InputEvent::PointerMove { x, y } | InputEvent::TouchMove { x, y } => {
                self.engine.drag_to(x, y, &self.geometry).is_some()
            }
            InputEvent::PointerUp => self.engine.release(Event::PointerUp),
            InputEvent::TouchStart {
                x,
                y,
                at_ms,
                touches,
            } => {
                if !self.engine.state().is_dragging() {
                    self.swipe.touch_start(x, y, at_ms, touches);
                }
                false
            }
            InputEvent::TouchEnd { x, y, at_ms } => {
                if self.engine.release(Event::TouchEnd) {
                    // A drag that started as a touch is not a swipe
                    self.swipe.touch_cancel();
                    return true;
                }
                match self.swipe.touch_end(x, y, at_ms) {
                    Some(swipe) => self.apply_swipe(swipe),
                    None => false,
                }
            }
            InputEvent::TouchCancel => {
                self.swipe.touch_cancel();
                self.engine.release(Event::TouchCancel)
            }
            InputEvent::BeginEdit => self.engine.begin_edit().is_some(),
            InputEvent::EditText(text) => self.engine.set_edit_text(&text),
            InputEvent::CommitEdit => self.commit_edit(),
            InputEvent::CancelEdit => self.engine.cancel_edit(),
            InputEvent::ToggleRunning => {
                let running = self.engine.toggle_running();
                info!("Clock {}", if running { "running" } else { "stopped" });
                true
            }
            InputEvent::ToggleHourCycle => {
                self.toggle_hour_cycle();
                true
            }
            InputEvent::ToggleSeconds => {
                self.config.show_seconds = self.engine.toggle_show_seconds();
                true
            }
            InputEvent::NextTheme => {
                self.set_theme(self.config.theme.next());
                true
            }
            InputEvent::PrevTheme => {
                self.set_theme(self.config.theme.prev());
                true
            }
            InputEvent::SetClockFace(face) => self.set_face(face),
            InputEvent::SetLanguage(language) => {
                let changed = self.config.language != language;
                self.config.language = language;
                changed
            }
            InputEvent::Reset => {
                self.engine.reset_to(self.clock.now());
                info!("Reset to system time");
                true
            }
            InputEvent::Resize(geometry) => {
                self.geometry = geometry;
                false
            }
        }
    }

    /// Handle the 1-second tick, returning whether the view changed
    pub fn on_tick(&mut self) -> bool {
        self.engine.tick(self.clock.now())
    }

    /// Snapshot for the renderer
    pub fn view(&self) -> ClockView {
        let time = self.engine.time();
        let hour_cycle = self.engine.options().cycle;
        ClockView {
            time,
            hands: time.hand_angles(),
            readout: self.engine.readout(),
            meridiem: (!hour_cycle.is_24_hour()).then(|| self.engine.meridiem()),
            hour_cycle,
            drag_state: self.engine.drag_state(),
            edit_text: self.engine.edit_text().and_then(|text| text.try_into().ok()),
            running: self.engine.is_running(),
            theme: self.config.theme,
            palette: self.config.theme.palette(),
            face: self.config.face,
            language: self.config.language,
        }
    }

    fn commit_edit(&mut self) -> bool {
        match self.engine.commit_edit() {
            Ok(time) => {
                info!("Time set to {:?}", time);
                true
            }
            Err(e) => {
                // Field closes, time unchanged
                warn!("Edit rejected: {:?}", e);
                true
            }
        }
    }

    fn apply_swipe(&mut self, swipe: Swipe) -> bool {
        debug!(
            "Swipe {:?} ({:.0} px, {:.2} px/ms)",
            swipe.direction, swipe.distance, swipe.velocity
        );
        match swipe.direction {
            SwipeDirection::Left => self.set_theme(self.config.theme.next()),
            SwipeDirection::Right => self.set_theme(self.config.theme.prev()),
            SwipeDirection::Up => self.toggle_hour_cycle(),
            SwipeDirection::Down => return false,
        }
        true
    }

    fn set_theme(&mut self, theme: ThemeKey) {
        self.config.theme = theme;
        info!("Theme: {}", theme.name());
    }

    fn set_face(&mut self, face: ClockFace) -> bool {
        if self.config.face == face {
            return false;
        }
        self.config.face = face;
        info!("Face: {}", face.label());
        true
    }

    fn toggle_hour_cycle(&mut self) {
        let cycle = self.engine.toggle_hour_cycle();
        self.config.hour_cycle = cycle;
        info!(
            "{} display",
            match cycle {
                HourCycle::H12 => "12-hour",
                HourCycle::H24 => "24-hour",
            }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use gnomon_core::config::Language;
    use gnomon_core::state::{DragState, Hand};
    use gnomon_core::Time;

    /// Clock that returns whatever the test set last
    struct FixedClock(Cell<Time>);

    impl FixedClock {
        fn at(h: u8, m: u8, s: u8) -> Self {
            Self(Cell::new(t(h, m, s)))
        }
    }

    impl TimeSource for &FixedClock {
        fn now(&self) -> Time {
            self.0.get()
        }
    }

    fn t(h: u8, m: u8, s: u8) -> Time {
        Time::new(h, m, s).unwrap()
    }

    fn controller(clock: &FixedClock) -> Controller<&FixedClock> {
        let mut controller = Controller::new(ClockConfig::default(), clock);
        controller.process_input(InputEvent::Resize(FaceGeometry::from_rect(
            0.0, 0.0, 200.0, 200.0,
        )));
        controller
    }

    #[test]
    fn test_mount_and_tick() {
        let clock = FixedClock::at(10, 30, 0);
        let mut controller = controller(&clock);
        assert_eq!(controller.view().readout.as_str(), "10:30:00");
        assert_eq!(controller.view().meridiem, Some(gnomon_core::Meridiem::Am));
        assert_eq!(controller.geometry(), FaceGeometry::new(100.0, 100.0, 100.0));

        clock.0.set(t(10, 30, 1));
        assert!(controller.on_tick());
        assert_eq!(controller.view().readout.as_str(), "10:30:01");
    }

    #[test]
    fn test_stopped_config_does_not_tick() {
        let clock = FixedClock::at(10, 30, 0);
        let config = ClockConfig {
            running: false,
            ..ClockConfig::default()
        };
        let mut controller = Controller::new(config, &clock);
        clock.0.set(t(11, 0, 0));
        assert!(!controller.on_tick());
        assert_eq!(controller.engine().time(), t(10, 30, 0));
    }

    #[test]
    fn test_minute_drag_by_pointer() {
        let clock = FixedClock::at(8, 58, 0);
        let mut controller = controller(&clock);

        controller.process_input(InputEvent::GrabHand(Hand::Minute));
        assert_eq!(controller.view().drag_state, DragState::DraggingMinute);

        // Just past 12 o'clock, right of the top
        assert!(controller.process_input(InputEvent::PointerMove { x: 110.0, y: 0.0 }));
        assert_eq!(controller.engine().time().hours(), 9);

        // Tick is held off while dragging
        clock.0.set(t(12, 0, 0));
        assert!(!controller.on_tick());

        assert!(controller.process_input(InputEvent::PointerUp));
        assert_eq!(controller.view().drag_state, DragState::None);
        assert!(!controller.view().running);
    }

    fn swipe(controller: &mut Controller<&FixedClock>, dx: f32, dy: f32) -> bool {
        controller.process_input(InputEvent::TouchStart {
            x: 100.0,
            y: 100.0,
            at_ms: 1_000,
            touches: 1,
        });
        controller.process_input(InputEvent::TouchEnd {
            x: 100.0 + dx,
            y: 100.0 + dy,
            at_ms: 1_200,
        })
    }

    #[test]
    fn test_swipes_change_theme_and_cycle() {
        let clock = FixedClock::at(15, 0, 0);
        let mut controller = controller(&clock);

        assert!(swipe(&mut controller, -120.0, 0.0));
        assert_eq!(controller.view().theme, ThemeKey::Cool);
        assert!(swipe(&mut controller, 120.0, 0.0));
        assert!(swipe(&mut controller, 120.0, 0.0));
        assert_eq!(controller.view().theme, ThemeKey::Cute);

        assert!(swipe(&mut controller, 0.0, -120.0));
        assert_eq!(controller.view().hour_cycle, HourCycle::H24);
        assert_eq!(controller.view().meridiem, None);
        assert_eq!(controller.config().hour_cycle, HourCycle::H24);

        assert!(!swipe(&mut controller, 0.0, 120.0));
        assert!(!swipe(&mut controller, 10.0, 0.0));
    }

    #[test]
    fn test_touch_drag_is_not_a_swipe() {
        let clock = FixedClock::at(15, 0, 0);
        let mut controller = controller(&clock);

        controller.process_input(InputEvent::TouchStart {
            x: 100.0,
            y: 40.0,
            at_ms: 0,
            touches: 1,
        });
        controller.process_input(InputEvent::GrabHand(Hand::Hour));
        controller.process_input(InputEvent::TouchMove { x: 190.0, y: 100.0 });
        assert!(controller.process_input(InputEvent::TouchEnd {
            x: 190.0,
            y: 100.0,
            at_ms: 100
        }));
        assert_eq!(controller.view().theme, ThemeKey::Warm);
        assert_eq!(controller.view().drag_state, DragState::None);
        // Hour hand pointing at 3 in the afternoon
        assert_eq!(controller.engine().time().hours(), 15);
    }

    #[test]
    fn test_touch_cancel_ends_drag() {
        let clock = FixedClock::at(15, 0, 0);
        let mut controller = controller(&clock);
        controller.process_input(InputEvent::GrabHand(Hand::Minute));
        assert!(controller.process_input(InputEvent::TouchCancel));
        assert_eq!(controller.view().drag_state, DragState::None);
    }

    #[test]
    fn test_edit_flow() {
        let clock = FixedClock::at(14, 20, 5);
        let mut controller = controller(&clock);

        assert!(controller.process_input(InputEvent::BeginEdit));
        assert_eq!(
            controller.view().edit_text.as_deref(),
            Some("02:20:05")
        );
        let mut text = gnomon_core::text::EditText::new();
        text.push_str("05:45:00").unwrap();
        controller.process_input(InputEvent::EditText(text));
        assert!(controller.process_input(InputEvent::CommitEdit));
        assert_eq!(controller.engine().time(), t(17, 45, 0));
        assert_eq!(controller.view().edit_text, None);
    }

    #[test]
    fn test_rejected_edit_closes_field() {
        let clock = FixedClock::at(14, 20, 5);
        let mut controller = controller(&clock);
        controller.process_input(InputEvent::BeginEdit);
        let mut text = gnomon_core::text::EditText::new();
        text.push_str("soon").unwrap();
        controller.process_input(InputEvent::EditText(text));
        assert!(controller.process_input(InputEvent::CommitEdit));
        assert_eq!(controller.view().edit_text, None);
        assert_eq!(controller.engine().time(), t(14, 20, 5));
    }

    #[test]
    fn test_face_selection() {
        let clock = FixedClock::at(9, 0, 0);
        let mut controller = controller(&clock);
        assert_eq!(controller.view().face, ClockFace::None);

        assert!(controller.process_input(InputEvent::SetClockFace(ClockFace::Dragon)));
        assert_eq!(controller.view().face, ClockFace::Dragon);
        assert_eq!(controller.config().face, ClockFace::Dragon);
        assert!(!controller.process_input(InputEvent::SetClockFace(ClockFace::Dragon)));

        // Theme swipes leave the face alone
        assert!(swipe(&mut controller, -120.0, 0.0));
        assert_eq!(controller.view().face, ClockFace::Dragon);

        assert!(controller.process_input(InputEvent::SetClockFace(ClockFace::None)));
        assert_eq!(controller.view().face, ClockFace::None);
    }

    #[test]
    fn test_reset_and_controls() {
        let clock = FixedClock::at(9, 0, 0);
        let mut controller = controller(&clock);
        controller.process_input(InputEvent::ToggleRunning);
        assert!(!controller.view().running);

        clock.0.set(t(9, 5, 0));
        controller.process_input(InputEvent::Reset);
        assert!(controller.view().running);
        assert_eq!(controller.engine().time(), t(9, 5, 0));

        controller.process_input(InputEvent::ToggleSeconds);
        assert_eq!(controller.view().readout.as_str(), "09:05");
        assert!(!controller.config().show_seconds);

        assert!(controller.process_input(InputEvent::SetLanguage(Language::Ja)));
        assert!(!controller.process_input(InputEvent::SetLanguage(Language::Ja)));
        assert_eq!(controller.view().language, Language::Ja);
    }
}
