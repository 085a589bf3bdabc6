//! View snapshots for the rendering layer
//!
//! The controller publishes a complete `ClockView` after every change;
//! the renderer draws hands and the readout from it and never reads the
//! engine directly.

use log::{debug, info};

use gnomon_core::angle::HandAngles;
use gnomon_core::config::{ClockFace, Language, Palette, ThemeKey};
use gnomon_core::state::DragState;
use gnomon_core::text::{EditText, TimeText};
use gnomon_core::{HourCycle, Meridiem, Time};

/// Everything the renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ClockView {
    pub time: Time,
    /// Hand angles, 0° at 12 o'clock, clockwise
    pub hands: HandAngles,
    /// Digital readout
    pub readout: TimeText,
    /// AM/PM marker, only in 12-hour mode
    pub meridiem: Option<Meridiem>,
    pub hour_cycle: HourCycle,
    pub drag_state: DragState,
    /// Inline edit field, when open
    pub edit_text: Option<EditText>,
    pub running: bool,
    pub theme: ThemeKey,
    pub palette: Palette,
    /// Face artwork, `ClockFace::None` for the plain dial
    pub face: ClockFace,
    pub language: Language,
}

/// Receives view snapshots
pub trait ViewSink {
    /// Draw or otherwise present a snapshot
    fn present(&mut self, view: &ClockView);
}

/// Sink that writes the readout to the log
///
/// Only readout, edit and mode changes are logged at info level; hand
/// movement alone goes to debug.
#[derive(Debug, Default)]
pub struct LogSink {
    last: Option<ClockView>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewSink for LogSink {
    fn present(&mut self, view: &ClockView) {
        let changed = self.last.as_ref().map_or(true, |last| {
            last.readout != view.readout
                || last.edit_text != view.edit_text
                || last.running != view.running
                || last.theme != view.theme
                || last.face != view.face
                || last.language != view.language
        });

        let meridiem = view.meridiem.map_or("", |m| m.label());
        if let Some(text) = &view.edit_text {
            info!("[{}] editing: {}", view.language.code(), text);
        } else if changed {
            info!(
                "[{}] {} {} ({}, {}, face {})",
                view.language.code(),
                view.readout,
                meridiem,
                if view.running { "running" } else { "stopped" },
                view.theme.name(),
                view.face.name()
            );
        }
        debug!(
            "hands h={:.1} m={:.1} s={:.1} drag={:?}",
            view.hands.hour, view.hands.minute, view.hands.second, view.drag_state
        );

        self.last = Some(view.clone());
    }
}
