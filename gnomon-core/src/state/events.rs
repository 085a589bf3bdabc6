//! Events that trigger state transitions

use super::machine::Hand;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Drag events
    /// Pointer or touch went down on a hand
    GrabHand(Hand),
    /// Mouse button released
    PointerUp,
    /// Last touch lifted
    TouchEnd,
    /// Touch sequence cancelled by the system (e.g. an OS gesture)
    TouchCancel,

    // Inline edit events
    /// Readout clicked to start editing
    BeginEdit,
    /// Enter pressed or the field lost focus
    CommitEdit,
    /// Escape pressed
    CancelEdit,
}

impl Event {
    /// Check if this event ends a drag
    ///
    /// A cancelled touch produces no pointer-up, so all three must count.
    pub fn is_release(&self) -> bool {
        matches!(self, Event::PointerUp | Event::TouchEnd | Event::TouchCancel)
    }
}
