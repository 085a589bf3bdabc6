//! State machine definition
//!
//! Whether the 1-second tick may overwrite the time, and what a pointer
//! move means, are both functions of the current state.

use super::events::Event;

/// Draggable clock hands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hand {
    /// Sets hour and minute together
    Hour,
    /// Sets the minute, rolling the hour across the top of the dial
    Minute,
}

/// Which hand, if any, is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DragState {
    #[default]
    None,
    DraggingHour,
    DraggingMinute,
}

impl DragState {
    /// Hand being dragged
    pub fn hand(&self) -> Option<Hand> {
        match self {
            DragState::None => None,
            DragState::DraggingHour => Some(Hand::Hour),
            DragState::DraggingMinute => Some(Hand::Minute),
        }
    }

    /// Check if any hand is being dragged
    pub fn is_dragging(&self) -> bool {
        !matches!(self, DragState::None)
    }
}

/// Interaction states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Nothing grabbed, readout not being edited
    #[default]
    Idle,
    /// A hand follows the pointer
    Dragging(Hand),
    /// The readout is an inline text field
    Editing,
}

impl State {
    /// Drag state reported to the rendering layer
    pub fn drag_state(&self) -> DragState {
        match self {
            State::Dragging(Hand::Hour) => DragState::DraggingHour,
            State::Dragging(Hand::Minute) => DragState::DraggingMinute,
            _ => DragState::None,
        }
    }

    /// Check if a hand is being dragged
    pub fn is_dragging(&self) -> bool {
        matches!(self, State::Dragging(_))
    }

    /// Check if the readout is being edited
    pub fn is_editing(&self) -> bool {
        matches!(self, State::Editing)
    }

    /// Check if this state holds off the 1-second tick
    pub fn suspends_tick(&self) -> bool {
        !matches!(self, State::Idle)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Idle transitions
            (Idle, GrabHand(hand)) => Dragging(hand),
            (Idle, BeginEdit) => Editing,

            // Dragging transitions: every kind of release ends the drag
            (Dragging(_), PointerUp | TouchEnd | TouchCancel) => Idle,

            // Editing transitions
            (Editing, CommitEdit) => Idle,
            (Editing, CancelEdit) => Idle,

            // Default: stay in current state
            _ => self,
        }
    }
}
