//! Interaction state machine
//!
//! Tracks what the pointer and the inline editor are doing to the clock.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{DragState, Hand, State};
