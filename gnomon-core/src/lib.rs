//! Framework-agnostic core logic for the Gnomon interactive clock
//!
//! This crate contains all clock logic that does not depend on a rendering
//! layer or an event loop:
//!
//! - Canonical time-of-day value and the 12/24-hour views derived from it
//! - Angle math between pointer positions, hand angles and time fields
//! - Rollover tracking for hands dragged across the 12 o'clock seam
//! - Formatting and parsing of the digital readout
//! - Interaction state machine (dragging, inline editing)
//! - The clock engine tying the above together for one widget instance
//! - Swipe gesture classification
//! - Configuration type definitions
//!
//! Inputs are plain numbers and strings; outputs are plain data. The
//! rendering collaborator draws hands and the readout from what the
//! engine reports.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod angle;
pub mod config;
pub mod engine;
pub mod gesture;
pub mod rollover;
pub mod state;
pub mod text;
pub mod time;

pub use engine::{ClockEngine, DisplayOptions};
pub use time::{HourCycle, Meridiem, Time, TimeError, TimeSource};
