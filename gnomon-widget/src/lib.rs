//! Host runtime for the Gnomon interactive clock
//!
//! Wraps the `gnomon-core` engine in the embassy task model:
//!
//! - A 1-second tick task
//! - A controller task that owns the engine and applies input events
//! - A view task that presents snapshots to a [`ViewSink`](view::ViewSink)
//!
//! Everything runs on one cooperative executor thread. Input may be
//! posted to [`INPUT_CHANNEL`](channels::INPUT_CHANNEL) from anywhere.

pub mod channels;
pub mod clock;
pub mod config;
pub mod console;
pub mod controller;
pub mod input;
pub mod tasks;
pub mod view;
