//! Inter-task communication channels
//!
//! Static embassy-sync primitives shared by the tasks and the console
//! reader thread.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use crate::input::InputEvent;
use crate::view::ClockView;

/// Channel capacity for input events
const INPUT_CHANNEL_SIZE: usize = 16;

/// Input events from the rendering layer (pointer, touch, keys, controls)
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, InputEvent, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// Latest view snapshot, ready to be presented
pub static VIEW_UPDATE: Signal<CriticalSectionRawMutex, ClockView> = Signal::new();
