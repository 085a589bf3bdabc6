//! Tick task for the running clock
//!
//! Wakes the controller once per second. The controller reads the system
//! clock itself, so a late or skipped tick never drifts the display.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use log::info;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1_000;

/// Signal to notify controller of tick
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Tick task - sends a periodic tick signal
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;
        TICK_SIGNAL.signal(());
    }
}
