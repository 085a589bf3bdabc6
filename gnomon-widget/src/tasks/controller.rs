//! Main controller task
//!
//! Owns the controller. Input events and ticks are handled strictly one
//! at a time, so a drag sample is fully applied before the next event is
//! looked at.

use embassy_futures::select::{select, Either};
use log::{debug, info};

use gnomon_core::config::ClockConfig;

use crate::channels::{INPUT_CHANNEL, VIEW_UPDATE};
use crate::clock::LocalClock;
use crate::controller::Controller;
use crate::tasks::tick::TICK_SIGNAL;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(config: ClockConfig) {
    info!("Controller task started");

    let mut controller = Controller::new(config, LocalClock);
    VIEW_UPDATE.signal(controller.view());

    loop {
        let changed = match select(INPUT_CHANNEL.receive(), TICK_SIGNAL.wait()).await {
            Either::First(input) => {
                debug!("Input: {:?}", input);
                controller.process_input(input)
            }
            Either::Second(()) => controller.on_tick(),
        };

        if changed {
            VIEW_UPDATE.signal(controller.view());
        }
    }
}
