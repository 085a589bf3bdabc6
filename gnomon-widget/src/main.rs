//! Gnomon - interactive clock
//!
//! Headless binary: loads the configuration, starts the clock tasks and
//! reads console commands as input. Set `RUST_LOG=debug` to see hand
//! angles.

use std::path::PathBuf;

use embassy_executor::Spawner;
use log::{info, warn};

use gnomon_widget::{config, console, tasks};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Gnomon starting...");

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let locale = std::env::var("LANG").ok();
    let config = config::load_config(path.as_deref(), locale.as_deref());
    info!(
        "Configuration loaded: {:?}, {} theme, language {}",
        config.hour_cycle,
        config.theme.name(),
        config.language.code()
    );

    if let Err(e) = console::spawn_reader() {
        warn!("Console input unavailable: {e}");
    }

    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::view_task()).unwrap();
    spawner.spawn(tasks::controller_task(config)).unwrap();

    info!("All tasks spawned, clock running");
}
