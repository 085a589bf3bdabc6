//! Console input
//!
//! The headless binary has no renderer to produce pointer events, so a
//! reader thread turns stdin lines into `InputEvent`s (see
//! [`parse_command`](crate::input::parse_command) for the syntax).

use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

use embassy_time::Instant;
use log::{info, warn};

use crate::channels::INPUT_CHANNEL;
use crate::input::parse_command;

/// Start the stdin reader thread
pub fn spawn_reader() -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("console".into())
        .spawn(read_commands)
}

fn read_commands() {
    info!("Console ready, type commands (e.g. `grab minute`, `move 120 40`, `up`)");

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Console read error: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line, Instant::now().as_millis()) {
            Ok(event) => {
                // Drop rather than block the reader if the controller lags
                if INPUT_CHANNEL.try_send(event).is_err() {
                    warn!("Input channel full, dropping event");
                }
            }
            Err(e) => warn!("{e}"),
        }
    }

    info!("Console closed");
}
