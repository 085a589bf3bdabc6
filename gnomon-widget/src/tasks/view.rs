//! View task
//!
//! Presents the latest snapshot. Snapshots published faster than they are
//! presented are coalesced by the signal; only the newest is drawn.

use log::info;

use crate::channels::VIEW_UPDATE;
use crate::view::{LogSink, ViewSink};

/// View task - hands snapshots to the sink
#[embassy_executor::task]
pub async fn view_task() {
    info!("View task started");

    let mut sink = LogSink::new();

    loop {
        let view = VIEW_UPDATE.wait().await;
        sink.present(&view);
    }
}
