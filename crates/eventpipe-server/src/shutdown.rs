//! Signal-driven shutdown

use crate::{Result, ServerError};
use futures::stream::StreamExt;
use signal_hook::consts::signal::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::{info, warn};

/// Resolve when the process receives SIGINT or SIGTERM.
///
/// Used as the HTTP server's graceful-shutdown trigger; the pipeline drain
/// runs after the server stops accepting requests.
pub async fn wait_for_shutdown() -> Result<()> {
    let mut signals =
        Signals::new([SIGTERM, SIGINT]).map_err(|e| ServerError::signal(e.to_string()))?;

    if let Some(signal) = signals.next().await {
        match signal {
            SIGTERM => info!("received SIGTERM, initiating graceful shutdown"),
            SIGINT => info!("received SIGINT (Ctrl+C), initiating graceful shutdown"),
            other => warn!(signal = other, "received unexpected signal"),
        }
    }

    Ok(())
}
