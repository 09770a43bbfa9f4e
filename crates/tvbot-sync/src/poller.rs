//! Fixed-interval poll scheduler.
//!
//! Drives the reconciler every `POLL_INTERVAL`, first cycle immediately.
//! The tick body is awaited inline and missed ticks are skipped, so a slow
//! backend stretches the schedule instead of queueing cycles; at most one
//! cycle is ever in flight.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::reconcile::Reconciler;

/// Fixed dashboard refresh cadence.
pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Handle to the running poll loop.
pub struct Poller {
    shutdown_token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    /// Spawn the poll loop at the standard cadence.
    pub fn start(reconciler: Reconciler) -> Self {
        Self::with_interval(reconciler, POLL_INTERVAL)
    }

    /// Spawn the poll loop with a custom interval (tests shorten it).
    pub fn with_interval(reconciler: Reconciler, interval: Duration) -> Self {
        let shutdown_token = CancellationToken::new();
        let token = shutdown_token.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    () = token.cancelled() => {
                        info!("Poller shutting down");
                        break;
                    }
                    _ = ticker.tick() => {
                        // A cycle racing shutdown is abandoned here; its
                        // results are dropped, never applied.
                        tokio::select! {
                            () = token.cancelled() => {
                                info!("Poller cancelled mid-cycle");
                                break;
                            }
                            _ = reconciler.run_cycle() => {}
                        }
                    }
                }
            }
        });

        Self {
            shutdown_token,
            handle: Some(handle),
        }
    }

    /// Stop polling. Once this returns, no further cycle effects occur.
    pub async fn stop(mut self) {
        self.shutdown_token.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.shutdown_token.cancel();
    }
}
