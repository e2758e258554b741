// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Supply Poller
//!
//! Background task that periodically fetches the USDT total supply and the
//! balance of one watched account, writing both to the operational log.
//! Runs once at startup and then on a fixed interval (default 5 minutes).
//!
//! Failures are logged and never escape the loop; the schedule keeps
//! running. Overlap between sweeps is allowed by default (each sweep runs
//! as its own task) and can be disabled with the skip-if-running guard.
//!
//! ## Shutdown
//!
//! Uses `tokio_util::sync::CancellationToken` for graceful shutdown.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::blockchain::TokenContract;
use crate::config::DEFAULT_POLL_INTERVAL_SECS;
use crate::service::QueryService;

/// Background poller logging USDT supply and one watched balance.
pub struct SupplyPoller<C> {
    service: Arc<QueryService<C>>,
    watch_address: String,
    poll_interval: Duration,
    skip_if_running: bool,
}

impl<C: TokenContract + Send + Sync + 'static> SupplyPoller<C> {
    /// Create a new poller watching the given account.
    pub fn new(service: Arc<QueryService<C>>, watch_address: String) -> Self {
        Self {
            service,
            watch_address,
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            skip_if_running: false,
        }
    }

    /// Override the sweep interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Skip a sweep while the previous one is still in flight instead of
    /// running them concurrently.
    pub fn with_overlap_guard(mut self, skip_if_running: bool) -> Self {
        self.skip_if_running = skip_if_running;
        self
    }

    /// Run the poller loop until the cancellation token is triggered.
    ///
    /// Should be spawned as a background task:
    /// ```rust,ignore
    /// tokio::spawn(poller.run(shutdown.clone()));
    /// ```
    pub async fn run(self, shutdown: CancellationToken) {
        info!(
            interval_secs = self.poll_interval.as_secs(),
            watch_address = %self.watch_address,
            "Supply poller starting"
        );

        let mut in_flight: Option<tokio::task::JoinHandle<()>> = None;

        loop {
            if shutdown.is_cancelled() {
                info!("Supply poller shutting down");
                return;
            }

            let busy = in_flight.as_ref().map_or(false, |h| !h.is_finished());
            if self.skip_if_running && busy {
                warn!("previous sweep still in flight, skipping this one");
            } else {
                let service = Arc::clone(&self.service);
                let address = self.watch_address.clone();
                in_flight = Some(tokio::spawn(poll_step(service, address)));
            }

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {},
                _ = shutdown.cancelled() => {
                    info!("Supply poller shutting down");
                    return;
                }
            }
        }
    }
}

/// One sweep: fetch total supply and the watched balance, log both.
async fn poll_step<C: TokenContract + Send + Sync>(
    service: Arc<QueryService<C>>,
    watch_address: String,
) {
    match service.total_supply().await {
        Ok(supply) => info!(total_supply = %supply, "USDT total supply"),
        Err(e) => warn!(error = %e, "failed to fetch USDT total supply"),
    }

    match service.balance(&watch_address).await {
        Ok(balance) => info!(address = %watch_address, balance = %balance, "USDT balance"),
        Err(e) => warn!(address = %watch_address, error = %e, "failed to fetch USDT balance"),
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;

    use super::*;
    use crate::config::DEFAULT_POLL_ADDRESS;
    use crate::service::mock::MockContract;

    fn test_service(contract: MockContract) -> Arc<QueryService<MockContract>> {
        Arc::new(QueryService::new(contract, 6))
    }

    #[tokio::test]
    async fn stops_on_cancellation() {
        let service = test_service(MockContract::default());
        let poller = SupplyPoller::new(service, DEFAULT_POLL_ADDRESS.to_string());
        let shutdown = CancellationToken::new();

        let handle = tokio::spawn(poller.run(shutdown.clone()));
        shutdown.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn sweep_survives_remote_failures() {
        // A failing backend must not panic or poison the sweep.
        let service = test_service(MockContract {
            network_error: Some("node unreachable".to_string()),
            ..Default::default()
        });
        poll_step(service, DEFAULT_POLL_ADDRESS.to_string()).await;
    }

    #[tokio::test]
    async fn sweep_queries_supply_and_watched_balance() {
        let service = test_service(MockContract {
            supply: U256::from(1_000_000u64),
            balance: U256::from(500_000u64),
            ..Default::default()
        });
        poll_step(Arc::clone(&service), DEFAULT_POLL_ADDRESS.to_string()).await;
        assert_eq!(service.contract().call_count(), 2);
    }
}
