// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use usdt_query_server::{
    api::router,
    blockchain::{EthClient, UsdtContract, USDT_TOKEN},
    config,
    poller::SupplyPoller,
    service::QueryService,
    state::AppState,
};

#[tokio::main]
async fn main() {
    init_tracing();

    // Connect to the chain and bind the contract once; everything read-only
    // downstream shares these.
    let rpc_url =
        env::var(config::RPC_URL_ENV).unwrap_or_else(|_| config::DEFAULT_RPC_URL.to_string());
    let client = EthClient::mainnet(rpc_url).expect("Failed to build RPC client");
    let contract = UsdtContract::new(client.provider()).expect("Failed to bind USDT contract");
    let service = Arc::new(QueryService::new(contract, USDT_TOKEN.decimals));

    let shutdown = CancellationToken::new();

    // Background poller: supply + one watched balance, every 5 minutes.
    let poll_interval = env::var(config::POLL_INTERVAL_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(config::DEFAULT_POLL_INTERVAL_SECS);
    let poll_address = env::var(config::POLL_ADDRESS_ENV)
        .unwrap_or_else(|_| config::DEFAULT_POLL_ADDRESS.to_string());
    let skip_if_running = env::var(config::POLL_SKIP_IF_RUNNING_ENV)
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let poller = SupplyPoller::new(Arc::clone(&service), poll_address)
        .with_interval(Duration::from_secs(poll_interval))
        .with_overlap_guard(skip_if_running);
    tokio::spawn(poller.run(shutdown.clone()));

    let state = AppState::new(service);
    let app = router(state);

    // Parse bind address
    let host = env::var(config::HOST_ENV).unwrap_or_else(|_| config::DEFAULT_HOST.to_string());
    let port: u16 = env::var(config::PORT_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(config::DEFAULT_PORT);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!(%addr, network = %client.network().name, "USDT query server listening (docs at /docs)");

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown.clone()))
        .await;

    if let Err(e) = result {
        tracing::error!(error = %e, "HTTP server failed");
        shutdown.cancel();
        std::process::exit(1);
    }
}

/// Resolve when SIGINT arrives, cancelling the poller on the way out.
async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    shutdown.cancel();
}

/// Initialize tracing with `RUST_LOG` filtering and `LOG_FORMAT` selection.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match env::var(config::LOG_FORMAT_ENV).as_deref() {
        Ok("json") => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}
