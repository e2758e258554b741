// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `RPC_URL` | Ethereum mainnet JSON-RPC endpoint | `https://cloudflare-eth.com` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `3099` |
//! | `POLL_INTERVAL_SECS` | Seconds between poller sweeps | `300` |
//! | `POLL_ADDRESS` | Account whose balance the poller watches | Binance hot wallet |
//! | `POLL_SKIP_IF_RUNNING` | Skip a sweep while the previous one is in flight | `false` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

/// Environment variable name for the Ethereum JSON-RPC endpoint URL.
pub const RPC_URL_ENV: &str = "RPC_URL";

/// Default mainnet RPC endpoint (public, keyless gateway).
pub const DEFAULT_RPC_URL: &str = "https://cloudflare-eth.com";

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Default server bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Default server bind port.
pub const DEFAULT_PORT: u16 = 3099;

/// Environment variable name for the poller interval in seconds.
pub const POLL_INTERVAL_ENV: &str = "POLL_INTERVAL_SECS";

/// Default poller interval: 5 minutes.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 300;

/// Environment variable name for the address the poller watches.
pub const POLL_ADDRESS_ENV: &str = "POLL_ADDRESS";

/// Default watched account (a Binance hot wallet).
pub const DEFAULT_POLL_ADDRESS: &str = "0x47ac0Fb4F2D84898e4D9E7b4DaB3C24507a6D503";

/// Environment variable name for the poller overlap guard.
///
/// When `true`, a sweep scheduled while the previous one is still in flight
/// is skipped instead of running concurrently.
pub const POLL_SKIP_IF_RUNNING_ENV: &str = "POLL_SKIP_IF_RUNNING";

/// Environment variable name for the logging format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";
