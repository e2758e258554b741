// SPDX-License-Identifier: AGPL-3.0-or-later

//! USDT Query Server - Read-only ERC-20 state API
//!
//! Exposes USDT total supply and account balances from Ethereum mainnet
//! over HTTP JSON, plus a background poller that logs the same data on a
//! fixed schedule.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `blockchain` - Ethereum mainnet client and USDT contract binding
//! - `service` - Query orchestration (single + concurrent batch)
//! - `poller` - Periodic supply/balance logging

pub mod address;
pub mod amount;
pub mod api;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod poller;
pub mod service;
pub mod state;
