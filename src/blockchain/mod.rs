// SPDX-License-Identifier: AGPL-3.0-or-later

//! Blockchain integration module for Ethereum mainnet.
//!
//! This module provides functionality for:
//! - Connecting to a JSON-RPC node over HTTP
//! - Querying USDT total supply and account balances (read-only)

pub mod client;
pub mod erc20;
pub mod types;

pub use client::{ClientError, EthClient, HttpProvider};
pub use erc20::{TokenContract, UsdtContract};
pub use types::*;
