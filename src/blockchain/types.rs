// SPDX-License-Identifier: AGPL-3.0-or-later

//! Blockchain types and constants.

/// Ethereum network configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: &'static str,
    /// Chain ID
    pub chain_id: u64,
    /// RPC endpoint URL
    pub rpc_url: String,
}

impl NetworkConfig {
    /// Ethereum mainnet configuration for the given RPC endpoint.
    pub fn mainnet(rpc_url: String) -> Self {
        Self {
            name: "Ethereum Mainnet",
            chain_id: 1,
            rpc_url,
        }
    }
}

/// Metadata for a known ERC-20 token.
#[derive(Debug, Clone)]
pub struct Erc20Token {
    pub symbol: &'static str,
    pub name: &'static str,
    pub decimals: u8,
    /// Mainnet contract address
    pub mainnet_address: &'static str,
}

/// Tether USD on Ethereum mainnet.
pub const USDT_TOKEN: Erc20Token = Erc20Token {
    symbol: "USDT",
    name: "Tether USD",
    decimals: 6,
    mainnet_address: "0xdAC17F958D2ee523a2206206994597C13D831ec7",
};
