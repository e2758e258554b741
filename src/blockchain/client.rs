// SPDX-License-Identifier: AGPL-3.0-or-later

//! Ethereum mainnet client for read-only contract calls.

use alloy::providers::{
    fillers::{BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller},
    Identity, Provider, ProviderBuilder, RootProvider,
};
use alloy::network::Ethereum;

use super::types::NetworkConfig;

/// HTTP provider type for Ethereum mainnet (with all fillers).
pub type HttpProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider<Ethereum>,
>;

/// Ethereum JSON-RPC client.
pub struct EthClient {
    /// Network configuration
    network: NetworkConfig,
    /// Alloy HTTP provider
    provider: HttpProvider,
}

impl EthClient {
    /// Create a new client for the specified network.
    pub fn new(network: NetworkConfig) -> Result<Self, ClientError> {
        let url: url::Url = network
            .rpc_url
            .parse()
            .map_err(|e: url::ParseError| ClientError::InvalidRpcUrl(e.to_string()))?;

        let provider = ProviderBuilder::new().connect_http(url);

        Ok(Self { network, provider })
    }

    /// Create a client for Ethereum mainnet with the given RPC endpoint.
    pub fn mainnet(rpc_url: String) -> Result<Self, ClientError> {
        Self::new(NetworkConfig::mainnet(rpc_url))
    }

    /// Get the current block number.
    pub async fn block_number(&self) -> Result<u64, ClientError> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))
    }

    /// Get the underlying provider, for binding contracts.
    pub fn provider(&self) -> &HttpProvider {
        &self.provider
    }

    /// Get the network configuration.
    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }
}

/// Map an alloy contract-call error into the remote-fault taxonomy.
///
/// A JSON-RPC error response carrying revert data is a contract revert; any
/// other error response is a node-level RPC fault; everything else
/// (unreachable endpoint, timeout, serialization) is a network fault.
pub(crate) fn classify(err: alloy::contract::Error) -> ClientError {
    match &err {
        alloy::contract::Error::TransportError(transport) => {
            if let Some(resp) = transport.as_error_resp() {
                if resp.as_revert_data().is_some() {
                    ClientError::Revert(resp.message.to_string())
                } else {
                    ClientError::Rpc(resp.message.to_string())
                }
            } else {
                ClientError::Network(transport.to_string())
            }
        }
        other => ClientError::Rpc(other.to_string()),
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("Invalid contract address: {0}")]
    InvalidAddress(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Contract call reverted: {0}")]
    Revert(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_rpc_url() {
        let result = EthClient::mainnet("not a url".to_string());
        assert!(matches!(result, Err(ClientError::InvalidRpcUrl(_))));
    }

    #[test]
    fn mainnet_network_config() {
        let client = EthClient::mainnet("https://cloudflare-eth.com".to_string()).unwrap();
        assert_eq!(client.network().chain_id, 1);
        assert_eq!(client.network().name, "Ethereum Mainnet");
    }
}
