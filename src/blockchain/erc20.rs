// SPDX-License-Identifier: AGPL-3.0-or-later

//! ERC-20 token contract binding for USDT.

use std::future::Future;
use std::str::FromStr;

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    sol,
};

use super::client::{classify, ClientError};
use super::types::USDT_TOKEN;

// The two read-only methods this service needs from the ERC-20 interface.
sol! {
    #[sol(rpc)]
    interface IERC20 {
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
    }
}

/// Read-only view of an ERC-20 token contract.
///
/// The seam between `QueryService` and the network; tests substitute a mock
/// that counts calls instead of touching a node.
pub trait TokenContract {
    fn total_supply(&self) -> impl Future<Output = Result<U256, ClientError>> + Send;
    fn balance_of(&self, owner: Address) -> impl Future<Output = Result<U256, ClientError>> + Send;
}

/// The USDT contract, bound to its fixed mainnet address.
pub struct UsdtContract<P> {
    contract: IERC20::IERC20Instance<P>,
    address: Address,
}

impl<P: Provider + Clone> UsdtContract<P> {
    /// Bind the USDT contract to the given provider.
    pub fn new(provider: &P) -> Result<Self, ClientError> {
        let address = Address::from_str(USDT_TOKEN.mainnet_address)
            .map_err(|e| ClientError::InvalidAddress(e.to_string()))?;

        let contract = IERC20::new(address, provider.clone());

        Ok(Self { contract, address })
    }

    /// The bound contract address.
    pub fn address(&self) -> Address {
        self.address
    }
}

impl<P: Provider + Clone> TokenContract for UsdtContract<P> {
    async fn total_supply(&self) -> Result<U256, ClientError> {
        self.contract.totalSupply().call().await.map_err(classify)
    }

    async fn balance_of(&self, owner: Address) -> Result<U256, ClientError> {
        self.contract.balanceOf(owner).call().await.map_err(classify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::EthClient;

    #[test]
    fn binds_to_the_usdt_mainnet_address() {
        let client = EthClient::mainnet("https://cloudflare-eth.com".to_string()).unwrap();
        let contract = UsdtContract::new(client.provider()).unwrap();
        assert_eq!(
            format!("{:#x}", contract.address()),
            USDT_TOKEN.mainnet_address.to_lowercase()
        );
    }
}
