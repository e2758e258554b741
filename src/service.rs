// SPDX-License-Identifier: AGPL-3.0-or-later

//! Query orchestration for single and batch balance/supply lookups.

use futures::future::join_all;
use serde::Serialize;
use utoipa::ToSchema;

use crate::address::parse_address;
use crate::amount::format_units;
use crate::blockchain::{ClientError, TokenContract};

/// Orchestrates USDT supply and balance queries against a bound contract.
///
/// Generic over the contract binding so tests can substitute a mock.
pub struct QueryService<C> {
    contract: C,
    decimals: u8,
}

/// Outcome of one address lookup in a batch.
///
/// Every input address maps to exactly one of these; a failed lookup does
/// not abort the rest of the batch.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum BalanceQueryResult {
    Balance { address: String, balance: String },
    Failed { address: String, error: String },
}

/// Errors from the query service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// One or more addresses failed validation; no network call was made.
    #[error("Wrong address format")]
    InvalidAddress { addresses: Vec<String> },

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl<C: TokenContract + Send + Sync> QueryService<C> {
    pub fn new(contract: C, decimals: u8) -> Self {
        Self { contract, decimals }
    }

    /// Total token supply, formatted as a decimal string.
    pub async fn total_supply(&self) -> Result<String, ServiceError> {
        let raw = self.contract.total_supply().await?;
        Ok(format_units(raw, self.decimals))
    }

    /// Balance of one address, formatted as a decimal string.
    ///
    /// The address is validated before any network call.
    pub async fn balance(&self, address: &str) -> Result<String, ServiceError> {
        let owner = parse_address(address).ok_or_else(|| ServiceError::InvalidAddress {
            addresses: vec![address.to_string()],
        })?;
        let raw = self.contract.balance_of(owner).await?;
        Ok(format_units(raw, self.decimals))
    }

    /// Balances of many addresses, queried concurrently.
    ///
    /// Validation is all-or-nothing: if any entry is malformed the whole
    /// batch fails up front with every offender listed and zero network
    /// calls made. Once validation passes, a per-item remote failure is
    /// recorded in that item's result and the rest of the batch proceeds.
    pub async fn multi_balance(
        &self,
        addresses: &[String],
    ) -> Result<Vec<BalanceQueryResult>, ServiceError> {
        let mut parsed = Vec::with_capacity(addresses.len());
        let mut invalid = Vec::new();
        for raw in addresses {
            match parse_address(raw) {
                Some(owner) => parsed.push((raw.clone(), owner)),
                None => invalid.push(raw.clone()),
            }
        }
        if !invalid.is_empty() {
            return Err(ServiceError::InvalidAddress { addresses: invalid });
        }

        let lookups = parsed.into_iter().map(|(address, owner)| async move {
            match self.contract.balance_of(owner).await {
                Ok(raw) => BalanceQueryResult::Balance {
                    address,
                    balance: format_units(raw, self.decimals),
                },
                Err(e) => {
                    tracing::warn!(address = %address, error = %e, "balance lookup failed");
                    BalanceQueryResult::Failed {
                        address,
                        error: e.to_string(),
                    }
                }
            }
        });

        Ok(join_all(lookups).await)
    }

    #[cfg(test)]
    pub(crate) fn contract(&self) -> &C {
        &self.contract
    }
}
