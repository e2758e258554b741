// SPDX-License-Identifier: AGPL-3.0-or-later

//! USDT supply and balance query endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    blockchain::TokenContract,
    error::ApiError,
    service::{BalanceQueryResult, ServiceError},
    state::AppState,
};

/// Total supply response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TotalSupplyResponse {
    pub success: bool,
    /// Total supply as a decimal string (6 decimals applied)
    pub total_supply: String,
    /// Time of the query (RFC 3339)
    pub timestamp: String,
}

/// Single balance response.
#[derive(Debug, Serialize, ToSchema)]
pub struct BalanceResponse {
    pub success: bool,
    /// Queried account address
    pub address: String,
    /// Balance as a decimal string (6 decimals applied)
    pub balance: String,
    /// Time of the query (RFC 3339)
    pub timestamp: String,
}

/// Query parameters for the batch balance endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct MultiBalanceQuery {
    /// Comma-separated list of account addresses
    pub addresses: Option<String>,
}

/// Batch balance response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MultiBalanceResponse {
    pub success: bool,
    /// One result per requested address, in request order
    pub balances: Vec<BalanceQueryResult>,
    /// Time of the query (RFC 3339)
    pub timestamp: String,
}

/// Get the USDT total supply.
#[utoipa::path(
    get,
    path = "/api/usdt/total-supply",
    tag = "USDT",
    responses(
        (status = 200, description = "Total supply retrieved", body = TotalSupplyResponse),
        (status = 500, description = "Remote call failed")
    )
)]
pub async fn total_supply<C: TokenContract + Send + Sync + 'static>(
    State(state): State<AppState<C>>,
) -> Result<Json<TotalSupplyResponse>, ApiError> {
    let total_supply = state
        .query
        .total_supply()
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(TotalSupplyResponse {
        success: true,
        total_supply,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// Get the USDT balance of one address.
#[utoipa::path(
    get,
    path = "/api/usdt/balance/{address}",
    tag = "USDT",
    params(
        ("address" = String, Path, description = "Account address (0x-prefixed hex)")
    ),
    responses(
        (status = 200, description = "Balance retrieved", body = BalanceResponse),
        (status = 400, description = "Malformed address"),
        (status = 500, description = "Remote call failed")
    )
)]
pub async fn balance<C: TokenContract + Send + Sync + 'static>(
    State(state): State<AppState<C>>,
    Path(address): Path<String>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let balance = state.query.balance(&address).await.map_err(|e| match e {
        ServiceError::InvalidAddress { .. } => ApiError::bad_request("Wrong address format"),
        other => ApiError::internal(other.to_string()),
    })?;

    Ok(Json(BalanceResponse {
        success: true,
        address,
        balance,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// Get USDT balances for several addresses in one request.
///
/// Validation is all-or-nothing: any malformed entry rejects the whole batch
/// before a single remote call is made.
#[utoipa::path(
    get,
    path = "/api/usdt/multi-balance",
    tag = "USDT",
    params(MultiBalanceQuery),
    responses(
        (status = 200, description = "Balances retrieved", body = MultiBalanceResponse),
        (status = 400, description = "Missing parameter or malformed addresses")
    )
)]
pub async fn multi_balance<C: TokenContract + Send + Sync + 'static>(
    State(state): State<AppState<C>>,
    Query(query): Query<MultiBalanceQuery>,
) -> Result<Json<MultiBalanceResponse>, ApiError> {
    let raw = query
        .addresses
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing `addresses` query parameter"))?;

    let addresses: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if addresses.is_empty() {
        return Err(ApiError::bad_request("Missing `addresses` query parameter"));
    }

    let balances = state
        .query
        .multi_balance(&addresses)
        .await
        .map_err(|e| match e {
            ServiceError::InvalidAddress { addresses } => ApiError::invalid_addresses(addresses),
            other => ApiError::internal(other.to_string()),
        })?;

    Ok(Json(MultiBalanceResponse {
        success: true,
        balances,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use alloy::primitives::U256;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::api::router;
    use crate::service::mock::MockContract;
    use crate::service::QueryService;
    use crate::state::AppState;

    const VALID_A: &str = "0x47ac0Fb4F2D84898e4D9E7b4DaB3C24507a6D503";
    const VALID_B: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";

    fn app(contract: MockContract) -> axum::Router {
        let state = AppState::new(Arc::new(QueryService::new(contract, 6)));
        router(state)
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn total_supply_happy_path() {
        let app = app(MockContract {
            supply: U256::from(1_000_000_000_000u64),
            ..Default::default()
        });
        let (status, body) = get(app, "/api/usdt/total-supply").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["totalSupply"], "1000000");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn total_supply_surfaces_remote_failure() {
        let app = app(MockContract {
            network_error: Some("node unreachable".to_string()),
            ..Default::default()
        });
        let (status, body) = get(app, "/api/usdt/total-supply").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Network error: node unreachable");
    }

    #[tokio::test]
    async fn balance_happy_path() {
        let app = app(MockContract {
            balance: U256::from(2_500_000u64),
            ..Default::default()
        });
        let (status, body) = get(app, &format!("/api/usdt/balance/{VALID_A}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["address"], VALID_A);
        assert_eq!(body["balance"], "2.5");
    }

    #[tokio::test]
    async fn balance_rejects_malformed_address_with_exact_body() {
        let app = app(MockContract::default());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/usdt/balance/not-an-address")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert_eq!(body, r#"{"success":false,"error":"Wrong address format"}"#);
    }

    #[tokio::test]
    async fn multi_balance_requires_addresses_parameter() {
        let app = app(MockContract::default());
        let (status, body) = get(app, "/api/usdt/multi-balance").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn multi_balance_lists_invalid_addresses() {
        let app = app(MockContract::default());
        let (status, body) =
            get(app, &format!("/api/usdt/multi-balance?addresses={VALID_A},nope")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Wrong address format");
        assert_eq!(body["invalidAddresses"], serde_json::json!(["nope"]));
    }

    #[tokio::test]
    async fn multi_balance_happy_path() {
        let app = app(MockContract {
            balance: U256::from(1_000_000u64),
            ..Default::default()
        });
        let (status, body) = get(
            app,
            &format!("/api/usdt/multi-balance?addresses={VALID_A},{VALID_B}"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let balances = body["balances"].as_array().unwrap();
        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0]["address"], VALID_A);
        assert_eq!(balances[0]["balance"], "1");
        assert_eq!(balances[1]["address"], VALID_B);
    }
}
