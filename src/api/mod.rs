// SPDX-License-Identifier: AGPL-3.0-or-later

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{blockchain::TokenContract, state::AppState};

pub mod health;
pub mod usdt;

pub fn router<C: TokenContract + Send + Sync + 'static>(state: AppState<C>) -> Router {
    let usdt_routes = Router::new()
        .route("/usdt/total-supply", get(usdt::total_supply::<C>))
        .route("/usdt/balance/{address}", get(usdt::balance::<C>))
        .route("/usdt/multi-balance", get(usdt::multi_balance::<C>))
        .with_state(state);

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", usdt_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        usdt::total_supply,
        usdt::balance,
        usdt::multi_balance
    ),
    components(
        schemas(
            health::HealthResponse,
            usdt::TotalSupplyResponse,
            usdt::BalanceResponse,
            usdt::MultiBalanceResponse,
            crate::service::BalanceQueryResult
        )
    ),
    tags(
        (name = "USDT", description = "Read-only USDT contract state"),
        (name = "Health", description = "Liveness probes")
    )
)]
struct ApiDoc;
