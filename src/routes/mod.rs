//! Rutas de la API
//!
//! Cada sub-router se monta bajo `/api`; `create_app` añade CORS, trazas,
//! compresión y el estado compartido.

pub mod navigation_routes;
pub mod order_routes;
pub mod quote_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors::cors_middleware_for;
use crate::state::AppState;

pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/quotes", quote_routes::create_quote_router())
        .nest("/api/financing", quote_routes::create_financing_router())
        .nest("/api/checkout", quote_routes::create_checkout_router())
        .nest("/api/orders", order_routes::create_order_router())
        .nest("/api/navigation", navigation_routes::create_navigation_router())
}

/// Router completo listo para servir
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware_for(&state.config);
    create_api_router()
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "import-marketplace",
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
