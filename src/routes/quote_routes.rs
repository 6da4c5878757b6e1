use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::quote_controller::QuoteController;
use crate::dto::quote_dto::{EmiResponse, MarketplaceQuoteRequest, MarketplaceQuoteResponse};
use crate::dto::ApiResponse;
use crate::models::cost::CostForm;
use crate::models::financing::{EmiQuote, FinancingApplication, FinancingForm};
use crate::services::checkout::CheckoutSummary;
use crate::services::cost_estimator::LandedCostEstimate;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_quote_router() -> Router<AppState> {
    Router::new()
        .route("/landed-cost", post(landed_cost))
        .route("/emi", post(emi))
        .route("/marketplace", post(marketplace_quote))
}

pub fn create_financing_router() -> Router<AppState> {
    Router::new().route("/applications/validate", post(validate_application))
}

pub fn create_checkout_router() -> Router<AppState> {
    Router::new().route("/:vehicle_id", get(checkout_summary))
}

async fn landed_cost(
    State(state): State<AppState>,
    Json(form): Json<CostForm>,
) -> Json<LandedCostEstimate> {
    let controller = QuoteController::new(state.config.clone());
    Json(controller.landed_cost(&form))
}

async fn emi(State(state): State<AppState>, Json(form): Json<FinancingForm>) -> Json<EmiResponse> {
    let controller = QuoteController::new(state.config.clone());
    Json(controller.emi(&form))
}

async fn marketplace_quote(
    State(state): State<AppState>,
    Json(request): Json<MarketplaceQuoteRequest>,
) -> Json<MarketplaceQuoteResponse> {
    let controller = QuoteController::new(state.config.clone());
    Json(controller.marketplace_quote(&request))
}

async fn validate_application(
    State(state): State<AppState>,
    Json(application): Json<FinancingApplication>,
) -> AppResult<Json<ApiResponse<EmiQuote>>> {
    let controller = QuoteController::new(state.config.clone());
    let response = controller.validate_application(&application)?;
    Ok(Json(response))
}

async fn checkout_summary(
    State(state): State<AppState>,
    Path(vehicle_id): Path<u32>,
) -> AppResult<Json<CheckoutSummary>> {
    let controller = QuoteController::new(state.config.clone());
    let response = controller.checkout(&state.catalog, vehicle_id)?;
    Ok(Json(response))
}
