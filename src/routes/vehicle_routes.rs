use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::marketplace_controller::MarketplaceController;
use crate::dto::vehicle_dto::VehicleListResponse;
use crate::models::cost::CostForm;
use crate::models::filter::FilterForm;
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .route("/:id/cost-form", get(get_cost_form))
}

fn controller(state: &AppState) -> MarketplaceController {
    MarketplaceController::new(state.catalog.clone(), state.config.default_processing_fee)
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(filters): Query<FilterForm>,
) -> AppResult<Json<VehicleListResponse>> {
    let response = controller(&state).list(filters)?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<Vehicle>> {
    let response = controller(&state).get_by_id(id)?;
    Ok(Json(response))
}

async fn get_cost_form(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<CostForm>> {
    let response = controller(&state).cost_form(id)?;
    Ok(Json(response))
}
