use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::tracking_controller::TrackingController;
use crate::dto::order_dto::{
    AuditTrailResponse, DocumentsResponse, NotificationsResponse, OrderDetailResponse,
};
use crate::models::order::Order;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_order_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders))
        .route("/:id", get(get_order))
        .route("/:id/notifications", get(get_notifications))
        .route("/:id/documents", get(get_documents))
        .route("/:id/audit", get(get_audit_trail))
}

fn controller(state: &AppState) -> TrackingController {
    TrackingController::new(state.orders.clone(), state.documents.clone())
}

async fn list_orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(controller(&state).list_orders())
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderDetailResponse>> {
    let response = controller(&state).get_order(&id)?;
    Ok(Json(response))
}

async fn get_notifications(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<NotificationsResponse>> {
    let response = controller(&state).notifications(&id)?;
    Ok(Json(response))
}

async fn get_documents(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DocumentsResponse>> {
    let response = controller(&state).documents(&id)?;
    Ok(Json(response))
}

async fn get_audit_trail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AuditTrailResponse>> {
    let response = controller(&state).audit_trail(&id)?;
    Ok(Json(response))
}
