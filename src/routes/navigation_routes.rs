use axum::{routing::{get, post}, Json, Router};
use serde::Deserialize;

use crate::navigation::{self, NavEvent, NavItem, NavState};
use crate::state::AppState;

pub fn create_navigation_router() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items))
        .route("/transition", post(apply_transition))
}

// El cliente envía su estado actual y el evento; la respuesta es el nuevo estado
#[derive(Debug, Deserialize)]
struct TransitionRequest {
    #[serde(default)]
    state: NavState,
    event: NavEvent,
}

async fn list_items() -> Json<Vec<NavItem>> {
    Json(navigation::nav_items().to_vec())
}

async fn apply_transition(Json(request): Json<TransitionRequest>) -> Json<NavState> {
    Json(navigation::transition(request.state, request.event))
}
