//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Todo es inmutable, así que basta con `Arc`.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::services::{Catalog, DocumentChecklist, OrderBook};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub catalog: Arc<Catalog>,
    pub orders: Arc<OrderBook>,
    pub documents: Arc<DocumentChecklist>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            config,
            catalog: Arc::new(Catalog::fixed()),
            orders: Arc::new(OrderBook::fixed()),
            documents: Arc::new(DocumentChecklist::fixed()),
        }
    }
}
