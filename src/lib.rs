//! Import marketplace backend
//!
//! Catálogo de vehículos importados, estimación de costo de importación,
//! cuotas de financiamiento, seguimiento de pedidos y control documental.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod navigation;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
