//! Services module
//!
//! Este módulo contiene la lógica de negocio del marketplace: cálculo de
//! landed cost, cuotas de financiación, filtrado del catálogo y las vistas
//! de pedidos, documentos y checkout. Todo es puro y sin estado mutable.

pub mod amortization;
pub mod catalog;
pub mod checkout;
pub mod cost_estimator;
pub mod document_center;
pub mod order_tracking;
pub mod vehicle_filter;

pub use catalog::Catalog;
pub use document_center::DocumentChecklist;
pub use order_tracking::OrderBook;
