//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos del marketplace:
//! catálogo, costes, financiación, filtros, pedidos y documentos.

pub mod cost;
pub mod document;
pub mod filter;
pub mod financing;
pub mod order;
pub mod vehicle;
