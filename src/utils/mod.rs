//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y para
//! convertir los campos de formulario en valores tipados.

pub mod errors;
pub mod validation;

pub use errors::{AppError, AppResult};
