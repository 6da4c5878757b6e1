//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y los valores por
//! defecto de los calculadores.

pub mod environment;

pub use environment::*;
