//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables
//! tienen un valor por defecto, de modo que el servicio arranca sin `.env`.

use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

use crate::services::cost_estimator::{DEFAULT_LKR_PER_USD, DEFAULT_PROCESSING_FEE};

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub log_level: String,
    pub cors_origins: Vec<String>,
    /// Tipo de cambio orientativo LKR por USD
    pub lkr_per_usd: Decimal,
    pub default_processing_fee: Decimal,
    pub default_interest_rate: Decimal,
    pub default_loan_term: u32,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parsed_or<T: FromStr + std::fmt::Display + Copy>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("⚠️ {}='{}' no es válido, usando {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            log_level: "debug".to_string(),
            cors_origins: Vec::new(),
            lkr_per_usd: DEFAULT_LKR_PER_USD,
            default_processing_fee: DEFAULT_PROCESSING_FEE,
            default_interest_rate: Decimal::new(12, 0),
            default_loan_term: 60,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración del entorno (después de `dotenvy::dotenv()`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: var_or("ENVIRONMENT", &defaults.environment),
            port: parsed_or("PORT", defaults.port),
            host: var_or("HOST", &defaults.host),
            log_level: var_or("LOG_LEVEL", &defaults.log_level),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            lkr_per_usd: parsed_or("LKR_PER_USD", defaults.lkr_per_usd),
            default_processing_fee: parsed_or(
                "DEFAULT_PROCESSING_FEE",
                defaults.default_processing_fee,
            ),
            default_interest_rate: parsed_or(
                "DEFAULT_INTEREST_RATE",
                defaults.default_interest_rate,
            ),
            default_loan_term: parsed_or("DEFAULT_LOAN_TERM", defaults.default_loan_term),
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Dirección de escucha del servidor
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
