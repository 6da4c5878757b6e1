//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para convertir los campos de
//! formulario (strings sin tipo) en valores numéricos en la frontera.
//! Un campo vacío o no numérico nunca es un error: se sustituye por cero
//! o por "sin restricción" según el caso.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use validator::ValidationError;

lazy_static! {
    // Prefijo numérico tal como lo acepta un campo de tipo number:
    // "12.5abc" -> 12.5, "2.8e4" -> 28000
    static ref DECIMAL_PREFIX: Regex =
        Regex::new(r"^([+-]?(?:\d+(?:\.\d*)?|\.\d+))([eE][+-]?\d+)?").unwrap();
    static ref INTEGER_PREFIX: Regex = Regex::new(r"^[+-]?\d+").unwrap();
}

/// Extraer el prefijo decimal de un string, ignorando espacios iniciales.
/// Un exponente fuera del rango de `Decimal` da `None`.
pub fn parse_decimal_prefix(raw: &str) -> Option<Decimal> {
    let captures = DECIMAL_PREFIX.captures(raw.trim_start())?;
    let mantissa = captures.get(1)?.as_str().trim_end_matches('.');

    match captures.get(2) {
        Some(exponent) => {
            let scientific = format!("{}{}", mantissa, exponent.as_str());
            Decimal::from_scientific(&scientific)
                .map_err(|e| log::debug!("🔢 '{}' fuera de rango: {}", scientific, e))
                .ok()
        }
        None => Decimal::from_str(mantissa).ok(),
    }
}

/// Extraer el prefijo entero de un string, ignorando espacios iniciales
pub fn parse_whole_number(raw: &str) -> Option<i64> {
    let found = INTEGER_PREFIX.find(raw.trim_start())?;
    found.as_str().parse::<i64>().ok()
}

/// Importe en moneda: vacío, no numérico o negativo cuenta como cero
pub fn parse_amount(raw: &str) -> Decimal {
    match parse_decimal_prefix(raw) {
        Some(value) if value.is_sign_positive() => value,
        Some(value) => {
            log::debug!("➖ Importe negativo '{}' sustituido por cero", value);
            Decimal::ZERO
        }
        None => Decimal::ZERO,
    }
}

/// Plazo en meses; la parte fraccionaria se descarta
pub fn parse_term_months(raw: &str) -> u32 {
    parse_decimal_prefix(raw)
        .filter(|value| value.is_sign_positive())
        .and_then(|value| value.trunc().to_u32())
        .unwrap_or(0)
}

/// Redondear al céntimo (unidad menor de la moneda)
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Porcentaje `part / whole * 100` con dos decimales; cero si `whole` es cero
pub fn percentage(part: usize, whole: usize) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    let ratio = Decimal::from(part as u64) * Decimal::ONE_HUNDRED / Decimal::from(whole as u64);
    ratio.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
