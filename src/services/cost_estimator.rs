//! Estimador de coste de importación (landed cost)
//!
//! El total es la suma exacta de los cinco componentes del desglose. La
//! conversión a rupias es sólo orientativa y nunca forma parte del total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::cost::{CostBreakdown, CostForm};
use crate::models::vehicle::Vehicle;

/// Tipo de cambio ilustrativo LKR por USD
pub const DEFAULT_LKR_PER_USD: Decimal = Decimal::from_parts(300, 0, 0, false, 0);

/// Tasa de procesamiento con la que arranca el calculador
pub const DEFAULT_PROCESSING_FEE: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Resultado del calculador: desglose, total y aproximación en moneda local
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LandedCostEstimate {
    pub breakdown: CostBreakdown,
    pub total: Decimal,
    pub exchange_rate: Decimal,
    pub local_currency_total: Decimal,
}

/// Total del desglose en USD
pub fn estimate(breakdown: &CostBreakdown) -> Decimal {
    breakdown.total()
}

/// Conversión orientativa a moneda local
pub fn to_local_currency(total: Decimal, exchange_rate: Decimal) -> Decimal {
    total.checked_mul(exchange_rate).unwrap_or_else(|| {
        log::warn!("⚠️ Conversión fuera de rango: {} x {}", total, exchange_rate);
        Decimal::ZERO
    })
}

/// Calcular a partir del formulario; los campos ilegibles cuentan como cero
pub fn estimate_form(form: &CostForm, exchange_rate: Decimal) -> LandedCostEstimate {
    let breakdown = form.parse();
    let total = estimate(&breakdown);
    log::debug!("🧮 Landed cost calculado: {} USD", total);

    LandedCostEstimate {
        breakdown,
        total,
        exchange_rate,
        local_currency_total: to_local_currency(total, exchange_rate),
    }
}

/// Formulario inicial al abrir el calculador sobre un vehículo
pub fn seed_from_vehicle(vehicle: &Vehicle, processing_fee: Decimal) -> CostForm {
    CostForm {
        cif_value: vehicle.price.to_string(),
        processing_fee: processing_fee.to_string(),
        ..CostForm::default()
    }
}
