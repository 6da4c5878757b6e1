//! Modelo de costes de importación
//!
//! `CostBreakdown` es la versión tipada del desglose y `CostForm` la versión
//! tal como llega del formulario (strings sin validar).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::validation::parse_amount;

/// Desglose del coste de importación, todo en USD
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CostBreakdown {
    pub cif_value: Decimal,
    pub duties: Decimal,
    pub vat: Decimal,
    pub port_charges: Decimal,
    pub processing_fee: Decimal,
}

impl CostBreakdown {
    /// Coste total (landed cost). Se recalcula siempre, nunca se guarda.
    pub fn total(&self) -> Decimal {
        [self.duties, self.vat, self.port_charges, self.processing_fee]
            .iter()
            .fold(self.cif_value, |acc, charge| acc.saturating_add(*charge))
    }
}

/// Campos del calculador de costes tal como los escribe el usuario
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CostForm {
    pub cif_value: String,
    pub duties: String,
    pub vat: String,
    pub port_charges: String,
    pub processing_fee: String,
}

impl CostForm {
    /// Convertir cada campo con parse-or-zero
    pub fn parse(&self) -> CostBreakdown {
        CostBreakdown {
            cif_value: parse_amount(&self.cif_value),
            duties: parse_amount(&self.duties),
            vat: parse_amount(&self.vat),
            port_charges: parse_amount(&self.port_charges),
            processing_fee: parse_amount(&self.processing_fee),
        }
    }
}
