//! Resumen de checkout
//!
//! Junta el desglose de costes del vehículo elegido, la cotización de
//! financiación y el borrador de la carta de crédito. No procesa pagos.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::cost::CostBreakdown;
use crate::models::financing::{EmiQuote, FinancingForm};
use crate::models::vehicle::Vehicle;
use crate::services::{amortization, cost_estimator};

/// Aranceles ilustrativos sobre el CIF (30%)
pub const ILLUSTRATIVE_DUTY_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);
/// IVA ilustrativo sobre el CIF (15%)
pub const ILLUSTRATIVE_VAT_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);
pub const ILLUSTRATIVE_PORT_CHARGES: Decimal = Decimal::from_parts(1500, 0, 0, false, 0);

pub const LC_BENEFICIARY_BANK: &str = "Sumitomo Mitsui Banking Corporation";
pub const LC_VALIDITY_DAYS: u32 = 90;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleSummary {
    pub id: u32,
    pub title: String,
    pub cif_value: Decimal,
    pub auction_grade: Decimal,
    pub image: String,
}

/// Borrador de carta de crédito: sólo el importe, no hay emisión
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LetterOfCreditDraft {
    pub amount: Decimal,
    pub beneficiary_bank: String,
    pub validity_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub vehicle: VehicleSummary,
    pub breakdown: CostBreakdown,
    pub total: Decimal,
    pub exchange_rate: Decimal,
    pub local_currency_total: Decimal,
    pub financing: EmiQuote,
    pub letter_of_credit: LetterOfCreditDraft,
}

/// Desglose ilustrativo a partir del CIF del vehículo
pub fn illustrative_breakdown(vehicle: &Vehicle, processing_fee: Decimal) -> CostBreakdown {
    CostBreakdown {
        cif_value: vehicle.price,
        duties: vehicle.price * ILLUSTRATIVE_DUTY_RATE,
        vat: vehicle.price * ILLUSTRATIVE_VAT_RATE,
        port_charges: ILLUSTRATIVE_PORT_CHARGES,
        processing_fee,
    }
}

pub fn summarize(
    vehicle: &Vehicle,
    breakdown: CostBreakdown,
    financing: &FinancingForm,
    exchange_rate: Decimal,
) -> CheckoutSummary {
    let total = cost_estimator::estimate(&breakdown);
    log::info!("🧾 Checkout de {} por {} USD", vehicle.title(), total);

    CheckoutSummary {
        vehicle: VehicleSummary {
            id: vehicle.id,
            title: vehicle.title(),
            cif_value: vehicle.price,
            auction_grade: vehicle.auction_grade,
            image: vehicle.image.clone(),
        },
        breakdown,
        total,
        exchange_rate,
        local_currency_total: cost_estimator::to_local_currency(total, exchange_rate),
        financing: amortization::quote_from_form(financing),
        letter_of_credit: LetterOfCreditDraft {
            amount: total,
            beneficiary_bank: LC_BENEFICIARY_BANK.to_string(),
            validity_days: LC_VALIDITY_DAYS,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::Catalog;
    use crate::services::cost_estimator::{DEFAULT_LKR_PER_USD, DEFAULT_PROCESSING_FEE};

    #[test]
    fn test_illustrative_breakdown_matches_checkout_fixture() {
        let catalog = Catalog::fixed();
        let camry = catalog.find(1).unwrap();
        let breakdown = illustrative_breakdown(camry, DEFAULT_PROCESSING_FEE);
        assert_eq!(breakdown.duties, Decimal::new(8400, 0));
        assert_eq!(breakdown.vat, Decimal::new(4200, 0));
        assert_eq!(breakdown.total(), Decimal::new(42600, 0));
    }

    #[test]
    fn test_summary_uses_landed_total_for_letter_of_credit() {
        let catalog = Catalog::fixed();
        let camry = catalog.find(1).unwrap();
        let summary = summarize(
            camry,
            illustrative_breakdown(camry, DEFAULT_PROCESSING_FEE),
            &FinancingForm::checkout_defaults(),
            DEFAULT_LKR_PER_USD,
        );
        assert_eq!(summary.vehicle.title, "2020 Toyota Camry");
        assert_eq!(summary.letter_of_credit.amount, summary.total);
        assert_eq!(summary.letter_of_credit.validity_days, 90);
        assert_eq!(summary.local_currency_total, Decimal::new(12_780_000, 0));
        assert_eq!(summary.financing.monthly_payment, Decimal::new(77856, 2));
    }
}
