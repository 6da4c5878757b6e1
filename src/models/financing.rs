//! Modelo de financiación
//!
//! Entradas del calculador de cuotas (EMI) y de la solicitud de
//! financiación del checkout.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{parse_amount, parse_term_months, validate_not_blank};

/// Plazos ofrecidos en los selectores, en meses
pub const LOAN_TERM_OPTIONS: [u32; 4] = [36, 48, 60, 72];

/// Datos del solicitante; opacos, sólo se comprueba que estén presentes
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(default)]
pub struct ApplicantDetails {
    #[validate(custom = "validate_not_blank")]
    pub monthly_income: String,

    #[validate(custom = "validate_not_blank")]
    pub employment_type: String,

    #[validate(custom = "validate_not_blank")]
    pub company_name: String,

    #[validate(custom = "validate_not_blank")]
    pub working_years: String,
}

/// Entrada tipada del calculador
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinancingInput {
    /// Importe financiado (principal)
    pub loan_amount: Decimal,
    pub down_payment: Decimal,
    pub annual_rate_percent: Decimal,
    pub term_months: u32,
}

/// Formulario de financiación tal como lo escribe el usuario
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FinancingForm {
    pub loan_amount: String,
    pub down_payment: String,
    pub interest_rate: String,
    pub loan_term: String,
}

impl FinancingForm {
    /// Valores por defecto del formulario de checkout
    pub fn checkout_defaults() -> Self {
        Self {
            loan_amount: "35000".to_string(),
            down_payment: "7600".to_string(),
            interest_rate: "12".to_string(),
            loan_term: "60".to_string(),
        }
    }

    /// Convertir cada campo con parse-or-zero
    pub fn parse(&self) -> FinancingInput {
        FinancingInput {
            loan_amount: parse_amount(&self.loan_amount),
            down_payment: parse_amount(&self.down_payment),
            annual_rate_percent: parse_amount(&self.interest_rate),
            term_months: parse_term_months(&self.loan_term),
        }
    }
}

/// Solicitud de financiación completa (formulario + solicitante)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FinancingApplication {
    #[serde(flatten)]
    pub loan: FinancingForm,

    #[validate]
    pub applicant: ApplicantDetails,
}

/// Cuota mensual y total a devolver, redondeados al céntimo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmiQuote {
    pub principal: Decimal,
    pub annual_rate_percent: Decimal,
    pub term_months: u32,
    pub monthly_payment: Decimal,
    pub total_repayment: Decimal,
}

impl EmiQuote {
    /// Una cuota de cero significa "todavía no calculable"
    pub fn is_computable(&self) -> bool {
        !self.monthly_payment.is_zero()
    }
}
