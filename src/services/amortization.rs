//! Calculadora de cuotas (EMI)
//!
//! Fórmula estándar de préstamo amortizable a tipo fijo:
//! `P * r * (1 + r)^n / ((1 + r)^n - 1)` con `r` el tipo mensual.
//! Cualquier entrada incompleta (principal, tipo o plazo a cero) devuelve
//! cero: la UI lo interpreta como "todavía no calculable". No hay
//! amortización lineal de respaldo para el tipo cero.

use rust_decimal::{Decimal, MathematicalOps};

use crate::models::financing::{EmiQuote, FinancingForm, FinancingInput};
use crate::utils::validation::round_currency;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Cuota mensual sin redondear
pub fn monthly_payment(
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
) -> Decimal {
    if principal <= Decimal::ZERO || annual_rate_percent <= Decimal::ZERO || term_months == 0 {
        return Decimal::ZERO;
    }

    let monthly_rate = annual_rate_percent / Decimal::ONE_HUNDRED / MONTHS_PER_YEAR;
    if monthly_rate.is_zero() {
        return Decimal::ZERO;
    }

    let growth = match (Decimal::ONE + monthly_rate).checked_powi(i64::from(term_months)) {
        Some(growth) => growth,
        None => {
            log::warn!(
                "⚠️ (1 + {})^{} fuera de rango, cuota no calculable",
                monthly_rate,
                term_months
            );
            return Decimal::ZERO;
        }
    };

    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        return Decimal::ZERO;
    }

    principal
        .checked_mul(monthly_rate)
        .and_then(|value| value.checked_mul(growth))
        .and_then(|value| value.checked_div(denominator))
        .unwrap_or_else(|| {
            log::warn!("⚠️ Cuota fuera de rango para principal {}", principal);
            Decimal::ZERO
        })
}

/// Total a devolver: cuota por número de meses
pub fn total_repayment(monthly_payment: Decimal, term_months: u32) -> Decimal {
    monthly_payment.saturating_mul(Decimal::from(term_months))
}

/// Cotización completa sobre el importe del préstamo
pub fn quote(input: &FinancingInput) -> EmiQuote {
    build_quote(input.loan_amount, input.annual_rate_percent, input.term_months)
}

/// Cotización a partir del formulario sin validar
pub fn quote_from_form(form: &FinancingForm) -> EmiQuote {
    quote(&form.parse())
}

/// Cotización rápida del marketplace: se financia el landed cost menos la entrada
pub fn marketplace_quote(
    landed_cost: Decimal,
    down_payment: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
) -> EmiQuote {
    let principal = landed_cost.saturating_sub(down_payment).max(Decimal::ZERO);
    build_quote(principal, annual_rate_percent, term_months)
}

fn build_quote(principal: Decimal, annual_rate_percent: Decimal, term_months: u32) -> EmiQuote {
    let payment = monthly_payment(principal, annual_rate_percent, term_months);
    let total = total_repayment(payment, term_months);
    log::debug!(
        "💳 EMI {} meses al {}% sobre {}: {}",
        term_months,
        annual_rate_percent,
        principal,
        payment
    );

    EmiQuote {
        principal,
        annual_rate_percent,
        term_months,
        monthly_payment: round_currency(payment),
        total_repayment: round_currency(total),
    }
}
