use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::quote_dto::{EmiResponse, MarketplaceQuoteRequest, MarketplaceQuoteResponse};
use crate::dto::ApiResponse;
use crate::models::cost::CostForm;
use crate::models::financing::{EmiQuote, FinancingApplication, FinancingForm, LOAN_TERM_OPTIONS};
use crate::services::amortization;
use crate::services::catalog::Catalog;
use crate::services::checkout::{self, CheckoutSummary};
use crate::services::cost_estimator::{self, LandedCostEstimate};
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::validation::{parse_amount, parse_term_months};

pub struct QuoteController {
    config: EnvironmentConfig,
}

impl QuoteController {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self { config }
    }

    pub fn landed_cost(&self, form: &CostForm) -> LandedCostEstimate {
        cost_estimator::estimate_form(form, self.config.lkr_per_usd)
    }

    pub fn emi(&self, form: &FinancingForm) -> EmiResponse {
        let quote = amortization::quote_from_form(form);
        EmiResponse {
            computable: quote.is_computable(),
            quote,
            term_options: LOAN_TERM_OPTIONS.to_vec(),
        }
    }

    /// Landed cost y cuota sobre (landed cost - entrada)
    pub fn marketplace_quote(&self, request: &MarketplaceQuoteRequest) -> MarketplaceQuoteResponse {
        let landed_cost = self.landed_cost(&request.cost);

        let rate = match request.interest_rate.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => parse_amount(raw),
            _ => self.config.default_interest_rate,
        };
        let term = match request.loan_term.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => parse_term_months(raw),
            _ => self.config.default_loan_term,
        };

        let financing = amortization::marketplace_quote(
            landed_cost.total,
            parse_amount(&request.down_payment),
            rate,
            term,
        );

        MarketplaceQuoteResponse {
            landed_cost,
            financing,
        }
    }

    /// Comprobar presencia de los datos del solicitante y devolver la cotización
    pub fn validate_application(
        &self,
        application: &FinancingApplication,
    ) -> AppResult<ApiResponse<EmiQuote>> {
        application.validate()?;
        let quote = amortization::quote_from_form(&application.loan);
        log::info!("📝 Solicitud de financiación completa, cuota {}", quote.monthly_payment);

        Ok(ApiResponse::success_with_message(
            quote,
            "Financing application is complete".to_string(),
        ))
    }

    pub fn checkout(&self, catalog: &Catalog, vehicle_id: u32) -> AppResult<CheckoutSummary> {
        let vehicle = catalog
            .find(vehicle_id)
            .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))?;

        let breakdown =
            checkout::illustrative_breakdown(vehicle, self.config.default_processing_fee);
        Ok(checkout::summarize(
            vehicle,
            breakdown,
            &FinancingForm::checkout_defaults(),
            self.config.lkr_per_usd,
        ))
    }
}
