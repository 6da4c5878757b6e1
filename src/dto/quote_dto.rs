use serde::{Deserialize, Serialize};

use crate::models::cost::CostForm;
use crate::models::financing::EmiQuote;
use crate::services::cost_estimator::LandedCostEstimate;

// Request de la cotización rápida del marketplace (calculador + EMI)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MarketplaceQuoteRequest {
    pub cost: CostForm,
    pub down_payment: String,
    // Vacíos: se usan el tipo y el plazo por defecto de la configuración
    pub interest_rate: Option<String>,
    pub loan_term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MarketplaceQuoteResponse {
    pub landed_cost: LandedCostEstimate,
    pub financing: EmiQuote,
}

// Response del calculador de EMI
#[derive(Debug, Serialize)]
pub struct EmiResponse {
    #[serde(flatten)]
    pub quote: EmiQuote,
    pub computable: bool,
    pub term_options: Vec<u32>,
}
