use rust_decimal::Decimal;
use std::convert::TryFrom;
use std::sync::Arc;

use crate::dto::vehicle_dto::VehicleListResponse;
use crate::models::cost::CostForm;
use crate::models::filter::{FilterCriteria, FilterForm};
use crate::models::vehicle::Vehicle;
use crate::services::catalog::Catalog;
use crate::services::cost_estimator;
use crate::utils::errors::{not_found_error, AppResult};

pub struct MarketplaceController {
    catalog: Arc<Catalog>,
    processing_fee: Decimal,
}

impl MarketplaceController {
    pub fn new(catalog: Arc<Catalog>, processing_fee: Decimal) -> Self {
        Self {
            catalog,
            processing_fee,
        }
    }

    pub fn list(&self, form: FilterForm) -> AppResult<VehicleListResponse> {
        let criteria = FilterCriteria::try_from(form)?;
        let vehicles = self.catalog.filter(&criteria);

        Ok(VehicleListResponse {
            count: vehicles.len(),
            catalog_size: self.catalog.len(),
            vehicles,
            criteria,
        })
    }

    pub fn get_by_id(&self, id: u32) -> AppResult<Vehicle> {
        self.catalog
            .find(id)
            .cloned()
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))
    }

    /// Formulario del calculador de landed cost precargado con el CIF del vehículo
    pub fn cost_form(&self, id: u32) -> AppResult<CostForm> {
        let vehicle = self.get_by_id(id)?;
        Ok(cost_estimator::seed_from_vehicle(&vehicle, self.processing_fee))
    }
}
