use serde::Serialize;

use crate::models::filter::FilterCriteria;
use crate::models::vehicle::Vehicle;

// Resultado del filtro del marketplace
#[derive(Debug, Serialize)]
pub struct VehicleListResponse {
    pub vehicles: Vec<Vehicle>,
    pub count: usize,
    pub catalog_size: usize,
    pub criteria: FilterCriteria,
}
