//! Filtro del catálogo de vehículos
//!
//! Conjunción de predicados independientes: cada restricción ausente deja
//! pasar todo en su dimensión. El resultado conserva el orden del catálogo.

use crate::models::filter::FilterCriteria;
use crate::models::vehicle::Vehicle;

/// ¿Cumple el vehículo todas las restricciones presentes?
pub fn matches(vehicle: &Vehicle, criteria: &FilterCriteria) -> bool {
    let matches_search = criteria.query.as_ref().map_or(true, |query| {
        vehicle
            .display_name()
            .to_lowercase()
            .contains(&query.to_lowercase())
    });

    matches_search
        && criteria.make.as_ref().map_or(true, |make| vehicle.make == *make)
        && criteria.fuel_type.map_or(true, |fuel| vehicle.fuel_type == fuel)
        && criteria.body_type.map_or(true, |body| vehicle.body_type == body)
        && criteria
            .transmission
            .map_or(true, |transmission| vehicle.transmission == transmission)
        && criteria
            .drive_type
            .as_ref()
            .map_or(true, |drive| vehicle.drive_type == *drive)
        && criteria.stock_type.map_or(true, |stock| vehicle.stock_type == stock)
        && criteria.year_from.map_or(true, |from| vehicle.year >= from)
        && criteria.year_to.map_or(true, |to| vehicle.year <= to)
        && criteria.mileage_max.map_or(true, |max| vehicle.mileage <= max)
        && criteria.price_min.map_or(true, |min| vehicle.price >= min)
        && criteria.price_max.map_or(true, |max| vehicle.price <= max)
}

/// Subsecuencia del catálogo que cumple los criterios, en el mismo orden
pub fn filter(catalog: &[Vehicle], criteria: &FilterCriteria) -> Vec<Vehicle> {
    let result: Vec<Vehicle> = catalog
        .iter()
        .filter(|vehicle| matches(vehicle, criteria))
        .cloned()
        .collect();

    log::debug!("🔎 Filtro de catálogo: {} de {} vehículos", result.len(), catalog.len());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::{BodyType, FuelType, StockType, Transmission};
    use crate::services::catalog::Catalog;
    use rust_decimal::Decimal;

    fn ids(vehicles: &[Vehicle]) -> Vec<u32> {
        vehicles.iter().map(|v| v.id).collect()
    }

    #[test]
    fn test_empty_criteria_returns_full_catalog_in_order() {
        let catalog = Catalog::fixed();
        let result = filter(catalog.all(), &FilterCriteria::default());
        assert_eq!(result, catalog.all().to_vec());
    }

    #[test]
    fn test_make_is_exact_match() {
        let catalog = Catalog::fixed();
        let criteria = FilterCriteria {
            make: Some("Toyota".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(catalog.all(), &criteria)), vec![1]);

        let lowercase = FilterCriteria {
            make: Some("toyota".to_string()),
            ..FilterCriteria::default()
        };
        assert!(filter(catalog.all(), &lowercase).is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive_over_make_and_model() {
        let catalog = Catalog::fixed();
        let criteria = FilterCriteria {
            query: Some("HONDA civ".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(catalog.all(), &criteria)), vec![2]);

        let by_model = FilterCriteria {
            query: Some("cx-5".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(catalog.all(), &by_model)), vec![4]);
    }

    #[test]
    fn test_single_year_range() {
        let catalog = Catalog::fixed();
        let criteria = FilterCriteria {
            year_from: Some(2020),
            year_to: Some(2020),
            ..FilterCriteria::default()
        };
        let result = filter(catalog.all(), &criteria);
        assert_eq!(ids(&result), vec![1, 4]);
        assert!(result.iter().all(|v| v.year == 2020));
    }

    #[test]
    fn test_enum_and_range_predicates() {
        let catalog = Catalog::fixed();

        let suv = FilterCriteria {
            body_type: Some(BodyType::Suv),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(catalog.all(), &suv)), vec![4]);

        let cvt_auction = FilterCriteria {
            transmission: Some(Transmission::Cvt),
            stock_type: Some(StockType::Auction),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(catalog.all(), &cvt_auction)), vec![1, 3]);

        let low_mileage = FilterCriteria {
            mileage_max: Some(32000),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(catalog.all(), &low_mileage)), vec![2, 3]);

        let price_band = FilterCriteria {
            price_min: Some(Decimal::new(25000, 0)),
            price_max: Some(Decimal::new(28000, 0)),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(catalog.all(), &price_band)), vec![1, 3]);

        let awd = FilterCriteria {
            drive_type: Some("AWD".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(catalog.all(), &awd)), vec![4]);

        let diesel = FilterCriteria {
            fuel_type: Some(FuelType::Diesel),
            ..FilterCriteria::default()
        };
        assert!(filter(catalog.all(), &diesel).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = Catalog::fixed();
        let criteria = FilterCriteria {
            fuel_type: Some(FuelType::Petrol),
            price_max: Some(Decimal::new(30000, 0)),
            ..FilterCriteria::default()
        };
        let once = filter(catalog.all(), &criteria);
        let twice = filter(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_combined_filter_is_intersection() {
        let catalog = Catalog::fixed();
        let make = FilterCriteria {
            make: Some("Toyota".to_string()),
            ..FilterCriteria::default()
        };
        let fuel = FilterCriteria {
            fuel_type: Some(FuelType::Petrol),
            ..FilterCriteria::default()
        };
        let price = FilterCriteria {
            price_max: Some(Decimal::new(30000, 0)),
            ..FilterCriteria::default()
        };
        let combined = FilterCriteria {
            make: make.make.clone(),
            fuel_type: fuel.fuel_type,
            price_max: price.price_max,
            ..FilterCriteria::default()
        };

        let by_make = ids(&filter(catalog.all(), &make));
        let by_fuel = ids(&filter(catalog.all(), &fuel));
        let by_price = ids(&filter(catalog.all(), &price));
        let expected: Vec<u32> = by_make
            .into_iter()
            .filter(|id| by_fuel.contains(id) && by_price.contains(id))
            .collect();

        assert_eq!(ids(&filter(catalog.all(), &combined)), expected);
    }
}
