//! Catálogo fijo de vehículos
//!
//! El inventario está codificado en memoria; no hay persistencia.

use rust_decimal::Decimal;
use std::collections::BTreeSet;

use crate::models::filter::FilterCriteria;
use crate::models::vehicle::{BodyType, FuelType, StockType, Transmission, Vehicle};
use crate::services::vehicle_filter;

#[derive(Debug, Clone)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
}

impl Catalog {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    /// Inventario de subastas y concesionarios japoneses
    pub fn fixed() -> Self {
        Self::new(vec![
            Vehicle {
                id: 1,
                make: "Toyota".to_string(),
                model: "Camry".to_string(),
                year: 2020,
                mileage: 45000,
                engine: "2.5L".to_string(),
                fuel_type: FuelType::Petrol,
                transmission: Transmission::Cvt,
                body_type: BodyType::Sedan,
                drive_type: "FWD".to_string(),
                price: Decimal::new(28000, 0),
                location: "Tokyo".to_string(),
                auction_grade: Decimal::new(45, 1),
                stock_type: StockType::Auction,
                features: features(&["Navigation", "Backup Camera", "Bluetooth", "Keyless Entry"]),
                image: "https://images.unsplash.com/photo-1621007947382-bb3c3994e3fb".to_string(),
            },
            Vehicle {
                id: 2,
                make: "Honda".to_string(),
                model: "Civic".to_string(),
                year: 2019,
                mileage: 32000,
                engine: "1.5L Turbo".to_string(),
                fuel_type: FuelType::Petrol,
                transmission: Transmission::Cvt,
                body_type: BodyType::Sedan,
                drive_type: "FWD".to_string(),
                price: Decimal::new(24500, 0),
                location: "Osaka".to_string(),
                auction_grade: Decimal::new(40, 1),
                stock_type: StockType::Dealer,
                features: features(&[
                    "Honda Sensing",
                    "Apple CarPlay",
                    "LED Headlights",
                    "Sunroof",
                ]),
                image: "https://images.unsplash.com/photo-1594070319944-7c0cbebb6f58".to_string(),
            },
            Vehicle {
                id: 3,
                make: "Nissan".to_string(),
                model: "Altima".to_string(),
                year: 2021,
                mileage: 28000,
                engine: "2.5L".to_string(),
                fuel_type: FuelType::Petrol,
                transmission: Transmission::Cvt,
                body_type: BodyType::Sedan,
                drive_type: "FWD".to_string(),
                price: Decimal::new(26800, 0),
                location: "Yokohama".to_string(),
                auction_grade: Decimal::new(45, 1),
                stock_type: StockType::Auction,
                features: features(&[
                    "ProPILOT Assist",
                    "Bose Audio",
                    "Wireless Charging",
                    "Remote Start",
                ]),
                image: "https://images.unsplash.com/photo-1598889933677-e433366327f6".to_string(),
            },
            Vehicle {
                id: 4,
                make: "Mazda".to_string(),
                model: "CX-5".to_string(),
                year: 2020,
                mileage: 38000,
                engine: "2.5L".to_string(),
                fuel_type: FuelType::Petrol,
                transmission: Transmission::Auto,
                body_type: BodyType::Suv,
                drive_type: "AWD".to_string(),
                price: Decimal::new(32000, 0),
                location: "Nagoya".to_string(),
                auction_grade: Decimal::new(40, 1),
                stock_type: StockType::Dealer,
                features: features(&[
                    "i-ACTIVSENSE",
                    "Bose Sound",
                    "Leather Seats",
                    "Power Liftgate",
                ]),
                image: "https://images.unsplash.com/photo-1558737429-ba3f40f977e5".to_string(),
            },
        ])
    }

    pub fn all(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn find(&self, id: u32) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.id == id)
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Vehicle> {
        vehicle_filter::filter(&self.vehicles, criteria)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

fn features(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_catalog() {
        let catalog = Catalog::fixed();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.find(4).map(|v| v.model.as_str()), Some("CX-5"));
        assert!(catalog.find(99).is_none());
    }

    #[test]
    fn test_grades_are_within_scale() {
        let catalog = Catalog::fixed();
        assert!(catalog
            .all()
            .iter()
            .all(|v| v.auction_grade >= Decimal::ZERO && v.auction_grade <= Decimal::new(5, 0)));
    }
}
