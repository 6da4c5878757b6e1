//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle del catálogo de importación y
//! los enums de sus campos categóricos. Los vehículos son inmutables:
//! provienen de un catálogo fijo y nunca se modifican en tiempo de ejecución.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Tipo de combustible
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FuelType {
    Petrol,
    Hybrid,
    Diesel,
    Electric,
}

/// Tipo de transmisión
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Transmission {
    Auto,
    #[serde(rename = "CVT")]
    Cvt,
    Manual,
}

/// Tipo de carrocería
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BodyType {
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Hatchback,
    Wagon,
    Coupe,
}

/// Origen del stock
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StockType {
    Auction,
    Dealer,
}

/// Error al convertir una etiqueta de formulario en un enum del vehículo
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} '{value}'")]
pub struct UnknownLabel {
    pub field: &'static str,
    pub value: String,
}

macro_rules! labelled_enum {
    ($ty:ident, $field:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            /// Etiqueta tal como aparece en el catálogo y en los selectores
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownLabel;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($label => Ok($ty::$variant),)+
                    other => Err(UnknownLabel {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

labelled_enum!(FuelType, "fuel type", {
    Petrol => "Petrol",
    Hybrid => "Hybrid",
    Diesel => "Diesel",
    Electric => "Electric",
});

labelled_enum!(Transmission, "transmission", {
    Auto => "Auto",
    Cvt => "CVT",
    Manual => "Manual",
});

labelled_enum!(BodyType, "body type", {
    Sedan => "Sedan",
    Suv => "SUV",
    Hatchback => "Hatchback",
    Wagon => "Wagon",
    Coupe => "Coupe",
});

labelled_enum!(StockType, "stock type", {
    Auction => "Auction",
    Dealer => "Dealer",
});

/// Vehicle del catálogo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: u32,
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Kilometraje en km
    pub mileage: u32,
    pub engine: String,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub body_type: BodyType,
    pub drive_type: String,
    /// Valor CIF en USD
    pub price: Decimal,
    pub location: String,
    /// Nota de subasta, de 0 a 5
    pub auction_grade: Decimal,
    pub stock_type: StockType,
    pub features: BTreeSet<String>,
    pub image: String,
}

impl Vehicle {
    /// "Make Model", el texto sobre el que se hace la búsqueda libre
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }

    /// "Year Make Model", como se muestra en pedidos y checkout
    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_from_str() {
        assert_eq!("CVT".parse::<Transmission>(), Ok(Transmission::Cvt));
        assert_eq!("SUV".parse::<BodyType>(), Ok(BodyType::Suv));
        assert_eq!(FuelType::Hybrid.to_string(), "Hybrid");
        assert_eq!(StockType::Dealer.as_str(), "Dealer");
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let err = "petrol".parse::<FuelType>().unwrap_err();
        assert_eq!(err.field, "fuel type");
        assert_eq!(err.to_string(), "unknown fuel type 'petrol'");
    }

    #[test]
    fn test_serde_uses_catalog_labels() {
        assert_eq!(serde_json::to_string(&Transmission::Cvt).unwrap(), "\"CVT\"");
        assert_eq!(serde_json::to_string(&BodyType::Suv).unwrap(), "\"SUV\"");
    }
}
