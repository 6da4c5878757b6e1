//! Filtros para búsqueda de vehículos
//!
//! `FilterCriteria` es la forma tipada; `FilterForm` llega como query string
//! con todos los campos opcionales en texto. Un campo ausente o vacío
//! significa "sin restricción" en esa dimensión.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

use crate::models::vehicle::{BodyType, FuelType, StockType, Transmission, UnknownLabel};
use crate::utils::errors::{bad_request_error, AppError, AppResult};
use crate::utils::validation::{parse_decimal_prefix, parse_whole_number};

/// Criterios tipados del filtro de catálogo
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: Option<String>,
    pub make: Option<String>,
    pub fuel_type: Option<FuelType>,
    pub body_type: Option<BodyType>,
    pub transmission: Option<Transmission>,
    pub drive_type: Option<String>,
    pub stock_type: Option<StockType>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub mileage_max: Option<u32>,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
}

impl FilterCriteria {
    /// Sin ninguna restricción: coincide con todo el catálogo
    pub fn is_empty(&self) -> bool {
        *self == FilterCriteria::default()
    }
}

/// Panel de filtros tal como lo envía el cliente
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterForm {
    pub q: String,
    pub make: String,
    pub fuel_type: String,
    pub body_type: String,
    pub transmission: String,
    pub drive_type: String,
    pub stock_type: String,
    pub year_from: String,
    pub year_to: String,
    pub mileage_max: String,
    pub price_min: String,
    pub price_max: String,
}

fn present(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn label<T>(raw: &str) -> AppResult<Option<T>>
where
    T: std::str::FromStr<Err = UnknownLabel>,
{
    present(raw)
        .map(|value| value.parse::<T>().map_err(|e| bad_request_error(&e.to_string())))
        .transpose()
}

/// Límite entero no negativo (año, kilometraje)
fn whole_number<T: TryFrom<i64>>(field: &str, raw: &str) -> AppResult<Option<T>> {
    present(raw)
        .map(|value| {
            parse_whole_number(value)
                .filter(|number| *number >= 0)
                .and_then(|number| T::try_from(number).ok())
                .ok_or_else(|| {
                    bad_request_error(&format!("{} '{}' is not a valid number", field, value))
                })
        })
        .transpose()
}

/// Límite de precio no negativo
fn amount(field: &str, raw: &str) -> AppResult<Option<Decimal>> {
    present(raw)
        .map(|value| {
            parse_decimal_prefix(value)
                .filter(|amount| !amount.is_sign_negative() || amount.is_zero())
                .ok_or_else(|| {
                    bad_request_error(&format!("{} '{}' is not a valid amount", field, value))
                })
        })
        .transpose()
}

impl TryFrom<FilterForm> for FilterCriteria {
    type Error = AppError;

    fn try_from(form: FilterForm) -> Result<Self, Self::Error> {
        Ok(FilterCriteria {
            // La búsqueda libre no se recorta: "Toyota " también es una subcadena válida.
            // Make y tracción sí: llegan de un selector y se comparan sin espacios.
            query: if form.q.is_empty() { None } else { Some(form.q.clone()) },
            make: present(&form.make).map(str::to_string),
            fuel_type: label(&form.fuel_type)?,
            body_type: label(&form.body_type)?,
            transmission: label(&form.transmission)?,
            drive_type: present(&form.drive_type).map(str::to_string),
            stock_type: label(&form.stock_type)?,
            year_from: whole_number("year_from", &form.year_from)?,
            year_to: whole_number("year_to", &form.year_to)?,
            mileage_max: whole_number("mileage_max", &form.mileage_max)?,
            price_min: amount("price_min", &form.price_min)?,
            price_max: amount("price_max", &form.price_max)?,
        })
    }
}
