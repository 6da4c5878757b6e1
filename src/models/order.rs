//! Modelo de pedidos
//!
//! Pedido de importación, su línea de tiempo de seguimiento y las
//! notificaciones asociadas.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Estado de una etapa de la línea de tiempo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Completed,
    Current,
    Upcoming,
}

/// Etapa del seguimiento (pedido, pago, embarque...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackingStage {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: StageStatus,
    /// Sólo las etapas ya alcanzadas tienen fecha
    pub reached_at: Option<NaiveDateTime>,
    pub details: Option<String>,
}

/// Pedido de importación
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    pub vehicle: String,
    pub status: String,
    pub current_location: String,
    pub estimated_delivery: NaiveDate,
    /// Progreso informado por el transportista, en %
    pub progress: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Update,
    Document,
    Payment,
}

/// Notificación al cliente sobre su pedido
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub age: String,
    pub read: bool,
}
