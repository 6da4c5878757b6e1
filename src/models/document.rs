//! Modelo de documentos
//!
//! Checklist de documentos de un pedido: categorías, estado de
//! verificación y registro de auditoría.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Estado de verificación de un documento
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Verified,
    Pending,
    Rejected,
    NotUploaded,
}

/// Categoría de documentos
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    Purchase,
    Shipping,
    Customs,
    Registration,
    Personal,
}

impl DocumentCategory {
    pub const ALL: [DocumentCategory; 5] = [
        DocumentCategory::Purchase,
        DocumentCategory::Shipping,
        DocumentCategory::Customs,
        DocumentCategory::Registration,
        DocumentCategory::Personal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DocumentCategory::Purchase => "Purchase Documents",
            DocumentCategory::Shipping => "Shipping Documents",
            DocumentCategory::Customs => "Customs Documents",
            DocumentCategory::Registration => "Registration Papers",
            DocumentCategory::Personal => "Personal Documents",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DocumentCategory::Purchase => "Vehicle purchase and auction documents",
            DocumentCategory::Shipping => "Bill of lading and shipping manifests",
            DocumentCategory::Customs => "Import permits and customs declarations",
            DocumentCategory::Registration => "Vehicle registration certificates",
            DocumentCategory::Personal => "Your identification and supporting documents",
        }
    }

    /// Registration es la única categoría opcional
    pub fn is_required(&self) -> bool {
        !matches!(self, DocumentCategory::Registration)
    }
}

/// Documento del checklist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub id: u32,
    pub name: String,
    pub category: DocumentCategory,
    pub file_type: String,
    pub size: String,
    pub upload_date: NaiveDate,
    pub status: DocumentStatus,
    pub description: String,
    pub required: bool,
    pub rejection_reason: Option<String>,
}

/// Entrada del registro de auditoría
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: u32,
    pub action: String,
    pub document: String,
    pub actor: String,
    pub timestamp: NaiveDateTime,
    pub details: String,
}
