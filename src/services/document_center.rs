//! Centro de documentos
//!
//! Checklist fijo de documentos del pedido ORD-2024-001, con el progreso de
//! verificación por categoría y global, y el registro de auditoría.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::document::{AuditEntry, Document, DocumentCategory, DocumentStatus};
use crate::utils::validation::percentage;

/// Documentos y auditoría de un pedido
#[derive(Debug, Clone)]
pub struct DocumentChecklist {
    pub order_id: String,
    pub documents: Vec<Document>,
    pub audit_trail: Vec<AuditEntry>,
}

/// Conteo de documentos por estado
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub verified: usize,
    pub pending: usize,
    pub rejected: usize,
    pub not_uploaded: usize,
}

/// Resumen de una categoría para la vista de checklist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: DocumentCategory,
    pub name: String,
    pub description: String,
    pub required: bool,
    pub document_count: usize,
    pub progress: Decimal,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
}

fn document(
    id: u32,
    name: &str,
    category: DocumentCategory,
    size: &str,
    upload_date: NaiveDate,
    status: DocumentStatus,
    description: &str,
) -> Document {
    Document {
        id,
        name: name.to_string(),
        category,
        file_type: "PDF".to_string(),
        size: size.to_string(),
        upload_date,
        status,
        description: description.to_string(),
        required: true,
        rejection_reason: None,
    }
}

fn audit(
    id: u32,
    action: &str,
    document: &str,
    actor: &str,
    timestamp: NaiveDateTime,
    details: &str,
) -> AuditEntry {
    AuditEntry {
        id,
        action: action.to_string(),
        document: document.to_string(),
        actor: actor.to_string(),
        timestamp,
        details: details.to_string(),
    }
}

impl DocumentChecklist {
    pub const FIXTURE_ORDER_ID: &'static str = "ORD-2024-001";

    pub fn fixed() -> Self {
        use DocumentCategory::*;
        use DocumentStatus::*;

        let mut bank_statement = document(
            8,
            "Bank Statement",
            Personal,
            "1.3 MB",
            date(2023, 11, 30),
            Rejected,
            "Last 3 months bank statements",
        );
        bank_statement.rejection_reason = Some("Document is older than 3 months".to_string());

        let documents = vec![
            document(
                1,
                "Purchase Invoice",
                Purchase,
                "2.4 MB",
                date(2023, 12, 1),
                Verified,
                "Original purchase invoice from Japanese dealer",
            ),
            document(
                2,
                "Auction Sheet",
                Purchase,
                "1.8 MB",
                date(2023, 12, 1),
                Verified,
                "Detailed vehicle condition report from auction",
            ),
            document(
                3,
                "Export Certificate",
                Purchase,
                "1.2 MB",
                date(2023, 12, 2),
                Verified,
                "Certificate of export from Japan",
            ),
            document(
                4,
                "Bill of Lading",
                Shipping,
                "956 KB",
                date(2023, 12, 5),
                Pending,
                "Shipping document from carrier",
            ),
            document(
                5,
                "Shipping Manifest",
                Shipping,
                "1.1 MB",
                date(2023, 12, 5),
                Pending,
                "Detailed cargo manifest",
            ),
            document(
                6,
                "Import Permit",
                Customs,
                "800 KB",
                date(2023, 12, 8),
                Pending,
                "Sri Lankan import permit",
            ),
            document(
                7,
                "NIC Copy",
                Personal,
                "650 KB",
                date(2023, 12, 1),
                Verified,
                "Copy of National Identity Card",
            ),
            bank_statement,
        ];

        let audit_trail = vec![
            audit(
                1,
                "Document Uploaded",
                "Purchase Invoice",
                "Customer",
                at(2023, 12, 1, 10, 30),
                "Original purchase invoice uploaded",
            ),
            audit(
                2,
                "Document Verified",
                "Purchase Invoice",
                "AutoLink Staff",
                at(2023, 12, 1, 14, 15),
                "Document verified and approved",
            ),
            audit(
                3,
                "Document Rejected",
                "Bank Statement",
                "AutoLink Staff",
                at(2023, 12, 2, 11, 45),
                "Document rejected - outdated",
            ),
            audit(
                4,
                "Escrow Release Triggered",
                "All Purchase Documents",
                "System",
                at(2023, 12, 2, 15, 30),
                "All purchase documents verified, escrow release initiated",
            ),
        ];

        Self {
            order_id: Self::FIXTURE_ORDER_ID.to_string(),
            documents,
            audit_trail,
        }
    }

    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        DocumentCategory::ALL
            .iter()
            .map(|category| CategorySummary {
                category: *category,
                name: category.name().to_string(),
                description: category.description().to_string(),
                required: category.is_required(),
                document_count: self
                    .documents
                    .iter()
                    .filter(|doc| doc.category == *category)
                    .count(),
                progress: category_progress(&self.documents, *category),
            })
            .collect()
    }
}

/// Porcentaje verificado dentro de una categoría; cero si está vacía
pub fn category_progress(documents: &[Document], category: DocumentCategory) -> Decimal {
    let in_category: Vec<&Document> = documents
        .iter()
        .filter(|doc| doc.category == category)
        .collect();
    let verified = in_category
        .iter()
        .filter(|doc| doc.status == DocumentStatus::Verified)
        .count();
    percentage(verified, in_category.len())
}

/// Porcentaje de documentos obligatorios verificados; cero si no hay ninguno
pub fn overall_progress(documents: &[Document]) -> Decimal {
    let required: Vec<&Document> = documents.iter().filter(|doc| doc.required).collect();
    let verified = required
        .iter()
        .filter(|doc| doc.status == DocumentStatus::Verified)
        .count();
    percentage(verified, required.len())
}

pub fn status_counts(documents: &[Document]) -> StatusCounts {
    documents
        .iter()
        .fold(StatusCounts::default(), |mut counts, doc| {
            match doc.status {
                DocumentStatus::Verified => counts.verified += 1,
                DocumentStatus::Pending => counts.pending += 1,
                DocumentStatus::Rejected => counts.rejected += 1,
                DocumentStatus::NotUploaded => counts.not_uploaded += 1,
            }
            counts
        })
}

/// Obligatorios todavía sin verificar, en el orden del checklist
pub fn outstanding(documents: &[Document]) -> Vec<&Document> {
    documents
        .iter()
        .filter(|doc| doc.required && doc.status != DocumentStatus::Verified)
        .collect()
}
