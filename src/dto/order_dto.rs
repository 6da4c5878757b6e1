use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::document::{AuditEntry, Document};
use crate::models::order::{Notification, Order, TrackingStage};
use crate::services::document_center::{CategorySummary, StatusCounts};

// Pedido con su línea de tiempo
#[derive(Debug, Serialize)]
pub struct OrderDetailResponse {
    pub order: Order,
    pub timeline: Vec<TrackingStage>,
    pub timeline_progress: Decimal,
    pub current_stage: Option<TrackingStage>,
}

#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
    pub unread: usize,
}

// Checklist de documentos de un pedido
#[derive(Debug, Serialize)]
pub struct DocumentsResponse {
    pub order_id: String,
    pub documents: Vec<Document>,
    pub categories: Vec<CategorySummary>,
    pub overall_progress: Decimal,
    pub counts: StatusCounts,
    pub outstanding: Vec<Document>,
}

#[derive(Debug, Serialize)]
pub struct AuditTrailResponse {
    pub order_id: String,
    pub entries: Vec<AuditEntry>,
}
