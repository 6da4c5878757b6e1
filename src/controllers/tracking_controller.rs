use std::sync::Arc;

use crate::dto::order_dto::{
    AuditTrailResponse, DocumentsResponse, NotificationsResponse, OrderDetailResponse,
};
use crate::models::order::Order;
use crate::services::document_center::{self, DocumentChecklist};
use crate::services::order_tracking::{self, OrderBook};
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct TrackingController {
    orders: Arc<OrderBook>,
    documents: Arc<DocumentChecklist>,
}

impl TrackingController {
    pub fn new(orders: Arc<OrderBook>, documents: Arc<DocumentChecklist>) -> Self {
        Self { orders, documents }
    }

    pub fn list_orders(&self) -> Vec<Order> {
        self.orders.orders().to_vec()
    }

    fn find_order(&self, id: &str) -> AppResult<&Order> {
        self.orders
            .find_order(id)
            .ok_or_else(|| not_found_error("Order", id))
    }

    pub fn get_order(&self, id: &str) -> AppResult<OrderDetailResponse> {
        let order = self.find_order(id)?.clone();
        let timeline = self.orders.timeline();

        Ok(OrderDetailResponse {
            order,
            timeline: timeline.to_vec(),
            timeline_progress: order_tracking::timeline_progress(timeline),
            current_stage: order_tracking::current_stage(timeline).cloned(),
        })
    }

    pub fn notifications(&self, id: &str) -> AppResult<NotificationsResponse> {
        self.find_order(id)?;
        let notifications = self.orders.notifications();

        Ok(NotificationsResponse {
            unread: order_tracking::unread_count(notifications),
            notifications: notifications.to_vec(),
        })
    }

    fn checklist(&self, id: &str) -> AppResult<&DocumentChecklist> {
        self.find_order(id)?;
        if self.documents.order_id != id {
            return Err(AppError::NotFound(format!("No documents on file for order '{}'", id)));
        }
        Ok(&self.documents)
    }

    pub fn documents(&self, id: &str) -> AppResult<DocumentsResponse> {
        let checklist = self.checklist(id)?;
        let documents = &checklist.documents;

        Ok(DocumentsResponse {
            order_id: checklist.order_id.clone(),
            documents: documents.clone(),
            categories: checklist.category_summaries(),
            overall_progress: document_center::overall_progress(documents),
            counts: document_center::status_counts(documents),
            outstanding: document_center::outstanding(documents)
                .into_iter()
                .cloned()
                .collect(),
        })
    }

    pub fn audit_trail(&self, id: &str) -> AppResult<AuditTrailResponse> {
        let checklist = self.checklist(id)?;
        Ok(AuditTrailResponse {
            order_id: checklist.order_id.clone(),
            entries: checklist.audit_trail.clone(),
        })
    }
}
