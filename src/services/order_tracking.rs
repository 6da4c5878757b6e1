//! Seguimiento de pedidos
//!
//! Pedidos de prueba con su línea de tiempo de importación y las
//! notificaciones del cliente. Todo es fijo y en memoria.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::order::{Notification, NotificationKind, Order, StageStatus, TrackingStage};
use crate::utils::validation::percentage;

#[derive(Debug, Clone)]
pub struct OrderBook {
    orders: Vec<Order>,
    timeline: Vec<TrackingStage>,
    notifications: Vec<Notification>,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    date(year, month, day).and_hms_opt(hour, minute, 0)
}

fn stage(
    id: u32,
    title: &str,
    description: &str,
    status: StageStatus,
    reached_at: Option<NaiveDateTime>,
) -> TrackingStage {
    TrackingStage {
        id,
        title: title.to_string(),
        description: description.to_string(),
        status,
        reached_at,
        details: None,
    }
}

impl OrderBook {
    pub fn fixed() -> Self {
        let orders = vec![
            Order {
                id: "ORD-2024-001".to_string(),
                vehicle: "2020 Toyota Camry".to_string(),
                status: "In Transit".to_string(),
                current_location: "Colombo Port".to_string(),
                estimated_delivery: date(2024, 1, 15),
                progress: 75,
            },
            Order {
                id: "ORD-2024-002".to_string(),
                vehicle: "2019 Honda Civic".to_string(),
                status: "Customs Clearance".to_string(),
                current_location: "Customs Department".to_string(),
                estimated_delivery: date(2024, 1, 20),
                progress: 60,
            },
        ];

        let mut in_transit = stage(
            4,
            "In Transit",
            "Currently en route to Colombo Port",
            StageStatus::Current,
            at(2023, 12, 15, 6, 30),
        );
        in_transit.details = Some("Expected arrival: Jan 10, 2024".to_string());

        let timeline = vec![
            stage(
                1,
                "Order Placed",
                "Payment confirmed and order processed",
                StageStatus::Completed,
                at(2023, 12, 1, 10, 30),
            ),
            stage(
                2,
                "Payment Verified",
                "Escrow payment received and verified",
                StageStatus::Completed,
                at(2023, 12, 1, 14, 15),
            ),
            stage(
                3,
                "Shipped from Japan",
                "Vehicle loaded on vessel \"Mitsui Express\"",
                StageStatus::Completed,
                at(2023, 12, 5, 8, 0),
            ),
            in_transit,
            stage(
                5,
                "Customs Clearance",
                "Processing customs documentation",
                StageStatus::Upcoming,
                None,
            ),
            stage(
                6,
                "Registration Complete",
                "Vehicle registered in your name",
                StageStatus::Upcoming,
                None,
            ),
            stage(
                7,
                "Delivered",
                "Vehicle delivered to your location",
                StageStatus::Upcoming,
                None,
            ),
        ];

        let notifications = vec![
            Notification {
                id: 1,
                kind: NotificationKind::Update,
                title: "Vessel Departure Update".to_string(),
                message: "Your vehicle has departed from Tokyo Port and is en route to Colombo."
                    .to_string(),
                age: "2 hours ago".to_string(),
                read: false,
            },
            Notification {
                id: 2,
                kind: NotificationKind::Document,
                title: "Document Upload Required".to_string(),
                message: "Please upload your NIC copy for customs clearance.".to_string(),
                age: "1 day ago".to_string(),
                read: false,
            },
            Notification {
                id: 3,
                kind: NotificationKind::Payment,
                title: "Payment Confirmation".to_string(),
                message: "Your escrow payment has been confirmed and secured.".to_string(),
                age: "3 days ago".to_string(),
                read: true,
            },
        ];

        Self {
            orders,
            timeline,
            notifications,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn find_order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    pub fn timeline(&self) -> &[TrackingStage] {
        &self.timeline
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }
}

/// Porcentaje de etapas completadas; la etapa en curso no cuenta
pub fn timeline_progress(stages: &[TrackingStage]) -> Decimal {
    let completed = stages
        .iter()
        .filter(|stage| stage.status == StageStatus::Completed)
        .count();
    percentage(completed, stages.len())
}

/// Etapa en curso, si la hay
pub fn current_stage(stages: &[TrackingStage]) -> Option<&TrackingStage> {
    stages.iter().find(|stage| stage.status == StageStatus::Current)
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_order() {
        let book = OrderBook::fixed();
        let order = book.find_order("ORD-2024-002").unwrap();
        assert_eq!(order.status, "Customs Clearance");
        assert_eq!(order.progress, 60);
        assert!(book.find_order("ORD-1999-000").is_none());
    }

    #[test]
    fn test_timeline_progress_counts_completed_only() {
        let book = OrderBook::fixed();
        assert_eq!(timeline_progress(book.timeline()), Decimal::new(4286, 2));
        assert_eq!(timeline_progress(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_current_stage() {
        let book = OrderBook::fixed();
        let current = current_stage(book.timeline()).unwrap();
        assert_eq!(current.title, "In Transit");
        assert_eq!(current.details.as_deref(), Some("Expected arrival: Jan 10, 2024"));
        assert!(book
            .timeline()
            .iter()
            .filter(|s| s.status == StageStatus::Upcoming)
            .all(|s| s.reached_at.is_none()));
    }

    #[test]
    fn test_unread_count() {
        let book = OrderBook::fixed();
        assert_eq!(unread_count(book.notifications()), 2);
    }
}
