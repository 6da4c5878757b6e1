use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tower::ServiceExt;

use import_marketplace::config::EnvironmentConfig;
use import_marketplace::{create_app, AppState};

fn create_test_app() -> Router {
    create_app(AppState::new(EnvironmentConfig::default()))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = create_test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(uri: &str, payload: Value) -> (StatusCode, Value) {
    send(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
    )
    .await
}

fn dec(value: &Value) -> Decimal {
    value.as_str().unwrap().parse().unwrap()
}

fn ids(body: &Value) -> Vec<u64> {
    body["vehicles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "import-marketplace");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_vehicles_without_filters() {
    let (status, body) = get("/api/vehicles").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 4);
    assert_eq!(body["catalog_size"], 4);
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_filter_by_year_range() {
    let (status, body) = get("/api/vehicles?year_from=2020&year_to=2020").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 4]);
}

#[tokio::test]
async fn test_filter_by_query_and_body_type() {
    let (_, body) = get("/api/vehicles?q=cx").await;
    assert_eq!(ids(&body), vec![4]);

    let (_, body) = get("/api/vehicles?body_type=SUV").await;
    assert_eq!(ids(&body), vec![4]);

    let (_, body) = get("/api/vehicles?make=Toyota&stock_type=Dealer").await;
    assert!(ids(&body).is_empty());
}

#[tokio::test]
async fn test_filter_with_unknown_fuel_type() {
    let (status, body) = get("/api/vehicles?fuel_type=Steam").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_get_vehicle_and_missing_vehicle() {
    let (status, body) = get("/api/vehicles/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["make"], "Toyota");
    assert_eq!(body["transmission"], "CVT");
    assert_eq!(dec(&body["price"]), Decimal::new(28000, 0));

    let (status, body) = get("/api/vehicles/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_cost_form_is_seeded_from_vehicle() {
    let (status, body) = get("/api/vehicles/2/cost-form").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cif_value"], "24500");
    assert_eq!(body["processing_fee"], "500");
    assert_eq!(body["duties"], "");
}

#[tokio::test]
async fn test_landed_cost_quote() {
    let (status, body) = post(
        "/api/quotes/landed-cost",
        json!({
            "cif_value": "28000",
            "duties": "8400",
            "vat": "4200",
            "port_charges": "1500",
            "processing_fee": "500"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["total"]), Decimal::new(42600, 0));
    assert_eq!(dec(&body["local_currency_total"]), Decimal::new(12_780_000, 0));
}

#[tokio::test]
async fn test_landed_cost_treats_garbage_as_zero() {
    let (status, body) = post(
        "/api/quotes/landed-cost",
        json!({ "cif_value": "abc", "duties": "100.5kg" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["total"]), Decimal::new(1005, 1));
}

#[tokio::test]
async fn test_emi_quote() {
    let (status, body) = post(
        "/api/quotes/emi",
        json!({
            "loan_amount": "35000",
            "down_payment": "7600",
            "interest_rate": "12",
            "loan_term": "60"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["computable"], true);
    assert_eq!(dec(&body["monthly_payment"]), Decimal::new(77856, 2));
    assert_eq!(dec(&body["total_repayment"]), Decimal::new(4671334, 2));
    assert_eq!(body["term_options"], json!([36, 48, 60, 72]));
}

#[tokio::test]
async fn test_emi_quote_with_zero_rate_is_not_computable() {
    let (status, body) = post(
        "/api/quotes/emi",
        json!({ "loan_amount": "35000", "interest_rate": "0", "loan_term": "60" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["computable"], false);
    assert_eq!(dec(&body["monthly_payment"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_marketplace_quote_finances_landed_cost_minus_down_payment() {
    let (status, body) = post(
        "/api/quotes/marketplace",
        json!({
            "cost": {
                "cif_value": "28000",
                "duties": "8400",
                "vat": "4200",
                "port_charges": "1500",
                "processing_fee": "500"
            },
            "down_payment": "5000"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["landed_cost"]["total"]), Decimal::new(42600, 0));
    assert_eq!(dec(&body["financing"]["principal"]), Decimal::new(37600, 0));
    assert_eq!(body["financing"]["term_months"], 60);
}

#[tokio::test]
async fn test_financing_application_requires_applicant_details() {
    let (status, body) = post(
        "/api/financing/applications/validate",
        json!({ "loan_amount": "35000", "interest_rate": "12", "loan_term": "60" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_financing_application_complete() {
    let (status, body) = post(
        "/api/financing/applications/validate",
        json!({
            "loan_amount": "35000",
            "down_payment": "7600",
            "interest_rate": "12",
            "loan_term": "60",
            "applicant": {
                "monthly_income": "4500",
                "employment_type": "Salaried",
                "company_name": "Colombo Traders",
                "working_years": "6"
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(dec(&body["data"]["monthly_payment"]), Decimal::new(77856, 2));
}

#[tokio::test]
async fn test_checkout_summary() {
    let (status, body) = get("/api/checkout/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vehicle"]["title"], "2020 Toyota Camry");
    assert_eq!(dec(&body["total"]), Decimal::new(42600, 0));
    assert_eq!(dec(&body["financing"]["monthly_payment"]), Decimal::new(77856, 2));
    assert_eq!(body["letter_of_credit"]["validity_days"], 90);

    let (status, _) = get("/api/checkout/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_orders_and_timeline() {
    let (status, body) = get("/api/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = get("/api/orders/ORD-2024-001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order"]["progress"], 75);
    assert_eq!(body["timeline"].as_array().unwrap().len(), 7);
    assert_eq!(dec(&body["timeline_progress"]), Decimal::new(4286, 2));
    assert_eq!(body["current_stage"]["status"], "current");

    let (status, _) = get("/api/orders/ORD-0000-000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_order_notifications() {
    let (status, body) = get("/api/orders/ORD-2024-001/notifications").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notifications"].as_array().unwrap().len(), 3);
    assert_eq!(body["unread"], 2);
}

#[tokio::test]
async fn test_order_documents_and_audit() {
    let (status, body) = get("/api/orders/ORD-2024-001/documents").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["documents"].as_array().unwrap().len(), 8);
    assert_eq!(dec(&body["overall_progress"]), Decimal::new(50, 0));
    assert_eq!(body["outstanding"].as_array().unwrap().len(), 4);

    let (status, body) = get("/api/orders/ORD-2024-001/audit").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entries"].as_array().unwrap().len(), 4);

    let (status, _) = get("/api/orders/ORD-2024-002/documents").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_navigation_transition_closes_menu() {
    let (status, body) = post(
        "/api/navigation/transition",
        json!({
            "state": { "screen": "home", "mobile_menu_open": true },
            "event": { "Navigate": "tracking" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["screen"], "tracking");
    assert_eq!(body["mobile_menu_open"], false);

    let (_, body) = post("/api/navigation/transition", json!({ "event": "GetFinancing" })).await;
    assert_eq!(body["screen"], "checkout");

    let (_, body) = get("/api/navigation/items").await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}
