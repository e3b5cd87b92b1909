use std::sync::Arc;

use actix_web::{App, http::StatusCode, test};
use checkout::AppState;
use chrono::{TimeZone, Utc};
use common::{
    clock::ManualClock,
    env_config::Config,
    ids::SequentialIds,
    status::StatusPolicy,
};
use serde_json::{Value, json};
use testresult::TestResult;

async fn state(policy: StatusPolicy) -> Result<AppState, Box<dyn std::error::Error>> {
    let config = Config {
        payment_status_policy: policy,
        ..Config::default()
    };
    Ok(AppState {
        pool: db::setup("sqlite::memory:").await?,
        config: Arc::new(config),
        ids: Arc::new(SequentialIds::new()),
        clock: Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap(),
        )),
    })
}

macro_rules! post {
    ($app:expr, $uri:expr, $body:expr) => {{
        let req = test::TestRequest::post().uri($uri).set_json($body).to_request();
        let res = test::call_service($app, req).await;
        let status: StatusCode = res.status();
        let body: Value = test::read_body_json(res).await;
        (status, body)
    }};
}

macro_rules! get {
    ($app:expr, $uri:expr) => {{
        let req = test::TestRequest::get().uri($uri).to_request();
        let res = test::call_service($app, req).await;
        let status: StatusCode = res.status();
        let body: Value = test::read_body_json(res).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn order_then_payment_marks_order_paid() -> TestResult {
    let state = state(StatusPolicy::Passthrough).await?;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let (status, order) = post!(
        &app,
        "/api/orders",
        json!({ "email": "a@b.com", "totalAmount": 399, "currency": "INR" })
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order, json!({ "id": "ORD-2026-000001", "status": "pending" }));

    let (status, payment) = post!(
        &app,
        "/api/payments",
        json!({
            "orderId": "ORD-2026-000001",
            "amount": 399,
            "currency": "INR",
            "provider": "card",
            "status": "succeeded"
        })
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        payment,
        json!({ "id": "PAY-000001", "orderId": "ORD-2026-000001", "status": "succeeded" })
    );

    let (status, fetched) = get!(&app, "/api/orders/ORD-2026-000001");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["status"], "paid");
    assert_eq!(fetched["customerEmail"], "a@b.com");
    assert_eq!(fetched["totalAmount"], 399);

    let (status, payments) = get!(&app, "/api/orders/ORD-2026-000001/payments");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payments[0]["id"], "PAY-000001");
    assert_eq!(payments[0]["provider"], "card");
    assert_eq!(payments[0]["providerPaymentId"], Value::Null);
    Ok(())
}

#[actix_web::test]
async fn missing_email_is_a_bad_request() -> TestResult {
    let state = state(StatusPolicy::Passthrough).await?;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let (status, body) = post!(&app, "/api/orders", json!({ "firstName": "Asha" }));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap_or_default().contains("email is required"));
    let (_, stats) = get!(&app, "/api/admin/stats");
    assert_eq!(stats["totalOrders"], 0);
    Ok(())
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() -> TestResult {
    let state = state(StatusPolicy::Passthrough).await?;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"email\": ")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert!(body.get("error").is_some());
    Ok(())
}

#[actix_web::test]
async fn payment_errors_map_to_status_codes() -> TestResult {
    let state = state(StatusPolicy::Passthrough).await?;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let (status, _) = post!(&app, "/api/payments", json!({ "amount": 399 }));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post!(&app, "/api/payments", json!({ "orderId": "ORD-2026-nope" }));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get!(&app, "/api/orders/ORD-2026-nope");
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[actix_web::test]
async fn defaults_fill_in_a_bare_payment() -> TestResult {
    let state = state(StatusPolicy::Passthrough).await?;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let (_, order) = post!(&app, "/api/orders", json!({ "email": "a@b.com" }));
    let (status, payment) = post!(&app, "/api/payments", json!({ "orderId": order["id"] }));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payment["status"], "succeeded");

    let order_id = order["id"].as_str().unwrap_or_default();
    let (_, payments) = get!(&app, &format!("/api/orders/{}/payments", order_id));
    assert_eq!(payments[0]["amount"], 399);
    assert_eq!(payments[0]["currency"], "INR");
    assert_eq!(payments[0]["provider"], "manual");
    Ok(())
}

#[actix_web::test]
async fn strict_policy_rejects_unknown_status_over_http() -> TestResult {
    let state = state(StatusPolicy::Strict).await?;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let (_, order) = post!(&app, "/api/orders", json!({ "email": "a@b.com" }));
    let (status, _) = post!(
        &app,
        "/api/payments",
        json!({ "orderId": order["id"], "status": "paid_trust_me" })
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let order_id = order["id"].as_str().unwrap_or_default();
    let (_, fetched) = get!(&app, &format!("/api/orders/{}", order_id));
    assert_eq!(fetched["status"], "pending");
    Ok(())
}

#[actix_web::test]
async fn stats_summarise_orders_and_revenue() -> TestResult {
    let state = state(StatusPolicy::Passthrough).await?;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let (_, first) = post!(&app, "/api/orders", json!({ "email": "a@b.com" }));
    let (_, second) = post!(
        &app,
        "/api/orders",
        json!({ "email": "c@d.com", "totalAmount": 999 })
    );
    post!(&app, "/api/payments", json!({ "orderId": first["id"], "amount": 399 }));
    post!(
        &app,
        "/api/payments",
        json!({ "orderId": second["id"], "amount": 999, "status": "failed" })
    );

    let (status, stats) = get!(&app, "/api/admin/stats");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["totalOrders"], 2);
    assert_eq!(stats["paidOrders"], 1);
    assert_eq!(stats["totalRevenue"], 399);
    let recent = stats["recentPayments"].as_array().cloned().unwrap_or_default();
    assert_eq!(recent.len(), 2);
    assert!(recent[0].get("order_id").is_some());
    assert!(recent[0].get("received_at").is_some());
    Ok(())
}
