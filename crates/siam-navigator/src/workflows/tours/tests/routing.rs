use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::workflows::tours::tours_router;

async fn post(uri: &str, payload: Value) -> (StatusCode, Value) {
    let response = tours_router()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");
    let status = response.status();
    (status, read_json_body(response).await)
}

#[tokio::test]
async fn estimate_route_prices_the_package() {
    let (status, payload) = post(
        "/api/v1/tours/estimate",
        json!({
            "package": chiang_mai_loop(),
            "request": {
                "numberOfAdults": 2,
                "numberOfChildren": 1,
                "hotelLevel": "standard",
                "pickupDate": "2025-12-10"
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["success"], json!(true));
    assert_eq!(payload["data"]["season"], json!("peak"));
    assert_eq!(payload["data"]["pickupDate"], json!("2025-12-10"));
    assert_eq!(payload["data"]["costBreakdown"]["totalCosts"], json!(32400.0));
    assert_eq!(payload["data"]["estimatedRevenue"], json!(46800.0));
}

#[tokio::test]
async fn estimate_route_rejects_zero_day_packages() {
    let mut package = chiang_mai_loop();
    package.duration = 0;

    let (status, payload) = post(
        "/api/v1/tours/estimate",
        json!({
            "package": package,
            "request": { "numberOfAdults": 2, "hotelLevel": "budget", "pickupDate": "2025-01-10" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["success"], json!(false));
    assert!(payload["error"].as_str().unwrap().contains("at least one day"));
}

#[tokio::test]
async fn booking_route_applies_commission() {
    let (status, payload) = post(
        "/api/v1/tours/bookings/financials",
        json!({
            "actualRevenue": 50000,
            "costs": { "guideFee": 15000, "foodCost": 10000 },
            "commissionRate": 10
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["data"]["agentCommission"], json!(5000.0));
    assert_eq!(payload["data"]["netProfit"], json!(20000.0));
    assert_eq!(payload["data"]["profitMargin"], json!(40.0));
}

#[tokio::test]
async fn quote_route_uses_the_supplied_generation_date() {
    let (status, payload) = post(
        "/api/v1/tours/leads/quote",
        json!({
            "lead": lead(),
            "package": chiang_mai_loop(),
            "generatedOn": "2025-03-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["data"]["validUntil"], json!("2025-03-15"));
    assert_eq!(payload["data"]["leadId"], json!("lead-0042"));
    assert_eq!(payload["data"]["quotedPrice"], json!(26400.0));
    assert_eq!(payload["data"]["requestedDuration"], json!(3));
}

#[tokio::test]
async fn rollup_routes_share_the_ledger_shape() {
    let bookings = serde_json::to_value(ledger()).expect("ledger serializes");

    let (status, summary) = post(
        "/api/v1/tours/financials/summary",
        json!({ "bookings": bookings }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["data"]["totalBookings"], json!(4));

    let (status, january) = post(
        "/api/v1/tours/financials/monthly",
        json!({ "bookings": bookings, "year": 2025, "month": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(january["data"]["bookingsByStatus"]["inProgress"], json!(1));

    let (status, agents) = post(
        "/api/v1/tours/financials/agents",
        json!({ "bookings": bookings }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(agents["data"][0]["agentId"], json!("agent-2"));
}

#[tokio::test]
async fn monthly_route_rejects_invalid_months() {
    let (status, payload) = post(
        "/api/v1/tours/financials/monthly",
        json!({ "bookings": [], "year": 2025, "month": 14 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["error"], json!("month must be between 1 and 12, got 14"));
}

#[tokio::test]
async fn estimate_route_rejects_parties_above_the_group_limit() {
    let mut package = chiang_mai_loop();
    package.max_group_size = 4;

    let (status, payload) = post(
        "/api/v1/tours/estimate",
        json!({
            "package": package,
            "request": {
                "numberOfAdults": 3,
                "numberOfChildren": 2,
                "hotelLevel": "standard",
                "pickupDate": "2025-12-10"
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        payload["error"],
        json!("party of 5 is outside the group size range 1..=4 for package CM3")
    );
}

#[tokio::test]
async fn oversized_head_counts_are_rejected_without_overflow() {
    let (status, payload) = post(
        "/api/v1/tours/estimate",
        json!({
            "package": chiang_mai_loop(),
            "request": {
                "numberOfAdults": u32::MAX,
                "numberOfChildren": 1,
                "hotelLevel": "budget",
                "pickupDate": "2025-06-10"
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(payload["error"]
        .as_str()
        .unwrap()
        .starts_with("party of 4294967296 "));

    let mut lead = lead();
    lead.number_of_adults = u32::MAX;
    let (status, _) = post(
        "/api/v1/tours/leads/quote",
        json!({ "lead": lead, "package": chiang_mai_loop(), "generatedOn": "2025-03-01" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn guide_rate_route_reports_rate_and_blackouts() {
    let guide = json!({
        "guideId": "guide-7",
        "name": "Somchai",
        "pricing": { "baseDayRate": 2500, "premiumRate": 500, "multiDayDiscount": 10 },
        "blackoutDates": [{ "startDate": "2025-04-12", "endDate": "2025-04-16" }]
    });

    let (status, payload) = post(
        "/api/v1/tours/guides/rate",
        json!({ "guide": guide, "tourType": "luxury", "duration": 5, "date": "2025-04-14" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["data"]["guideId"], json!("guide-7"));
    assert_eq!(payload["data"]["available"], json!(false));
    assert_eq!(payload["data"]["dailyRate"], json!(2700.0));
}

#[tokio::test]
async fn feedback_route_approves_high_ratings() {
    let (status, payload) = post(
        "/api/v1/tours/feedback",
        json!({
            "feedback": {
                "bookingId": "bk-001",
                "customerName": "Anna Schmidt",
                "overallRating": 5,
                "ratings": { "guide": 5, "vehicle": 4, "food": 3 }
            },
            "submittedOn": "2025-02-03"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["data"]["feedback"]["status"], json!("approved"));
    assert_eq!(payload["data"]["feedback"]["publishedAt"], json!("2025-02-03"));
    assert_eq!(payload["data"]["averageCategoryRating"], json!(4.0));
}

#[tokio::test]
async fn feedback_route_rejects_out_of_range_ratings() {
    let (status, payload) = post(
        "/api/v1/tours/feedback",
        json!({
            "feedback": {
                "bookingId": "bk-002",
                "customerName": "Kenji Watanabe",
                "overallRating": 6
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["success"], json!(false));
    assert_eq!(
        payload["error"],
        json!("invalid feedback: overall rating must be between 1 and 5, got 6")
    );
}
