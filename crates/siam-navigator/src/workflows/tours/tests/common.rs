use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::tours::{
    BookingCosts, BookingLedgerEntry, BookingStatus, CostEstimateRequest, HotelLevel, Lead,
    TourPackage,
};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn chiang_mai_loop() -> TourPackage {
    let mut package = TourPackage::new("Chiang Mai 4x4 Loop", "cm3", 3, 12_000.0);
    package.destinations = vec!["Chiang Mai".to_string(), "Doi Inthanon".to_string()];
    package
}

pub(super) fn family_request(pickup_date: NaiveDate) -> CostEstimateRequest {
    CostEstimateRequest {
        number_of_adults: 2,
        number_of_children: 1,
        hotel_level: HotelLevel::Standard,
        pickup_date,
    }
}

pub(super) fn lead() -> Lead {
    Lead {
        lead_id: Some("lead-0042".to_string()),
        customer_name: "Anna Schmidt".to_string(),
        customer_email: "anna@example.com".to_string(),
        number_of_adults: 2,
        number_of_children: 0,
        preferred_start_date: date(2025, 4, 10),
        preferred_end_date: Some(date(2025, 4, 13)),
        duration: None,
        hotel_level: HotelLevel::Luxury,
    }
}

pub(super) fn ledger_entry(
    booking_id: &str,
    agent: Option<(&str, &str)>,
    status: BookingStatus,
    pickup_date: NaiveDate,
    revenue: f64,
    costs: BookingCosts,
    commission: f64,
) -> BookingLedgerEntry {
    BookingLedgerEntry {
        booking_id: booking_id.to_string(),
        agent_id: agent.map(|(id, _)| id.to_string()),
        agent_name: agent.map(|(_, name)| name.to_string()),
        company: None,
        status,
        pickup_date,
        actual_revenue: revenue,
        costs,
        agent_commission: commission,
    }
}

pub(super) fn guide_and_food(guide_fee: f64, food_cost: f64) -> BookingCosts {
    BookingCosts {
        guide_fee,
        food_cost,
        ..BookingCosts::default()
    }
}

/// Four live bookings and one cancellation across January and February 2025.
pub(super) fn ledger() -> Vec<BookingLedgerEntry> {
    vec![
        ledger_entry(
            "bk-001",
            Some(("agent-1", "Somchai")),
            BookingStatus::Completed,
            date(2025, 1, 15),
            50_000.0,
            guide_and_food(15_000.0, 10_000.0),
            5_000.0,
        ),
        ledger_entry(
            "bk-002",
            Some(("agent-2", "Nok")),
            BookingStatus::Confirmed,
            date(2025, 1, 20),
            30_000.0,
            guide_and_food(6_000.0, 4_000.0),
            3_000.0,
        ),
        ledger_entry(
            "bk-003",
            Some(("agent-1", "Somchai")),
            BookingStatus::Cancelled,
            date(2025, 1, 25),
            40_000.0,
            guide_and_food(1_000.0, 0.0),
            4_000.0,
        ),
        ledger_entry(
            "bk-004",
            None,
            BookingStatus::Pending,
            date(2025, 2, 3),
            20_000.0,
            guide_and_food(5_000.0, 3_000.0),
            0.0,
        ),
        ledger_entry(
            "bk-005",
            Some(("agent-2", "Nok")),
            BookingStatus::InProgress,
            date(2025, 1, 28),
            25_000.0,
            guide_and_food(7_000.0, 5_000.0),
            2_500.0,
        ),
    ]
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}
