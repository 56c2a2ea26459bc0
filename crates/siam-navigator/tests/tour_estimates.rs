use chrono::NaiveDate;
use siam_navigator::workflows::tours::{
    agent_performance, booking_financials, estimate_cost, generate_quote, summarize, BookingCosts,
    BookingLedgerEntry, BookingStatus, CostEstimateRequest, HotelLevel, Lead, Season, TourPackage,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn golden_triangle() -> TourPackage {
    TourPackage::new("Golden Triangle Offroad", "gt2", 2, 9_000.0)
}

#[test]
fn low_season_budget_trip_is_priced_from_templates() {
    let package = golden_triangle();
    let estimate = estimate_cost(
        &package,
        &CostEstimateRequest {
            number_of_adults: 1,
            number_of_children: 0,
            hotel_level: HotelLevel::Budget,
            pickup_date: date(2025, 6, 2),
        },
    );

    assert_eq!(estimate.package_code, "GT2");
    assert_eq!(estimate.season, Season::Low);
    // 2 nights x 800 + 2 days x (600 + 2000 + 1500) + 1000
    assert_eq!(estimate.cost_breakdown.accommodation_cost, 1_600.0);
    assert_eq!(estimate.cost_breakdown.total_costs, 10_800.0);
    assert_eq!(estimate.estimated_revenue, 9_000.0);
    assert_eq!(estimate.estimated_profit, -1_800.0);
    assert!((estimate.profit_margin + 20.0).abs() < 1e-9);
}

#[test]
fn quoted_lead_flows_into_the_booking_ledger() {
    let package = golden_triangle();
    let lead = Lead {
        lead_id: None,
        customer_name: "Kenji Watanabe".to_string(),
        customer_email: String::new(),
        number_of_adults: 4,
        number_of_children: 0,
        preferred_start_date: date(2025, 11, 14),
        preferred_end_date: None,
        duration: Some(3),
        hotel_level: "premium".parse().expect("known hotel level"),
    };

    let quote = generate_quote(&lead, &package, date(2025, 10, 1));
    assert_eq!(quote.season, Season::Peak);
    assert_eq!(quote.hotel_level, HotelLevel::Premium);
    assert_eq!(quote.valid_until, date(2025, 10, 15));
    assert_eq!(quote.requested_duration, Some(3));

    let costs = BookingCosts {
        guide_fee: quote.costs.guide,
        transport_cost: quote.costs.transport,
        accommodation_cost: quote.costs.accommodation,
        attractions_cost: quote.costs.attractions,
        food_cost: quote.costs.meals,
        other_costs: 0.0,
    };
    let financials = booking_financials(quote.quoted_price, &costs, 5.0);
    assert_eq!(financials.total_costs, quote.costs.total);

    let entry = BookingLedgerEntry {
        booking_id: "bk-100".to_string(),
        agent_id: Some("agent-9".to_string()),
        agent_name: None,
        company: Some("Lanna Trails".to_string()),
        status: BookingStatus::Confirmed,
        pickup_date: lead.preferred_start_date,
        actual_revenue: quote.quoted_price,
        costs,
        agent_commission: financials.agent_commission,
    };

    let summary = summarize(std::slice::from_ref(&entry));
    assert_eq!(summary.total_bookings, 1);
    assert_eq!(summary.completed_bookings, 0);
    assert_eq!(summary.total_profit, financials.net_profit);

    let agents = agent_performance(&[entry]);
    assert_eq!(agents.len(), 1);
    assert_eq!(agents[0].agent_name, "agent-9");
    assert_eq!(agents[0].company.as_deref(), Some("Lanna Trails"));
}
