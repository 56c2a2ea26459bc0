use super::common::*;
use crate::workflows::tours::{
    agent_performance, monthly, summarize, BookingStatus, BookingsByStatus, TourError,
};

#[test]
fn summary_skips_cancelled_bookings() {
    let summary = summarize(&ledger());

    assert_eq!(summary.total_bookings, 4);
    assert_eq!(summary.completed_bookings, 1);
    assert_eq!(summary.total_revenue, 125_000.0);
    assert_eq!(summary.total_costs, 55_000.0);
    assert_eq!(summary.total_commissions, 10_500.0);
    assert_eq!(summary.total_profit, 59_500.0);
    assert_eq!(summary.average_revenue, 31_250.0);
    assert_eq!(summary.average_profit, 14_875.0);
    assert_close(summary.profit_margin, 59_500.0 / 125_000.0 * 100.0);
}

#[test]
fn empty_ledger_summarizes_to_zeroes() {
    let summary = summarize(&[]);
    assert_eq!(summary.total_bookings, 0);
    assert_eq!(summary.average_revenue, 0.0);
    assert_eq!(summary.average_profit, 0.0);
    assert_eq!(summary.profit_margin, 0.0);
}

#[test]
fn monthly_rollup_counts_statuses_and_cost_categories() {
    let january = monthly(&ledger(), 2025, 1).expect("valid month");

    assert_eq!(january.total_bookings, 3);
    assert_eq!(january.total_revenue, 105_000.0);
    assert_eq!(january.total_profit, 47_500.0);
    assert_eq!(
        january.bookings_by_status,
        BookingsByStatus {
            pending: 0,
            confirmed: 1,
            in_progress: 1,
            completed: 1,
        }
    );
    assert_eq!(january.cost_breakdown.guide_fees, 28_000.0);
    assert_eq!(january.cost_breakdown.food, 19_000.0);
    assert_eq!(january.cost_breakdown.transport, 0.0);

    let february = monthly(&ledger(), 2025, 2).expect("valid month");
    assert_eq!(february.total_bookings, 1);
    assert_eq!(february.bookings_by_status.pending, 1);

    let other_year = monthly(&ledger(), 2024, 1).expect("valid month");
    assert_eq!(other_year.total_bookings, 0);
    assert_eq!(other_year.profit_margin, 0.0);
}

#[test]
fn monthly_rejects_out_of_range_months() {
    assert_eq!(monthly(&ledger(), 2025, 13), Err(TourError::InvalidMonth(13)));
    assert_eq!(monthly(&ledger(), 2025, 0), Err(TourError::InvalidMonth(0)));
}

#[test]
fn agents_rank_by_total_profit() {
    let agents = agent_performance(&ledger());

    assert_eq!(agents.len(), 2);
    assert_eq!(agents[0].agent_id, "agent-2");
    assert_eq!(agents[0].agent_name, "Nok");
    assert_eq!(agents[0].total_bookings, 2);
    assert_eq!(agents[0].total_profit, 27_500.0);
    assert_eq!(agents[0].average_profit, 13_750.0);

    assert_eq!(agents[1].agent_id, "agent-1");
    assert_eq!(agents[1].total_bookings, 1);
    assert_eq!(agents[1].total_revenue, 50_000.0);
}

#[test]
fn agents_without_names_fall_back_to_their_id() {
    let mut entries = ledger();
    entries.retain(|entry| entry.status != BookingStatus::Cancelled);
    for entry in &mut entries {
        entry.agent_name = None;
    }

    let agents = agent_performance(&entries);
    assert!(agents.iter().all(|agent| agent.agent_name == agent.agent_id));
}
