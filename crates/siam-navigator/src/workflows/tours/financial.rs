//! Rollups over recorded bookings. Cancelled bookings are skipped everywhere.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::booking::{BookingCosts, BookingStatus};
use super::estimate::profit_margin;
use super::TourError;

/// One booking as the back office records it after the tour is priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingLedgerEntry {
    pub booking_id: String,
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default)]
    pub agent_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub status: BookingStatus,
    pub pickup_date: NaiveDate,
    #[serde(default)]
    pub actual_revenue: f64,
    #[serde(default)]
    pub costs: BookingCosts,
    #[serde(default)]
    pub agent_commission: f64,
}

impl BookingLedgerEntry {
    fn net_profit(&self) -> f64 {
        self.actual_revenue - self.costs.total() - self.agent_commission
    }

    fn falls_in(&self, year: i32, month: u32) -> bool {
        self.pickup_date.year() == year && self.pickup_date.month() == month
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_commissions: f64,
    pub total_profit: f64,
    pub total_bookings: usize,
    pub completed_bookings: usize,
    pub average_revenue: f64,
    pub average_profit: f64,
    pub profit_margin: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsByStatus {
    pub pending: usize,
    pub confirmed: usize,
    pub in_progress: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCategoryTotals {
    pub guide_fees: f64,
    pub transport: f64,
    pub accommodation: f64,
    pub attractions: f64,
    pub food: f64,
    pub other: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyFinancialData {
    pub year: i32,
    pub month: u32,
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_commissions: f64,
    pub total_profit: f64,
    pub total_bookings: usize,
    pub profit_margin: f64,
    pub bookings_by_status: BookingsByStatus,
    pub cost_breakdown: CostCategoryTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPerformance {
    pub agent_id: String,
    pub agent_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub total_bookings: usize,
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_commissions: f64,
    pub total_profit: f64,
    pub average_profit: f64,
    pub profit_margin: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    revenue: f64,
    costs: f64,
    commissions: f64,
    profit: f64,
    bookings: usize,
}

impl Totals {
    fn add(&mut self, entry: &BookingLedgerEntry) {
        self.revenue += entry.actual_revenue;
        self.costs += entry.costs.total();
        self.commissions += entry.agent_commission;
        self.profit += entry.net_profit();
        self.bookings += 1;
    }

    fn average(&self, amount: f64) -> f64 {
        if self.bookings == 0 {
            0.0
        } else {
            amount / self.bookings as f64
        }
    }

    fn margin(&self) -> f64 {
        profit_margin(self.profit, self.revenue)
    }
}

fn counted(entries: &[BookingLedgerEntry]) -> impl Iterator<Item = &BookingLedgerEntry> {
    entries
        .iter()
        .filter(|entry| entry.status.counts_toward_totals())
}

pub fn summarize(entries: &[BookingLedgerEntry]) -> FinancialSummary {
    let mut totals = Totals::default();
    let mut completed_bookings = 0;
    for entry in counted(entries) {
        totals.add(entry);
        if entry.status == BookingStatus::Completed {
            completed_bookings += 1;
        }
    }

    FinancialSummary {
        total_revenue: totals.revenue,
        total_costs: totals.costs,
        total_commissions: totals.commissions,
        total_profit: totals.profit,
        total_bookings: totals.bookings,
        completed_bookings,
        average_revenue: totals.average(totals.revenue),
        average_profit: totals.average(totals.profit),
        profit_margin: totals.margin(),
    }
}

/// Totals for bookings picked up in `month` (1-based) of `year`.
pub fn monthly(
    entries: &[BookingLedgerEntry],
    year: i32,
    month: u32,
) -> Result<MonthlyFinancialData, TourError> {
    if !(1..=12).contains(&month) {
        return Err(TourError::InvalidMonth(month));
    }

    let mut totals = Totals::default();
    let mut by_status = BookingsByStatus::default();
    let mut breakdown = CostCategoryTotals::default();

    for entry in counted(entries).filter(|entry| entry.falls_in(year, month)) {
        totals.add(entry);

        match entry.status {
            BookingStatus::Pending => by_status.pending += 1,
            BookingStatus::Confirmed => by_status.confirmed += 1,
            BookingStatus::InProgress => by_status.in_progress += 1,
            BookingStatus::Completed => by_status.completed += 1,
            BookingStatus::Cancelled => {}
        }

        let costs = &entry.costs;
        breakdown.guide_fees += costs.guide_fee;
        breakdown.transport += costs.transport_cost;
        breakdown.accommodation += costs.accommodation_cost;
        breakdown.attractions += costs.attractions_cost;
        breakdown.food += costs.food_cost;
        breakdown.other += costs.other_costs;
    }

    Ok(MonthlyFinancialData {
        year,
        month,
        total_revenue: totals.revenue,
        total_costs: totals.costs,
        total_commissions: totals.commissions,
        total_profit: totals.profit,
        total_bookings: totals.bookings,
        profit_margin: totals.margin(),
        bookings_by_status: by_status,
        cost_breakdown: breakdown,
    })
}

/// Per-agent totals, highest total profit first. Entries without an agent are ignored.
pub fn agent_performance(entries: &[BookingLedgerEntry]) -> Vec<AgentPerformance> {
    let mut agents: BTreeMap<&str, (Totals, &BookingLedgerEntry)> = BTreeMap::new();
    for entry in counted(entries) {
        let Some(agent_id) = entry.agent_id.as_deref() else {
            continue;
        };
        agents
            .entry(agent_id)
            .or_insert_with(|| (Totals::default(), entry))
            .0
            .add(entry);
    }

    let mut performance: Vec<AgentPerformance> = agents
        .into_iter()
        .map(|(agent_id, (totals, first))| AgentPerformance {
            agent_id: agent_id.to_string(),
            agent_name: first
                .agent_name
                .clone()
                .unwrap_or_else(|| agent_id.to_string()),
            company: first.company.clone(),
            total_bookings: totals.bookings,
            total_revenue: totals.revenue,
            total_costs: totals.costs,
            total_commissions: totals.commissions,
            total_profit: totals.profit,
            average_profit: totals.average(totals.profit),
            profit_margin: totals.margin(),
        })
        .collect();

    performance.sort_by(|a, b| b.total_profit.total_cmp(&a.total_profit));
    performance
}
