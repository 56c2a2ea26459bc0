use serde::{Deserialize, Serialize};

use super::estimate::profit_margin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Cancelled bookings carry no revenue or cost into any rollup.
    pub const fn counts_toward_totals(self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

/// Actual costs recorded against a booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingCosts {
    pub guide_fee: f64,
    pub transport_cost: f64,
    pub accommodation_cost: f64,
    pub attractions_cost: f64,
    pub food_cost: f64,
    pub other_costs: f64,
}

impl BookingCosts {
    pub fn total(&self) -> f64 {
        self.guide_fee
            + self.transport_cost
            + self.accommodation_cost
            + self.attractions_cost
            + self.food_cost
            + self.other_costs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFinancials {
    pub total_costs: f64,
    pub agent_commission: f64,
    pub net_profit: f64,
    pub profit_margin: f64,
}

/// `commission_rate` is a percentage of revenue.
pub fn booking_financials(revenue: f64, costs: &BookingCosts, commission_rate: f64) -> BookingFinancials {
    let total_costs = costs.total();
    let agent_commission = revenue * commission_rate / 100.0;
    let net_profit = revenue - total_costs - agent_commission;

    BookingFinancials {
        total_costs,
        agent_commission,
        net_profit,
        profit_margin: profit_margin(net_profit, revenue),
    }
}
