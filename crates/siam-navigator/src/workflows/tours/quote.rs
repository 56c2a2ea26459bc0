use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::estimate::{estimate_cost, CostEstimateRequest};
use super::package::{HotelLevel, TourPackage};
use super::season::Season;

pub const QUOTE_VALIDITY_DAYS: u64 = 14;

/// Enquiry from a prospective customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    pub number_of_adults: u32,
    #[serde(default)]
    pub number_of_children: u32,
    pub preferred_start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_end_date: Option<NaiveDate>,
    /// Requested trip length in days when no end date is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub hotel_level: HotelLevel,
}

impl Lead {
    /// Days between the preferred dates when both are set and differ,
    /// otherwise the stated duration.
    pub fn trip_duration(&self) -> Option<u32> {
        let derived = self.preferred_end_date.and_then(|end| {
            let days = (end - self.preferred_start_date).num_days().unsigned_abs();
            u32::try_from(days).ok().filter(|days| *days > 0)
        });
        derived.or(self.duration)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteCosts {
    pub accommodation: f64,
    pub meals: f64,
    pub guide: f64,
    pub transport: f64,
    pub attractions: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
    pub customer_name: String,
    pub package_name: String,
    pub duration: u32,
    /// Trip length the customer asked for, when it can be told.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_duration: Option<u32>,
    pub number_of_adults: u32,
    pub number_of_children: u32,
    pub total_people: u64,
    pub hotel_level: HotelLevel,
    pub season: Season,
    pub costs: QuoteCosts,
    pub quoted_price: f64,
    pub estimated_profit: f64,
    pub valid_until: NaiveDate,
}

pub fn generate_quote(lead: &Lead, package: &TourPackage, generated_on: NaiveDate) -> Quote {
    let estimate = estimate_cost(
        package,
        &CostEstimateRequest {
            number_of_adults: lead.number_of_adults,
            number_of_children: lead.number_of_children,
            hotel_level: lead.hotel_level,
            pickup_date: lead.preferred_start_date,
        },
    );
    let breakdown = estimate.cost_breakdown;

    Quote {
        lead_id: lead.lead_id.clone(),
        customer_name: lead.customer_name.clone(),
        package_name: estimate.package_name,
        duration: estimate.duration,
        requested_duration: lead.trip_duration(),
        number_of_adults: estimate.number_of_adults,
        number_of_children: estimate.number_of_children,
        total_people: estimate.total_people,
        hotel_level: estimate.hotel_level,
        season: estimate.season,
        costs: QuoteCosts {
            accommodation: breakdown.accommodation_cost,
            meals: breakdown.meal_cost,
            guide: breakdown.guide_cost,
            transport: breakdown.transport_cost,
            attractions: breakdown.attractions_cost,
            total: breakdown.total_costs,
        },
        quoted_price: estimate.estimated_revenue,
        estimated_profit: estimate.estimated_profit,
        valid_until: generated_on
            .checked_add_days(Days::new(QUOTE_VALIDITY_DAYS))
            .unwrap_or(NaiveDate::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(start: NaiveDate, end: Option<NaiveDate>, duration: Option<u32>) -> Lead {
        Lead {
            lead_id: None,
            customer_name: "Marta Kowalska".to_string(),
            customer_email: String::new(),
            number_of_adults: 2,
            number_of_children: 0,
            preferred_start_date: start,
            preferred_end_date: end,
            duration,
            hotel_level: HotelLevel::Standard,
        }
    }

    fn day(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).expect("valid date")
    }

    #[test]
    fn trip_duration_prefers_the_date_range() {
        assert_eq!(lead(day(10), Some(day(15)), Some(9)).trip_duration(), Some(5));
        assert_eq!(lead(day(15), Some(day(10)), None).trip_duration(), Some(5));
    }

    #[test]
    fn trip_duration_falls_back_to_the_stated_length() {
        assert_eq!(lead(day(10), Some(day(10)), Some(3)).trip_duration(), Some(3));
        assert_eq!(lead(day(10), None, Some(4)).trip_duration(), Some(4));
        assert_eq!(lead(day(10), None, None).trip_duration(), None);
    }
}
