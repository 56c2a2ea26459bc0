use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::package::{HotelLevel, TourPackage};
use super::season::Season;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimateRequest {
    pub number_of_adults: u32,
    #[serde(default)]
    pub number_of_children: u32,
    pub hotel_level: HotelLevel,
    pub pickup_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub accommodation_cost: f64,
    pub meal_cost: f64,
    pub guide_cost: f64,
    pub transport_cost: f64,
    pub attractions_cost: f64,
    pub total_costs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub package_code: String,
    pub package_name: String,
    pub duration: u32,
    pub number_of_adults: u32,
    pub number_of_children: u32,
    pub total_people: u64,
    pub hotel_level: HotelLevel,
    pub pickup_date: NaiveDate,
    pub season: Season,
    pub season_multiplier: f64,
    pub cost_breakdown: CostBreakdown,
    pub estimated_revenue: f64,
    pub estimated_profit: f64,
    pub profit_margin: f64,
}

impl CostEstimateRequest {
    /// Adults plus children, widened so no request can overflow.
    pub fn party_size(&self) -> u64 {
        u64::from(self.number_of_adults) + u64::from(self.number_of_children)
    }
}

/// Profit as a percentage of revenue; zero revenue yields zero.
pub(crate) fn profit_margin(profit: f64, revenue: f64) -> f64 {
    if revenue == 0.0 {
        0.0
    } else {
        profit / revenue * 100.0
    }
}

/// Prices a package for a party. Children are costed and charged like adults.
pub fn estimate_cost(package: &TourPackage, request: &CostEstimateRequest) -> CostEstimate {
    let template = &package.cost_template;
    let nights = f64::from(package.duration);
    let total_people = request.party_size();
    let people = total_people as f64;

    let accommodation_cost =
        template.accommodation_per_night.rate(request.hotel_level) * nights * people;
    let meal_cost = template.meal_per_day * nights * people;
    let guide_cost = template.guide_per_day * nights;
    let transport_cost = template.transport_per_day * nights;
    let attractions_cost = template.attractions_per_person * people;
    let total_costs =
        accommodation_cost + meal_cost + guide_cost + transport_cost + attractions_cost;

    let season = Season::for_date(request.pickup_date);
    let season_multiplier = package.season_multipliers.for_season(season);
    let estimated_revenue = (package.base_price_per_person * people * season_multiplier).round();
    let estimated_profit = estimated_revenue - total_costs;

    CostEstimate {
        package_code: package.code.clone(),
        package_name: package.name.clone(),
        duration: package.duration,
        number_of_adults: request.number_of_adults,
        number_of_children: request.number_of_children,
        total_people,
        hotel_level: request.hotel_level,
        pickup_date: request.pickup_date,
        season,
        season_multiplier,
        cost_breakdown: CostBreakdown {
            accommodation_cost,
            meal_cost,
            guide_cost,
            transport_cost,
            attractions_cost,
            total_costs,
        },
        estimated_revenue,
        estimated_profit,
        profit_margin: profit_margin(estimated_profit, estimated_revenue),
    }
}
