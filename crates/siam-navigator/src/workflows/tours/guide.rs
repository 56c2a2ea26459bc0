//! Guide day rates and availability.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tours longer than this many days get the guide's multi-day discount.
pub const MULTI_DAY_THRESHOLD: u32 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuideStatus {
    #[default]
    Active,
    Inactive,
    OnLeave,
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TourType {
    DayTrip,
    MultiDay,
    Luxury,
    Budget,
    Family,
    SoloTravelers,
    Corporate,
    Adventure,
    Cultural,
    EcoTour,
    Photography,
    Wellness,
    SeniorTravelers,
    StudentGroups,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuidePricing {
    pub base_day_rate: f64,
    /// Added to the day rate on luxury tours.
    pub premium_rate: f64,
    /// Percentage off the day rate for multi-day tours.
    pub multi_day_discount: f64,
}

impl Default for GuidePricing {
    fn default() -> Self {
        Self {
            base_day_rate: 2000.0,
            premium_rate: 0.0,
            multi_day_discount: 0.0,
        }
    }
}

/// Inclusive date range during which the guide cannot be booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlackoutPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl BlackoutPeriod {
    fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    pub guide_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: GuideStatus,
    #[serde(default)]
    pub pricing: GuidePricing,
    #[serde(default)]
    pub blackout_dates: Vec<BlackoutPeriod>,
}

impl Guide {
    /// Only active guides outside every blackout period are available.
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        self.status == GuideStatus::Active
            && !self.blackout_dates.iter().any(|period| period.covers(date))
    }

    /// Day rate for a tour: luxury premium first, then the multi-day discount.
    pub fn daily_rate(&self, tour_type: TourType, duration: u32) -> f64 {
        let pricing = &self.pricing;
        let mut rate = pricing.base_day_rate;

        if tour_type == TourType::Luxury && pricing.premium_rate > 0.0 {
            rate += pricing.premium_rate;
        }
        if duration > MULTI_DAY_THRESHOLD && pricing.multi_day_discount > 0.0 {
            rate *= 1.0 - pricing.multi_day_discount / 100.0;
        }
        rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).expect("valid date")
    }

    fn somchai() -> Guide {
        serde_json::from_value(json!({
            "guideId": "guide-7",
            "name": "Somchai",
            "pricing": { "baseDayRate": 2500, "premiumRate": 500, "multiDayDiscount": 10 },
            "blackoutDates": [
                { "startDate": "2025-04-12", "endDate": "2025-04-16", "reason": "Songkran" }
            ]
        }))
        .expect("guide parses")
    }

    #[test]
    fn luxury_premium_applies_before_the_multi_day_discount() {
        let guide = somchai();
        assert_eq!(guide.daily_rate(TourType::Adventure, 2), 2500.0);
        assert_eq!(guide.daily_rate(TourType::Luxury, 3), 3000.0);
        assert_eq!(guide.daily_rate(TourType::Luxury, 4), 2700.0);
        assert_eq!(guide.daily_rate(TourType::Cultural, 5), 2250.0);
    }

    #[test]
    fn missing_pricing_falls_back_to_the_standard_rate() {
        let guide: Guide =
            serde_json::from_value(json!({ "guideId": "guide-1" })).expect("guide parses");
        assert_eq!(guide.daily_rate(TourType::Luxury, 7), 2000.0);
    }

    #[test]
    fn blackout_ranges_are_inclusive() {
        let guide = somchai();
        assert!(guide.is_available_on(date(4, 11)));
        assert!(!guide.is_available_on(date(4, 12)));
        assert!(!guide.is_available_on(date(4, 16)));
        assert!(guide.is_available_on(date(4, 17)));
    }

    #[test]
    fn inactive_guides_are_never_available() {
        let mut guide = somchai();
        guide.status = GuideStatus::OnLeave;
        assert!(!guide.is_available_on(date(6, 1)));
    }
}
