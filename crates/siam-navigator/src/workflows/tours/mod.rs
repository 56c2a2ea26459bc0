//! Back-office arithmetic for a 4x4 tour operator: package estimates, booking
//! financials, lead quotes, and booking rollups.

pub mod booking;
pub mod estimate;
pub mod feedback;
pub mod financial;
pub mod guide;
pub mod package;
pub mod quote;
pub mod router;
pub mod season;

#[cfg(test)]
mod tests;

pub use booking::{booking_financials, BookingCosts, BookingFinancials, BookingStatus};
pub use estimate::{estimate_cost, CostBreakdown, CostEstimate, CostEstimateRequest};
pub use feedback::{CategoryRatings, Feedback, FeedbackStatus, AUTO_APPROVE_RATING};
pub use financial::{
    agent_performance, monthly, summarize, AgentPerformance, BookingLedgerEntry,
    BookingsByStatus, CostCategoryTotals, FinancialSummary, MonthlyFinancialData,
};
pub use guide::{BlackoutPeriod, Guide, GuidePricing, GuideStatus, TourType, MULTI_DAY_THRESHOLD};
pub use package::{
    AccommodationRates, CostTemplate, HotelLevel, PackageStatus, SeasonMultipliers, TourPackage,
};
pub use quote::{generate_quote, Lead, Quote, QuoteCosts, QUOTE_VALIDITY_DAYS};
pub use router::tours_router;
pub use season::Season;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TourError {
    #[error("invalid tour package: {0}")]
    InvalidPackage(String),
    #[error("unknown hotel level '{0}' (expected budget, standard, luxury, or premium)")]
    UnknownHotelLevel(String),
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("party must include at least one adult")]
    EmptyParty,
    #[error("party of {party} is outside the group size range {min}..={max} for package {code}")]
    PartySize {
        code: String,
        party: u64,
        min: u32,
        max: u32,
    },
    #[error("invalid feedback: {0}")]
    InvalidFeedback(String),
}
