use serde::{Deserialize, Serialize};

use super::super::profile::{StayDuration, UserProfile};

/// Ordered `None < Possible < Likely < Certain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxExposureLevel {
    None,
    Possible,
    Likely,
    Certain,
}

impl TaxExposureLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Possible => "possible",
            Self::Likely => "likely",
            Self::Certain => "certain",
        }
    }
}

pub fn classify_exposure(profile: &UserProfile) -> TaxExposureLevel {
    if !(profile.has_thai_income || profile.has_foreign_income) {
        return TaxExposureLevel::None;
    }
    if profile.has_thai_income {
        return TaxExposureLevel::Certain;
    }

    match profile.intended_stay_duration {
        Some(StayDuration::LongTerm) => TaxExposureLevel::Likely,
        _ => TaxExposureLevel::Possible,
    }
}
