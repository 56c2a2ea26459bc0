use serde::{Deserialize, Serialize};

use super::super::profile::{StayDuration, UserProfile};

pub(crate) const RESIDENCY_THRESHOLD_DAYS: u32 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxResidencyStatus {
    Resident,
    NonResident,
    Uncertain,
}

/// Known day counts decide outright; otherwise the intended stay is used as a proxy.
pub fn classify_residency(profile: &UserProfile) -> TaxResidencyStatus {
    if let Some(days) = profile.days_in_thailand {
        return if days >= RESIDENCY_THRESHOLD_DAYS {
            TaxResidencyStatus::Resident
        } else {
            TaxResidencyStatus::NonResident
        };
    }

    match profile.intended_stay_duration {
        Some(StayDuration::LongTerm) => TaxResidencyStatus::Resident,
        Some(StayDuration::ShortTerm) => TaxResidencyStatus::NonResident,
        Some(StayDuration::MediumTerm) | None => TaxResidencyStatus::Uncertain,
    }
}

pub(crate) fn explain_residency(status: TaxResidencyStatus) -> &'static str {
    match status {
        TaxResidencyStatus::Resident => {
            "Tax residency is defined as being present in Thailand for 180 days or more in a \
             calendar year. Based on your profile, you may be classified as a Thai tax resident."
        }
        TaxResidencyStatus::NonResident => {
            "Tax residency is defined as being present in Thailand for 180 days or more in a \
             calendar year. Based on your profile, you are likely a non-resident for tax purposes."
        }
        TaxResidencyStatus::Uncertain => {
            "Tax residency status cannot be determined without knowing exact days in Thailand. \
             Tax residency is triggered at 180 days in a calendar year."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_count_overrides_intended_stay() {
        let mut profile = UserProfile::new("usa");
        profile.intended_stay_duration = Some(StayDuration::LongTerm);
        profile.days_in_thailand = Some(179);
        assert_eq!(classify_residency(&profile), TaxResidencyStatus::NonResident);

        profile.intended_stay_duration = Some(StayDuration::ShortTerm);
        profile.days_in_thailand = Some(180);
        assert_eq!(classify_residency(&profile), TaxResidencyStatus::Resident);
    }

    #[test]
    fn falls_back_to_intended_stay() {
        let mut profile = UserProfile::new("usa");
        assert_eq!(classify_residency(&profile), TaxResidencyStatus::Uncertain);

        profile.intended_stay_duration = Some(StayDuration::MediumTerm);
        assert_eq!(classify_residency(&profile), TaxResidencyStatus::Uncertain);

        profile.intended_stay_duration = Some(StayDuration::ShortTerm);
        assert_eq!(classify_residency(&profile), TaxResidencyStatus::NonResident);
    }
}
