use serde::{Deserialize, Serialize};

use super::super::profile::{PurposeOfStay, StayDuration, UserProfile, VisaType};
use super::super::tax::TaxExposureLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskKind {
    Immigration,
    Tax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskSeverity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskIndicator {
    #[serde(rename = "type")]
    pub kind: RiskKind,
    pub severity: RiskSeverity,
    pub description: String,
}

impl RiskIndicator {
    fn immigration(severity: RiskSeverity, description: &str) -> Self {
        Self {
            kind: RiskKind::Immigration,
            severity,
            description: description.to_string(),
        }
    }
}

const LONG_CONTINUOUS_STAY_DAYS: u32 = 365;

pub(crate) fn identify_risks(
    profile: &UserProfile,
    exposure: TaxExposureLevel,
) -> Vec<RiskIndicator> {
    let mut risks = Vec::new();
    let on_tourist_entry = profile.holds_tourist_entry();

    if profile.has_purpose(PurposeOfStay::DigitalNomad) && on_tourist_entry {
        risks.push(RiskIndicator::immigration(
            RiskSeverity::Warning,
            "Working remotely on tourist visa may be questioned at immigration. Verify latest \
             digital nomad visa options (DTV).",
        ));
    }

    if profile.will_work_in_thailand && !profile.holds(VisaType::NonImmigrantB) {
        risks.push(RiskIndicator::immigration(
            RiskSeverity::Critical,
            "Employment in Thailand without proper work authorization (Non-B visa + work permit) \
             is illegal.",
        ));
    }

    if exposure >= TaxExposureLevel::Likely {
        risks.push(RiskIndicator {
            kind: RiskKind::Tax,
            severity: RiskSeverity::Warning,
            description: "Tax residency may apply. Consult with a Thai tax advisor regarding \
                          filing obligations and foreign income reporting."
                .to_string(),
        });
    }

    if profile.stays(StayDuration::LongTerm) && on_tourist_entry {
        risks.push(RiskIndicator::immigration(
            RiskSeverity::Critical,
            "Tourist visa/exemption is not suitable for long-term stay. Visa extension or \
             different visa category required.",
        ));
    }

    if profile.holds(VisaType::TouristVisaExempt) && profile.stays_beyond_short_term() {
        risks.push(RiskIndicator::immigration(
            RiskSeverity::Warning,
            "Extended stays on visa exemption using 'border runs' (leaving and re-entering on \
             visa exemption) trigger immigration scrutiny. Definitions: (1) 'Border run' = \
             exit/re-enter on visa exemption (increasingly questioned, especially by land \
             border). (2) 'Visa run' = exit to obtain new visa (more acceptable but still \
             scrutinized if frequent). Immigration officers may deny entry after 2-3 consecutive \
             visa exempt entries, especially at land borders (limited to 2 land entries per \
             calendar year as of 2024). Air entries: more flexible but not unlimited. Consider \
             proper long-term visa (Non-O, DTV, etc.) to avoid denial of entry.",
        ));
    }

    if profile.holds(VisaType::TouristVisaOnArrival) && profile.stays_beyond_short_term() {
        risks.push(RiskIndicator::immigration(
            RiskSeverity::Critical,
            "Visa-on-Arrival (VoA) is strictly for short stays (15 days max, obtainable only at \
             airports, costs 2000 THB). Cannot be extended. Multiple consecutive VoA entries may \
             be denied. Not suitable for extended stays - consider tourist visa (TR) or \
             longer-term visa category.",
        ));
    }

    if profile.holds(VisaType::TouristVisaExempt) && profile.is_in_thailand() {
        risks.push(RiskIndicator::immigration(
            RiskSeverity::Info,
            "Land border visa-exempt entries limited to 2 times per calendar year (as of 2024 \
             rule). If planning multiple entries, use air entry (more flexible) or obtain proper \
             tourist visa (TR). Exceeding 2 land entries may result in denial at border checkpoint.",
        ));
    }

    if profile.is_in_thailand()
        && profile
            .days_in_thailand
            .is_some_and(|days| days > LONG_CONTINUOUS_STAY_DAYS)
        && on_tourist_entry
    {
        risks.push(RiskIndicator::immigration(
            RiskSeverity::Warning,
            "Long-term continuous stay on tourist visa/exemption may indicate need to transition \
             to proper visa category. If you received COVID-era extensions (2020-2022): these \
             have expired and you must transition to a proper long-term visa (Non-O, Non-B, \
             Non-ED, DTV, etc.). Continuing on tourist visas after extended stay may result in \
             immigration questioning or denial of entry/extension.",
        ));
    }

    if profile.holds(VisaType::DtvVisa) {
        risks.push(RiskIndicator::immigration(
            RiskSeverity::Info,
            "DTV visa holders must comply with 90-day reporting (every 90 consecutive days in \
             Thailand) and TM30 registration (within 24 hours of arrival at residence). DTV is \
             valid for 5 years with 180-day stays per entry. Can be extended for additional 180 \
             days (total 360 days per year). Verify work restrictions: remote work for foreign \
             companies only, not Thai clients.",
        ));
    }

    risks
}
