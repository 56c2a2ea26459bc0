use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Where the person is when the profile is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurrentLocation {
    #[serde(alias = "in-country")]
    InThailand,
    #[serde(alias = "outside-country")]
    OutsideThailand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StayDuration {
    /// Under 90 days.
    ShortTerm,
    /// 90 days up to a year.
    MediumTerm,
    /// A year or more.
    LongTerm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PurposeOfStay {
    Tourism,
    Employment,
    Business,
    DigitalNomad,
    Retirement,
    Family,
    Education,
    Medical,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisaType {
    TouristVisaExempt,
    TouristVisaOnArrival,
    TouristVisaTr,
    NonImmigrantB,
    NonImmigrantO,
    NonImmigrantEd,
    DtvVisa,
    SmartVisa,
    LtrVisa,
    EliteVisa,
}

impl VisaType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::TouristVisaExempt => "Visa Exemption",
            Self::TouristVisaOnArrival => "Visa on Arrival",
            Self::TouristVisaTr => "Tourist Visa (TR)",
            Self::NonImmigrantB => "Non-Immigrant B (Business/Employment)",
            Self::NonImmigrantO => "Non-Immigrant O (Retirement/Family)",
            Self::NonImmigrantEd => "Non-Immigrant ED (Education)",
            Self::DtvVisa => "Destination Thailand Visa (DTV)",
            Self::SmartVisa => "SMART Visa",
            Self::LtrVisa => "Long-Term Resident (LTR) Visa",
            Self::EliteVisa => "Thailand Elite Visa",
        }
    }

    /// Visa exemption and the TR tourist visa; visa on arrival is tracked separately.
    pub const fn is_tourist_entry(self) -> bool {
        matches!(self, Self::TouristVisaExempt | Self::TouristVisaTr)
    }
}

/// Caller-supplied description of a person's situation. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub nationality: String,
    #[serde(default)]
    pub current_location: Option<CurrentLocation>,
    #[serde(default)]
    pub current_visa_type: Option<VisaType>,
    #[serde(default)]
    pub intended_stay_duration: Option<StayDuration>,
    #[serde(default)]
    pub purpose_of_stay: BTreeSet<PurposeOfStay>,
    #[serde(default)]
    pub will_work_in_thailand: bool,
    #[serde(default)]
    pub has_thai_income: bool,
    #[serde(default)]
    pub has_foreign_income: bool,
    /// Expressed in a foreign currency unit; see `NavigatorConfig::thb_per_foreign_unit`.
    #[serde(default)]
    pub monthly_income: Option<f64>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub has_thai_spouse: bool,
    /// Days present in the current calendar year.
    #[serde(default)]
    pub days_in_thailand: Option<u32>,
    #[serde(default)]
    pub needs_driving_license: bool,
    #[serde(default)]
    pub needs_vehicle_ownership: bool,
    #[serde(default)]
    pub needs_bank_account: bool,
}

impl UserProfile {
    pub fn new(nationality: impl Into<String>) -> Self {
        Self {
            nationality: nationality.into(),
            current_location: None,
            current_visa_type: None,
            intended_stay_duration: None,
            purpose_of_stay: BTreeSet::new(),
            will_work_in_thailand: false,
            has_thai_income: false,
            has_foreign_income: false,
            monthly_income: None,
            age: None,
            has_thai_spouse: false,
            days_in_thailand: None,
            needs_driving_license: false,
            needs_vehicle_ownership: false,
            needs_bank_account: false,
        }
    }

    pub fn has_purpose(&self, purpose: PurposeOfStay) -> bool {
        self.purpose_of_stay.contains(&purpose)
    }

    pub fn stays(&self, duration: StayDuration) -> bool {
        self.intended_stay_duration == Some(duration)
    }

    /// An unknown duration is treated as "not short-term", matching how the checks read.
    pub fn stays_beyond_short_term(&self) -> bool {
        !self.stays(StayDuration::ShortTerm)
    }

    pub fn is_in_thailand(&self) -> bool {
        self.current_location == Some(CurrentLocation::InThailand)
    }

    pub fn holds(&self, visa: VisaType) -> bool {
        self.current_visa_type == Some(visa)
    }

    pub fn holds_tourist_entry(&self) -> bool {
        self.current_visa_type
            .map(VisaType::is_tourist_entry)
            .unwrap_or(false)
    }

    /// Monthly income converted to THB, with a missing income counted as zero.
    pub fn monthly_income_thb(&self, thb_per_foreign_unit: f64) -> f64 {
        self.monthly_income.unwrap_or(0.0) * thb_per_foreign_unit
    }

    pub(crate) fn normalized_nationality(&self) -> String {
        normalize_country(&self.nationality)
    }
}

pub(crate) fn normalize_country(value: &str) -> String {
    value.trim().to_lowercase()
}
