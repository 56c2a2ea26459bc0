use serde::{Deserialize, Serialize};

use super::season::Season;
use super::TourError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HotelLevel {
    Budget,
    Standard,
    Luxury,
    Premium,
}

impl HotelLevel {
    pub const fn ordered() -> [Self; 4] {
        [Self::Budget, Self::Standard, Self::Luxury, Self::Premium]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::Standard => "Standard",
            Self::Luxury => "Luxury",
            Self::Premium => "Premium",
        }
    }
}

impl std::str::FromStr for HotelLevel {
    type Err = TourError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TourError::UnknownHotelLevel(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageStatus {
    Active,
    Inactive,
    #[default]
    Draft,
}

/// Per-night room rate for one person at each hotel level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccommodationRates {
    pub budget: f64,
    pub standard: f64,
    pub luxury: f64,
    pub premium: f64,
}

impl AccommodationRates {
    pub const fn rate(&self, level: HotelLevel) -> f64 {
        match level {
            HotelLevel::Budget => self.budget,
            HotelLevel::Standard => self.standard,
            HotelLevel::Luxury => self.luxury,
            HotelLevel::Premium => self.premium,
        }
    }
}

impl Default for AccommodationRates {
    fn default() -> Self {
        Self {
            budget: 800.0,
            standard: 1500.0,
            luxury: 3000.0,
            premium: 5000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CostTemplate {
    pub accommodation_per_night: AccommodationRates,
    pub meal_per_day: f64,
    pub guide_per_day: f64,
    pub transport_per_day: f64,
    pub attractions_per_person: f64,
}

impl Default for CostTemplate {
    fn default() -> Self {
        Self {
            accommodation_per_night: AccommodationRates::default(),
            meal_per_day: 600.0,
            guide_per_day: 2000.0,
            transport_per_day: 1500.0,
            attractions_per_person: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonMultipliers {
    pub peak: f64,
    pub shoulder: f64,
    pub low: f64,
}

impl SeasonMultipliers {
    pub const fn for_season(&self, season: Season) -> f64 {
        match season {
            Season::Peak => self.peak,
            Season::Shoulder => self.shoulder,
            Season::Low => self.low,
        }
    }
}

impl Default for SeasonMultipliers {
    fn default() -> Self {
        Self {
            peak: 1.3,
            shoulder: 1.1,
            low: 1.0,
        }
    }
}

fn default_min_group() -> u32 {
    1
}

fn default_max_group() -> u32 {
    10
}

/// Sellable tour with its cost template and season pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPackage {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: String,
    /// Days; the estimator charges one night per day.
    pub duration: u32,
    #[serde(default)]
    pub status: PackageStatus,
    #[serde(default)]
    pub destinations: Vec<String>,
    #[serde(default = "default_min_group")]
    pub min_group_size: u32,
    #[serde(default = "default_max_group")]
    pub max_group_size: u32,
    #[serde(default)]
    pub cost_template: CostTemplate,
    pub base_price_per_person: f64,
    #[serde(default)]
    pub season_multipliers: SeasonMultipliers,
}

impl TourPackage {
    pub fn new(name: impl Into<String>, code: impl Into<String>, duration: u32, base_price_per_person: f64) -> Self {
        Self {
            name: name.into(),
            code: code.into().trim().to_uppercase(),
            description: String::new(),
            duration,
            status: PackageStatus::default(),
            destinations: Vec::new(),
            min_group_size: default_min_group(),
            max_group_size: default_max_group(),
            cost_template: CostTemplate::default(),
            base_price_per_person,
            season_multipliers: SeasonMultipliers::default(),
        }
    }

    /// Checks the constraints a stored package would have been held to.
    pub fn validate(&self) -> Result<(), TourError> {
        if self.code.trim().is_empty() {
            return Err(TourError::InvalidPackage("package code is required".to_string()));
        }
        if self.duration == 0 {
            return Err(TourError::InvalidPackage(format!(
                "package {} must last at least one day",
                self.code
            )));
        }
        if self.min_group_size == 0 || self.min_group_size > self.max_group_size {
            return Err(TourError::InvalidPackage(format!(
                "package {} group size range {}..={} is invalid",
                self.code, self.min_group_size, self.max_group_size
            )));
        }
        if !(self.base_price_per_person.is_finite() && self.base_price_per_person >= 0.0) {
            return Err(TourError::InvalidPackage(format!(
                "package {} base price must be a non-negative amount",
                self.code
            )));
        }
        Ok(())
    }

    /// Validates the package, then the party it would carry.
    pub fn check_party(&self, adults: u32, children: u32) -> Result<(), TourError> {
        self.validate()?;
        if adults == 0 {
            return Err(TourError::EmptyParty);
        }
        let party = u64::from(adults) + u64::from(children);
        if party < u64::from(self.min_group_size) || party > u64::from(self.max_group_size) {
            return Err(TourError::PartySize {
                code: self.code.clone(),
                party,
                min: self.min_group_size,
                max: self.max_group_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_packages_pick_up_catalogue_defaults() {
        let package: TourPackage = serde_json::from_value(json!({
            "name": "Northern Loop",
            "code": "NL5",
            "duration": 5,
            "basePricePerPerson": 18000
        }))
        .expect("package parses");

        assert_eq!(package.status, PackageStatus::Draft);
        assert_eq!(package.max_group_size, 10);
        assert_eq!(package.cost_template, CostTemplate::default());
        assert_eq!(package.season_multipliers.for_season(Season::Peak), 1.3);
        assert_eq!(
            package
                .cost_template
                .accommodation_per_night
                .rate(HotelLevel::Luxury),
            3000.0
        );
    }

    #[test]
    fn partial_templates_keep_remaining_defaults() {
        let template: CostTemplate = serde_json::from_value(json!({
            "mealPerDay": 750,
            "accommodationPerNight": { "premium": 6500 }
        }))
        .expect("template parses");

        assert_eq!(template.meal_per_day, 750.0);
        assert_eq!(template.guide_per_day, 2000.0);
        assert_eq!(template.accommodation_per_night.premium, 6500.0);
        assert_eq!(template.accommodation_per_night.budget, 800.0);
    }

    #[test]
    fn validation_rejects_zero_day_packages() {
        let package = TourPackage::new("Day Zero", "dz0", 0, 1000.0);
        assert_eq!(package.code, "DZ0");
        assert!(matches!(package.validate(), Err(TourError::InvalidPackage(_))));

        let package = TourPackage::new("Golden Triangle", "gt3", 3, 12000.0);
        assert!(package.validate().is_ok());
    }

    #[test]
    fn hotel_levels_parse_case_insensitively() {
        assert_eq!("LUXURY".parse::<HotelLevel>().ok(), Some(HotelLevel::Luxury));
        assert!("hostel".parse::<HotelLevel>().is_err());
    }

    #[test]
    fn party_must_fit_the_group_size_range() {
        let mut package = TourPackage::new("Golden Triangle", "gt3", 3, 12000.0);
        package.min_group_size = 2;
        package.max_group_size = 6;

        assert!(package.check_party(2, 4).is_ok());
        assert_eq!(package.check_party(0, 3), Err(TourError::EmptyParty));
        assert!(matches!(
            package.check_party(1, 0),
            Err(TourError::PartySize { party: 1, min: 2, max: 6, .. })
        ));
        assert!(matches!(
            package.check_party(u32::MAX, 1),
            Err(TourError::PartySize { party, .. }) if party == u64::from(u32::MAX) + 1
        ));
    }
}
