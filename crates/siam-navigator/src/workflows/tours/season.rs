use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Pricing season, bucketed by calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    /// November through February.
    Peak,
    /// March to May, September and October.
    Shoulder,
    /// June through August.
    Low,
}

impl Season {
    /// `month` is 1-based; values outside 1..=12 fall into the low season.
    pub const fn for_month(month: u32) -> Self {
        match month {
            11 | 12 | 1 | 2 => Self::Peak,
            3..=5 | 9 | 10 => Self::Shoulder,
            _ => Self::Low,
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_month(date.month())
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Peak => "Peak Season (Nov-Feb)",
            Self::Shoulder => "Shoulder Season (Mar-May, Sep-Oct)",
            Self::Low => "Low Season (Jun-Aug)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_month_maps_to_one_season() {
        let expected = [
            Season::Peak,
            Season::Peak,
            Season::Shoulder,
            Season::Shoulder,
            Season::Shoulder,
            Season::Low,
            Season::Low,
            Season::Low,
            Season::Shoulder,
            Season::Shoulder,
            Season::Peak,
            Season::Peak,
        ];
        for (index, season) in expected.into_iter().enumerate() {
            assert_eq!(Season::for_month(index as u32 + 1), season, "month {}", index + 1);
        }
    }

    #[test]
    fn dates_use_their_month() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 28).expect("valid date");
        assert_eq!(Season::for_date(date), Season::Peak);
        assert_eq!(Season::for_date(date).label(), "Peak Season (Nov-Feb)");
    }
}
