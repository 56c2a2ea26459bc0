//! Post-tour customer feedback and its approval rule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TourError;

/// Overall ratings at or above this are approved on submission.
pub const AUTO_APPROVE_RATING: u8 = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackStatus {
    #[default]
    Pending,
    Approved,
    Published,
    Rejected,
}

/// Optional 1-5 ratings per aspect of the tour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryRatings {
    pub guide: Option<u8>,
    pub vehicle: Option<u8>,
    pub activities: Option<u8>,
    pub accommodation: Option<u8>,
    pub food: Option<u8>,
    pub value_for_money: Option<u8>,
}

impl CategoryRatings {
    fn present(&self) -> impl Iterator<Item = u8> {
        [
            self.guide,
            self.vehicle,
            self.activities,
            self.accommodation,
            self.food,
            self.value_for_money,
        ]
        .into_iter()
        .flatten()
    }

    /// Mean of the ratings given; zero when none were.
    pub fn average(&self) -> f64 {
        let (sum, count) = self
            .present()
            .fold((0u32, 0u32), |(sum, count), rating| (sum + u32::from(rating), count + 1));
        if count == 0 {
            0.0
        } else {
            f64::from(sum) / f64::from(count)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub booking_id: String,
    pub customer_name: String,
    pub overall_rating: u8,
    #[serde(default)]
    pub ratings: CategoryRatings,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub would_recommend: bool,
    #[serde(default = "allow_by_default")]
    pub allow_public_display: bool,
    #[serde(default)]
    pub status: FeedbackStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<NaiveDate>,
}

fn allow_by_default() -> bool {
    true
}

fn check_rating(label: &str, rating: u8) -> Result<(), TourError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(TourError::InvalidFeedback(format!(
            "{label} rating must be between 1 and 5, got {rating}"
        )))
    }
}

impl Feedback {
    pub fn validate(&self) -> Result<(), TourError> {
        check_rating("overall", self.overall_rating)?;
        let ratings = &self.ratings;
        for (label, rating) in [
            ("guide", ratings.guide),
            ("vehicle", ratings.vehicle),
            ("activities", ratings.activities),
            ("accommodation", ratings.accommodation),
            ("food", ratings.food),
            ("valueForMoney", ratings.value_for_money),
        ] {
            if let Some(rating) = rating {
                check_rating(label, rating)?;
            }
        }
        Ok(())
    }

    pub fn average_category_rating(&self) -> f64 {
        self.ratings.average()
    }

    pub fn qualifies_for_auto_approval(&self) -> bool {
        self.overall_rating >= AUTO_APPROVE_RATING
            && self.allow_public_display
            && self.status == FeedbackStatus::Pending
    }

    /// Applies the submission-time rule to newly received feedback.
    pub fn submit(mut self, submitted_on: NaiveDate) -> Self {
        if self.qualifies_for_auto_approval() {
            self.status = FeedbackStatus::Approved;
            self.published_at = Some(submitted_on);
        }
        self
    }
}
