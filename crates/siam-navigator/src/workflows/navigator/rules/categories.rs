use serde::{Deserialize, Serialize};

use super::super::profile::VisaType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Primary,
    Secondary,
    Possible,
}

impl Priority {
    pub const fn rank(self) -> u8 {
        match self {
            Self::Primary => 3,
            Self::Secondary => 2,
            Self::Possible => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Possible => "possible",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaCategory {
    #[serde(rename = "type")]
    pub visa_type: VisaType,
    pub is_applicable: bool,
    pub reason: String,
    pub priority: Priority,
}

impl VisaCategory {
    pub(crate) fn new(
        visa_type: VisaType,
        is_applicable: bool,
        priority: Priority,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            visa_type,
            is_applicable,
            reason: reason.into(),
            priority,
        }
    }
}

/// Collects candidates keyed by visa type.
///
/// A later candidate replaces an earlier one of the same type only when its
/// priority ranks strictly higher, so ties keep the first insertion.
#[derive(Debug, Default)]
pub(crate) struct CategoryAccumulator {
    entries: Vec<VisaCategory>,
}

impl CategoryAccumulator {
    pub(crate) fn offer(&mut self, candidate: VisaCategory) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.visa_type == candidate.visa_type)
        {
            Some(existing) if candidate.priority.rank() > existing.priority.rank() => {
                *existing = candidate;
            }
            Some(_) => {}
            None => self.entries.push(candidate),
        }
    }

    /// Highest priority first; equal priorities keep first-insertion order.
    pub(crate) fn finish(self) -> Vec<VisaCategory> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_higher_priority_candidate_in_place() {
        let mut acc = CategoryAccumulator::default();
        acc.offer(VisaCategory::new(VisaType::TouristVisaTr, true, Priority::Secondary, "first"));
        acc.offer(VisaCategory::new(VisaType::EliteVisa, true, Priority::Possible, "elite"));
        acc.offer(VisaCategory::new(VisaType::TouristVisaTr, true, Priority::Primary, "second"));
        acc.offer(VisaCategory::new(VisaType::TouristVisaTr, false, Priority::Primary, "third"));

        let out = acc.finish();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].visa_type, VisaType::TouristVisaTr);
        assert_eq!(out[0].reason, "second");
        assert_eq!(out[1].visa_type, VisaType::EliteVisa);
    }

    #[test]
    fn sort_is_stable_for_equal_priorities() {
        let mut acc = CategoryAccumulator::default();
        acc.offer(VisaCategory::new(VisaType::LtrVisa, true, Priority::Possible, "ltr"));
        acc.offer(VisaCategory::new(VisaType::EliteVisa, true, Priority::Possible, "elite"));
        acc.offer(VisaCategory::new(VisaType::NonImmigrantB, true, Priority::Primary, "b"));

        let order: Vec<_> = acc.finish().into_iter().map(|c| c.visa_type).collect();
        assert_eq!(
            order,
            vec![VisaType::NonImmigrantB, VisaType::LtrVisa, VisaType::EliteVisa]
        );
    }

    #[test]
    fn serializes_with_wire_names() {
        let category = VisaCategory::new(VisaType::DtvVisa, false, Priority::Possible, "why");
        let value = serde_json::to_value(&category).expect("serializes");
        assert_eq!(value["type"], "dtv-visa");
        assert_eq!(value["isApplicable"], false);
        assert_eq!(value["priority"], "possible");
    }
}
