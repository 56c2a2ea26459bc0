use serde::{Deserialize, Serialize};

use super::super::profile::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxThreshold {
    pub name: String,
    pub value: String,
    pub description: String,
    pub applicability: String,
}

struct ThresholdTemplate {
    name: &'static str,
    value: &'static str,
    description: &'static str,
    applicability: &'static str,
}

impl ThresholdTemplate {
    fn build(&self) -> TaxThreshold {
        TaxThreshold {
            name: self.name.to_string(),
            value: self.value.to_string(),
            description: self.description.to_string(),
            applicability: self.applicability.to_string(),
        }
    }
}

const RESIDENCY: ThresholdTemplate = ThresholdTemplate {
    name: "Tax Residency Threshold",
    value: "180 days in a calendar year",
    description: "Presence in Thailand for 180 days or more triggers tax residency status",
    applicability: "All individuals",
};

const INCOME_THRESHOLDS: [ThresholdTemplate; 3] = [
    ThresholdTemplate {
        name: "Personal Allowance",
        value: "60,000 THB per year",
        description: "Standard personal deduction available to all taxpayers",
        applicability: "All tax filers",
    },
    ThresholdTemplate {
        name: "Tax-Free Income Threshold",
        value: "150,000 THB per year",
        description: "Income below this threshold (after allowances and deductions) is generally not taxed",
        applicability: "Individuals with assessable income",
    },
    ThresholdTemplate {
        name: "Tax Rates",
        value: "Progressive: 0% to 35%",
        description: "Personal income tax is progressive. Rates: 0% (up to 150k), 5%, 10%, 15%, 20%, 25%, 30%, 35% (over 5M THB)",
        applicability: "All taxable income",
    },
];

const SPOUSE_ALLOWANCE: ThresholdTemplate = ThresholdTemplate {
    name: "Spouse Allowance",
    value: "60,000 THB per year",
    description: "Additional deduction available for supporting a spouse",
    applicability: "Taxpayers with dependent spouse",
};

pub(crate) fn relevant_thresholds(profile: &UserProfile) -> Vec<TaxThreshold> {
    let mut thresholds = vec![RESIDENCY.build()];

    if profile.has_thai_income || profile.has_foreign_income {
        thresholds.extend(INCOME_THRESHOLDS.iter().map(ThresholdTemplate::build));
    }
    if profile.has_thai_spouse {
        thresholds.push(SPOUSE_ALLOWANCE.build());
    }

    thresholds
}
