use serde::{Deserialize, Serialize};

use super::super::profile::UserProfile;
use super::residency::TaxResidencyStatus;
use super::triggers::IncomeTrigger;

pub(crate) const FILING_DEADLINE: &str = "March 31 of the following year";
pub(crate) const FORM_PND_90: &str = "PND 90 (Personal Income Tax Return)";
pub(crate) const FORM_PND_91: &str = "PND 91 (Half-year Tax Return)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxFilingObligation {
    pub must_file: bool,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forms: Option<Vec<String>>,
    pub notes: Vec<String>,
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub(crate) fn determine_filing(
    profile: &UserProfile,
    residency: TaxResidencyStatus,
    triggers: &[IncomeTrigger],
) -> TaxFilingObligation {
    if !triggers.iter().any(|t| t.is_taxable.may_be_taxed()) {
        return TaxFilingObligation {
            must_file: false,
            reason: "No taxable income identified based on provided information.".to_string(),
            deadline: None,
            forms: None,
            notes: lines(&[
                "Tax filing is required if you have assessable income in Thailand",
                "This assessment is based on information provided and may not cover all scenarios",
            ]),
        };
    }

    if profile.has_thai_income || profile.will_work_in_thailand {
        return TaxFilingObligation {
            must_file: true,
            reason: "Thai-sourced income requires tax filing regardless of residency status."
                .to_string(),
            deadline: Some(FILING_DEADLINE.to_string()),
            forms: Some(lines(&[FORM_PND_90, FORM_PND_91])),
            notes: lines(&[
                "Employer may withhold tax if employed in Thailand",
                "Annual reconciliation required via PND 90",
                "Tax ID number (TIN) required BEFORE filing - apply at local Revenue Department office",
                "TIN application requires: passport, visa, work permit (if applicable), Thai address proof (lease/TM30)",
                "Late filing may result in penalties (200 THB/month) and interest (1.5%/month)",
                "Some employers can arrange TIN for employees",
                "E-filing available through RD website (requires TIN and PIN)",
            ]),
        };
    }

    if residency == TaxResidencyStatus::Resident && profile.has_foreign_income {
        return TaxFilingObligation {
            must_file: true,
            reason: "Tax residents with foreign income remitted to Thailand may be required to \
                     file (2024/2025 rule changes apply)."
                .to_string(),
            deadline: Some(FILING_DEADLINE.to_string()),
            forms: Some(lines(&[FORM_PND_90])),
            notes: lines(&[
                "Filing requirement applies if foreign income is remitted to Thailand",
                "2024/2025 rule change: ALL remittances now assessable (not just same-year income)",
                "Tax ID number (TIN) required - apply at Revenue Department office BEFORE filing",
                "TIN application: passport, visa, proof of Thai address (lease/TM30), bank statements showing remittance",
                "Double taxation treaty (DTA) benefits may apply if your country has treaty with Thailand",
                "To claim DTA benefits: (1) Obtain tax residency certificate from home country, (2) Submit with PND 90, (3) May need to show proof of foreign tax paid",
                "Some provincial Revenue offices more familiar with DTA claims than others (Bangkok offices generally better)",
                "Keep records: foreign tax statements, proof of income source, bank transfer records, tax residency certificate",
            ]),
        };
    }

    TaxFilingObligation {
        must_file: false,
        reason: "Filing requirement cannot be determined without complete information on \
                 residency and income remittance."
            .to_string(),
        deadline: None,
        forms: None,
        notes: lines(&[
            "Tax filing may be required if:",
            "  • You are in Thailand 180+ days in a calendar year, AND",
            "  • You have Thai-sourced income, OR",
            "  • You remit foreign income to Thailand",
            "Consult with a Thai tax advisor to determine specific obligations",
        ]),
    }
}
