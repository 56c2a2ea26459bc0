use serde::{Deserialize, Serialize};

use super::super::directory::NationalityDirectory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoubleTaxationTreaty {
    /// Echoed as supplied by the caller.
    pub country: String,
    pub has_treaty: bool,
    pub notes: Vec<String>,
}

pub(crate) fn lookup_treaty(
    directory: &dyn NationalityDirectory,
    nationality: &str,
) -> DoubleTaxationTreaty {
    let has_treaty = directory.has_tax_treaty(nationality);
    let notes = if has_treaty {
        treaty_notes(nationality)
    } else {
        no_treaty_notes(nationality)
    };

    DoubleTaxationTreaty {
        country: nationality.to_string(),
        has_treaty,
        notes,
    }
}

fn treaty_notes(nationality: &str) -> Vec<String> {
    let mut notes = vec![format!(
        "Double taxation treaty (DTA) exists between Thailand and {nationality}."
    )];
    notes.extend(
        [
            "DTA Claiming Procedure: (1) Obtain tax residency certificate from your home country's \
             tax authority (proves you're a resident there for tax purposes).",
            "(2) Gather proof of foreign tax paid (if applicable): tax returns, withholding \
             certificates, payment receipts.",
            "(3) Submit with Thai tax filing (PND 90): Include tax residency certificate, proof of \
             foreign tax, and completed DTA claim form (if required by specific treaty).",
            "(4) Revenue Department review: May take several months, may request additional \
             documentation, may contact home country tax authority.",
            "DTA benefits vary by treaty: Some treaties exempt certain income types (government \
             pensions, royalties), others provide tax credits (reduce Thai tax by foreign tax \
             paid), others set maximum tax rates. Specific benefits depend on income type and \
             treaty provisions.",
            "Office variability: Bangkok Revenue offices (especially those handling expats like \
             Lumpini, Ploenchit) more familiar with DTA claims. Provincial offices may require \
             more documentation or take longer.",
        ]
        .into_iter()
        .map(str::to_string),
    );
    notes
}

fn no_treaty_notes(nationality: &str) -> Vec<String> {
    let mut notes = vec![format!(
        "No double taxation treaty on record between Thailand and {nationality}."
    )];
    notes.extend(
        [
            "Implications: (1) May be subject to tax in both Thailand and home country on the same \
             income (double taxation).",
            "(2) No automatic relief in Thailand for foreign tax paid (though home country may \
             provide unilateral credit).",
            "(3) Home country tax authorities can confirm which foreign tax credits or exemptions \
             they offer.",
            "Note: Absence from this list doesn't guarantee no treaty exists - verify with Thai \
             Revenue Department or tax advisor. Treaty list updated periodically.",
        ]
        .into_iter()
        .map(str::to_string),
    );
    notes
}
