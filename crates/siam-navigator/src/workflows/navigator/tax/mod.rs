//! Tax residency, exposure, and filing information for a profile.
//!
//! Nothing here calculates tax owed; outputs describe which rules may apply.

mod advisories;
mod exposure;
mod filing;
mod residency;
mod thresholds;
mod treaty;
mod triggers;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::directory::{NationalityDirectory, StaticNationalityDirectory};
use super::guarded;
use super::profile::UserProfile;
use super::AnalysisError;

pub use exposure::{classify_exposure, TaxExposureLevel};
pub use filing::TaxFilingObligation;
pub use residency::{classify_residency, TaxResidencyStatus};
pub use thresholds::TaxThreshold;
pub use treaty::DoubleTaxationTreaty;
pub use triggers::{IncomeCategory, IncomeTrigger, Taxability};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxAnalysis {
    pub residency_status: TaxResidencyStatus,
    pub residency_explanation: String,
    /// Same classification the rule engine reports as `taxExposure`.
    pub exposure_level: TaxExposureLevel,
    pub income_triggers: Vec<IncomeTrigger>,
    pub filing_obligation: TaxFilingObligation,
    pub relevant_thresholds: Vec<TaxThreshold>,
    pub warnings: Vec<String>,
    pub disclaimers: Vec<String>,
}

#[derive(Clone)]
pub struct TaxAnalyzer {
    directory: Arc<dyn NationalityDirectory>,
}

impl TaxAnalyzer {
    pub fn new(directory: Arc<dyn NationalityDirectory>) -> Self {
        Self { directory }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(StaticNationalityDirectory::standard()))
    }

    pub fn analyze(&self, profile: &UserProfile) -> Result<TaxAnalysis, AnalysisError> {
        guarded("Tax analysis failed", || self.evaluate(profile))
    }

    pub fn has_tax_treaty(&self, nationality: &str) -> DoubleTaxationTreaty {
        treaty::lookup_treaty(self.directory.as_ref(), nationality)
    }

    fn evaluate(&self, profile: &UserProfile) -> TaxAnalysis {
        let residency_status = classify_residency(profile);
        let income_triggers = triggers::identify_triggers(profile, residency_status);
        let filing_obligation = filing::determine_filing(profile, residency_status, &income_triggers);
        let has_treaty = self.directory.has_tax_treaty(&profile.nationality);

        TaxAnalysis {
            residency_status,
            residency_explanation: residency::explain_residency(residency_status).to_string(),
            exposure_level: classify_exposure(profile),
            income_triggers,
            filing_obligation,
            relevant_thresholds: thresholds::relevant_thresholds(profile),
            warnings: advisories::tax_warnings(profile, residency_status, has_treaty),
            disclaimers: advisories::disclaimers(),
        }
    }
}

impl std::fmt::Debug for TaxAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaxAnalyzer").finish_non_exhaustive()
    }
}
