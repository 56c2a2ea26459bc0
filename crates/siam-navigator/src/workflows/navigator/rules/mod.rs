//! Decision-tree evaluation of a [`UserProfile`] into visa categories, paperwork,
//! risk indicators, and warnings.
//!
//! Every output is informational text keyed by structured fields; callers should
//! branch on `type`, `priority`, and `severity`, never on the reason strings.

mod categories;
mod paperwork;
mod risks;
pub(crate) mod trees;
mod warnings;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::directory::{NationalityDirectory, StaticNationalityDirectory};
use super::guarded;
use super::profile::{UserProfile, VisaType};
use super::tax::{classify_exposure, TaxExposureLevel};
use super::AnalysisError;
use crate::config::NavigatorConfig;

pub use categories::{Priority, VisaCategory};
pub use paperwork::PaperworkDomain;
pub use risks::{RiskIndicator, RiskKind, RiskSeverity};

use categories::CategoryAccumulator;
use trees::{DecisionTree, TreeContext};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleEngineOutput {
    pub applicable_visa_categories: Vec<VisaCategory>,
    pub required_paperwork: Vec<PaperworkDomain>,
    pub tax_exposure: TaxExposureLevel,
    pub risk_indicators: Vec<RiskIndicator>,
    pub warnings: Vec<String>,
}

impl RuleEngineOutput {
    pub fn category(&self, visa_type: VisaType) -> Option<&VisaCategory> {
        self.applicable_visa_categories
            .iter()
            .find(|category| category.visa_type == visa_type)
    }
}

#[derive(Clone)]
pub struct RuleEngine {
    directory: Arc<dyn NationalityDirectory>,
    thb_per_foreign_unit: f64,
}

impl RuleEngine {
    pub fn new(directory: Arc<dyn NationalityDirectory>, config: &NavigatorConfig) -> Self {
        Self {
            directory,
            thb_per_foreign_unit: config.thb_per_foreign_unit,
        }
    }

    /// Built-in country lists at the default exchange rate.
    pub fn standard() -> Self {
        Self::new(
            Arc::new(StaticNationalityDirectory::standard()),
            &NavigatorConfig::default(),
        )
    }

    pub fn analyze(&self, profile: &UserProfile) -> Result<RuleEngineOutput, AnalysisError> {
        guarded("Rule engine analysis failed", || self.evaluate(profile))
    }

    fn evaluate(&self, profile: &UserProfile) -> RuleEngineOutput {
        let tax_exposure = classify_exposure(profile);
        let ctx = TreeContext {
            profile,
            directory: self.directory.as_ref(),
            thb_per_foreign_unit: self.thb_per_foreign_unit,
        };

        let mut accumulator = CategoryAccumulator::default();
        for tree in DecisionTree::ordered() {
            tree.evaluate(&ctx, &mut accumulator);
        }

        RuleEngineOutput {
            applicable_visa_categories: accumulator.finish(),
            required_paperwork: paperwork::required_paperwork(profile, tax_exposure),
            tax_exposure,
            risk_indicators: risks::identify_risks(profile, tax_exposure),
            warnings: warnings::generate_warnings(profile, tax_exposure),
        }
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("thb_per_foreign_unit", &self.thb_per_foreign_unit)
            .finish_non_exhaustive()
    }
}
