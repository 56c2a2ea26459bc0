//! Thai visa, tax, and legal information engine.
//!
//! Everything below the service facade is synchronous and pure: a profile goes
//! in, freshly built informational records come out. Reason and warning texts
//! are opaque strings; callers should branch on the structured fields.

pub mod directory;
pub mod legal;
pub mod profile;
pub mod router;
pub mod rules;
pub mod service;
pub mod tax;

#[cfg(test)]
mod tests;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

pub use directory::{
    CsvNationalityDirectory, DirectoryError, NationalityDirectory, StaticNationalityDirectory,
};
pub use legal::{
    LegalDomain, LegalError, LegalLibrary, LegalResource, LegalResourceDirectory, LegalScenario,
    LegalTopic, UnknownLegalDomain,
};
pub use profile::{CurrentLocation, PurposeOfStay, StayDuration, UserProfile, VisaType};
pub use router::navigator_router;
pub use rules::{
    PaperworkDomain, Priority, RiskIndicator, RiskKind, RiskSeverity, RuleEngine,
    RuleEngineOutput, VisaCategory,
};
pub use service::NavigatorService;
pub use tax::{
    DoubleTaxationTreaty, IncomeCategory, IncomeTrigger, Taxability, TaxAnalysis, TaxAnalyzer,
    TaxExposureLevel, TaxFilingObligation, TaxResidencyStatus, TaxThreshold,
};

/// Failure of an analysis pass. No partial output accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("{context}: {message}")]
    Internal { context: String, message: String },
}

/// Runs `f`, converting a panic into [`AnalysisError::Internal`].
///
/// The process-wide panic hook is left in place, so the panic is still
/// reported on stderr before it is converted.
pub(crate) fn guarded<T>(context: &str, f: impl FnOnce() -> T) -> Result<T, AnalysisError> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| AnalysisError::Internal {
        context: context.to_string(),
        message: panic_message(payload.as_ref()),
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Unknown error".to_string()
    }
}
