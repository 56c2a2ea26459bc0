use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::directory::{
    CsvNationalityDirectory, DirectoryError, NationalityDirectory, StaticNationalityDirectory,
};
use super::legal::{LegalDomain, LegalError, LegalLibrary, LegalResourceDirectory, LegalTopic};
use super::profile::UserProfile;
use super::rules::{RuleEngine, RuleEngineOutput};
use super::tax::{DoubleTaxationTreaty, TaxAnalysis, TaxAnalyzer};
use super::AnalysisError;
use crate::config::NavigatorConfig;

/// Both analysis passes over one profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReport {
    pub immigration: RuleEngineOutput,
    pub tax: TaxAnalysis,
}

/// Facade composing the rule engine, tax analyzer, and legal library over a
/// single nationality directory.
pub struct NavigatorService {
    rules: Arc<RuleEngine>,
    tax: Arc<TaxAnalyzer>,
    legal: LegalLibrary,
}

impl NavigatorService {
    /// Loads the CSV directory named in `config`, or falls back to the built-in lists.
    pub fn from_config(config: &NavigatorConfig) -> Result<Self, DirectoryError> {
        let directory: Arc<dyn NationalityDirectory> = match &config.nationality_csv {
            Some(path) => {
                let directory = CsvNationalityDirectory::from_path(path)?;
                info!(path = %path.display(), entries = directory.len(), "loaded nationality directory");
                if directory.is_empty() {
                    warn!(path = %path.display(), "nationality directory is empty");
                }
                Arc::new(directory)
            }
            None => Arc::new(StaticNationalityDirectory::standard()),
        };
        Ok(Self::with_directory(directory, config))
    }

    pub fn with_directory(directory: Arc<dyn NationalityDirectory>, config: &NavigatorConfig) -> Self {
        Self {
            rules: Arc::new(RuleEngine::new(directory.clone(), config)),
            tax: Arc::new(TaxAnalyzer::new(directory)),
            legal: LegalLibrary::new(),
        }
    }

    pub fn standard() -> Self {
        Self::with_directory(
            Arc::new(StaticNationalityDirectory::standard()),
            &NavigatorConfig::default(),
        )
    }

    pub fn analyze(&self, profile: &UserProfile) -> Result<RuleEngineOutput, AnalysisError> {
        let output = self.rules.analyze(profile);
        match &output {
            Ok(output) => debug!(
                nationality = %profile.nationality,
                categories = output.applicable_visa_categories.len(),
                exposure = output.tax_exposure.label(),
                "rule engine analysis complete"
            ),
            Err(error) => warn!(nationality = %profile.nationality, %error, "rule engine analysis failed"),
        }
        output
    }

    pub fn analyze_tax(&self, profile: &UserProfile) -> Result<TaxAnalysis, AnalysisError> {
        let analysis = self.tax.analyze(profile);
        if let Err(error) = &analysis {
            warn!(nationality = %profile.nationality, %error, "tax analysis failed");
        }
        analysis
    }

    pub fn report(&self, profile: &UserProfile) -> Result<ProfileReport, AnalysisError> {
        Ok(ProfileReport {
            immigration: self.analyze(profile)?,
            tax: self.analyze_tax(profile)?,
        })
    }

    pub fn treaty(&self, nationality: &str) -> DoubleTaxationTreaty {
        self.tax.has_tax_treaty(nationality)
    }

    pub fn legal_topic(&self, domain: LegalDomain, key: &str) -> Result<&'static LegalTopic, LegalError> {
        let topic = self.legal.topic(domain, key);
        if let Err(error) = &topic {
            debug!(%error, "legal topic lookup missed");
        }
        topic
    }

    pub fn domain_topics(&self, domain: LegalDomain) -> Vec<&'static LegalTopic> {
        self.legal.domain_topics(domain)
    }

    pub fn legal_resources(&self, category: Option<&str>) -> Vec<&'static LegalResourceDirectory> {
        self.legal.resources(category)
    }
}

impl std::fmt::Debug for NavigatorService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigatorService")
            .field("rules", &self.rules)
            .field("tax", &self.tax)
            .finish()
    }
}
