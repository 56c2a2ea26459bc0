//! Hand-authored legal information organized by domain and topic key.

mod business;
mod domain;
mod employment;
mod property;
mod resources;

use std::sync::OnceLock;

pub use domain::{
    LegalDomain, LegalResource, LegalResourceDirectory, LegalScenario, LegalTopic,
    UnknownLegalDomain,
};
use domain::TopicEntry;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LegalError {
    #[error("No legal information found for {domain}/{key}")]
    TopicNotFound { domain: LegalDomain, key: String },
}

struct LegalTables {
    property: Vec<TopicEntry>,
    business: Vec<TopicEntry>,
    employment: Vec<TopicEntry>,
    resources: Vec<LegalResourceDirectory>,
}

impl LegalTables {
    fn build() -> Self {
        Self {
            property: property::property_topics(),
            business: business::business_topics(),
            employment: employment::employment_topics(),
            resources: resources::resource_directories(),
        }
    }

    fn domain(&self, domain: LegalDomain) -> &[TopicEntry] {
        match domain {
            LegalDomain::Property => &self.property,
            LegalDomain::Business => &self.business,
            LegalDomain::Employment => &self.employment,
        }
    }
}

fn tables() -> &'static LegalTables {
    static TABLES: OnceLock<LegalTables> = OnceLock::new();
    TABLES.get_or_init(LegalTables::build)
}

/// Read-only view over the legal tables. Cheap to copy; every instance
/// shares the same process-wide data.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalLibrary;

impl LegalLibrary {
    pub fn new() -> Self {
        Self
    }

    pub fn topic(&self, domain: LegalDomain, key: &str) -> Result<&'static LegalTopic, LegalError> {
        tables()
            .domain(domain)
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, topic)| topic)
            .ok_or_else(|| LegalError::TopicNotFound {
                domain,
                key: key.to_string(),
            })
    }

    pub fn domain_topics(&self, domain: LegalDomain) -> Vec<&'static LegalTopic> {
        tables().domain(domain).iter().map(|(_, topic)| topic).collect()
    }

    pub fn topic_keys(&self, domain: LegalDomain) -> Vec<&'static str> {
        tables().domain(domain).iter().map(|(key, _)| *key).collect()
    }

    /// All directories, or only the one whose category matches exactly.
    pub fn resources(&self, category: Option<&str>) -> Vec<&'static LegalResourceDirectory> {
        tables()
            .resources
            .iter()
            .filter(|directory| category.map_or(true, |wanted| directory.category == wanted))
            .collect()
    }
}
