use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegalDomain {
    Property,
    Business,
    Employment,
}

impl LegalDomain {
    pub const fn ordered() -> [Self; 3] {
        [Self::Property, Self::Business, Self::Employment]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Business => "business",
            Self::Employment => "employment",
        }
    }
}

impl fmt::Display for LegalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LegalDomain {
    type Err = UnknownLegalDomain;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|domain| domain.label() == normalized)
            .ok_or_else(|| UnknownLegalDomain(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown legal domain '{0}' (expected property, business, or employment)")]
pub struct UnknownLegalDomain(pub String);

/// One situation within a topic and what Thai law says about it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalScenario {
    pub scenario: &'static str,
    pub what_the_law_says: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_steps: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_documents: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub typical_documents: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub government_office: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prohibitions: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalTopic {
    pub domain: LegalDomain,
    pub topic: &'static str,
    pub description: &'static str,
    pub relevant_laws: Vec<&'static str>,
    pub key_points: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_documents: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub restrictions: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub penalties: Vec<&'static str>,
    pub disclaimers: Vec<&'static str>,
    pub official_resources: Vec<&'static str>,
    pub common_scenarios: Vec<LegalScenario>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalResource {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub specialty: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<&'static str>,
    pub notes: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalResourceDirectory {
    pub category: &'static str,
    pub resources: Vec<LegalResource>,
}

/// A keyed topic as authored; keys are unique within a domain.
pub(crate) type TopicEntry = (&'static str, LegalTopic);
