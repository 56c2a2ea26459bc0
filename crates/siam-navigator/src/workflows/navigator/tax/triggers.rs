use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::super::profile::UserProfile;
use super::residency::TaxResidencyStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncomeCategory {
    ThaiSourced,
    ForeignRemittedSameYear,
    ForeignRemittedPriorYear,
    ForeignNotRemitted,
    CryptoIncome,
    PensionIncome,
    RemoteWorkIncome,
}

/// Serialized as `true`, `false`, or the string `"conditional"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Taxability {
    Taxable,
    NotTaxable,
    Conditional,
}

impl Taxability {
    /// Taxable or conditional; anything that can lead to a filing.
    pub const fn may_be_taxed(self) -> bool {
        matches!(self, Self::Taxable | Self::Conditional)
    }
}

impl Serialize for Taxability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Taxable => serializer.serialize_bool(true),
            Self::NotTaxable => serializer.serialize_bool(false),
            Self::Conditional => serializer.serialize_str("conditional"),
        }
    }
}

impl<'de> Deserialize<'de> for Taxability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Flag(true) => Ok(Self::Taxable),
            Repr::Flag(false) => Ok(Self::NotTaxable),
            Repr::Text(text) if text == "conditional" => Ok(Self::Conditional),
            Repr::Text(other) => Err(serde::de::Error::custom(format!(
                "expected true, false, or \"conditional\", got \"{other}\""
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeTrigger {
    pub category: IncomeCategory,
    pub is_taxable: Taxability,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<String>,
}

impl IncomeTrigger {
    fn new(category: IncomeCategory, is_taxable: Taxability, explanation: &str) -> Self {
        Self {
            category,
            is_taxable,
            explanation: explanation.to_string(),
            threshold: None,
            conditions: Vec::new(),
        }
    }

    fn with_conditions(mut self, conditions: &[&str]) -> Self {
        self.conditions = conditions.iter().map(|c| c.to_string()).collect();
        self
    }
}

pub(crate) fn identify_triggers(
    profile: &UserProfile,
    residency: TaxResidencyStatus,
) -> Vec<IncomeTrigger> {
    let mut triggers = Vec::new();

    if profile.has_thai_income || profile.will_work_in_thailand {
        let mut trigger = IncomeTrigger::new(
            IncomeCategory::ThaiSourced,
            Taxability::Taxable,
            "Income from Thai sources is taxable in Thailand regardless of tax residency status.",
        );
        trigger.threshold = Some("All Thai-sourced income is subject to personal income tax".to_string());
        triggers.push(trigger);
    }

    if !profile.has_foreign_income {
        return triggers;
    }

    match residency {
        TaxResidencyStatus::Resident => triggers.extend(resident_foreign_triggers()),
        TaxResidencyStatus::NonResident => triggers.push(IncomeTrigger::new(
            IncomeCategory::ForeignNotRemitted,
            Taxability::NotTaxable,
            "Non-residents are generally not taxed on foreign-sourced income in Thailand, even if \
             remitted. However, Thai-sourced income is taxable regardless of residency status.",
        )),
        TaxResidencyStatus::Uncertain => triggers.push(
            IncomeTrigger::new(
                IncomeCategory::ForeignRemittedSameYear,
                Taxability::Conditional,
                "Tax treatment of foreign income depends on tax residency status (180+ days \
                 threshold) and whether income is remitted to Thailand. As of 2024-2025, tax \
                 residents may be taxed on ALL foreign income remitted to Thailand (not just \
                 same-year income).",
            )
            .with_conditions(&[
                "Tax residency status must be determined (count exact days)",
                "Remittance status must be known (bank transfers, cash, credit card funding)",
                "2024 rule changes significantly expand taxation of remitted foreign income",
                "Professional tax advice essential before remitting funds",
            ]),
        ),
    }

    triggers
}

fn resident_foreign_triggers() -> Vec<IncomeTrigger> {
    vec![
        IncomeTrigger::new(
            IncomeCategory::ForeignRemittedSameYear,
            Taxability::Conditional,
            "2024/2025 Rule Change: Foreign income remitted to Thailand is now assessable for tax \
             residents, regardless of when earned. Previous interpretation (only same-year \
             remittances taxable) was clarified by Thai Revenue Department in 2024. Remittance = \
             transferring money into Thailand via bank transfers, bringing cash, or using \
             foreign-sourced income in Thailand.",
        )
        .with_conditions(&[
            "Income must be remitted (brought into) Thailand",
            "Tax resident status (180+ days in Thailand)",
            "Applies to income earned in ANY year (changed from previous 'same year only' rule)",
            "Exemptions may apply for certain income types (consult tax advisor)",
            "Double taxation treaty benefits may reduce or eliminate tax (if applicable)",
        ]),
        IncomeTrigger::new(
            IncomeCategory::ForeignRemittedPriorYear,
            Taxability::Conditional,
            "Prior-year foreign income remitted to Thailand: The 2024 clarification states that \
             ALL remittances are assessable, including savings from prior years. This represents \
             a significant change from previous practice where only same-year income was clearly \
             taxable.",
        )
        .with_conditions(&[
            "Income earned in previous calendar years",
            "Remitted to Thailand in current year",
            "May be assessable for tax (2024 rule change)",
            "Proving income was previously taxed or is exempt requires documentation",
            "Tax advisor consultation essential for determining actual tax liability",
        ]),
        IncomeTrigger::new(
            IncomeCategory::ForeignNotRemitted,
            Taxability::NotTaxable,
            "Foreign income that is not remitted (brought into) Thailand remains outside Thai tax \
             jurisdiction. This includes: (1) money kept in foreign bank accounts, (2) \
             investments held abroad, (3) pension payments left in origin country.",
        )
        .with_conditions(&[
            "Income remains outside Thailand",
            "Not transferred to Thai bank accounts",
            "Not used for transactions in Thailand (credit cards funded by foreign accounts may count as remittance)",
        ]),
        IncomeTrigger::new(
            IncomeCategory::CryptoIncome,
            Taxability::Conditional,
            "Cryptocurrency income taxation (as of 2024-2025): (1) Crypto trading profits may be \
             assessable income if remitted to Thailand. (2) Mining/staking rewards may be \
             assessable. (3) Crypto-to-crypto trades: Tax treatment unclear (Thai Revenue \
             Department hasn't issued definitive guidance). (4) Selling crypto for THB in \
             Thailand: Likely assessable. (5) DeFi yield: Treatment uncertain.",
        )
        .with_conditions(&[
            "Crypto income must be 'realized' (converted to fiat or used)",
            "Remittance rule applies (must bring into Thailand to be taxable)",
            "Documentation of cost basis may be required",
            "No official crypto tax guidelines issued yet (as of 2025)",
            "Treatment may vary by Revenue office interpretation",
        ]),
        IncomeTrigger::new(
            IncomeCategory::PensionIncome,
            Taxability::Conditional,
            "Pension income from foreign sources: (1) Government pensions: May be exempt under \
             double taxation treaties (varies by country). (2) Private pensions: Generally \
             assessable if remitted to Thailand. (3) Social Security (US): May be exempt under \
             US-Thailand tax treaty. (4) UK state pension: May be exempt under UK-Thailand \
             treaty. Specific treatment depends on source country and treaty provisions.",
        )
        .with_conditions(&[
            "Government pension vs private pension distinction important",
            "Double taxation treaty provisions vary by country",
            "Remittance to Thailand required to trigger tax",
            "Documentation from pension provider may be required",
            "Some countries tax pensions at source (may get credit in Thailand)",
        ]),
        IncomeTrigger::new(
            IncomeCategory::RemoteWorkIncome,
            Taxability::Conditional,
            "Remote work income (working for foreign employer while in Thailand): (1) If employer \
             is outside Thailand and you're paid to foreign account: Taxable only if remitted to \
             Thailand (2024 rules apply). (2) If work performed in Thailand but for foreign \
             clients: May be considered Thai-sourced income (gray area). (3) DTV visa holders: \
             Explicitly allowed to work remotely for foreign employers, income taxable if \
             remitted. (4) Freelancers: If services performed in Thailand, may be Thai-sourced \
             (consult tax advisor).",
        )
        .with_conditions(&[
            "Employer location matters (foreign employer = foreign income)",
            "Where services performed may affect sourcing",
            "DTV visa holders: Clear that remote work for foreign employers is foreign income",
            "Freelancing vs employment distinction important",
            "Remittance still required to trigger tax",
        ]),
    ]
}
