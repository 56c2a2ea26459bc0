use super::super::profile::{PurposeOfStay, UserProfile, VisaType};
use super::residency::TaxResidencyStatus;

const REMITTANCE_RULE_CHANGE: &str = "CRITICAL 2024/2025 Rule Change: Thai tax rules regarding \
foreign income remittance changed significantly. Thai Revenue Department clarified that ALL \
foreign income remitted to Thailand is assessable (not just same-year income). This affects: (1) \
Savings from prior years, (2) Investment returns, (3) Pension income, (4) Remote work income. \
Previous practice of only taxing same-year remittances NO LONGER APPLIES. Professional tax advice \
is essential.";

const REVENUE_OFFICE_VARIABILITY: &str = "Provincial vs Bangkok Tax Offices: Implementation of \
new remittance rules varies by office. Bangkok Revenue Departments (especially those handling \
expats) are more familiar with foreign income taxation and DTA claims. Provincial offices may: \
(1) Have less experience with foreign income cases, (2) Require more documentation, (3) Take \
longer to process DTA claims.";

const UNCERTAIN_RESIDENCY: &str = "Tax residency status cannot be determined from provided \
information. Count exact days in Thailand to determine if 180-day threshold is crossed. Day \
counting: (1) Count BOTH arrival and departure days, (2) Count ALL days (not just visa days), (3) \
Calendar year basis (Jan 1 - Dec 31), (4) Keep arrival/departure records (immigration stamps, \
flight tickets).";

const UNAUTHORIZED_WORK: &str = "Working in Thailand requires proper work authorization (Non-B \
visa + work permit). Tax obligations may exist even for unauthorized work - Revenue Department \
can assess tax on illegal income. Additionally: (1) Working illegally can lead to deportation and \
blacklisting, (2) Employers hiring without work permit face fines, (3) Tax filing doesn't \
legalize work status (separate issues).";

const REMOTE_WORK: &str = "Digital Nomads / Remote Workers: Tax treatment depends on: (1) Whether \
employer is in Thailand (Thai-sourced) or abroad (foreign-sourced), (2) Whether you remit income \
to Thailand, (3) Whether you're a tax resident (180+ days). DTV visa holders: Explicitly allowed \
to work remotely for foreign employers, income is foreign-sourced but taxable if remitted. Tourist \
visa holders: Working (even remotely) may violate visa terms, but if for foreign employer and not \
remitted, unlikely to trigger Thai tax. Crypto earnings: Increasingly scrutinized - keep detailed \
records.";

const PENSION: &str = "Pension Income (Age 50+): If receiving pension from home country: (1) \
Government pensions (civil service, military) may be exempt under DTA, (2) Private pensions \
generally taxable if remitted to Thailand, (3) Social Security/state pensions: Treatment varies \
by country (US Social Security may be exempt under US-Thailand DTA, UK state pension may be \
exempt under UK-Thailand DTA). A tax residency certificate from the home country is needed to \
claim DTA benefits. Provincial Revenue offices may be unfamiliar with pension taxation.";

const CRYPTO: &str = "Cryptocurrency Taxation (2025): Thai Revenue Department has not issued \
comprehensive crypto tax guidelines yet. Current interpretation: (1) Crypto gains may be \
assessable if converted to fiat and remitted to Thailand, (2) Crypto-to-crypto trades: Tax \
treatment unclear, (3) Staking/mining rewards: Likely assessable if remitted, (4) Holding crypto: \
Not taxable until realized. Records typically requested: (1) Transaction history, (2) Cost basis \
documentation, (3) Exchange statements, (4) Wallet addresses. Tax treatment may change as \
Thailand develops crypto regulations.";

const PENSION_AGE: u32 = 50;

pub(crate) fn tax_warnings(
    profile: &UserProfile,
    residency: TaxResidencyStatus,
    has_treaty: bool,
) -> Vec<String> {
    let mut warnings = Vec::new();
    let nationality = profile.nationality.as_str();

    if residency == TaxResidencyStatus::Resident && profile.has_foreign_income {
        warnings.push(REMITTANCE_RULE_CHANGE.to_string());
        warnings.push(REVENUE_OFFICE_VARIABILITY.to_string());
    }

    if has_treaty {
        warnings.push(format!(
            "Thailand has a double taxation treaty (DTA) with {nationality}. You may be eligible \
             for tax credits or exemptions. To claim DTA benefits: (1) Obtain tax residency \
             certificate from {nationality} (usually from tax authority), (2) Keep proof of \
             foreign tax paid (if applicable), (3) Submit both with PND 90 filing, (4) May need \
             to fill out DTA claim form (varies by treaty). Process can take several months. \
             Revenue Department may request additional documentation."
        ));
    } else {
        warnings.push(format!(
            "No double taxation treaty found with {nationality}. You may face taxation in both \
             countries on the same income. This means: (1) {nationality} may tax your worldwide \
             income, (2) Thailand may tax income remitted to Thailand, (3) No automatic credit \
             for foreign tax paid, (4) May need to pay tax twice unless home country provides \
             unilateral relief. Check with {nationality} tax authority about foreign tax credits."
        ));
    }

    if residency == TaxResidencyStatus::Uncertain {
        warnings.push(UNCERTAIN_RESIDENCY.to_string());
    }

    if profile.will_work_in_thailand && !profile.holds(VisaType::NonImmigrantB) {
        warnings.push(UNAUTHORIZED_WORK.to_string());
    }

    let digital_nomad = profile.has_purpose(PurposeOfStay::DigitalNomad);
    let foreign_income_only = profile.has_foreign_income
        && !profile.has_thai_income
        && !profile.will_work_in_thailand;
    if digital_nomad || foreign_income_only {
        warnings.push(REMOTE_WORK.to_string());
    }

    if profile.age.is_some_and(|age| age >= PENSION_AGE) && profile.has_foreign_income {
        warnings.push(PENSION.to_string());
    }

    if profile.has_foreign_income && digital_nomad {
        warnings.push(CRYPTO.to_string());
    }

    warnings
}

const DISCLAIMERS: [&str; 21] = [
    "This analysis provides information about Thai tax rules and thresholds only.",
    "This is NOT tax advice, tax planning, or a calculation of tax owed.",
    "This is NOT a recommendation on whether to remit income to Thailand or how to structure finances.",
    "Thai tax law is complex and subject to interpretation by the Thai Revenue Department.",
    "Tax rules change frequently. This analysis is based on rules current as of 2025-2026, including 2024/2025 remittance rule changes.",
    "IMPORTANT: 2024/2025 rule changes regarding foreign income remittance are recent and implementation varies by Revenue office. Interpretation may evolve.",
    "Individual circumstances vary significantly and affect tax treatment.",
    "Professional tax advice from a qualified Thai tax advisor is strongly recommended, especially for:",
    "  • Foreign income remittance questions",
    "  • Double taxation treaty (DTA) claims",
    "  • Cryptocurrency taxation",
    "  • Pension income treatment",
    "  • Remote work / digital nomad scenarios",
    "  • Tax ID (TIN) application and filing",
    "Double taxation treaties, deductions, and exemptions may significantly affect actual tax liability.",
    "This analysis does not cover: corporate tax, VAT, withholding tax, specific industries tax, property tax, or other tax types.",
    "Cryptocurrency tax treatment is evolving - no comprehensive guidelines issued yet by Thai Revenue Department as of 2025.",
    "Tax residency counting (180-day rule) is based on calendar year (Jan 1 - Dec 31), not visa validity period.",
    "Remittance includes: bank transfers, cash brought in, credit card funding from foreign accounts, crypto converted to THB in Thailand.",
    "Provincial Revenue offices may have different interpretation or expertise levels compared to Bangkok offices.",
    "Tax obligations exist separately from immigration status - even illegal work may be assessable for tax.",
];

pub(crate) fn disclaimers() -> Vec<String> {
    DISCLAIMERS.iter().map(|line| line.to_string()).collect()
}
