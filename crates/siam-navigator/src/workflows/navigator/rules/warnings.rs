use super::super::profile::{PurposeOfStay, UserProfile, VisaType};
use super::super::tax::TaxExposureLevel;

const OFFICE_VARIABILITY: &str = "Immigration requirements may vary by office location. Verify \
specific requirements with your local immigration office. Bangkok Immigration Office in Muang \
Thong Thani tends to have stricter interpretation than provincial offices.";

const RULES_CHANGE: &str = "Thai immigration and tax rules are subject to change. This analysis \
is based on rules current as of early 2025-2026. Recent major changes: (1) DTV visa launched in \
2024, (2) Land border visa-exempt limit (2/year) implemented 2024, (3) Tax on foreign \
remittances clarified in 2024-2025. Verify current rules with official sources.";

const TAX_EXPOSURE: &str = "Tax obligations depend on multiple factors including days in \
Thailand and income source. Professional tax advice is recommended. Note: 2024 tax law changes \
affect foreign income remitted to Thailand - previously only same-year remittances were taxable, \
now all remittances may be taxable if you're a tax resident (180+ days).";

const DIGITAL_NOMAD: &str = "DTV (Destination Thailand Visa) launched in 2024. Categories: (1) \
Digital Nomads/Remote Workers, (2) Freelancers, (3) Soft Power (Muay Thai, cooking, medical \
treatment, seminars). Requires 500,000 THB proof. Valid 5 years, 180 days per entry, extendable \
once for 180 days (total 360 days/year). Verify latest requirements and application process at \
Thai embassy/consulate in your country.";

const RETIREMENT: &str = "Retirement visa financial requirements strictly enforced: 800,000 THB \
must be seasoned in Thai bank account for 2-3 months BEFORE application, then maintained at \
400,000+ THB throughout the year. Some offices require funds to return to 800,000 THB 2-3 months \
before annual extension. Verify exact seasoning requirements with your immigration office.";

const FAMILY: &str = "Family/Thai spouse visa extensions often require home visit by immigration \
officers to verify genuine relationship. Prepare: photos of couple together, joint utility bills, \
witness statements from neighbors. Visit is usually scheduled but can be unannounced. Some \
offices more strict than others.";

const EDUCATION: &str = "Student (ED) visa scrutiny increased significantly in 2024-2025, \
especially for language schools. Immigration now conducts attendance checks, unannounced school \
visits, and student interviews. Language schools must report absences. 80% minimum attendance \
required. Fake schools shut down. ED visa holders working illegally face deportation and \
blacklisting. Consider DTV visa for soft power courses (Muay Thai, cooking) as alternative.";

const BORDER_RUNS: &str = "Frequent visa-exempt entries ('border runs') increasingly questioned \
by immigration. After 2-3 consecutive entries (especially by land), immigration may: (1) \
question purpose of stay, (2) require proof of funds/accommodation/onward travel, (3) deny \
entry. Land border crossings limited to 2 per calendar year. If staying long-term, obtain proper \
visa category to avoid denial of entry.";

pub(crate) fn generate_warnings(profile: &UserProfile, exposure: TaxExposureLevel) -> Vec<String> {
    let mut warnings = vec![OFFICE_VARIABILITY, RULES_CHANGE];

    if exposure != TaxExposureLevel::None {
        warnings.push(TAX_EXPOSURE);
    }
    if profile.has_purpose(PurposeOfStay::DigitalNomad) {
        warnings.push(DIGITAL_NOMAD);
    }
    if profile.has_purpose(PurposeOfStay::Retirement) {
        warnings.push(RETIREMENT);
    }
    if profile.has_thai_spouse || profile.has_purpose(PurposeOfStay::Family) {
        warnings.push(FAMILY);
    }
    if profile.has_purpose(PurposeOfStay::Education) {
        warnings.push(EDUCATION);
    }
    if profile.holds(VisaType::TouristVisaExempt) && profile.is_in_thailand() {
        warnings.push(BORDER_RUNS);
    }

    warnings.into_iter().map(str::to_string).collect()
}
