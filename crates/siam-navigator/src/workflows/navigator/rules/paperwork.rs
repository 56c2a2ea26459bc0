use serde::{Deserialize, Serialize};

use super::super::profile::{StayDuration, UserProfile};
use super::super::tax::TaxExposureLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperworkDomain {
    #[serde(rename = "visa-extension")]
    VisaExtension,
    #[serde(rename = "90-day-reporting")]
    NinetyDayReporting,
    #[serde(rename = "tm30-reporting")]
    Tm30Reporting,
    #[serde(rename = "work-permit")]
    WorkPermit,
    #[serde(rename = "driving-license")]
    DrivingLicense,
    #[serde(rename = "vehicle-registration")]
    VehicleRegistration,
    #[serde(rename = "residence-certificate")]
    ResidenceCertificate,
    #[serde(rename = "bank-account")]
    BankAccount,
    #[serde(rename = "tax-filing")]
    TaxFiling,
}

impl PaperworkDomain {
    pub const fn label(self) -> &'static str {
        match self {
            Self::VisaExtension => "Visa extension",
            Self::NinetyDayReporting => "90-day reporting",
            Self::Tm30Reporting => "TM30 address registration",
            Self::WorkPermit => "Work permit",
            Self::DrivingLicense => "Thai driving license",
            Self::VehicleRegistration => "Vehicle registration",
            Self::ResidenceCertificate => "Certificate of residence",
            Self::BankAccount => "Thai bank account",
            Self::TaxFiling => "Personal income tax filing",
        }
    }
}

pub(crate) fn required_paperwork(
    profile: &UserProfile,
    exposure: TaxExposureLevel,
) -> Vec<PaperworkDomain> {
    let mut paperwork = Vec::new();

    if profile.stays(StayDuration::MediumTerm) || profile.stays(StayDuration::LongTerm) {
        paperwork.push(PaperworkDomain::VisaExtension);
    }
    if profile.is_in_thailand() && profile.stays_beyond_short_term() {
        paperwork.push(PaperworkDomain::NinetyDayReporting);
    }
    if profile.is_in_thailand() {
        paperwork.push(PaperworkDomain::Tm30Reporting);
    }
    if profile.will_work_in_thailand {
        paperwork.push(PaperworkDomain::WorkPermit);
    }
    if profile.needs_driving_license {
        paperwork.push(PaperworkDomain::DrivingLicense);
    }
    if profile.needs_vehicle_ownership {
        paperwork.push(PaperworkDomain::VehicleRegistration);
    }
    if profile.needs_driving_license || profile.needs_vehicle_ownership || profile.needs_bank_account
    {
        paperwork.push(PaperworkDomain::ResidenceCertificate);
    }
    if profile.needs_bank_account {
        paperwork.push(PaperworkDomain::BankAccount);
    }
    if exposure >= TaxExposureLevel::Likely {
        paperwork.push(PaperworkDomain::TaxFiling);
    }

    paperwork
}
