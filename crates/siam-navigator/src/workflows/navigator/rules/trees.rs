use super::super::directory::NationalityDirectory;
use super::super::profile::{PurposeOfStay, StayDuration, UserProfile, VisaType};
use super::categories::{CategoryAccumulator, Priority, VisaCategory};

pub(crate) const DTV_FINANCIAL_PROOF_THB: f64 = 500_000.0;
pub(crate) const RETIREMENT_MONTHLY_THB: f64 = 65_000.0;
pub(crate) const RETIREMENT_BANK_THB: f64 = 800_000.0;
pub(crate) const RETIREMENT_COMBINATION_THB: f64 = 400_000.0;
pub(crate) const RETIREMENT_MIN_AGE: u32 = 50;
pub(crate) const SPOUSE_ANNUAL_THB: f64 = 400_000.0;
pub(crate) const SPOUSE_MONTHLY_THB: f64 = 40_000.0;
/// Compared against the raw foreign-unit income, not converted.
pub(crate) const SMART_MONTHLY_INCOME: f64 = 3_500.0;
/// Compared against the raw foreign-unit income, not converted.
pub(crate) const LTR_MONTHLY_INCOME: f64 = 6_700.0;

/// Inputs shared by every tree for one evaluation.
pub(crate) struct TreeContext<'a> {
    pub profile: &'a UserProfile,
    pub directory: &'a dyn NationalityDirectory,
    pub thb_per_foreign_unit: f64,
}

impl TreeContext<'_> {
    fn monthly_income_thb(&self) -> f64 {
        self.profile.monthly_income_thb(self.thb_per_foreign_unit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecisionTree {
    TouristOrLongStay,
    Employment,
    DigitalNomad,
    Retirement,
    Family,
    Education,
    SmartVisa,
    LongTermOptions,
    HistoricalTransition,
}

impl DecisionTree {
    /// Evaluation order; later trees only win a visa type by ranking strictly higher.
    pub(crate) const fn ordered() -> [Self; 9] {
        [
            Self::TouristOrLongStay,
            Self::Employment,
            Self::DigitalNomad,
            Self::Retirement,
            Self::Family,
            Self::Education,
            Self::SmartVisa,
            Self::LongTermOptions,
            Self::HistoricalTransition,
        ]
    }

    pub(crate) fn evaluate(self, ctx: &TreeContext<'_>, acc: &mut CategoryAccumulator) {
        match self {
            Self::TouristOrLongStay => tourist_or_long_stay(ctx, acc),
            Self::Employment => employment(ctx, acc),
            Self::DigitalNomad => digital_nomad(ctx, acc),
            Self::Retirement => retirement(ctx, acc),
            Self::Family => family(ctx, acc),
            Self::Education => education(ctx, acc),
            Self::SmartVisa => smart_visa(ctx, acc),
            Self::LongTermOptions => long_term_options(ctx, acc),
            // Expired COVID-era extensions cannot be detected from a profile;
            // the reminder lives in the risk pass instead.
            Self::HistoricalTransition => {}
        }
    }
}

fn tourist_or_long_stay(ctx: &TreeContext<'_>, acc: &mut CategoryAccumulator) {
    let profile = ctx.profile;
    if !profile.stays(StayDuration::ShortTerm) {
        return;
    }

    let exempt = ctx.directory.is_visa_exempt(&profile.nationality);
    acc.offer(VisaCategory::new(
        VisaType::TouristVisaExempt,
        exempt,
        if exempt { Priority::Primary } else { Priority::Secondary },
        if exempt {
            "Nationality may qualify for visa exemption (verify duration with Thai embassy)"
        } else {
            "Visa exemption may not apply for this nationality; tourist visa required"
        },
    ));

    if ctx.directory.has_visa_on_arrival(&profile.nationality) {
        acc.offer(VisaCategory::new(
            VisaType::TouristVisaOnArrival,
            true,
            Priority::Secondary,
            "Visa on Arrival available at Thai airports (15 days, 2000 THB)",
        ));
    }

    acc.offer(VisaCategory::new(
        VisaType::TouristVisaTr,
        true,
        if exempt { Priority::Secondary } else { Priority::Primary },
        "Tourist visa (TR) can be obtained for short-term stays (60 days + 30 day extension)",
    ));
}

fn employment(ctx: &TreeContext<'_>, acc: &mut CategoryAccumulator) {
    let profile = ctx.profile;
    if !(profile.will_work_in_thailand || profile.has_purpose(PurposeOfStay::Employment)) {
        return;
    }

    acc.offer(VisaCategory::new(
        VisaType::NonImmigrantB,
        true,
        Priority::Primary,
        "Employment in Thailand requires Non-Immigrant B visa and work permit",
    ));
}

fn digital_nomad(ctx: &TreeContext<'_>, acc: &mut CategoryAccumulator) {
    let profile = ctx.profile;
    if !(profile.has_purpose(PurposeOfStay::DigitalNomad)
        && !profile.will_work_in_thailand
        && profile.has_foreign_income)
    {
        return;
    }

    let monthly_thb = ctx.monthly_income_thb();
    let meets = monthly_thb >= DTV_FINANCIAL_PROOF_THB;

    let reason = if meets {
        "DTV (Destination Thailand Visa) may apply for: (1) remote workers employed abroad, \
         (2) freelancers with foreign clients, (3) participants in Thai soft power activities \
         (Muay Thai, cooking classes, medical treatment). Requires proof of 500,000 THB \
         equivalent in bank or income documentation."
            .to_string()
    } else {
        format!(
            "DTV requires financial proof (~500,000 THB in bank or equivalent foreign income). \
             Current estimated income: ~{} THB/month. Verify specific requirements for your \
             qualifying activity category.",
            monthly_thb.round()
        )
    };

    acc.offer(VisaCategory::new(
        VisaType::DtvVisa,
        meets,
        if meets { Priority::Primary } else { Priority::Possible },
        reason,
    ));

    acc.offer(VisaCategory::new(
        VisaType::TouristVisaTr,
        true,
        if meets { Priority::Secondary } else { Priority::Primary },
        "Tourist visa can be used for short-term stays while working remotely for foreign \
         companies (not Thai companies). Immigration may question frequent entries on tourist visas.",
    ));
}

fn retirement(ctx: &TreeContext<'_>, acc: &mut CategoryAccumulator) {
    let profile = ctx.profile;
    if !profile.has_purpose(PurposeOfStay::Retirement) {
        return;
    }

    let age = profile.age.filter(|age| *age > 0);
    let income = profile.monthly_income.filter(|income| *income != 0.0);
    let (Some(age), Some(_)) = (age, income) else {
        acc.offer(VisaCategory::new(
            VisaType::NonImmigrantO,
            false,
            Priority::Primary,
            "Retirement visa eligibility requires age and income information (age 50+, financial \
             proof required: 800,000 THB in Thai bank OR 65,000 THB/month pension OR combination \
             method: 400,000 THB + monthly income)",
        ));
        return;
    };

    let monthly_thb = ctx.monthly_income_thb();
    let annual_thb = monthly_thb * 12.0;
    let meets_income = monthly_thb >= RETIREMENT_MONTHLY_THB;
    let meets_bank = annual_thb >= RETIREMENT_BANK_THB;
    let meets_combination = annual_thb >= RETIREMENT_COMBINATION_THB;

    let (is_applicable, reason) = if age < RETIREMENT_MIN_AGE {
        (
            false,
            format!(
                "Retirement visa requires age 50+ (currently {age}). Financial requirements: \
                 (1) 800,000 THB in Thai bank account (must season 2-3 months), OR (2) 65,000 \
                 THB/month pension income, OR (3) combination of 400,000 THB in bank + monthly income."
            ),
        )
    } else if meets_income || meets_bank {
        (
            true,
            "May qualify for Non-O retirement visa. Financial options: (1) 800,000 THB in Thai \
             bank (2-3 month seasoning required), (2) 65,000 THB/month pension, (3) combination \
             method (400,000 THB + income). Verify exact requirements at your immigration office."
                .to_string(),
        )
    } else if meets_combination {
        (
            true,
            format!(
                "May qualify using combination method: deposit 400,000 THB in Thai bank + show \
                 monthly income. Total must equal 800,000 THB annually. Current estimated income: \
                 ~{} THB/year. Verify with immigration office.",
                annual_thb.round()
            ),
        )
    } else {
        (
            false,
            format!(
                "Financial requirements not met. Need: (1) 800,000 THB in bank, OR (2) 65,000 \
                 THB/month, OR (3) combination totaling 800,000 THB/year. Current estimated \
                 income: ~{} THB/year.",
                annual_thb.round()
            ),
        )
    };

    acc.offer(VisaCategory::new(
        VisaType::NonImmigrantO,
        is_applicable,
        Priority::Primary,
        reason,
    ));
}

fn family(ctx: &TreeContext<'_>, acc: &mut CategoryAccumulator) {
    let profile = ctx.profile;
    if !(profile.has_purpose(PurposeOfStay::Family) || profile.has_thai_spouse) {
        return;
    }

    let reason = if profile.has_thai_spouse {
        let monthly_thb = ctx.monthly_income_thb();
        let annual_thb = monthly_thb * 12.0;
        if annual_thb >= SPOUSE_ANNUAL_THB || monthly_thb >= SPOUSE_MONTHLY_THB {
            "Non-O visa can be obtained for Thai spouse. Requirements: (1) marriage certificate \
             (legalized by Thai embassy if married abroad), (2) financial proof: 400,000 THB in \
             Thai bank account (2-month seasoning) OR 40,000 THB/month income. Note: 1-year \
             extension requires home visit by immigration."
                .to_string()
        } else {
            format!(
                "Non-O visa for Thai spouse requires financial proof: (1) 400,000 THB in bank OR \
                 (2) 40,000 THB/month income. Current estimated income: ~{} THB/year. Also \
                 requires marriage certificate legalized by Thai embassy.",
                annual_thb.round()
            )
        }
    } else {
        "Non-O visa can be obtained for supporting Thai national family members. If for Thai \
         child: requires child's Thai birth certificate and proof of relationship. Financial \
         requirements may be lower than Thai spouse visa (verify with immigration). If for \
         elderly Thai parent: different requirements apply."
            .to_string()
    };

    acc.offer(VisaCategory::new(
        VisaType::NonImmigrantO,
        true,
        Priority::Primary,
        reason,
    ));
}

fn education(ctx: &TreeContext<'_>, acc: &mut CategoryAccumulator) {
    if !ctx.profile.has_purpose(PurposeOfStay::Education) {
        return;
    }

    acc.offer(VisaCategory::new(
        VisaType::NonImmigrantEd,
        true,
        Priority::Primary,
        "Non-ED visa applies for students enrolled in legitimate Thai educational institutions. \
         Requirements: (1) acceptance letter from school, (2) proof of tuition payment, (3) \
         maintain 80% minimum attendance for visa extensions. Note: Language school ED visas \
         face increased immigration scrutiny as of 2024-2025 (frequent attendance checks, school \
         visits). Universities: easier extensions. Alternative: DTV visa now available for Muay \
         Thai training, Thai cooking courses (500,000 THB financial proof required).",
    ));

    acc.offer(VisaCategory::new(
        VisaType::DtvVisa,
        true,
        Priority::Possible,
        "DTV visa (soft power category) may be an alternative for Muay Thai training, Thai \
         cooking classes, or cultural courses. Requires 500,000 THB financial proof. May be \
         preferable to ED visa for short-term courses to avoid attendance monitoring.",
    ));
}

fn smart_visa(ctx: &TreeContext<'_>, acc: &mut CategoryAccumulator) {
    let profile = ctx.profile;
    if !(profile.will_work_in_thailand && profile.has_purpose(PurposeOfStay::Employment)) {
        return;
    }

    let qualifies = profile.monthly_income.unwrap_or(0.0) >= SMART_MONTHLY_INCOME;
    acc.offer(VisaCategory::new(
        VisaType::SmartVisa,
        qualifies,
        if qualifies { Priority::Possible } else { Priority::Secondary },
        if qualifies {
            "SMART Visa may apply for highly-skilled professionals in targeted industries (verify \
             sector eligibility and qualification requirements)"
        } else {
            "SMART Visa requires high income threshold (~100,000 THB/month) and specific industry \
             qualifications"
        },
    ));
}

fn long_term_options(ctx: &TreeContext<'_>, acc: &mut CategoryAccumulator) {
    let profile = ctx.profile;
    if !profile.stays(StayDuration::LongTerm) {
        return;
    }

    if profile
        .monthly_income
        .is_some_and(|income| income >= LTR_MONTHLY_INCOME)
    {
        acc.offer(VisaCategory::new(
            VisaType::LtrVisa,
            true,
            Priority::Possible,
            "LTR visa may apply for high-income individuals (verify specific category \
             requirements: Wealthy Global Citizen, Work-from-Thailand Professional, etc.)",
        ));
    }

    acc.offer(VisaCategory::new(
        VisaType::EliteVisa,
        true,
        Priority::Possible,
        "Elite visa provides long-term stay option (5-20 years, membership-based, verify cost)",
    ));
}
