use std::collections::BTreeSet;

use super::common::*;
use crate::workflows::navigator::{
    guarded, AnalysisError, PaperworkDomain, Priority, PurposeOfStay, RuleEngine, StayDuration,
    TaxExposureLevel, UserProfile, VisaType,
};

#[test]
fn short_term_visitor_from_exempt_country_gets_exemption_first() {
    let output = RuleEngine::standard()
        .analyze(&short_term_visitor("usa"))
        .expect("analysis succeeds");

    let exempt = output
        .category(VisaType::TouristVisaExempt)
        .expect("exemption category");
    assert!(exempt.is_applicable);
    assert_eq!(exempt.priority, Priority::Primary);

    let tourist = output.category(VisaType::TouristVisaTr).expect("TR category");
    assert_eq!(tourist.priority, Priority::Secondary);
    assert!(output.category(VisaType::TouristVisaOnArrival).is_none());
}

#[test]
fn short_term_trio_tracks_country_lists() {
    let engine = RuleEngine::standard();

    for (nationality, exempt, on_arrival) in [
        ("USA", true, false),
        ("  Japan ", true, false),
        ("india", false, true),
        ("nigeria", false, false),
    ] {
        let output = engine
            .analyze(&short_term_visitor(nationality))
            .expect("analysis succeeds");

        let exemption = output
            .category(VisaType::TouristVisaExempt)
            .expect("exemption always emitted");
        assert_eq!(exemption.is_applicable, exempt, "{nationality}");

        assert_eq!(
            output.category(VisaType::TouristVisaOnArrival).is_some(),
            on_arrival,
            "{nationality}"
        );

        let tourist = output.category(VisaType::TouristVisaTr).expect("TR always emitted");
        let expected = if exempt { Priority::Secondary } else { Priority::Primary };
        assert_eq!(tourist.priority, expected, "{nationality}");
    }
}

#[test]
fn retiree_below_bank_threshold_qualifies_through_combination() {
    let output = RuleEngine::standard()
        .analyze(&retiree(55, 1500.0))
        .expect("analysis succeeds");

    let retirement = output
        .category(VisaType::NonImmigrantO)
        .expect("retirement category");
    assert!(retirement.is_applicable);
    assert!(retirement.reason.contains("combination method"));
    assert!(retirement.reason.contains("648000 THB/year"));
}

#[test]
fn retirement_without_age_explains_requirements() {
    let mut profile = retiree(0, 2000.0);
    profile.age = None;

    let output = RuleEngine::standard().analyze(&profile).expect("analysis succeeds");
    let retirement = output
        .category(VisaType::NonImmigrantO)
        .expect("retirement category");
    assert!(!retirement.is_applicable);
    assert!(retirement.reason.contains("requires age and income information"));
}

#[test]
fn young_retiree_fails_on_age_before_income() {
    let output = RuleEngine::standard()
        .analyze(&retiree(45, 5000.0))
        .expect("analysis succeeds");
    let retirement = output
        .category(VisaType::NonImmigrantO)
        .expect("retirement category");
    assert!(!retirement.is_applicable);
    assert!(retirement.reason.contains("(currently 45)"));
}

#[test]
fn thai_income_makes_exposure_certain_even_for_short_stays() {
    let mut profile = short_term_visitor("usa");
    profile.has_thai_income = true;
    profile.has_foreign_income = true;

    let output = RuleEngine::standard().analyze(&profile).expect("analysis succeeds");
    assert_eq!(output.tax_exposure, TaxExposureLevel::Certain);
    assert!(output.required_paperwork.contains(&PaperworkDomain::TaxFiling));
}

#[test]
fn later_tree_wins_a_type_only_with_strictly_higher_rank() {
    let engine = RuleEngine::standard();

    let mut underfunded = remote_worker(1000.0);
    underfunded.intended_stay_duration = Some(StayDuration::ShortTerm);
    let output = engine.analyze(&underfunded).expect("analysis succeeds");
    let tourist = output.category(VisaType::TouristVisaTr).expect("TR category");
    assert_eq!(tourist.priority, Priority::Primary);
    assert!(tourist.reason.contains("working remotely"));

    let mut funded = remote_worker(20_000.0);
    funded.intended_stay_duration = Some(StayDuration::ShortTerm);
    let output = engine.analyze(&funded).expect("analysis succeeds");
    let tourist = output.category(VisaType::TouristVisaTr).expect("TR category");
    assert_eq!(tourist.priority, Priority::Secondary);
    assert!(tourist.reason.starts_with("Tourist visa (TR) can be obtained"));
}

#[test]
fn funded_nomad_keeps_primary_dtv_over_education_alternative() {
    let mut profile = remote_worker(20_000.0);
    profile.purpose_of_stay.insert(PurposeOfStay::Education);

    let output = RuleEngine::standard().analyze(&profile).expect("analysis succeeds");
    let dtv = output.category(VisaType::DtvVisa).expect("DTV category");
    assert_eq!(dtv.priority, Priority::Primary);
    assert!(dtv.reason.starts_with("DTV (Destination Thailand Visa) may apply"));
}

#[test]
fn underfunded_nomad_sees_monthly_estimate() {
    let output = RuleEngine::standard()
        .analyze(&remote_worker(1000.0))
        .expect("analysis succeeds");
    let dtv = output.category(VisaType::DtvVisa).expect("DTV category");
    assert!(!dtv.is_applicable);
    assert_eq!(dtv.priority, Priority::Possible);
    assert!(dtv.reason.contains("~36000 THB/month"));
}

#[test]
fn categories_are_unique_and_sorted_by_priority() {
    let mut profile = UserProfile::new("india");
    profile.intended_stay_duration = Some(StayDuration::LongTerm);
    profile.will_work_in_thailand = true;
    profile.has_thai_spouse = true;
    profile.monthly_income = Some(8000.0);
    profile.age = Some(60);
    profile.purpose_of_stay = [
        PurposeOfStay::Employment,
        PurposeOfStay::Retirement,
        PurposeOfStay::Family,
        PurposeOfStay::Education,
    ]
    .into_iter()
    .collect();

    let output = RuleEngine::standard().analyze(&profile).expect("analysis succeeds");
    let categories = &output.applicable_visa_categories;

    let types: BTreeSet<VisaType> = categories.iter().map(|c| c.visa_type).collect();
    assert_eq!(types.len(), categories.len());
    assert!(categories
        .windows(2)
        .all(|pair| pair[0].priority.rank() >= pair[1].priority.rank()));

    // Retirement is evaluated before family, so its reason survives the tie.
    let non_o = output
        .category(VisaType::NonImmigrantO)
        .expect("Non-O category");
    assert!(non_o.reason.starts_with("May qualify for Non-O retirement visa"));

    for expected in [
        VisaType::NonImmigrantB,
        VisaType::NonImmigrantEd,
        VisaType::SmartVisa,
        VisaType::LtrVisa,
        VisaType::EliteVisa,
    ] {
        assert!(types.contains(&expected), "{expected:?}");
    }
}

#[test]
fn analysis_never_touches_the_profile() {
    let profile = retiree(67, 3000.0);
    let before = profile.clone();
    let engine = RuleEngine::standard();

    let first = engine.analyze(&profile).expect("analysis succeeds");
    let second = engine.analyze(&profile).expect("analysis succeeds");

    assert_eq!(profile, before);
    assert_eq!(first, second);
}

#[test]
fn warnings_always_start_with_general_notices() {
    let output = RuleEngine::standard()
        .analyze(&UserProfile::new("france"))
        .expect("analysis succeeds");
    assert!(output.warnings.len() >= 2);
    assert!(output.warnings[0].contains("may vary by office"));
    assert!(output.warnings[1].contains("subject to change"));
}

#[test]
fn guarded_turns_panics_into_internal_errors() {
    let result: Result<u8, AnalysisError> = guarded("Rule engine analysis failed", || {
        panic!("tree exploded")
    });

    let error = result.expect_err("panic is captured");
    assert_eq!(error.to_string(), "Rule engine analysis failed: tree exploded");
}
