use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use super::common::*;
use crate::config::NavigatorConfig;
use crate::workflows::navigator::{
    CsvNationalityDirectory, DirectoryError, LegalDomain, NavigatorService, VisaType,
};

fn temp_csv(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("siam-navigator-{}-{name}.csv", std::process::id()));
    let mut file = std::fs::File::create(&path).expect("create csv");
    file.write_all(contents.as_bytes()).expect("write csv");
    path
}

#[test]
fn csv_directory_replaces_the_builtin_lists() {
    let path = temp_csv(
        "replace",
        "country,list\nAtlantis,visa-exempt\nAtlantis,tax-treaty\n",
    );
    let config = NavigatorConfig {
        nationality_csv: Some(path.clone()),
        ..NavigatorConfig::default()
    };

    let service = NavigatorService::from_config(&config).expect("directory loads");
    std::fs::remove_file(&path).ok();

    let atlantis = service
        .analyze(&short_term_visitor("atlantis"))
        .expect("analysis succeeds");
    assert!(atlantis
        .category(VisaType::TouristVisaExempt)
        .is_some_and(|category| category.is_applicable));
    assert!(service.treaty("Atlantis").has_treaty);

    let usa = service
        .analyze(&short_term_visitor("usa"))
        .expect("analysis succeeds");
    assert!(usa
        .category(VisaType::TouristVisaExempt)
        .is_some_and(|category| !category.is_applicable));
}

#[test]
fn unknown_list_names_fail_startup() {
    let path = temp_csv("unknown", "country,list\nfrance,visa-free\n");
    let config = NavigatorConfig {
        nationality_csv: Some(path.clone()),
        ..NavigatorConfig::default()
    };

    let result = NavigatorService::from_config(&config);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(DirectoryError::UnknownList { .. })));
}

#[test]
fn exchange_rate_flows_into_income_checks() {
    let directory = CsvNationalityDirectory::from_reader("country,list\n".as_bytes())
        .expect("empty directory");
    let config = NavigatorConfig {
        thb_per_foreign_unit: 40.0,
        nationality_csv: None,
    };
    let service = NavigatorService::with_directory(Arc::new(directory), &config);

    // 1500 * 40 * 12 = 720,000: still the combination path, with the new figure.
    let output = service.analyze(&retiree(55, 1500.0)).expect("analysis succeeds");
    let retirement = output
        .category(VisaType::NonImmigrantO)
        .expect("retirement category");
    assert!(retirement.reason.contains("720000 THB/year"));
}

#[test]
fn report_combines_both_passes() {
    let report = service()
        .report(&remote_worker(20_000.0))
        .expect("report succeeds");
    assert_eq!(report.immigration.tax_exposure, report.tax.exposure_level);
}

#[test]
fn legal_lookups_go_through_the_shared_library() {
    let service = service();
    assert_eq!(service.domain_topics(LegalDomain::Property).len(), 6);
    assert!(service
        .legal_topic(LegalDomain::Property, "does-not-exist")
        .is_err());
    assert_eq!(service.legal_resources(Some("embassies")).len(), 1);
}
