use siam_navigator::workflows::navigator::{LegalDomain, LegalError, LegalLibrary, NavigatorService};

#[test]
fn every_domain_exposes_its_topics_in_a_stable_order() {
    let library = LegalLibrary::new();

    assert_eq!(
        library.topic_keys(LegalDomain::Property),
        vec![
            "condo-ownership",
            "land-ownership",
            "rental-lease",
            "commercial-lease",
            "usufruct-vs-lease",
            "condo-common-fees",
        ]
    );
    assert_eq!(
        library.topic_keys(LegalDomain::Business),
        vec!["company-formation", "foreign-business-restrictions"]
    );
    assert_eq!(
        library.topic_keys(LegalDomain::Employment),
        vec!["employment-contract", "termination-severance"]
    );

    for domain in LegalDomain::ordered() {
        for topic in library.domain_topics(domain) {
            assert_eq!(topic.domain, domain);
            assert!(!topic.disclaimers.is_empty(), "{}", topic.topic);
            assert!(!topic.relevant_laws.is_empty(), "{}", topic.topic);
        }
    }
}

#[test]
fn domains_parse_from_path_segments() {
    assert_eq!("Property".parse::<LegalDomain>(), Ok(LegalDomain::Property));
    assert_eq!(" employment ".parse::<LegalDomain>(), Ok(LegalDomain::Employment));

    let error = "immigration".parse::<LegalDomain>().expect_err("not a legal domain");
    assert!(error.to_string().contains("immigration"));
}

#[test]
fn service_lookup_reports_missing_topics() {
    let service = NavigatorService::standard();

    let land = service
        .legal_topic(LegalDomain::Property, "land-ownership")
        .expect("land topic");
    assert!(land
        .key_points
        .iter()
        .any(|point| point.contains("CANNOT own land")));

    let missing = service
        .legal_topic(LegalDomain::Employment, "condo-ownership")
        .expect_err("topic lives under property");
    assert_eq!(
        missing,
        LegalError::TopicNotFound {
            domain: LegalDomain::Employment,
            key: "condo-ownership".to_string(),
        }
    );
}

#[test]
fn resource_directories_filter_by_exact_category() {
    let service = NavigatorService::standard();

    let categories: Vec<&str> = service
        .legal_resources(None)
        .iter()
        .map(|directory| directory.category)
        .collect();
    assert_eq!(
        categories,
        vec!["government-offices", "embassies", "lawyers", "legal-aid"]
    );

    let lawyers = service.legal_resources(Some("lawyers"));
    assert_eq!(lawyers.len(), 1);
    assert!(!lawyers[0].resources.is_empty());

    assert!(service.legal_resources(Some("Lawyers")).is_empty());
}
