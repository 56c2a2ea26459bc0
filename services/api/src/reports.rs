use crate::infra::{parse_date, parse_domain, parse_hotel_level, read_json_file};
use chrono::NaiveDate;
use clap::Args;
use siam_navigator::config::AppConfig;
use siam_navigator::error::AppError;
use siam_navigator::workflows::navigator::service::ProfileReport;
use siam_navigator::workflows::navigator::{LegalDomain, LegalTopic, NavigatorService, UserProfile};
use siam_navigator::workflows::tours::{
    estimate_cost, CostEstimate, CostEstimateRequest, HotelLevel, TourError, TourPackage,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Path to a profile JSON document (camelCase fields)
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Print the full report as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct LegalArgs {
    /// property, business, or employment
    #[arg(long, value_parser = parse_domain)]
    pub(crate) domain: LegalDomain,
    /// Topic key within the domain; lists every topic when omitted
    #[arg(long)]
    pub(crate) topic: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Path to a tour package JSON document
    #[arg(long)]
    pub(crate) package: PathBuf,
    #[arg(long)]
    pub(crate) adults: u32,
    #[arg(long, default_value_t = 0)]
    pub(crate) children: u32,
    /// budget, standard, luxury, or premium
    #[arg(long, value_parser = parse_hotel_level)]
    pub(crate) hotel_level: HotelLevel,
    /// Pickup date (YYYY-MM-DD); decides the season
    #[arg(long, value_parser = parse_date)]
    pub(crate) pickup_date: NaiveDate,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = NavigatorService::from_config(&config.navigator)?;
    let profile: UserProfile = read_json_file(&args.profile)?;

    let report = match service.report(&profile) {
        Ok(report) => report,
        Err(err) => {
            println!("Analysis unavailable: {err}");
            return Ok(());
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in analysis_lines(&profile, &report) {
            println!("{line}");
        }
    }
    Ok(())
}

pub(crate) fn run_legal(args: LegalArgs) -> Result<(), AppError> {
    let service = NavigatorService::standard();

    match args.topic {
        Some(key) => match service.legal_topic(args.domain, &key) {
            Ok(topic) => {
                for line in topic_lines(topic) {
                    println!("{line}");
                }
            }
            Err(err) => println!("{err}"),
        },
        None => {
            println!("Legal topics: {}", args.domain);
            for topic in service.domain_topics(args.domain) {
                println!("- {}: {}", topic.topic, topic.description);
            }
        }
    }
    Ok(())
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let package: TourPackage = read_json_file(&args.package)?;
    let request = CostEstimateRequest {
        number_of_adults: args.adults,
        number_of_children: args.children,
        hotel_level: args.hotel_level,
        pickup_date: args.pickup_date,
    };

    match checked_estimate(&package, &request) {
        Ok(estimate) => {
            for line in estimate_lines(&estimate) {
                println!("{line}");
            }
        }
        Err(err) => println!("Quote rejected: {err}"),
    }
    Ok(())
}

fn checked_estimate(
    package: &TourPackage,
    request: &CostEstimateRequest,
) -> Result<CostEstimate, TourError> {
    package.check_party(request.number_of_adults, request.number_of_children)?;
    Ok(estimate_cost(package, request))
}

pub(crate) fn analysis_lines(profile: &UserProfile, report: &ProfileReport) -> Vec<String> {
    let immigration = &report.immigration;
    let tax = &report.tax;
    let mut lines = vec![format!("Profile analysis for {}", profile.nationality.trim())];

    lines.push("Visa categories:".to_string());
    for category in &immigration.applicable_visa_categories {
        lines.push(format!(
            "  - {} [{}{}]: {}",
            category.visa_type.label(),
            category.priority.label(),
            if category.is_applicable { "" } else { ", not applicable" },
            category.reason
        ));
    }

    if !immigration.required_paperwork.is_empty() {
        let paperwork: Vec<&str> = immigration
            .required_paperwork
            .iter()
            .map(|domain| domain.label())
            .collect();
        lines.push(format!("Paperwork: {}", paperwork.join(", ")));
    }

    lines.push(format!(
        "Tax exposure: {} | residency: {:?} | must file: {}",
        immigration.tax_exposure.label(),
        tax.residency_status,
        if tax.filing_obligation.must_file { "yes" } else { "no" }
    ));

    for risk in &immigration.risk_indicators {
        lines.push(format!("  ! {:?}/{:?}: {}", risk.kind, risk.severity, risk.description));
    }
    for warning in immigration.warnings.iter().chain(&tax.warnings) {
        lines.push(format!("  * {warning}"));
    }
    lines
}

pub(crate) fn topic_lines(topic: &LegalTopic) -> Vec<String> {
    let mut lines = vec![
        format!("{} ({})", topic.topic, topic.domain),
        topic.description.to_string(),
    ];
    let sections: [(&str, &[&str]); 4] = [
        ("Relevant laws", &topic.relevant_laws),
        ("Key points", &topic.key_points),
        ("Restrictions", &topic.restrictions),
        ("Disclaimers", &topic.disclaimers),
    ];
    for (heading, items) in sections {
        if items.is_empty() {
            continue;
        }
        lines.push(format!("{heading}:"));
        lines.extend(items.iter().map(|item| format!("  - {item}")));
    }
    for scenario in &topic.common_scenarios {
        lines.push(format!("Scenario: {}", scenario.scenario));
        lines.push(format!("  {}", scenario.what_the_law_says));
    }
    lines
}

pub(crate) fn estimate_lines(estimate: &CostEstimate) -> Vec<String> {
    let costs = &estimate.cost_breakdown;
    vec![
        format!(
            "{} ({}) | {} days | {} people | {} hotels",
            estimate.package_name,
            estimate.package_code,
            estimate.duration,
            estimate.total_people,
            estimate.hotel_level.label()
        ),
        format!(
            "Season: {} (x{:.2}) from {}",
            estimate.season.label(),
            estimate.season_multiplier,
            estimate.pickup_date
        ),
        format!(
            "Costs: accommodation {:.0} | meals {:.0} | guide {:.0} | transport {:.0} | attractions {:.0}",
            costs.accommodation_cost,
            costs.meal_cost,
            costs.guide_cost,
            costs.transport_cost,
            costs.attractions_cost
        ),
        format!("Total costs: {:.0} THB", costs.total_costs),
        format!(
            "Revenue: {:.0} THB | profit {:.0} THB ({:.1}% margin)",
            estimate.estimated_revenue, estimate.estimated_profit, estimate.profit_margin
        ),
    ]
}
