use crate::reports::{run_analyze, run_legal, run_quote, AnalyzeArgs, LegalArgs, QuoteArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use siam_navigator::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Siam Navigator",
    about = "Thai visa, tax, and legal information plus tour quoting from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run the rule engine and tax analysis over a profile JSON file
    Analyze(AnalyzeArgs),
    /// Print legal topics for a domain, or a single topic
    Legal(LegalArgs),
    /// Price a tour package for a party
    Quote(QuoteArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args),
        Command::Legal(args) => run_legal(args),
        Command::Quote(args) => run_quote(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siam_navigator::workflows::navigator::LegalDomain;
    use siam_navigator::workflows::tours::HotelLevel;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["siam-navigator-api"]).expect("parses");
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["siam-navigator-api", "serve", "--port", "8080"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => assert_eq!(args.port, Some(8080)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn legal_domain_is_validated_at_parse_time() {
        let cli = Cli::try_parse_from([
            "siam-navigator-api",
            "legal",
            "--domain",
            "business",
            "--topic",
            "company-formation",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Legal(args)) => {
                assert_eq!(args.domain, LegalDomain::Business);
                assert_eq!(args.topic.as_deref(), Some("company-formation"));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Cli::try_parse_from(["siam-navigator-api", "legal", "--domain", "visa"]).is_err());
    }

    #[test]
    fn quote_arguments_parse_dates_and_hotel_levels() {
        let cli = Cli::try_parse_from([
            "siam-navigator-api",
            "quote",
            "--package",
            "package.json",
            "--adults",
            "2",
            "--hotel-level",
            "Luxury",
            "--pickup-date",
            "2025-12-01",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Quote(args)) => {
                assert_eq!(args.adults, 2);
                assert_eq!(args.children, 0);
                assert_eq!(args.hotel_level, HotelLevel::Luxury);
                assert_eq!(args.pickup_date.to_string(), "2025-12-01");
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Cli::try_parse_from([
            "siam-navigator-api",
            "quote",
            "--package",
            "package.json",
            "--adults",
            "2",
            "--hotel-level",
            "hostel",
            "--pickup-date",
            "2025-12-01",
        ])
        .is_err());
    }
}
