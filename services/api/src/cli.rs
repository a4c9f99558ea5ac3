use crate::quote::{run_batch, run_policy, run_quote, BatchArgs, QuoteArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use prequal::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Pre-Qualification Service",
    about = "Quote loan pre-qualification offers over HTTP or from the command line",
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
    /// Pre-qualify a single applicant and print the offers
    Quote(QuoteArgs),
    /// Pre-qualify every row of a CSV export of form submissions
    Batch(BatchArgs),
    /// Print the active eligibility thresholds and pricing table
    Policy,
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
        Command::Quote(args) => run_quote(args),
        Command::Batch(args) => run_batch(args),
        Command::Policy => run_policy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn quote_arguments_are_kept_as_raw_text() {
        let cli = Cli::try_parse_from([
            "prequal-api",
            "quote",
            "--annual-income",
            "$60,000",
            "--employment-status",
            "full time",
            "--monthly-debts",
            "500",
            "--requested-amount",
            "10000",
            "--credit-score-band",
            "750",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Quote(args)) => {
                assert_eq!(args.annual_income, "$60,000");
                assert!(!args.json);
            }
            other => panic!("expected quote command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["prequal-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
