use billing_payment_info::application::action::{self, Services};
use billing_payment_info::domain::ports::BillingInfoProviderBox;
use billing_payment_info::domain::user::{Role, User};
use billing_payment_info::infrastructure::in_memory::InMemoryBillingInfoProvider;
use billing_payment_info::infrastructure::json_file::JsonFileBillingInfoProvider;
use billing_payment_info::interfaces::csv::country_reader::CountryReader;
use billing_payment_info::interfaces::json::outcome_writer::OutcomeWriter;
use billing_payment_info::interfaces::json::submission_reader::read_submission;
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Actor {
    Anonymous,
    Visitor,
    Collaborator,
    Administrator,
}

impl Actor {
    fn user(self) -> Option<User> {
        let role = match self {
            Actor::Anonymous => return None,
            Actor::Visitor => Role::Visitor,
            Actor::Collaborator => Role::Collaborator,
            Actor::Administrator => Role::Administrator,
        };
        Some(User::new(1, "cli", "cli@localhost", role))
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Payment info submission (JSON request body)
    submission: PathBuf,

    /// Stored payment info snapshot (JSON). Without it, no payment info is configured.
    #[arg(long)]
    current: Option<PathBuf>,

    /// Country reference list (CSV with a `code,name` header). Defaults to ISO 3166-1.
    #[arg(long)]
    countries: Option<PathBuf>,

    /// Role of the user submitting the change
    #[arg(long, value_enum, default_value_t = Actor::Administrator)]
    role: Actor,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let billing: BillingInfoProviderBox = match cli.current {
        Some(path) => Box::new(JsonFileBillingInfoProvider::new(path)),
        None => Box::new(InMemoryBillingInfoProvider::new()),
    };
    let mut services = Services::new(billing);

    if let Some(path) = cli.countries {
        let file = File::open(path).into_diagnostic()?;
        let countries = CountryReader::new(file).read_all().into_diagnostic()?;
        info!(count = countries.len(), "loaded country reference list");
        services = services.with_countries(Box::new(countries));
    }

    let file = File::open(cli.submission).into_diagnostic()?;
    let input = read_submission(file).into_diagnostic()?;

    let user = cli.role.user();
    let outcome = action::run(&input, user.as_ref(), &services)
        .await
        .into_diagnostic()?;
    info!(ok = outcome.is_ok(), "payment info validated");

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());
    writer.write_outcome(&outcome).into_diagnostic()?;

    Ok(())
}
