use clap::{Parser, Subcommand};
use nl_address_locator::apis::locatieserver::LocatieserverClient;
use nl_address_locator::app::locate_use_case::{LocateOutcome, LocateUseCase};
use nl_address_locator::app::ports::HttpClientPort;
use nl_address_locator::config::Config;
use nl_address_locator::infra::console::TerminalConsole;
use nl_address_locator::infra::http_client::ReqwestHttp;
use nl_address_locator::logging;
use nl_address_locator::storage::AddressBook;
use nl_address_locator::types::OutputEncoding;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "nl-address-locator")]
#[command(about = "Look up full Dutch address details, including RD coordinates, and append them to a CSV file")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// CSV file to append to
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Text encoding of the CSV file
    #[arg(long, value_enum, global = true)]
    encoding: Option<OutputEncoding>,

    /// Use the Locatieserver v3 endpoint and Latin-1 output
    #[arg(long, global = true)]
    legacy: bool,

    /// Locatieserver search root
    #[arg(long)]
    base_url: Option<String>,

    /// Maximum number of suggestions to request
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    rows: Option<u32>,

    /// Config file (defaults to nl_address_locator.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Search for an address and append it to the CSV file (default)
    Locate,
    /// Print the addresses stored in the CSV file
    List,
}

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?.apply_env(|k| std::env::var(k).ok())?;
    if cli.legacy {
        config = config.legacy();
    }
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
    if let Some(encoding) = cli.encoding {
        config.encoding = encoding;
    }
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    // Initialize logging
    logging::init_logging(config.log_dir.as_deref());
    info!(
        base_url = %config.base_url,
        output = %config.output.display(),
        encoding = ?config.encoding,
        "starting"
    );

    let book = AddressBook::new(&config.output, config.encoding);

    match cli.command.unwrap_or(Commands::Locate) {
        Commands::Locate => {
            let http: Arc<dyn HttpClientPort> = Arc::new(ReqwestHttp::new(config.timeout())?);
            let client = LocatieserverClient::new(http, &config.base_url).with_rows(config.rows);
            let use_case = LocateUseCase::new(client, book);

            let mut console = TerminalConsole::new();
            match use_case.run(&mut console).await? {
                LocateOutcome::NoResults => debug!("no suggestions"),
                LocateOutcome::Cancelled => debug!("cancelled by user"),
                LocateOutcome::Saved { path, record } => {
                    debug!(path = %path.display(), street = %record.street, "run complete")
                }
            }
        }
        Commands::List => {
            let records = book.read_all()?;
            if records.is_empty() {
                println!("No addresses stored in {}", book.path().display());
            }
            for (i, record) in records.iter().enumerate() {
                println!("{}: {}", i + 1, record);
            }
        }
    }
    Ok(())
}
