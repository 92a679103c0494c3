use clap::Parser;
use loan_pricing::application::service::QuoteService;
use loan_pricing::domain::ports::LoanTypeStoreBox;
use loan_pricing::infrastructure::in_memory::InMemoryLoanTypeStore;
use loan_pricing::interfaces::csv::application_reader::ApplicationReader;
use loan_pricing::interfaces::json::catalog_reader::read_catalog;
use loan_pricing::interfaces::json::quote_writer::QuoteWriter;
use loan_pricing::telemetry;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about = "Prices and validates loan applications", long_about = None)]
struct Cli {
    /// Input loan applications CSV file
    input: PathBuf,

    /// Loan product catalog (JSON array of loan type records)
    #[arg(long)]
    catalog: PathBuf,

    /// Round fee lines to this many decimal places on output
    #[arg(long)]
    scale: Option<u32>,

    /// Log level or filter directive. RUST_LOG takes precedence.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level).into_diagnostic()?;

    let catalog_file = File::open(&cli.catalog)
        .into_diagnostic()
        .wrap_err_with(|| format!("opening catalog {}", cli.catalog.display()))?;
    let catalog = read_catalog(BufReader::new(catalog_file))
        .into_diagnostic()
        .wrap_err("reading loan type catalog")?;

    let store: LoanTypeStoreBox = Box::new(InMemoryLoanTypeStore::new());
    let service = QuoteService::new(store);
    let product_count = catalog.len();
    for config in catalog {
        service.register(config).await.into_diagnostic()?;
    }
    info!(products = product_count, "loaded loan type catalog");

    let input = File::open(&cli.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("opening applications {}", cli.input.display()))?;
    let reader = ApplicationReader::new(BufReader::new(input));

    let stdout = io::stdout();
    let mut writer = QuoteWriter::new(stdout.lock());
    if let Some(scale) = cli.scale {
        writer = writer.with_scale(scale);
    }

    let mut quoted = 0usize;
    let mut skipped = 0usize;
    for application in reader.applications() {
        match application {
            Ok(application) => match service.quote(&application).await {
                Ok(quote) => {
                    writer.write_quote(quote).into_diagnostic()?;
                    quoted += 1;
                }
                Err(e) => {
                    warn!(error = %e, "Error quoting application");
                    skipped += 1;
                }
            },
            Err(e) => {
                warn!(error = %e, "Error reading application");
                skipped += 1;
            }
        }
    }
    writer.flush().into_diagnostic()?;

    info!(quoted, skipped, "finished pricing run");
    Ok(())
}
