use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ifaktura::client::{
    DEFAULT_BASE_URL, DocumentOutcome, Endpoints, HttpTransport, InvoiceSubmitter,
    SubmissionOutcome, build_configured_request, issue_invoice,
};
use ifaktura::core::LineMode;
use ifaktura::settings::{Credentials, InvoiceConfig, default_config_path};

#[derive(Parser)]
#[command(name = "ifaktura")]
#[command(about = "Issue a sales invoice through the iFirma API and download its PDF")]
struct Cli {
    /// Path to the invoice configuration file [default: ~/.config/ifirma.toml]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Identifier of the configured invoice to issue
    #[arg(long)]
    invoice: String,

    /// Net unit price
    #[arg(long)]
    net_price: Decimal,

    /// Directory the PDF is saved to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Invoice every configured position instead of the first one only
    #[arg(long)]
    all_positions: bool,

    /// API root URL
    #[arg(long, env = "IFIRMA_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Print the signed request instead of sending it
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "ifaktura=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let credentials = Credentials::from_env()?;
    let signer = credentials.signer()?;

    let config_path = cli.config.unwrap_or_else(default_config_path);
    println!("Using config: {}", config_path.display());
    println!("Selected invoice: {}", cli.invoice);
    println!("Price: {}", cli.net_price);

    let config = InvoiceConfig::load(&config_path)?;

    let line_mode = if cli.all_positions {
        LineMode::AllPositions
    } else {
        LineMode::FirstPosition
    };

    let transport = HttpTransport::new(Duration::from_secs(cli.timeout))?;
    let submitter = InvoiceSubmitter::new(transport, signer)
        .endpoints(Endpoints::new(cli.api_url))
        .output_dir(cli.output_dir);

    if cli.dry_run {
        let request = build_configured_request(&config, &cli.invoice, cli.net_price, line_mode)?;
        let prepared = submitter.prepare(&request)?;
        println!("POST {}", prepared.url);
        println!("Authentication: {}", prepared.authorization);
        println!(
            "{}",
            String::from_utf8(prepared.body).context("request body is not UTF-8")?
        );
        return Ok(());
    }

    match issue_invoice(&config, &cli.invoice, cli.net_price, line_mode, &submitter)? {
        SubmissionOutcome::Rejected { code, message } => {
            println!("{message} ({code})");
        }
        SubmissionOutcome::Accepted {
            invoice_id,
            code,
            message,
            document,
        } => {
            println!("{message} ({code})");
            match document {
                DocumentOutcome::Saved(path) => println!("File saved to {}", path.display()),
                DocumentOutcome::Failed(reason) => println!(
                    "Failed to download PDF but invoice {invoice_id} was generated: {reason}"
                ),
            }
        }
    }

    Ok(())
}
