use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use salary_cli::app::{self, OutputFormat, ReportRequest};
use salary_cli::utils::{parse_amount, parse_percentage};
use salary_core::TaxInputs;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Indian salary tax breakdown under the new tax regime.
///
/// Calculates basic pay, PF, gratuity, income tax, cess, professional tax
/// and in-hand salary from a gross annual salary, and prints them as a table.
#[derive(Debug, Parser)]
#[command(name = "salary-tax", version, about)]
struct Cli {
    /// Gross annual salary (e.g. `1200000`, `12,00,000` or `₹12,00,000`).
    #[arg(long, value_parser = parse_amount)]
    gross: Decimal,

    /// Basic pay as a percentage of gross salary, from 0 to 100.
    /// Values below 50 are raised to 50.
    #[arg(long, default_value = "50", value_parser = parse_percentage)]
    basic_pct: Decimal,

    /// Count the employer's PF contribution in the deductions.
    #[arg(long)]
    employer_pf: bool,

    /// Deduct a gratuity accrual from net salary.
    #[arg(long)]
    gratuity: bool,

    /// Print the result as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Also show income tax split by slab.
    #[arg(long)]
    slabs: bool,
}

impl Cli {
    fn into_request(self) -> ReportRequest {
        ReportRequest {
            inputs: TaxInputs::new(self.gross, self.basic_pct)
                .with_employer_pf(self.employer_pf)
                .with_gratuity(self.gratuity),
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Table
            },
            show_slabs: self.slabs,
        }
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `warn` so the table is the only normal output.
/// * Writes to stderr and strips timestamps and target names.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let report = app::build_report(&cli.into_request())?;
    println!("{report}");

    Ok(())
}
