//! Emitrack terminal dashboard.
//!
//! Reads a JSON portfolio (first argument, or `portfolio.path` from config),
//! falls back to built-in sample data, records this month's budget and
//! prints the dashboard.

mod dashboard;
mod demo;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use emitrack_core::currency::CurrencyFormatter;
use emitrack_core::loan::Portfolio;
use emitrack_core::portfolio::{LoanPortfolio, validate_loan};
use emitrack_core::schedule::{Clock, DueSchedule, SystemClock};
use emitrack_shared::AppConfig;

use crate::dashboard::Renderer;

#[derive(Parser, Debug)]
#[command(name = "emitrack", version)]
#[command(about = "Loan EMI and monthly budget dashboard")]
struct Cli {
    /// Portfolio JSON file. Defaults to `portfolio.path`, then sample data.
    portfolio: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    // Loaded first: the log filter comes from config.
    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let clock = SystemClock::from_config(&config.schedule)?;
    let schedule = DueSchedule::from_config(&config.schedule);
    let formatter = CurrencyFormatter::from_config(&config.display);
    let today = clock.today();

    let path = cli
        .portfolio
        .or_else(|| config.portfolio.path.as_ref().map(PathBuf::from));
    let mut portfolio = match path {
        Some(path) => load_portfolio(&path)?,
        None => {
            info!("No portfolio file given, using sample data");
            demo::demo_portfolio()?
        }
    };

    portfolio.record_current_budget(today);

    let renderer = Renderer {
        formatter: &formatter,
        date_style: config.display.date_style,
        schedule: &schedule,
    };
    let mut out = String::new();
    renderer.render(&mut out, &portfolio, today)?;
    print!("{out}");

    Ok(())
}

/// Reads and validates a portfolio file. Any invalid loan rejects the file.
fn load_portfolio(path: &Path) -> anyhow::Result<LoanPortfolio> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read portfolio file {}", path.display()))?;
    let portfolio: Portfolio = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid portfolio file {}", path.display()))?;

    for loan in &portfolio.loans {
        validate_loan(loan).with_context(|| {
            format!(
                "Invalid loan \"{}\" ({}) in {}",
                loan.name,
                loan.id,
                path.display()
            )
        })?;
    }

    info!(
        path = %path.display(),
        loans = portfolio.loans.len(),
        budgets = portfolio.budgets.len(),
        "Portfolio loaded"
    );
    Ok(LoanPortfolio::from_portfolio(portfolio))
}
