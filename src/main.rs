//! Wiring & demo run. Builds a catalog (sample or roster), prints the headline
//! aggregates, then the full report in the configured format.
//! No business logic here.

use dotenv::dotenv;
use enrollment_ledger::adapters::report::formatter_for;
use enrollment_ledger::adapters::roster::JsonRoster;
use enrollment_ledger::domain::Catalog;
use enrollment_ledger::shared::config::AppConfig;
use enrollment_ledger::usecases::{ImportService, ReportService, seed_sample};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        AppConfig::default()
    });

    let mut catalog = Catalog::new();
    match cfg.roster_path.as_deref() {
        Some(path) => {
            let source = JsonRoster::from_path(path);
            ImportService::new(&source)
                .import_into(&mut catalog)
                .map_err(|e| anyhow::anyhow!("{}", e))?;
        }
        None => {
            let ids = seed_sample(&mut catalog).map_err(|e| anyhow::anyhow!("{}", e))?;
            println!("{}", catalog.course_count(ids.alice)?);
            println!("{}", catalog.aggregate_average_grade(ids.alice)?);
            println!("{}", catalog.student_count(ids.math)?);
            println!("{:?}", catalog.aggregate_enrollments_per_day());
        }
    }

    let format = cfg.report_format_or_default();
    info!(%format, "rendering report");
    let report = ReportService::new(formatter_for(format))
        .render(&catalog)
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    println!("{}", report);

    Ok(())
}
