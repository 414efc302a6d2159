// src/main.rs
use anyhow::Result;
use tracing::info;

use backend_probe::{config, probe::ProbeRunner};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("backend_probe=info".parse()?),
        )
        .init();

    let config = config::resolve_config().await?;

    println!("{}", "=".repeat(60));
    println!("  BACKEND PROBE");
    println!("{}", "=".repeat(60));
    println!("  Target:  {}", config.base_url);
    println!("  Started: {}", chrono::Local::now().to_rfc3339());
    println!();

    info!("Probing backend at {}", config.base_url);

    let runner = ProbeRunner::new(config)?;
    let report = runner.run_all().await;

    report.print_summary();

    std::process::exit(report.exit_code());
}
