use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crypto_reporter::collector::Collector;
use crypto_reporter::config::Config;
use crypto_reporter::error::Result;

#[tokio::main]
async fn main() {
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .init();

    if let Err(e) = run(cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(cfg: Config) -> Result<()> {
    info!(
        "Collector starting: endpoint={} currency={} page_size={} interval={}s sheet={}",
        cfg.api_url,
        cfg.vs_currency,
        cfg.page_size,
        cfg.fetch_interval_secs,
        cfg.sheet_path.display(),
    );

    let collector = Collector::new(cfg)?;
    collector.run().await;

    Ok(())
}
