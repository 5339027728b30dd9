use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use tokio::time::interval;
use tracing::{error, info};

use crate::analyzer::analyze;
use crate::config::{Config, TIMESTAMP_FORMAT};
use crate::error::Result;
use crate::fetcher::fetch_snapshot;
use crate::report::render_report;
use crate::sheet::{SheetUpdate, SheetWriter};

/// What one cycle produced.
#[derive(Debug)]
pub enum CycleOutcome {
    /// Fetch failed — no sheet write, no report, loop proceeds to the next tick.
    Skipped,
    Completed {
        rows: usize,
        sheet_ok: bool,
        report: Option<PathBuf>,
    },
}

/// Drives the collection pipeline: fetch → analyze → sheet write + report
/// render, once per interval tick, forever. Each step's failure is logged
/// and contained — a bad fetch skips the cycle, a bad write or render never
/// stops the loop or each other.
pub struct Collector {
    cfg: Config,
    client: reqwest::Client,
    sheet: SheetWriter,
}

impl Collector {
    pub fn new(cfg: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.http_timeout_secs))
            .build()?;
        let sheet = SheetWriter::new(cfg.sheet_path.clone());
        Ok(Self { cfg, client, sheet })
    }

    pub async fn run(self) {
        let mut ticker = interval(Duration::from_secs(self.cfg.fetch_interval_secs));

        loop {
            // First tick fires immediately — the first cycle runs at startup,
            // before any sleep.
            ticker.tick().await;
            self.run_cycle().await;
        }
    }

    /// One full pass. Tests drive this directly without waiting on the ticker.
    pub async fn run_cycle(&self) -> CycleOutcome {
        let (snapshot, stats) = match fetch_snapshot(&self.client, &self.cfg).await {
            Ok(fetched) => fetched,
            Err(e) => {
                error!("Fetch failed, skipping cycle: {e}");
                return CycleOutcome::Skipped;
            }
        };
        info!(
            records = snapshot.len(),
            api_total = stats.api_total,
            "Fetched {} of {} records",
            snapshot.len(),
            stats.api_total,
        );

        let (table, analysis) = analyze(&snapshot);

        let sheet_ok = match self.sheet.write(&table) {
            Ok(SheetUpdate::Created) => {
                info!(rows = table.len(), "Sheet created: {}", self.sheet.path().display());
                true
            }
            Ok(SheetUpdate::Replaced) => {
                info!(rows = table.len(), "Sheet updated: {}", self.sheet.path().display());
                true
            }
            Err(e) => {
                error!("Sheet update failed: {e}");
                false
            }
        };

        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let report = match render_report(&analysis, &timestamp, &self.cfg.report_dir) {
            Ok(path) => {
                info!("Report generated: {}", path.display());
                Some(path)
            }
            Err(e) => {
                error!("Report generation failed: {e}");
                None
            }
        };

        CycleOutcome::Completed {
            rows: table.len(),
            sheet_ok,
            report,
        }
    }
}
