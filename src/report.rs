use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::Analysis;

/// Report filename for a cycle timestamp. Colons become hyphens and spaces
/// become underscores so `%Y-%m-%d %H:%M:%S` maps to a filesystem-safe name,
/// unique at second granularity.
pub fn report_filename(timestamp: &str) -> String {
    format!(
        "crypto_report_{}.txt",
        timestamp.replace(':', "-").replace(' ', "_")
    )
}

/// Render the cycle report into `dir` and return the written path.
/// One file per cycle; never mutated after creation.
pub fn render_report(analysis: &Analysis, timestamp: &str, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(report_filename(timestamp));
    std::fs::write(&path, format_report(analysis, timestamp))?;
    Ok(path)
}

/// Fixed-layout report body: title, top-5 breakdown, three summary lines.
/// All numerics to 2 decimal places.
pub fn format_report(analysis: &Analysis, timestamp: &str) -> String {
    let mut out = String::with_capacity(1024);

    out.push_str(&format!("Crypto Data Report - {timestamp}\n\n"));
    out.push_str("Top 5 Cryptocurrencies by Market Cap:\n");

    for row in &analysis.top_5 {
        out.push_str(&format!(
            "{} ({}): ${:.2}, Market Cap: ${:.2}, 24h Change: {:.2}%\n",
            row.name, row.symbol, row.price_usd, row.market_cap, row.change_24h
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "Average Price ({} assets): ${:.2}\n",
        analysis.asset_count, analysis.average_price
    ));
    out.push_str(&format!(
        "Highest 24h Change: {:.2}%\n",
        analysis.highest_change
    ));
    out.push_str(&format!(
        "Lowest 24h Change: {:.2}%\n",
        analysis.lowest_change
    ));

    out
}
