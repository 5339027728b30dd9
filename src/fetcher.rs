use tracing::info;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::types::{MarketRecord, MarketSnapshot};

#[derive(Debug, Default)]
pub struct FetchStats {
    pub api_total: usize,
    pub rejected_incomplete: usize,
    /// Sample of asset names rejected for missing/null fields.
    pub incomplete_samples: Vec<String>,
}

/// Fetch one page of markets, ranked by market cap descending.
/// A single attempt per cycle — no retry, no backoff. Any transport error,
/// non-2xx status, or malformed body surfaces as `Err` and the caller skips
/// the rest of the cycle.
pub async fn fetch_snapshot(
    client: &reqwest::Client,
    cfg: &Config,
) -> Result<(MarketSnapshot, FetchStats)> {
    let url = markets_url(cfg);

    let resp: serde_json::Value = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let items = resp
        .as_array()
        .ok_or_else(|| AppError::Api("markets response was not an array".to_string()))?;

    let mut stats = FetchStats {
        api_total: items.len(),
        ..FetchStats::default()
    };

    let mut records = Vec::with_capacity(items.len());
    for item in items {
        match parse_market_record(item) {
            Some(record) => records.push(record),
            None => {
                stats.rejected_incomplete += 1;
                if stats.incomplete_samples.len() < 10 {
                    let name = item
                        .get("name")
                        .and_then(|n| n.as_str())
                        .unwrap_or("?")
                        .to_string();
                    stats.incomplete_samples.push(name);
                }
            }
        }
    }

    if stats.rejected_incomplete > 0 {
        info!(
            rejected = stats.rejected_incomplete,
            "[FETCH] {} of {} records rejected for missing fields: {:?}",
            stats.rejected_incomplete,
            stats.api_total,
            stats.incomplete_samples,
        );
    }

    Ok((MarketSnapshot { records }, stats))
}

/// Markets-listing URL with the fixed query shape: quote currency, market-cap
/// descending order, one page, sparkline disabled.
pub fn markets_url(cfg: &Config) -> String {
    format!(
        "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page=1&sparkline=false",
        cfg.api_url, cfg.vs_currency, cfg.page_size
    )
}

/// Parse one market JSON object. Returns None if any of the six required
/// fields is absent or null — a null price or change would skew every
/// aggregate downstream, so incomplete records are dropped and counted.
pub fn parse_market_record(v: &serde_json::Value) -> Option<MarketRecord> {
    let name = v.get("name")?.as_str()?.to_string();
    let symbol = v.get("symbol")?.as_str()?.to_string();
    let price_usd = num_field(v, "current_price")?;
    let market_cap = num_field(v, "market_cap")?;
    let volume_24h = num_field(v, "total_volume")?;
    let change_24h = num_field(v, "price_change_percentage_24h")?;

    Some(MarketRecord {
        name,
        symbol,
        price_usd,
        market_cap,
        volume_24h,
        change_24h,
    })
}

/// Numeric field that may arrive as a JSON number or a numeric string.
fn num_field(v: &serde_json::Value, key: &str) -> Option<f64> {
    v.get(key)
        .and_then(|x| x.as_f64().or_else(|| x.as_str().and_then(|s| s.parse().ok())))
}
