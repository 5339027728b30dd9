use crate::config::TOP_N;
use crate::types::{Analysis, MarketSnapshot, ProjectedRow};

/// Project a snapshot onto the six-column table and compute the summary.
///
/// The table keeps the snapshot's delivery order (market cap descending), so
/// `top_5` is a plain head-take with no re-sorting. The scalar aggregates
/// cover every projected row — the average is over the whole page, not the
/// top 5. A snapshot shorter than 5 yields a shorter `top_5`; an empty one
/// yields zeroed aggregates.
pub fn analyze(snapshot: &MarketSnapshot) -> (Vec<ProjectedRow>, Analysis) {
    let table: Vec<ProjectedRow> = snapshot.records.iter().map(ProjectedRow::from).collect();

    let asset_count = table.len();
    let average_price = if asset_count == 0 {
        0.0
    } else {
        table.iter().map(|r| r.price_usd).sum::<f64>() / asset_count as f64
    };
    let highest_change = table
        .iter()
        .map(|r| r.change_24h)
        .fold(None, |acc: Option<f64>, c| Some(acc.map_or(c, |a| a.max(c))))
        .unwrap_or(0.0);
    let lowest_change = table
        .iter()
        .map(|r| r.change_24h)
        .fold(None, |acc: Option<f64>, c| Some(acc.map_or(c, |a| a.min(c))))
        .unwrap_or(0.0);

    let top_5 = table.iter().take(TOP_N).cloned().collect();

    let analysis = Analysis {
        top_5,
        average_price,
        highest_change,
        lowest_change,
        asset_count,
    };

    (table, analysis)
}
