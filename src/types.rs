use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MarketRecord
// ---------------------------------------------------------------------------

/// One asset's snapshot as delivered by the markets endpoint. Immutable once
/// fetched; records missing any of these fields are rejected at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRecord {
    pub name: String,
    pub symbol: String,
    pub price_usd: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub change_24h: f64,
}

// ---------------------------------------------------------------------------
// MarketSnapshot
// ---------------------------------------------------------------------------

/// The records retrieved in a single fetch, in the API's delivery order
/// (market cap descending). Created fresh each cycle, dropped at cycle end.
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshot {
    pub records: Vec<MarketRecord>,
}

impl MarketSnapshot {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Column labels of the projected table, in projection order. `name` and
/// `symbol` keep their field names; the numeric columns carry presentation
/// labels. This is the spreadsheet header row at file creation.
pub const COLUMNS: [&str; 6] = [
    "name",
    "symbol",
    "Price (USD)",
    "Market Cap",
    "24h Volume",
    "24h Change (%)",
];

/// One row of the projected table — the six fields carried from a raw
/// record into the spreadsheet and the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRow {
    pub name: String,
    pub symbol: String,
    pub price_usd: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub change_24h: f64,
}

impl From<&MarketRecord> for ProjectedRow {
    fn from(r: &MarketRecord) -> Self {
        Self {
            name: r.name.clone(),
            symbol: r.symbol.clone(),
            price_usd: r.price_usd,
            market_cap: r.market_cap,
            volume_24h: r.volume_24h,
            change_24h: r.change_24h,
        }
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Read-only summary over one snapshot. `top_5` is the head of the table in
/// delivery order; the scalar aggregates cover every row, not just the head.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub top_5: Vec<ProjectedRow>,
    pub average_price: f64,
    pub highest_change: f64,
    pub lowest_change: f64,
    /// Rows backing the aggregates — the full table length.
    pub asset_count: usize,
}
