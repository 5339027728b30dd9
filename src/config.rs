use std::path::PathBuf;

use crate::error::{AppError, Result};

pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Quote currency for all prices, market caps and volumes.
pub const VS_CURRENCY: &str = "usd";

/// Markets page size — the API delivers this many assets, ranked by
/// market cap descending. One page per cycle.
pub const PAGE_SIZE: usize = 50;

/// Spreadsheet file, relative to the working directory.
pub const SHEET_PATH: &str = "crypto_data.csv";

/// Seconds between collection cycles.
pub const FETCH_INTERVAL_SECS: u64 = 300;

/// HTTP client timeout (seconds). A cycle makes exactly one attempt.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Number of leading assets broken out in the report.
pub const TOP_N: usize = 5;

/// Cycle timestamp format — also the source of each report's filename.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub log_level: String,
    /// Quote currency requested from the API (VS_CURRENCY)
    pub vs_currency: String,
    /// Assets per fetched page (PAGE_SIZE)
    pub page_size: usize,
    /// Spreadsheet file path (SHEET_PATH)
    pub sheet_path: PathBuf,
    /// Directory receiving per-cycle report files (REPORT_DIR)
    pub report_dir: PathBuf,
    /// Seconds between cycles (FETCH_INTERVAL_SECS)
    pub fetch_interval_secs: u64,
    /// HTTP timeout in seconds (HTTP_TIMEOUT_SECS)
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_url: std::env::var("API_URL").unwrap_or_else(|_| COINGECKO_API_URL.to_string()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            vs_currency: std::env::var("VS_CURRENCY")
                .unwrap_or_else(|_| VS_CURRENCY.to_string()),
            page_size: std::env::var("PAGE_SIZE")
                .unwrap_or_else(|_| PAGE_SIZE.to_string())
                .parse::<usize>()
                .unwrap_or(PAGE_SIZE),
            sheet_path: std::env::var("SHEET_PATH")
                .unwrap_or_else(|_| SHEET_PATH.to_string())
                .into(),
            report_dir: std::env::var("REPORT_DIR")
                .unwrap_or_else(|_| ".".to_string())
                .into(),
            fetch_interval_secs: std::env::var("FETCH_INTERVAL_SECS")
                .unwrap_or_else(|_| FETCH_INTERVAL_SECS.to_string())
                .parse::<u64>()
                .map_err(|_| {
                    AppError::Config("FETCH_INTERVAL_SECS must be a whole number of seconds".to_string())
                })?,
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| HTTP_TIMEOUT_SECS.to_string())
                .parse::<u64>()
                .unwrap_or(HTTP_TIMEOUT_SECS),
        })
    }
}
