use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::{ProjectedRow, COLUMNS};

/// How a write landed on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetUpdate {
    /// File did not exist — written with a fresh header row.
    Created,
    /// File existed — header row kept verbatim, data rows replaced.
    Replaced,
}

/// Persists the projected table as a CSV spreadsheet: row 1 is the header,
/// rows 2+ are data, replaced wholesale each cycle.
///
/// The header is written once at file creation and never re-derived on
/// update — an existing file keeps whatever header it was created with.
/// The replacement is atomic: the full sheet is written to a temp file in
/// the same directory and renamed over the target, so a crash mid-write
/// never leaves a header-only sheet behind.
pub struct SheetWriter {
    path: PathBuf,
}

impl SheetWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, table: &[ProjectedRow]) -> Result<SheetUpdate> {
        let existing_header = self.read_header()?;
        let update = if existing_header.is_some() {
            SheetUpdate::Replaced
        } else {
            SheetUpdate::Created
        };
        let header: Vec<String> = existing_header
            .unwrap_or_else(|| COLUMNS.iter().map(|c| c.to_string()).collect());

        let tmp = self.path.with_extension("csv.tmp");
        {
            let mut wtr = csv::Writer::from_path(&tmp)?;
            wtr.write_record(&header)?;
            for row in table {
                wtr.write_record([
                    row.name.clone(),
                    row.symbol.clone(),
                    row.price_usd.to_string(),
                    row.market_cap.to_string(),
                    row.volume_24h.to_string(),
                    row.change_24h.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        std::fs::rename(&tmp, &self.path)?;

        Ok(update)
    }

    /// Header row of the existing sheet, or None if the file is absent or
    /// has no usable first row.
    fn read_header(&self) -> Result<Option<Vec<String>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let mut rdr = csv::Reader::from_path(&self.path)?;
        let headers = rdr.headers()?;
        if headers.is_empty() {
            return Ok(None);
        }
        Ok(Some(headers.iter().map(|s| s.to_string()).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, price: f64) -> ProjectedRow {
        ProjectedRow {
            name: name.to_string(),
            symbol: name.to_lowercase(),
            price_usd: price,
            market_cap: 1000.0,
            volume_24h: 500.0,
            change_24h: 1.5,
        }
    }

    fn read_lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn creates_sheet_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SheetWriter::new(dir.path().join("crypto_data.csv"));

        let update = writer.write(&[row("Bitcoin", 67000.0), row("Ethereum", 3500.0)]).unwrap();
        assert_eq!(update, SheetUpdate::Created);

        let lines = read_lines(writer.path());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "name,symbol,Price (USD),Market Cap,24h Volume,24h Change (%)");
        assert!(lines[1].starts_with("Bitcoin,bitcoin,67000"));
    }

    #[test]
    fn repeated_write_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SheetWriter::new(dir.path().join("crypto_data.csv"));
        let table = [row("Bitcoin", 67000.0), row("Ethereum", 3500.0)];

        writer.write(&table).unwrap();
        let update = writer.write(&table).unwrap();
        assert_eq!(update, SheetUpdate::Replaced);

        // Header + exactly len(table) data rows — no duplication.
        let lines = read_lines(writer.path());
        assert_eq!(lines.len(), 1 + table.len());
    }

    #[test]
    fn shorter_table_leaves_no_stale_rows() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SheetWriter::new(dir.path().join("crypto_data.csv"));

        let long: Vec<ProjectedRow> = (0..10).map(|i| row(&format!("A{i}"), i as f64)).collect();
        writer.write(&long).unwrap();

        let short = [row("Bitcoin", 67000.0)];
        writer.write(&short).unwrap();

        let lines = read_lines(writer.path());
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("Bitcoin,"));
    }

    #[test]
    fn update_keeps_original_header_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crypto_data.csv");
        std::fs::write(&path, "Asset,Ticker,Px,Cap,Vol,Chg\nOld,old,1,2,3,4\n").unwrap();

        let writer = SheetWriter::new(&path);
        let update = writer.write(&[row("Bitcoin", 67000.0)]).unwrap();
        assert_eq!(update, SheetUpdate::Replaced);

        let lines = read_lines(&path);
        assert_eq!(lines[0], "Asset,Ticker,Px,Cap,Vol,Chg");
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("Bitcoin,"));
    }

    #[test]
    fn empty_table_keeps_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SheetWriter::new(dir.path().join("crypto_data.csv"));

        writer.write(&[row("Bitcoin", 67000.0)]).unwrap();
        writer.write(&[]).unwrap();

        let lines = read_lines(writer.path());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], "name,symbol,Price (USD),Market Cap,24h Volume,24h Change (%)");
    }
}
