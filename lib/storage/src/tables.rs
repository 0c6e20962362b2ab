//! CSV table I/O with per-file delimiter and text encoding
//!
//! The two matching modes consume files with different conventions: the
//! fertilizer tables are plain UTF-8 CSV, while the pesticide tables arrive
//! Latin-1 encoded (the product database semicolon-separated) and the
//! pesticide output is written as BOM'd UTF-8 for spreadsheet tools.

use agromatch_core::Table;
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Text encoding of a tabular file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// ISO-8859-1: every byte maps to the Unicode code point of equal value
    Latin1,
    /// UTF-8 with a leading byte-order mark, what spreadsheet tools expect
    Utf8Bom,
}

/// Delimiter and encoding of one tabular file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvFormat {
    pub delimiter: u8,
    pub encoding: TextEncoding,
}

impl CsvFormat {
    #[must_use]
    pub const fn new(delimiter: u8, encoding: TextEncoding) -> Self {
        Self {
            delimiter,
            encoding,
        }
    }
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self::new(b',', TextEncoding::Utf8)
    }
}

/// File conventions per matching mode, as the upstream datasets ship them
pub mod formats {
    use super::{CsvFormat, TextEncoding};

    /// Fertilizer inputs and output: plain UTF-8, comma-separated
    pub const COMPOSITION: CsvFormat = CsvFormat::new(b',', TextEncoding::Utf8);
    /// User substance list: Latin-1, comma-separated
    pub const SUBSTANCES: CsvFormat = CsvFormat::new(b',', TextEncoding::Latin1);
    /// Product database: Latin-1, semicolon-separated
    pub const PRODUCT_DB: CsvFormat = CsvFormat::new(b';', TextEncoding::Latin1);
    /// Pesticide output: BOM'd UTF-8, semicolon-separated
    pub const MATCHED_PRODUCTS: CsvFormat = CsvFormat::new(b';', TextEncoding::Utf8Bom);
}

fn decode(bytes: Vec<u8>, encoding: TextEncoding) -> Result<String> {
    match encoding {
        TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        TextEncoding::Utf8 | TextEncoding::Utf8Bom => {
            let bytes = match bytes.strip_prefix(&UTF8_BOM) {
                Some(rest) => rest.to_vec(),
                None => bytes,
            };
            String::from_utf8(bytes).context("file is not valid UTF-8")
        }
    }
}

fn encode(text: &str, encoding: TextEncoding) -> Vec<u8> {
    match encoding {
        TextEncoding::Utf8 => text.as_bytes().to_vec(),
        TextEncoding::Utf8Bom => {
            let mut out = UTF8_BOM.to_vec();
            out.extend_from_slice(text.as_bytes());
            out
        }
        TextEncoding::Latin1 => text
            .chars()
            .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
            .collect(),
    }
}

/// Read a CSV file into an in-memory table
///
/// The first row is taken as headers; cells are kept verbatim (the
/// matchers trim where their contract says so).
pub fn read_table(path: &Path, format: CsvFormat) -> Result<Table> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let text = decode(bytes, format.encoding)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(format.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .context("failed to read CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut table = Table::new(headers);
    for record in reader.records() {
        let record = record.context("failed to read CSV row")?;
        table.push_row(record.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(table)
}

/// Write a table as CSV with the given delimiter and encoding
pub fn write_table(path: &Path, table: &Table, format: CsvFormat) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(format.delimiter)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());
    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    finish(path, writer, format)
}

/// Write serializable records as CSV, deriving headers from the record type
pub fn write_records<S: Serialize>(path: &Path, records: &[S], format: CsvFormat) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(format.delimiter)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    finish(path, writer, format)
}

fn finish(path: &Path, writer: csv::Writer<Vec<u8>>, format: CsvFormat) -> Result<()> {
    let buffer = writer
        .into_inner()
        .map_err(|e| anyhow!("failed to flush CSV writer: {e}"))?;
    let text = String::from_utf8(buffer).context("CSV output is not valid UTF-8")?;
    fs::write(path, encode(&text, format.encoding))
        .with_context(|| format!("failed to write {}", path.display()))
}
