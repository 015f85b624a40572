//! CSV encoding of export rows.

use anyhow::{Context, Result};

use crate::catalog::{ExportRow, CSV_HEADER};

/// UTF-8 byte-order mark; spreadsheet apps use it to detect the encoding.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Media type of the encoded blob.
pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// Encodes the header plus `rows`: every field double-quoted with embedded
/// quotes doubled, CRLF between rows, no trailing terminator, BOM prefix.
pub fn encode_csv(rows: &[ExportRow]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .double_quote(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(UTF8_BOM.to_vec());

    writer.write_record(CSV_HEADER).context("write CSV header")?;
    for row in rows {
        writer.write_record(row.fields()).context("write CSV row")?;
    }
    writer.flush().context("flush CSV")?;
    let mut bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("finish CSV: {}", e.error()))?;

    // Rows are joined, not terminated.
    if bytes.ends_with(b"\r\n") {
        bytes.truncate(bytes.len() - 2);
    }
    Ok(bytes)
}
