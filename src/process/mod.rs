// src/process/mod.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::io::{Cursor, Read};
use thiserror::Error;
use zip::ZipArchive;

pub mod resolve;
pub mod transform;

/// Failures specific to the locality pipeline, as opposed to plain I/O errors.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no .csv entry found in ZIP archive")]
    NoCsvEntry,
    #[error("no column matching any of {candidates:?}; available columns: {available:?}")]
    ColumnNotFound {
        candidates: Vec<String>,
        available: Vec<String>,
    },
}

/// One parsed CSV entry, all values kept as plain text.
#[derive(Debug)]
pub struct RawTable {
    /// Column names from the header row, exactly as the file spells them.
    pub headers: Vec<String>,
    /// Each data row, one String per field.
    pub rows: Vec<Vec<String>>,
}

/// Walk the archive in listing order and return the name and bytes of the
/// first entry whose name ends in `.csv` (case-insensitive).
#[tracing::instrument(level = "info", skip(zip_bytes))]
pub fn extract_first_csv(zip_bytes: &[u8]) -> Result<(String, Vec<u8>)> {
    let mut archive =
        ZipArchive::new(Cursor::new(zip_bytes)).context("failed to read ZIP archive")?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .with_context(|| format!("failed to access ZIP entry #{i}"))?;
        let name = entry.name().to_string();

        if entry.is_file() && name.to_lowercase().ends_with(".csv") {
            let mut buf = Vec::with_capacity(entry.size() as usize);
            entry
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to read {name} into memory"))?;
            return Ok((name, buf));
        }
    }

    Err(PipelineError::NoCsvEntry.into())
}

/// Parse a semicolon-delimited CSV buffer into headers and string rows.
/// The header row is required; it defines the available columns.
pub fn parse_table(data: &[u8]) -> Result<RawTable> {
    // swisstopo publishes UTF-8; decode lossily so a stray byte cannot abort the run
    let text = String::from_utf8_lossy(data).into_owned();

    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(text.into_bytes()));

    let headers: Vec<String> = rdr
        .headers()
        .context("failed to read CSV header row")?
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at record {idx}"))?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::{Cursor, Write};
    use zip::write::FileOptions;
    use zip::CompressionMethod;

    fn zip_with_entries(entries: &[(&str, &str)]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
            let options: FileOptions<'_, ()> =
                FileOptions::default().compression_method(CompressionMethod::Stored);
            for (name, content) in entries {
                zip.start_file(*name, options.clone())?;
                zip.write_all(content.as_bytes())?;
            }
            zip.finish()?;
        }
        Ok(buf)
    }

    #[test]
    fn extracts_first_csv_entry_in_archive_order() -> Result<()> {
        let buf = zip_with_entries(&[
            ("readme.txt", "not a table"),
            ("Ortschaften.CSV", "ORTSCHAFT;KANTON\nZug;ZG\n"),
            ("second.csv", "a;b\n1;2\n"),
        ])?;

        let (name, bytes) = extract_first_csv(&buf)?;
        assert_eq!(name, "Ortschaften.CSV");
        assert!(bytes.starts_with(b"ORTSCHAFT"));
        Ok(())
    }

    #[test]
    fn archive_without_csv_is_an_error() -> Result<()> {
        let buf = zip_with_entries(&[("readme.txt", "nothing here")])?;

        let err = extract_first_csv(&buf).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::NoCsvEntry)
        ));
        Ok(())
    }

    #[test]
    fn parses_semicolon_delimited_table() -> Result<()> {
        let data = "ORTSCHAFT;KANTON;PLZ\nZürich;ZH;8001\nGenève;GE;1200\n";

        let table = parse_table(data.as_bytes())?;
        assert_eq!(table.headers, vec!["ORTSCHAFT", "KANTON", "PLZ"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["Zürich", "ZH", "8001"]);
        assert_eq!(table.rows[1], vec!["Genève", "GE", "1200"]);
        Ok(())
    }

    #[test]
    fn ragged_rows_are_kept_as_is() -> Result<()> {
        let data = "ORTSCHAFT;KANTON\nZug;ZG\nBern\n";

        let table = parse_table(data.as_bytes())?;
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["Bern"]);
        Ok(())
    }
}
