// src/export/mod.rs
use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use std::path::Path;

use crate::process::transform::LocalityRecord;

/// Fixed output paths; both files are fully overwritten on every run.
pub static CSV_PATH: &str = "localites_suisse_cantons.csv";
pub static XLSX_PATH: &str = "localites_suisse_cantons.xlsx";

/// Write the records as comma-delimited UTF-8 with a `locality,canton` header.
pub fn write_csv(records: &[LocalityRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    // explicit header; the serde-derived one is skipped once a record exists
    wtr.write_record(["locality", "canton"])?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Write the same content as a single-sheet XLSX workbook.
pub fn write_xlsx(records: &[LocalityRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "locality")?;
    worksheet.write_string(0, 1, "canton")?;
    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, &record.locality)?;
        worksheet.write_string(row, 1, &record.canton)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed to save {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample() -> Vec<LocalityRecord> {
        vec![
            LocalityRecord {
                locality: "Aigle".into(),
                canton: "Vaud".into(),
            },
            LocalityRecord {
                locality: "Zürich".into(),
                canton: "Zurich".into(),
            },
        ]
    }

    #[test]
    fn csv_output_has_header_and_one_row_per_record() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CSV_PATH);

        write_csv(&sample(), &path)?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content, "locality,canton\nAigle,Vaud\nZürich,Zurich\n");
        Ok(())
    }

    #[test]
    fn csv_output_is_overwritten_not_appended() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CSV_PATH);

        write_csv(&sample(), &path)?;
        write_csv(&sample()[..1].to_vec(), &path)?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content, "locality,canton\nAigle,Vaud\n");
        Ok(())
    }

    #[test]
    fn xlsx_output_is_written() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(XLSX_PATH);

        write_xlsx(&sample(), &path)?;

        let meta = fs::metadata(&path)?;
        assert!(meta.len() > 0, "empty xlsx file");
        Ok(())
    }

    #[test]
    fn empty_record_set_still_produces_both_files() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let csv_path = dir.path().join(CSV_PATH);
        let xlsx_path = dir.path().join(XLSX_PATH);

        write_csv(&[], &csv_path)?;
        write_xlsx(&[], &xlsx_path)?;

        let content = fs::read_to_string(&csv_path)?;
        assert_eq!(content, "locality,canton\n");
        assert!(xlsx_path.exists());
        Ok(())
    }
}
