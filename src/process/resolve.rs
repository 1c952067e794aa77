// src/process/resolve.rs
use crate::process::PipelineError;

/// Header names we accept for the locality column, in priority order.
/// ORTSCHAFT is what swisstopo actually ships; the rest cover older exports.
pub static LOCALITY_CANDIDATES: &[&str] = &["ORTSCHAFT", "LocalityName", "LOCALITY", "place"];

/// Header names we accept for the canton-code column, in priority order.
pub static CANTON_CANDIDATES: &[&str] = &["KANTON", "CANTON", "KT"];

/// Resolve a logical field against the header row, case-insensitively.
///
/// First pass walks `candidates` in priority order and returns the first
/// available column that matches exactly. Only if that finds nothing, the
/// second pass walks the available columns in their original order and
/// returns the first one that contains any candidate as a substring. Note
/// the loops nest the other way round in the two passes; downstream data
/// was produced under that behavior, so it stays.
pub fn resolve_column<'a>(
    candidates: &[&str],
    available: &'a [String],
) -> Result<(usize, &'a str), PipelineError> {
    for cand in candidates {
        let cand_lower = cand.to_lowercase();
        if let Some((idx, col)) = available
            .iter()
            .enumerate()
            .find(|(_, col)| col.to_lowercase() == cand_lower)
        {
            return Ok((idx, col.as_str()));
        }
    }

    for (idx, col) in available.iter().enumerate() {
        let col_lower = col.to_lowercase();
        for cand in candidates {
            if col_lower.contains(&cand.to_lowercase()) {
                return Ok((idx, col.as_str()));
            }
        }
    }

    Err(PipelineError::ColumnNotFound {
        candidates: candidates.iter().map(|s| s.to_string()).collect(),
        available: available.to_vec(),
    })
}
