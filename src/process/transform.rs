// src/process/transform.rs
use anyhow::Result;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use crate::cantons;
use crate::process::resolve::{resolve_column, CANTON_CANDIDATES, LOCALITY_CANDIDATES};
use crate::process::RawTable;

/// One cleaned output row: a locality and the full name of its canton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalityRecord {
    pub locality: String,
    pub canton: String,
}

/// Turn raw rows into cleaned, deduplicated, sorted records.
///
/// Rows whose canton code is not one of the 26 known abbreviations are
/// dropped (exact, case-sensitive match). Localities are trimmed; rows left
/// with an empty locality are dropped, as are rows too short to carry both
/// resolved columns. Duplicates on `(locality, canton)` keep the first
/// occurrence. The result is sorted by `(canton, locality)`.
#[tracing::instrument(level = "info", skip(table), fields(rows = table.rows.len()))]
pub fn build_records(table: &RawTable) -> Result<Vec<LocalityRecord>> {
    let (locality_idx, locality_col) = resolve_column(LOCALITY_CANDIDATES, &table.headers)?;
    let (canton_idx, canton_col) = resolve_column(CANTON_CANDIDATES, &table.headers)?;
    debug!(locality = locality_col, canton = canton_col, "resolved columns");

    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut records = Vec::new();

    for row in &table.rows {
        let abbr = match row.get(canton_idx) {
            Some(v) => v.as_str(),
            None => continue,
        };
        let full = match cantons::full_name(abbr) {
            Some(name) => name,
            None => continue,
        };

        let locality = row.get(locality_idx).map(|s| s.trim()).unwrap_or("");
        if locality.is_empty() {
            continue;
        }

        let key = (locality.to_string(), full.to_string());
        if !seen.insert(key.clone()) {
            continue;
        }
        records.push(LocalityRecord {
            locality: key.0,
            canton: key.1,
        });
    }

    records.sort_by(|a, b| {
        a.canton
            .cmp(&b.canton)
            .then_with(|| a.locality.cmp(&b.locality))
    });

    Ok(records)
}
