// src/cantons.rs
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The 26 Swiss cantons: 2-letter code → full French name.
/// Any record whose code is not in this table is dropped by the pipeline.
static CANTON_NAMES: &[(&str, &str)] = &[
    ("AG", "Argovie"),
    ("AI", "Appenzell Rhodes-Intérieures"),
    ("AR", "Appenzell Rhodes-Extérieures"),
    ("BE", "Berne"),
    ("BL", "Bâle-Campagne"),
    ("BS", "Bâle-Ville"),
    ("FR", "Fribourg"),
    ("GE", "Genève"),
    ("GL", "Glaris"),
    ("GR", "Grisons"),
    ("JU", "Jura"),
    ("LU", "Lucerne"),
    ("NE", "Neuchâtel"),
    ("NW", "Nidwald"),
    ("OW", "Obwald"),
    ("SG", "Saint-Gall"),
    ("SH", "Schaffhouse"),
    ("SO", "Soleure"),
    ("SZ", "Schwytz"),
    ("TG", "Thurgovie"),
    ("TI", "Tessin"),
    ("UR", "Uri"),
    ("VD", "Vaud"),
    ("VS", "Valais"),
    ("ZG", "Zoug"),
    ("ZH", "Zurich"),
];

static CANTON_BY_ABBR: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CANTON_NAMES.iter().copied().collect());

/// Look up the full name for a 2-letter code. Exact, case-sensitive match.
pub fn full_name(abbr: &str) -> Option<&'static str> {
    CANTON_BY_ABBR.get(abbr).copied()
}
