// Field cleaning: sentinel handling, duplicate-unit repair, field-specific
// reformatting. Pure and idempotent over its own output.

pub mod fields;
pub mod units;

use serde_json::Value;

use crate::model::{CleanedRecord, RawRecord};
use crate::numeric::value_to_text;

/// Values that mean "no data" regardless of spelling case.
const EMPTY_SENTINELS: &[&str] = &["", "n/d", "none", "null"];

/// Cleans a single field: trims and lower-cases the key, maps empty
/// sentinels to an empty value, repairs duplicated units and applies the
/// field-specific formatter.
pub fn normalize(key: &str, value: &Value) -> (String, String) {
    let clean_key = key.trim().to_lowercase();

    let text = value_to_text(value);
    let trimmed = text.trim();
    if EMPTY_SENTINELS.contains(&trimmed.to_lowercase().as_str()) {
        return (clean_key, String::new());
    }

    let repaired = units::collapse_duplicated_units(trimmed);
    let formatted = fields::format_for_key(&clean_key, &repaired);
    (clean_key, formatted)
}

/// Cleans every field of a raw record, dropping entries whose value resolves
/// to empty.
pub fn clean_record(raw: &RawRecord) -> CleanedRecord {
    let mut cleaned = CleanedRecord::new();
    for (key, value) in raw {
        let (clean_key, clean_value) = normalize(key, value);
        if !clean_value.is_empty() {
            cleaned.insert(clean_key, clean_value);
        }
    }
    cleaned
}
