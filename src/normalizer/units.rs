// Duplicate-unit repair: collapses a doubled unit token next to a number
// ("38 kg kg" -> "38 kg") into the canonical spelling.
use once_cell::sync::Lazy;
use regex::Regex;

/// (pattern, replacement) pairs applied in order. Compound units (L/h, L/min)
/// come before their single-letter prefixes so "1.36 L/h L/h" is repaired as
/// one token. All patterns are case-insensitive.
static DUPLICATED_UNITS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    const UNITS: &[(&str, &str)] = &[
        (r"L/h", "L/h"),
        (r"L/min", "L/min"),
        (r"litros?", "litros"),
        (r"L", "L"),
        (r"KVA", "KVA"),
        (r"KW", "KW"),
        (r"W", "W"),
        (r"HP", "HP"),
        (r"Hz", "Hz"),
        (r"V", "V"),
        (r"kg", "kg"),
        (r"mm", "mm"),
        (r"cm", "cm"),
        (r"cc", "cc"),
        (r"dBA?", "dBA"),
        (r"horas?", "horas"),
        (r"h", "h"),
        (r"BAR", "BAR"),
    ];

    UNITS
        .iter()
        .map(|(token, canonical)| {
            let pattern = format!(r"(?i)(\d+(?:[.,]\d+)?)\s*{token}\s+{token}\b");
            (Regex::new(&pattern).unwrap(), *canonical)
        })
        .collect()
});

/// Rewrites every doubled unit occurrence in `value`. Already-clean values
/// pass through untouched, which is what makes the cleaning stage idempotent.
pub fn collapse_duplicated_units(value: &str) -> String {
    let mut out = value.to_string();
    for (pattern, canonical) in DUPLICATED_UNITS.iter() {
        out = pattern
            .replace_all(&out, format!("$1 {canonical}"))
            .into_owned();
    }
    out.trim().to_string()
}
