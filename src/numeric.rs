// Numeric extraction helpers shared by the formatters, classifiers and scorer.
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static FIRST_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.?\d*").unwrap());

/// Returns the first numeric token in `text` as-is (e.g. `"1.36"` out of
/// `"1.36 L/h"`), so formatters can reuse the original spelling.
pub fn number_token(text: &str) -> Option<&str> {
    FIRST_NUMBER.find(text).map(|m| m.as_str())
}

/// Extracts the first numeric token and parses it. `None` on anything that
/// does not carry a number; never panics.
pub fn extract_number(text: &str) -> Option<f64> {
    number_token(text)?.parse().ok()
}

/// Lenient number parser for free-text values: strips everything but digits
/// and separators, normalizes `,` to `.`, and when several decimal points
/// survive keeps only the last one as the separator.
pub fn parse_number(text: &str) -> Option<f64> {
    let mut clean: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    clean = clean.replace(',', ".");

    if clean.matches('.').count() > 1 {
        let (integral, fraction) = clean.rsplit_once('.').unwrap_or((clean.as_str(), ""));
        clean = format!("{}.{}", integral.replace('.', ""), fraction);
    }

    clean.parse().ok()
}

/// Stringifies a raw JSON value the way the cleaning stage expects: strings
/// pass through, scalars render plainly, null becomes empty, and nested
/// shapes fall back to their JSON text.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
