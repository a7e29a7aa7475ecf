// Field-category formatters. Each one leaves a value alone when it already
// carries the expected unit and otherwise appends the canonical unit to the
// first numeric token, so re-running any formatter on its own output is a
// no-op.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::numeric::number_token;

/// Engine brands kept verbatim in the motor field.
const ENGINE_BRANDS: &[&str] = &[
    "CUMMINS", "HONDA", "YAMAHA", "PERKINS", "KOHLER", "BRIGGS", "LOGUS", "HYUNDAI",
];

static MOTOR_MOTOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)motor\s+motor\s+").unwrap());
static LEADING_MOTOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^motor\s+").unwrap());
static BARE_HP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(\d+\.?\d*)\s*HP$").unwrap());

/// Dispatches the field-specific formatter by substring match on the cleaned
/// key. Unmatched keys pass the value through unchanged.
pub fn format_for_key(key: &str, value: &str) -> String {
    if key.contains("motor") {
        clean_motor(value)
    } else if key.contains("consumo") {
        with_unit(value, &["l/h"], "L/h")
    } else if key.contains("capacidad") && key.contains("tanque") {
        with_unit(value, &["l", "litro"], "L")
    } else if key.contains("autonomia") {
        with_unit(value, &["h", "hora"], "horas")
    } else if key.contains("peso") {
        with_unit(value, &["kg"], "kg")
    } else if key.contains("dimensiones") {
        format_dimensions(value)
    } else if key.contains("nivel") && (key.contains("ruido") || key.contains("sonoro")) {
        with_unit(value, &["db"], "dBA")
    } else if key.contains("presion") {
        with_unit(value, &["bar"], "BAR")
    } else if key.contains("caudal") {
        format_flow(value)
    } else if key.contains("temperatura") {
        format_temperature(value)
    } else if key.contains("cilindrada") {
        with_unit(value, &["cc"], "cc")
    } else if key.contains("capacidad_aceite") {
        with_unit(value, &["l"], "L")
    } else {
        value.to_string()
    }
}

/// Generic formatter: if any marker already appears (case-insensitive) the
/// value stays; otherwise the first numeric token gets the canonical unit.
fn with_unit(value: &str, markers: &[&str], unit: &str) -> String {
    let lower = value.to_lowercase();
    if markers.iter().any(|m| lower.contains(m)) {
        return value.to_string();
    }
    match number_token(value) {
        Some(num) => format!("{num} {unit}"),
        None => value.to_string(),
    }
}

/// Motor values keep brand spellings, lose redundant "Motor" words and
/// promote a bare horsepower figure to "Motor <n> HP".
fn clean_motor(value: &str) -> String {
    let value = MOTOR_MOTOR.replace_all(value, "Motor ").into_owned();

    let upper = value.to_uppercase();
    if ENGINE_BRANDS.iter().any(|brand| upper.contains(brand)) {
        return LEADING_MOTOR.replace(&value, "").into_owned();
    }

    if value.to_lowercase().starts_with("motor ") {
        return value;
    }

    if let Some(caps) = BARE_HP.captures(&value) {
        return format!("Motor {} HP", &caps[1]);
    }

    value
}

/// Dimension strings like "605x440x440" get an "mm" suffix.
fn format_dimensions(value: &str) -> String {
    let has_separator = value.contains('x') || value.contains('X') || value.contains('*');
    if has_separator && !value.to_lowercase().contains("mm") {
        return format!("{value} mm");
    }
    value.to_string()
}

/// Flow unit is picked by magnitude: readings above 1000 are per-hour values,
/// smaller ones per-minute. Policy threshold, not a unit conversion.
fn format_flow(value: &str) -> String {
    let Some(num) = number_token(value) else {
        return value.to_string();
    };
    let magnitude: f64 = num.parse().unwrap_or(0.0);
    let lower = value.to_lowercase();
    if magnitude > 1000.0 {
        if !lower.contains("l/h") {
            return format!("{num} L/h");
        }
    } else if !lower.contains("l/min") {
        return format!("{num} L/min");
    }
    value.to_string()
}

fn format_temperature(value: &str) -> String {
    let Some(num) = number_token(value) else {
        return value.to_string();
    };
    if !value.contains('°') && !value.to_lowercase().contains('c') {
        return format!("{num}°C");
    }
    value.to_string()
}
