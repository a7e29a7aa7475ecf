// Fuel-aware efficiency scoring: extract power and consumption magnitudes,
// normalize to L/h per kW, classify against the fuel's tier table and derive
// a display percentage.

pub mod tiers;

pub use tiers::{DEFAULT_POWER_FACTOR, EfficiencyConfig, Tier, TierTable};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Badge, CleanedRecord, EfficiencyResult, FuelType};
use crate::numeric::parse_number;

/// Display percentage bounds of the interpolated score.
const PERCENT_MAX: f64 = 95.0;
const PERCENT_MIN: f64 = 30.0;

static KW_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+\.?\d*)\s*kw").unwrap());
static KVA_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+\.?\d*)\s*kva").unwrap());
static LH_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+\.?\d*)\s*l/h").unwrap());

const KW_FIELDS: &[&str] = &["potencia_kw", "potencia_kw_valor", "potencia_kw_value"];
const KVA_FIELDS: &[&str] = &[
    "potencia_kva",
    "potencia_kva_valor",
    "potencia_kva_value",
    "potencia_nominal_kva",
    "potencia_prime_kva",
];
const CONSUMPTION_FIELDS: &[&str] = &[
    "consumo",
    "consumo_valor",
    "consumo_value",
    "consumo_75_carga",
    "consumo_75_carga_valor",
    "consumo_max_carga",
    "consumo_max_carga_valor",
    "consumo_nominal",
    "consumo_nominal_valor",
];

fn parsed_field(record: &CleanedRecord, key: &str) -> Option<f64> {
    parse_number(record.get(key)?).filter(|v| *v != 0.0)
}

/// Extracts power in kW. Explicit kW fields win; kVA fields convert through
/// the power factor; a generic `potencia` string is searched for a kW or kVA
/// pattern, with a bare number treated as kVA.
pub fn extract_power_kw(record: &CleanedRecord, power_factor: f64) -> Option<f64> {
    for key in KW_FIELDS {
        if let Some(kw) = parsed_field(record, key) {
            return Some(kw);
        }
    }

    for key in KVA_FIELDS {
        if let Some(kva) = parsed_field(record, key) {
            return Some(kva * power_factor);
        }
    }

    let generic = record.get("potencia")?;
    if let Some(caps) = KW_PATTERN.captures(generic) {
        return parse_number(&caps[1]).filter(|v| *v != 0.0);
    }
    if let Some(caps) = KVA_PATTERN.captures(generic) {
        return parse_number(&caps[1])
            .filter(|v| *v != 0.0)
            .map(|kva| kva * power_factor);
    }
    parse_number(generic)
        .filter(|v| *v != 0.0)
        .map(|kva| kva * power_factor)
}

/// Extracts consumption in L/h. An explicit L/h pattern wins inside each
/// candidate field; a bare number is assumed to already be L/h.
pub fn extract_consumption_lh(record: &CleanedRecord) -> Option<f64> {
    for key in CONSUMPTION_FIELDS {
        let Some(value) = record.get(*key) else { continue };
        if let Some(caps) = LH_PATTERN.captures(value) {
            return parse_number(&caps[1]).filter(|v| *v != 0.0);
        }
        if let Some(parsed) = parse_number(value).filter(|v| *v != 0.0) {
            return Some(parsed);
        }
    }
    None
}

/// Inverse linear interpolation between the excellent bound (95%) and the
/// normal bound (30%), truncated and clamped.
fn percentage(table: &TierTable, ratio: f64) -> u8 {
    let best = table.excellent_max();
    let worst = table.normal_max();
    if ratio <= best {
        return PERCENT_MAX as u8;
    }
    if ratio >= worst {
        return PERCENT_MIN as u8;
    }
    let position = (ratio - best) / (worst - best);
    let pct = (PERCENT_MAX - position * (PERCENT_MAX - PERCENT_MIN)) as i64;
    pct.clamp(PERCENT_MIN as i64, PERCENT_MAX as i64) as u8
}

/// Scores a record against the fuel-specific tier table. Records without a
/// usable power or consumption figure get the neutral default, never an
/// error.
pub fn score(record: &CleanedRecord, fuel_type: FuelType, cfg: &EfficiencyConfig) -> EfficiencyResult {
    let power_kw = extract_power_kw(record, cfg.power_factor);
    let consumption_lh = extract_consumption_lh(record);

    let (Some(power_kw), Some(consumption_lh)) = (power_kw, consumption_lh) else {
        return EfficiencyResult::default_for(fuel_type);
    };

    let ratio = consumption_lh / power_kw;
    let table = cfg.table_for(fuel_type);
    let Some(tier) = table.tier_for(ratio) else {
        // An override emptied the table; degrade like missing data.
        return EfficiencyResult::default_for(fuel_type);
    };

    EfficiencyResult {
        percentage: percentage(table, ratio),
        tier_label: tier.label.clone(),
        tier_color: tier.color.clone(),
        consumption_per_kw: (ratio * 100.0).round() / 100.0,
        fuel_type,
        power_kw,
        consumption_lh,
    }
}

/// Display badge for the computed score.
pub fn efficiency_badge(result: &EfficiencyResult) -> Badge {
    let icon = if result.percentage >= 80 {
        "star"
    } else if result.percentage >= 60 {
        "check-circle"
    } else {
        "info-circle"
    };
    Badge::new(
        format!("Eficiencia: {}%", result.percentage),
        &result.tier_color,
        icon,
    )
}

/// One-line consumption summary for the rendering layer.
pub fn consumption_summary(result: &EfficiencyResult) -> String {
    if result.consumption_per_kw > 0.0 {
        format!("{:.2} L/h por KW", result.consumption_per_kw)
    } else {
        "Consumo no especificado".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entries: &[(&str, &str)]) -> CleanedRecord {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn explicit_kw_field_wins() {
        let r = record(&[("potencia_kw", "2.64"), ("potencia_kva", "3.3")]);
        assert_eq!(extract_power_kw(&r, 0.8), Some(2.64));
    }

    #[test]
    fn kva_converts_through_power_factor() {
        let r = record(&[("potencia_kva", "3.3")]);
        assert_eq!(extract_power_kw(&r, 0.8), Some(3.3 * 0.8));
    }

    #[test]
    fn generic_power_string_parses_kw_kva_or_bare() {
        let r = record(&[("potencia", "5.5 KW")]);
        assert_eq!(extract_power_kw(&r, 0.8), Some(5.5));
        let r = record(&[("potencia", "3.3 KVA")]);
        assert_eq!(extract_power_kw(&r, 0.8), Some(3.3 * 0.8));
        let r = record(&[("potencia", "10")]);
        assert_eq!(extract_power_kw(&r, 0.8), Some(8.0));
        assert_eq!(extract_power_kw(&CleanedRecord::new(), 0.8), None);
    }

    #[test]
    fn consumption_prefers_lh_pattern() {
        let r = record(&[("consumo", "1.36 L/h")]);
        assert_eq!(extract_consumption_lh(&r), Some(1.36));
        let r = record(&[("consumo_75_carga", "1.2")]);
        assert_eq!(extract_consumption_lh(&r), Some(1.2));
        assert_eq!(extract_consumption_lh(&CleanedRecord::new()), None);
    }

    #[test]
    fn missing_data_degrades_to_fixed_default() {
        let result = score(&CleanedRecord::new(), FuelType::Nafta, &EfficiencyConfig::default());
        assert_eq!(result, EfficiencyResult::default_for(FuelType::Nafta));
        assert_eq!(result.percentage, 60);
        assert_eq!(result.tier_label, "Eficiencia Normal");
        assert_eq!(result.tier_color, "#FFC107");
        assert_eq!(result.power_kw, 0.0);
        assert_eq!(result.consumption_lh, 0.0);
    }

    #[test]
    fn zero_magnitudes_degrade_to_fixed_default() {
        let cfg = EfficiencyConfig::default();
        // A unit-tagged zero is as useless as a missing field; it must never
        // reach the ratio division.
        let r = record(&[("potencia", "0 KW"), ("consumo", "1.5 L/h")]);
        assert_eq!(score(&r, FuelType::Nafta, &cfg), EfficiencyResult::default_for(FuelType::Nafta));
        let r = record(&[("potencia_kw", "5"), ("consumo", "0 L/h")]);
        assert_eq!(score(&r, FuelType::Nafta, &cfg), EfficiencyResult::default_for(FuelType::Nafta));
        let r = record(&[("potencia", "0 KVA")]);
        assert_eq!(extract_power_kw(&r, 0.8), None);
    }

    #[test]
    fn gl3300am_scores_in_the_good_band() {
        let cfg = EfficiencyConfig::default();
        let r = record(&[("potencia_kva", "3.3"), ("consumo", "1.36 L/h")]);
        let result = score(&r, FuelType::Nafta, &cfg);
        // 1.36 / (3.3 * 0.8) ≈ 0.515 → "Buena Eficiencia" for nafta.
        assert_eq!(result.tier_label, "Buena Eficiencia");
        assert_eq!(result.consumption_per_kw, 0.52);
        assert!(result.percentage > 60 && result.percentage < 95);
    }

    #[test]
    fn percentage_is_monotonic_in_consumption() {
        let cfg = EfficiencyConfig::default();
        let mut last = u8::MAX;
        for consumption in [0.2, 0.5, 0.9, 1.4, 2.0, 2.6, 3.5] {
            let r = record(&[
                ("potencia_kw", "4.0"),
                ("consumo", &format!("{consumption} L/h")),
            ]);
            let pct = score(&r, FuelType::Nafta, &cfg).percentage;
            assert!(pct <= last, "score must not rise as consumption rises");
            last = pct;
        }
    }

    #[test]
    fn fuel_changes_the_verdict_for_the_same_ratio() {
        let cfg = EfficiencyConfig::default();
        let r = record(&[("potencia_kw", "10"), ("consumo", "3 L/h")]);
        // ratio 0.3: excellent for nafta, very good for diesel.
        assert_eq!(score(&r, FuelType::Nafta, &cfg).tier_label, "Eficiencia Excelente");
        assert_eq!(score(&r, FuelType::Diesel, &cfg).tier_label, "Muy Buena Eficiencia");
    }

    #[test]
    fn percentage_pins_at_the_bounds() {
        let table = EfficiencyConfig::default().nafta;
        assert_eq!(percentage(&table, 0.1), 95);
        assert_eq!(percentage(&table, 0.35), 95);
        assert_eq!(percentage(&table, 0.8), 30);
        assert_eq!(percentage(&table, 3.0), 30);
    }

    #[test]
    fn badge_icon_tracks_percentage() {
        let mut result = EfficiencyResult::default_for(FuelType::Nafta);
        assert_eq!(efficiency_badge(&result).icon, "check-circle");
        assert_eq!(efficiency_badge(&result).label, "Eficiencia: 60%");
        result.percentage = 88;
        assert_eq!(efficiency_badge(&result).icon, "star");
        result.percentage = 35;
        assert_eq!(efficiency_badge(&result).icon, "info-circle");
    }

    #[test]
    fn consumption_summary_formats() {
        let mut result = EfficiencyResult::default_for(FuelType::Nafta);
        assert_eq!(consumption_summary(&result), "Consumo no especificado");
        result.consumption_per_kw = 0.52;
        assert_eq!(consumption_summary(&result), "0.52 L/h por KW");
    }
}
