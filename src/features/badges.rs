// Badge generation: a fixed-priority pass over the classification and the
// detected feature tags, truncated to the display cap.
use std::collections::BTreeSet;

use crate::model::{Badge, Classification, CleanedRecord, FuelType, MAX_BADGES};
use crate::numeric::extract_number;

/// Engine brands worth a badge of their own; first match wins.
const BADGE_BRANDS: &[&str] = &["honda", "yamaha", "cummins", "perkins", "kohler", "briggs"];

/// Minimum warranty (years) for the extended-warranty badge.
const WARRANTY_MIN_YEARS: f64 = 2.0;

fn field<'a>(record: &'a CleanedRecord, key: &str) -> &'a str {
    record.get(key).map(String::as_str).unwrap_or("")
}

/// Builds the badge list in priority order: portability, fuel type (gasoline
/// gets none), detected features, certification, warranty, engine brand.
/// Anything past [`MAX_BADGES`] is dropped.
pub fn generate_badges(
    record: &CleanedRecord,
    classification: &Classification,
    features: &BTreeSet<String>,
) -> Vec<Badge> {
    let mut badges = Vec::new();

    if classification.is_portable {
        badges.push(Badge::new("PORTÁTIL", "#2196F3", "move"));
    }

    match classification.fuel_type {
        FuelType::Diesel => badges.push(Badge::new("DIESEL", "#795548", "fuel")),
        FuelType::Gas => badges.push(Badge::new("GAS", "#009688", "fuel")),
        _ => {}
    }

    if features.contains("inverter") {
        badges.push(Badge::new("INVERTER", "#9C27B0", "cpu"));
    }
    if features.contains("insonorizado") {
        badges.push(Badge::new("INSONORIZADO", "#607D8B", "volume-x"));
    }
    if features.contains("avr") {
        badges.push(Badge::new("AVR", "#FF5722", "shield"));
    }
    if features.contains("arranque_electrico") {
        badges.push(Badge::new("ARRANQUE ELÉCTRICO", "#4CAF50", "power"));
    }

    if record.contains_key("certificaciones") {
        badges.push(Badge::new("CERTIFICADO", "#FFC107", "award"));
    }

    if let Some(years) = extract_number(field(record, "garantia")) {
        if years >= WARRANTY_MIN_YEARS {
            badges.push(Badge::new(
                format!("{} AÑOS GARANTÍA", years as i64),
                "#4CAF50",
                "shield",
            ));
        }
    }

    let motor = field(record, "motor");
    let motor = if motor.is_empty() { field(record, "marca_motor") } else { motor };
    let motor = motor.to_lowercase();
    if let Some(brand) = BADGE_BRANDS.iter().find(|b| motor.contains(**b)) {
        badges.push(Badge::new(
            format!("MOTOR {}", brand.to_uppercase()),
            "#3F51B5",
            "settings",
        ));
    }

    badges.truncate(MAX_BADGES);
    badges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductType;

    fn record(entries: &[(&str, &str)]) -> CleanedRecord {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn classification(fuel: FuelType, portable: bool) -> Classification {
        Classification {
            product_type: ProductType::Generador,
            fuel_type: fuel,
            is_portable: portable,
        }
    }

    fn tags(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn portability_badge_comes_first() {
        let badges = generate_badges(
            &CleanedRecord::new(),
            &classification(FuelType::Diesel, true),
            &tags(&["inverter"]),
        );
        let labels: Vec<_> = badges.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["PORTÁTIL", "DIESEL", "INVERTER"]);
    }

    #[test]
    fn gasoline_gets_no_fuel_badge() {
        let badges = generate_badges(
            &CleanedRecord::new(),
            &classification(FuelType::Nafta, false),
            &BTreeSet::new(),
        );
        assert!(badges.iter().all(|b| b.label != "NAFTA"));
        assert!(badges.is_empty());
    }

    #[test]
    fn warranty_badge_needs_two_years() {
        let short = record(&[("garantia", "1 año")]);
        let badges = generate_badges(&short, &classification(FuelType::Nafta, false), &BTreeSet::new());
        assert!(badges.is_empty());

        let long = record(&[("garantia", "3 años")]);
        let badges = generate_badges(&long, &classification(FuelType::Nafta, false), &BTreeSet::new());
        assert_eq!(badges[0].label, "3 AÑOS GARANTÍA");
    }

    #[test]
    fn engine_brand_badge_takes_first_match() {
        let r = record(&[("motor", "Motor HONDA GX390")]);
        let badges = generate_badges(&r, &classification(FuelType::Nafta, false), &BTreeSet::new());
        assert_eq!(badges[0].label, "MOTOR HONDA");
        assert_eq!(badges[0].icon, "settings");
    }

    #[test]
    fn badge_list_caps_at_four_in_priority_order() {
        // Seven badge conditions triggered at once.
        let r = record(&[
            ("certificaciones", "ISO 9001"),
            ("garantia", "2 años"),
            ("motor", "HONDA GX390"),
        ]);
        let badges = generate_badges(
            &r,
            &classification(FuelType::Diesel, true),
            &tags(&["inverter", "insonorizado", "avr", "arranque_electrico"]),
        );
        let labels: Vec<_> = badges.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["PORTÁTIL", "DIESEL", "INVERTER", "INSONORIZADO"]);
    }
}
