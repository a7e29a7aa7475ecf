// Fuel-type heuristics: ordered keyword rules over the record's free text,
// with a small-generator fallback.
use serde::{Deserialize, Serialize};

use crate::efficiency;
use crate::model::{CleanedRecord, FuelType};

/// One keyword rule; the first rule with a matching keyword wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelRule {
    pub fuel: FuelType,
    pub keywords: Vec<String>,
}

/// Ordered rule list plus the fallback policy. The gasoline fallback mirrors
/// the historical catalog behavior; deployments that prefer an explicit
/// "unknown" can set `fallback` to [`FuelType::Combustible`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelRules {
    #[serde(default = "default_rules")]
    pub rules: Vec<FuelRule>,
    #[serde(default = "default_fallback")]
    pub fallback: FuelType,
    /// Generators below this extracted power default to gasoline (~10 kVA).
    #[serde(default = "default_small_generator_kw")]
    pub small_generator_kw: f64,
}

fn default_fallback() -> FuelType {
    FuelType::Nafta
}

fn default_small_generator_kw() -> f64 {
    8.0
}

fn default_rules() -> Vec<FuelRule> {
    let rule = |fuel, keywords: &[&str]| FuelRule {
        fuel,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    };
    vec![
        rule(FuelType::Nafta, &["nafta", "gasolina", "bencina", "petrol"]),
        rule(FuelType::Diesel, &["diesel", "gasoil", "diésel"]),
        rule(FuelType::Gas, &["gas", "glp", "gnc", "propano", "butano"]),
        rule(FuelType::Electrico, &["eléctric", "electric"]),
    ]
}

impl Default for FuelRules {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            fallback: default_fallback(),
            small_generator_kw: default_small_generator_kw(),
        }
    }
}

fn field<'a>(record: &'a CleanedRecord, key: &str) -> &'a str {
    record.get(key).map(String::as_str).unwrap_or("")
}

/// Classifies the fuel type from the combustible field plus the product name
/// and model. Always returns a value; an empty record yields the fallback.
/// `power_factor` is the kVA-to-kW factor the scorer uses; the small-generator
/// branch extracts power the same way so both agree on the figure.
pub fn classify_fuel(record: &CleanedRecord, cfg: &FuelRules, power_factor: f64) -> FuelType {
    let blob = format!(
        "{} {} {}",
        field(record, "combustible"),
        field(record, "nombre"),
        field(record, "modelo"),
    )
    .to_lowercase();

    for rule in &cfg.rules {
        if rule.keywords.iter().any(|k| blob.contains(k.as_str())) {
            return rule.fuel;
        }
    }

    // Small generators in this catalog are overwhelmingly gasoline-fueled.
    if blob.contains("generador") {
        if let Some(power) = efficiency::extract_power_kw(record, power_factor) {
            if power < cfg.small_generator_kw {
                return FuelType::Nafta;
            }
        }
    }

    cfg.fallback
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
    fn keyword_order_is_first_match_wins() {
        let cfg = FuelRules::default();
        // "gasoil" contains "gas" but the diesel rule is checked first.
        let r = record(&[("combustible", "Gasoil")]);
        assert_eq!(classify_fuel(&r, &cfg, efficiency::DEFAULT_POWER_FACTOR), FuelType::Diesel);
        let r = record(&[("combustible", "Gasolina")]);
        assert_eq!(classify_fuel(&r, &cfg, efficiency::DEFAULT_POWER_FACTOR), FuelType::Nafta);
        let r = record(&[("combustible", "GLP")]);
        assert_eq!(classify_fuel(&r, &cfg, efficiency::DEFAULT_POWER_FACTOR), FuelType::Gas);
        let r = record(&[("nombre", "BOMBA ELECTRICA")]);
        assert_eq!(classify_fuel(&r, &cfg, efficiency::DEFAULT_POWER_FACTOR), FuelType::Electrico);
    }

    #[test]
    fn name_and_model_participate() {
        let cfg = FuelRules::default();
        let r = record(&[("nombre", "GENERADOR A GASOLINA GX2500")]);
        assert_eq!(classify_fuel(&r, &cfg, efficiency::DEFAULT_POWER_FACTOR), FuelType::Nafta);
        let r = record(&[("modelo", "MOTOBOMBA DIESEL MD50")]);
        assert_eq!(classify_fuel(&r, &cfg, efficiency::DEFAULT_POWER_FACTOR), FuelType::Diesel);
    }

    #[test]
    fn small_generator_defaults_to_nafta_even_with_unknown_fallback() {
        let cfg = FuelRules {
            fallback: FuelType::Combustible,
            ..FuelRules::default()
        };
        let r = record(&[("nombre", "GENERADOR GL3300AM"), ("potencia_kva", "3.3")]);
        assert_eq!(classify_fuel(&r, &cfg, efficiency::DEFAULT_POWER_FACTOR), FuelType::Nafta);
        // Large generator without fuel keywords: falls back.
        let r = record(&[("nombre", "GENERADOR GL25000"), ("potencia_kva", "25")]);
        assert_eq!(classify_fuel(&r, &cfg, efficiency::DEFAULT_POWER_FACTOR), FuelType::Combustible);
    }

    #[test]
    fn small_generator_branch_honors_the_configured_power_factor() {
        let cfg = FuelRules {
            fallback: FuelType::Combustible,
            ..FuelRules::default()
        };
        // 9 kVA sits on either side of the 8 kW cutoff depending on the
        // configured conversion factor.
        let r = record(&[("nombre", "GENERADOR GL9000"), ("potencia_kva", "9")]);
        assert_eq!(classify_fuel(&r, &cfg, 0.8), FuelType::Nafta);
        assert_eq!(classify_fuel(&r, &cfg, 1.0), FuelType::Combustible);
    }

    #[test]
    fn empty_record_yields_fallback() {
        let cfg = FuelRules::default();
        assert_eq!(
            classify_fuel(&CleanedRecord::new(), &cfg, efficiency::DEFAULT_POWER_FACTOR),
            FuelType::Nafta
        );
    }
}
