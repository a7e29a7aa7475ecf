// Portability heuristics: explicit wording, weight thresholds per product
// and fuel type, then the manual-start signal for generators.
use serde::{Deserialize, Serialize};

use crate::model::{CleanedRecord, FuelType, ProductType};
use crate::numeric::extract_number;

const PORTABLE_WORDS: &[&str] = &["portátil", "portable", "móvil", "transportable"];

/// Weight ceilings (kg) under which a product counts as portable. A matching
/// threshold decides directly in both directions; only products without
/// weight data or without a threshold fall through to the start-type signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortabilityThresholds {
    #[serde(default = "default_nafta_generator_kg")]
    pub nafta_generator_kg: f64,
    #[serde(default = "default_diesel_generator_kg")]
    pub diesel_generator_kg: f64,
    #[serde(default = "default_pump_kg")]
    pub pump_kg: f64,
    #[serde(default = "default_compressor_kg")]
    pub compressor_kg: f64,
}

fn default_nafta_generator_kg() -> f64 {
    60.0
}
fn default_diesel_generator_kg() -> f64 {
    100.0
}
fn default_pump_kg() -> f64 {
    30.0
}
fn default_compressor_kg() -> f64 {
    40.0
}

impl Default for PortabilityThresholds {
    fn default() -> Self {
        Self {
            nafta_generator_kg: default_nafta_generator_kg(),
            diesel_generator_kg: default_diesel_generator_kg(),
            pump_kg: default_pump_kg(),
            compressor_kg: default_compressor_kg(),
        }
    }
}

fn field<'a>(record: &'a CleanedRecord, key: &str) -> &'a str {
    record.get(key).map(String::as_str).unwrap_or("")
}

/// Decides portability for an already-classified record. Missing data never
/// errors; the answer degrades to `false`.
pub fn classify_portable(
    record: &CleanedRecord,
    product_type: ProductType,
    fuel_type: FuelType,
    cfg: &PortabilityThresholds,
) -> bool {
    let name_blob =
        format!("{} {}", field(record, "nombre"), field(record, "modelo")).to_lowercase();
    if PORTABLE_WORDS.iter().any(|w| name_blob.contains(w)) {
        return true;
    }

    let weight = record
        .get("peso_kg")
        .or_else(|| record.get("peso"))
        .and_then(|v| extract_number(v));

    if let Some(weight) = weight {
        match product_type {
            ProductType::Generador => match fuel_type {
                FuelType::Nafta => return weight < cfg.nafta_generator_kg,
                FuelType::Diesel => return weight < cfg.diesel_generator_kg,
                _ => {}
            },
            ProductType::Bomba => return weight < cfg.pump_kg,
            ProductType::Compresor => return weight < cfg.compressor_kg,
            _ => {}
        }
    }

    // Manual start on a generator is a strong portability signal.
    let start = field(record, "tipo_arranque");
    let start = if start.is_empty() { field(record, "arranque") } else { start };
    if product_type == ProductType::Generador && start.to_lowercase().contains("manual") {
        return true;
    }

    false
}
