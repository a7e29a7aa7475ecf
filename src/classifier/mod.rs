// Classifier module: independent heuristic classifiers for fuel, product
// type and portability.

pub mod fuel;
pub mod portability;
pub mod product;

pub use fuel::{FuelRule, FuelRules, classify_fuel};
pub use portability::{PortabilityThresholds, classify_portable};
pub use product::{ProductRule, ProductRules, classify_product};

use crate::model::{Classification, CleanedRecord};

/// Runs the three classifiers in order. Every field of the result is always
/// populated; missing data degrades to the documented defaults.
pub fn classify(
    record: &CleanedRecord,
    fuel_rules: &FuelRules,
    product_rules: &ProductRules,
    thresholds: &PortabilityThresholds,
    power_factor: f64,
) -> Classification {
    let product_type = classify_product(record, product_rules);
    let fuel_type = classify_fuel(record, fuel_rules, power_factor);
    let is_portable = classify_portable(record, product_type, fuel_type, thresholds);
    Classification {
        product_type,
        fuel_type,
        is_portable,
    }
}
