// Product-type heuristics: ordered keyword rules over name, family, category
// and model text.
use serde::{Deserialize, Serialize};

use crate::model::{CleanedRecord, ProductType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRule {
    pub product: ProductType,
    pub keywords: Vec<String>,
}

/// Ordered product rules; iteration order decides ties, default is
/// [`ProductType::Equipo`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRules {
    #[serde(default = "default_rules")]
    pub rules: Vec<ProductRule>,
}

fn default_rules() -> Vec<ProductRule> {
    let rule = |product, keywords: &[&str]| ProductRule {
        product,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    };
    vec![
        rule(ProductType::Generador, &["generador", "generator", "grupo electrógeno"]),
        rule(ProductType::Bomba, &["bomba", "motobomba", "pump"]),
        rule(ProductType::Compresor, &["compresor", "compressor"]),
        rule(ProductType::Motocultor, &["motocultor", "motocultivador", "tiller"]),
        rule(ProductType::Chipeadora, &["chipeadora", "chipper", "trituradora"]),
        rule(ProductType::Fumigadora, &["fumigadora", "pulverizadora", "sprayer"]),
        rule(ProductType::Soldadora, &["soldadora", "welder", "soldador"]),
        rule(ProductType::Cortadora, &["cortadora", "cortador", "cutter"]),
        rule(ProductType::Vibrador, &["vibrador", "vibrator", "vibradora"]),
        rule(ProductType::Hidrolavadora, &["hidrolavadora", "hidrolimpiadora", "pressure washer"]),
    ]
}

impl Default for ProductRules {
    fn default() -> Self {
        Self { rules: default_rules() }
    }
}

fn field<'a>(record: &'a CleanedRecord, key: &str) -> &'a str {
    record.get(key).map(String::as_str).unwrap_or("")
}

/// Classifies the product category. Always returns a value; records without
/// any category keyword are generic equipment.
pub fn classify_product(record: &CleanedRecord, cfg: &ProductRules) -> ProductType {
    let blob = format!(
        "{} {} {} {}",
        field(record, "nombre"),
        field(record, "familia"),
        field(record, "categoria_producto"),
        field(record, "modelo"),
    )
    .to_lowercase();

    for rule in &cfg.rules {
        if rule.keywords.iter().any(|k| blob.contains(k.as_str())) {
            return rule.product;
        }
    }

    ProductType::Equipo
}
