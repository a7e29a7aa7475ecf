// Feature detection: keyword tags over the record's free text plus
// structural signals, badge generation and icon categories.

pub mod badges;
pub mod icons;

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

use crate::model::{Classification, CleanedRecord, FeatureSet};
use crate::numeric::extract_number;

/// Noise readings below this count as quiet equipment.
const QUIET_DBA: f64 = 70.0;

/// Tag -> keyword variants. A tag applies when any variant appears as a
/// substring of the record's free text.
static FEATURE_KEYWORDS: Lazy<Vec<(&'static str, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        ("portatil", vec!["portátil", "portable", "móvil", "transportable"]),
        ("insonorizado", vec!["insonorizado", "silencioso", "cabinado", "silent"]),
        ("avr", vec!["avr", "regulador automático", "automatic voltage"]),
        ("inverter", vec!["inverter", "inversor"]),
        ("industrial", vec!["industrial", "profesional", "heavy duty"]),
        ("alta_eficiencia", vec!["alta eficiencia", "bajo consumo", "económico"]),
        ("arranque_electrico", vec!["arranque eléctrico", "electric start", "e-start"]),
        ("panel_digital", vec!["panel digital", "display digital", "lcd", "led"]),
        ("proteccion_ip", vec!["ip23", "ip54", "ip55", "protección ip"]),
        ("motor_marca", vec!["honda", "yamaha", "cummins", "perkins", "kohler"]),
        ("certificado", vec!["certificado", "iso", "ce", "certificación"]),
    ]
});

fn field<'a>(record: &'a CleanedRecord, key: &str) -> &'a str {
    record.get(key).map(String::as_str).unwrap_or("")
}

/// Collects feature tags from keywords plus structural signals independent
/// of the free text.
pub fn detect_features(record: &CleanedRecord) -> BTreeSet<String> {
    let mut features = BTreeSet::new();

    let blob = format!(
        "{} {} {} {}",
        field(record, "nombre"),
        field(record, "descripcion"),
        field(record, "caracteristicas"),
        field(record, "especificaciones"),
    )
    .to_lowercase();

    for (tag, keywords) in FEATURE_KEYWORDS.iter() {
        if keywords.iter().any(|k| blob.contains(k)) {
            features.insert((*tag).to_string());
        }
    }

    // Structural signals: field presence and numeric thresholds.
    if record.contains_key("avr") || record.contains_key("regulador_tension") {
        features.insert("avr".to_string());
    }

    let start = field(record, "tipo_arranque").to_lowercase();
    if start.contains("eléctrico") || start.contains("electric") {
        features.insert("arranque_electrico".to_string());
    }

    if record.contains_key("panel_control") || record.contains_key("controlador") {
        features.insert("panel_control".to_string());
    }

    let noise = record
        .get("nivel_ruido_dba")
        .or_else(|| record.get("nivel_ruido"))
        .and_then(|v| extract_number(v));
    if noise.is_some_and(|dba| dba < QUIET_DBA) {
        features.insert("silencioso".to_string());
    }

    features
}

/// Icon categories applicable to the record: the product type itself plus
/// industrial/portable groupings.
fn icon_categories(features: &BTreeSet<String>, classification: &Classification) -> Vec<String> {
    let mut categories = vec![classification.product_type.as_str().to_string()];
    if features.contains("industrial") {
        categories.push("industrial".to_string());
    }
    if features.contains("portatil") {
        categories.push("portatil".to_string());
    }
    categories
}

/// Full detection pass: tags, prioritized badge list (capped) and icon
/// categories.
pub fn detect(record: &CleanedRecord, classification: &Classification) -> FeatureSet {
    let features = detect_features(record);
    let badges = badges::generate_badges(record, classification, &features);
    let icon_categories = icon_categories(&features, classification);
    FeatureSet {
        features,
        badges,
        icon_categories,
    }
}
