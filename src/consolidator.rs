// Synonym-field merging and meta-field exclusion. Guarantees at most one key
// per canonical concept and no excluded key in the output.
use crate::model::{CleanedRecord, ConsolidatedRecord};

/// Descriptive/meta fields that must never appear as a specification row.
const EXCLUDED_FIELDS: &[&str] = &[
    "nombre",
    "marca",
    "familia",
    "pdf_url",
    "marketing_content",
    "categoria_producto",
    "caracteristicas_especiales",
    "eficiencia_data",
    "nota_consumo",
    "tipo_combustible",
    "customized_for_gasoline",
    "caracteristicas_adicionales",
    "badges_especiales",
];

const EXCLUDED_SUFFIXES: &[&str] = &["_unidad", "_unit", "_valor", "_value", "_url", "_id"];
const EXCLUDED_SUBSTRINGS: &[&str] = &["unidad", "unit"];

/// Canonical concept: target key plus its field-name variants in priority
/// order. The first variant present wins; every other variant is removed even
/// when it carries a different value.
struct Concept {
    canonical: &'static str,
    variants: &'static [&'static str],
}

const CONCEPTS: &[Concept] = &[
    Concept {
        canonical: "potencia",
        variants: &["potencia_kva", "potencia_max_valor", "potencia_standby_valor", "potencia"],
    },
    Concept {
        canonical: "consumo",
        variants: &["consumo_75_carga_valor", "consumo_max_carga_valor", "consumo_valor", "consumo"],
    },
    Concept {
        canonical: "capacidad_tanque",
        variants: &["capacidad_tanque_combustible_l", "capacidad_tanque_litros", "capacidad_tanque"],
    },
    Concept {
        canonical: "autonomia",
        variants: &["autonomia_potencia_nominal_valor", "autonomia_horas", "autonomia"],
    },
    Concept {
        canonical: "nivel_ruido",
        variants: &["nivel_sonoro_dba_7m", "nivel_ruido_dba", "nivel_sonoro_dba", "nivel_ruido"],
    },
];

fn is_excluded(key: &str) -> bool {
    EXCLUDED_FIELDS.contains(&key)
        || EXCLUDED_SUFFIXES.iter().any(|s| key.ends_with(s))
        || EXCLUDED_SUBSTRINGS.iter().any(|s| key.contains(s))
}

/// Merges synonym fields into their canonical key and drops excluded fields.
/// Returns the consolidated record plus the list of removed keys.
pub fn consolidate(cleaned: &CleanedRecord) -> (ConsolidatedRecord, Vec<String>) {
    let mut out = ConsolidatedRecord::new();
    let mut removed = Vec::new();

    for (key, value) in cleaned {
        if is_excluded(key) {
            removed.push(key.clone());
        } else {
            out.insert(key.clone(), value.clone());
        }
    }

    for concept in CONCEPTS {
        let winner = concept
            .variants
            .iter()
            .find(|variant| cleaned.contains_key(**variant) && !is_excluded(variant))
            .copied();

        let Some(winner) = winner else { continue };
        let value = cleaned[winner].clone();

        for variant in concept.variants {
            if *variant != concept.canonical && out.remove(*variant).is_some() {
                removed.push((*variant).to_string());
            }
        }
        out.insert(concept.canonical.to_string(), value);
    }

    (out, removed)
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
    fn excluded_fields_never_survive() {
        let cleaned = record(&[
            ("nombre", "GENERADOR GL3300AM"),
            ("marca", "LOGUS"),
            ("potencia_unidad", "KVA"),
            ("ficha_url", "https://example.test/ficha.pdf"),
            ("producto_id", "123"),
            ("voltaje", "220 V"),
        ]);
        let (out, removed) = consolidate(&cleaned);
        assert_eq!(out.len(), 1);
        assert!(out.contains_key("voltaje"));
        assert_eq!(removed.len(), 5);
    }

    #[test]
    fn first_priority_variant_wins() {
        let cleaned = record(&[
            ("capacidad_tanque", "12 L"),
            ("capacidad_tanque_litros", "14 L"),
            ("capacidad_tanque_combustible_l", "15 L"),
        ]);
        let (out, _) = consolidate(&cleaned);
        let tank_keys: Vec<_> = out.keys().filter(|k| k.contains("tanque")).collect();
        assert_eq!(tank_keys, vec!["capacidad_tanque"]);
        // Highest-priority synonym, not the last one seen.
        assert_eq!(out["capacidad_tanque"], "15 L");
    }

    #[test]
    fn one_key_per_concept() {
        let cleaned = record(&[
            ("nivel_ruido", "72 dBA"),
            ("nivel_ruido_dba", "68 dBA"),
            ("nivel_sonoro_dba_7m", "65 dBA"),
            ("autonomia_horas", "8 horas"),
            ("autonomia", "7 horas"),
        ]);
        let (out, _) = consolidate(&cleaned);
        assert_eq!(out["nivel_ruido"], "65 dBA");
        assert_eq!(out["autonomia"], "8 horas");
        assert_eq!(out.keys().filter(|k| k.contains("ruido") || k.contains("sonoro")).count(), 1);
        assert_eq!(out.keys().filter(|k| k.contains("autonomia")).count(), 1);
    }

    #[test]
    fn kva_variant_becomes_canonical_power() {
        let cleaned = record(&[("potencia_kva", "3.3")]);
        let (out, _) = consolidate(&cleaned);
        assert_eq!(out["potencia"], "3.3");
        assert!(!out.contains_key("potencia_kva"));
    }

    #[test]
    fn plain_fields_pass_through() {
        let cleaned = record(&[("motor", "Motor 7HP"), ("frecuencia", "50 Hz")]);
        let (out, removed) = consolidate(&cleaned);
        assert_eq!(out.len(), 2);
        assert!(removed.is_empty());
    }
}
