// Icon lookup for specification rows and product/feature groupings,
// consumed by the rendering layer.
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// (field key, icon) pairs. Exact matches win; the partial pass takes the
/// first entry that contains or is contained in the looked-up field, so
/// order matters.
static FIELD_ICONS: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("potencia", "lightning"),
        ("potencia_kva", "lightning"),
        ("potencia_kw", "lightning"),
        ("potencia_hp", "lightning"),
        ("potencia_max_w", "lightning"),
        ("motor", "settings"),
        ("marca_motor", "settings"),
        ("modelo_motor", "settings"),
        ("cilindrada", "engine"),
        ("cilindros", "engine"),
        ("rpm", "tachometer"),
        ("combustible", "fuel"),
        ("consumo", "fuel"),
        ("capacidad_tanque", "fuel"),
        ("autonomia", "clock"),
        ("tipo_arranque", "power"),
        ("arranque", "power"),
        ("bateria", "battery"),
        ("alternador", "bolt"),
        ("controlador", "cpu"),
        ("panel_control", "monitor"),
        ("dimensiones", "ruler"),
        ("peso", "weight"),
        ("largo", "ruler"),
        ("ancho", "ruler"),
        ("alto", "ruler"),
        ("nivel_ruido", "volume"),
        ("nivel_sonoro", "volume"),
        ("temperatura_operacion", "thermometer"),
        ("temperatura_trabajo", "thermometer"),
        ("voltaje", "bolt"),
        ("frecuencia", "activity"),
        ("fases", "zap"),
        ("factor_potencia", "percent"),
        ("certificaciones", "award"),
        ("garantia", "shield"),
        ("presion", "gauge"),
        ("caudal", "droplet"),
        ("diametro_succion", "circle"),
        ("profundidad_corte", "ruler"),
        ("diametro_disco", "disc"),
        ("capacidad_aceite", "droplet"),
    ]
});

/// Keyword group -> icon, used when no field-key entry applies.
const KEYWORD_ICONS: &[(&[&str], &str)] = &[
    (&["potencia", "power", "kva", "kw"], "lightning"),
    (&["motor", "engine"], "settings"),
    (&["combustible", "fuel", "consumo"], "fuel"),
    (&["tanque", "tank", "capacidad"], "database"),
    (&["peso", "weight"], "weight"),
    (&["dimensi", "size", "largo", "ancho", "alto"], "ruler"),
    (&["ruido", "noise", "sonoro"], "volume"),
    (&["temperatura", "temp"], "thermometer"),
    (&["presion", "pressure"], "gauge"),
    (&["caudal", "flow"], "droplet"),
    (&["voltaje", "voltage", "volt"], "zap"),
    (&["frecuencia", "frequency", "hz"], "activity"),
    (&["certificac", "certif"], "award"),
    (&["garantia", "warranty"], "shield"),
];

/// Icons for the product-category groupings used by the rendering layer.
static CATEGORY_ICONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("generador", "power"),
        ("bomba", "droplet"),
        ("compresor", "wind"),
        ("motocultor", "tractor"),
        ("chipeadora", "tree"),
        ("fumigadora", "spray"),
        ("construccion", "hammer"),
        ("herramienta", "tool"),
        ("industrial", "factory"),
        ("portatil", "move"),
    ])
});

/// Resolves the icon for a specification field: exact key match, then
/// partial match against the field table, then keyword groups, then a
/// generic fallback.
pub fn icon_for_field(field_name: &str) -> &'static str {
    let field = field_name.to_lowercase();

    if let Some((_, icon)) = FIELD_ICONS.iter().find(|(known, _)| *known == field) {
        return icon;
    }

    for (known, icon) in FIELD_ICONS.iter() {
        if field.contains(known) || known.contains(field.as_str()) {
            return icon;
        }
    }

    for (keywords, icon) in KEYWORD_ICONS {
        if keywords.iter().any(|k| field.contains(k)) {
            return icon;
        }
    }

    "info"
}

/// Icon for a product/feature grouping tag.
pub fn icon_for_category(category: &str) -> &'static str {
    CATEGORY_ICONS.get(category).copied().unwrap_or("info")
}
