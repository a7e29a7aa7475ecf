// Field-key to display-name mapping for the rendered specification table.
use once_cell::sync::Lazy;

/// (key, display name) pairs, checked for an exact match first and then for
/// the first key contained in the looked-up field. Order matters for the
/// partial pass.
static DISPLAY_NAMES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("modelo", "Modelo"),
        ("serie", "Serie"),
        ("potencia_kva", "Potencia"),
        ("potencia_stand_by", "Potencia Stand By"),
        ("potencia_prime", "Potencia Prime"),
        ("potencia_kw", "Potencia (KW)"),
        ("potencia_hp", "Potencia"),
        ("potencia_max_w", "Potencia Máxima"),
        ("potencia", "Potencia"),
        ("voltaje", "Voltaje"),
        ("frecuencia_hz", "Frecuencia"),
        ("frecuencia", "Frecuencia"),
        ("fases", "Fases"),
        ("marca_motor", "Marca Motor"),
        ("modelo_motor", "Modelo Motor"),
        ("motor", "Motor"),
        ("cilindrada_cc", "Cilindrada"),
        ("cilindrada", "Cilindrada"),
        ("cilindros", "Cilindros"),
        ("rpm", "RPM"),
        ("combustible", "Combustible"),
        ("consumo_75_carga", "Consumo al 75%"),
        ("consumo_max_carga", "Consumo Máximo"),
        ("consumo", "Consumo"),
        ("capacidad_tanque", "Capacidad del Tanque"),
        ("autonomia", "Autonomía"),
        ("tipo_arranque", "Tipo de Arranque"),
        ("arranque", "Tipo de Arranque"),
        ("bateria", "Batería"),
        ("alternador", "Alternador"),
        ("controlador", "Controlador"),
        ("panel_control", "Panel de Control"),
        ("dimensiones", "Dimensiones (LxAxH)"),
        ("largo", "Largo"),
        ("ancho_labranza_cm", "Ancho de Labranza"),
        ("ancho", "Ancho"),
        ("alto", "Alto"),
        ("peso", "Peso"),
        ("nivel_sonoro_dba_7m", "Nivel Sonoro a 7m"),
        ("nivel_ruido", "Nivel Sonoro"),
        ("nivel_sonoro", "Nivel Sonoro"),
        ("temperatura_operacion", "Temperatura Operación"),
        ("temperatura_trabajo", "Temperatura de Trabajo"),
        ("temperatura_max", "Temperatura Máxima"),
        ("capacidad_aceite", "Capacidad de Aceite"),
        ("factor_potencia", "Factor de Potencia"),
        ("regulacion_tension", "Regulación de Tensión"),
        ("certificaciones", "Certificaciones"),
        ("garantia", "Garantía"),
        ("presion_max_bar", "Presión Máxima"),
        ("presion", "Presión"),
        ("caudal", "Caudal"),
        ("diametro_max_rama_cm", "Diámetro Máximo"),
        ("diametro_succion", "Diámetro Succión"),
        ("diametro_disco", "Diámetro de Disco"),
        ("marchas_adelante_atras", "Marchas"),
        ("alcance_pulverizacion", "Alcance"),
        ("eje_salida", "Eje de Salida"),
        ("fuerza_impacto_kg", "Fuerza de Impacto"),
        ("profundidad_corte_mm", "Profundidad de Corte"),
    ]
});

/// Resolves the display label for a specification row. Unknown keys get a
/// title-cased rendering of the key itself.
pub fn display_name(field_key: &str) -> String {
    if let Some((_, name)) = DISPLAY_NAMES.iter().find(|(key, _)| *key == field_key) {
        return (*name).to_string();
    }
    if let Some((_, name)) = DISPLAY_NAMES.iter().find(|(key, _)| field_key.contains(key)) {
        return (*name).to_string();
    }
    title_case(field_key)
}

fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
