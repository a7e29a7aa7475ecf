// Core structs: records, classification, badges, efficiency result
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw input record as delivered by upstream extractors (PDF/OCR, scrapers).
/// Free-form keys, arbitrary value shapes, no schema guarantees.
pub type RawRecord = serde_json::Map<String, Value>;

/// Record after field cleaning: lower-cased keys, display-ready values with
/// standardized units, empty/sentinel values dropped.
pub type CleanedRecord = BTreeMap<String, String>;

/// Cleaned record after synonym merging: at most one key per canonical
/// concept, excluded meta fields removed.
pub type ConsolidatedRecord = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Nafta,
    Diesel,
    Gas,
    Electrico,
    /// Fuel could not be determined.
    Combustible,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Nafta => "nafta",
            FuelType::Diesel => "diesel",
            FuelType::Gas => "gas",
            FuelType::Electrico => "electrico",
            FuelType::Combustible => "combustible",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Generador,
    Bomba,
    Compresor,
    Motocultor,
    Chipeadora,
    Fumigadora,
    Soldadora,
    Cortadora,
    Vibrador,
    Hidrolavadora,
    /// Generic equipment, used when no category keyword matches.
    Equipo,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Generador => "generador",
            ProductType::Bomba => "bomba",
            ProductType::Compresor => "compresor",
            ProductType::Motocultor => "motocultor",
            ProductType::Chipeadora => "chipeadora",
            ProductType::Fumigadora => "fumigadora",
            ProductType::Soldadora => "soldadora",
            ProductType::Cortadora => "cortadora",
            ProductType::Vibrador => "vibrador",
            ProductType::Hidrolavadora => "hidrolavadora",
            ProductType::Equipo => "equipo",
        }
    }
}

/// Output of the three classifiers. Every field is always populated; the
/// classifiers have no failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub product_type: ProductType,
    pub fuel_type: FuelType,
    pub is_portable: bool,
}

/// Short display tag consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub color: String,
    pub icon: String,
}

impl Badge {
    pub fn new(label: impl Into<String>, color: &str, icon: &str) -> Self {
        Self {
            label: label.into(),
            color: color.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Hard cap on the badge list; later-priority badges are dropped silently.
pub const MAX_BADGES: usize = 4;

/// Detected feature tags plus the badge list derived from them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeatureSet {
    pub features: BTreeSet<String>,
    /// Priority-ordered, capped at [`MAX_BADGES`].
    pub badges: Vec<Badge>,
    pub icon_categories: Vec<String>,
}

/// Fuel-aware efficiency score. When power or consumption cannot be derived
/// the scorer returns [`EfficiencyResult::default_for`] instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyResult {
    /// Display percentage, clamped to [30, 95].
    pub percentage: u8,
    pub tier_label: String,
    pub tier_color: String,
    /// Normalized consumption in L/h per kW, rounded to two decimals.
    pub consumption_per_kw: f64,
    pub fuel_type: FuelType,
    pub power_kw: f64,
    pub consumption_lh: f64,
}

impl EfficiencyResult {
    /// Neutral default used when the record carries no usable power or
    /// consumption data.
    pub fn default_for(fuel_type: FuelType) -> Self {
        Self {
            percentage: 60,
            tier_label: "Eficiencia Normal".to_string(),
            tier_color: "#FFC107".to_string(),
            consumption_per_kw: 0.0,
            fuel_type,
            power_kw: 0.0,
            consumption_lh: 0.0,
        }
    }
}

/// Aggregate result of one pipeline invocation.
#[derive(Debug, Clone, Serialize)]
pub struct SpecSheet {
    /// Render-facing specification rows (consolidated, display-ready).
    pub specs: ConsolidatedRecord,
    /// Keys dropped during consolidation, for host-side diagnostics.
    pub removed_fields: Vec<String>,
    pub classification: Classification,
    pub features: FeatureSet,
    pub efficiency: EfficiencyResult,
}
