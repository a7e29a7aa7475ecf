// Fuel-specific efficiency tier tables: consumption-per-kW ranges mapped to
// a label/color pair. Constants here, lookup logic in the scorer.
use serde::{Deserialize, Serialize};

use crate::model::FuelType;

/// Default kVA to kW conversion (typical power factor). A policy constant,
/// overridable through [`EfficiencyConfig::power_factor`].
pub const DEFAULT_POWER_FACTOR: f64 = 0.8;

/// One closed-open consumption-per-kW range. `max: None` means unbounded
/// (the lowest tier).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tier {
    pub min: f64,
    pub max: Option<f64>,
    pub color: String,
    pub label: String,
}

impl Tier {
    fn new(min: f64, max: Option<f64>, color: &str, label: &str) -> Self {
        Self {
            min,
            max,
            color: color.to_string(),
            label: label.to_string(),
        }
    }

    pub fn contains(&self, ratio: f64) -> bool {
        ratio >= self.min && self.max.is_none_or(|max| ratio < max)
    }
}

/// Ordered best-to-worst tier list for one fuel type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierTable {
    pub tiers: Vec<Tier>,
}

impl TierTable {
    /// First tier whose range contains `ratio`; ratios past every bound get
    /// the lowest tier. `None` only for an (invalid) empty table.
    pub fn tier_for(&self, ratio: f64) -> Option<&Tier> {
        self.tiers
            .iter()
            .find(|t| t.contains(ratio))
            .or_else(|| self.tiers.last())
    }

    /// Upper bound of the best tier: at or below it the score is pinned to
    /// the maximum percentage.
    pub fn excellent_max(&self) -> f64 {
        self.tiers.first().and_then(|t| t.max).unwrap_or(0.0)
    }

    /// Upper bound of the "normal" tier (second to last): at or above it the
    /// score is pinned to the minimum percentage.
    pub fn normal_max(&self) -> f64 {
        let idx = self.tiers.len().saturating_sub(2);
        self.tiers
            .get(idx)
            .and_then(|t| t.max)
            .unwrap_or_else(|| self.excellent_max())
    }
}

fn table(bounds: [f64; 4]) -> TierTable {
    let [excellent, very_good, good, normal] = bounds;
    TierTable {
        tiers: vec![
            Tier::new(0.0, Some(excellent), "#4CAF50", "Eficiencia Excelente"),
            Tier::new(excellent, Some(very_good), "#8BC34A", "Muy Buena Eficiencia"),
            Tier::new(very_good, Some(good), "#FFC107", "Buena Eficiencia"),
            Tier::new(good, Some(normal), "#FF9800", "Eficiencia Normal"),
            Tier::new(normal, None, "#F44336", "Eficiencia Baja"),
        ],
    }
}

/// Tier tables plus the kVA conversion factor. Diesel engines run leaner
/// than gasoline ones at the same ratio, so its bounds sit lower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EfficiencyConfig {
    #[serde(default = "default_power_factor")]
    pub power_factor: f64,
    #[serde(default = "default_nafta_table")]
    pub nafta: TierTable,
    #[serde(default = "default_diesel_table")]
    pub diesel: TierTable,
    #[serde(default = "default_gas_table")]
    pub gas: TierTable,
}

fn default_power_factor() -> f64 {
    DEFAULT_POWER_FACTOR
}

fn default_nafta_table() -> TierTable {
    table([0.35, 0.45, 0.6, 0.8])
}

fn default_diesel_table() -> TierTable {
    table([0.25, 0.35, 0.45, 0.6])
}

fn default_gas_table() -> TierTable {
    table([0.3, 0.4, 0.5, 0.65])
}

impl Default for EfficiencyConfig {
    fn default() -> Self {
        Self {
            power_factor: default_power_factor(),
            nafta: default_nafta_table(),
            diesel: default_diesel_table(),
            gas: default_gas_table(),
        }
    }
}

impl EfficiencyConfig {
    /// Fuels without their own table (electric, unknown) score against the
    /// gasoline table.
    pub fn table_for(&self, fuel: FuelType) -> &TierTable {
        match fuel {
            FuelType::Diesel => &self.diesel,
            FuelType::Gas => &self.gas,
            _ => &self.nafta,
        }
    }
}
