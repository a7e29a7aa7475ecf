// Pipeline facade: normalize -> consolidate -> classify -> detect features
// -> score efficiency, in that fixed order.
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::PipelineConfig;
use crate::model::{RawRecord, SpecSheet};
use crate::{classifier, consolidator, efficiency, features, normalizer};

/// Stateless per-record pipeline. Each invocation is a pure function of its
/// input; instances can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Processes one raw record. Input of the wrong shape (anything that is
    /// not a JSON object) is coerced to an empty record; the result then
    /// carries the documented defaults throughout. Never fails.
    pub fn process(&self, raw: &Value) -> SpecSheet {
        let empty = RawRecord::new();
        let record = match raw.as_object() {
            Some(map) => map,
            None => {
                warn!("record is not an object, treating as empty");
                &empty
            }
        };
        self.process_record(record)
    }

    /// Same as [`Pipeline::process`] for an already-shaped record.
    pub fn process_record(&self, raw: &RawRecord) -> SpecSheet {
        let cleaned = normalizer::clean_record(raw);
        debug!(fields = cleaned.len(), "record cleaned");

        let (specs, removed_fields) = consolidator::consolidate(&cleaned);
        if !removed_fields.is_empty() {
            debug!(removed = removed_fields.len(), "fields consolidated");
        }

        // Classification and scoring read the cleaned record: it still
        // carries the free-text fields that consolidation strips.
        let classification = classifier::classify(
            &cleaned,
            &self.config.fuel,
            &self.config.product,
            &self.config.portability,
            self.config.efficiency.power_factor,
        );
        debug!(
            product = classification.product_type.as_str(),
            fuel = classification.fuel_type.as_str(),
            portable = classification.is_portable,
            "record classified"
        );

        let features = features::detect(&cleaned, &classification);
        let efficiency =
            efficiency::score(&cleaned, classification.fuel_type, &self.config.efficiency);
        debug!(
            badges = features.badges.len(),
            efficiency = efficiency.percentage,
            "record enriched"
        );

        SpecSheet {
            specs,
            removed_fields,
            classification,
            features,
            efficiency,
        }
    }
}
