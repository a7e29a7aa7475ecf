//! Normalization, classification and efficiency scoring for heterogeneous
//! equipment spec-sheet records (generators, pumps, compressors, ...).
//!
//! The crate is a pure library: one record in, one [`SpecSheet`] out, no
//! I/O, no shared state, no failure modes beyond degrading to documented
//! defaults. Rendering, copy generation and data acquisition live in the
//! callers.

pub mod classifier;
pub mod config;
pub mod consolidator;
pub mod display;
pub mod efficiency;
pub mod features;
pub mod model;
pub mod normalizer;
pub mod numeric;
pub mod pipeline;

pub use config::{ConfigError, PipelineConfig, load_config};
pub use model::{
    Badge, Classification, CleanedRecord, ConsolidatedRecord, EfficiencyResult, FeatureSet,
    FuelType, MAX_BADGES, ProductType, RawRecord, SpecSheet,
};
pub use pipeline::Pipeline;
