//! aquawise-core - Core library for AquaWise
//!
//! Provides the usage models, mock data synthesis, scoring and static
//! content behind the AquaWise API.

pub mod error;
pub mod models;
pub mod random;
pub mod scoring;
pub mod synth;
pub mod tips;

pub use error::CoreError;
pub use models::{
    HistoricalEntry, PredictionRequest, PredictionResult, SavingsSummary, UsageRecord,
};
pub use random::{Entropy, RandomSource, ScriptedSource};
pub use scoring::{average_usage, predict_usage, round2, water_savings};
pub use synth::{generate_water_data, leak_alerts};
pub use tips::{PLUMBING_TIPS, plumbing_tips};
