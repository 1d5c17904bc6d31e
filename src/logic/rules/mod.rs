pub mod dry_window;
pub mod engine;
pub mod humidity_rain;
pub mod strong_wind;
pub mod thermal_stress;

pub use engine::AdvisoryEngine;

use crate::models::{AnticipaRisk, WeatherBundle};
use serde::Serialize;

/// What a triggered rule contributes to the advisory: one or more risk
/// tags plus the texts of its recommended actions. The engine owns
/// deduplication; a rule just reports what it saw.
#[derive(Debug, Clone, Serialize)]
pub struct RuleHit {
    pub risks: Vec<AnticipaRisk>,
    pub actions: Vec<&'static str>,
}

/// Trait for advisory rules
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule against a weather bundle. Rules are total: a
    /// bundle with too few forecast days for the rule's window means
    /// "no hit", never an error.
    fn evaluate(&self, bundle: &WeatherBundle) -> Option<RuleHit>;
}
