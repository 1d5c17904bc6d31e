use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Agronomic hazard categories the evaluator may flag. `DryWindow` is an
/// opportunity rather than a hazard but shares the enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnticipaRisk {
    HumidityRain,
    StrongWind,
    ThermalStress,
    DryWindow,
    RustRisk,
}

impl AnticipaRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnticipaRisk::HumidityRain => "High humidity / rain approaching",
            AnticipaRisk::StrongWind => "Strong wind",
            AnticipaRisk::ThermalStress => "Thermal stress",
            AnticipaRisk::DryWindow => "Dry window ahead",
            AnticipaRisk::RustRisk => "Coffee leaf rust risk",
        }
    }
}

impl std::fmt::Display for AnticipaRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recommended response tied to one or more triggered risks.
///
/// Equality is by text content only. The id is a fresh v4 per instance,
/// meant for list diffing in a renderer; two actions with the same text
/// and different ids are still the same action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnticipaAction {
    pub id: Uuid,
    pub text: String,
}

impl AnticipaAction {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
        }
    }
}

impl PartialEq for AnticipaAction {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for AnticipaAction {}

/// Terminal result of one advisory evaluation. Recomputed from scratch on
/// every call, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryOutput {
    /// Triggered risks in first-trigger order (deterministic, no duplicates).
    pub risks: Vec<AnticipaRisk>,
    /// Recommended actions, deduplicated by text, first appearance kept.
    pub actions: Vec<AnticipaAction>,
    pub summary: String,
}

impl AdvisoryOutput {
    pub fn is_stable(&self) -> bool {
        self.risks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_equality_ignores_id() {
        let a = AnticipaAction::new("Inspect leaves");
        let b = AnticipaAction::new("Inspect leaves");
        assert_ne!(a.id, b.id);
        assert_eq!(a, b);
    }

    #[test]
    fn action_equality_is_by_text() {
        let a = AnticipaAction::new("Inspect leaves");
        let b = AnticipaAction::new("Collect fruit");
        assert_ne!(a, b);
    }

    #[test]
    fn risk_labels() {
        assert_eq!(AnticipaRisk::StrongWind.as_str(), "Strong wind");
        assert!(AnticipaRisk::RustRisk.as_str().contains("rust"));
        assert!(AnticipaRisk::DryWindow.as_str().contains("Dry"));
    }
}
