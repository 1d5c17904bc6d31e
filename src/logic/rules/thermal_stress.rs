use super::{Rule, RuleHit};
use crate::models::{AnticipaRisk, WeatherBundle};

/// Thermal stress rule.
///
/// Conditions (AND, current reading only):
/// - Temperature >= 34°C
/// - Relative humidity < 50%
///
/// Hot dry air stresses both the plants and anyone working the plot;
/// the forecast plays no part here.
pub struct ThermalStressRule;

const TEMP_TRIGGER_C: f64 = 34.0;
const HUMIDITY_CEILING_PCT: u8 = 50;

impl Rule for ThermalStressRule {
    fn id(&self) -> &'static str {
        "thermal_stress"
    }

    fn name(&self) -> &'static str {
        "Thermal Stress"
    }

    fn evaluate(&self, bundle: &WeatherBundle) -> Option<RuleHit> {
        let hot = bundle.current.temp_c >= TEMP_TRIGGER_C;
        let dry = bundle.current.humidity_pct < HUMIDITY_CEILING_PCT;

        if !(hot && dry) {
            return None;
        }

        Some(RuleHit {
            risks: vec![AnticipaRisk::ThermalStress],
            actions: vec![
                "Move harvested grain to natural shade",
                "Schedule outdoor work for the cooler hours of the day",
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::engine::test_support::calm_bundle;

    #[test]
    fn triggers_on_hot_dry_current() {
        let mut bundle = calm_bundle(4);
        bundle.current.temp_c = 36.0;
        bundle.current.humidity_pct = 30;
        let hit = ThermalStressRule.evaluate(&bundle).unwrap();
        assert_eq!(hit.risks, vec![AnticipaRisk::ThermalStress]);
        assert_eq!(hit.actions.len(), 2);
    }

    #[test]
    fn requires_both_conditions() {
        let mut bundle = calm_bundle(4);
        bundle.current.temp_c = 36.0;
        bundle.current.humidity_pct = 50;
        assert!(ThermalStressRule.evaluate(&bundle).is_none());

        bundle.current.temp_c = 33.9;
        bundle.current.humidity_pct = 30;
        assert!(ThermalStressRule.evaluate(&bundle).is_none());
    }

    #[test]
    fn boundary_at_34_degrees() {
        let mut bundle = calm_bundle(4);
        bundle.current.temp_c = 34.0;
        bundle.current.humidity_pct = 49;
        assert!(ThermalStressRule.evaluate(&bundle).is_some());
    }

    #[test]
    fn independent_of_forecast() {
        let mut bundle = calm_bundle(0);
        bundle.current.temp_c = 38.0;
        bundle.current.humidity_pct = 20;
        assert!(ThermalStressRule.evaluate(&bundle).is_some());
    }
}
