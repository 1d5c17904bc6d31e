use super::{Rule, RuleHit};
use crate::models::{AnticipaRisk, WeatherBundle};

/// Strong wind rule.
///
/// Triggers when any forecast day, today included, has a maximum wind
/// speed of 35 kph or more. This is the only rule whose window covers
/// index 0.
pub struct StrongWindRule;

const WIND_TRIGGER_KPH: f64 = 35.0;

impl Rule for StrongWindRule {
    fn id(&self) -> &'static str {
        "strong_wind"
    }

    fn name(&self) -> &'static str {
        "Strong Wind"
    }

    fn evaluate(&self, bundle: &WeatherBundle) -> Option<RuleHit> {
        let windy = bundle
            .days
            .iter()
            .any(|d| d.wind_max_kph >= WIND_TRIGGER_KPH);

        if !windy {
            return None;
        }

        Some(RuleHit {
            risks: vec![AnticipaRisk::StrongWind],
            actions: vec![
                "Remove loose branches near the plants",
                "Avoid staying in wooded areas while the wind lasts",
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::engine::test_support::calm_bundle;

    #[test]
    fn triggers_on_wind_today() {
        let mut bundle = calm_bundle(4);
        bundle.days[0].wind_max_kph = 40.0;
        let hit = StrongWindRule.evaluate(&bundle).unwrap();
        assert_eq!(hit.risks, vec![AnticipaRisk::StrongWind]);
    }

    #[test]
    fn triggers_on_any_day_index() {
        for i in 0..4 {
            let mut bundle = calm_bundle(4);
            bundle.days[i].wind_max_kph = 40.0;
            assert!(
                StrongWindRule.evaluate(&bundle).is_some(),
                "day {} should trigger",
                i
            );
        }
    }

    #[test]
    fn boundary_at_35_kph() {
        let mut bundle = calm_bundle(4);
        bundle.days[1].wind_max_kph = 35.0;
        assert!(StrongWindRule.evaluate(&bundle).is_some());

        bundle.days[1].wind_max_kph = 34.9;
        assert!(StrongWindRule.evaluate(&bundle).is_none());
    }

    #[test]
    fn no_forecast_no_trigger() {
        let bundle = calm_bundle(0);
        assert!(StrongWindRule.evaluate(&bundle).is_none());
    }
}
