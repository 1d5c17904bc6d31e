use super::{Rule, RuleHit};
use crate::models::{AnticipaRisk, WeatherBundle};

/// Humidity / rain-approaching rule.
///
/// Conditions (OR):
/// - Current relative humidity >= 80%
/// - Any of the next two forecast days (indices 1-2, today excluded)
///   has rain total >= 5mm
///
/// Fires two risk tags together: high humidity and rain are also the
/// conditions under which coffee leaf rust (Hemileia vastatrix) spreads,
/// so `RustRisk` always accompanies `HumidityRain`.
///
/// With fewer than 3 forecast days the rain window shrinks to whatever is
/// available; an empty window cannot satisfy the rain clause, but the
/// humidity clause alone can still trigger.
pub struct HumidityRainRule;

const HUMIDITY_TRIGGER_PCT: u8 = 80;
const RAIN_TRIGGER_MM: f64 = 5.0;

impl Rule for HumidityRainRule {
    fn id(&self) -> &'static str {
        "humidity_rain"
    }

    fn name(&self) -> &'static str {
        "Humidity / Rain Approaching"
    }

    fn evaluate(&self, bundle: &WeatherBundle) -> Option<RuleHit> {
        let humid_now = bundle.current.humidity_pct >= HUMIDITY_TRIGGER_PCT;
        let rain_ahead = bundle
            .day_window(1, 2)
            .iter()
            .any(|d| d.rain_sum_mm >= RAIN_TRIGGER_MM);

        if !humid_now && !rain_ahead {
            return None;
        }

        Some(RuleHit {
            risks: vec![AnticipaRisk::HumidityRain, AnticipaRisk::RustRisk],
            actions: vec![
                "Inspect leaf undersides for rust and mildew spots",
                "Collect fallen fruit from the ground before the rain arrives",
            ],
        })
    }
}
