use super::{Rule, RuleHit};
use crate::models::{AnticipaRisk, WeatherBundle};

/// Dry window rule. Unlike the others this flags an opportunity: a
/// stretch of days suitable for harvest-drying work.
///
/// Conditions (AND, over forecast days 1-3, today excluded):
/// - ALL days in the window have rain total <= 3mm
/// - At least 2 days in the window have max wind under 30 kph
///
/// The rain clause is a universal quantifier and is vacuously true over
/// an empty or partial window; the wind clause is a count threshold and
/// cannot reach 2 when fewer than 2 days exist. The count clause is what
/// keeps this rule from firing on sparse data.
pub struct DryWindowRule;

const RAIN_CEILING_MM: f64 = 3.0;
const WIND_CEILING_KPH: f64 = 30.0;
const MIN_CALM_DAYS: usize = 2;

impl Rule for DryWindowRule {
    fn id(&self) -> &'static str {
        "dry_window"
    }

    fn name(&self) -> &'static str {
        "Dry Window"
    }

    fn evaluate(&self, bundle: &WeatherBundle) -> Option<RuleHit> {
        let window = bundle.day_window(1, 3);

        let low_rain = window.iter().all(|d| d.rain_sum_mm <= RAIN_CEILING_MM);
        let calm_days = window
            .iter()
            .filter(|d| d.wind_max_kph < WIND_CEILING_KPH)
            .count();

        if !(low_rain && calm_days >= MIN_CALM_DAYS) {
            return None;
        }

        Some(RuleHit {
            risks: vec![AnticipaRisk::DryWindow],
            actions: vec![
                "Schedule cutting and laying out for drying",
                "Keep the natural drying paths clear",
            ],
        })
    }
}
