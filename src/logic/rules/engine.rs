use super::{
    dry_window::DryWindowRule, humidity_rain::HumidityRainRule, strong_wind::StrongWindRule,
    thermal_stress::ThermalStressRule, Rule,
};
use crate::models::{AdvisoryOutput, AnticipaAction, AnticipaRisk, WeatherBundle};

pub const STABLE_SUMMARY: &str = "Conditions stable, no alerts for your plot.";

/// Evaluates every advisory rule against a weather bundle and aggregates
/// the hits into one deduplicated output. Pure and total: the same bundle
/// always yields the same risks, actions and summary, and a degenerate
/// bundle (empty forecast) yields a well-formed stable result.
pub struct AdvisoryEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl AdvisoryEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(HumidityRainRule),
            Box::new(StrongWindRule),
            Box::new(ThermalStressRule),
            Box::new(DryWindowRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, bundle: &WeatherBundle) -> AdvisoryOutput {
        let mut risks: Vec<AnticipaRisk> = Vec::new();
        let mut actions: Vec<AnticipaAction> = Vec::new();

        for rule in &self.rules {
            let Some(hit) = rule.evaluate(bundle) else {
                continue;
            };
            tracing::debug!(rule = rule.id(), "advisory rule triggered");

            for risk in hit.risks {
                if !risks.contains(&risk) {
                    risks.push(risk);
                }
            }
            for text in hit.actions {
                if !actions.iter().any(|a| a.text == text) {
                    actions.push(AnticipaAction::new(text));
                }
            }
        }

        let summary = if risks.is_empty() {
            STABLE_SUMMARY.to_string()
        } else {
            format!("{} risk(s) detected for the coming days.", risks.len())
        };

        AdvisoryOutput {
            risks,
            actions,
            summary,
        }
    }

    pub fn evaluate_rule(&self, rule_id: &str, bundle: &WeatherBundle) -> Option<super::RuleHit> {
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .and_then(|rule| rule.evaluate(bundle))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new()
    }
}
