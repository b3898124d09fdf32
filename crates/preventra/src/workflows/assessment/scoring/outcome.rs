use serde::{Deserialize, Serialize};

use super::config::OutcomeMode;
use super::readiness::ReadinessCategory;
use super::risk::RiskCategory;

/// Narrative handed to presentation alongside the scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub mode: OutcomeMode,
    pub message: String,
}

/// Pure lookup; readiness is ignored in risk-only mode and, when absent, combined mode
/// falls back to the risk-only narrative.
pub fn compose_outcome(
    mode: OutcomeMode,
    risk: RiskCategory,
    readiness: Option<ReadinessCategory>,
) -> Outcome {
    let message = match (mode, readiness) {
        (OutcomeMode::Combined, Some(readiness)) => combined_message(risk, readiness),
        (OutcomeMode::Combined, None) | (OutcomeMode::RiskOnly, _) => risk_only_message(risk),
    };

    Outcome {
        mode,
        message: message.to_string(),
    }
}

pub(crate) const fn risk_only_message(risk: RiskCategory) -> &'static str {
    match risk {
        RiskCategory::High => "You fall into the HIGH risk category. You are at high risk - immediate attention to your health is recommended. You should begin lifestyle changes and regular monitoring.",
        RiskCategory::Moderate => "You fall into the MODERATE risk category. You should pay attention and take care of your health. Improve lifestyle habits and keep monitoring your health.",
        RiskCategory::Low => "You fall into the LOW risk category. You are healthy - keep up the good habits! Maintain your current lifestyle!",
    }
}

pub(crate) const fn combined_message(
    risk: RiskCategory,
    readiness: ReadinessCategory,
) -> &'static str {
    match (risk, readiness) {
        (RiskCategory::High, ReadinessCategory::High) => "Your health risk is high, and your digital readiness is high. This means you are open to using technology and tracking to improve your lifestyle. Stay consistent with tracking health metrics and continue making positive choices.",
        (RiskCategory::High, ReadinessCategory::Med) => "Your health risk is high, and your digital readiness is moderate. Try to improve basic daily routines consistently. You may try digital tracking later if you become more comfortable with it.",
        (RiskCategory::High, ReadinessCategory::Low) => "Your health risk is high, but your digital readiness is low. Try to focus on a few simple lifestyle changes first. You can slowly explore digital tracking tools in the future if comfortable.",
        (RiskCategory::Moderate, ReadinessCategory::High) => "Your health risk is moderate, and your digital readiness is high. You are well suited for using technology to understand your habits better. Tracking may help prevent your risk from increasing over time.",
        (RiskCategory::Moderate, ReadinessCategory::Med) => "Your health risk is moderate, and your digital readiness is moderate. Focus on strengthening day-to-day lifestyle habits. Digital tracking can be introduced gradually if you find it useful.",
        (RiskCategory::Moderate, ReadinessCategory::Low) => "Your health risk is moderate, and your digital readiness is low. Focus on building healthier daily habits such as better sleep, regular activity, and balanced diet. Digital tracking can always be added later if needed.",
        (RiskCategory::Low, ReadinessCategory::High) => "Your health risk is low, and your digital readiness is high. This is a great profile for preventive lifestyle monitoring. Keep using your interest in tracking to maintain your current healthy baseline.",
        (RiskCategory::Low, ReadinessCategory::Med) => "Your health risk is low, and your digital readiness is moderate. You can continue your current habits comfortably. You may explore simple digital tracking later if you feel the need.",
        (RiskCategory::Low, ReadinessCategory::Low) => "Your health risk is low, and your digital readiness is low. You are doing fine with your current habits. Tracking your health is optional — but small efforts can still support long-term wellness.",
    }
}
