mod config;
mod outcome;
mod readiness;
mod risk;

pub use config::{AssessmentConfig, FieldPolicy, OutcomeMode};
pub use outcome::{compose_outcome, Outcome};
pub use readiness::{
    score_readiness, DigitalEngagement, DigitalQuestion, IncompleteInputError,
    MetricsCheckFrequency, ReadinessCategory, ReadinessResult, TrackingAttitude, WearableUse,
};
pub use risk::{score_risk, RiskCategory, RiskComponent, RiskFactor, RiskResult};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{BasicInfoForm, Bmi, BmiStatus, HealthHistoryForm, Profile};
use super::error::AssessmentError;
use super::intake::{IntakeGuard, ValidationError};

/// Stateless engine applying one questionnaire variant to submitted answers.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    config: AssessmentConfig,
    guard: IntakeGuard,
}

impl AssessmentEngine {
    pub fn new(config: AssessmentConfig) -> Self {
        Self {
            guard: IntakeGuard::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    pub fn guard(&self) -> &IntakeGuard {
        &self.guard
    }

    pub fn validate_profile(
        &self,
        basics: BasicInfoForm,
        history: HealthHistoryForm,
    ) -> Result<Profile, ValidationError> {
        let basics = self.guard.basics_from_form(basics)?;
        let history = self.guard.history_from_form(history)?;
        Ok(Profile { basics, history })
    }

    pub fn score_risk(&self, profile: &Profile) -> RiskResult {
        let result = score_risk(profile);
        debug!(
            score = result.score,
            category = result.category.label(),
            "health risk scored"
        );
        result
    }

    pub fn score_readiness(
        &self,
        engagement: &DigitalEngagement,
    ) -> Result<ReadinessResult, IncompleteInputError> {
        let result = score_readiness(engagement)?;
        debug!(
            score = result.score,
            category = result.category.label(),
            "digital readiness scored"
        );
        Ok(result)
    }

    pub fn compose_outcome(
        &self,
        risk: RiskCategory,
        readiness: Option<ReadinessCategory>,
    ) -> Outcome {
        compose_outcome(self.config.outcome_mode, risk, readiness)
    }

    /// Readiness as presentation may show it; risk-only variants never surface it.
    pub fn visible_readiness(&self, readiness: ReadinessResult) -> Option<ReadinessResult> {
        match self.config.outcome_mode {
            OutcomeMode::Combined => Some(readiness),
            OutcomeMode::RiskOnly => None,
        }
    }

    /// Runs every step in one call for callers that collect the whole questionnaire at once.
    pub fn assess(&self, request: AssessmentRequest) -> Result<AssessmentReport, AssessmentError> {
        let AssessmentRequest {
            basics,
            history,
            digital,
        } = request;

        let profile = self.validate_profile(basics, history)?;
        let risk = self.score_risk(&profile);
        let readiness = self.score_readiness(&digital)?;
        let outcome = self.compose_outcome(risk.category, Some(readiness.category));

        let bmi = profile.bmi();
        Ok(AssessmentReport {
            bmi,
            bmi_status: bmi.status(),
            risk,
            readiness: self.visible_readiness(readiness),
            outcome,
        })
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new(AssessmentConfig::default())
    }
}

/// Whole questionnaire submitted in one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentRequest {
    pub basics: BasicInfoForm,
    pub history: HealthHistoryForm,
    pub digital: DigitalEngagement,
}

/// Structured result for presentation; formatting is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub bmi: Bmi,
    pub bmi_status: BmiStatus,
    pub risk: RiskResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness: Option<ReadinessResult>,
    pub outcome: Outcome,
}
