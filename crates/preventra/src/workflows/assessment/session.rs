use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{BasicInfo, BasicInfoForm, BmiStatus, HealthHistoryForm, Profile};
use super::error::AssessmentError;
use super::scoring::{
    AssessmentEngine, DigitalEngagement, OutcomeMode, Outcome, ReadinessResult, RiskResult,
};

/// Identifier wrapper for assessment sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Linear questionnaire stages. Risk scoring happens between history and digital answers
/// and is never observable as a stage of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStage {
    CollectingBasics,
    CollectingHistory,
    CollectingDigitalAnswers,
    ShowingOutcome,
}

impl AssessmentStage {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::CollectingBasics,
            Self::CollectingHistory,
            Self::CollectingDigitalAnswers,
            Self::ShowingOutcome,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CollectingBasics => "collecting_basics",
            Self::CollectingHistory => "collecting_history",
            Self::CollectingDigitalAnswers => "collecting_digital_answers",
            Self::ShowingOutcome => "showing_outcome",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::CollectingBasics => "Step 1: Basic Information",
            Self::CollectingHistory => "Step 2: Health History",
            Self::CollectingDigitalAnswers => "Step 3: Digital Health Readiness",
            Self::ShowingOutcome => "Final Assessment",
        }
    }

    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::CollectingBasics => None,
            Self::CollectingHistory => Some(Self::CollectingBasics),
            Self::CollectingDigitalAnswers => Some(Self::CollectingHistory),
            Self::ShowingOutcome => Some(Self::CollectingDigitalAnswers),
        }
    }
}

/// Last submitted raw answers per step, kept so a rejected step can be re-displayed as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDrafts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basics: Option<BasicInfoForm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<HealthHistoryForm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital: Option<DigitalEngagement>,
}

/// One respondent's walk through the questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSession {
    pub id: SessionId,
    pub stage: AssessmentStage,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub drafts: SessionDrafts,
    pub basics: Option<BasicInfo>,
    pub profile: Option<Profile>,
    pub risk: Option<RiskResult>,
    pub engagement: Option<DigitalEngagement>,
    pub readiness: Option<ReadinessResult>,
    pub outcome: Option<Outcome>,
}

impl AssessmentSession {
    pub fn new(id: SessionId, started_at: DateTime<Utc>) -> Self {
        Self {
            id,
            stage: AssessmentStage::CollectingBasics,
            started_at,
            completed_at: None,
            drafts: SessionDrafts::default(),
            basics: None,
            profile: None,
            risk: None,
            engagement: None,
            readiness: None,
            outcome: None,
        }
    }

    pub fn submit_basics(
        &mut self,
        engine: &AssessmentEngine,
        form: BasicInfoForm,
    ) -> Result<AssessmentStage, AssessmentError> {
        self.expect_stage(AssessmentStage::CollectingBasics)?;
        self.drafts.basics = Some(form.clone());

        let basics = engine.guard().basics_from_form(form)?;
        self.basics = Some(basics);
        self.stage = AssessmentStage::CollectingHistory;
        Ok(self.stage)
    }

    /// Accepts step two, then scores risk before asking the digital questions.
    pub fn submit_history(
        &mut self,
        engine: &AssessmentEngine,
        form: HealthHistoryForm,
    ) -> Result<AssessmentStage, AssessmentError> {
        self.expect_stage(AssessmentStage::CollectingHistory)?;
        self.drafts.history = Some(form.clone());

        let history = engine.guard().history_from_form(form)?;
        let basics = self.basics.clone().ok_or(AssessmentError::OutOfOrder {
            expected: AssessmentStage::CollectingBasics,
            actual: self.stage,
        })?;

        let profile = Profile { basics, history };
        self.risk = Some(engine.score_risk(&profile));
        self.profile = Some(profile);
        self.stage = AssessmentStage::CollectingDigitalAnswers;
        Ok(self.stage)
    }

    pub fn submit_digital(
        &mut self,
        engine: &AssessmentEngine,
        engagement: DigitalEngagement,
    ) -> Result<AssessmentStage, AssessmentError> {
        self.expect_stage(AssessmentStage::CollectingDigitalAnswers)?;
        self.drafts.digital = Some(engagement);

        let readiness = engine.score_readiness(&engagement)?;
        let risk_category = self
            .risk
            .as_ref()
            .map(|risk| risk.category)
            .ok_or(AssessmentError::OutOfOrder {
                expected: AssessmentStage::CollectingHistory,
                actual: self.stage,
            })?;

        self.outcome = Some(engine.compose_outcome(risk_category, Some(readiness.category)));
        self.engagement = Some(engagement);
        self.readiness = Some(readiness);
        self.completed_at = Some(Utc::now());
        self.stage = AssessmentStage::ShowingOutcome;
        Ok(self.stage)
    }

    /// Steps back once. Everything derived from the re-entered step onward is discarded so
    /// the step has to pass validation again; drafts are kept for re-display.
    pub fn go_back(&mut self) -> Result<AssessmentStage, AssessmentError> {
        let previous = self.stage.previous().ok_or(AssessmentError::AtFirstStage)?;

        self.outcome = None;
        self.readiness = None;
        self.engagement = None;
        self.completed_at = None;
        if matches!(
            previous,
            AssessmentStage::CollectingBasics | AssessmentStage::CollectingHistory
        ) {
            self.risk = None;
            self.profile = None;
        }
        if previous == AssessmentStage::CollectingBasics {
            self.basics = None;
        }

        self.stage = previous;
        Ok(self.stage)
    }

    fn expect_stage(&self, expected: AssessmentStage) -> Result<(), AssessmentError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(AssessmentError::OutOfOrder {
                expected,
                actual: self.stage,
            })
        }
    }

    pub fn is_complete(&self) -> bool {
        self.stage == AssessmentStage::ShowingOutcome
    }

    pub fn view(&self, mode: OutcomeMode) -> SessionView {
        let visible_readiness = match mode {
            OutcomeMode::Combined => self.readiness,
            OutcomeMode::RiskOnly => None,
        };

        SessionView {
            session_id: self.id.clone(),
            stage: self.stage.label(),
            step: self.stage.title(),
            started_at: self.started_at,
            completed_at: self.completed_at,
            bmi: self.basics.as_ref().map(|basics| basics.bmi().value()),
            bmi_status: self.basics.as_ref().map(BasicInfo::bmi_status),
            risk_score: self.risk.as_ref().map(|risk| risk.score),
            risk_category: self.risk.as_ref().map(|risk| risk.category.label()),
            readiness_score: visible_readiness.map(|readiness| readiness.score),
            readiness_category: visible_readiness.map(|readiness| readiness.category.label()),
            message: self.outcome.as_ref().map(|outcome| outcome.message.clone()),
            drafts: self.drafts.clone(),
        }
    }
}

/// Sanitized projection of a session for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub stage: &'static str,
    pub step: &'static str,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi_status: Option<BmiStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_category: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_score: Option<i8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_category: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub drafts: SessionDrafts,
}
