//! Health risk questionnaire: intake validation, scoring, outcome narratives and the
//! step-by-step session workflow around them.
//!
//! The scoring functions are pure and can be called directly; the session and service layers
//! only thread validated answers between them.

pub mod domain;
mod error;
pub mod intake;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use domain::{
    AlcoholSeverity, AlcoholUse, BasicInfo, BasicInfoForm, Bmi, BmiStatus, DietType,
    EducationLevel, ExerciseFrequency, ExerciseIntensity, FamilyCondition, Gender, HealthCondition,
    HealthHistory, HealthHistoryForm, IncomeLevel, Occupation, ProcessedFoodIntake, Profile,
    SleepQuality, SmokingStatus,
};
pub use error::AssessmentError;
pub use intake::{IntakeGuard, RangedField, RequiredField, ValidationError};
pub use repository::{RepositoryError, SessionRepository};
pub use router::assessment_router;
pub use scoring::{
    compose_outcome, score_readiness, score_risk, AssessmentConfig, AssessmentEngine,
    AssessmentReport, AssessmentRequest, DigitalEngagement, DigitalQuestion, FieldPolicy,
    IncompleteInputError, MetricsCheckFrequency, Outcome, OutcomeMode, ReadinessCategory,
    ReadinessResult, RiskCategory, RiskComponent, RiskFactor, RiskResult, TrackingAttitude,
    WearableUse,
};
pub use service::{AssessmentService, AssessmentServiceError};
pub use session::{AssessmentSession, AssessmentStage, SessionDrafts, SessionId, SessionView};
