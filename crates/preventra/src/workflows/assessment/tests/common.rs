use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::assessment::domain::{
    AlcoholUse, BasicInfo, BasicInfoForm, EducationLevel, ExerciseFrequency, Gender,
    HealthCondition, HealthHistory, HealthHistoryForm, IncomeLevel, Occupation, Profile,
    SleepQuality, SmokingStatus,
};
use crate::workflows::assessment::repository::{RepositoryError, SessionRepository};
use crate::workflows::assessment::scoring::{
    AssessmentConfig, AssessmentEngine, DigitalEngagement, MetricsCheckFrequency,
    TrackingAttitude, WearableUse,
};
use crate::workflows::assessment::session::{AssessmentSession, SessionId};
use crate::workflows::assessment::{assessment_router, AssessmentService};

pub(super) fn basics_form() -> BasicInfoForm {
    BasicInfoForm {
        age: 30,
        gender: Some(Gender::Female),
        height_cm: 165,
        weight_kg: 60,
        city: "Dubai".to_string(),
        occupation: Some(Occupation::Sedentary),
        income: Some(IncomeLevel::Middle),
        education: Some(EducationLevel::Graduate),
    }
}

pub(super) fn healthy_history_form() -> HealthHistoryForm {
    HealthHistoryForm {
        exercise_frequency: ExerciseFrequency::Regularly,
        sleep_hours: 8,
        sleep_quality: SleepQuality::Good,
        stress_level: 2,
        ..HealthHistoryForm::default()
    }
}

pub(super) fn basics(age: u8, height_cm: u16, weight_kg: u16) -> BasicInfo {
    BasicInfo {
        age,
        gender: Gender::Male,
        height_cm,
        weight_kg,
        city: "Abu Dhabi".to_string(),
        occupation: Occupation::ModerateActivity,
        income: IncomeLevel::Middle,
        education: None,
    }
}

pub(super) fn healthy_history() -> HealthHistory {
    HealthHistory {
        smoking: SmokingStatus::Never,
        alcohol: AlcoholUse::Never,
        health_conditions: BTreeSet::new(),
        medications: String::new(),
        family_history: BTreeSet::new(),
        exercise_frequency: ExerciseFrequency::Regularly,
        exercise_intensity: Default::default(),
        sleep_hours: 8,
        sleep_quality: SleepQuality::Good,
        stress_level: 2,
        diet: Default::default(),
        processed_food: Default::default(),
    }
}

/// Age 30, BMI 22.1, no lifestyle or condition flags.
pub(super) fn healthy_profile() -> Profile {
    Profile {
        basics: basics(30, 170, 64),
        history: healthy_history(),
    }
}

/// Age 55, BMI 31.1, current smoker, otherwise healthy.
pub(super) fn moderate_profile() -> Profile {
    let mut history = healthy_history();
    history.smoking = SmokingStatus::CurrentSmoker;
    history.sleep_hours = 7;
    history.stress_level = 3;
    Profile {
        basics: basics(55, 170, 90),
        history,
    }
}

/// Every risk row firing at its top tier.
pub(super) fn high_risk_profile() -> Profile {
    Profile {
        basics: basics(60, 170, 93),
        history: HealthHistory {
            smoking: SmokingStatus::CurrentSmoker,
            alcohol: AlcoholUse::Regular,
            health_conditions: BTreeSet::from([HealthCondition::Diabetes]),
            exercise_frequency: ExerciseFrequency::Never,
            sleep_hours: 5,
            sleep_quality: SleepQuality::Poor,
            stress_level: 8,
            ..healthy_history()
        },
    }
}

pub(super) fn digital(
    wearable_use: WearableUse,
    metrics_check_frequency: MetricsCheckFrequency,
    tracking_attitude: TrackingAttitude,
) -> DigitalEngagement {
    DigitalEngagement {
        wearable_use: Some(wearable_use),
        metrics_check_frequency: Some(metrics_check_frequency),
        tracking_attitude: Some(tracking_attitude),
    }
}

pub(super) fn enthusiast() -> DigitalEngagement {
    digital(
        WearableUse::Regular,
        MetricsCheckFrequency::Daily,
        TrackingAttitude::Enthusiast,
    )
}

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::new(AssessmentConfig::combined())
}

pub(super) fn build_service(
    config: AssessmentConfig,
) -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone(), config);
    (service, repository)
}

pub(super) fn router_with_service(service: AssessmentService<MemoryRepository>) -> axum::Router {
    assessment_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) sessions: Arc<Mutex<HashMap<SessionId, AssessmentSession>>>,
}

impl SessionRepository for MemoryRepository {
    fn insert(&self, session: AssessmentSession) -> Result<AssessmentSession, RepositoryError> {
        let mut guard = self.sessions.lock().expect("repository mutex poisoned");
        if guard.contains_key(&session.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(session.id.clone(), session.clone());
        Ok(session)
    }

    fn update(&self, session: AssessmentSession) -> Result<(), RepositoryError> {
        let mut guard = self.sessions.lock().expect("repository mutex poisoned");
        guard.insert(session.id.clone(), session);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<AssessmentSession>, RepositoryError> {
        let guard = self.sessions.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _session: AssessmentSession) -> Result<AssessmentSession, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _session: AssessmentSession) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<AssessmentSession>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
