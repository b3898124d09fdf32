use metrics_exporter_prometheus::PrometheusHandle;
use preventra::workflows::assessment::{
    AssessmentRequest, AssessmentSession, BasicInfoForm, DigitalEngagement, EducationLevel, Gender,
    HealthHistoryForm, IncomeLevel, Occupation, OutcomeMode, RepositoryError, SessionId,
    SessionRepository,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    sessions: Arc<Mutex<HashMap<SessionId, AssessmentSession>>>,
}

impl SessionRepository for InMemorySessionRepository {
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
        if guard.contains_key(&session.id) {
            guard.insert(session.id.clone(), session);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<AssessmentSession>, RepositoryError> {
        let guard = self.sessions.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Free-text numeric entry; anything that is not a whole non-negative number reads as
/// "not entered".
pub(crate) fn parse_measurement(raw: &str) -> u16 {
    raw.trim().parse::<u16>().unwrap_or(0)
}

pub(crate) fn parse_outcome_mode(raw: &str) -> Result<OutcomeMode, String> {
    raw.parse()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMeasurement {
    Number(i64),
    Fractional(f64),
    Text(String),
}

fn deserialize_measurement<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<RawMeasurement>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawMeasurement::Number(value)) => u16::try_from(value).unwrap_or(0),
        Some(RawMeasurement::Text(text)) => parse_measurement(&text),
        Some(RawMeasurement::Fractional(_)) | None => 0,
    })
}

/// Answers file consumed by the `assess` command. Measurements may be typed as text the way
/// respondents enter them.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct QuestionnaireAnswers {
    #[serde(deserialize_with = "deserialize_measurement")]
    pub(crate) age: u16,
    pub(crate) gender: Option<Gender>,
    #[serde(deserialize_with = "deserialize_measurement")]
    pub(crate) height_cm: u16,
    #[serde(deserialize_with = "deserialize_measurement")]
    pub(crate) weight_kg: u16,
    pub(crate) city: String,
    pub(crate) occupation: Option<Occupation>,
    pub(crate) income: Option<IncomeLevel>,
    pub(crate) education: Option<EducationLevel>,
    pub(crate) history: HealthHistoryForm,
    pub(crate) digital: DigitalEngagement,
}

impl From<QuestionnaireAnswers> for AssessmentRequest {
    fn from(answers: QuestionnaireAnswers) -> Self {
        AssessmentRequest {
            basics: BasicInfoForm {
                age: answers.age,
                gender: answers.gender,
                height_cm: answers.height_cm,
                weight_kg: answers.weight_kg,
                city: answers.city,
                occupation: answers.occupation,
                income: answers.income,
                education: answers.education,
            },
            history: answers.history,
            digital: answers.digital,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use preventra::workflows::assessment::{SmokingStatus, WearableUse};

    #[test]
    fn measurements_fall_back_to_not_entered() {
        assert_eq!(parse_measurement(" 35 "), 35);
        assert_eq!(parse_measurement(""), 0);
        assert_eq!(parse_measurement("thirty"), 0);
        assert_eq!(parse_measurement("-4"), 0);
        assert_eq!(parse_measurement("170.5"), 0);
    }

    #[test]
    fn answers_accept_text_and_numeric_measurements() {
        let answers: QuestionnaireAnswers = serde_json::from_str(
            r#"{
                "age": "55",
                "gender": "female",
                "height_cm": 170,
                "weight_kg": "ninety",
                "city": "Dubai",
                "history": { "smoking": "current_smoker" },
                "digital": { "wearable_use": "regular" }
            }"#,
        )
        .expect("answers parse");

        let request = AssessmentRequest::from(answers);

        assert_eq!(request.basics.age, 55);
        assert_eq!(request.basics.height_cm, 170);
        assert_eq!(request.basics.weight_kg, 0);
        assert_eq!(request.history.smoking, SmokingStatus::CurrentSmoker);
        assert_eq!(request.history.sleep_hours, 7);
        assert_eq!(request.digital.wearable_use, Some(WearableUse::Regular));
        assert!(request.digital.tracking_attitude.is_none());
    }

    #[test]
    fn repository_rejects_updates_for_unknown_sessions() {
        let repository = InMemorySessionRepository::default();
        let session = AssessmentSession::new(SessionId("session-x".to_string()), chrono::Utc::now());

        assert!(matches!(
            repository.update(session.clone()),
            Err(RepositoryError::NotFound)
        ));
        repository.insert(session.clone()).expect("insert succeeds");
        assert!(matches!(
            repository.insert(session),
            Err(RepositoryError::Conflict)
        ));
    }

    #[test]
    fn outcome_mode_flag_accepts_dashed_names() {
        assert_eq!(parse_outcome_mode("risk-only"), Ok(OutcomeMode::RiskOnly));
        assert!(parse_outcome_mode("everything").is_err());
    }
}
