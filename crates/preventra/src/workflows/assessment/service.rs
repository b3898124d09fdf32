use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{BasicInfoForm, HealthHistoryForm};
use super::error::AssessmentError;
use super::repository::{RepositoryError, SessionRepository};
use super::scoring::{
    AssessmentConfig, AssessmentEngine, AssessmentReport, AssessmentRequest, DigitalEngagement,
};
use super::session::{AssessmentSession, AssessmentStage, SessionId};

/// Service composing the scoring engine with session storage.
pub struct AssessmentService<R> {
    engine: Arc<AssessmentEngine>,
    repository: Arc<R>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: AssessmentConfig) -> Self {
        Self {
            engine: Arc::new(AssessmentEngine::new(config)),
            repository,
        }
    }

    pub fn config(&self) -> &AssessmentConfig {
        self.engine.config()
    }

    /// Open a fresh session at the first step.
    pub fn start(&self) -> Result<AssessmentSession, AssessmentServiceError> {
        let session = AssessmentSession::new(next_session_id(), Utc::now());
        let stored = self.repository.insert(session)?;
        info!(session = %stored.id.0, "assessment session started");
        Ok(stored)
    }

    pub fn submit_basics(
        &self,
        id: &SessionId,
        form: BasicInfoForm,
    ) -> Result<AssessmentSession, AssessmentServiceError> {
        self.apply(id, |session, engine| session.submit_basics(engine, form))
    }

    pub fn submit_history(
        &self,
        id: &SessionId,
        form: HealthHistoryForm,
    ) -> Result<AssessmentSession, AssessmentServiceError> {
        self.apply(id, |session, engine| session.submit_history(engine, form))
    }

    pub fn submit_digital(
        &self,
        id: &SessionId,
        engagement: DigitalEngagement,
    ) -> Result<AssessmentSession, AssessmentServiceError> {
        self.apply(id, |session, engine| session.submit_digital(engine, engagement))
    }

    pub fn go_back(&self, id: &SessionId) -> Result<AssessmentSession, AssessmentServiceError> {
        self.apply(id, |session, _| session.go_back())
    }

    /// Fetch a session for API responses.
    pub fn get(&self, id: &SessionId) -> Result<AssessmentSession, AssessmentServiceError> {
        let session = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(session)
    }

    /// Score a complete questionnaire without opening a session.
    pub fn assess(
        &self,
        request: AssessmentRequest,
    ) -> Result<AssessmentReport, AssessmentServiceError> {
        let report = self.engine.assess(request)?;
        info!(
            risk_score = report.risk.score,
            risk_category = report.risk.category.label(),
            "one-shot assessment completed"
        );
        Ok(report)
    }

    /// Runs a step transition and persists the session whatever the result, so a rejected
    /// step keeps its draft answers.
    fn apply<F>(
        &self,
        id: &SessionId,
        transition: F,
    ) -> Result<AssessmentSession, AssessmentServiceError>
    where
        F: FnOnce(
            &mut AssessmentSession,
            &AssessmentEngine,
        ) -> Result<AssessmentStage, AssessmentError>,
    {
        let mut session = self.get(id)?;
        let from = session.stage;
        let result = transition(&mut session, self.engine.as_ref());
        self.repository.update(session.clone())?;

        match result {
            Ok(to) => {
                info!(
                    session = %id.0,
                    from = from.label(),
                    to = to.label(),
                    "assessment step accepted"
                );
                Ok(session)
            }
            Err(error) => {
                warn!(session = %id.0, stage = from.label(), %error, "assessment step rejected");
                Err(AssessmentServiceError::Rejected {
                    error,
                    session: Box::new(session),
                })
            }
        }
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    /// The step was refused; `session` is the persisted state including the retained draft.
    #[error("{error}")]
    Rejected {
        error: AssessmentError,
        session: Box<AssessmentSession>,
    },
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
