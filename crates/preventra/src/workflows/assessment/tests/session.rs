use chrono::Utc;

use super::common::*;
use crate::workflows::assessment::domain::BasicInfoForm;
use crate::workflows::assessment::error::AssessmentError;
use crate::workflows::assessment::intake::ValidationError;
use crate::workflows::assessment::scoring::{
    AssessmentConfig, AssessmentEngine, DigitalEngagement, OutcomeMode, RiskCategory,
};
use crate::workflows::assessment::session::{AssessmentSession, AssessmentStage, SessionId};

fn session() -> AssessmentSession {
    AssessmentSession::new(SessionId("session-test".to_string()), Utc::now())
}

fn completed_session(engine: &AssessmentEngine) -> AssessmentSession {
    let mut session = session();
    session
        .submit_basics(engine, basics_form())
        .expect("basics accepted");
    session
        .submit_history(engine, healthy_history_form())
        .expect("history accepted");
    session
        .submit_digital(engine, enthusiast())
        .expect("digital answers accepted");
    session
}

#[test]
fn happy_path_walks_every_stage() {
    let engine = engine();
    let mut session = session();
    assert_eq!(session.stage, AssessmentStage::CollectingBasics);

    let stage = session
        .submit_basics(&engine, basics_form())
        .expect("basics accepted");
    assert_eq!(stage, AssessmentStage::CollectingHistory);
    assert!(session.risk.is_none());

    let stage = session
        .submit_history(&engine, healthy_history_form())
        .expect("history accepted");
    assert_eq!(stage, AssessmentStage::CollectingDigitalAnswers);
    let risk = session.risk.clone().expect("risk scored after history");
    assert_eq!(risk.category, RiskCategory::Low);

    let stage = session
        .submit_digital(&engine, enthusiast())
        .expect("digital answers accepted");
    assert_eq!(stage, AssessmentStage::ShowingOutcome);
    assert!(session.is_complete());
    assert!(session.completed_at.is_some());
    let outcome = session.outcome.clone().expect("outcome composed");
    assert!(outcome
        .message
        .starts_with("Your health risk is low, and your digital readiness is high."));
}

#[test]
fn rejected_basics_keep_stage_and_draft() {
    let engine = engine();
    let mut session = session();
    let mut form = basics_form();
    form.city = String::new();

    match session.submit_basics(&engine, form.clone()) {
        Err(AssessmentError::Validation(ValidationError::MissingFields { .. })) => {}
        other => panic!("expected missing fields, got {other:?}"),
    }

    assert_eq!(session.stage, AssessmentStage::CollectingBasics);
    assert_eq!(session.drafts.basics, Some(form));
    assert!(session.basics.is_none());
}

#[test]
fn incomplete_digital_answers_keep_stage() {
    let engine = engine();
    let mut session = session();
    session
        .submit_basics(&engine, basics_form())
        .expect("basics accepted");
    session
        .submit_history(&engine, healthy_history_form())
        .expect("history accepted");

    match session.submit_digital(&engine, DigitalEngagement::default()) {
        Err(AssessmentError::Incomplete(error)) => assert_eq!(error.unanswered.len(), 3),
        other => panic!("expected incomplete answers, got {other:?}"),
    }

    assert_eq!(session.stage, AssessmentStage::CollectingDigitalAnswers);
    assert!(session.outcome.is_none());
    assert!(session.risk.is_some());
}

#[test]
fn answers_for_a_later_step_are_refused() {
    let engine = engine();
    let mut session = session();

    match session.submit_history(&engine, healthy_history_form()) {
        Err(AssessmentError::OutOfOrder { expected, actual }) => {
            assert_eq!(expected, AssessmentStage::CollectingHistory);
            assert_eq!(actual, AssessmentStage::CollectingBasics);
        }
        other => panic!("expected out of order, got {other:?}"),
    }
    assert!(session.drafts.history.is_none());
}

#[test]
fn completed_session_refuses_new_answers() {
    let engine = engine();
    let mut session = completed_session(&engine);

    let error = session
        .submit_basics(&engine, BasicInfoForm::default())
        .expect_err("completed session is terminal");

    assert!(!error.is_input_error());
    assert_eq!(session.stage, AssessmentStage::ShowingOutcome);
}

#[test]
fn going_back_invalidates_downstream_results() {
    let engine = engine();
    let mut session = completed_session(&engine);

    let stage = session.go_back().expect("step back from outcome");
    assert_eq!(stage, AssessmentStage::CollectingDigitalAnswers);
    assert!(session.outcome.is_none());
    assert!(session.readiness.is_none());
    assert!(session.completed_at.is_none());
    assert!(session.risk.is_some());

    let stage = session.go_back().expect("step back to history");
    assert_eq!(stage, AssessmentStage::CollectingHistory);
    assert!(session.risk.is_none());
    assert!(session.profile.is_none());
    assert!(session.basics.is_some());
    assert_eq!(session.drafts.history, Some(healthy_history_form()));

    let stage = session.go_back().expect("step back to basics");
    assert_eq!(stage, AssessmentStage::CollectingBasics);
    assert!(session.basics.is_none());
    assert_eq!(session.drafts.basics, Some(basics_form()));

    assert_eq!(session.go_back(), Err(AssessmentError::AtFirstStage));
}

#[test]
fn resubmitting_after_going_back_rescores() {
    let engine = engine();
    let mut session = completed_session(&engine);
    session.go_back().expect("back to digital");
    session.go_back().expect("back to history");

    let mut history = healthy_history_form();
    history.stress_level = 9;
    history.sleep_quality = Default::default();
    session
        .submit_history(&engine, history)
        .expect("history accepted");

    assert_eq!(session.risk.as_ref().map(|risk| risk.score), Some(2));
}

#[test]
fn risk_only_view_hides_readiness() {
    let engine = AssessmentEngine::new(AssessmentConfig::risk_only());
    let session = completed_session(&engine);

    let view = session.view(OutcomeMode::RiskOnly);
    assert_eq!(view.risk_category, Some("LOW"));
    assert!(view.readiness_score.is_none());
    assert!(view.readiness_category.is_none());
    assert!(view
        .message
        .as_deref()
        .unwrap_or_default()
        .starts_with("You fall into the LOW risk category."));

    let combined = session.view(OutcomeMode::Combined);
    assert_eq!(combined.readiness_score, Some(8));
    assert_eq!(combined.step, "Final Assessment");
}
