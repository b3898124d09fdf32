use super::common::*;
use crate::workflows::assessment::scoring::{
    score_readiness, DigitalEngagement, DigitalQuestion, MetricsCheckFrequency, ReadinessCategory,
    TrackingAttitude, WearableUse,
};

#[test]
fn fully_engaged_respondent_scores_eight() {
    let result = score_readiness(&enthusiast()).expect("all questions answered");

    assert_eq!(result.score, 8);
    assert_eq!(result.category, ReadinessCategory::High);
}

#[test]
fn disengaged_respondent_scores_minus_three() {
    let engagement = digital(
        WearableUse::NotInterested,
        MetricsCheckFrequency::Never,
        TrackingAttitude::Skeptic,
    );

    let result = score_readiness(&engagement).expect("all questions answered");

    assert_eq!(result.score, -3);
    assert_eq!(result.category, ReadinessCategory::Low);
}

#[test]
fn middle_answers_land_in_med() {
    let engagement = digital(
        WearableUse::Regular,
        MetricsCheckFrequency::FewPerWeek,
        TrackingAttitude::Curious,
    );

    let result = score_readiness(&engagement).expect("all questions answered");

    assert_eq!(result.score, 4);
    assert_eq!(result.category, ReadinessCategory::Med);
}

#[test]
fn category_thresholds_are_inclusive_at_three_and_six() {
    assert_eq!(ReadinessCategory::from_score(-3), ReadinessCategory::Low);
    assert_eq!(ReadinessCategory::from_score(3), ReadinessCategory::Low);
    assert_eq!(ReadinessCategory::from_score(4), ReadinessCategory::Med);
    assert_eq!(ReadinessCategory::from_score(6), ReadinessCategory::Med);
    assert_eq!(ReadinessCategory::from_score(7), ReadinessCategory::High);
}

#[test]
fn unanswered_questions_are_listed() {
    let engagement = DigitalEngagement {
        wearable_use: Some(WearableUse::Occasional),
        ..DigitalEngagement::default()
    };

    let error = score_readiness(&engagement).expect_err("incomplete answers rejected");

    assert_eq!(
        error.unanswered,
        vec![
            DigitalQuestion::MetricsCheckFrequency,
            DigitalQuestion::TrackingAttitude,
        ]
    );
    assert!(error.to_string().contains("2 unanswered"));
}

#[test]
fn every_answer_combination_stays_in_bounds() {
    let wearables = [
        WearableUse::Regular,
        WearableUse::Occasional,
        WearableUse::PlanningToStart,
        WearableUse::NotInterested,
    ];
    let checks = [
        MetricsCheckFrequency::Daily,
        MetricsCheckFrequency::FewPerWeek,
        MetricsCheckFrequency::Rarely,
        MetricsCheckFrequency::Never,
    ];
    let attitudes = [
        TrackingAttitude::Enthusiast,
        TrackingAttitude::Neutral,
        TrackingAttitude::Curious,
        TrackingAttitude::Skeptic,
    ];

    for wearable in wearables {
        for check in checks {
            for attitude in attitudes {
                let result = score_readiness(&digital(wearable, check, attitude))
                    .expect("all questions answered");
                assert!((-3..=8).contains(&result.score));
                assert_eq!(result.category, ReadinessCategory::from_score(result.score));
            }
        }
    }
}
