use crate::infra::{parse_outcome_mode, InMemorySessionRepository, QuestionnaireAnswers};
use chrono::Local;
use clap::Args;
use preventra::config::AppConfig;
use preventra::error::AppError;
use preventra::workflows::assessment::{
    AlcoholUse, AssessmentEngine, AssessmentReport, AssessmentService, BasicInfoForm,
    DigitalEngagement, EducationLevel, ExerciseFrequency, Gender, HealthCondition,
    HealthHistoryForm, IncomeLevel, MetricsCheckFrequency, Occupation, OutcomeMode, RiskCategory,
    SleepQuality, SmokingStatus, TrackingAttitude, WearableUse,
};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON answers file covering all three questionnaire steps
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Outcome narrative to use (combined or risk-only). Defaults to APP_OUTCOME_MODE.
    #[arg(long, value_parser = parse_outcome_mode)]
    pub(crate) mode: Option<OutcomeMode>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Outcome narrative to use (combined or risk-only). Defaults to APP_OUTCOME_MODE.
    #[arg(long, value_parser = parse_outcome_mode)]
    pub(crate) mode: Option<OutcomeMode>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs { answers, mode } = args;

    let mut config = AppConfig::load()?.assessment;
    if let Some(mode) = mode {
        config.outcome_mode = mode;
    }

    let raw = std::fs::read_to_string(&answers)?;
    let answers: QuestionnaireAnswers = serde_json::from_str(&raw)?;

    let engine = AssessmentEngine::new(config);
    let report = engine.assess(answers.into())?;

    println!(
        "Preventra assessment ({})",
        Local::now().format("%Y-%m-%d %H:%M")
    );
    render_assessment(&report);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?.assessment;
    if let Some(mode) = args.mode {
        config.outcome_mode = mode;
    }

    println!(
        "Preventra questionnaire demo ({} narratives)",
        config.outcome_mode.label()
    );
    let repository = Arc::new(InMemorySessionRepository::default());
    let service = AssessmentService::new(repository, config);

    for respondent in sample_respondents() {
        println!("\n== {} ==", respondent.name);

        let session = match service.start() {
            Ok(session) => session,
            Err(err) => {
                println!("  Session unavailable: {err}");
                continue;
            }
        };
        let id = session.id.clone();
        println!("- {} opened at {}", id.0, session.stage.title());

        let steps = service
            .submit_basics(&id, respondent.basics)
            .and_then(|session| {
                println!("  Basics accepted -> {}", session.stage.title());
                service.submit_history(&id, respondent.history)
            })
            .and_then(|session| {
                println!("  History accepted -> {}", session.stage.title());
                service.submit_digital(&id, respondent.digital)
            });

        let session = match steps {
            Ok(session) => session,
            Err(err) => {
                println!("  Step rejected: {err}");
                continue;
            }
        };

        let (Some(basics), Some(risk), Some(readiness), Some(outcome)) = (
            session.basics.as_ref(),
            session.risk.clone(),
            session.readiness,
            session.outcome.clone(),
        ) else {
            println!("  Session ended without an outcome");
            continue;
        };

        let bmi = basics.bmi();
        let engine = AssessmentEngine::new(config);
        render_assessment(&AssessmentReport {
            bmi,
            bmi_status: bmi.status(),
            risk,
            readiness: engine.visible_readiness(readiness),
            outcome,
        });
    }

    Ok(())
}

pub(crate) fn render_assessment(report: &AssessmentReport) {
    println!(
        "BMI: {:.1} ({})",
        report.bmi.value(),
        report.bmi_status.label()
    );
    println!(
        "Health risk score: {} ({})",
        report.risk.score,
        report.risk.category.label()
    );
    if report.risk.components.is_empty() {
        println!("  No risk factors fired");
    } else {
        for component in &report.risk.components {
            println!(
                "  - {}: +{} ({})",
                component.factor.label(),
                component.points,
                component.notes
            );
        }
    }

    println!("Risk scoring scale:");
    for category in RiskCategory::ordered() {
        let band = match category.score_band() {
            (low, Some(high)) => format!("{low}-{high}"),
            (low, None) => format!("{low}+"),
        };
        println!("  {band}: {}", category.label());
    }

    if let Some(readiness) = report.readiness {
        println!(
            "Digital readiness score: {} ({})",
            readiness.score,
            readiness.category.label()
        );
    }

    println!("\n{}", report.outcome.message);
}

struct SampleRespondent {
    name: &'static str,
    basics: BasicInfoForm,
    history: HealthHistoryForm,
    digital: DigitalEngagement,
}

fn sample_respondents() -> Vec<SampleRespondent> {
    vec![
        SampleRespondent {
            name: "Young, active and tracking everything",
            basics: BasicInfoForm {
                age: 28,
                gender: Some(Gender::Female),
                height_cm: 165,
                weight_kg: 58,
                city: "Dubai".to_string(),
                occupation: Some(Occupation::ModerateActivity),
                income: Some(IncomeLevel::Middle),
                education: Some(EducationLevel::Graduate),
            },
            history: HealthHistoryForm {
                exercise_frequency: ExerciseFrequency::Regularly,
                sleep_hours: 8,
                sleep_quality: SleepQuality::Good,
                stress_level: 3,
                ..HealthHistoryForm::default()
            },
            digital: DigitalEngagement {
                wearable_use: Some(WearableUse::Regular),
                metrics_check_frequency: Some(MetricsCheckFrequency::Daily),
                tracking_attitude: Some(TrackingAttitude::Enthusiast),
            },
        },
        SampleRespondent {
            name: "Mid-career smoker, curious about wearables",
            basics: BasicInfoForm {
                age: 55,
                gender: Some(Gender::Male),
                height_cm: 170,
                weight_kg: 90,
                city: "Abu Dhabi".to_string(),
                occupation: Some(Occupation::Sedentary),
                income: Some(IncomeLevel::High),
                education: None,
            },
            history: HealthHistoryForm {
                smoking: SmokingStatus::CurrentSmoker,
                exercise_frequency: ExerciseFrequency::Regularly,
                sleep_hours: 7,
                sleep_quality: SleepQuality::Good,
                stress_level: 3,
                ..HealthHistoryForm::default()
            },
            digital: DigitalEngagement {
                wearable_use: Some(WearableUse::PlanningToStart),
                metrics_check_frequency: Some(MetricsCheckFrequency::FewPerWeek),
                tracking_attitude: Some(TrackingAttitude::Curious),
            },
        },
        SampleRespondent {
            name: "Several risk factors, skeptical of tracking",
            basics: BasicInfoForm {
                age: 60,
                gender: Some(Gender::Male),
                height_cm: 170,
                weight_kg: 93,
                city: "Sharjah".to_string(),
                occupation: Some(Occupation::HighStress),
                income: Some(IncomeLevel::Low),
                education: Some(EducationLevel::HighSchoolOrLess),
            },
            history: HealthHistoryForm {
                smoking: SmokingStatus::CurrentSmoker,
                alcohol: AlcoholUse::Regular,
                health_conditions: BTreeSet::from([
                    HealthCondition::Diabetes,
                    HealthCondition::Hypertension,
                ]),
                exercise_frequency: ExerciseFrequency::Never,
                sleep_hours: 5,
                sleep_quality: SleepQuality::Poor,
                stress_level: 8,
                ..HealthHistoryForm::default()
            },
            digital: DigitalEngagement {
                wearable_use: Some(WearableUse::NotInterested),
                metrics_check_frequency: Some(MetricsCheckFrequency::Never),
                tracking_attitude: Some(TrackingAttitude::Skeptic),
            },
        },
    ]
}
