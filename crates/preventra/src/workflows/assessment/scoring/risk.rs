use serde::{Deserialize, Serialize};

use super::super::domain::{
    AlcoholSeverity, ExerciseFrequency, HealthCondition, Profile, SleepQuality, SmokingStatus,
};

const CARDIOMETABOLIC_CONDITIONS: [HealthCondition; 3] = [
    HealthCondition::Diabetes,
    HealthCondition::Hypertension,
    HealthCondition::HeartDisease,
];

/// Factors read by the risk rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    Age,
    BodyMassIndex,
    Smoking,
    Alcohol,
    Exercise,
    SleepDuration,
    SleepQuality,
    Stress,
    ChronicConditions,
}

impl RiskFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::BodyMassIndex => "BMI",
            Self::Smoking => "Smoking",
            Self::Alcohol => "Alcohol",
            Self::Exercise => "Exercise",
            Self::SleepDuration => "Sleep duration",
            Self::SleepQuality => "Sleep quality",
            Self::Stress => "Stress",
            Self::ChronicConditions => "Chronic conditions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
}

impl RiskCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Moderate, Self::High]
    }

    pub const fn from_score(score: u8) -> Self {
        if score >= 7 {
            Self::High
        } else if score >= 4 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
        }
    }

    /// Inclusive score band for the scoring scale legend; `None` means open-ended.
    pub const fn score_band(self) -> (u8, Option<u8>) {
        match self {
            Self::Low => (0, Some(3)),
            Self::Moderate => (4, Some(6)),
            Self::High => (7, None),
        }
    }
}

/// Single fired contribution, kept so a score can be audited line by line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskComponent {
    pub factor: RiskFactor,
    pub points: u8,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    pub score: u8,
    pub category: RiskCategory,
    pub components: Vec<RiskComponent>,
}

/// Sum of independent contributions; every factor is evaluated, order is irrelevant.
pub fn score_risk(profile: &Profile) -> RiskResult {
    let components: Vec<RiskComponent> = [
        age_contribution(profile),
        bmi_contribution(profile),
        smoking_contribution(profile),
        alcohol_contribution(profile),
        exercise_contribution(profile),
        sleep_duration_contribution(profile),
        sleep_quality_contribution(profile),
        stress_contribution(profile),
        conditions_contribution(profile),
    ]
    .into_iter()
    .flatten()
    .collect();

    let score: u8 = components.iter().map(|component| component.points).sum();

    RiskResult {
        score,
        category: RiskCategory::from_score(score),
        components,
    }
}

fn component(factor: RiskFactor, points: u8, notes: String) -> Option<RiskComponent> {
    Some(RiskComponent {
        factor,
        points,
        notes,
    })
}

fn age_contribution(profile: &Profile) -> Option<RiskComponent> {
    let age = profile.basics.age;
    if age > 50 {
        component(RiskFactor::Age, 2, format!("age {age} is over 50"))
    } else if age > 35 {
        component(RiskFactor::Age, 1, format!("age {age} is between 36 and 50"))
    } else {
        None
    }
}

fn bmi_contribution(profile: &Profile) -> Option<RiskComponent> {
    let bmi = profile.bmi().value();
    if bmi >= 30.0 {
        component(RiskFactor::BodyMassIndex, 2, format!("BMI {bmi:.1} is 30 or above"))
    } else if bmi >= 25.0 {
        component(
            RiskFactor::BodyMassIndex,
            1,
            format!("BMI {bmi:.1} is between 25 and 30"),
        )
    } else {
        None
    }
}

fn smoking_contribution(profile: &Profile) -> Option<RiskComponent> {
    match profile.history.smoking {
        SmokingStatus::CurrentSmoker => {
            component(RiskFactor::Smoking, 2, "current smoker".to_string())
        }
        SmokingStatus::FormerQuit => component(RiskFactor::Smoking, 1, "former smoker".to_string()),
        SmokingStatus::Never => None,
    }
}

fn alcohol_contribution(profile: &Profile) -> Option<RiskComponent> {
    match profile.history.alcohol.severity() {
        AlcoholSeverity::Regular => component(RiskFactor::Alcohol, 1, "regular drinker".to_string()),
        AlcoholSeverity::Occasional | AlcoholSeverity::None => None,
    }
}

fn exercise_contribution(profile: &Profile) -> Option<RiskComponent> {
    match profile.history.exercise_frequency {
        ExerciseFrequency::Never => component(RiskFactor::Exercise, 1, "never exercises".to_string()),
        _ => None,
    }
}

fn sleep_duration_contribution(profile: &Profile) -> Option<RiskComponent> {
    let hours = profile.history.sleep_hours;
    if hours < 6 {
        component(
            RiskFactor::SleepDuration,
            1,
            format!("{hours} hours of sleep is under 6"),
        )
    } else {
        None
    }
}

fn sleep_quality_contribution(profile: &Profile) -> Option<RiskComponent> {
    match profile.history.sleep_quality {
        SleepQuality::Poor => component(RiskFactor::SleepQuality, 1, "poor sleep quality".to_string()),
        SleepQuality::Fair | SleepQuality::Good => None,
    }
}

fn stress_contribution(profile: &Profile) -> Option<RiskComponent> {
    let level = profile.history.stress_level;
    if level >= 7 {
        component(RiskFactor::Stress, 1, format!("stress level {level} is 7 or above"))
    } else {
        None
    }
}

fn conditions_contribution(profile: &Profile) -> Option<RiskComponent> {
    let reported: Vec<&'static str> = CARDIOMETABOLIC_CONDITIONS
        .iter()
        .filter(|condition| profile.history.health_conditions.contains(*condition))
        .map(|condition| condition.label())
        .collect();

    if reported.is_empty() {
        None
    } else {
        component(
            RiskFactor::ChronicConditions,
            2,
            format!("reported {}", reported.join(", ")),
        )
    }
}
