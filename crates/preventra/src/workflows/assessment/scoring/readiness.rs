use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WearableUse {
    Regular,
    Occasional,
    PlanningToStart,
    NotInterested,
}

impl WearableUse {
    pub const fn weight(self) -> i8 {
        match self {
            Self::Regular => 3,
            Self::Occasional => 1,
            Self::PlanningToStart => 0,
            Self::NotInterested => -1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Regular => "Yes — regularly (daily or almost daily)",
            Self::Occasional => "Yes — but occasionally",
            Self::PlanningToStart => "Not yet — but planning to start",
            Self::NotInterested => "No — and not interested",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricsCheckFrequency {
    Daily,
    FewPerWeek,
    Rarely,
    Never,
}

impl MetricsCheckFrequency {
    pub const fn weight(self) -> i8 {
        match self {
            Self::Daily => 3,
            Self::FewPerWeek => 1,
            Self::Rarely => 0,
            Self::Never => -1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily / almost daily",
            Self::FewPerWeek => "Few times per week",
            Self::Rarely => "Rarely",
            Self::Never => "Never",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingAttitude {
    Enthusiast,
    Neutral,
    Curious,
    Skeptic,
}

impl TrackingAttitude {
    pub const fn weight(self) -> i8 {
        match self {
            Self::Enthusiast => 2,
            Self::Neutral => 1,
            Self::Curious => 0,
            Self::Skeptic => -1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Enthusiast => "I like monitoring and optimizing my health with tech",
            Self::Neutral => "Neutral — I don’t mind tracking but not consistent",
            Self::Curious => "I’m curious but not sure how useful it is for me",
            Self::Skeptic => "I don’t think digital tracking is useful",
        }
    }
}

/// Self-reported digital habits. `None` is the unselected placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitalEngagement {
    pub wearable_use: Option<WearableUse>,
    pub metrics_check_frequency: Option<MetricsCheckFrequency>,
    pub tracking_attitude: Option<TrackingAttitude>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitalQuestion {
    WearableUse,
    MetricsCheckFrequency,
    TrackingAttitude,
}

impl DigitalQuestion {
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::WearableUse => {
                "Do you currently use a smartwatch / fitness band / health wearable?"
            }
            Self::MetricsCheckFrequency => {
                "How often do you check any health metrics (steps, heart rate, sleep, BP, SpO₂, etc.)?"
            }
            Self::TrackingAttitude => {
                "How would you describe your attitude toward tracking your health digitally?"
            }
        }
    }
}

impl fmt::Display for DigitalQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prompt())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("please answer all digital health questions before continuing ({} unanswered)", .unanswered.len())]
pub struct IncompleteInputError {
    pub unanswered: Vec<DigitalQuestion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadinessCategory {
    Low,
    Med,
    High,
}

impl ReadinessCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Med, Self::High]
    }

    pub const fn from_score(score: i8) -> Self {
        if score <= 3 {
            Self::Low
        } else if score <= 6 {
            Self::Med
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Med => "MED",
            Self::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessResult {
    pub score: i8,
    pub category: ReadinessCategory,
}

/// Weighted sum of the three answers, bounded to `[-3, 8]`.
pub fn score_readiness(
    engagement: &DigitalEngagement,
) -> Result<ReadinessResult, IncompleteInputError> {
    let (Some(wearable), Some(metrics), Some(attitude)) = (
        engagement.wearable_use,
        engagement.metrics_check_frequency,
        engagement.tracking_attitude,
    ) else {
        let unanswered = [
            (engagement.wearable_use.is_none(), DigitalQuestion::WearableUse),
            (
                engagement.metrics_check_frequency.is_none(),
                DigitalQuestion::MetricsCheckFrequency,
            ),
            (
                engagement.tracking_attitude.is_none(),
                DigitalQuestion::TrackingAttitude,
            ),
        ]
        .into_iter()
        .filter_map(|(missing, question)| missing.then_some(question))
        .collect();
        return Err(IncompleteInputError { unanswered });
    };

    let score = wearable.weight() + metrics.weight() + attitude.weight();

    Ok(ReadinessResult {
        score,
        category: ReadinessCategory::from_score(score),
    })
}
