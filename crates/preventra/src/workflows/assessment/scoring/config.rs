use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which narrative table the outcome composer reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeMode {
    /// Nine narratives keyed by risk and readiness.
    #[default]
    Combined,
    /// Three narratives keyed by risk; the readiness score is computed but never shown.
    RiskOnly,
}

impl OutcomeMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Combined => "combined",
            Self::RiskOnly => "risk_only",
        }
    }
}

impl FromStr for OutcomeMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "combined" => Ok(Self::Combined),
            "risk_only" => Ok(Self::RiskOnly),
            other => Err(format!("unknown outcome mode '{other}'")),
        }
    }
}

/// Whether an optional questionnaire field is asked for, and whether it gates intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolicy {
    Omitted,
    #[default]
    Optional,
    Required,
}

impl FromStr for FieldPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "omitted" => Ok(Self::Omitted),
            "optional" => Ok(Self::Optional),
            "required" => Ok(Self::Required),
            other => Err(format!("unknown field policy '{other}'")),
        }
    }
}

/// Questionnaire variant: which optional fields exist and which outcome table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssessmentConfig {
    pub outcome_mode: OutcomeMode,
    pub education: FieldPolicy,
}

impl AssessmentConfig {
    /// Risk and readiness surfaced together.
    pub const fn combined() -> Self {
        Self {
            outcome_mode: OutcomeMode::Combined,
            education: FieldPolicy::Optional,
        }
    }

    /// Only the health risk is surfaced.
    pub const fn risk_only() -> Self {
        Self {
            outcome_mode: OutcomeMode::RiskOnly,
            education: FieldPolicy::Optional,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_outcome_modes_leniently() {
        assert_eq!("Combined".parse::<OutcomeMode>(), Ok(OutcomeMode::Combined));
        assert_eq!("risk-only".parse::<OutcomeMode>(), Ok(OutcomeMode::RiskOnly));
        assert!("both".parse::<OutcomeMode>().is_err());
    }

    #[test]
    fn default_config_is_the_combined_variant() {
        assert_eq!(AssessmentConfig::default(), AssessmentConfig::combined());
    }
}
