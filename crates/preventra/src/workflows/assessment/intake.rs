use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{BasicInfo, BasicInfoForm, HealthHistory, HealthHistoryForm};
use super::scoring::{AssessmentConfig, FieldPolicy};

pub const MAX_AGE: u16 = 120;
pub const SLEEP_HOURS_RANGE: (u16, u16) = (3, 12);
pub const STRESS_LEVEL_RANGE: (u16, u16) = (1, 10);

/// Step one fields that must be answered before the questionnaire advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Age,
    Gender,
    Height,
    Weight,
    City,
    Occupation,
    Income,
    Education,
}

impl RequiredField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Height => "height",
            Self::Weight => "weight",
            Self::City => "city",
            Self::Occupation => "occupation",
            Self::Income => "income",
            Self::Education => "education",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Numeric answers with a bounded domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangedField {
    Age,
    SleepHours,
    StressLevel,
}

impl RangedField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::SleepHours => "sleep hours",
            Self::StressLevel => "stress level",
        }
    }
}

impl fmt::Display for RangedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rejection raised by the intake guard. The form is re-displayed; nothing is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("please complete all required fields before continuing (missing: {})", join_fields(.missing_fields))]
    MissingFields { missing_fields: Vec<RequiredField> },
    #[error("{field} must be between {min} and {max} (found {found})")]
    OutOfRange {
        field: RangedField,
        found: u16,
        min: u16,
        max: u16,
    },
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Gate in front of each questionnaire step; produces validated answers or a rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard {
    education: FieldPolicy,
}

impl IntakeGuard {
    pub fn with_education_policy(education: FieldPolicy) -> Self {
        Self { education }
    }

    pub fn from_config(config: &AssessmentConfig) -> Self {
        Self::with_education_policy(config.education)
    }

    pub fn education_policy(&self) -> FieldPolicy {
        self.education
    }

    /// All-or-nothing check of the step one answers.
    pub fn basics_from_form(&self, form: BasicInfoForm) -> Result<BasicInfo, ValidationError> {
        let mut missing_fields = Vec::new();

        if form.age == 0 {
            missing_fields.push(RequiredField::Age);
        }
        if form.gender.is_none() {
            missing_fields.push(RequiredField::Gender);
        }
        if form.height_cm == 0 {
            missing_fields.push(RequiredField::Height);
        }
        if form.weight_kg == 0 {
            missing_fields.push(RequiredField::Weight);
        }
        let city = form.city.trim();
        if city.is_empty() {
            missing_fields.push(RequiredField::City);
        }
        if form.occupation.is_none() {
            missing_fields.push(RequiredField::Occupation);
        }
        if form.income.is_none() {
            missing_fields.push(RequiredField::Income);
        }
        if self.education == FieldPolicy::Required && form.education.is_none() {
            missing_fields.push(RequiredField::Education);
        }

        let (Some(gender), Some(occupation), Some(income), true) = (
            form.gender,
            form.occupation,
            form.income,
            missing_fields.is_empty(),
        ) else {
            return Err(ValidationError::MissingFields { missing_fields });
        };

        check_range(RangedField::Age, form.age, (1, MAX_AGE))?;

        let education = match self.education {
            FieldPolicy::Omitted => None,
            FieldPolicy::Optional | FieldPolicy::Required => form.education,
        };

        Ok(BasicInfo {
            age: form.age as u8,
            gender,
            height_cm: form.height_cm,
            weight_kg: form.weight_kg,
            city: city.to_string(),
            occupation,
            income,
            education,
        })
    }

    /// Range check of the step two answers; every other field is a closed choice.
    pub fn history_from_form(
        &self,
        form: HealthHistoryForm,
    ) -> Result<HealthHistory, ValidationError> {
        check_range(
            RangedField::SleepHours,
            u16::from(form.sleep_hours),
            SLEEP_HOURS_RANGE,
        )?;
        check_range(
            RangedField::StressLevel,
            u16::from(form.stress_level),
            STRESS_LEVEL_RANGE,
        )?;

        Ok(HealthHistory {
            smoking: form.smoking,
            alcohol: form.alcohol,
            health_conditions: form.health_conditions,
            medications: form.medications.trim().to_string(),
            family_history: form.family_history,
            exercise_frequency: form.exercise_frequency,
            exercise_intensity: form.exercise_intensity,
            sleep_hours: form.sleep_hours,
            sleep_quality: form.sleep_quality,
            stress_level: form.stress_level,
            diet: form.diet,
            processed_food: form.processed_food,
        })
    }
}

fn check_range(field: RangedField, found: u16, (min, max): (u16, u16)) -> Result<(), ValidationError> {
    if (min..=max).contains(&found) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            found,
            min,
            max,
        })
    }
}
