use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Occupation bands offered by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    Sedentary,
    ModerateActivity,
    PhysicallyDemanding,
    HighStress,
    NotEmployed,
}

impl Occupation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary/Desk Job (IT, Finance, Clerical)",
            Self::ModerateActivity => "Moderate Activity (Teacher, Driver, Shop Keeper)",
            Self::PhysicallyDemanding => "Physically demanding (Laborer, Farmer, Construction)",
            Self::HighStress => "High Stress (Business, Doctor, Police, Pilot, Night Shift)",
            Self::NotEmployed => "Unemployed / Student / Home maker / Retired",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeLevel {
    NoIncome,
    Low,
    Middle,
    High,
}

impl IncomeLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoIncome => "0 income",
            Self::Low => "Low income",
            Self::Middle => "Middle income",
            Self::High => "High income",
        }
    }
}

/// Collected for reporting only; no scoring rule reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    NoFormalEducation,
    HighSchoolOrLess,
    Graduate,
    PostGraduate,
}

impl EducationLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoFormalEducation => "No Formal Education",
            Self::HighSchoolOrLess => "High School or Less",
            Self::Graduate => "Graduate (Bachelor's)",
            Self::PostGraduate => "Post Graduate or Higher",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokingStatus {
    #[default]
    Never,
    FormerQuit,
    CurrentSmoker,
}

impl SmokingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::FormerQuit => "Former (quit)",
            Self::CurrentSmoker => "Current smoker",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholUse {
    #[default]
    Never,
    FormerQuit,
    Occasional,
    Regular,
}

/// Ordered drinking severity shared by every questionnaire wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholSeverity {
    None,
    Occasional,
    Regular,
}

impl AlcoholUse {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::FormerQuit => "Former (quit)",
            Self::Occasional => "Occasional drinker",
            Self::Regular => "Regular drinker",
        }
    }

    pub const fn severity(self) -> AlcoholSeverity {
        match self {
            Self::Never | Self::FormerQuit => AlcoholSeverity::None,
            Self::Occasional => AlcoholSeverity::Occasional,
            Self::Regular => AlcoholSeverity::Regular,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseFrequency {
    #[default]
    Never,
    Rarely,
    Occasionally,
    Regularly,
}

impl ExerciseFrequency {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::Rarely => "Rarely",
            Self::Occasionally => "Occasionally",
            Self::Regularly => "Regularly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseIntensity {
    #[default]
    Light,
    Moderate,
    Intense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepQuality {
    #[default]
    Poor,
    Fair,
    Good,
}

impl SleepQuality {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    #[default]
    NonVegetarian,
    Vegetarian,
    Vegan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessedFoodIntake {
    #[default]
    Never,
    Rarely,
    Often,
    Daily,
}

/// Current conditions a respondent can report. Reporting none is an empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCondition {
    Diabetes,
    Hypertension,
    HeartDisease,
    KidneyDisease,
    LiverDisease,
    AsthmaCopd,
    HormonalImbalance,
    AutoimmuneDisease,
    CongenitalCondition,
}

impl HealthCondition {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes",
            Self::Hypertension => "Hypertension",
            Self::HeartDisease => "Heart Disease",
            Self::KidneyDisease => "Kidney Disease",
            Self::LiverDisease => "Liver Disease",
            Self::AsthmaCopd => "Asthma / COPD",
            Self::HormonalImbalance => "Hormonal Imbalances",
            Self::AutoimmuneDisease => "Autoimmune disease",
            Self::CongenitalCondition => "Congenital Conditions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyCondition {
    Diabetes,
    Hypertension,
    HeartDisease,
    Cancer,
    Stroke,
}

/// Body mass index rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bmi(f64);

impl Bmi {
    pub fn from_measurements(height_cm: u16, weight_kg: u16) -> Self {
        let height_m = f64::from(height_cm) / 100.0;
        let raw = f64::from(weight_kg) / (height_m * height_m);
        Self((raw * 10.0).round() / 10.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn status(self) -> BmiStatus {
        if (18.5..=24.9).contains(&self.0) {
            BmiStatus::Normal
        } else if self.0 > 24.9 {
            BmiStatus::Overweight
        } else {
            BmiStatus::Underweight
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiStatus {
    Underweight,
    Normal,
    Overweight,
}

impl BmiStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
        }
    }
}

/// Step one answers after intake validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub age: u8,
    pub gender: Gender,
    pub height_cm: u16,
    pub weight_kg: u16,
    pub city: String,
    pub occupation: Occupation,
    pub income: IncomeLevel,
    pub education: Option<EducationLevel>,
}

impl BasicInfo {
    /// Always recomputed from height and weight.
    pub fn bmi(&self) -> Bmi {
        Bmi::from_measurements(self.height_cm, self.weight_kg)
    }

    pub fn bmi_status(&self) -> BmiStatus {
        self.bmi().status()
    }
}

/// Step two answers after range checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthHistory {
    pub smoking: SmokingStatus,
    pub alcohol: AlcoholUse,
    pub health_conditions: BTreeSet<HealthCondition>,
    pub medications: String,
    pub family_history: BTreeSet<FamilyCondition>,
    pub exercise_frequency: ExerciseFrequency,
    pub exercise_intensity: ExerciseIntensity,
    pub sleep_hours: u8,
    pub sleep_quality: SleepQuality,
    pub stress_level: u8,
    pub diet: DietType,
    pub processed_food: ProcessedFoodIntake,
}

/// Everything the risk scorer reads, assembled once per assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub basics: BasicInfo,
    pub history: HealthHistory,
}

impl Profile {
    pub fn bmi(&self) -> Bmi {
        self.basics.bmi()
    }
}

/// Raw step one values as handed over by form collection.
///
/// Numeric fields use zero for "not entered" and the enumerations use `None` for the
/// unselected placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicInfoForm {
    pub age: u16,
    pub gender: Option<Gender>,
    pub height_cm: u16,
    pub weight_kg: u16,
    pub city: String,
    pub occupation: Option<Occupation>,
    pub income: Option<IncomeLevel>,
    pub education: Option<EducationLevel>,
}

/// Raw step two values. Defaults mirror the widgets' initial positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthHistoryForm {
    pub smoking: SmokingStatus,
    pub alcohol: AlcoholUse,
    pub health_conditions: BTreeSet<HealthCondition>,
    pub medications: String,
    pub family_history: BTreeSet<FamilyCondition>,
    pub exercise_frequency: ExerciseFrequency,
    pub exercise_intensity: ExerciseIntensity,
    pub sleep_hours: u8,
    pub sleep_quality: SleepQuality,
    pub stress_level: u8,
    pub diet: DietType,
    pub processed_food: ProcessedFoodIntake,
}

impl Default for HealthHistoryForm {
    fn default() -> Self {
        Self {
            smoking: SmokingStatus::default(),
            alcohol: AlcoholUse::default(),
            health_conditions: BTreeSet::new(),
            medications: String::new(),
            family_history: BTreeSet::new(),
            exercise_frequency: ExerciseFrequency::default(),
            exercise_intensity: ExerciseIntensity::default(),
            sleep_hours: 7,
            sleep_quality: SleepQuality::default(),
            stress_level: 5,
            diet: DietType::default(),
            processed_food: ProcessedFoodIntake::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_is_rounded_to_one_decimal() {
        let bmi = Bmi::from_measurements(170, 65);
        assert_eq!(bmi.value(), 22.5);

        let bmi = Bmi::from_measurements(180, 100);
        assert_eq!(bmi.value(), 30.9);
    }

    #[test]
    fn bmi_status_boundaries() {
        assert_eq!(Bmi(18.4).status(), BmiStatus::Underweight);
        assert_eq!(Bmi(18.5).status(), BmiStatus::Normal);
        assert_eq!(Bmi(24.9).status(), BmiStatus::Normal);
        assert_eq!(Bmi(25.0).status(), BmiStatus::Overweight);
    }

    #[test]
    fn former_drinkers_carry_no_severity() {
        assert_eq!(AlcoholUse::FormerQuit.severity(), AlcoholSeverity::None);
        assert!(AlcoholUse::Regular.severity() > AlcoholUse::Occasional.severity());
    }

    #[test]
    fn history_form_defaults_match_widget_positions() {
        let form = HealthHistoryForm::default();
        assert_eq!(form.sleep_hours, 7);
        assert_eq!(form.stress_level, 5);
        assert_eq!(form.exercise_frequency, ExerciseFrequency::Never);
        assert_eq!(form.sleep_quality, SleepQuality::Poor);
    }
}
