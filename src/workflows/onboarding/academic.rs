use serde::{Deserialize, Serialize};

use super::domain::{is_blank, FieldValue};

/// Answers to the academic questionnaire that shape the learning roadmap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicProfile {
    pub education_level: String,
    pub interest_area: String,
    pub learning_goals: String,
    pub available_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum AcademicUpdate {
    EducationLevel(String),
    InterestArea(String),
    LearningGoals(String),
    AvailableTime(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AcademicField {
    EducationLevel,
    InterestArea,
    LearningGoals,
    AvailableTime,
}

impl AcademicField {
    /// Fields that must be answered before the roadmap can be built.
    pub const fn required() -> [Self; 3] {
        [Self::EducationLevel, Self::InterestArea, Self::AvailableTime]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EducationLevel => "Education Level",
            Self::InterestArea => "Interest Area",
            Self::LearningGoals => "Learning Goals",
            Self::AvailableTime => "Available Study Time",
        }
    }
}

impl AcademicProfile {
    pub fn set_field(&mut self, update: AcademicUpdate) {
        match update {
            AcademicUpdate::EducationLevel(value) => self.education_level = value,
            AcademicUpdate::InterestArea(value) => self.interest_area = value,
            AcademicUpdate::LearningGoals(value) => self.learning_goals = value,
            AcademicUpdate::AvailableTime(value) => self.available_time = value,
        }
    }

    /// Learning goals stay optional; only the three choice fields are required.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn missing_fields(&self) -> Vec<AcademicField> {
        AcademicField::required()
            .into_iter()
            .filter(|field| is_blank(self.value(*field)))
            .collect()
    }

    pub fn value(&self, field: AcademicField) -> &str {
        match field {
            AcademicField::EducationLevel => &self.education_level,
            AcademicField::InterestArea => &self.interest_area,
            AcademicField::LearningGoals => &self.learning_goals,
            AcademicField::AvailableTime => &self.available_time,
        }
    }
}

impl AcademicUpdate {
    /// Same tolerance as the registration adapter: unknown names and non-text values yield `None`.
    pub fn from_raw(name: &str, value: FieldValue) -> Option<Self> {
        let text = value.into_text()?;
        match name.trim() {
            "education_level" | "nivel_escolaridade" => Some(Self::EducationLevel(text)),
            "interest_area" | "area_interesse" => Some(Self::InterestArea(text)),
            "learning_goals" | "objetivos" => Some(Self::LearningGoals(text)),
            "available_time" | "tempo_disponivel" => Some(Self::AvailableTime(text)),
            _ => None,
        }
    }

    pub const fn field(&self) -> AcademicField {
        match self {
            Self::EducationLevel(_) => AcademicField::EducationLevel,
            Self::InterestArea(_) => AcademicField::InterestArea,
            Self::LearningGoals(_) => AcademicField::LearningGoals,
            Self::AvailableTime(_) => AcademicField::AvailableTime,
        }
    }
}
