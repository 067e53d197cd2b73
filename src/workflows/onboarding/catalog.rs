use serde::Serialize;

pub const EDUCATION_LEVELS: [&str; 6] = [
    "Ensino Fundamental",
    "Ensino Médio",
    "Ensino Técnico",
    "Graduação em Andamento",
    "Graduação Completa",
    "Pós-graduação",
];

pub const INTEREST_AREAS: [&str; 8] = [
    "Desenvolvimento Web",
    "Ciência de Dados",
    "Automação",
    "Inteligência Artificial",
    "Desenvolvimento de Jogos",
    "Sistemas Embarcados",
    "Aplicações Desktop",
    "Aplicações Mobile",
];

pub const STUDY_TIMES: [&str; 4] = [
    "Menos de 5 horas por semana",
    "Entre 5 e 10 horas por semana",
    "Entre 10 e 20 horas por semana",
    "Mais de 20 horas por semana",
];

/// Choices offered by the academic questionnaire dropdowns.
///
/// Offered, not enforced: [`super::AcademicProfile::is_complete`] accepts any non-blank answer.
#[derive(Debug, Clone, Serialize)]
pub struct OptionCatalog {
    pub education_levels: Vec<&'static str>,
    pub interest_areas: Vec<&'static str>,
    pub study_times: Vec<&'static str>,
}

impl OptionCatalog {
    pub fn standard() -> Self {
        Self {
            education_levels: EDUCATION_LEVELS.to_vec(),
            interest_areas: INTEREST_AREAS.to_vec(),
            study_times: STUDY_TIMES.to_vec(),
        }
    }

    pub fn offers_education_level(&self, value: &str) -> bool {
        self.education_levels.iter().any(|option| *option == value)
    }

    pub fn offers_interest_area(&self, value: &str) -> bool {
        self.interest_areas.iter().any(|option| *option == value)
    }

    pub fn offers_study_time(&self, value: &str) -> bool {
        self.study_times.iter().any(|option| *option == value)
    }
}
