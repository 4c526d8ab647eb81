use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Masculino",
            Gender::Female => "Feminino",
            Gender::Other => "Outro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalCondition {
    Mild,
    Moderate,
    Advanced,
}

impl ClinicalCondition {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "mild" => Some(ClinicalCondition::Mild),
            "moderate" => Some(ClinicalCondition::Moderate),
            "advanced" => Some(ClinicalCondition::Advanced),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClinicalCondition::Mild => "Leve",
            ClinicalCondition::Moderate => "Moderado",
            ClinicalCondition::Advanced => "Avançado",
        }
    }
}

/// Raw intake form values, as typed by the caregiver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub clinical_condition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub clinical_condition: ClinicalCondition,
}
