use std::sync::OnceLock;

use regex::Regex;

use crate::errors::ValidationErrors;
use crate::models::{ClinicalCondition, Gender, Notice, PatientForm, PatientInfo};

/// Counted in UTF-16 code units, like the browser form.
const MIN_NAME_UNITS: usize = 2;

fn leading_integer() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid age pattern"))
}

/// Reads the integer at the start of `raw`, ignoring anything after it.
/// "42", " 7 anos" and "-3" parse; "", "abc" and "+" do not.
pub fn parse_age(raw: &str) -> Option<i32> {
    let captures = leading_integer().captures(raw)?;
    captures.get(1)?.as_str().parse().ok()
}

pub fn validate(form: &PatientForm) -> Result<PatientInfo, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if form.name.encode_utf16().count() < MIN_NAME_UNITS {
        errors.push("name", "Nome deve ter pelo menos 2 caracteres");
    }
    let age = parse_age(&form.age);
    if age.is_none() {
        errors.push("age", "Idade deve ser um número");
    }
    let gender = Gender::from_key(&form.gender);
    if gender.is_none() {
        errors.push("gender", "Selecione o sexo");
    }
    let clinical_condition = ClinicalCondition::from_key(&form.clinical_condition);
    if clinical_condition.is_none() {
        errors.push("clinical_condition", "Selecione a situação clínica");
    }

    match (age, gender, clinical_condition) {
        (Some(age), Some(gender), Some(clinical_condition)) if errors.is_empty() => Ok(PatientInfo {
            name: form.name.clone(),
            age,
            gender,
            clinical_condition,
        }),
        _ => Err(errors),
    }
}

pub fn saved_notice() -> Notice {
    Notice::info(
        "Informações salvas",
        "Os dados do paciente foram salvos com sucesso.",
    )
}
