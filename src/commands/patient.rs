use crate::models::{Notice, PatientForm};
use crate::services::patient_intake;
use crate::state::AppState;

pub fn save_patient_info(state: &mut AppState, form: PatientForm) -> Result<Notice, String> {
    let info = patient_intake::validate(&form).map_err(|e| e.to_string())?;
    log::info!("Patient info saved for {}", info.name);
    state.patient = Some(info);
    Ok(patient_intake::saved_notice())
}
