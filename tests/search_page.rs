use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use sigma::models::{ActionRecord, QueryDictionary, TimeWindow};
use sigma::services::seed;
use sigma::{filter_actions, resolve, FALLBACK_ANSWER};

fn evening() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 4, 27)
        .unwrap()
        .and_hms_opt(23, 0, 0)
        .unwrap()
}

#[test]
fn evening_medication_is_listed_under_today() {
    let records = vec![ActionRecord::new(
        1,
        NaiveDate::from_ymd_opt(2025, 4, 27).unwrap(),
        NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
        "Medicação administrada: Paracetamol 500mg",
    )];
    assert_eq!(filter_actions(&records, Some(TimeWindow::Today), evening()), records);
}

#[test]
fn record_exactly_one_hour_old_is_in_last_hour() {
    let one_hour_ago = evening() - chrono::Duration::hours(1);
    let records = vec![ActionRecord::new(1, one_hour_ago.date(), one_hour_ago.time(), "Banho")];
    assert_eq!(filter_actions(&records, Some(TimeWindow::LastHour), evening()).len(), 1);
}

#[test]
fn filtering_does_not_touch_the_source() {
    let records = seed::patient_actions();
    let before = records.clone();
    for window in TimeWindow::ALL {
        let _ = filter_actions(&records, Some(window), evening());
    }
    assert_eq!(records, before);
}

#[test]
fn meal_question_resolves_to_meal_answer() {
    let dictionary = QueryDictionary::from_pairs([(
        "quando o paciente comeu",
        "O paciente realizou as refeições às 12:00 (almoço) e às 18:00 (janta) em 27/04/2025.",
    )]);
    assert_eq!(
        resolve("me diga quando o paciente comeu hoje", &dictionary),
        "O paciente realizou as refeições às 12:00 (almoço) e às 18:00 (janta) em 27/04/2025."
    );
}

#[test]
fn unknown_question_gets_fallback() {
    assert_eq!(
        resolve("xyz não existe", &seed::canned_answers()),
        "Não encontrei informações específicas sobre essa consulta. Por favor, reformule ou seja mais específico."
    );
    assert_eq!(resolve("", &seed::canned_answers()), FALLBACK_ANSWER);
    assert_eq!(resolve("qualquer coisa", &QueryDictionary::new()), FALLBACK_ANSWER);
}

#[test]
fn uppercase_question_matches_lowercase() {
    let dictionary = seed::canned_answers();
    assert_eq!(
        resolve("QUANDO FOI A ÚLTIMA MEDICAÇÃO", &dictionary),
        resolve("quando foi a última medicação", &dictionary)
    );
}
