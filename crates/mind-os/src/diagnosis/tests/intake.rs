use std::io::Cursor;

use crate::diagnosis::domain::Answer;
use crate::diagnosis::intake::{WizardExportImporter, WizardImportError};

fn import(csv: &str) -> Result<crate::diagnosis::domain::AnswerSheet, WizardImportError> {
    WizardExportImporter::from_reader(Cursor::new(csv.as_bytes().to_vec()))
}

#[test]
fn imports_a_wizard_export() {
    let sheet = import("Question ID,Answer\n1,A\n2,B\n72,A\n").expect("valid export");
    assert_eq!(sheet.answer(1), Some(Answer::A));
    assert_eq!(sheet.answer(2), Some(Answer::B));
    assert_eq!(sheet.answer(72), Some(Answer::A));
    assert_eq!(sheet.answered(), 3);
}

#[test]
fn accepts_lowercase_answers_and_padding() {
    let sheet = import("Question ID,Answer\n5, a \n6, b \n").expect("valid export");
    assert_eq!(sheet.answer(5), Some(Answer::A));
    assert_eq!(sheet.answer(6), Some(Answer::B));
}

#[test]
fn rejects_out_of_range_question_ids() {
    let error = import("Question ID,Answer\n73,A\n").expect_err("id out of range");
    assert!(matches!(
        error,
        WizardImportError::QuestionOutOfRange { id: 73 }
    ));

    let error = import("Question ID,Answer\n0,A\n").expect_err("id out of range");
    assert!(matches!(
        error,
        WizardImportError::QuestionOutOfRange { id: 0 }
    ));
}

#[test]
fn rejects_duplicate_question_ids() {
    let error = import("Question ID,Answer\n9,A\n9,B\n").expect_err("duplicate id");
    assert!(matches!(
        error,
        WizardImportError::DuplicateQuestion { id: 9 }
    ));
}

#[test]
fn rejects_unknown_answer_letters() {
    let error = import("Question ID,Answer\n4,C\n").expect_err("bad letter");
    match error {
        WizardImportError::InvalidAnswer { id, value } => {
            assert_eq!(id, 4);
            assert_eq!(value, "C");
        }
        other => panic!("expected invalid answer, got {other:?}"),
    }
}

#[test]
fn rejects_malformed_csv() {
    let error = import("Question ID,Answer\nnot-a-number,A\n").expect_err("bad row");
    assert!(matches!(error, WizardImportError::Csv(_)));
}

#[test]
fn full_export_round_trips_into_a_complete_sheet() {
    let mut csv = String::from("Question ID,Answer\n");
    for id in 1..=72 {
        csv.push_str(&format!("{id},{}\n", if id % 2 == 0 { "B" } else { "A" }));
    }

    let sheet = import(&csv).expect("valid export");
    assert!(sheet.is_complete());
    assert_eq!(sheet.answer(2), Some(Answer::B));
}
