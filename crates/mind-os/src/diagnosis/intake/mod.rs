//! Import of wizard CSV exports into an [`AnswerSheet`].
//!
//! The front-end wizard exports one row per answered question with a
//! `Question ID,Answer` header. Import validates the id range, rejects
//! duplicates, and accepts the answer letter case-insensitively.

mod parser;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::domain::{Answer, AnswerSheet, QUESTION_COUNT};

#[derive(Debug, thiserror::Error)]
pub enum WizardImportError {
    #[error("failed to read wizard export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid wizard CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("question id {id} is outside 1..={QUESTION_COUNT}")]
    QuestionOutOfRange { id: u16 },
    #[error("question id {id} appears more than once")]
    DuplicateQuestion { id: u8 },
    #[error("question id {id} has unrecognized answer '{value}'")]
    InvalidAnswer { id: u8, value: String },
}

pub struct WizardExportImporter;

impl WizardExportImporter {
    pub fn from_path(path: &Path) -> Result<AnswerSheet, WizardImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<AnswerSheet, WizardImportError> {
        let rows = parser::parse_rows(reader)?;
        let mut sheet = AnswerSheet::new();

        for row in rows {
            if row.question_id == 0 || row.question_id > u16::from(QUESTION_COUNT) {
                return Err(WizardImportError::QuestionOutOfRange {
                    id: row.question_id,
                });
            }
            let id = row.question_id as u8;

            if sheet.answer(id).is_some() {
                return Err(WizardImportError::DuplicateQuestion { id });
            }

            let answer = match row.answer.trim() {
                "A" | "a" => Answer::A,
                "B" | "b" => Answer::B,
                other => {
                    return Err(WizardImportError::InvalidAnswer {
                        id,
                        value: other.to_string(),
                    })
                }
            };

            sheet.record(id, answer);
        }

        Ok(sheet)
    }
}
