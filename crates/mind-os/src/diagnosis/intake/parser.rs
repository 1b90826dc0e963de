use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
pub(crate) struct WizardRow {
    #[serde(rename = "Question ID")]
    pub(crate) question_id: u16,
    #[serde(rename = "Answer")]
    pub(crate) answer: String,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<WizardRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for row in csv_reader.deserialize::<WizardRow>() {
        rows.push(row?);
    }

    Ok(rows)
}
