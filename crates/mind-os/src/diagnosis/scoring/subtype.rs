use super::super::domain::{Answer, AnswerSheet, Attitude, Subtype, TypologyCode};

/// Opaque calibration table for the contact tally, ids 21..=44. Reproduced
/// bit-for-bit from the published scoring sheet; do not simplify.
const CONTACT_KEYS: [(u8, Answer); 24] = [
    (21, Answer::B),
    (22, Answer::A),
    (23, Answer::B),
    (24, Answer::B),
    (25, Answer::A),
    (26, Answer::B),
    (27, Answer::A),
    (28, Answer::A),
    (29, Answer::B),
    (30, Answer::B),
    (31, Answer::B),
    (32, Answer::B),
    (33, Answer::B),
    (34, Answer::A),
    (35, Answer::B),
    (36, Answer::B),
    (37, Answer::A),
    (38, Answer::B),
    (39, Answer::B),
    (40, Answer::A),
    (41, Answer::A),
    (42, Answer::A),
    (43, Answer::B),
    (44, Answer::A),
];

const CONTACT_MIN: u8 = 13;
const INERT_MAX: u8 = 11;

pub(crate) fn contact_tally(sheet: &AnswerSheet) -> u8 {
    CONTACT_KEYS
        .iter()
        .filter(|(id, expected)| sheet.matches(*id, *expected))
        .count() as u8
}

/// Contact/Inert classification; a tally of exactly 12 falls back to the
/// Attitude axis (extraverts lean Contact).
pub fn classify(code: &TypologyCode, sheet: &AnswerSheet) -> Subtype {
    let tally = contact_tally(sheet);
    if tally >= CONTACT_MIN {
        return Subtype::Contact;
    }
    if tally <= INERT_MAX {
        return Subtype::Inert;
    }

    match code.attitude {
        Attitude::Extravert => Subtype::Contact,
        Attitude::Introvert => Subtype::Inert,
    }
}
