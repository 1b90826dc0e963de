use super::common::*;
use crate::diagnosis::domain::Answer::{self, A, B};
use crate::diagnosis::domain::{
    Attitude, DecisionStyle, Information, Judgment, Subtype, TypologyCode,
};
use crate::diagnosis::scoring::classify_subtype;

/// Independent transcription of the published contact scoring sheet, so a
/// drifted constant in the classifier fails loudly here.
const CONTACT_SHEET: [(u8, Answer); 24] = [
    (21, B),
    (22, A),
    (23, B),
    (24, B),
    (25, A),
    (26, B),
    (27, A),
    (28, A),
    (29, B),
    (30, B),
    (31, B),
    (32, B),
    (33, B),
    (34, A),
    (35, B),
    (36, B),
    (37, A),
    (38, B),
    (39, B),
    (40, A),
    (41, A),
    (42, A),
    (43, B),
    (44, A),
];

fn code(attitude: Attitude) -> TypologyCode {
    TypologyCode {
        attitude,
        information: Information::Intuition,
        judgment: Judgment::Logic,
        decision: DecisionStyle::Judging,
    }
}

fn flip(answer: Answer) -> Answer {
    match answer {
        A => B,
        B => A,
    }
}

/// Sheet matching exactly `count` of the 24 contact indicators.
fn sheet_with_contact_score(count: usize) -> crate::diagnosis::domain::AnswerSheet {
    CONTACT_SHEET
        .iter()
        .enumerate()
        .map(|(idx, (id, expected))| {
            if idx < count {
                (*id, *expected)
            } else {
                (*id, flip(*expected))
            }
        })
        .collect()
}

#[test]
fn full_contact_tally_is_contact() {
    let sheet = sheet_with_contact_score(24);
    assert_eq!(classify_subtype(&code(Attitude::Introvert), &sheet), Subtype::Contact);
}

#[test]
fn thirteen_matches_is_contact_regardless_of_attitude() {
    let sheet = sheet_with_contact_score(13);
    assert_eq!(classify_subtype(&code(Attitude::Introvert), &sheet), Subtype::Contact);
}

#[test]
fn eleven_matches_is_inert_regardless_of_attitude() {
    let sheet = sheet_with_contact_score(11);
    assert_eq!(classify_subtype(&code(Attitude::Extravert), &sheet), Subtype::Inert);
}

#[test]
fn twelve_matches_falls_back_to_attitude() {
    let sheet = sheet_with_contact_score(12);
    assert_eq!(classify_subtype(&code(Attitude::Extravert), &sheet), Subtype::Contact);
    assert_eq!(classify_subtype(&code(Attitude::Introvert), &sheet), Subtype::Inert);
}

#[test]
fn all_a_baseline_scores_inert() {
    // The all-'A' sheet matches only the ten indicators expecting 'A'.
    let sheet = base_sheet();
    assert_eq!(classify_subtype(&code(Attitude::Extravert), &sheet), Subtype::Inert);
}

#[test]
fn unanswered_block_scores_inert() {
    let sheet = sheet_from(&[]);
    assert_eq!(classify_subtype(&code(Attitude::Extravert), &sheet), Subtype::Inert);
}
