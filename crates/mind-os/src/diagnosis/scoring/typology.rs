use super::super::domain::{
    Answer, AnswerSheet, Attitude, DecisionStyle, Information, Judgment, TypologyCode,
};

type AnswerKey = (u8, Answer);

/// Calibrated indicator tables. These are part of the scoring contract and
/// must never be derived from runtime data.
const ATTITUDE_KEYS: [AnswerKey; 5] = [
    (1, Answer::A),
    (8, Answer::A),
    (12, Answer::A),
    (27, Answer::B),
    (32, Answer::B),
];

const INFORMATION_KEYS: [AnswerKey; 6] = [
    (4, Answer::A),
    (6, Answer::A),
    (9, Answer::A),
    (13, Answer::A),
    (17, Answer::B),
    (19, Answer::A),
];

const JUDGMENT_KEYS: [AnswerKey; 6] = [
    (3, Answer::B),
    (7, Answer::B),
    (10, Answer::B),
    (14, Answer::B),
    (18, Answer::A),
    (39, Answer::B),
];

const DECISION_KEYS: [AnswerKey; 6] = [
    (2, Answer::B),
    (5, Answer::A),
    (11, Answer::A),
    (15, Answer::A),
    (16, Answer::B),
    (20, Answer::A),
];

/// Attitude has a single majority threshold (3 of 5) and no tie zone.
const EXTRAVERT_MIN: u8 = 3;
/// The 6-indicator axes share a high/low band with a one-point tie zone.
const AXIS_HIGH: u8 = 4;
const AXIS_LOW: u8 = 2;

const INFORMATION_TIE_KEY: AnswerKey = (4, Answer::A);
const JUDGMENT_TIE_KEY: AnswerKey = (14, Answer::B);
const DECISION_TIE_KEY: AnswerKey = (15, Answer::A);

fn tally(sheet: &AnswerSheet, keys: &[AnswerKey]) -> u8 {
    keys.iter()
        .filter(|(id, expected)| sheet.matches(*id, *expected))
        .count() as u8
}

pub(crate) fn attitude_tally(sheet: &AnswerSheet) -> u8 {
    tally(sheet, &ATTITUDE_KEYS)
}

pub(crate) fn information_tally(sheet: &AnswerSheet) -> u8 {
    tally(sheet, &INFORMATION_KEYS)
}

pub(crate) fn judgment_tally(sheet: &AnswerSheet) -> u8 {
    tally(sheet, &JUDGMENT_KEYS)
}

pub(crate) fn decision_tally(sheet: &AnswerSheet) -> u8 {
    tally(sheet, &DECISION_KEYS)
}

fn resolve_banded<T>(score: u8, sheet: &AnswerSheet, tie_key: AnswerKey, high: T, low: T) -> T {
    if score >= AXIS_HIGH {
        high
    } else if score <= AXIS_LOW {
        low
    } else if sheet.matches(tie_key.0, tie_key.1) {
        high
    } else {
        low
    }
}

/// Derives the four-letter typology code from the answer sheet.
///
/// The Attitude axis keeps its asymmetric single-threshold form: with five
/// indicators, 3 is already a strict majority, so there is no tie zone to
/// break. The other three axes fall back to a designated question when the
/// tally lands between the bands.
pub fn classify(sheet: &AnswerSheet) -> TypologyCode {
    let attitude = if attitude_tally(sheet) >= EXTRAVERT_MIN {
        Attitude::Extravert
    } else {
        Attitude::Introvert
    };

    let information = resolve_banded(
        information_tally(sheet),
        sheet,
        INFORMATION_TIE_KEY,
        Information::Intuition,
        Information::Sensing,
    );

    let judgment = resolve_banded(
        judgment_tally(sheet),
        sheet,
        JUDGMENT_TIE_KEY,
        Judgment::Logic,
        Judgment::Ethic,
    );

    let decision = resolve_banded(
        decision_tally(sheet),
        sheet,
        DECISION_TIE_KEY,
        DecisionStyle::Judging,
        DecisionStyle::Perceiving,
    );

    TypologyCode {
        attitude,
        information,
        judgment,
        decision,
    }
}
