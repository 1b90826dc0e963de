use std::cmp::Reverse;

use super::super::domain::{
    Answer, AnswerSheet, Attitude, EngineRanking, EngineType, Judgment, TypologyCode,
};

use EngineType::{T1, T2, T3, T4, T5, T6, T7, T8, T9};

/// Each question credits one of two engines: the first on an 'A' answer, the
/// second on a 'B'. Missing answers credit neither.
const ENGINE_KEYS: [(u8, EngineType, EngineType); 18] = [
    (45, T1, T3),
    (46, T2, T5),
    (47, T6, T4),
    (48, T7, T8),
    (49, T9, T1),
    (50, T2, T8),
    (51, T3, T5),
    (52, T7, T4),
    (53, T6, T9),
    (54, T1, T4),
    (55, T2, T7),
    (56, T3, T8),
    (57, T5, T9),
    (58, T6, T3),
    (59, T1, T7),
    (60, T2, T4),
    (61, T5, T8),
    (62, T6, T9),
];

pub(crate) fn engine_tallies(sheet: &AnswerSheet) -> [u8; 9] {
    let mut tallies = [0u8; 9];
    for (id, on_a, on_b) in ENGINE_KEYS {
        match sheet.answer(id) {
            Some(Answer::A) => tallies[on_a.index()] += 1,
            Some(Answer::B) => tallies[on_b.index()] += 1,
            None => {}
        }
    }
    tallies
}

/// Tie-break priority: lower is more preferred. Extraverted codes favor the
/// outward-moving engines, introverted codes the withdrawn ones; the logic
/// and ethic thirds of the code each nudge their affine engines.
fn priority(engine: EngineType, code: &TypologyCode) -> u8 {
    let mut value = 100u8;

    match code.attitude {
        Attitude::Extravert => {
            if matches!(engine, T3 | T7 | T8 | T2) {
                value -= 10;
            }
        }
        Attitude::Introvert => {
            if matches!(engine, T5 | T4 | T9 | T1 | T6) {
                value -= 10;
            }
        }
    }

    match code.judgment {
        Judgment::Logic => {
            if matches!(engine, T5 | T3 | T8 | T1 | T6) {
                value -= 5;
            }
        }
        Judgment::Ethic => {
            if matches!(engine, T2 | T4 | T7 | T9) {
                value -= 5;
            }
        }
    }

    value
}

/// Ranks the nine engines by raw tally, breaking ties with the priority
/// table. The sort is stable over the T1..T9 declaration order, so a full
/// tie still resolves deterministically.
pub fn rank(sheet: &AnswerSheet, code: &TypologyCode) -> EngineRanking {
    let tallies = engine_tallies(sheet);

    let mut order = EngineType::ALL;
    order.sort_by_key(|engine| (Reverse(tallies[engine.index()]), priority(*engine, code)));

    EngineRanking {
        primary: order[0],
        secondary: order[1],
    }
}
