use std::collections::BTreeMap;

use super::super::domain::{Answer, AnswerSheet, BiasKind, BiasProfile};

/// Each bias is probed by a fixed question pair; an 'A' on either question
/// scores a point, and both together fire the alert.
const BIAS_PAIRS: [(BiasKind, u8, u8); 5] = [
    (BiasKind::Confirmation, 63, 64),
    (BiasKind::SunkCost, 65, 66),
    (BiasKind::StatusQuo, 67, 68),
    (BiasKind::Authority, 69, 70),
    (BiasKind::Availability, 71, 72),
];

pub fn detect(sheet: &AnswerSheet) -> BiasProfile {
    let mut scores = BTreeMap::new();
    let mut alerts = Vec::new();
    let mut total_score = 0u8;

    for (kind, first, second) in BIAS_PAIRS {
        let score = u8::from(sheet.matches(first, Answer::A))
            + u8::from(sheet.matches(second, Answer::A));
        if score == 2 {
            alerts.push(kind);
        }
        total_score += score;
        scores.insert(kind, score);
    }

    BiasProfile {
        scores,
        alerts,
        total_score,
    }
}
