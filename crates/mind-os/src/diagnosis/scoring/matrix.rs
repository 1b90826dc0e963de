use super::super::domain::{AnswerSheet, MatrixPoint};
use super::typology;

/// Projects the sheet onto the result chart. X runs emotional → logical on
/// the judgment tally; Y runs traditional → innovative on the information
/// tally plus the perceiving remainder of the decision tally. Tallies are
/// recomputed from the sheet rather than threaded through from the
/// classifier, keeping the pass independent.
pub fn project(sheet: &AnswerSheet) -> MatrixPoint {
    let logic = f64::from(typology::judgment_tally(sheet));
    let intuition = f64::from(typology::information_tally(sheet));
    let judging = f64::from(typology::decision_tally(sheet));
    let perceiving = 6.0 - judging;

    MatrixPoint {
        x: round_to_tenth(logic / 6.0 * 10.0),
        y: round_to_tenth((intuition + perceiving) / 12.0 * 10.0),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
