//! The six deterministic scoring passes and the composing entry point.
//!
//! Every pass is a pure function over the answer sheet; they share no state
//! and read fixed, hard-coded question subsets. The composition is total:
//! empty and partial sheets score without error, missing answers simply
//! contribute nothing.

pub(crate) mod bias;
pub(crate) mod engine;
pub(crate) mod matrix;
pub(crate) mod subtype;
pub(crate) mod typology;
pub(crate) mod validity;

use chrono::Utc;

use super::domain::{AnswerSheet, DiagnosisResult, OsProfile};

pub use bias::detect as detect_bias;
pub use engine::rank as rank_engines;
pub use matrix::project as project_matrix;
pub use subtype::classify as classify_subtype;
pub use typology::classify as classify_typology;
pub use validity::grade as grade_validity;

/// Runs all six passes over the sheet and merges them into one immutable
/// result record stamped with the generation time.
pub fn compute_diagnosis(sheet: &AnswerSheet) -> DiagnosisResult {
    let code = typology::classify(sheet);
    let subtype = subtype::classify(&code, sheet);
    let engine = engine::rank(sheet, &code);
    let bias = bias::detect(sheet);
    let matrix = matrix::project(sheet);
    let validity = validity::grade(&code, engine.primary, bias.total_score);

    DiagnosisResult {
        os: OsProfile { code, subtype },
        engine,
        bias,
        matrix,
        validity,
        generated_at: Utc::now(),
    }
}
