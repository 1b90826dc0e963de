use super::super::domain::{Attitude, EngineType, Judgment, TypologyCode, ValidityGrade};

/// Cross-checks the typology code against the primary engine and the bias
/// total. A logic code paired with an emotion-driven engine, or an
/// introverted code paired with an assertive one, each raise a contradiction
/// flag. A zero bias total together with the achievement engine is treated
/// as masking (impression management) on its own.
pub fn grade(code: &TypologyCode, primary: EngineType, bias_total: u8) -> ValidityGrade {
    let mut flags = 0u8;

    if code.judgment == Judgment::Logic && matches!(primary, EngineType::T2 | EngineType::T4) {
        flags += 1;
    }

    if code.attitude == Attitude::Introvert && matches!(primary, EngineType::T3 | EngineType::T8) {
        flags += 1;
    }

    let masking = bias_total == 0 && primary == EngineType::T3;

    if masking || flags >= 2 {
        ValidityGrade::C
    } else if flags == 1 {
        ValidityGrade::B
    } else {
        ValidityGrade::A
    }
}
