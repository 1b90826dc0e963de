use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of questions in a complete wizard run.
pub const QUESTION_COUNT: u8 = 72;

/// Binary choice recorded for a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    A,
    B,
}

/// Completed (or partial) questionnaire keyed by question id.
///
/// Ids outside 1..=72 never match a scoring rule; absent ids contribute
/// nothing to any tally, so every scoring pass is total over any sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet(BTreeMap<u8, Answer>);

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question_id: u8, answer: Answer) {
        self.0.insert(question_id, answer);
    }

    pub fn answer(&self, question_id: u8) -> Option<Answer> {
        self.0.get(&question_id).copied()
    }

    /// True when the question was answered with exactly `expected`.
    pub fn matches(&self, question_id: u8, expected: Answer) -> bool {
        self.answer(question_id) == Some(expected)
    }

    pub fn answered(&self) -> usize {
        self.0.len()
    }

    pub fn is_complete(&self) -> bool {
        (1..=QUESTION_COUNT).all(|id| self.0.contains_key(&id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, Answer)> + '_ {
        self.0.iter().map(|(id, answer)| (*id, *answer))
    }
}

impl FromIterator<(u8, Answer)> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = (u8, Answer)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Extraversion/introversion axis of the typology code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attitude {
    Extravert,
    Introvert,
}

impl Attitude {
    pub const fn letter(self) -> char {
        match self {
            Attitude::Extravert => 'E',
            Attitude::Introvert => 'I',
        }
    }
}

/// Intuition/sensing axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Information {
    Intuition,
    Sensing,
}

impl Information {
    pub const fn letter(self) -> char {
        match self {
            Information::Intuition => 'N',
            Information::Sensing => 'S',
        }
    }
}

/// Logic/ethic axis (rendered T/F).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Judgment {
    Logic,
    Ethic,
}

impl Judgment {
    pub const fn letter(self) -> char {
        match self {
            Judgment::Logic => 'T',
            Judgment::Ethic => 'F',
        }
    }
}

/// Judging/perceiving axis. Rendered lowercase in the code by domain
/// convention regardless of the other letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionStyle {
    Judging,
    Perceiving,
}

impl DecisionStyle {
    pub const fn letter(self) -> char {
        match self {
            DecisionStyle::Judging => 'j',
            DecisionStyle::Perceiving => 'p',
        }
    }
}

/// Four-axis typology code, one of 16 values such as `ENTj`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypologyCode {
    pub attitude: Attitude,
    pub information: Information,
    pub judgment: Judgment,
    pub decision: DecisionStyle,
}

impl fmt::Display for TypologyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.attitude.letter(),
            self.information.letter(),
            self.judgment.letter(),
            self.decision.letter()
        )
    }
}

/// Error returned when a string is not one of the 16 typology codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a typology code")]
pub struct ParseTypologyCodeError(String);

impl FromStr for TypologyCode {
    type Err = ParseTypologyCodeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTypologyCodeError(value.to_string());
        let mut chars = value.chars();

        let attitude = match chars.next() {
            Some('E') => Attitude::Extravert,
            Some('I') => Attitude::Introvert,
            _ => return Err(invalid()),
        };
        let information = match chars.next() {
            Some('N') => Information::Intuition,
            Some('S') => Information::Sensing,
            _ => return Err(invalid()),
        };
        let judgment = match chars.next() {
            Some('T') => Judgment::Logic,
            Some('F') => Judgment::Ethic,
            _ => return Err(invalid()),
        };
        let decision = match chars.next() {
            Some('j') => DecisionStyle::Judging,
            Some('p') => DecisionStyle::Perceiving,
            _ => return Err(invalid()),
        };

        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            attitude,
            information,
            judgment,
            decision,
        })
    }
}

impl Serialize for TypologyCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypologyCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Behavioral engagement subtype, independent of the typology code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subtype {
    Contact,
    Inert,
}

/// Motivation engine archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EngineType {
    T1,
    T2,
    T3,
    T4,
    T5,
    T6,
    T7,
    T8,
    T9,
}

impl EngineType {
    /// Declaration order doubles as the final tie-break order during ranking.
    pub const ALL: [EngineType; 9] = [
        EngineType::T1,
        EngineType::T2,
        EngineType::T3,
        EngineType::T4,
        EngineType::T5,
        EngineType::T6,
        EngineType::T7,
        EngineType::T8,
        EngineType::T9,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            EngineType::T1 => "T1",
            EngineType::T2 => "T2",
            EngineType::T3 => "T3",
            EngineType::T4 => "T4",
            EngineType::T5 => "T5",
            EngineType::T6 => "T6",
            EngineType::T7 => "T7",
            EngineType::T8 => "T8",
            EngineType::T9 => "T9",
        }
    }
}

/// Top two motivation engines by tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineRanking {
    pub primary: EngineType,
    pub secondary: EngineType,
}

/// The five cognitive biases the questionnaire probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BiasKind {
    Confirmation,
    SunkCost,
    StatusQuo,
    Authority,
    Availability,
}

impl BiasKind {
    pub const ALL: [BiasKind; 5] = [
        BiasKind::Confirmation,
        BiasKind::SunkCost,
        BiasKind::StatusQuo,
        BiasKind::Authority,
        BiasKind::Availability,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            BiasKind::Confirmation => "Confirmation",
            BiasKind::SunkCost => "SunkCost",
            BiasKind::StatusQuo => "StatusQuo",
            BiasKind::Authority => "Authority",
            BiasKind::Availability => "Availability",
        }
    }
}

/// Per-bias scores (0..=2 each), fired alerts, and the 0..=10 total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasProfile {
    pub scores: BTreeMap<BiasKind, u8>,
    pub alerts: Vec<BiasKind>,
    pub total_score: u8,
}

/// Chart coordinates, both axes within 0.0..=10.0, rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatrixPoint {
    pub x: f64,
    pub y: f64,
}

/// Consistency grade over the whole result. Annotates, never suppresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValidityGrade {
    A,
    B,
    C,
}

impl ValidityGrade {
    pub const fn label(self) -> &'static str {
        match self {
            ValidityGrade::A => "A",
            ValidityGrade::B => "B",
            ValidityGrade::C => "C",
        }
    }
}

/// Typology code plus subtype, the "OS" half of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsProfile {
    pub code: TypologyCode,
    pub subtype: Subtype,
}

/// Immutable aggregate produced once per completed questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub os: OsProfile,
    pub engine: EngineRanking,
    pub bias: BiasProfile,
    pub matrix: MatrixPoint,
    pub validity: ValidityGrade,
    pub generated_at: DateTime<Utc>,
}
