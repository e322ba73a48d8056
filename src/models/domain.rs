use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a person taking part in a pairing run
pub type PersonId = String;

/// Group label; two people with equal labels are never paired
pub type GroupLabel = String;

/// Survey answers keyed by person, iterated in ascending id order
pub type Population = BTreeMap<PersonId, Answers>;

/// Group membership keyed by person
pub type GroupAssignments = BTreeMap<PersonId, GroupLabel>;

/// Final pairing: every person maps to a partner or to `None` (no partner)
pub type MatchMap = BTreeMap<PersonId, Option<PersonId>>;

/// Answers to the two survey questions
///
/// Serialized as a two-element array `[q1, q2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u8, u8)", into = "(u8, u8)")]
pub struct Answers {
    /// Interest question
    pub q1: u8,
    /// Social question
    pub q2: u8,
}

impl Answers {
    pub fn new(q1: u8, q2: u8) -> Self {
        Self { q1, q2 }
    }
}

impl From<(u8, u8)> for Answers {
    fn from((q1, q2): (u8, u8)) -> Self {
        Self { q1, q2 }
    }
}

impl From<Answers> for (u8, u8) {
    fn from(answers: Answers) -> Self {
        (answers.q1, answers.q2)
    }
}

/// Combined score of an unordered pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairScore {
    pub a: PersonId,
    pub b: PersonId,
    pub score: u8,
}

/// Breakdown of a pair score into its two sub-scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub interest: u8,
    pub social: u8,
    pub total: u8,
}

/// Options for a matching run
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingOptions {
    /// Largest population accepted in one run; `None` means unbounded
    pub max_population: Option<usize>,
}

/// Everything a matching run produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub match_map: MatchMap,
    /// Committed pairs in the order the greedy walk accepted them
    pub pairs: Vec<PairScore>,
    pub unmatched: Vec<PersonId>,
    /// Pairs rejected because both people share a group
    pub skipped_same_group: usize,
    pub total_people: usize,
}

/// Deduplicated view of a match map for display and export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub pairs: Vec<PairScore>,
    pub unmatched: Vec<PersonId>,
    #[serde(rename = "totalPeople")]
    pub total_people: usize,
    #[serde(rename = "totalPairs")]
    pub total_pairs: usize,
    #[serde(rename = "totalUnmatched")]
    pub total_unmatched: usize,
}
