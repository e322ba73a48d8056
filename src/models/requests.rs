use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{Answers, GroupAssignments, Population};

/// Request to pair a population
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(custom(function = "validate_person_ids"))]
    #[serde(default)]
    pub people: Population,
    #[serde(default)]
    pub groups: GroupAssignments,
}

/// Request to score a single pair of answer sets
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScorePairRequest {
    #[validate(custom(function = "validate_answers"))]
    pub a: Answers,
    #[validate(custom(function = "validate_answers"))]
    pub b: Answers,
}

/// Lowest accepted survey answer
pub const MIN_ANSWER: u8 = 1;
/// Highest accepted survey answer
pub const MAX_ANSWER: u8 = 5;

fn validate_person_ids(people: &Population) -> Result<(), ValidationError> {
    if people.keys().any(|id| id.trim().is_empty()) {
        return Err(ValidationError::new("empty_person_id"));
    }
    Ok(())
}

fn validate_answers(answers: &Answers) -> Result<(), ValidationError> {
    let in_range = |v: u8| (MIN_ANSWER..=MAX_ANSWER).contains(&v);
    if !in_range(answers.q1) || !in_range(answers.q2) {
        return Err(ValidationError::new("answer_out_of_range"));
    }
    Ok(())
}
