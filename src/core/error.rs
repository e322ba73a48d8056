use thiserror::Error;

/// Errors raised by scoring and matching
///
/// All of them describe malformed input; none is recoverable by retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Unknown social answer: {value}")]
    UnknownAnswer { value: u8 },

    #[error("Person not in population: {id}")]
    MissingPerson { id: String },

    #[error("No group assigned to person: {id}")]
    MissingGroup { id: String },

    #[error("Population of {size} exceeds the limit of {max}")]
    PopulationTooLarge { size: usize, max: usize },
}
