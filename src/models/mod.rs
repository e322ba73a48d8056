// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Answers, GroupAssignments, GroupLabel, MatchMap, MatchOutcome, MatchSummary, MatchingOptions,
    PairScore, PersonId, Population, ScoreBreakdown,
};
pub use requests::{MatchRequest, ScorePairRequest};
pub use responses::{ErrorResponse, HealthResponse, MatchResponse};
