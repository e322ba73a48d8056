//! Pairing Algo - group-constrained pairing service for two-question surveys
//!
//! This library scores every pair in a population from their survey answers
//! and pairs people greedily by descending score, never pairing two members
//! of the same group. People left over are reported with no partner.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{
    interest_score, match_population, score_pair, social_score, GroupMatcher, MatchError,
};
pub use crate::models::{
    Answers, GroupAssignments, MatchMap, MatchOutcome, MatchSummary, Population,
};
