// Core algorithm exports
pub mod error;
pub mod matcher;
pub mod pairs;
pub mod scoring;
pub mod summary;

pub use error::MatchError;
pub use matcher::{match_population, GroupMatcher};
pub use pairs::{rank_indexed_pairs, rank_pairs, score_all_pairs, score_indexed_pairs, IndexedPair};
pub use scoring::{interest_score, score_breakdown, score_pair, social_score};
pub use summary::summarize;
