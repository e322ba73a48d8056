use crate::core::{error::MatchError, scoring::score_breakdown};
use crate::models::{Answers, PairScore, Population};

/// A scored pair as positions into the enumerated population (`i < j`)
///
/// Keeps ranking free of per-pair id allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedPair {
    pub i: usize,
    pub j: usize,
    pub score: u8,
}

/// Score every `i < j` pair of an answer slice, row-major
pub fn score_indexed_pairs(answers: &[Answers]) -> Result<Vec<IndexedPair>, MatchError> {
    let n = answers.len();
    let mut scores = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for (i, a) in answers.iter().enumerate() {
        for (offset, b) in answers[i + 1..].iter().enumerate() {
            scores.push(IndexedPair {
                i,
                j: i + 1 + offset,
                score: score_breakdown(*a, *b)?.total,
            });
        }
    }

    Ok(scores)
}

/// Stable descending sort of indexed pairs; ties keep enumeration order
pub fn rank_indexed_pairs(scores: &mut [IndexedPair]) {
    scores.sort_by(|x, y| y.score.cmp(&x.score));
}

/// Score every unordered pair of distinct people exactly once
///
/// People are taken in ascending id order and pairs are produced row-major
/// (`i < j`), so the output order only depends on the ids.
pub fn score_all_pairs(data: &Population) -> Result<Vec<PairScore>, MatchError> {
    let ids: Vec<&String> = data.keys().collect();
    let answers: Vec<Answers> = data.values().copied().collect();

    let scores = score_indexed_pairs(&answers)?
        .into_iter()
        .map(|p| PairScore {
            a: ids[p.i].clone(),
            b: ids[p.j].clone(),
            score: p.score,
        })
        .collect();

    Ok(scores)
}

/// Order pairs by descending score
///
/// The sort is stable: equal scores keep their enumeration order.
pub fn rank_pairs(mut scores: Vec<PairScore>) -> Vec<PairScore> {
    scores.sort_by(|x, y| y.score.cmp(&x.score));
    scores
}
