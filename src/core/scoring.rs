use crate::core::error::MatchError;
use crate::models::{Answers, Population, ScoreBreakdown};

/// Social answers that score 2 against the keyed answer
static BEST_ALT_MATCHES: [(u8, &[u8]); 5] = [
    (1, &[4]),
    (2, &[1, 4]),
    (3, &[5]),
    (4, &[1, 2]),
    (5, &[3]),
];

/// Social answers that score 1 against the keyed answer
static MEDIUM_ALT_MATCHES: [(u8, &[u8]); 5] = [
    (1, &[2]),
    (2, &[5]),
    (3, &[2]),
    (4, &[5]),
    (5, &[2, 4]),
];

#[inline]
fn lookup(table: &'static [(u8, &'static [u8])], key: u8) -> Option<&'static [u8]> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, alts)| *alts)
}

/// Score the interest question (0-3)
///
/// Identical answers score 3, and every step apart costs one point.
#[inline]
pub fn interest_score(a: u8, b: u8) -> u8 {
    match a.abs_diff(b) {
        0 => 3,
        1 => 2,
        2 => 1,
        _ => 0,
    }
}

/// Score the social question (0-3)
///
/// Looked up by `a` only, so `social_score(a, b)` and `social_score(b, a)`
/// may differ. Fails when `a` has no row in the alternative tables.
#[inline]
pub fn social_score(a: u8, b: u8) -> Result<u8, MatchError> {
    let best = lookup(&BEST_ALT_MATCHES, a);
    let medium = lookup(&MEDIUM_ALT_MATCHES, a);

    let (Some(best), Some(medium)) = (best, medium) else {
        return Err(MatchError::UnknownAnswer { value: a });
    };

    let score = if a == b {
        3
    } else if best.contains(&b) {
        2
    } else if medium.contains(&b) {
        1
    } else {
        0
    };

    Ok(score)
}

/// Score both questions for two answer sets, keeping the sub-scores
pub fn score_breakdown(a: Answers, b: Answers) -> Result<ScoreBreakdown, MatchError> {
    let interest = interest_score(a.q1, b.q1);
    let social = social_score(a.q2, b.q2)?;

    Ok(ScoreBreakdown {
        interest,
        social,
        total: interest + social,
    })
}

/// Combined score (0-6) of two people in the population
///
/// score = interest(a.q1, b.q1) + social(a.q2, b.q2)
pub fn score_pair(person_a: &str, person_b: &str, data: &Population) -> Result<u8, MatchError> {
    let answers = |id: &str| {
        data.get(id)
            .copied()
            .ok_or_else(|| MatchError::MissingPerson { id: id.to_string() })
    };

    let a = answers(person_a)?;
    let b = answers(person_b)?;

    Ok(score_breakdown(a, b)?.total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_score() {
        assert_eq!(interest_score(3, 3), 3);
        assert_eq!(interest_score(2, 3), 2);
        assert_eq!(interest_score(5, 3), 1);
        assert_eq!(interest_score(1, 5), 0);
    }

    #[test]
    fn test_interest_score_symmetric() {
        for a in 1..=5 {
            for b in 1..=5 {
                assert_eq!(interest_score(a, b), interest_score(b, a));
            }
        }
    }

    #[test]
    fn test_social_score_tables() {
        assert_eq!(social_score(4, 4), Ok(3));
        assert_eq!(social_score(4, 2), Ok(2));
        assert_eq!(social_score(4, 5), Ok(1));
        assert_eq!(social_score(4, 3), Ok(0));
    }

    #[test]
    fn test_social_score_keyed_by_first_answer() {
        // 2 lists 1 as a best alternative, 1 only lists 2 as a medium one
        assert_eq!(social_score(2, 1), Ok(2));
        assert_eq!(social_score(1, 2), Ok(1));
    }

    #[test]
    fn test_social_score_unknown_key() {
        assert_eq!(social_score(9, 1), Err(MatchError::UnknownAnswer { value: 9 }));
        // An unknown second answer just misses every table row
        assert_eq!(social_score(1, 9), Ok(0));
    }

    #[test]
    fn test_score_pair() {
        let mut data = Population::new();
        data.insert("Bob".to_string(), Answers::new(1, 2));
        data.insert("Frank".to_string(), Answers::new(1, 5));

        assert_eq!(score_pair("Bob", "Frank", &data), Ok(4));
        assert_eq!(
            score_pair("Bob", "Zoe", &data),
            Err(MatchError::MissingPerson { id: "Zoe".to_string() })
        );
    }
}
