use crate::core::{error::MatchError, scoring::score_pair};
use crate::models::{MatchMap, MatchSummary, PairScore, Population};

/// Collapse a symmetric match map into one record per pair
///
/// Each pair is reported once as `(a, b)` with `a < b`, together with its
/// combined score. Fails when a pair's score cannot be derived from `data`
/// (a person missing from it, or an answer outside the tables).
pub fn summarize(match_map: &MatchMap, data: &Population) -> Result<MatchSummary, MatchError> {
    let mut pairs = Vec::new();
    let mut unmatched = Vec::new();

    for (person, partner) in match_map {
        match partner {
            Some(partner) if person < partner => {
                let score = score_pair(person, partner, data)?;
                pairs.push(PairScore {
                    a: person.clone(),
                    b: partner.clone(),
                    score,
                });
            }
            Some(_) => {}
            None => unmatched.push(person.clone()),
        }
    }

    Ok(MatchSummary {
        total_people: match_map.len(),
        total_pairs: pairs.len(),
        total_unmatched: unmatched.len(),
        pairs,
        unmatched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answers;

    #[test]
    fn test_summarize_dedups_pairs() {
        let mut data = Population::new();
        data.insert("Bob".to_string(), Answers::new(1, 2));
        data.insert("Frank".to_string(), Answers::new(1, 5));
        data.insert("Eve".to_string(), Answers::new(5, 1));

        let mut map = MatchMap::new();
        map.insert("Bob".to_string(), Some("Frank".to_string()));
        map.insert("Frank".to_string(), Some("Bob".to_string()));
        map.insert("Eve".to_string(), None);

        let summary = summarize(&map, &data).unwrap();

        assert_eq!(summary.total_people, 3);
        assert_eq!(summary.total_pairs, 1);
        assert_eq!(summary.total_unmatched, 1);
        assert_eq!(
            summary.pairs,
            vec![PairScore { a: "Bob".to_string(), b: "Frank".to_string(), score: 4 }]
        );
        assert_eq!(summary.unmatched, vec!["Eve".to_string()]);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&MatchMap::new(), &Population::new()).unwrap();

        assert_eq!(summary.total_people, 0);
        assert!(summary.pairs.is_empty());
        assert!(summary.unmatched.is_empty());
    }

    #[test]
    fn test_summarize_missing_person_fails() {
        let mut data = Population::new();
        data.insert("Bob".to_string(), Answers::new(1, 2));

        let mut map = MatchMap::new();
        map.insert("Bob".to_string(), Some("Frank".to_string()));
        map.insert("Frank".to_string(), Some("Bob".to_string()));

        assert_eq!(
            summarize(&map, &data),
            Err(MatchError::MissingPerson { id: "Frank".to_string() })
        );
    }
}
