use crate::core::{
    error::MatchError,
    pairs::{rank_indexed_pairs, score_indexed_pairs},
};
use crate::models::{
    Answers, GroupAssignments, MatchMap, MatchOutcome, MatchingOptions, PairScore, Population,
};

/// Greedy, group-constrained pairing orchestrator
///
/// # Pipeline Stages
/// 1. Group lookup for every person (fails before any scoring)
/// 2. Pair scoring in ascending id order
/// 3. Stable ranking by descending score
/// 4. Single greedy walk, skipping taken people and same-group pairs
/// 5. Leftovers recorded with no partner
///
/// This is a heuristic: the result is locally greedy, not a maximum-weight
/// matching.
#[derive(Debug, Clone, Default)]
pub struct GroupMatcher {
    options: MatchingOptions,
}

impl GroupMatcher {
    pub fn new(options: MatchingOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MatchingOptions {
        &self.options
    }

    /// Pair up a population
    ///
    /// # Arguments
    /// * `data` - Survey answers for every person
    /// * `groups` - Group label for every person in `data`
    ///
    /// # Returns
    /// MatchOutcome whose match map covers exactly the people in `data`
    pub fn run(
        &self,
        data: &Population,
        groups: &GroupAssignments,
    ) -> Result<MatchOutcome, MatchError> {
        let total_people = data.len();

        if let Some(max) = self.options.max_population {
            if total_people > max {
                return Err(MatchError::PopulationTooLarge { size: total_people, max });
            }
        }

        // Stage 1: every person needs a group before anything is committed
        let ids: Vec<&String> = data.keys().collect();
        let labels = ids
            .iter()
            .map(|id| {
                groups
                    .get(*id)
                    .ok_or_else(|| MatchError::MissingGroup { id: (*id).clone() })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let answers: Vec<Answers> = data.values().copied().collect();

        // Stage 2 & 3: score and rank by position, ids are only cloned on commit
        let mut ranked = score_indexed_pairs(&answers)?;
        rank_indexed_pairs(&mut ranked);

        tracing::debug!("Ranked {} pairs for {} people", ranked.len(), total_people);

        // Stage 4: greedy walk
        let mut matched = vec![false; total_people];
        let mut pairs: Vec<PairScore> = Vec::with_capacity(total_people / 2);
        let mut skipped_same_group = 0;

        for candidate in &ranked {
            let (i, j) = (candidate.i, candidate.j);
            if matched[i] || matched[j] {
                continue;
            }

            if labels[i] == labels[j] {
                tracing::trace!("Skipping {} - {} (same group {})", ids[i], ids[j], labels[i]);
                skipped_same_group += 1;
                continue;
            }

            matched[i] = true;
            matched[j] = true;
            pairs.push(PairScore {
                a: ids[i].clone(),
                b: ids[j].clone(),
                score: candidate.score,
            });
        }

        // Stage 5: leftovers
        let unmatched: Vec<String> = ids
            .iter()
            .zip(&matched)
            .filter(|(_, taken)| !**taken)
            .map(|(id, _)| (*id).clone())
            .collect();

        let match_map = build_match_map(&pairs, &unmatched);

        tracing::debug!(
            "Committed {} pairs, {} unmatched, {} same-group skips",
            pairs.len(),
            unmatched.len(),
            skipped_same_group
        );

        Ok(MatchOutcome {
            match_map,
            pairs,
            unmatched,
            skipped_same_group,
            total_people,
        })
    }
}

/// Build the symmetric person -> partner map
fn build_match_map(pairs: &[PairScore], unmatched: &[String]) -> MatchMap {
    let mut match_map = MatchMap::new();

    for pair in pairs {
        match_map.insert(pair.a.clone(), Some(pair.b.clone()));
        match_map.insert(pair.b.clone(), Some(pair.a.clone()));
    }

    for person in unmatched {
        match_map.insert(person.clone(), None);
    }

    match_map
}

/// Pair up a population with no size limit and return only the match map
pub fn match_population(
    data: &Population,
    groups: &GroupAssignments,
) -> Result<MatchMap, MatchError> {
    GroupMatcher::default()
        .run(data, groups)
        .map(|outcome| outcome.match_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answers;

    fn create_population(entries: &[(&str, u8, u8, &str)]) -> (Population, GroupAssignments) {
        let data = entries
            .iter()
            .map(|(id, q1, q2, _)| (id.to_string(), Answers::new(*q1, *q2)))
            .collect();
        let groups = entries
            .iter()
            .map(|(id, _, _, group)| (id.to_string(), group.to_string()))
            .collect();
        (data, groups)
    }

    #[test]
    fn test_pairs_across_groups() {
        let (data, groups) = create_population(&[
            ("a", 3, 3, "x"),
            ("b", 3, 3, "y"),
            ("c", 1, 1, "x"),
            ("d", 1, 1, "y"),
        ]);

        let outcome = GroupMatcher::default().run(&data, &groups).unwrap();

        assert_eq!(outcome.match_map["a"], Some("b".to_string()));
        assert_eq!(outcome.match_map["b"], Some("a".to_string()));
        assert_eq!(outcome.match_map["c"], Some("d".to_string()));
        assert_eq!(outcome.match_map["d"], Some("c".to_string()));
        assert!(outcome.unmatched.is_empty());
    }

    #[test]
    fn test_same_group_left_unmatched() {
        let (data, groups) = create_population(&[("a", 2, 2, "x"), ("b", 2, 2, "x")]);

        let outcome = GroupMatcher::default().run(&data, &groups).unwrap();

        assert_eq!(outcome.match_map["a"], None);
        assert_eq!(outcome.match_map["b"], None);
        assert_eq!(outcome.skipped_same_group, 1);
        assert!(outcome.pairs.is_empty());
    }

    #[test]
    fn test_odd_population_leaves_one() {
        let (data, groups) = create_population(&[
            ("a", 1, 1, "x"),
            ("b", 1, 1, "y"),
            ("c", 1, 1, "z"),
        ]);

        let outcome = GroupMatcher::default().run(&data, &groups).unwrap();

        // All pairs tie; the first enumerated one wins
        assert_eq!(outcome.match_map["a"], Some("b".to_string()));
        assert_eq!(outcome.unmatched, vec!["c".to_string()]);
        assert_eq!(outcome.match_map["c"], None);
    }

    #[test]
    fn test_missing_group_fails() {
        let (data, mut groups) = create_population(&[("a", 1, 1, "x"), ("b", 1, 1, "y")]);
        groups.remove("b");

        assert_eq!(
            GroupMatcher::default().run(&data, &groups),
            Err(MatchError::MissingGroup { id: "b".to_string() })
        );
    }

    #[test]
    fn test_missing_group_fails_for_singleton() {
        let (data, _) = create_population(&[("solo", 4, 4, "x")]);

        assert_eq!(
            match_population(&data, &GroupAssignments::new()),
            Err(MatchError::MissingGroup { id: "solo".to_string() })
        );
    }

    #[test]
    fn test_population_limit() {
        let (data, groups) = create_population(&[
            ("a", 1, 1, "x"),
            ("b", 1, 1, "y"),
            ("c", 1, 1, "z"),
        ]);
        let matcher = GroupMatcher::new(MatchingOptions { max_population: Some(2) });

        assert_eq!(
            matcher.run(&data, &groups),
            Err(MatchError::PopulationTooLarge { size: 3, max: 2 })
        );
    }

    #[test]
    fn test_empty_population() {
        let map = match_population(&Population::new(), &GroupAssignments::new()).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_singleton_population() {
        let (data, groups) = create_population(&[("solo", 4, 4, "x")]);
        let map = match_population(&data, &groups).unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map["solo"], None);
    }
}
