extern crate log;
extern crate regex;

use crate::{
    api::Api,
    error::Failure,
    types::{Contest, Problem},
};
use log::{info, warn};
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Division numbers mentioned in a contest name, e.g. `{1, 2}` for
/// "Codeforces Round 934 (Div. 1 + Div. 2)".
pub struct DivisionMatcher {
    regex: Regex,
}
impl DivisionMatcher {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(r"Div\. ([[:digit:]]+)").unwrap(),
        }
    }
    pub fn divisions(&self, name: &str) -> HashSet<u32> {
        self.regex
            .captures_iter(name)
            .filter_map(|c| c.get(1)?.as_str().parse().ok())
            .collect()
    }
}
impl Default for DivisionMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Contests of each requested division, contest id -> contest name.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DivisionIndex {
    divisions: Vec<u32>,
    contests: HashMap<u32, HashMap<u32, String>>,
}
impl DivisionIndex {
    pub fn empty(divisions: &[u32]) -> Self {
        Self::build(&[], divisions)
    }
    pub fn build(contests: &[Contest], divisions: &[u32]) -> Self {
        let matcher = DivisionMatcher::new();
        let mut ret = Self::default();
        for &d in divisions {
            if !ret.contests.contains_key(&d) {
                ret.divisions.push(d);
                ret.contests.insert(d, HashMap::new());
            }
        }
        for c in contests {
            for d in matcher.divisions(c.name.as_str()) {
                if let Some(m) = ret.contests.get_mut(&d) {
                    m.insert(c.id, c.name.clone());
                }
            }
        }
        ret
    }
    pub fn divisions(&self) -> &[u32] {
        &self.divisions
    }
    pub fn contests(&self, division: u32) -> Option<&HashMap<u32, String>> {
        self.contests.get(&division)
    }
    pub fn contest_name(&self, division: u32, contest: u32) -> Option<&str> {
        self.contests
            .get(&division)?
            .get(&contest)
            .map(String::as_str)
    }
}

/// Problems of each division's contests, in catalog order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DivisionProblems {
    divisions: Vec<u32>,
    problems: HashMap<u32, Vec<Problem>>,
}
impl DivisionProblems {
    pub fn group(problems: &[Problem], index: &DivisionIndex) -> Self {
        let mut ret = Self {
            divisions: index.divisions().to_vec(),
            problems: HashMap::new(),
        };
        for &d in index.divisions() {
            let contests = index.contests(d);
            let list = problems
                .iter()
                .filter(|p| match (p.contest_id, contests) {
                    (Some(id), Some(c)) => c.contains_key(&id),
                    _ => false,
                })
                .cloned()
                .collect();
            ret.problems.insert(d, list);
        }
        ret
    }
    pub fn get(&self, division: u32) -> Option<&[Problem]> {
        self.problems.get(&division).map(Vec::as_slice)
    }
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[Problem])> + '_ {
        self.divisions
            .iter()
            .map(move |d| (*d, self.problems[d].as_slice()))
    }
    pub fn total(&self) -> usize {
        self.problems.values().map(Vec::len).sum()
    }
}

/// Fetch the contest list and index it. A failed fetch yields an index with
/// no contests.
pub async fn load<A: Api + ?Sized>(api: &A, divisions: &[u32]) -> (DivisionIndex, Option<Failure>) {
    match api.contests().await {
        Ok(v) => {
            info!("Loaded {} contests", v.len());
            (DivisionIndex::build(&v, divisions), None)
        }
        Err(e) => {
            warn!("Error fetching contests: {}", e);
            (
                DivisionIndex::empty(divisions),
                Some(Failure::new("contests", e)),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contest(id: u32, name: &str) -> Contest {
        Contest {
            id,
            name: name.to_owned(),
        }
    }
    fn problem(contest: Option<u32>, index: &str) -> Problem {
        Problem {
            contest_id: contest,
            index: index.to_owned(),
            name: String::new(),
            rating: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn matcher_reads_all_divisions() {
        let m = DivisionMatcher::new();
        let d = m.divisions("Codeforces Round 934 (Div. 1 + Div. 2)");
        assert_eq!(d, vec![1, 2].into_iter().collect::<HashSet<_>>());
        assert!(m.divisions("Educational Codeforces Round 163").is_empty());
    }

    #[test]
    fn div_1_does_not_match_div_12() {
        let m = DivisionMatcher::new();
        assert!(!m.divisions("Fake Round (Div. 12)").contains(&1));
    }

    #[test]
    fn index_assigns_shared_contests_to_both() {
        let idx = DivisionIndex::build(
            &[
                contest(1, "Round 1 (Div. 2)"),
                contest(2, "Round 2 (Div. 1 + Div. 2)"),
                contest(3, "Round 3 (Div. 3)"),
                contest(4, "Round 4 (Div. 4)"),
            ],
            &[2, 3],
        );
        assert_eq!(idx.divisions(), &[2, 3]);
        assert_eq!(idx.contests(2).map(HashMap::len), Some(2));
        assert_eq!(idx.contest_name(3, 3), Some("Round 3 (Div. 3)"));
        assert_eq!(idx.contest_name(3, 4), None);
        assert!(idx.contests(4).is_none());
    }

    #[test]
    fn group_keeps_catalog_order() {
        let idx = DivisionIndex::build(
            &[contest(10, "A (Div. 2)"), contest(20, "B (Div. 3)")],
            &[2, 3],
        );
        let g = DivisionProblems::group(
            &[
                problem(Some(10), "B"),
                problem(Some(20), "A"),
                problem(Some(10), "A"),
                problem(None, "Z"),
                problem(Some(30), "A"),
            ],
            &idx,
        );
        let div2: Vec<_> = g.get(2).unwrap().iter().map(|p| p.index.as_str()).collect();
        assert_eq!(div2, vec!["B", "A"]);
        assert_eq!(g.get(3).map(<[Problem]>::len), Some(1));
        assert_eq!(g.total(), 3);
    }

    #[test]
    fn empty_index_groups_nothing() {
        let g = DivisionProblems::group(&[problem(Some(1), "A")], &DivisionIndex::empty(&[2, 3]));
        let sizes: Vec<_> = g.iter().map(|(d, p)| (d, p.len())).collect();
        assert_eq!(sizes, vec![(2, 0), (3, 0)]);
    }
}
