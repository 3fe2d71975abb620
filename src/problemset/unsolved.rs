use crate::{catalog::Catalog, solved::SolvedSet, types::Problem};
use std::collections::HashMap;

/// Unsolved problems per requested rating. Ratings keep their first-request
/// order; a rating requested twice is stored once.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UnsolvedResult {
    ratings: Vec<u32>,
    buckets: HashMap<u32, Vec<Problem>>,
}
impl UnsolvedResult {
    /// Empty bucket for every requested rating.
    pub fn empty(ratings: &[u32]) -> Self {
        let mut ret = Self::default();
        for &r in ratings {
            ret.insert(r, Vec::new());
        }
        ret
    }
    fn insert(&mut self, rating: u32, problems: Vec<Problem>) {
        if self.buckets.insert(rating, problems).is_none() {
            self.ratings.push(rating);
        }
    }
    pub fn get(&self, rating: u32) -> Option<&[Problem]> {
        self.buckets.get(&rating).map(Vec::as_slice)
    }
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[Problem])> + '_ {
        self.ratings
            .iter()
            .map(move |r| (*r, self.buckets[r].as_slice()))
    }
    pub fn ratings(&self) -> &[u32] {
        &self.ratings
    }
    pub fn len(&self) -> usize {
        self.ratings.len()
    }
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// For each rating, the catalog problems of that rating whose key is not in
/// `solved`, sorted by key.
pub fn filter(catalog: &Catalog, ratings: &[u32], solved: &SolvedSet) -> UnsolvedResult {
    let mut ret = UnsolvedResult::default();
    for &rating in ratings {
        if ret.buckets.contains_key(&rating) {
            continue;
        }
        let mut problems: Vec<(_, Problem)> = catalog
            .rating(rating)
            .into_iter()
            .flatten()
            .filter(|(key, _)| !solved.contains(key))
            .map(|(key, p)| (key, p.clone()))
            .collect();
        problems.sort_unstable_by(|a, b| a.0.cmp(b.0));
        ret.insert(rating, problems.into_iter().map(|(_, p)| p).collect());
    }
    ret
}
