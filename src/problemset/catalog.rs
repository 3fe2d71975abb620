extern crate log;

use crate::{
    api::Api,
    error::Failure,
    types::{Problem, ProblemKey},
};
use log::{info, warn};
use std::collections::HashMap;

/// Fetch the whole problemset. A failed fetch yields an empty list and the
/// error, never an abort.
pub async fn load<A: Api + ?Sized>(api: &A) -> (Vec<Problem>, Option<Failure>) {
    match api.problemset().await {
        Ok(v) => {
            info!("Loaded {} problems from problemset", v.len());
            (v, None)
        }
        Err(e) => {
            warn!("Error fetching problemset: {}", e);
            (Vec::new(), Some(Failure::new("problemset", e)))
        }
    }
}

/// Problems bucketed by rating, each bucket keyed by problem key.
#[derive(Debug, Default)]
pub struct Catalog {
    buckets: HashMap<u32, HashMap<ProblemKey, Problem>>,
}
impl Catalog {
    /// Problems without a rating or without a contest id are left out.
    pub fn partition<I: IntoIterator<Item = Problem>>(problems: I) -> Self {
        let mut buckets: HashMap<u32, HashMap<ProblemKey, Problem>> = HashMap::new();
        for p in problems {
            if let (Some(rating), Some(key)) = (p.rating, p.key()) {
                buckets.entry(rating).or_default().insert(key, p);
            }
        }
        Self { buckets }
    }
    pub fn rating(&self, rating: u32) -> Option<&HashMap<ProblemKey, Problem>> {
        self.buckets.get(&rating)
    }
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
    pub fn len(&self) -> usize {
        self.buckets.values().map(HashMap::len).sum()
    }
}
