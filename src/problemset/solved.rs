extern crate futures;
extern crate log;

use crate::{
    api::Api,
    error::Failure,
    types::{ProblemKey, Submission},
};
use futures::{pin_mut, stream, StreamExt};
use log::{info, warn};
use std::collections::HashSet;

/// Keys of every problem the given users have submitted to.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SolvedSet(HashSet<ProblemKey>);

impl SolvedSet {
    pub fn new() -> Self {
        Self::default()
    }
    /// Only problems carrying both a contest id and a rating count. Without
    /// `accepted_only` any verdict counts as solved.
    pub fn add_submissions<'a, I>(&mut self, submissions: I, accepted_only: bool)
    where
        I: IntoIterator<Item = &'a Submission>,
    {
        for s in submissions {
            if accepted_only && !s.accepted() {
                continue;
            }
            if s.problem.rating.is_none() {
                continue;
            }
            if let Some(key) = s.problem.key() {
                self.0.insert(key);
            }
        }
    }
    pub fn insert(&mut self, key: ProblemKey) -> bool {
        self.0.insert(key)
    }
    pub fn contains(&self, key: &ProblemKey) -> bool {
        self.0.contains(key)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl std::iter::FromIterator<ProblemKey> for SolvedSet {
    fn from_iter<I: IntoIterator<Item = ProblemKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Fetch each handle's submissions one after another and union them. A
/// handle whose fetch fails contributes nothing.
pub async fn build<A, S>(api: &A, handles: &[S], accepted_only: bool) -> (SolvedSet, Vec<Failure>)
where
    A: Api + ?Sized,
    S: AsRef<str>,
{
    let mut solved = SolvedSet::new();
    let mut failures = Vec::new();
    let results = stream::iter(handles.iter().map(|h| h.as_ref().trim()))
        .then(|handle| async move { (handle, api.user_status(handle).await) });
    pin_mut!(results);
    while let Some((handle, result)) = results.next().await {
        match result {
            Ok(submissions) => {
                let before = solved.len();
                solved.add_submissions(&submissions, accepted_only);
                info!(
                    "{}: {} submissions, {} new problems",
                    handle,
                    submissions.len(),
                    solved.len() - before
                );
            }
            Err(e) => {
                warn!("Error fetching data for {}: {}", handle, e);
                failures.push(Failure::new(format!("user {}", handle), e));
            }
        }
    }
    (solved, failures)
}
