extern crate log;

use crate::{
    api::Api,
    catalog::{self, Catalog},
    division::{self, DivisionIndex, DivisionProblems},
    error::Failure,
    settings::Settings,
    solved,
    unsolved::{self, UnsolvedResult},
};
use log::info;

/// A finished run: whatever could be computed, plus every fetch that failed.
#[derive(Debug)]
pub struct Outcome<T> {
    pub value: T,
    pub failures: Vec<Failure>,
}

pub async fn search_unsolved<A: Api + ?Sized>(api: &A, settings: &Settings) -> Outcome<UnsolvedResult> {
    let (problems, failure) = catalog::load(api).await;
    let mut failures: Vec<Failure> = failure.into_iter().collect();
    if problems.is_empty() {
        info!("Empty problemset, skipping user fetches");
        return Outcome {
            value: UnsolvedResult::empty(&settings.ratings),
            failures,
        };
    }
    let catalog = Catalog::partition(problems);
    let (solved, user_failures) =
        solved::build(api, &settings.handles, settings.accepted_only).await;
    failures.extend(user_failures);
    info!(
        "{} rated problems, {} solved by {} users",
        catalog.len(),
        solved.len(),
        settings.handles.len()
    );
    Outcome {
        value: unsolved::filter(&catalog, &settings.ratings, &solved),
        failures,
    }
}

pub async fn search_divisions<A: Api + ?Sized>(
    api: &A,
    settings: &Settings,
) -> Outcome<(DivisionIndex, DivisionProblems)> {
    let (index, failure) = division::load(api, &settings.divisions).await;
    let mut failures: Vec<Failure> = failure.into_iter().collect();
    let (problems, failure) = catalog::load(api).await;
    failures.extend(failure);
    let grouped = DivisionProblems::group(&problems, &index);
    Outcome {
        value: (index, grouped),
        failures,
    }
}
