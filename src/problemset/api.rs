extern crate async_trait;

use crate::{
    error::Result,
    types::{Contest, Problem, Submission},
};
use async_trait::async_trait;

/// The three Codeforces endpoints the tools read from.
#[async_trait]
pub trait Api {
    async fn problemset(&self) -> Result<Vec<Problem>>;
    async fn contests(&self) -> Result<Vec<Contest>>;
    async fn user_status(&self, handle: &str) -> Result<Vec<Submission>>;
}
