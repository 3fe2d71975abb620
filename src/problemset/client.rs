extern crate log;
extern crate reqwest;
extern crate serde;

mod envelope;
pub mod rate;

use crate::{
    api::Api,
    config::{api, rate::REQUEST_DELAY},
    error::{network_error, Error, Kind, Result},
    types::{Contest, Problem, Submission},
};
use async_trait::async_trait;
use envelope::decode;
use log::debug;
use rate::RateLimit;
use serde::{de::DeserializeOwned, Deserialize};
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Deserialize)]
struct ProblemsetResult {
    problems: Vec<Problem>,
}

/// HTTP client for the Codeforces API. Every request goes through one shared
/// rate limiter.
pub struct Client {
    client: reqwest::Client,
    base: String,
    rate: RateLimit,
}
impl Client {
    pub fn new() -> Result<Self> {
        Self::with_base(api::BASE_URL, REQUEST_DELAY)
    }
    pub fn with_base(base: &str, delay: Duration) -> Result<Self> {
        Ok(Client {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .map_err(|e| Error::with_kind(Kind::Builder(e)))?,
            base: base.trim_end_matches('/').to_owned(),
            rate: RateLimit::new(delay),
        })
    }
    fn url(&self, method: &str) -> String {
        format!("{}/{}", self.base, method)
    }
    async fn call<T: DeserializeOwned>(&self, method: &str, query: &[(&str, &str)]) -> Result<T> {
        self.rate.wait().await;
        let url = self.url(method);
        debug!("GET {} {:?}", url, query);
        let response = self
            .client
            .get(url.as_str())
            .query(query)
            .send()
            .await
            .map_err(network_error)?;
        let status = response.status();
        let body = response.text().await.map_err(network_error)?;
        debug!("{} responded {} ({} bytes)", method, status, body.len());
        decode(method, status, body.as_str())
    }
}

#[async_trait]
impl Api for Client {
    async fn problemset(&self) -> Result<Vec<Problem>> {
        Ok(self
            .call::<ProblemsetResult>(api::PROBLEMSET, &[])
            .await?
            .problems)
    }
    async fn contests(&self) -> Result<Vec<Contest>> {
        self.call(api::CONTEST_LIST, &[]).await
    }
    async fn user_status(&self, handle: &str) -> Result<Vec<Submission>> {
        self.call(api::USER_STATUS, &[("handle", handle)]).await
    }
}
