extern crate reqwest;
extern crate serde_json;

use std::{boxed::Box, convert::Into, error::Error as StdError, fmt, result::Result as StdResult};

#[derive(Debug)]
pub struct Error(Box<Inner>);
#[derive(Debug)]
pub(crate) enum Kind {
    Builder(reqwest::Error),
    Network(reqwest::Error),
    Status(reqwest::StatusCode),
    Api,
    Decode(serde_json::Error),
}
#[derive(Debug)]
struct Inner {
    kind: Kind,
    description: Option<String>,
}

pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.kind {
            Kind::Builder(err) => write!(f, "Error building client: {}", err)?,
            Kind::Network(err) => write!(f, "Error sending request: {}", err)?,
            Kind::Status(code) => write!(f, "Server responded {}", code)?,
            Kind::Api => write!(f, "API request failed")?,
            Kind::Decode(err) => write!(f, "Error decoding response: {}", err)?,
        }
        self.write_description(f)
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0.kind {
            Kind::Builder(x) | Kind::Network(x) => Some(x),
            Kind::Decode(x) => Some(x),
            Kind::Status(_) | Kind::Api => None,
        }
    }
}
impl Error {
    fn new(inner: Inner) -> Self {
        Self(Box::new(inner))
    }
    pub(crate) fn with_kind(kind: Kind) -> Self {
        Self::new(Inner {
            kind,
            description: None,
        })
    }
    pub(crate) fn with_description<T: Into<String>>(kind: Kind, description: T) -> Self {
        Self::new(Inner {
            kind,
            description: Some(description.into()),
        })
    }
    /// A FAILED envelope, carrying the server's comment.
    pub fn api<T: Into<String>>(comment: T) -> Self {
        Self::with_description(Kind::Api, comment)
    }
    pub fn is_api(&self) -> bool {
        matches!(self.0.kind, Kind::Api)
    }
    pub fn comment(&self) -> Option<&str> {
        self.0.description.as_deref()
    }
    fn write_description(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(d) = &self.0.description {
            write!(f, ": {}", d)
        } else {
            Ok(())
        }
    }
}

/// A fetch that failed and was degraded to an empty result.
#[derive(Debug)]
pub struct Failure {
    pub target: String,
    pub error: Error,
}
impl Failure {
    pub fn new<T: Into<String>>(target: T, error: Error) -> Self {
        Self {
            target: target.into(),
            error,
        }
    }
}
impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error fetching {}: {}", self.target, self.error)
    }
}
impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}

pub(crate) fn network_error(err: reqwest::Error) -> Error {
    Error::with_kind(Kind::Network(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_should_show_comment() {
        let e = Error::api("handle: User with handle nobody not found");
        assert!(e.is_api());
        assert_eq!(
            e.to_string(),
            "API request failed: handle: User with handle nobody not found"
        );
        assert!(e.source().is_none());
    }

    #[test]
    fn failure_names_target() {
        let f = Failure::new("user tourist", Error::api("limit exceeded"));
        assert_eq!(
            f.to_string(),
            "Error fetching user tourist: API request failed: limit exceeded"
        );
    }

    #[test]
    fn decode_error_keeps_source() {
        let json = serde_json::from_str::<u32>("nope").unwrap_err();
        let e = Error::with_description(Kind::Decode(json), "problemset.problems");
        assert!(e.source().is_some());
        assert!(e.to_string().ends_with(": problemset.problems"));
    }
}
