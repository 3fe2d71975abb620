extern crate serde;

use crate::error::{Error, Kind, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
pub(super) enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "FAILED")]
    Failed,
}

/// `{"status": ..., "comment": ..., "result": ...}` wrapping every API answer.
#[derive(Debug, Deserialize)]
pub(super) struct Envelope<T> {
    status: Status,
    comment: Option<String>,
    result: Option<T>,
}
impl<T> Envelope<T> {
    pub(super) fn into_result(self) -> Result<T> {
        match (self.status, self.result) {
            (Status::Ok, Some(v)) => Ok(v),
            (Status::Ok, None) => Err(Error::api("Response has no result")),
            (Status::Failed, _) => Err(Error::api(
                self.comment.unwrap_or_else(|| String::from("Unknown error")),
            )),
        }
    }
}

pub(super) fn decode<T: serde::de::DeserializeOwned>(
    method: &str,
    status: reqwest::StatusCode,
    body: &str,
) -> Result<T> {
    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(v) => v.into_result(),
        Err(_) if !status.is_success() => {
            Err(Error::with_description(Kind::Status(status), method))
        }
        Err(e) => Err(Error::with_description(Kind::Decode(e), method)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn ok_envelope_yields_result() {
        let v: Vec<u32> =
            decode("x", StatusCode::OK, r#"{"status":"OK","result":[1,2,3]}"#).unwrap();
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn failed_envelope_carries_comment() {
        let e = decode::<Vec<u32>>(
            "user.status",
            StatusCode::BAD_REQUEST,
            r#"{"status":"FAILED","comment":"handle: User with handle x not found"}"#,
        )
        .unwrap_err();
        assert!(e.is_api());
        assert_eq!(e.comment(), Some("handle: User with handle x not found"));
    }

    #[test]
    fn failed_envelope_without_comment() {
        let e = decode::<Vec<u32>>("x", StatusCode::OK, r#"{"status":"FAILED"}"#).unwrap_err();
        assert_eq!(e.comment(), Some("Unknown error"));
    }

    #[test]
    fn non_json_error_page_reports_status() {
        let e = decode::<Vec<u32>>(
            "contest.list",
            StatusCode::SERVICE_UNAVAILABLE,
            "<html>down</html>",
        )
        .unwrap_err();
        assert!(!e.is_api());
        assert!(e.to_string().starts_with("Server responded 503"));
    }

    #[test]
    fn garbage_with_success_status_is_decode_error() {
        let e = decode::<Vec<u32>>("contest.list", StatusCode::OK, "{").unwrap_err();
        assert!(e.to_string().starts_with("Error decoding response"));
    }
}
