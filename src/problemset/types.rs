extern crate serde;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identity of a problem: contest id and problem index.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProblemKey {
    pub contest: u32,
    pub index: String,
}
impl ProblemKey {
    pub fn new<T: Into<String>>(contest: u32, index: T) -> Self {
        Self {
            contest,
            index: index.into(),
        }
    }
}
impl fmt::Display for ProblemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.contest, self.index)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(default)]
    pub contest_id: Option<u32>,
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}
impl Problem {
    /// `None` for problems that are not attached to a contest.
    pub fn key(&self) -> Option<ProblemKey> {
        self.contest_id
            .map(|contest| ProblemKey::new(contest, self.index.as_str()))
    }
}
impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.contest_id {
            Some(c) => write!(f, "{}{} - {}", c, self.index, self.name),
            None => write!(f, "{} - {}", self.index, self.name),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Contest {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Submission {
    pub problem: Problem,
    #[serde(default)]
    pub verdict: Option<String>,
}
impl Submission {
    pub fn accepted(&self) -> bool {
        self.verdict.as_deref() == Some("OK")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_should_decode_api_shape() {
        let p: Problem = serde_json::from_str(
            r#"{"contestId":1950,"index":"G","name":"Shuffling Songs","type":"PROGRAMMING",
                "points":3000.0,"rating":1900,"tags":["bitmasks","dp","graphs"]}"#,
        )
        .unwrap();
        assert_eq!(p.contest_id, Some(1950));
        assert_eq!(p.rating, Some(1900));
        assert_eq!(p.tags.len(), 3);
        assert_eq!(p.key(), Some(ProblemKey::new(1950, "G")));
    }

    #[test]
    fn problem_without_contest_has_no_key() {
        let p: Problem = serde_json::from_str(r#"{"index":"A","name":"x"}"#).unwrap();
        assert_eq!(p.key(), None);
        assert_eq!(p.rating, None);
        assert!(p.tags.is_empty());
    }

    #[test]
    fn submission_verdict_is_optional() {
        let s: Submission =
            serde_json::from_str(r#"{"id":1,"problem":{"contestId":1,"index":"A"}}"#).unwrap();
        assert!(!s.accepted());
        let s: Submission = serde_json::from_str(
            r#"{"id":2,"verdict":"OK","problem":{"contestId":1,"index":"A"}}"#,
        )
        .unwrap();
        assert!(s.accepted());
    }
}
