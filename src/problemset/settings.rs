extern crate serde;
extern crate serde_yaml;

use crate::config::{api, export, rate};
use serde::{Deserialize, Serialize};
use std::{error::Error as StdError, fmt, io::Read, time::Duration};

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Error reading settings: {}", e),
            Self::Yaml(e) => write!(f, "Error parsing settings: {}", e),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Yaml(e) => Some(e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Templates {
    pub link: String,
    pub rating_sheet: String,
    pub division_sheet: String,
}
impl Default for Templates {
    fn default() -> Self {
        Self {
            link: export::LINK_TEMPLATE.to_owned(),
            rating_sheet: export::RATING_SHEET.to_owned(),
            division_sheet: export::DIVISION_SHEET.to_owned(),
        }
    }
}

/// Everything a run needs. Fields missing from a settings file keep their
/// default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub handles: Vec<String>,
    pub ratings: Vec<u32>,
    pub divisions: Vec<u32>,
    pub accepted_only: bool,
    pub api_base: String,
    pub request_delay_ms: u64,
    pub unsolved_output: String,
    pub division_output: String,
    pub templates: Templates,
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            handles: vec![
                String::from("tourist"),
                String::from("Benq"),
                String::from("rainboy"),
            ],
            ratings: vec![1300, 1500, 1700, 1900, 2100, 2300],
            divisions: vec![2, 3],
            accepted_only: false,
            api_base: api::BASE_URL.to_owned(),
            request_delay_ms: rate::REQUEST_DELAY.as_millis() as u64,
            unsolved_output: export::UNSOLVED_OUTPUT.to_owned(),
            division_output: export::DIVISION_OUTPUT.to_owned(),
            templates: Templates::default(),
        }
    }
}
impl Settings {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

pub fn from_reader<R: Read>(rdr: R) -> Result<Settings, Error> {
    serde_yaml::from_reader(rdr).map_err(Error::Yaml)
}
pub fn from_path(path: &str) -> Result<Settings, Error> {
    from_reader(std::fs::File::open(path).map_err(Error::Io)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_builtin_run() {
        let s = Settings::default();
        assert_eq!(s.handles, vec!["tourist", "Benq", "rainboy"]);
        assert_eq!(s.ratings, vec![1300, 1500, 1700, 1900, 2100, 2300]);
        assert_eq!(s.divisions, vec![2, 3]);
        assert!(!s.accepted_only);
        assert_eq!(s.request_delay(), Duration::from_millis(500));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let s = from_reader(
            r#"
handles: [jiangly]
ratings: [800, 900]
templates:
  rating_sheet: "R{{rating}}"
"#
            .as_bytes(),
        )
        .unwrap();
        assert_eq!(s.handles, vec!["jiangly"]);
        assert_eq!(s.ratings, vec![800, 900]);
        assert_eq!(s.divisions, vec![2, 3]);
        assert_eq!(s.templates.rating_sheet, "R{{rating}}");
        assert_eq!(s.templates.link, export::LINK_TEMPLATE);
        assert_eq!(s.unsolved_output, "unsolved_problems.xlsx");
    }

    #[test]
    fn bad_yaml_is_reported() {
        let e = from_reader("ratings: [a, b".as_bytes()).unwrap_err();
        assert!(e.to_string().starts_with("Error parsing settings"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let e = from_path("/nonexistent/cf-problemset.yaml").unwrap_err();
        assert!(matches!(e, Error::Io(_)));
    }
}
