extern crate handlebars;
extern crate serde_json;

use super::{Error, Result};
use crate::{settings::Templates, types::Problem};
use handlebars::Handlebars;
use serde_json::json;

const LINK: &str = "link";
const RATING_SHEET: &str = "rating_sheet";
const DIVISION_SHEET: &str = "division_sheet";

/// Renders problem links and sheet names from the configured templates.
pub struct Renderer {
    registry: Handlebars<'static>,
}
impl Renderer {
    pub fn new(templates: &Templates) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        for (name, tpl) in [
            (LINK, &templates.link),
            (RATING_SHEET, &templates.rating_sheet),
            (DIVISION_SHEET, &templates.division_sheet),
        ]
        .iter()
        {
            registry
                .register_template_string(name, tpl.as_str())
                .map_err(Error::Template)?;
        }
        Ok(Self { registry })
    }
    pub fn link(&self, problem: &Problem) -> Result<String> {
        self.registry
            .render(
                LINK,
                &json!({ "contest": problem.contest_id, "index": problem.index }),
            )
            .map_err(Error::Render)
    }
    pub fn rating_sheet(&self, rating: u32) -> Result<String> {
        self.registry
            .render(RATING_SHEET, &json!({ "rating": rating }))
            .map_err(Error::Render)
    }
    pub fn division_sheet(&self, division: u32) -> Result<String> {
        self.registry
            .render(DIVISION_SHEET, &json!({ "division": division }))
            .map_err(Error::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem() -> Problem {
        Problem {
            contest_id: Some(1950),
            index: String::from("G"),
            name: String::from("Shuffling Songs"),
            rating: Some(1900),
            tags: Vec::new(),
        }
    }

    #[test]
    fn default_templates_render() {
        let r = Renderer::new(&Templates::default()).unwrap();
        assert_eq!(
            r.link(&problem()).unwrap(),
            "https://codeforces.com/contest/1950/problem/G"
        );
        assert_eq!(r.rating_sheet(1900).unwrap(), "Rating 1900");
        assert_eq!(r.division_sheet(2).unwrap(), "Div 2");
    }

    #[test]
    fn links_are_not_html_escaped() {
        let r = Renderer::new(&Templates {
            link: String::from("https://x/?c={{contest}}&i={{index}}"),
            ..Templates::default()
        })
        .unwrap();
        assert_eq!(r.link(&problem()).unwrap(), "https://x/?c=1950&i=G");
    }

    #[test]
    fn broken_template_is_rejected() {
        let e = Renderer::new(&Templates {
            rating_sheet: String::from("Rating {{#if}}"),
            ..Templates::default()
        });
        assert!(matches!(e, Err(Error::Template(_))));
    }
}
