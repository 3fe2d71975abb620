extern crate log;

use super::{link::Renderer, Cell, Result, Sheet};
use crate::{
    config::export::SHEET_NAME_MAX,
    division::{DivisionIndex, DivisionProblems},
    types::Problem,
    unsolved::UnsolvedResult,
};
use log::warn;
use std::collections::HashSet;

pub const UNSOLVED_HEADER: &[&str] = &["Contest", "Index", "Name", "Rating", "Tags", "Link"];
pub const DIVISION_HEADER: &[&str] = &[
    "Contest Name",
    "Problem Name",
    "Rating",
    "Tags",
    "Problem Link",
];
const UNKNOWN_CONTEST: &str = "Unknown Contest";
const UNRATED: &str = "Unrated";
const ILLEGAL: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// Make `name` acceptable as an Excel sheet name.
pub fn sanitize_sheet_name(name: &str) -> String {
    let ret: String = name
        .chars()
        .map(|c| if ILLEGAL.contains(&c) { '_' } else { c })
        .take(SHEET_NAME_MAX)
        .collect();
    let ret = ret.trim_matches('\'');
    if ret.trim().is_empty() {
        String::from("Sheet")
    } else {
        ret.to_owned()
    }
}

fn link(renderer: &Renderer, problem: &Problem) -> Result<Cell> {
    let url = renderer.link(problem)?;
    Ok(Cell::Link {
        text: url.clone(),
        url,
    })
}
fn tags(problem: &Problem) -> Cell {
    Cell::Text(problem.tags.join(", "))
}

struct Names(HashSet<String>);
impl Names {
    /// `None` if a sheet with the same name was already produced.
    fn claim(&mut self, raw: String) -> Option<String> {
        let name = sanitize_sheet_name(raw.as_str());
        if self.0.insert(name.to_lowercase()) {
            Some(name)
        } else {
            warn!("Skipping sheet {}: name already used", raw);
            None
        }
    }
}

pub fn unsolved_sheets(result: &UnsolvedResult, renderer: &Renderer) -> Result<Vec<Sheet>> {
    let mut names = Names(HashSet::new());
    let mut ret = Vec::with_capacity(result.len());
    for (rating, problems) in result.iter() {
        let name = match names.claim(renderer.rating_sheet(rating)?) {
            Some(v) => v,
            None => continue,
        };
        let rows: Vec<Vec<Cell>> = problems
            .iter()
            .map(|p| -> Result<Vec<Cell>> {
                Ok(vec![
                    p.contest_id
                        .map_or_else(|| Cell::Text(String::new()), |c| Cell::Number(c.into())),
                    Cell::Text(p.index.clone()),
                    Cell::Text(p.name.clone()),
                    Cell::Number(rating.into()),
                    tags(p),
                    link(renderer, p)?,
                ])
            })
            .collect::<Result<_>>()?;
        ret.push(Sheet {
            name,
            header: UNSOLVED_HEADER,
            rows,
        });
    }
    Ok(ret)
}

pub fn division_sheets(
    problems: &DivisionProblems,
    index: &DivisionIndex,
    renderer: &Renderer,
) -> Result<Vec<Sheet>> {
    let mut names = Names(HashSet::new());
    let mut ret = Vec::new();
    for (division, list) in problems.iter() {
        let name = match names.claim(renderer.division_sheet(division)?) {
            Some(v) => v,
            None => continue,
        };
        let rows: Vec<Vec<Cell>> = list
            .iter()
            .map(|p| -> Result<Vec<Cell>> {
                let contest = p
                    .contest_id
                    .and_then(|c| index.contest_name(division, c))
                    .unwrap_or(UNKNOWN_CONTEST);
                Ok(vec![
                    Cell::Text(contest.to_owned()),
                    Cell::Text(p.name.clone()),
                    p.rating
                        .map_or_else(|| Cell::Text(UNRATED.to_owned()), |r| Cell::Number(r.into())),
                    tags(p),
                    link(renderer, p)?,
                ])
            })
            .collect::<Result<_>>()?;
        ret.push(Sheet {
            name,
            header: DIVISION_HEADER,
            rows,
        });
    }
    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::Catalog, settings::Templates, solved::SolvedSet, types::Contest, unsolved,
    };

    fn problem(contest: u32, index: &str, rating: Option<u32>) -> Problem {
        Problem {
            contest_id: Some(contest),
            index: index.to_owned(),
            name: format!("Problem {}", index),
            rating,
            tags: vec![String::from("dp"), String::from("greedy")],
        }
    }
    fn renderer() -> Renderer {
        Renderer::new(&Templates::default()).unwrap()
    }

    #[test]
    fn sheet_names_are_sanitized() {
        assert_eq!(sanitize_sheet_name("Div 2"), "Div 2");
        assert_eq!(sanitize_sheet_name("a/b:c?"), "a_b_c_");
        assert_eq!(sanitize_sheet_name("'quoted'"), "quoted");
        assert_eq!(sanitize_sheet_name(""), "Sheet");
        assert_eq!(sanitize_sheet_name(&"x".repeat(40)).len(), 31);
    }

    #[test]
    fn unsolved_rows_follow_header() {
        let result = unsolved::filter(
            &Catalog::partition(vec![problem(1, "A", Some(800)), problem(1, "B", Some(900))]),
            &[800, 900],
            &SolvedSet::new(),
        );
        let sheets = unsolved_sheets(&result, &renderer()).unwrap();
        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[0].name, "Rating 800");
        assert_eq!(sheets[0].header, UNSOLVED_HEADER);
        assert_eq!(
            sheets[1].rows[0],
            vec![
                Cell::Number(1.0),
                Cell::Text(String::from("B")),
                Cell::Text(String::from("Problem B")),
                Cell::Number(900.0),
                Cell::Text(String::from("dp, greedy")),
                Cell::Link {
                    url: String::from("https://codeforces.com/contest/1/problem/B"),
                    text: String::from("https://codeforces.com/contest/1/problem/B"),
                },
            ]
        );
    }

    #[test]
    fn colliding_sheet_names_keep_first() {
        let r = Renderer::new(&Templates {
            rating_sheet: String::from("Unsolved"),
            ..Templates::default()
        })
        .unwrap();
        let result = UnsolvedResult::empty(&[800, 900]);
        let sheets = unsolved_sheets(&result, &r).unwrap();
        assert_eq!(sheets.len(), 1);
    }

    #[test]
    fn division_rows_name_contest_and_unrated() {
        let index = DivisionIndex::build(
            &[Contest {
                id: 7,
                name: String::from("Round 7 (Div. 2)"),
            }],
            &[2],
        );
        let grouped = DivisionProblems::group(&[problem(7, "A", None)], &index);
        let sheets = division_sheets(&grouped, &index, &renderer()).unwrap();
        assert_eq!(sheets[0].name, "Div 2");
        let row = &sheets[0].rows[0];
        assert_eq!(row[0], Cell::Text(String::from("Round 7 (Div. 2)")));
        assert_eq!(row[2], Cell::Text(String::from("Unrated")));
    }
}
