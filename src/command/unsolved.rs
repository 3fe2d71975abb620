extern crate termcolor;

use crate::write::{write_failures, write_result};
use cf_problemset::{
    client::Client,
    export::{self, link::Renderer, sheet::unsolved_sheets},
    search::search_unsolved,
    settings::Settings,
};
use std::io::Write;
use termcolor::StandardStream;

pub async fn unsolved(
    stdout: &mut StandardStream,
    client: &Client,
    settings: &Settings,
    output: Option<&str>,
) -> bool {
    write_progress!(
        stdout,
        "Search",
        "Unsolved problems of rating {:?} for users {}",
        settings.ratings,
        settings.handles.join(", ")
    );
    let outcome = search_unsolved(client, settings).await;
    write_failures(stdout, &outcome.failures);
    for (rating, problems) in outcome.value.iter() {
        if problems.is_empty() {
            write_info!(stdout, "Rating", "{}: no unsolved problems found", rating);
        } else {
            write_info!(stdout, "Rating", "{}: {} unsolved problems", rating, problems.len());
        }
    }
    let path = output.unwrap_or_else(|| settings.unsolved_output.as_str());
    let result = Renderer::new(&settings.templates)
        .and_then(|r| unsolved_sheets(&outcome.value, &r))
        .and_then(|sheets| export::save(&sheets, path));
    write_result(
        stdout,
        result,
        format!("Written {} problems to {}", outcome.value.total(), path).as_str(),
    )
}
