extern crate termcolor;

use crate::write::{write_failures, write_result};
use cf_problemset::{
    client::Client,
    export::{self, link::Renderer, sheet::division_sheets},
    search::search_divisions,
    settings::Settings,
};
use std::io::Write;
use termcolor::StandardStream;

pub async fn divisions(
    stdout: &mut StandardStream,
    client: &Client,
    settings: &Settings,
    output: Option<&str>,
) -> bool {
    write_progress!(
        stdout,
        "Search",
        "Problems of divisions {:?}",
        settings.divisions
    );
    let outcome = search_divisions(client, settings).await;
    write_failures(stdout, &outcome.failures);
    let (index, problems) = &outcome.value;
    for (division, list) in problems.iter() {
        write_info!(
            stdout,
            "Division",
            "Div. {}: {} contests, {} problems",
            division,
            index.contests(division).map_or(0, |c| c.len()),
            list.len()
        );
    }
    let path = output.unwrap_or_else(|| settings.division_output.as_str());
    let result = Renderer::new(&settings.templates)
        .and_then(|r| division_sheets(problems, index, &r))
        .and_then(|sheets| export::save(&sheets, path));
    write_result(
        stdout,
        result,
        format!("Written {} problems to {}", problems.total(), path).as_str(),
    )
}
