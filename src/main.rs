extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use cf_problemset::{
    client::Client,
    settings::{self, Settings},
};
use clap::{crate_description, crate_name, Arg, Command};
use pretty_env_logger::init_timed;
use std::{io::Write, process::exit};
use termcolor::{ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod division;
    pub mod unsolved;
}
mod write;

use command::{division::divisions, unsolved::unsolved};

fn output_arg() -> Arg<'static> {
    Arg::new("output")
        .short('o')
        .long("output")
        .takes_value(true)
        .help("Path of the xlsx file to write")
}

fn load_settings(stdout: &mut StandardStream, path: Option<&str>) -> Option<Settings> {
    match path {
        None => Some(Settings::default()),
        Some(f) => match settings::from_path(f) {
            Ok(v) => Some(v),
            Err(e) => {
                write_error!(stdout, "Error", "Error load settings {}: {}", f, e);
                None
            }
        },
    }
}

#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let app = Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .global(true)
                .help("Path to settings file"),
        )
        .subcommand(
            Command::new("unsolved")
                .about("Export problems of the configured ratings nobody in the handle list has submitted")
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("divisions")
                .about("Export problems of the configured contest divisions")
                .arg(output_arg()),
        )
        .get_matches();

    let settings = match load_settings(&mut stdout, app.value_of("config")) {
        Some(v) => v,
        None => {
            let _ = stdout.reset();
            exit(1);
        }
    };
    let client = match Client::with_base(settings.api_base.as_str(), settings.request_delay()) {
        Ok(v) => v,
        Err(e) => {
            write_error!(&mut stdout, "Error", "{}", e);
            let _ = stdout.reset();
            exit(1);
        }
    };
    let success = match app.subcommand() {
        Some(("unsolved", m)) => unsolved(&mut stdout, &client, &settings, m.value_of("output")).await,
        Some(("divisions", m)) => {
            divisions(&mut stdout, &client, &settings, m.value_of("output")).await
        }
        Some((unknown, _)) => {
            write_error!(&mut stdout, "Error", r#"cf-problemset: unknown command "{}""#, unknown);
            false
        }
        None => false,
    };
    let _ = stdout.reset();
    if !success {
        exit(1);
    }
}
