//! Prints the hex and rgb values of named colors.

use clap::{ArgAction, Parser};
use colors::{Format, NamedColors, Resolver, output};
use env_logger::Env;
use log::error;
use std::{
    io::{self, Write},
    process::ExitCode,
};

const ABOUT: &str = "This script allows us to obtain details of information of different colors.";

const LONG_ABOUT: &str = "This script allows us to obtain details of information of different colors.

By default, the information is displayed in this format: \
Color(name=BLACK, hex=#000000, rgb={\"R\": 0, \"G\": 0, \"B\": 0})

Execution script example: colors --format hex --color-list black green blue caqui red";

#[derive(Debug, Parser)]
#[command(version, about = ABOUT, long_about = LONG_ABOUT)]
struct Args {
    /// Shown in format. Example: hex or rgb
    #[arg(long, overrides_with = "format")]
    format: Option<String>,

    /// The information will be returned in the order in which the parameters are passed.
    /// Example: blue red black
    #[arg(
        long = "color-list",
        required = true,
        num_args = 1..,
        action = ArgAction::Set,
        overrides_with = "color_list"
    )]
    color_list: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("error")).init();
    let args = Args::parse();

    let resolution = Resolver::new(NamedColors).resolve(&args.color_list);
    let format = Format::parse(args.format.as_deref());

    let mut stdout = io::stdout().lock();
    let result = output::report(&mut stdout, &resolution, format)
        .and_then(|()| stdout.flush().map_err(Into::into));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("could not write the report: {}", err);
            ExitCode::FAILURE
        }
    }
}
