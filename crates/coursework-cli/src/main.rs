use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::io::{self, Write};
use std::path::PathBuf;

use coursework_cli::commands::{run_coins, run_exercises, run_geometry, run_vector, GeometryOutputs};
use coursework_cli::config::{load_or_default, DemoConfig};

fn config_arg() -> Arg {
    Arg::new("config")
        .help("Path to a JSON configuration file. Defaults are used when omitted.")
        .required(false)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("COURSEWORK_LOG", "error,coursework=info"))
        .init();

    let matches = Command::new("coursework")
        .version(clap::crate_version!())
        .about("Coursework exercises: arithmetic, vectors, coin bookkeeping and shapes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("exercises")
                .about("Run the arithmetic exercises (Pythagoras, lines, distances, accuracy)")
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("vector")
                .about("Demonstrate the overloaded vector operators")
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("coins")
                .about("Deposit to and withdraw from an old coin stash")
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("geometry")
                .about("Describe circles, rectangles, spheres and cubes, and plot them")
                .arg(config_arg())
                .arg(
                    Arg::new("plot")
                        .short('p')
                        .long("plot")
                        .help("Write an HTML plot of the figure outlines to this file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("containment")
                        .short('c')
                        .long("containment")
                        .help("Write an HTML plot of random points inside/outside the first figure")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("report")
                        .short('r')
                        .long("report")
                        .help("Write an HTML report with a summary table and the plot")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(Command::new("config").about("Print the default JSON configuration"))
        .get_matches();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match matches.subcommand() {
        Some(("config", _)) => {
            let json = serde_json::to_string_pretty(&DemoConfig::default())?;
            writeln!(out, "{}", json)?;
            Ok(())
        }
        Some((name, sub_m)) => run_demo(name, sub_m, &mut out),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn run_demo<W: Write>(name: &str, matches: &ArgMatches, out: &mut W) -> Result<()> {
    let config_path: Option<&PathBuf> = matches.get_one("config");
    let config = load_or_default(config_path.map(PathBuf::as_path))?;

    let result = match name {
        "exercises" => run_exercises(&config.exercises, out),
        "vector" => run_vector(&config.vectors, out),
        "coins" => run_coins(&config.coins, out).map(|_| ()),
        "geometry" => {
            let outputs = GeometryOutputs {
                plot: matches.get_one::<PathBuf>("plot").map(PathBuf::as_path),
                containment: matches.get_one::<PathBuf>("containment").map(PathBuf::as_path),
                report: matches.get_one::<PathBuf>("report").map(PathBuf::as_path),
            };
            run_geometry(&config.geometry, outputs, out)
        }
        _ => unreachable!(),
    };

    if let Err(e) = &result {
        log::error!("{} failed: {:#}", name, e);
    }
    result
}
