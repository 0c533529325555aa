mod cli;
mod commands;

use clap::Parser;
use etrs_rs::{Geographic, Position3D};
use log::LevelFilter;

use crate::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Cartesian {
            x,
            y,
            z,
            epochs,
            json,
        } => commands::cartesian(Position3D::new(*x, *y, *z), &epochs.to_options(), *json),
        Commands::Geographic {
            lon,
            lat,
            height,
            epochs,
            json,
        } => commands::geographic(
            Geographic::new(*lon, *lat, *height),
            &epochs.to_options(),
            *json,
        ),
        Commands::Params { json } => commands::params(*json),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
