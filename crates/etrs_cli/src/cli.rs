use clap::{ArgAction, Args, Parser, Subcommand};
use etrs_rs::{Epoch, TransformOptions, Velocity3D};

#[derive(Parser, Debug)]
#[command(name = "etrs", about = "ITRF2014 to ETRF2014 station transformation")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transform an ITRF2014 ECEF position (metres)
    Cartesian {
        /// X in metres
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// Y in metres
        #[arg(allow_negative_numbers = true)]
        y: f64,
        /// Z in metres
        #[arg(allow_negative_numbers = true)]
        z: f64,
        #[command(flatten)]
        epochs: EpochArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Transform WGS84 longitude/latitude/height, output on GRS80
    Geographic {
        /// Longitude in decimal degrees, positive east
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Latitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Height above the ellipsoid in metres
        #[arg(allow_negative_numbers = true)]
        height: f64,
        #[command(flatten)]
        epochs: EpochArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the ITRF2014 to ETRF2014 parameter table
    Params {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct EpochArgs {
    /// Observation epoch: decimal year (2023.02) or date (2023-01-08)
    #[arg(
        long,
        alias = "sourceEpoch",
        allow_negative_numbers = true,
        value_parser = parse_epoch
    )]
    pub source_epoch: Epoch,
    /// Output epoch, defaults to the source epoch
    #[arg(
        long,
        alias = "targetEpoch",
        allow_negative_numbers = true,
        value_parser = parse_epoch
    )]
    pub target_epoch: Option<Epoch>,
    /// Station velocity X in m/yr
    #[arg(
        long,
        alias = "velocityX",
        allow_negative_numbers = true,
        default_value_t = 0.0
    )]
    pub velocity_x: f64,
    /// Station velocity Y in m/yr
    #[arg(
        long,
        alias = "velocityY",
        allow_negative_numbers = true,
        default_value_t = 0.0
    )]
    pub velocity_y: f64,
    /// Station velocity Z in m/yr
    #[arg(
        long,
        alias = "velocityZ",
        allow_negative_numbers = true,
        default_value_t = 0.0
    )]
    pub velocity_z: f64,
}

impl EpochArgs {
    pub fn to_options(&self) -> TransformOptions {
        let mut options = TransformOptions::new(self.source_epoch).velocity(Velocity3D::new(
            self.velocity_x,
            self.velocity_y,
            self.velocity_z,
        ));
        if let Some(target) = self.target_epoch {
            options = options.target_epoch(target);
        }
        options
    }
}

/// Accept `2023.02` or `YYYY-MM-DD`.
fn parse_epoch(s: &str) -> Result<Epoch, String> {
    if let Ok(years) = s.parse::<f64>() {
        return Ok(Epoch::new(years));
    }
    let parts: Vec<&str> = s.split('-').collect();
    let [y, m, d] = parts.as_slice() else {
        return Err(format!("'{s}' is neither a decimal year nor YYYY-MM-DD"));
    };
    let year: i32 = y.parse().map_err(|_| format!("bad year in '{s}'"))?;
    let month: u32 = m.parse().map_err(|_| format!("bad month in '{s}'"))?;
    let day: f64 = d.parse().map_err(|_| format!("bad day in '{s}'"))?;
    Epoch::from_calendar(year, month, day).map_err(|e| e.to_string())
}
