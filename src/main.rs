use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

mod dataset;
mod geo;
mod logger;
mod prompt;
mod query;
mod venue;

use dataset::{DatasetLoader, DEFAULT_ENCODING};
use geo::{Sphere, EARTH_RADIUS_METERS};
use prompt::Axis;

#[derive(Parser, Debug)]
#[command(name = "bars")]
#[command(about = "Find the biggest, the smallest and the closest bar in a venue dataset.", long_about = None)]
struct Cli {
    /// Path to the bar dataset (.json, or .csv with the same column names)
    file: PathBuf,

    /// Text encoding of the dataset
    #[arg(short, long, default_value_t = String::from(DEFAULT_ENCODING))]
    encoding: String,

    /// Your latitude in decimal degrees. Asked interactively if omitted.
    #[arg(long, allow_hyphen_values = true)]
    latitude: Option<String>,

    /// Your longitude in decimal degrees. Asked interactively if omitted.
    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<String>,

    /// Sphere radius in meters used for distances
    #[arg(long, default_value_t = EARTH_RADIUS_METERS)]
    radius: f64,

    /// Enable debug logging on stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn coordinate(given: Option<&str>, axis: Axis) -> Result<f64> {
    if let Some(text) = given {
        return axis.parse(text).with_context(|| {
            format!(
                "{} must be a number between -{} and {}, got {:?}",
                axis.label(),
                axis.limit(),
                axis.limit(),
                text
            )
        });
    }
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    prompt::read_coordinate(&mut input, &mut output, axis)
        .with_context(|| format!("reading {}", axis.label()))
}

fn run(cli: &Cli) -> Result<()> {
    if !(cli.radius.is_finite() && cli.radius > 0.0) {
        bail!("radius must be a positive number of meters, got {}", cli.radius);
    }
    let sphere = Sphere::new(cli.radius);

    let loader = DatasetLoader::from_label(&cli.encoding)?;
    tracing::debug!("decoding {} as {}", cli.file.display(), loader.encoding_name());
    let venues = loader
        .load(&cli.file)
        .with_context(|| format!("Не удаётся загрузить файл {}", cli.file.display()))?;

    // load() rejects empty datasets, so the queries below always have an answer.
    let biggest = query::largest(&venues).context("dataset contains no venues")?;
    let smallest = query::smallest(&venues).context("dataset contains no venues")?;
    println!("Самый большой бар: {}", biggest);
    println!("Самый маленький бар: {}", smallest);

    if cli.latitude.is_none() || cli.longitude.is_none() {
        println!("Пожалуйста, введите свои координаты:");
    }
    let latitude = coordinate(cli.latitude.as_deref(), Axis::Latitude)?;
    let longitude = coordinate(cli.longitude.as_deref(), Axis::Longitude)?;
    tracing::debug!("looking for the bar closest to [{}, {}]", latitude, longitude);

    let closest = query::nearest_on(&sphere, &venues, latitude, longitude)
        .context("dataset contains no venues")?;
    tracing::debug!(
        "closest bar {:?} is {:.0} m away",
        closest.venue.name,
        closest.distance_meters
    );
    println!("Ближайший к вам бар: {}", closest.venue);
    io::stdout().flush()?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("run failed: {:?}", e);
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
