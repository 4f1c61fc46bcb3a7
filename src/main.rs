use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::info;

use window_filtering::filter::{MeanFilter, MedianFilter, WindowSize};
use window_filtering::img;
use window_filtering::my_err::MyError;
use window_filtering::processing::process_with_window;

#[derive(Parser)]
#[command(name = "window_filtering")]
#[command(about = "Smooths an image by replacing every pixel with an aggregate of its neighborhood")]
struct Args {
    /// Input image path
    input: PathBuf,

    /// Output image path
    output: PathBuf,

    /// Neighborhood side length, a positive odd number
    #[arg(short, long)]
    window: usize,

    /// Aggregation applied to each neighborhood
    #[arg(short, long, value_enum)]
    strategy: Strategy,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    Mean,
    Median,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), MyError> {
    // the window is checked before any file is touched
    let size = WindowSize::new(args.window)?;

    let grid = img::load(&args.input)?;
    info!("loaded {}x{} image from '{}'", grid.w(), grid.h(), args.input.display());

    let started = Instant::now();
    let filtered = match args.strategy {
        Strategy::Mean => process_with_window(&grid, &MeanFilter::new(size)),
        Strategy::Median => process_with_window(&grid, &MedianFilter::new(size)),
    };
    info!(
        "{:?} filter with window {} took {} ms",
        args.strategy,
        size.side(),
        started.elapsed().as_millis()
    );

    img::save(&filtered, &args.output)?;
    info!("saved result to '{}'", args.output.display());

    Ok(())
}
