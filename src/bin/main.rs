use std::path::PathBuf;

use clap::{ArgAction, Parser};
use mle_eval::{cmdline_utils::OutputFormat, field::RangePolicy, loader};
use tracing_subscriber::EnvFilter;

/// Evaluates the multilinear extension of a table of values over {0,1}^k at a point in F_p^k.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Table file: a prime on the first line, then 2^k field elements, one per line.
    table: PathBuf,

    /// The k coordinates of the point; the first one is the most significant bit.
    points: Vec<String>,

    #[arg(long = "range", default_value = "Strict")]
    range_policy: RangePolicy,

    #[arg(short = 'f', long = "format", default_value = "Text")]
    format: OutputFormat,

    /// Repeat for more log output; RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbosity: u8,
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbosity);

    let evaluation = loader::run(&args.table, args.points.as_slice(), args.range_policy)?;

    match args.format {
        OutputFormat::Text => println!("mle({}) = {}", evaluation.points, evaluation.result),
        OutputFormat::Json => println!("{}", serde_json::to_string(&evaluation)?),
    }

    Ok(())
}
