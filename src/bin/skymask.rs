use std::{
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter};

use skymask::{
    conversion::steradians_to_square_degrees,
    points::RaDecReader,
    trim::{TrimFilter, TrimMode, TrimStats},
    MaskAreaExt, PolygonSet,
};

/// Polyid printed for a point outside every polygon.
const NOT_FOUND_POLYID: i64 = -1;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Give points outside the mask a weight of zero
    ByMask,
    /// Drop points outside the mask
    ToMask,
}

#[derive(Parser, Debug)]
#[command(name = "skymask", version)]
#[command(about = "Query MANGLE polygon sky masks")]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the total and weighted area of a mask
    Area {
        /// Mask polygon file
        mask: Utf8PathBuf,
        /// Ignore polygons with a lower weight
        #[arg(long, default_value_t = 0.0)]
        min_weight: f64,
    },
    /// Prefix every RA/Dec line with the id of the polygon containing it (-1 if none)
    Polyid {
        /// Mask polygon file
        mask: Utf8PathBuf,
        /// Point file, one "ra dec" pair in degrees per line
        points: Utf8PathBuf,
    },
    /// Print the RA/Dec lines that pass a weight filter
    Trim {
        /// Mask polygon file
        mask: Utf8PathBuf,
        /// Point file, one "ra dec" pair in degrees per line
        points: Utf8PathBuf,
        #[arg(long, default_value_t = 0.0)]
        min_weight: f64,
        #[arg(long, value_enum, default_value = "by-mask")]
        mode: Mode,
        /// Veto points of weight >= MIN_WEIGHT instead of keeping them (implies by-mask)
        #[arg(long)]
        reverse: bool,
    },
    /// Print a summary of a mask
    Info {
        /// Mask polygon file
        mask: Utf8PathBuf,
    },
}

fn init_logger(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Warn,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .init();
}

fn load_mask(path: &Utf8Path) -> anyhow::Result<PolygonSet> {
    info!("Reading polygon file: {path}");
    PolygonSet::from_file(path).with_context(|| format!("failed to load mask {path}"))
}

fn trim_filter(min_weight: f64, mode: Mode, reverse: bool) -> TrimFilter {
    let mode = match (mode, reverse) {
        (_, true) => TrimMode::ByMaskReversed,
        (Mode::ToMask, false) => TrimMode::ToMask,
        (Mode::ByMask, false) => TrimMode::ByMask,
    };
    TrimFilter::new(min_weight, mode)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", diagnostic(&err));
            ExitCode::FAILURE
        }
    }
}

/// Single-line error report, outermost context first.
fn diagnostic(err: &anyhow::Error) -> String {
    format!("skymask: {err:#}")
}

fn run(command: Commands) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match command {
        Commands::Area { mask, min_weight } => {
            let mask = load_mask(&mask)?;
            info!("Filtering: weight >= {min_weight}");
            let area = mask.total_area(min_weight);
            let weighted = mask.weighted_total_area(min_weight);
            writeln!(
                out,
                "Total area:\n  str:   {area}\n  deg^2: {}",
                steradians_to_square_degrees(area)
            )?;
            writeln!(
                out,
                "Weighted area:\n  str:   {weighted}\n  deg^2: {}",
                steradians_to_square_degrees(weighted)
            )?;
        }
        Commands::Polyid { mask, points } => {
            let mask = load_mask(&mask)?;
            info!("Processing: ra dec from {points}");
            for point in RaDecReader::open(&points)?.skip_malformed() {
                let point = point?;
                let polyid = mask
                    .find_polyid(&point.to_vector())
                    .map_or(NOT_FOUND_POLYID, i64::from);
                writeln!(out, "{polyid:6} {}", point.line)?;
            }
        }
        Commands::Trim {
            mask,
            points,
            min_weight,
            mode,
            reverse,
        } => {
            let mask = load_mask(&mask)?;
            let filter = trim_filter(min_weight, mode, reverse);
            info!("Filtering: {filter}");
            info!("Processing: ra dec from {points}");

            let mut stats = TrimStats::default();
            for point in RaDecReader::open(&points)?.skip_malformed() {
                let point = point?;
                if stats.record(filter.keeps(&mask, &point.to_vector())) {
                    writeln!(out, "{}", point.line)?;
                }
            }
            info!("Done: {stats}");
        }
        Commands::Info { mask } => {
            let mask = load_mask(&mask)?;
            writeln!(out, "source: {}", mask.source_name())?;
            writeln!(out, "{:#}", mask.summary())?;
        }
    }

    out.flush()?;
    Ok(())
}
