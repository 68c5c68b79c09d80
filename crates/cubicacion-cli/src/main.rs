use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use cubicacion_core::{
    pack_boxes_on_pallet, pack_pallets_in_vehicle, pack_units_in_box, pallet_positions,
    unit_positions, BoxTypeRanker, VolumetricPacker,
};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod input;
mod report;

use input::{BoxFile, MultiFile, PalletFile, RankFile};

const DEFAULT_TOP_N: usize = 3;

#[derive(Parser)]
#[command(name = "cubicacion")]
#[command(about = "Volumetric loading calculator - units in boxes, boxes on pallets, pallets in vehicles", long_about = None)]
struct Cli {
    /// Log engine decisions (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Best orientation of one product inside one box
    Box {
        /// Input file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for result (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include the position of every unit in the result
        #[arg(long)]
        positions: bool,
    },

    /// Boxes on a pallet, and pallets in a vehicle when one is given
    Pallet {
        /// Input file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for result (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include the position of every pallet in the result
        #[arg(long)]
        positions: bool,
    },

    /// Distribute several products over identical boxes by volume
    Multi {
        /// Input file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for result (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rank catalog box types for a mix of products
    Rank {
        /// Input file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for result (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// How many box types to return (overrides the file)
        #[arg(short, long)]
        top: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Box {
            input,
            output,
            positions,
        } => box_command(&input, output, positions),
        Commands::Pallet {
            input,
            output,
            positions,
        } => pallet_command(&input, output, positions),
        Commands::Multi { input, output } => multi_command(&input, output),
        Commands::Rank { input, output, top } => rank_command(&input, output, top),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn box_command(input: &Path, output: Option<PathBuf>, positions: bool) -> Result<()> {
    println!("{}", "🔍 Loading input...".bright_blue());
    let file: BoxFile = input::load(input)?;
    let request = file.to_request();
    let unit = file.box_external.unit;

    info!(item = ?request.item, box_external = ?request.box_external, "packing units in box");
    let layout = pack_units_in_box(&request)?;

    println!();
    report::print_unit_in_box(layout.as_ref(), unit);

    let result = json!({
        "unit": unit,
        "layout": layout,
        "positions": layout.as_ref().filter(|_| positions).map(unit_positions),
    });
    write_result(&result, output)
}

fn pallet_command(input: &Path, output: Option<PathBuf>, positions: bool) -> Result<()> {
    println!("{}", "🔍 Loading input...".bright_blue());
    let file: PalletFile = input::load(input)?;

    let pallet = pack_boxes_on_pallet(&file.pallet_request())?;

    println!();
    report::print_pallet(&pallet);

    let vehicle = match file.vehicle_request(pallet.load_height) {
        Some(request) => {
            let load = pack_pallets_in_vehicle(&request, &pallet)?;
            println!();
            report::print_vehicle(&load);
            Some(load)
        }
        None => None,
    };

    let result = json!({
        "unit": "m",
        "pallet": pallet,
        "vehicle": vehicle,
        "pallet_positions": vehicle.as_ref().filter(|_| positions).map(pallet_positions),
    });
    write_result(&result, output)
}

fn multi_command(input: &Path, output: Option<PathBuf>) -> Result<()> {
    println!("{}", "🔍 Loading input...".bright_blue());
    let file: MultiFile = input::load(input)?;
    let (capacity, lots) = file.to_request();

    println!(
        "  {} lots, bin capacity {:.4} m³",
        lots.len().to_string().bright_white().bold(),
        capacity
    );
    println!();
    println!("{}", "🚀 Packing...".bright_blue());

    let result = VolumetricPacker::new(capacity, lots)?.pack();

    println!();
    report::print_multi(&result);
    write_result(&result, output)
}

fn rank_command(input: &Path, output: Option<PathBuf>, top: Option<usize>) -> Result<()> {
    println!("{}", "🔍 Loading input...".bright_blue());
    let file: RankFile = input::load(input)?;
    let top_n = top.or(file.top_n).unwrap_or(DEFAULT_TOP_N);
    let (lots, catalog) = file.to_request()?;

    println!(
        "  {} lots, {} box types in catalog",
        lots.len().to_string().bright_white().bold(),
        catalog.len().to_string().bright_white().bold()
    );
    println!();
    println!("{}", "🚀 Evaluating box types...".bright_blue());

    let ranked = BoxTypeRanker::new(lots, catalog)?.rank(top_n)?;

    println!();
    report::print_ranking(&ranked);
    write_result(&ranked, output)
}

fn write_result<T: Serialize>(result: &T, output: Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;

    println!();
    if let Some(output_path) = output {
        std::fs::write(&output_path, json)?;
        println!(
            "💾 Saved result to {}",
            output_path.display().to_string().bright_white()
        );
    } else {
        println!("{}", json);
    }

    Ok(())
}
