//! `vacuum`: generate rooms and run BFS, DFS and IDS over them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use vacuum_harness::logging;
use vacuum_harness::render::{render_comparison, render_room, render_summary};
use vacuum_harness::room::{
    generate_room, Room, RoomConfig, DEFAULT_DIRT_PROBABILITY, DEFAULT_ROOM_SIZE,
};
use vacuum_harness::room_file::{load_room, save_room};
use vacuum_harness::runner::{run_algorithm, run_all};
use vacuum_kernel::carrier::position::Position;
use vacuum_search::algorithm::Algorithm;
use vacuum_search::policy::{SearchPolicy, DEFAULT_MAX_DEPTH};

#[derive(Parser)]
#[command(name = "vacuum", version, about = "Vacuum-cleaner grid search")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a random room and print it (or write it as JSON).
    Generate {
        #[command(flatten)]
        room: GenArgs,
        /// Write the room to this JSON file instead of printing it.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run one algorithm.
    Run {
        /// bfs, dfs or ids.
        #[arg(long, default_value = "bfs")]
        algo: Algorithm,
        #[command(flatten)]
        source: RoomSource,
        #[command(flatten)]
        search: SearchArgs,
        /// Print the canonical JSON report instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Run every algorithm on the same room.
    Compare {
        #[command(flatten)]
        source: RoomSource,
        #[command(flatten)]
        search: SearchArgs,
    },
}

#[derive(Args)]
struct GenArgs {
    /// Side length of the square room.
    #[arg(long, default_value_t = DEFAULT_ROOM_SIZE)]
    size: usize,
    /// Probability that a cell starts dirty.
    #[arg(long, default_value_t = DEFAULT_DIRT_PROBABILITY)]
    dirt: f64,
    /// RNG seed for a reproducible room.
    #[arg(long)]
    seed: Option<u64>,
}

impl GenArgs {
    fn config(&self) -> RoomConfig {
        RoomConfig {
            size: self.size,
            dirt_probability: self.dirt,
            seed: self.seed,
            start: Position::new(0, 0),
        }
    }
}

#[derive(Args)]
struct RoomSource {
    /// Load the room from a JSON file instead of generating one.
    #[arg(long, conflicts_with_all = ["size", "dirt", "seed"])]
    room: Option<PathBuf>,
    #[command(flatten)]
    generate: GenArgs,
}

impl RoomSource {
    fn resolve(&self) -> Result<Room> {
        match &self.room {
            Some(path) => load_room(path).with_context(|| format!("load {}", path.display())),
            None => generate_room(&self.generate.config()).context("generate room"),
        }
    }
}

#[derive(Args)]
struct SearchArgs {
    /// IDS depth bound; limits 0..max_depth are tried.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, allow_negative_numbers = true)]
    max_depth: i64,
    /// Record per-expansion trace events in the JSON report.
    #[arg(long)]
    trace: bool,
}

impl SearchArgs {
    fn policy(&self) -> SearchPolicy {
        SearchPolicy {
            max_depth: self.max_depth,
            record_trace: self.trace,
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generate { room, out } => cmd_generate(&room, out.as_deref()),
        Command::Run {
            algo,
            source,
            search,
            json,
        } => cmd_run(algo, &source, &search, json),
        Command::Compare { source, search } => cmd_compare(&source, &search),
    }
}

fn cmd_generate(args: &GenArgs, out: Option<&Path>) -> Result<()> {
    let room = generate_room(&args.config()).context("generate room")?;
    match out {
        Some(path) => {
            save_room(path, &room).with_context(|| format!("write {}", path.display()))?;
        }
        None => print!("{}", render_room(&room, None)),
    }
    Ok(())
}

fn cmd_run(
    algorithm: Algorithm,
    source: &RoomSource,
    search: &SearchArgs,
    json: bool,
) -> Result<()> {
    let room = source.resolve()?;
    let policy = search.policy();
    let record = run_algorithm(&room, algorithm, &policy)?;

    if json {
        let bytes = record
            .report(&room, &policy)
            .to_canonical_json_bytes()
            .context("serialize report")?;
        println!("{}", String::from_utf8_lossy(&bytes));
        return Ok(());
    }

    print!("{}", render_room(&room, record.result.path.as_deref()));
    println!();
    print!("{}", render_summary(&record));
    Ok(())
}

fn cmd_compare(source: &RoomSource, search: &SearchArgs) -> Result<()> {
    let room = source.resolve()?;
    let records = run_all(&room, &search.policy())?;
    print!("{}", render_room(&room, None));
    println!();
    print!("{}", render_comparison(&records));
    Ok(())
}
