//! lotterycurve — Command-line editor for lottery prize curves.
//!
//! Loads the saved curve state (or the default one), applies at most one
//! edit, saves the result, and prints the computed curve.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use lotterycurve_core::{
    control_points, AnchorKey, CurveEngine, CurveReport, CurveState, CurveStore, SponsoredItem,
};
use lotterycurve_store::{FileStore, StoreConfig};
use tracing::info;

/// Lottery prize curve editor.
#[derive(Parser)]
#[command(name = "lotterycurve")]
#[command(version, about = "Shape prize costs across ranked positions.")]
struct Cli {
    /// Directory holding the saved state (default: platform data dir).
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print the report as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current curve.
    Show,
    /// Set one anchor value.
    Set(SetArgs),
    /// Respace intermediate anchors evenly between the first and last value.
    Redistribute,
    /// Change the number of positions.
    Persons(PersonsArgs),
    /// Change the stake per person and/or the sponsorship amount.
    Budget(BudgetArgs),
    /// Add a sponsored item, or clear the list.
    Sponsor(SponsorArgs),
    /// Discard the saved state.
    Reset,
}

#[derive(Args)]
struct SetArgs {
    /// Anchor rank (1, 2, 3, 5, 10, 20) or "last".
    anchor: String,

    /// New value in whole units.
    value: f64,
}

#[derive(Args)]
struct PersonsArgs {
    /// Number of ranked positions (at least 1).
    count: u32,
}

#[derive(Args)]
struct BudgetArgs {
    /// Stake paid by each person.
    #[arg(long)]
    stake: Option<i64>,

    /// Sponsorship money added on top of the stakes.
    #[arg(long)]
    sponsorship: Option<i64>,
}

#[derive(Args)]
struct SponsorArgs {
    /// Item name.
    #[arg(required_unless_present = "clear")]
    name: Option<String>,

    /// Item price in whole units.
    #[arg(required_unless_present = "clear")]
    price: Option<f64>,

    /// Remove every sponsored item instead.
    #[arg(long, conflicts_with_all = ["name", "price"])]
    clear: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = StoreConfig::from_env();
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = dir;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = FileStore::from_config(&config);
    info!(path = %store.path().display(), "using state file");

    if let Commands::Reset = cli.command {
        store.clear();
        println!("Saved state cleared: {}", store.path().display());
        return Ok(());
    }

    let state = store.load_or_default();
    let next = apply_command(&state, cli.command)?;
    if next != state {
        store.save(&next);
    }

    let report = CurveEngine::compute(&next).context("Failed to compute curve")?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&next, &report);
    }
    Ok(())
}

/// Produce the state that results from `command`.
fn apply_command(state: &CurveState, command: Commands) -> Result<CurveState> {
    let next = match command {
        Commands::Show | Commands::Reset => state.clone(),
        Commands::Set(args) => {
            let key = parse_anchor_key(&args.anchor, state.persons)?;
            CurveEngine::edit(state, key, args.value)?
        }
        Commands::Redistribute => CurveEngine::redistribute(state)?,
        Commands::Persons(args) => CurveEngine::resize(state, args.count)?,
        Commands::Budget(args) => {
            if args.stake.is_none() && args.sponsorship.is_none() {
                bail!("Nothing to change: pass --stake and/or --sponsorship");
            }
            CurveState {
                stake: args.stake.unwrap_or(state.stake),
                sponsorship: args.sponsorship.unwrap_or(state.sponsorship),
                ..state.clone()
            }
        }
        Commands::Sponsor(args) => {
            if args.clear {
                CurveState {
                    sponsored: Vec::new(),
                    ..state.clone()
                }
            } else {
                let name = args.name.context("Missing item name")?;
                let price = args.price.context("Missing item price")?;
                let item = SponsoredItem::new(name, price);
                if !item.is_applicable() {
                    bail!("Sponsored items need a name and a positive price");
                }
                CurveEngine::add_sponsored(state, item)
            }
        }
    };
    Ok(next)
}

/// Parse "last" or an active anchor rank for a curve of `persons` positions.
fn parse_anchor_key(s: &str, persons: u32) -> Result<AnchorKey> {
    if s.eq_ignore_ascii_case("last") {
        return Ok(AnchorKey::Last);
    }
    let rank: u32 = s
        .parse()
        .with_context(|| format!("Invalid anchor '{s}' (use a rank or 'last')"))?;
    if rank == persons {
        return Ok(AnchorKey::Last);
    }
    let points = control_points(persons);
    if !points.contains(&rank) {
        bail!(
            "Rank {rank} is not an anchor for {persons} positions (anchors: {:?})",
            points
        );
    }
    Ok(AnchorKey::Rank(rank))
}

fn print_report(state: &CurveState, report: &CurveReport) {
    println!("\n=== PRIZE CURVE ({} positions) ===", state.persons);
    for (entry, anchor) in report.positions.iter().zip(&report.chart.anchors) {
        let marker = if anchor.is_some() { "*" } else { " " };
        if entry.sponsored {
            println!("{marker}{:>4}  {:>8}  {} (sponsored)", entry.rank, entry.cost, entry.name);
        } else {
            println!("{marker}{:>4}  {:>8}", entry.rank, entry.cost);
        }
    }

    let summary = &report.summary;
    println!();
    println!("Stake:        {} x {}", state.stake, state.persons);
    println!("Sponsorship:  {}", state.sponsorship);
    println!("Total amount: {}", summary.total_amount);
    println!("Total cost:   {}", summary.total_cost);
    if summary.is_covered() {
        println!("Surplus:      {}", summary.balance);
    } else {
        println!("Deficit:      {}", -summary.balance);
    }
}
