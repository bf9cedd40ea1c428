use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use u_dispatch::config::{DispatchConfig, Threads, DEFAULT_BUDGET, DEFAULT_OVERHEAD_PER_DRIVER};
use u_dispatch::models::{DispatchProblem, SearchPlan};
use u_dispatch::parse::parse_loads;
use u_dispatch::search::solve;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Load file: a header line, then `id (px,py) (dx,dy)` per line
    input: PathBuf,

    /// Per-driver time budget in minutes
    #[arg(long, default_value_t = DEFAULT_BUDGET)]
    budget: f64,

    /// Fixed cost per deployed driver
    #[arg(long, default_value_t = DEFAULT_OVERHEAD_PER_DRIVER)]
    overhead: f64,

    /// Seed for the search (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON search plan (built-in plan when omitted)
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Worker threads; 0 uses every core
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let text = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let loads = parse_loads(&text).with_context(|| format!("parsing {}", cli.input.display()))?;
    let problem = DispatchProblem::new(loads)?;

    let plan = match &cli.plan {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<SearchPlan>(&json)
                .with_context(|| format!("parsing plan {}", path.display()))?
        }
        None => SearchPlan::default(),
    };

    let mut config = DispatchConfig::default()
        .with_budget(cli.budget)
        .with_overhead_per_driver(cli.overhead)
        .with_threads(Threads::from(cli.threads));
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let outcome = solve(&problem, &plan, &config)?;
    info!(
        cost = outcome.cost,
        baseline_cost = outcome.baseline_cost,
        drivers = outcome.solution.num_drivers(),
        trials = outcome.trials,
        discarded = outcome.discarded,
        "search finished"
    );

    print!("{}", outcome.solution);
    Ok(())
}
