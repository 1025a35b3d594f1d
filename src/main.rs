//! Rescue robot in a burning building.
//!
//! Usage:
//!   cargo run -- --width 8 --height 6 --fires 6 --seed 3
//!   RUST_LOG=debug cargo run -- --steps 20 --trace run.csv

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};

use fire_rescue::config::DEFAULT_MAX_STEPS;
use fire_rescue::trace;
use fire_rescue::{Agent, DirectionPolicy, Env, GreedyPolicy, RandomPolicy, Solver, SolverConfig};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyKind {
    Greedy,
    Random,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 5)]
    width: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = 5)]
    height: i32,

    /// Number of fire cells placed at random
    #[arg(short, long, default_value_t = 3)]
    fires: usize,

    /// Seed for fire placement and the random policy
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Maximum sense/decide/move cycles
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    steps: usize,

    /// Direction ranking policy
    #[arg(short, long, value_enum, default_value_t = PolicyKind::Greedy)]
    policy: PolicyKind,

    /// Keep moving after reaching the person
    #[arg(long)]
    no_stop_on_arrival: bool,

    /// Write a CSV trace of every step to this file
    #[arg(short, long)]
    trace: Option<PathBuf>,
}

fn run<P: DirectionPolicy>(env: &Env, policy: P, config: SolverConfig, trace_path: Option<&PathBuf>) -> bool
{
    let mut solver = Solver::with_policy(Agent::new(env), policy, config);
    let result = solver.solve();

    if let Some(path) = trace_path {
        match trace::write_csv(path, solver.records()) {
            Ok(()) => info!("Wrote {} steps to {}", solver.records().len(), path.display()),
            Err(e) => error!("Failed to write trace {}: {}", path.display(), e),
        }
    }

    println!("Belief map:\n{}", solver.map());
    match result {
        Ok(outcome) => {
            println!(
                "Finished at {:?} after {} steps ({} moves among {} fires), person {}",
                outcome.final_pos,
                outcome.steps,
                solver.robot().moves,
                env.fire_count(),
                if outcome.reached_target { "reached" } else { "not reached" }
            );
            true
        }
        Err(e) => {
            error!("{}", e);
            false
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let env = match Env::random(args.width, args.height, args.fires, &mut rng) {
        Ok(env) => env,
        Err(e) => {
            error!("Cannot build world: {}", e);
            process::exit(2);
        }
    };
    println!("World:\n{}", env);

    let config = SolverConfig::default()
        .with_max_steps(args.steps)
        .with_stop_on_arrival(!args.no_stop_on_arrival);

    let ok = match args.policy {
        PolicyKind::Greedy => run(&env, GreedyPolicy, config, args.trace.as_ref()),
        PolicyKind::Random => run(&env, RandomPolicy::new(args.seed), config, args.trace.as_ref()),
    };
    if !ok {
        process::exit(1);
    }
}
