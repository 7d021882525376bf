//! tower — command-line driver for the lift elevator simulator.
//!
//! Runs one dispatch policy (or every policy with `--compare`, each from the
//! same seed) and prints the average wait per passenger and the average
//! distance travelled per served passenger.
//!
//! ```text
//! tower --config tower.toml --policy nearest --render --max-ticks 200
//! tower --compare --served 5000 --output output/tower
//! RUST_LOG=debug tower --arrivals rush_hour.csv
//! ```

mod render;


use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use lift_arrivals::{ArrivalSource, RandomArrivals, ScriptedArrivals, load_arrivals_csv};
use lift_core::{Passenger, Policy, SimConfig, Tick};
use lift_output::{CsvWriter, OutputWriter, SimOutputObserver};
use lift_sim::{CabinSnapshot, SimBuilder, SimObserver, SimStats};

use render::TextRenderer;

// ── Command line ──────────────────────────────────────────────────────────────

/// Single-cabin elevator simulator.
#[derive(Parser, Debug)]
#[command(name = "tower", version)]
struct Args {
    /// TOML file with a `SimConfig`; missing keys keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of floors.
    #[arg(long)]
    floors: Option<u32>,

    /// Cabin capacity.
    #[arg(long)]
    capacity: Option<u32>,

    /// Dispatch policy: `nearest` or `directional`.
    #[arg(long)]
    policy: Option<Policy>,

    #[arg(long)]
    seed: Option<u64>,

    /// Stop once this many passengers have boarded (0 = no target).
    #[arg(long)]
    served: Option<u64>,

    /// Hard stop after this many ticks.
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Replay arrivals from a `tick,start,destination` CSV instead of
    /// generating random traffic.
    #[arg(long)]
    arrivals: Option<PathBuf>,

    /// Write tick summaries and boardings to this directory.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Draw the building after every snapshot.
    #[arg(long)]
    render: bool,

    /// Run every policy on the same traffic and compare.
    #[arg(long)]
    compare: bool,

    /// More log output (-v info, -vv debug, -vvv trace).  `RUST_LOG` wins.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    apply_overrides(&mut config, args);
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn apply_overrides(config: &mut SimConfig, args: &Args) {
    if let Some(floors) = args.floors {
        config.total_floors = floors;
    }
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    if let Some(policy) = args.policy {
        config.policy = policy;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(served) = args.served {
        config.served_target = served;
    }
    if args.max_ticks.is_some() {
        config.max_ticks = args.max_ticks;
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Forwards every hook to the optional renderer and output writer.
struct DemoObserver<W: OutputWriter> {
    renderer: Option<TextRenderer<std::io::Stdout>>,
    output:   Option<SimOutputObserver<W>>,
}

impl<W: OutputWriter> SimObserver for DemoObserver<W> {
    fn on_board(&mut self, tick: Tick, passenger: &Passenger, wait_ticks: u64) {
        if let Some(out) = &mut self.output {
            out.on_board(tick, passenger, wait_ticks);
        }
    }

    fn on_tick_end(&mut self, tick: Tick, stats: &SimStats) {
        if let Some(out) = &mut self.output {
            out.on_tick_end(tick, stats);
        }
    }

    fn on_snapshot(&mut self, snapshot: &CabinSnapshot) {
        if let Some(r) = &mut self.renderer {
            r.on_snapshot(snapshot);
        }
        if let Some(out) = &mut self.output {
            out.on_snapshot(snapshot);
        }
    }

    fn on_sim_end(&mut self, stats: &SimStats) {
        if let Some(out) = &mut self.output {
            out.on_sim_end(stats);
        }
    }
}

// ── Runs ──────────────────────────────────────────────────────────────────────

fn run_policy<A: ArrivalSource>(
    config:     &SimConfig,
    policy:     Policy,
    arrivals:   A,
    output_dir: Option<&Path>,
    render:     bool,
) -> Result<SimStats> {
    let config = SimConfig { policy, ..config.clone() };
    let mut sim = SimBuilder::new(config.clone(), policy, arrivals).build()?;

    let output = match output_dir {
        Some(dir) => Some(SimOutputObserver::new(CsvWriter::new(dir)?)),
        None => None,
    };
    let mut obs = DemoObserver {
        renderer: render.then(|| TextRenderer::new(std::io::stdout())),
        output,
    };

    let t0 = Instant::now();
    let stats = sim.run(&mut obs);
    log::info!("{policy} finished in {:.3} s", t0.elapsed().as_secs_f64());

    if let Some(e) = obs.output.as_mut().and_then(|o| o.take_error()) {
        eprintln!("output error: {e}");
    }
    Ok(stats)
}

fn print_summary(policy: Policy, stats: &SimStats) {
    println!("Policy: {policy}");
    println!("  ticks                  : {}", stats.ticks);
    println!("  passengers served      : {}", stats.served);
    println!("  passengers delivered   : {}", stats.delivered);
    match stats.average_wait() {
        Some(w) => println!("  average wait           : {w:.2} ticks"),
        None => println!("  average wait           : n/a"),
    }
    println!("  longest wait           : {} ticks", stats.max_wait_ticks);
    match stats.distance_per_passenger() {
        Some(d) => println!("  distance per passenger : {d:.2} floors"),
        None => println!("  distance per passenger : n/a"),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args)?;
    let script: Option<ScriptedArrivals> = match &args.arrivals {
        Some(path) => Some(
            load_arrivals_csv(path).with_context(|| format!("loading {}", path.display()))?,
        ),
        None => None,
    };

    println!("=== tower: lift simulator ===");
    println!(
        "Floors: {}  |  Capacity: {}  |  Seed: {}  |  Target: {} served{}",
        config.total_floors,
        config.capacity,
        config.seed,
        config.served_target,
        config.max_ticks.map(|t| format!(" or {t} ticks")).unwrap_or_default(),
    );
    match &script {
        Some(s) => println!("Arrivals: {} scripted trips", s.len()),
        None => println!(
            "Arrivals: {} at start, then p = {} per tick",
            config.initial_passengers, config.arrival_probability
        ),
    }
    println!();

    let policies: Vec<Policy> = if args.compare { Policy::ALL.to_vec() } else { vec![config.policy] };

    for policy in policies {
        let output_dir = args.output.as_ref().map(|dir| {
            if args.compare { dir.join(policy.as_str()) } else { dir.clone() }
        });

        let stats = match &script {
            Some(s) => run_policy(&config, policy, s.clone(), output_dir.as_deref(), args.render)?,
            None => {
                let arrivals = RandomArrivals::from_config(&config);
                run_policy(&config, policy, arrivals, output_dir.as_deref(), args.render)?
            }
        };
        print_summary(policy, &stats);
        if let Some(dir) = &output_dir {
            println!("  output                 : {}", dir.display());
        }
        println!();
    }

    Ok(())
}
