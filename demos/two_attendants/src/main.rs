//! two_attendants: the reference order-dispatch scenario.
//!
//! Two attendants, Alice and Bob, receive 20 orders arriving uniformly over
//! 30 time units.  Bob goes offline at t=10, together with one extra order
//! and a stray completion signal for Bob at that instant.
//!
//! ```text
//! two_attendants [config.json] [scenario.csv]
//! ```
//!
//! `config.json` overrides any `SimConfig` field (missing fields keep their
//! defaults).  `scenario.csv` adds commands on top of the built-in scenario;
//! see `od_scenario::loader` for the format.

mod logger;

use std::path::Path;

use anyhow::{Context, Result};

use od_core::{SimConfig, SimRng, SimTime, WorkerStatus};
use od_scenario::{UniformArrivals, apply_commands, load_scenario_csv};
use od_sim::{LogObserver, OrchestratorBuilder, Outcome, SimObserver, SimStats};

// ── Constants ─────────────────────────────────────────────────────────────────

const ORDER_COUNT:  usize = 20;
const HORIZON:      f64   = 30.0;
const BOB_OFFLINE:  f64   = 10.0;
const ARRIVAL_RNG:  u64   = 1;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints every outcome to stdout and forwards it to the logger.
struct Printer {
    inner: LogObserver,
}

impl SimObserver for Printer {
    fn on_outcome(&mut self, outcome: &Outcome<'_>) {
        println!("{outcome}");
        self.inner.on_outcome(outcome);
    }

    fn on_run_end(&mut self, now: SimTime, stats: &SimStats) {
        self.inner.on_run_end(now, stats);
    }
}

fn load_config(path: Option<&str>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let config: SimConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

fn main() -> Result<()> {
    logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();

    // 1. Configuration.
    let config = load_config(args.first().map(String::as_str))?;
    println!("=== two_attendants: order dispatch ===");
    println!(
        "service={}  cooldown={}  capacity={}  seed={}",
        config.service_duration, config.cooldown, config.capacity, config.seed
    );
    println!();

    // 2. Orchestrator with two attendants.
    let mut sim = OrchestratorBuilder::new(config.clone())
        .workers(["Alice", "Bob"])
        .build()?;

    // 3. Random arrivals from a stream independent of the tie-break RNG.
    let mut rng = SimRng::new(config.seed).child(ARRIVAL_RNG);
    UniformArrivals::new(ORDER_COUNT, HORIZON)?.schedule(&mut rng, &mut sim)?;

    // 4. Bob goes offline at t=10.
    sim.add_order(BOB_OFFLINE)?;
    sim.schedule_status_change(BOB_OFFLINE, "Bob", WorkerStatus::Inactive)?;
    let bob = sim.workers().id_of("Bob")?;
    sim.inject_completion(BOB_OFFLINE, bob)?;

    // 5. Optional extra commands.
    if let Some(path) = args.get(1) {
        let commands = load_scenario_csv(Path::new(path))?;
        println!("Loaded {} scenario commands from {path}", commands.len());
        apply_commands(&commands, &mut sim)?;
    }

    // 6. Run.
    let mut printer = Printer { inner: LogObserver };
    sim.process_events(&mut printer)?;

    // 7. Summary.
    let stats = sim.stats();
    println!();
    println!("Total processed: {}", stats.processed);
    println!("Total rejected: {}", stats.rejected);

    Ok(())
}
