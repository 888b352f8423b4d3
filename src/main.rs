//! Virtual Plant - Entry Point
//!
//! Runs the interactive terminal game, or with `--headless N` simulates N
//! ticks without a UI and prints a JSON report.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use virtual_plant::actions::Action;
use virtual_plant::core::config::SimulationConfig;
use virtual_plant::core::error::Result;
use virtual_plant::entity::PlantState;
use virtual_plant::simulation::Session;
use virtual_plant::ui::state::LogEntry;
use virtual_plant::ui::terminal;

/// Keep a virtual plant alive in your terminal
#[derive(Parser, Debug)]
#[command(name = "virtual-plant")]
#[command(about = "Water, feed and protect a plant that lives in your terminal")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Simulate this many ticks without a UI and print a JSON report
    #[arg(long, value_name = "TICKS")]
    headless: Option<u64>,

    /// Comma-separated actions applied before every headless tick
    #[arg(long, value_delimiter = ',', requires = "headless")]
    actions: Vec<String>,

    /// Write log output to this file (the UI owns the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// JSON output of a headless run
#[derive(Serialize)]
struct HeadlessReport<'a> {
    seed: u64,
    ticks: u64,
    stage: &'static str,
    plant: &'a PlantState,
    log: Vec<&'a LogEntry>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut session = Session::new(SimulationConfig::default(), seed)?;

    match args.headless {
        Some(ticks) => run_headless(&mut session, ticks, &args.actions),
        None => terminal::run(&mut session),
    }
}

fn init_tracing(args: &Args) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("virtual_plant=info"));

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if args.headless.is_some() {
        // stdout carries the report
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

fn run_headless(session: &mut Session, ticks: u64, actions: &[String]) -> Result<()> {
    tracing::info!(ticks, actions = ?actions, "Headless run");

    for name in actions {
        if name.parse::<Action>().is_err() {
            tracing::warn!("Unknown action '{}' will be ignored", name);
        }
    }

    for _ in 0..ticks {
        if !session.plant().alive {
            break;
        }
        for name in actions {
            session.perform_named(name);
        }
        session.tick();
    }

    let report = HeadlessReport {
        seed: session.seed(),
        ticks: session.current_tick(),
        stage: session.plant().stage().label(),
        plant: session.plant(),
        log: session.log().iter().collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
