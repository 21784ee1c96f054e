use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use env_logger::{Builder, Target};
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use metric_tsp::approx::Christofides;
use metric_tsp::config::SolverConfig;
use metric_tsp::exact::BranchAndBound;
use metric_tsp::generator::GraphGenerator;
use metric_tsp::models::{Tour, TspSolver};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum SolverMode {
    Exact,
    Approx,
    Both,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

/// Solve a random metric TSP instance exactly and approximately.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Opt {
    /// Number of vertices in the generated complete graph
    #[arg(long, default_value_t = 8)]
    size: usize,

    /// RNG seed; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Which solvers to run
    #[arg(long, value_enum, default_value_t = SolverMode::Both)]
    solver: SolverMode,

    /// JSON file with solver settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long)]
    json: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Debug, Serialize)]
struct Report {
    solver: &'static str,
    elapsed_ms: f64,
    tour: Tour,
}

fn init_logger(level: LogLevel) -> Result<(), Box<dyn Error>> {
    Builder::new()
        .filter_level(level.to_filter())
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{} {}", record.level(), record.args()))
        .try_init()?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<SolverConfig, Box<dyn Error>> {
    match path {
        Some(path) => Ok(serde_json::from_str(&fs::read_to_string(path)?)?),
        None => Ok(SolverConfig::default()),
    }
}

fn run(
    name: &'static str,
    solver: &mut dyn TspSolver,
    graph: &metric_tsp::graph::Graph,
) -> Result<Report, Box<dyn Error>> {
    let started = Instant::now();
    let tour = solver.calculate_optimum(graph)?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    info!("{name} finished in {elapsed_ms:.3} ms");
    Ok(Report {
        solver: name,
        elapsed_ms,
        tour,
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::parse();
    init_logger(opt.log_level)?;
    let config = load_config(opt.config.as_ref())?;

    let seed = opt.seed.unwrap_or_else(rand::random);
    info!("seed {seed}, size {}", opt.size);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = GraphGenerator::new(opt.size).generate(&mut rng)?;
    let updates = graph.assure_metric();
    info!("metric closure updated {updates} edges");

    let mut reports = Vec::new();
    if matches!(opt.solver, SolverMode::Exact | SolverMode::Both) {
        let mut solver = BranchAndBound::with_config(config.exact.clone());
        reports.push(run("exact", &mut solver, &graph)?);
    }
    if matches!(opt.solver, SolverMode::Approx | SolverMode::Both) {
        let mut solver = Christofides::with_config(config.approximation.clone());
        reports.push(run("approx", &mut solver, &graph)?);
    }

    if opt.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!(
                "{:<6} cost {:.4} in {:.3} ms: {}",
                report.solver,
                report.tour.cost(),
                report.elapsed_ms,
                report.tour.path_as_string()
            );
        }
        if let [exact, approx] = reports.as_slice() {
            if exact.tour.cost() > 0.0 {
                println!("ratio  {:.4}", approx.tour.cost() / exact.tour.cost());
            }
        }
    }
    Ok(())
}
