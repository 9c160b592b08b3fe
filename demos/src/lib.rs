//! Demo driver shared by the `pathgrid-demo` binary and its tests.
//!
//! Runs each selected algorithm over each selected maze, animating the
//! search with [`pathgrid_term::Renderer`] and printing the resulting path,
//! its length and the time taken.

pub mod mazes;

use std::fmt;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use clap::Parser;
use pathgrid_core::{GridGraph, InvalidGrid};
use pathgrid_search::{Algorithm, Heuristic, Outcome, Search, SearchConfig};
use pathgrid_term::{RenderConfig, Renderer};

/// Command line flags.
#[derive(Parser, Debug, Clone)]
#[command(name = "pathgrid-demo", version, about = "Watch grid path searches step by step")]
pub struct Args {
    /// Print results only, without drawing each step
    #[arg(long)]
    pub no_animate: bool,

    /// Pause between frames, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub delay: u64,

    /// Keep earlier frames on screen instead of clearing it
    #[arg(long)]
    pub no_clear: bool,

    /// Algorithm to run (astar, greedy, dijkstra, bfs, dfs); repeatable, all by default
    #[arg(short, long = "algorithm")]
    pub algorithms: Vec<Algorithm>,

    /// Estimate used by A* and greedy search
    #[arg(long, default_value_t = Heuristic::Manhattan)]
    pub heuristic: Heuristic,

    /// Maze to search (simple, complex, spiral); repeatable, all by default
    #[arg(short, long = "maze")]
    pub mazes: Vec<String>,

    /// Also search a random grid generated from this seed
    #[arg(long)]
    pub random: Option<u64>,

    /// Side length of the random grid
    #[arg(long, default_value_t = 12)]
    pub size: usize,
}

impl Args {
    /// Resolve the flags into a runnable configuration.
    pub fn into_config(self) -> Result<DemoConfig, DemoError> {
        let mut scenarios = Vec::new();
        if self.mazes.is_empty() && self.random.is_none() {
            for maze in mazes::MAZES {
                scenarios.push(Scenario::from_maze(maze)?);
            }
        }
        for key in &self.mazes {
            let maze = mazes::find(key).ok_or_else(|| DemoError::UnknownMaze(key.clone()))?;
            scenarios.push(Scenario::from_maze(maze)?);
        }
        if let Some(seed) = self.random {
            scenarios.push(Scenario {
                name: format!("Random Grid (seed {seed})"),
                graph: mazes::random(seed, self.size, self.size, 30)?,
            });
        }

        let algorithms = if self.algorithms.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            self.algorithms
        };

        Ok(DemoConfig {
            render: RenderConfig {
                animate: !self.no_animate,
                delay: Duration::from_millis(self.delay),
                clear: !self.no_clear,
            },
            search: SearchConfig {
                heuristic: self.heuristic,
            },
            algorithms,
            scenarios,
        })
    }
}

/// A named graph to search from its top-left to its bottom-right corner.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub graph: GridGraph,
}

impl Scenario {
    pub fn from_maze(maze: mazes::Maze) -> Result<Self, InvalidGrid> {
        Ok(Self {
            name: maze.name.to_string(),
            graph: maze.graph()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub render: RenderConfig,
    pub search: SearchConfig,
    pub algorithms: Vec<Algorithm>,
    pub scenarios: Vec<Scenario>,
}

/// What one algorithm did on one scenario.
#[derive(Debug, Clone)]
pub struct Report {
    pub scenario: String,
    pub algorithm: Algorithm,
    pub outcome: Outcome,
    pub expanded: usize,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub enum DemoError {
    UnknownMaze(String),
    Grid(InvalidGrid),
    Io(io::Error),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMaze(key) => {
                write!(f, "unknown maze \u{201c}{key}\u{201d} (expected simple, complex or spiral)")
            }
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
            Self::Io(e) => write!(f, "output error: {e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownMaze(_) => None,
            Self::Grid(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<InvalidGrid> for DemoError {
    fn from(e: InvalidGrid) -> Self {
        Self::Grid(e)
    }
}

impl From<io::Error> for DemoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Run every configured algorithm over every scenario, writing frames and
/// results to `out`.
pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> Result<Vec<Report>, DemoError> {
    let mut reports = Vec::with_capacity(config.scenarios.len() * config.algorithms.len());
    for scenario in &config.scenarios {
        writeln!(out, "\n=== Testing {} ===", scenario.name)?;
        for &algorithm in &config.algorithms {
            let report = run_one(out, config, scenario, algorithm)?;
            reports.push(report);
        }
    }
    Ok(reports)
}

fn run_one<W: Write>(
    out: &mut W,
    config: &DemoConfig,
    scenario: &Scenario,
    algorithm: Algorithm,
) -> Result<Report, DemoError> {
    let graph = &scenario.graph;
    let (start, target) = (mazes::start(), mazes::goal(graph));
    writeln!(out, "\nTesting {algorithm}")?;

    let mut renderer = Renderer::new(graph, config.render);
    let mut search = Search::with_config(graph, algorithm, start, target, config.search);
    let began = Instant::now();
    renderer.animate(out, search.steps())?;
    // The step iterator is drained, so this only collects the result.
    let outcome = search.run();
    let elapsed = began.elapsed();

    match outcome.path() {
        Some(path) => {
            writeln!(out, "\nPath found: {path}")?;
            writeln!(out, "Path length: {} steps", path.steps())?;
        }
        None => writeln!(out, "\nNo path found")?,
    }
    writeln!(out, "Nodes expanded: {}", search.expanded())?;
    writeln!(out, "Time taken: {:.3} ms", elapsed.as_secs_f64() * 1000.0)?;
    out.flush()?;

    log::info!(
        "{} / {algorithm}: {} in {} expansions, {elapsed:?}",
        scenario.name,
        outcome
            .path()
            .map_or_else(|| "no path".to_string(), |p| format!("{} steps", p.steps())),
        search.expanded(),
    );

    Ok(Report {
        scenario: scenario.name.clone(),
        algorithm,
        outcome,
        expanded: search.expanded(),
        elapsed,
    })
}
