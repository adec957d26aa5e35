use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::thread;

use gt_app::{AppError, AppResult, PlaybackConfig, Session, SessionEvent, load_config};
use gt_core::NodeId;
use gt_graph::GraphBuilder;
use gt_traverse::{Algorithm, traversal_order};
use tracing_subscriber::EnvFilter;

mod render;
mod repl;

/// Largest graph the command line will build.
const MAX_NODES: u32 = 10_000;

#[derive(Parser)]
#[command(name = "gt-cli")]
#[command(about = "GraphTour CLI - step through BFS and DFS on small graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a traversal step by step
    Run {
        #[command(flatten)]
        graph: GraphArgs,
        /// bfs or dfs (defaults to the config value)
        #[arg(short, long)]
        algorithm: Option<Algorithm>,
        #[command(flatten)]
        playback: PlaybackArgs,
        /// Print one JSON event per line
        #[arg(long)]
        json: bool,
    },
    /// Print the whole-graph visit order
    Order {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(short, long, default_value = "bfs")]
        algorithm: Algorithm,
    },
    /// Build a graph and play traversals interactively
    Repl {
        #[command(flatten)]
        playback: PlaybackArgs,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct GraphArgs {
    /// Number of nodes, ids 0..N
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(..=MAX_NODES as i64))]
    nodes: u32,
    /// Undirected edge, e.g. `0-1` (repeatable)
    #[arg(short, long = "edge")]
    edges: Vec<EdgeSpec>,
    /// Start node id
    #[arg(short, long, default_value = "0")]
    start: String,
}

#[derive(Args)]
struct PlaybackArgs {
    /// Playback config YAML file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Delay between auto steps in milliseconds
    #[arg(long)]
    speed: Option<u64>,
    /// Wait for Enter before each step
    #[arg(long)]
    step: bool,
}

impl PlaybackArgs {
    /// Config file values, overridden by flags.
    fn resolve(&self) -> AppResult<PlaybackConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => PlaybackConfig::default(),
        };
        if let Some(speed) = self.speed {
            config.speed_ms = speed;
        }
        if self.step {
            config.step_mode = true;
        }
        config.validate()?;
        Ok(config)
    }
}

/// `A-B` on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EdgeSpec {
    from: NodeId,
    to: NodeId,
}

impl FromStr for EdgeSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once(['-', ','])
            .ok_or_else(|| format!("expected A-B, got '{s}'"))?;
        let parse = |part: &str| part.parse::<NodeId>().map_err(|e| e.to_string());
        Ok(EdgeSpec {
            from: parse(a)?,
            to: parse(b)?,
        })
    }
}

fn main() -> AppResult<()> {
    // Logs go to stderr so stdout stays parseable with --json
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            graph,
            algorithm,
            playback,
            json,
        } => cmd_run(&graph, algorithm, &playback, json),
        Commands::Order { graph, algorithm } => cmd_order(&graph, algorithm),
        Commands::Repl { playback, json } => repl::run(playback.resolve()?, json),
    }
}

fn cmd_run(
    graph: &GraphArgs,
    algorithm: Option<Algorithm>,
    playback: &PlaybackArgs,
    json: bool,
) -> AppResult<()> {
    let config = playback.resolve()?;
    let algorithm = algorithm.unwrap_or(config.algorithm);
    let mut session = Session::new(config);

    for _ in 0..graph.nodes {
        session.create_node_auto()?;
    }
    for edge in &graph.edges {
        session.create_edge(edge.from, edge.to)?;
    }

    let start = session.parse_start(&graph.start)?;
    let mut events = session.request_start(start, algorithm)?;
    let stdin = io::stdin();

    loop {
        let finished = events.iter().any(SessionEvent::is_terminal);
        for event in &events {
            render::print_event(event, json)?;
        }
        if finished {
            return Ok(());
        }

        events = match session.pending_timer() {
            Some((ticket, delay)) => {
                thread::sleep(delay);
                session.on_timer(ticket)?
            }
            None => {
                if !json {
                    eprint!("[Enter] next step ");
                    io::stderr().flush()?;
                }
                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    session.request_stop()
                } else {
                    session.request_advance()?
                }
            }
        };
    }
}

fn cmd_order(graph: &GraphArgs, algorithm: Algorithm) -> AppResult<()> {
    let mut builder = GraphBuilder::with_nodes(graph.nodes);
    for edge in &graph.edges {
        builder.add_edge(edge.from, edge.to);
    }
    let built = builder.build()?;

    let start = graph
        .start
        .parse::<NodeId>()
        .map_err(|e| AppError::InvalidStartNode(e.to_string()))?;
    let order = traversal_order(&built, start, algorithm)?;

    let text = order
        .iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(" → ");
    println!("{algorithm} order: {text}");
    Ok(())
}
