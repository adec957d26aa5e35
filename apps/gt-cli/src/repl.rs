//! Interactive line-oriented front-end.
//!
//! Commands are forwarded to a [`Player`], which plays auto-mode runs in the
//! background; events are printed by a separate thread as they arrive.

use std::io::{self, BufRead};
use std::sync::mpsc::channel;
use std::thread;

use gt_app::{AppError, AppResult, PlaybackConfig, Player, PlayerCommand, Session};
use gt_core::{NodeId, Position};
use gt_traverse::Algorithm;
use tracing::{info, warn};

use crate::render;

const HELP: &str = "\
commands:
  node [X Y]      add a node (auto-placed without coordinates)
  edge A B        connect nodes A and B
  edge-mode       toggle two-pick edge mode
  pick ID         pick a node while in edge mode
  clear           remove all nodes and edges
  bfs ID | dfs ID start a traversal
  next            advance one step (step mode)
  stop            stop the running traversal
  step on|off     toggle step mode
  speed MS        delay between auto steps
  show            graph and run status
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Send(PlayerCommand),
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ReplCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match (head.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("node", []) => ReplCommand::Send(PlayerCommand::CreateNode(None)),
        ("node", [x, y]) => {
            let x = parse_coord(x)?;
            let y = parse_coord(y)?;
            let position = Position::checked(x, y).map_err(|e| e.to_string())?;
            ReplCommand::Send(PlayerCommand::CreateNode(Some(position)))
        }
        ("edge", [a, b]) => ReplCommand::Send(PlayerCommand::CreateEdge(node(a)?, node(b)?)),
        ("edge-mode", []) => ReplCommand::Send(PlayerCommand::ToggleEdgeMode),
        ("pick", [id]) => ReplCommand::Send(PlayerCommand::SelectForEdge(node(id)?)),
        ("clear", []) => ReplCommand::Send(PlayerCommand::ClearGraph),
        (name @ ("bfs" | "dfs"), [id]) => {
            let algorithm = if name == "bfs" {
                Algorithm::Bfs
            } else {
                Algorithm::Dfs
            };
            let start = id
                .parse::<NodeId>()
                .map_err(|e| AppError::InvalidStartNode(e.to_string()).to_string())?;
            ReplCommand::Send(PlayerCommand::Start { start, algorithm })
        }
        ("next" | "n", []) => ReplCommand::Send(PlayerCommand::Advance),
        ("stop", []) => ReplCommand::Send(PlayerCommand::Stop),
        ("step", ["on"]) => ReplCommand::Send(PlayerCommand::SetStepMode(true)),
        ("step", ["off"]) => ReplCommand::Send(PlayerCommand::SetStepMode(false)),
        ("speed", [ms]) => {
            let ms = ms
                .parse::<u64>()
                .map_err(|_| format!("speed must be a whole number of milliseconds, got '{ms}'"))?;
            ReplCommand::Send(PlayerCommand::SetSpeed(ms))
        }
        ("show", []) => ReplCommand::Send(PlayerCommand::Describe),
        ("help" | "?", []) => ReplCommand::Help,
        ("quit" | "exit" | "q", []) => ReplCommand::Quit,
        _ => return Err(format!("unrecognized command '{}' (try 'help')", line.trim())),
    };
    Ok(Some(command))
}

fn node(text: &str) -> Result<NodeId, String> {
    text.parse::<NodeId>().map_err(|e| e.to_string())
}

fn parse_coord(text: &str) -> Result<f64, String> {
    text.parse::<f64>()
        .map_err(|_| format!("invalid coordinate '{text}'"))
}

/// Read commands from stdin until `quit` or end of input.
pub fn run(config: PlaybackConfig, json: bool) -> AppResult<()> {
    let (tx, rx) = channel();
    let player = Player::spawn(Session::new(config), tx);
    let printer = thread::spawn(move || {
        for event in rx {
            if let Err(e) = render::print_event(&event, json) {
                warn!(error = %e, "failed to print event");
            }
        }
    });

    if !json {
        println!("{HELP}");
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(ReplCommand::Quit)) => break,
            Ok(Some(ReplCommand::Help)) => println!("{HELP}"),
            Ok(Some(ReplCommand::Send(command))) => player.send(command)?,
            Err(message) => println!("! {message}"),
        }
    }

    let session = player.shutdown()?;
    printer.join().map_err(|_| AppError::PlayerGone)?;
    info!(nodes = session.graph().node_count(), "repl closed");
    Ok(())
}
