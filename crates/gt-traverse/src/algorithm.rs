use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TraverseError;

/// Traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first: the frontier is a FIFO queue.
    #[default]
    Bfs,
    /// Depth-first: the frontier is a LIFO stack.
    Dfs,
}

impl Algorithm {
    /// What renderers should call the frontier.
    pub fn frontier_label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "Queue",
            Algorithm::Dfs => "Stack",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => f.write_str("BFS"),
            Algorithm::Dfs => f.write_str("DFS"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = TraverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::Bfs),
            "dfs" | "depth-first" => Ok(Algorithm::Dfs),
            _ => Err(TraverseError::UnknownAlgorithm {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("BFS".parse::<Algorithm>().unwrap(), Algorithm::Bfs);
        assert_eq!(" dfs ".parse::<Algorithm>().unwrap(), Algorithm::Dfs);
        assert_eq!("depth-first".parse::<Algorithm>().unwrap(), Algorithm::Dfs);
        assert!("dijkstra".parse::<Algorithm>().is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(Algorithm::Bfs.frontier_label(), "Queue");
        assert_eq!(Algorithm::Dfs.frontier_label(), "Stack");
        assert_eq!(Algorithm::Dfs.to_string(), "DFS");
    }
}
