//! Construction-time graph policy and the named presets built on it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which adjacency strategy a graph indexes its edges with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Directed,
    Undirected,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Directed => f.write_str("directed"),
            Direction::Undirected => f.write_str("undirected"),
        }
    }
}

/// Fixed for the lifetime of a graph.
///
/// The default is a directed graph that permits loops but not multiple edges between the
/// same ordered pair of vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphPolicy {
    pub allow_multiple_edges: bool,
    pub allow_loops: bool,
    pub directed: bool,
    /// Edges registered in a weighted graph carry a mutable weight attribute.
    pub weighted: bool,
}

impl Default for GraphPolicy {
    fn default() -> Self {
        GraphKind::DefaultDirectedGraph.policy()
    }
}

impl GraphPolicy {
    pub const fn new(allow_multiple_edges: bool, allow_loops: bool, directed: bool) -> Self {
        Self {
            allow_multiple_edges,
            allow_loops,
            directed,
            weighted: false,
        }
    }

    pub const fn weighted(mut self) -> Self {
        self.weighted = true;
        self
    }

    pub fn direction(&self) -> Direction {
        if self.directed {
            Direction::Directed
        } else {
            Direction::Undirected
        }
    }
}

/// Named graph presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphKind {
    SimpleGraph,
    Multigraph,
    Pseudograph,
    SimpleDirectedGraph,
    DefaultDirectedGraph,
    DirectedMultigraph,
    DirectedPseudograph,
    SimpleWeightedGraph,
    DefaultDirectedWeightedGraph,
    DirectedWeightedMultigraph,
    WeightedPseudograph,
}

impl GraphKind {
    pub const ALL: [GraphKind; 11] = [
        GraphKind::SimpleGraph,
        GraphKind::Multigraph,
        GraphKind::Pseudograph,
        GraphKind::SimpleDirectedGraph,
        GraphKind::DefaultDirectedGraph,
        GraphKind::DirectedMultigraph,
        GraphKind::DirectedPseudograph,
        GraphKind::SimpleWeightedGraph,
        GraphKind::DefaultDirectedWeightedGraph,
        GraphKind::DirectedWeightedMultigraph,
        GraphKind::WeightedPseudograph,
    ];

    pub const fn policy(self) -> GraphPolicy {
        match self {
            GraphKind::SimpleGraph => GraphPolicy::new(false, false, false),
            GraphKind::Multigraph => GraphPolicy::new(true, false, false),
            GraphKind::Pseudograph => GraphPolicy::new(true, true, false),
            GraphKind::SimpleDirectedGraph => GraphPolicy::new(false, false, true),
            GraphKind::DefaultDirectedGraph => GraphPolicy::new(false, true, true),
            GraphKind::DirectedMultigraph | GraphKind::DirectedPseudograph => {
                GraphPolicy::new(true, true, true)
            }
            GraphKind::SimpleWeightedGraph => GraphPolicy::new(false, false, false).weighted(),
            GraphKind::DefaultDirectedWeightedGraph => {
                GraphPolicy::new(false, true, true).weighted()
            }
            GraphKind::DirectedWeightedMultigraph => GraphPolicy::new(true, true, true).weighted(),
            GraphKind::WeightedPseudograph => GraphPolicy::new(true, true, false).weighted(),
        }
    }
}

impl From<GraphKind> for GraphPolicy {
    fn from(kind: GraphKind) -> Self {
        kind.policy()
    }
}
