//! Undirected projection of a directed graph.

use super::{GraphDelegator, SharedGraph};
use crate::edge_set::Set;
use crate::error::{Error, Result};
use crate::factory::EdgeFactory;
use crate::graph::{Graph, write_graph};
use crate::policy::{Direction, GraphPolicy};
use std::fmt;
use std::rc::Rc;

const NO_EDGE_ADD: &str = "this graph does not support edge addition";

/// Presents a directed graph as undirected.
///
/// Adjacency queries match edges in either orientation and `degree_of` is the backing
/// graph's in-degree plus out-degree, so loops count twice. Edges cannot be added through
/// the view; vertex addition and all removals pass through to the backing graph.
pub struct AsUndirectedGraph<G> {
    inner: GraphDelegator<G>,
}

impl<G: Graph> AsUndirectedGraph<G> {
    /// Fails with [`Error::WrongMode`] if the backing graph is not directed.
    pub fn new(backing: SharedGraph<G>) -> Result<Self> {
        if !backing.borrow().is_directed() {
            return Err(Error::WrongMode {
                operation: "as_undirected",
                mode: Direction::Undirected,
            });
        }
        Ok(Self::new_unchecked(backing))
    }

    pub(crate) fn new_unchecked(backing: SharedGraph<G>) -> Self {
        Self {
            inner: GraphDelegator::new(backing),
        }
    }

    pub fn backing(&self) -> &SharedGraph<G> {
        self.inner.delegate()
    }

    fn directed_only(operation: &'static str) -> Error {
        Error::WrongMode {
            operation,
            mode: Direction::Undirected,
        }
    }
}

impl<G: Graph> Graph for AsUndirectedGraph<G> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn policy(&self) -> GraphPolicy {
        GraphPolicy {
            directed: false,
            ..self.inner.policy()
        }
    }

    fn edge_factory(&self) -> Rc<dyn EdgeFactory<G::Vertex, G::Edge>> {
        self.inner.edge_factory()
    }

    fn vertex_set(&self) -> Set<G::Vertex> {
        self.inner.vertex_set()
    }

    fn edge_set(&self) -> Set<G::Edge> {
        self.inner.edge_set()
    }

    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    fn contains_vertex(&self, v: &G::Vertex) -> bool {
        self.inner.contains_vertex(v)
    }

    fn contains_edge(&self, e: &G::Edge) -> bool {
        self.inner.contains_edge(e)
    }

    fn edge(&self, s: &G::Vertex, t: &G::Vertex) -> Option<G::Edge> {
        self.inner.edge(s, t).or_else(|| self.inner.edge(t, s))
    }

    fn all_edges(&self, s: &G::Vertex, t: &G::Vertex) -> Set<G::Edge> {
        let mut edges = self.inner.all_edges(s, t);
        if s != t {
            edges.extend(self.inner.all_edges(t, s));
        }
        edges
    }

    fn edges_of(&self, v: &G::Vertex) -> Result<Set<G::Edge>> {
        self.inner.edges_of(v)
    }

    fn degree_of(&self, v: &G::Vertex) -> Result<usize> {
        Ok(self.inner.in_degree_of(v)? + self.inner.out_degree_of(v)?)
    }

    fn in_degree_of(&self, _v: &G::Vertex) -> Result<usize> {
        Err(Self::directed_only("in_degree_of"))
    }

    fn incoming_edges_of(&self, _v: &G::Vertex) -> Result<Set<G::Edge>> {
        Err(Self::directed_only("incoming_edges_of"))
    }

    fn out_degree_of(&self, _v: &G::Vertex) -> Result<usize> {
        Err(Self::directed_only("out_degree_of"))
    }

    fn outgoing_edges_of(&self, _v: &G::Vertex) -> Result<Set<G::Edge>> {
        Err(Self::directed_only("outgoing_edges_of"))
    }

    fn edge_source(&self, e: &G::Edge) -> Result<G::Vertex> {
        self.inner.edge_source(e)
    }

    fn edge_target(&self, e: &G::Edge) -> Result<G::Vertex> {
        self.inner.edge_target(e)
    }

    fn edge_weight(&self, e: &G::Edge) -> f64 {
        self.inner.edge_weight(e)
    }

    fn set_edge_weight(&mut self, e: &G::Edge, weight: f64) -> Result<()> {
        self.inner.set_edge_weight(e, weight)
    }

    fn add_vertex(&mut self, v: G::Vertex) -> bool {
        self.inner.add_vertex(v)
    }

    fn add_edge(&mut self, _s: &G::Vertex, _t: &G::Vertex) -> Result<Option<G::Edge>> {
        Err(Error::Unsupported {
            operation: "add_edge",
            reason: NO_EDGE_ADD,
        })
    }

    fn add_edge_with(&mut self, _s: &G::Vertex, _t: &G::Vertex, _e: G::Edge) -> Result<bool> {
        Err(Error::Unsupported {
            operation: "add_edge_with",
            reason: NO_EDGE_ADD,
        })
    }

    fn remove_edge_between(&mut self, s: &G::Vertex, t: &G::Vertex) -> Option<G::Edge> {
        let e = self.edge(s, t)?;
        self.inner.remove_edge(&e).then_some(e)
    }

    fn remove_edge(&mut self, e: &G::Edge) -> bool {
        self.inner.remove_edge(e)
    }

    fn remove_vertex(&mut self, v: &G::Vertex) -> bool {
        self.inner.remove_vertex(v)
    }
}

impl<G: Graph> fmt::Display for AsUndirectedGraph<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_graph(self, f)
    }
}
