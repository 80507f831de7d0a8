//! The graph capability contract and the base container implementing it.
//!
//! [`Graph`] is what algorithms consume: vertex/edge enumeration and adjacency queries that
//! work the same way whether the graph is directed or undirected, simple or multi.
//! [`BaseGraph`] is the concrete container; views in [`crate::view`] implement the same
//! contract on top of a shared backing graph.
//!
//! Every query returns an owned snapshot. Mutating a graph never invalidates a set obtained
//! from it earlier.

mod base;
mod entries;
mod specifics;

pub use base::BaseGraph;

use crate::edge::{EdgeKey, VertexKey};
use crate::edge_set::Set;
use crate::error::Result;
use crate::factory::EdgeFactory;
use crate::policy::GraphPolicy;
use std::fmt;
use std::rc::Rc;

pub trait Graph {
    type Vertex: VertexKey;
    type Edge: EdgeKey;

    fn policy(&self) -> GraphPolicy;

    /// Factory used by [`Graph::add_edge`] to create edge identities.
    fn edge_factory(&self) -> Rc<dyn EdgeFactory<Self::Vertex, Self::Edge>>;

    fn vertex_set(&self) -> Set<Self::Vertex>;

    fn edge_set(&self) -> Set<Self::Edge>;

    fn vertex_count(&self) -> usize {
        self.vertex_set().len()
    }

    fn edge_count(&self) -> usize {
        self.edge_set().len()
    }

    fn contains_vertex(&self, v: &Self::Vertex) -> bool;

    fn contains_edge(&self, e: &Self::Edge) -> bool;

    /// Some edge connecting `s` to `t`, if any. Undirected graphs match either orientation.
    ///
    /// Returns `None` when either vertex is not in the graph.
    fn edge(&self, s: &Self::Vertex, t: &Self::Vertex) -> Option<Self::Edge>;

    /// All edges connecting `s` to `t`. A loop (`s == t`) is reported once.
    ///
    /// Empty when either vertex is not in the graph.
    fn all_edges(&self, s: &Self::Vertex, t: &Self::Vertex) -> Set<Self::Edge>;

    /// Every edge touching `v`; loops are reported once.
    fn edges_of(&self, v: &Self::Vertex) -> Result<Set<Self::Edge>>;

    /// Number of edge ends at `v`, loops counted twice. Undirected graphs only.
    fn degree_of(&self, v: &Self::Vertex) -> Result<usize>;

    /// Directed graphs only.
    fn in_degree_of(&self, v: &Self::Vertex) -> Result<usize>;

    /// Directed graphs only.
    fn incoming_edges_of(&self, v: &Self::Vertex) -> Result<Set<Self::Edge>>;

    /// Directed graphs only.
    fn out_degree_of(&self, v: &Self::Vertex) -> Result<usize>;

    /// Directed graphs only.
    fn outgoing_edges_of(&self, v: &Self::Vertex) -> Result<Set<Self::Edge>>;

    fn edge_source(&self, e: &Self::Edge) -> Result<Self::Vertex>;

    fn edge_target(&self, e: &Self::Edge) -> Result<Self::Vertex>;

    /// Weight of `e`, or [`DEFAULT_EDGE_WEIGHT`](crate::edge::DEFAULT_EDGE_WEIGHT) when the
    /// edge carries no weight attribute.
    fn edge_weight(&self, e: &Self::Edge) -> f64;

    fn set_edge_weight(&mut self, e: &Self::Edge, weight: f64) -> Result<()>;

    /// Returns `false` if `v` was already present.
    fn add_vertex(&mut self, v: Self::Vertex) -> bool;

    /// Creates an edge from `s` to `t` with the graph's edge factory.
    ///
    /// Returns `Ok(None)` when multiple edges are disallowed and `s`/`t` are already
    /// connected, or when the factory produced an identity that is already registered.
    fn add_edge(&mut self, s: &Self::Vertex, t: &Self::Vertex) -> Result<Option<Self::Edge>>;

    /// Registers a caller-supplied edge. Returns `Ok(false)` when the edge is already present
    /// or multiple edges are disallowed and `s`/`t` are already connected; a disallowed loop
    /// fails with [`Error::LoopsNotAllowed`](crate::Error::LoopsNotAllowed).
    fn add_edge_with(
        &mut self,
        s: &Self::Vertex,
        t: &Self::Vertex,
        e: Self::Edge,
    ) -> Result<bool>;

    fn remove_edge_between(&mut self, s: &Self::Vertex, t: &Self::Vertex) -> Option<Self::Edge>;

    fn remove_edge(&mut self, e: &Self::Edge) -> bool;

    /// Removes `v` together with every edge touching it.
    fn remove_vertex(&mut self, v: &Self::Vertex) -> bool;

    fn is_directed(&self) -> bool {
        self.policy().directed
    }

    fn is_allowing_loops(&self) -> bool {
        self.policy().allow_loops
    }

    fn is_allowing_multiple_edges(&self) -> bool {
        self.policy().allow_multiple_edges
    }

    fn is_weighted(&self) -> bool {
        self.policy().weighted
    }

    fn contains_edge_between(&self, s: &Self::Vertex, t: &Self::Vertex) -> bool {
        self.edge(s, t).is_some()
    }

    fn remove_all_edges(&mut self, edges: &[Self::Edge]) -> bool {
        let mut modified = false;
        for e in edges {
            modified |= self.remove_edge(e);
        }
        modified
    }

    /// Removes and returns every edge connecting `s` and `t`.
    fn remove_all_edges_between(
        &mut self,
        s: &Self::Vertex,
        t: &Self::Vertex,
    ) -> Set<Self::Edge> {
        let removed = self.all_edges(s, t);
        for e in &removed {
            self.remove_edge(e);
        }
        removed
    }

    fn remove_all_vertices(&mut self, vertices: &[Self::Vertex]) -> bool {
        let mut modified = false;
        for v in vertices {
            modified |= self.remove_vertex(v);
        }
        modified
    }
}

/// Writes `([v1, v2], [(v1,v2), ...])`; undirected edges use braces.
pub(crate) fn write_graph<G>(g: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    G: Graph + ?Sized,
{
    let (open, close) = if g.is_directed() { ("(", ")") } else { ("{", "}") };
    f.write_str("([")?;
    for (i, v) in g.vertex_set().iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{v:?}")?;
    }
    f.write_str("], [")?;
    for (i, e) in g.edge_set().iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        let (Ok(s), Ok(t)) = (g.edge_source(e), g.edge_target(e)) else {
            continue;
        };
        write!(f, "{open}{s:?},{t:?}{close}")?;
    }
    f.write_str("])")
}
