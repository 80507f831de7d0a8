//! Graph views.
//!
//! A view implements [`Graph`] without storing anything itself. It holds a
//! [`SharedGraph`] handle to a backing graph and forwards or recomputes every call, so a
//! mutation made through the view is visible through the backing handle and vice versa.

mod undirected;

pub use undirected::AsUndirectedGraph;

use crate::edge_set::Set;
use crate::error::Result;
use crate::factory::EdgeFactory;
use crate::graph::{Graph, write_graph};
use crate::policy::GraphPolicy;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Backing storage shared between a graph's owner and its views.
pub type SharedGraph<G> = Rc<RefCell<G>>;

pub fn shared<G: Graph>(g: G) -> SharedGraph<G> {
    Rc::new(RefCell::new(g))
}

/// Forwards every operation to the backing graph verbatim.
pub struct GraphDelegator<G> {
    delegate: SharedGraph<G>,
}

impl<G: Graph> GraphDelegator<G> {
    pub fn new(delegate: SharedGraph<G>) -> Self {
        Self { delegate }
    }

    pub fn delegate(&self) -> &SharedGraph<G> {
        &self.delegate
    }
}

impl<G> Clone for GraphDelegator<G> {
    fn clone(&self) -> Self {
        Self {
            delegate: Rc::clone(&self.delegate),
        }
    }
}

impl<G: Graph> Graph for GraphDelegator<G> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn policy(&self) -> GraphPolicy {
        self.delegate.borrow().policy()
    }

    fn edge_factory(&self) -> Rc<dyn EdgeFactory<G::Vertex, G::Edge>> {
        self.delegate.borrow().edge_factory()
    }

    fn vertex_set(&self) -> Set<G::Vertex> {
        self.delegate.borrow().vertex_set()
    }

    fn edge_set(&self) -> Set<G::Edge> {
        self.delegate.borrow().edge_set()
    }

    fn vertex_count(&self) -> usize {
        self.delegate.borrow().vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.delegate.borrow().edge_count()
    }

    fn contains_vertex(&self, v: &G::Vertex) -> bool {
        self.delegate.borrow().contains_vertex(v)
    }

    fn contains_edge(&self, e: &G::Edge) -> bool {
        self.delegate.borrow().contains_edge(e)
    }

    fn edge(&self, s: &G::Vertex, t: &G::Vertex) -> Option<G::Edge> {
        self.delegate.borrow().edge(s, t)
    }

    fn all_edges(&self, s: &G::Vertex, t: &G::Vertex) -> Set<G::Edge> {
        self.delegate.borrow().all_edges(s, t)
    }

    fn edges_of(&self, v: &G::Vertex) -> Result<Set<G::Edge>> {
        self.delegate.borrow().edges_of(v)
    }

    fn degree_of(&self, v: &G::Vertex) -> Result<usize> {
        self.delegate.borrow().degree_of(v)
    }

    fn in_degree_of(&self, v: &G::Vertex) -> Result<usize> {
        self.delegate.borrow().in_degree_of(v)
    }

    fn incoming_edges_of(&self, v: &G::Vertex) -> Result<Set<G::Edge>> {
        self.delegate.borrow().incoming_edges_of(v)
    }

    fn out_degree_of(&self, v: &G::Vertex) -> Result<usize> {
        self.delegate.borrow().out_degree_of(v)
    }

    fn outgoing_edges_of(&self, v: &G::Vertex) -> Result<Set<G::Edge>> {
        self.delegate.borrow().outgoing_edges_of(v)
    }

    fn edge_source(&self, e: &G::Edge) -> Result<G::Vertex> {
        self.delegate.borrow().edge_source(e)
    }

    fn edge_target(&self, e: &G::Edge) -> Result<G::Vertex> {
        self.delegate.borrow().edge_target(e)
    }

    fn edge_weight(&self, e: &G::Edge) -> f64 {
        self.delegate.borrow().edge_weight(e)
    }

    fn set_edge_weight(&mut self, e: &G::Edge, weight: f64) -> Result<()> {
        self.delegate.borrow_mut().set_edge_weight(e, weight)
    }

    fn add_vertex(&mut self, v: G::Vertex) -> bool {
        self.delegate.borrow_mut().add_vertex(v)
    }

    fn add_edge(&mut self, s: &G::Vertex, t: &G::Vertex) -> Result<Option<G::Edge>> {
        self.delegate.borrow_mut().add_edge(s, t)
    }

    fn add_edge_with(&mut self, s: &G::Vertex, t: &G::Vertex, e: G::Edge) -> Result<bool> {
        self.delegate.borrow_mut().add_edge_with(s, t, e)
    }

    fn remove_edge_between(&mut self, s: &G::Vertex, t: &G::Vertex) -> Option<G::Edge> {
        self.delegate.borrow_mut().remove_edge_between(s, t)
    }

    fn remove_edge(&mut self, e: &G::Edge) -> bool {
        self.delegate.borrow_mut().remove_edge(e)
    }

    fn remove_vertex(&mut self, v: &G::Vertex) -> bool {
        self.delegate.borrow_mut().remove_vertex(v)
    }
}

impl<G: Graph> fmt::Display for GraphDelegator<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_graph(self, f)
    }
}
