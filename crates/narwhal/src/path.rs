//! Paths through a graph.

use crate::error::{Error, Result};
use crate::graph::Graph;

/// A walk through a graph: a start vertex followed by a sequence of edges.
pub trait GraphPath {
    type G: Graph + ?Sized;

    fn graph(&self) -> &Self::G;

    fn start_vertex(&self) -> &<Self::G as Graph>::Vertex;

    fn end_vertex(&self) -> &<Self::G as Graph>::Vertex;

    fn edge_list(&self) -> &[<Self::G as Graph>::Edge];

    fn weight(&self) -> f64;
}

#[derive(Debug)]
pub struct GraphWalk<'g, G: Graph + ?Sized> {
    graph: &'g G,
    start: G::Vertex,
    end: G::Vertex,
    edges: Vec<G::Edge>,
    weight: f64,
}

impl<'g, G: Graph + ?Sized> GraphWalk<'g, G> {
    /// The weight is the sum of the edges' weights in `graph`.
    pub fn new(graph: &'g G, start: G::Vertex, end: G::Vertex, edges: Vec<G::Edge>) -> Self {
        let weight = edges.iter().map(|e| graph.edge_weight(e)).sum();
        Self {
            graph,
            start,
            end,
            edges,
            weight,
        }
    }

    /// Builds the walk visiting `vertices` in order, taking [`Graph::edge`] between each
    /// consecutive pair. Fails with [`Error::EmptyWalk`] when `vertices` is empty.
    pub fn from_vertices(graph: &'g G, vertices: &[G::Vertex]) -> Result<Self> {
        let Some(start) = vertices.first() else {
            return Err(Error::EmptyWalk);
        };
        let mut edges = Vec::with_capacity(vertices.len().saturating_sub(1));
        for pair in vertices.windows(2) {
            let (s, t) = (&pair[0], &pair[1]);
            let Some(e) = graph.edge(s, t) else {
                return Err(Error::EdgeNotFound {
                    edge: format!("{s:?} -> {t:?}"),
                });
            };
            edges.push(e);
        }
        let end = vertices.last().unwrap_or(start).clone();
        Ok(Self::new(graph, start.clone(), end, edges))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<G: Graph + ?Sized> GraphPath for GraphWalk<'_, G> {
    type G = G;

    fn graph(&self) -> &G {
        self.graph
    }

    fn start_vertex(&self) -> &G::Vertex {
        &self.start
    }

    fn end_vertex(&self) -> &G::Vertex {
        &self.end
    }

    fn edge_list(&self) -> &[G::Edge] {
        &self.edges
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}
