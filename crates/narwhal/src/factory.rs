//! Factories used by graphs and by algorithms that synthesize vertices or edges.

use crate::edge::{EdgeId, EdgeKey, VertexId};
use crate::edge_set::{ArrayEdgeSet, EdgeSet, IndexEdgeSet};
use std::sync::atomic::{AtomicU64, Ordering};

/// Creates new vertices for algorithms that generate them.
pub trait VertexFactory<V> {
    fn create_vertex(&self) -> V;
}

impl<V, F> VertexFactory<V> for F
where
    F: Fn() -> V,
{
    fn create_vertex(&self) -> V {
        self()
    }
}

/// Creates the edge identity a graph registers for [`Graph::add_edge`](crate::Graph::add_edge).
///
/// Factories are shared between a graph and its shallow copies, so identities handed out
/// must stay unique across all of them.
pub trait EdgeFactory<V, E> {
    fn create_edge(&self, source: &V, target: &V) -> E;
}

impl<V, E, F> EdgeFactory<V, E> for F
where
    F: Fn(&V, &V) -> E,
{
    fn create_edge(&self, source: &V, target: &V) -> E {
        self(source, target)
    }
}

/// Hands out sequential [`VertexId`]s.
#[derive(Debug, Default)]
pub struct IdVertexFactory {
    next: AtomicU64,
}

impl IdVertexFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl VertexFactory<VertexId> for IdVertexFactory {
    fn create_vertex(&self) -> VertexId {
        VertexId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

/// Hands out sequential [`EdgeId`]s regardless of the endpoints.
#[derive(Debug, Default)]
pub struct IdEdgeFactory {
    next: AtomicU64,
}

impl IdEdgeFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V> EdgeFactory<V, EdgeId> for IdEdgeFactory {
    fn create_edge(&self, _source: &V, _target: &V) -> EdgeId {
        EdgeId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

/// Chooses the container representation for each vertex's edge sets.
pub trait EdgeSetFactory<V, E> {
    fn create_edge_set(&self, vertex: &V) -> Box<dyn EdgeSet<E>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IndexEdgeSetFactory;

impl<V, E: EdgeKey> EdgeSetFactory<V, E> for IndexEdgeSetFactory {
    fn create_edge_set(&self, _vertex: &V) -> Box<dyn EdgeSet<E>> {
        Box::new(IndexEdgeSet::default())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ArrayEdgeSetFactory {
    pub initial_capacity: usize,
}

impl<V, E: EdgeKey> EdgeSetFactory<V, E> for ArrayEdgeSetFactory {
    fn create_edge_set(&self, _vertex: &V) -> Box<dyn EdgeSet<E>> {
        Box::new(ArrayEdgeSet::with_capacity(self.initial_capacity))
    }
}
