//! Per-vertex edge containers used by the adjacency strategies.

use crate::edge_set::{EdgeSet, Set};
use crate::factory::EdgeSetFactory;
use std::fmt;

pub(in crate::graph) struct DirectedEdgeContainer<E> {
    pub(in crate::graph) incoming: Box<dyn EdgeSet<E>>,
    pub(in crate::graph) outgoing: Box<dyn EdgeSet<E>>,
}

impl<E: Clone + Eq + std::hash::Hash> DirectedEdgeContainer<E> {
    pub(in crate::graph) fn new<V>(factory: &dyn EdgeSetFactory<V, E>, vertex: &V) -> Self {
        Self {
            incoming: factory.create_edge_set(vertex),
            outgoing: factory.create_edge_set(vertex),
        }
    }

    pub(in crate::graph) fn incoming_snapshot(&self) -> Set<E> {
        self.incoming.iter().cloned().collect()
    }

    pub(in crate::graph) fn outgoing_snapshot(&self) -> Set<E> {
        self.outgoing.iter().cloned().collect()
    }
}

impl<E> fmt::Debug for DirectedEdgeContainer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedEdgeContainer")
            .field("incoming", &self.incoming)
            .field("outgoing", &self.outgoing)
            .finish()
    }
}

pub(in crate::graph) struct UndirectedEdgeContainer<E> {
    pub(in crate::graph) incident: Box<dyn EdgeSet<E>>,
}

impl<E: Clone + Eq + std::hash::Hash> UndirectedEdgeContainer<E> {
    pub(in crate::graph) fn new<V>(factory: &dyn EdgeSetFactory<V, E>, vertex: &V) -> Self {
        Self {
            incident: factory.create_edge_set(vertex),
        }
    }

    pub(in crate::graph) fn snapshot(&self) -> Set<E> {
        self.incident.iter().cloned().collect()
    }
}

impl<E> fmt::Debug for UndirectedEdgeContainer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndirectedEdgeContainer")
            .field("incident", &self.incident)
            .finish()
    }
}
