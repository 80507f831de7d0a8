//! Per-vertex edge containers.
//!
//! Every vertex owns one (undirected) or two (directed) edge sets. The representation is
//! chosen by the graph's [`EdgeSetFactory`](crate::factory::EdgeSetFactory) when the vertex
//! is added.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use std::fmt;

pub type Set<T> = IndexSet<T, FxBuildHasher>;

pub trait EdgeSet<E>: fmt::Debug {
    /// Returns `false` if `e` was already present.
    fn insert(&mut self, e: E) -> bool;
    fn remove(&mut self, e: &E) -> bool;
    fn contains(&self, e: &E) -> bool;
    fn len(&self) -> usize;
    fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Insertion-ordered hash set. The default representation.
#[derive(Debug, Clone)]
pub struct IndexEdgeSet<E> {
    edges: Set<E>,
}

impl<E> Default for IndexEdgeSet<E> {
    fn default() -> Self {
        Self {
            edges: Set::default(),
        }
    }
}

impl<E> EdgeSet<E> for IndexEdgeSet<E>
where
    E: std::hash::Hash + Eq + fmt::Debug,
{
    fn insert(&mut self, e: E) -> bool {
        self.edges.insert(e)
    }

    fn remove(&mut self, e: &E) -> bool {
        self.edges.shift_remove(e)
    }

    fn contains(&self, e: &E) -> bool {
        self.edges.contains(e)
    }

    fn len(&self) -> usize {
        self.edges.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.edges.iter())
    }
}

/// Vector-backed set with linear membership checks.
///
/// Cheaper than [`IndexEdgeSet`] in memory for vertices expected to have a low degree.
#[derive(Debug, Clone)]
pub struct ArrayEdgeSet<E> {
    edges: Vec<E>,
}

impl<E> Default for ArrayEdgeSet<E> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

impl<E> ArrayEdgeSet<E> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }
}

impl<E> EdgeSet<E> for ArrayEdgeSet<E>
where
    E: PartialEq + fmt::Debug,
{
    fn insert(&mut self, e: E) -> bool {
        if self.edges.contains(&e) {
            return false;
        }
        self.edges.push(e);
        true
    }

    fn remove(&mut self, e: &E) -> bool {
        let Some(pos) = self.edges.iter().position(|x| x == e) else {
            return false;
        };
        self.edges.remove(pos);
        true
    }

    fn contains(&self, e: &E) -> bool {
        self.edges.contains(e)
    }

    fn len(&self) -> usize {
        self.edges.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.edges.iter())
    }
}
