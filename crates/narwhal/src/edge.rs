//! Vertex/edge handles and the endpoint record attached to every registered edge.

use std::fmt;
use std::hash::Hash;

/// Weight reported for edges that do not carry a weight attribute.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Requirements on vertex identities.
///
/// A graph only records membership of these values; payloads belong to the caller (usually
/// an arena indexed by [`VertexId`]).
pub trait VertexKey: Clone + Eq + Hash + fmt::Debug + 'static {}

impl<T> VertexKey for T where T: Clone + Eq + Hash + fmt::Debug + 'static {}

/// Requirements on edge identities.
pub trait EdgeKey: Clone + Eq + Hash + fmt::Debug + 'static {}

impl<T> EdgeKey for T where T: Clone + Eq + Hash + fmt::Debug + 'static {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub u64);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub u64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Per-edge capability decided when the edge is registered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeAttr {
    Plain,
    Weighted { weight: f64 },
}

impl EdgeAttr {
    pub fn weight(&self) -> f64 {
        match self {
            EdgeAttr::Plain => DEFAULT_EDGE_WEIGHT,
            EdgeAttr::Weighted { weight } => *weight,
        }
    }
}

/// Endpoints of a registered edge. Never mutated after registration, except for the weight.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord<V> {
    pub source: V,
    pub target: V,
    pub attr: EdgeAttr,
}

impl<V: PartialEq> EdgeRecord<V> {
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Whether the record connects `s` and `t` in either orientation.
    pub fn connects(&self, s: &V, t: &V) -> bool {
        (self.source == *s && self.target == *t) || (self.source == *t && self.target == *s)
    }

    pub fn touches(&self, v: &V) -> bool {
        self.source == *v || self.target == *v
    }
}
