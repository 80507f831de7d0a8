//! The base graph container.

use super::specifics::{EdgeMap, Specifics};
use super::{Graph, write_graph};
use crate::edge::{DEFAULT_EDGE_WEIGHT, EdgeAttr, EdgeKey, EdgeRecord, VertexKey};
use crate::edge_set::Set;
use crate::error::{Error, Result};
use crate::factory::{EdgeFactory, EdgeSetFactory, IndexEdgeSetFactory};
use crate::graphs;
use crate::policy::{GraphKind, GraphPolicy};
use std::fmt;
use std::rc::Rc;

/// A graph over caller-supplied vertex and edge identities.
///
/// Whether the graph is directed, allows loops, allows multiple edges between the same pair
/// of vertices, or carries edge weights is fixed at construction by its [`GraphPolicy`].
/// The container stores membership and adjacency only; vertex/edge payloads stay with the
/// caller.
pub struct BaseGraph<V, E> {
    policy: GraphPolicy,
    edge_factory: Rc<dyn EdgeFactory<V, E>>,
    edge_set_factory: Rc<dyn EdgeSetFactory<V, E>>,
    edges: EdgeMap<V, E>,
    specifics: Specifics<V, E>,
}

impl<V: VertexKey, E: EdgeKey> BaseGraph<V, E> {
    pub fn new(policy: GraphPolicy, edge_factory: impl EdgeFactory<V, E> + 'static) -> Self {
        Self::with_shared_factory(policy, Rc::new(edge_factory))
    }

    pub fn with_shared_factory(
        policy: GraphPolicy,
        edge_factory: Rc<dyn EdgeFactory<V, E>>,
    ) -> Self {
        Self {
            policy,
            edge_factory,
            edge_set_factory: Rc::new(IndexEdgeSetFactory),
            edges: EdgeMap::default(),
            specifics: Specifics::new(policy.direction()),
        }
    }

    pub fn from_kind(kind: GraphKind, edge_factory: impl EdgeFactory<V, E> + 'static) -> Self {
        Self::new(kind.policy(), edge_factory)
    }

    /// Undirected; no loops, no multiple edges.
    pub fn simple_graph(edge_factory: impl EdgeFactory<V, E> + 'static) -> Self {
        Self::from_kind(GraphKind::SimpleGraph, edge_factory)
    }

    /// Undirected; loops and multiple edges.
    pub fn pseudograph(edge_factory: impl EdgeFactory<V, E> + 'static) -> Self {
        Self::from_kind(GraphKind::Pseudograph, edge_factory)
    }

    /// Directed; no loops, no multiple edges.
    pub fn simple_directed(edge_factory: impl EdgeFactory<V, E> + 'static) -> Self {
        Self::from_kind(GraphKind::SimpleDirectedGraph, edge_factory)
    }

    /// Directed; loops but no multiple edges.
    pub fn default_directed(edge_factory: impl EdgeFactory<V, E> + 'static) -> Self {
        Self::from_kind(GraphKind::DefaultDirectedGraph, edge_factory)
    }

    pub fn default_directed_weighted(edge_factory: impl EdgeFactory<V, E> + 'static) -> Self {
        Self::from_kind(GraphKind::DefaultDirectedWeightedGraph, edge_factory)
    }

    /// Directed; loops and multiple edges.
    pub fn directed_multigraph(edge_factory: impl EdgeFactory<V, E> + 'static) -> Self {
        Self::from_kind(GraphKind::DirectedMultigraph, edge_factory)
    }

    pub fn directed_weighted_multigraph(edge_factory: impl EdgeFactory<V, E> + 'static) -> Self {
        Self::from_kind(GraphKind::DirectedWeightedMultigraph, edge_factory)
    }

    /// Sets the factory for edge sets of vertices added from now on. Existing vertices keep
    /// their containers.
    pub fn set_edge_set_factory(&mut self, factory: impl EdgeSetFactory<V, E> + 'static) {
        self.edge_set_factory = Rc::new(factory);
    }

    /// An independent graph with the same policy, factories, vertices and edges.
    ///
    /// Vertex and edge identities are cloned, not the payloads they refer to.
    pub fn shallow_copy(&self) -> Result<Self> {
        let mut copy = Self::with_shared_factory(self.policy, Rc::clone(&self.edge_factory));
        copy.edge_set_factory = Rc::clone(&self.edge_set_factory);
        graphs::add_graph(&mut copy, self)?;
        // `add_graph` registers fresh default weights.
        for (e, record) in &self.edges {
            if let (EdgeAttr::Weighted { weight }, Some(target)) =
                (record.attr, copy.edges.get_mut(e))
            {
                target.attr = EdgeAttr::Weighted { weight };
            }
        }
        Ok(copy)
    }

    fn assert_vertex_exist(&self, v: &V) -> Result<()> {
        if self.specifics.contains_vertex(v) {
            Ok(())
        } else {
            Err(Error::vertex_not_found(v))
        }
    }

    fn record(&self, e: &E) -> Result<&EdgeRecord<V>> {
        self.edges.get(e).ok_or_else(|| Error::edge_not_found(e))
    }

    fn register_edge(&mut self, e: E, s: &V, t: &V) {
        let attr = if self.policy.weighted {
            EdgeAttr::Weighted {
                weight: DEFAULT_EDGE_WEIGHT,
            }
        } else {
            EdgeAttr::Plain
        };
        let record = EdgeRecord {
            source: s.clone(),
            target: t.clone(),
            attr,
        };
        self.specifics.attach_edge(&e, &record);
        tracing::trace!(edge = ?e, source = ?s, target = ?t, "edge added");
        self.edges.insert(e, record);
    }
}

impl<V: VertexKey, E: EdgeKey> Graph for BaseGraph<V, E> {
    type Vertex = V;
    type Edge = E;

    fn policy(&self) -> GraphPolicy {
        self.policy
    }

    fn edge_factory(&self) -> Rc<dyn EdgeFactory<V, E>> {
        Rc::clone(&self.edge_factory)
    }

    fn vertex_set(&self) -> Set<V> {
        self.specifics.vertex_set()
    }

    fn edge_set(&self) -> Set<E> {
        self.edges.keys().cloned().collect()
    }

    fn vertex_count(&self) -> usize {
        self.specifics.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.specifics.contains_vertex(v)
    }

    fn contains_edge(&self, e: &E) -> bool {
        self.edges.contains_key(e)
    }

    fn edge(&self, s: &V, t: &V) -> Option<E> {
        self.specifics.edge(&self.edges, s, t)
    }

    fn all_edges(&self, s: &V, t: &V) -> Set<E> {
        self.specifics.all_edges(&self.edges, s, t)
    }

    fn edges_of(&self, v: &V) -> Result<Set<E>> {
        self.specifics.edges_of(v)
    }

    fn degree_of(&self, v: &V) -> Result<usize> {
        self.specifics.degree_of(&self.edges, v)
    }

    fn in_degree_of(&self, v: &V) -> Result<usize> {
        self.specifics.in_degree_of(v)
    }

    fn incoming_edges_of(&self, v: &V) -> Result<Set<E>> {
        self.specifics.incoming_edges_of(v)
    }

    fn out_degree_of(&self, v: &V) -> Result<usize> {
        self.specifics.out_degree_of(v)
    }

    fn outgoing_edges_of(&self, v: &V) -> Result<Set<E>> {
        self.specifics.outgoing_edges_of(v)
    }

    fn edge_source(&self, e: &E) -> Result<V> {
        Ok(self.record(e)?.source.clone())
    }

    fn edge_target(&self, e: &E) -> Result<V> {
        Ok(self.record(e)?.target.clone())
    }

    fn edge_weight(&self, e: &E) -> f64 {
        self.edges
            .get(e)
            .map_or(DEFAULT_EDGE_WEIGHT, |record| record.attr.weight())
    }

    fn set_edge_weight(&mut self, e: &E, weight: f64) -> Result<()> {
        let Some(record) = self.edges.get_mut(e) else {
            return Err(Error::edge_not_found(e));
        };
        match &mut record.attr {
            EdgeAttr::Weighted { weight: w } => {
                *w = weight;
                Ok(())
            }
            EdgeAttr::Plain => Err(Error::EdgeNotWeighted {
                edge: format!("{e:?}"),
            }),
        }
    }

    fn add_vertex(&mut self, v: V) -> bool {
        let added = self
            .specifics
            .add_vertex(v.clone(), self.edge_set_factory.as_ref());
        if added {
            tracing::trace!(vertex = ?v, "vertex added");
        }
        added
    }

    fn add_edge(&mut self, s: &V, t: &V) -> Result<Option<E>> {
        self.assert_vertex_exist(s)?;
        self.assert_vertex_exist(t)?;

        if !self.policy.allow_multiple_edges && self.contains_edge_between(s, t) {
            tracing::debug!(source = ?s, target = ?t, "edge rejected: vertices already connected");
            return Ok(None);
        }
        if !self.policy.allow_loops && s == t {
            tracing::debug!(vertex = ?s, "edge rejected: loops not allowed");
            return Err(Error::LoopsNotAllowed {
                vertex: format!("{s:?}"),
            });
        }

        let e = self.edge_factory.create_edge(s, t);
        if self.contains_edge(&e) {
            tracing::debug!(edge = ?e, "edge rejected: identity already registered");
            return Ok(None);
        }
        self.register_edge(e.clone(), s, t);
        Ok(Some(e))
    }

    fn add_edge_with(&mut self, s: &V, t: &V, e: E) -> Result<bool> {
        if self.contains_edge(&e) {
            return Ok(false);
        }
        self.assert_vertex_exist(s)?;
        self.assert_vertex_exist(t)?;

        if !self.policy.allow_multiple_edges && self.contains_edge_between(s, t) {
            tracing::debug!(edge = ?e, "edge rejected: vertices already connected");
            return Ok(false);
        }
        if !self.policy.allow_loops && s == t {
            tracing::debug!(edge = ?e, vertex = ?s, "edge rejected: loops not allowed");
            return Err(Error::LoopsNotAllowed {
                vertex: format!("{s:?}"),
            });
        }

        self.register_edge(e, s, t);
        Ok(true)
    }

    fn remove_edge_between(&mut self, s: &V, t: &V) -> Option<E> {
        let e = self.edge(s, t)?;
        self.remove_edge(&e);
        Some(e)
    }

    fn remove_edge(&mut self, e: &E) -> bool {
        let Some(record) = self.edges.shift_remove(e) else {
            return false;
        };
        self.specifics.detach_edge(e, &record);
        tracing::trace!(edge = ?e, "edge removed");
        true
    }

    fn remove_vertex(&mut self, v: &V) -> bool {
        // Snapshot first: removal mutates the containers being enumerated.
        let Ok(touching) = self.specifics.edges_of(v) else {
            return false;
        };
        for e in &touching {
            self.remove_edge(e);
        }
        self.specifics.remove_vertex(v);
        tracing::debug!(vertex = ?v, removed_edges = touching.len(), "vertex removed");
        true
    }
}

impl<V: VertexKey, E: EdgeKey> fmt::Display for BaseGraph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_graph(self, f)
    }
}

impl<V: VertexKey, E: EdgeKey> fmt::Debug for BaseGraph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseGraph")
            .field("policy", &self.policy)
            .field("edges", &self.edges)
            .field("specifics", &self.specifics)
            .finish_non_exhaustive()
    }
}
