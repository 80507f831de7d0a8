//! Adjacency-indexing strategies.
//!
//! A graph picks exactly one strategy at construction: directed graphs keep separate
//! incoming/outgoing edge sets per vertex, undirected graphs a single incident set. Both
//! answer the same queries; the ones a strategy cannot answer fail with
//! [`Error::WrongMode`].
//!
//! Edge endpoints live in the graph's edge map, which is passed in where a query has to
//! look at them.

use super::entries::{DirectedEdgeContainer, UndirectedEdgeContainer};
use crate::edge::{EdgeKey, EdgeRecord, VertexKey};
use crate::edge_set::Set;
use crate::error::{Error, Result};
use crate::factory::EdgeSetFactory;
use crate::policy::Direction;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

pub(in crate::graph) type EdgeMap<V, E> = IndexMap<E, EdgeRecord<V>, FxBuildHasher>;

type VertexMap<V, C> = IndexMap<V, C, FxBuildHasher>;

#[derive(Debug)]
pub(in crate::graph) enum Specifics<V, E> {
    Directed(DirectedSpecifics<V, E>),
    Undirected(UndirectedSpecifics<V, E>),
}

#[derive(Debug)]
pub(in crate::graph) struct DirectedSpecifics<V, E> {
    vertices: VertexMap<V, DirectedEdgeContainer<E>>,
}

#[derive(Debug)]
pub(in crate::graph) struct UndirectedSpecifics<V, E> {
    vertices: VertexMap<V, UndirectedEdgeContainer<E>>,
}

fn wrong_mode(operation: &'static str, mode: Direction) -> Error {
    Error::WrongMode { operation, mode }
}

impl<V: VertexKey, E: EdgeKey> Specifics<V, E> {
    pub(in crate::graph) fn new(direction: Direction) -> Self {
        match direction {
            Direction::Directed => Specifics::Directed(DirectedSpecifics {
                vertices: VertexMap::default(),
            }),
            Direction::Undirected => Specifics::Undirected(UndirectedSpecifics {
                vertices: VertexMap::default(),
            }),
        }
    }

    /// Registers `v` with a fresh edge container. Returns `false` if `v` was already present.
    pub(in crate::graph) fn add_vertex(
        &mut self,
        v: V,
        factory: &dyn EdgeSetFactory<V, E>,
    ) -> bool {
        match self {
            Specifics::Directed(d) => {
                if d.vertices.contains_key(&v) {
                    return false;
                }
                let container = DirectedEdgeContainer::new(factory, &v);
                d.vertices.insert(v, container);
            }
            Specifics::Undirected(u) => {
                if u.vertices.contains_key(&v) {
                    return false;
                }
                let container = UndirectedEdgeContainer::new(factory, &v);
                u.vertices.insert(v, container);
            }
        }
        true
    }

    /// Drops `v` and its container. Callers detach every touching edge first.
    pub(in crate::graph) fn remove_vertex(&mut self, v: &V) -> bool {
        match self {
            Specifics::Directed(d) => d.vertices.shift_remove(v).is_some(),
            Specifics::Undirected(u) => u.vertices.shift_remove(v).is_some(),
        }
    }

    pub(in crate::graph) fn contains_vertex(&self, v: &V) -> bool {
        match self {
            Specifics::Directed(d) => d.vertices.contains_key(v),
            Specifics::Undirected(u) => u.vertices.contains_key(v),
        }
    }

    pub(in crate::graph) fn vertex_count(&self) -> usize {
        match self {
            Specifics::Directed(d) => d.vertices.len(),
            Specifics::Undirected(u) => u.vertices.len(),
        }
    }

    pub(in crate::graph) fn vertex_set(&self) -> Set<V> {
        match self {
            Specifics::Directed(d) => d.vertices.keys().cloned().collect(),
            Specifics::Undirected(u) => u.vertices.keys().cloned().collect(),
        }
    }

    pub(in crate::graph) fn all_edges(&self, edges: &EdgeMap<V, E>, s: &V, t: &V) -> Set<E> {
        match self {
            Specifics::Directed(d) => d.matching(edges, s, t).cloned().collect(),
            Specifics::Undirected(u) => u.matching(edges, s, t).cloned().collect(),
        }
    }

    pub(in crate::graph) fn edge(&self, edges: &EdgeMap<V, E>, s: &V, t: &V) -> Option<E> {
        match self {
            Specifics::Directed(d) => d.matching(edges, s, t).next().cloned(),
            Specifics::Undirected(u) => u.matching(edges, s, t).next().cloned(),
        }
    }

    /// Inserts `e` into the containers of both endpoints.
    pub(in crate::graph) fn attach_edge(&mut self, e: &E, record: &EdgeRecord<V>) {
        match self {
            Specifics::Directed(d) => {
                if let Some(ec) = d.vertices.get_mut(&record.source) {
                    ec.outgoing.insert(e.clone());
                } else {
                    debug_assert!(false, "attach_edge: source vertex missing");
                }
                if let Some(ec) = d.vertices.get_mut(&record.target) {
                    ec.incoming.insert(e.clone());
                } else {
                    debug_assert!(false, "attach_edge: target vertex missing");
                }
            }
            Specifics::Undirected(u) => {
                if let Some(ec) = u.vertices.get_mut(&record.source) {
                    ec.incident.insert(e.clone());
                } else {
                    debug_assert!(false, "attach_edge: source vertex missing");
                }
                if record.is_loop() {
                    return;
                }
                if let Some(ec) = u.vertices.get_mut(&record.target) {
                    ec.incident.insert(e.clone());
                } else {
                    debug_assert!(false, "attach_edge: target vertex missing");
                }
            }
        }
    }

    pub(in crate::graph) fn detach_edge(&mut self, e: &E, record: &EdgeRecord<V>) {
        match self {
            Specifics::Directed(d) => {
                if let Some(ec) = d.vertices.get_mut(&record.source) {
                    ec.outgoing.remove(e);
                }
                if let Some(ec) = d.vertices.get_mut(&record.target) {
                    ec.incoming.remove(e);
                }
            }
            Specifics::Undirected(u) => {
                if let Some(ec) = u.vertices.get_mut(&record.source) {
                    ec.incident.remove(e);
                }
                if let Some(ec) = u.vertices.get_mut(&record.target) {
                    ec.incident.remove(e);
                }
            }
        }
    }

    pub(in crate::graph) fn degree_of(&self, edges: &EdgeMap<V, E>, v: &V) -> Result<usize> {
        match self {
            Specifics::Directed(_) => Err(wrong_mode("degree_of", Direction::Directed)),
            Specifics::Undirected(u) => {
                let ec = u.container(v)?;
                let degree = ec
                    .incident
                    .iter()
                    .map(|e| match edges.get(e) {
                        Some(record) if record.is_loop() => 2,
                        _ => 1,
                    })
                    .sum();
                Ok(degree)
            }
        }
    }

    pub(in crate::graph) fn edges_of(&self, v: &V) -> Result<Set<E>> {
        match self {
            Specifics::Directed(d) => {
                let ec = d.container(v)?;
                // A loop sits in both sets; the union keeps one copy.
                let mut in_and_out = ec.incoming_snapshot();
                in_and_out.extend(ec.outgoing.iter().cloned());
                Ok(in_and_out)
            }
            Specifics::Undirected(u) => Ok(u.container(v)?.snapshot()),
        }
    }

    pub(in crate::graph) fn in_degree_of(&self, v: &V) -> Result<usize> {
        match self {
            Specifics::Directed(d) => Ok(d.container(v)?.incoming.len()),
            Specifics::Undirected(_) => Err(wrong_mode("in_degree_of", Direction::Undirected)),
        }
    }

    pub(in crate::graph) fn incoming_edges_of(&self, v: &V) -> Result<Set<E>> {
        match self {
            Specifics::Directed(d) => Ok(d.container(v)?.incoming_snapshot()),
            Specifics::Undirected(_) => {
                Err(wrong_mode("incoming_edges_of", Direction::Undirected))
            }
        }
    }

    pub(in crate::graph) fn out_degree_of(&self, v: &V) -> Result<usize> {
        match self {
            Specifics::Directed(d) => Ok(d.container(v)?.outgoing.len()),
            Specifics::Undirected(_) => Err(wrong_mode("out_degree_of", Direction::Undirected)),
        }
    }

    pub(in crate::graph) fn outgoing_edges_of(&self, v: &V) -> Result<Set<E>> {
        match self {
            Specifics::Directed(d) => Ok(d.container(v)?.outgoing_snapshot()),
            Specifics::Undirected(_) => {
                Err(wrong_mode("outgoing_edges_of", Direction::Undirected))
            }
        }
    }
}

impl<V: VertexKey, E: EdgeKey> DirectedSpecifics<V, E> {
    fn container(&self, v: &V) -> Result<&DirectedEdgeContainer<E>> {
        self.vertices.get(v).ok_or_else(|| Error::vertex_not_found(v))
    }

    /// Outgoing edges of `s` whose target is `t`.
    fn matching<'a>(
        &'a self,
        edges: &'a EdgeMap<V, E>,
        s: &'a V,
        t: &'a V,
    ) -> impl Iterator<Item = &'a E> + 'a {
        let source = self.vertices.get(s).filter(|_| self.vertices.contains_key(t));
        source
            .into_iter()
            .flat_map(|ec| ec.outgoing.iter())
            .filter(move |e| edges.get(*e).is_some_and(|r| r.target == *t))
    }
}

impl<V: VertexKey, E: EdgeKey> UndirectedSpecifics<V, E> {
    fn container(&self, v: &V) -> Result<&UndirectedEdgeContainer<E>> {
        self.vertices.get(v).ok_or_else(|| Error::vertex_not_found(v))
    }

    /// Incident edges of `s` connecting it to `t` in either orientation.
    fn matching<'a>(
        &'a self,
        edges: &'a EdgeMap<V, E>,
        s: &'a V,
        t: &'a V,
    ) -> impl Iterator<Item = &'a E> + 'a {
        let source = self.vertices.get(s).filter(|_| self.vertices.contains_key(t));
        source
            .into_iter()
            .flat_map(|ec| ec.incident.iter())
            .filter(move |e| edges.get(*e).is_some_and(|r| r.connects(s, t)))
    }
}
