//! Helpers written purely against the [`Graph`] contract.

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::path::GraphPath;
use crate::policy::Direction;
use crate::view::{AsUndirectedGraph, GraphDelegator, SharedGraph};

/// Creates an edge with the graph's factory, registers it and assigns `weight`.
///
/// The graph must be weighted.
pub fn add_weighted_edge<G>(
    g: &mut G,
    s: &G::Vertex,
    t: &G::Vertex,
    weight: f64,
) -> Result<Option<G::Edge>>
where
    G: Graph + ?Sized,
{
    if !g.is_weighted() {
        return Err(Error::EdgeNotWeighted {
            edge: format!("{s:?} -> {t:?}"),
        });
    }
    let e = g.edge_factory().create_edge(s, t);
    if !g.add_edge_with(s, t, e.clone())? {
        return Ok(None);
    }
    g.set_edge_weight(&e, weight)?;
    Ok(Some(e))
}

/// Adds `s` and `t` if missing, then an edge between them.
pub fn add_edge_with_vertices<G>(
    g: &mut G,
    s: G::Vertex,
    t: G::Vertex,
) -> Result<Option<G::Edge>>
where
    G: Graph + ?Sized,
{
    g.add_vertex(s.clone());
    g.add_vertex(t.clone());
    g.add_edge(&s, &t)
}

pub fn add_weighted_edge_with_vertices<G>(
    g: &mut G,
    s: G::Vertex,
    t: G::Vertex,
    weight: f64,
) -> Result<Option<G::Edge>>
where
    G: Graph + ?Sized,
{
    g.add_vertex(s.clone());
    g.add_vertex(t.clone());
    add_weighted_edge(g, &s, &t, weight)
}

/// Copies `edge` of `source` and its endpoints into `target`.
pub fn add_edge_from<D, S>(target: &mut D, source: &S, edge: &S::Edge) -> Result<bool>
where
    D: Graph<Vertex = S::Vertex, Edge = S::Edge> + ?Sized,
    S: Graph + ?Sized,
{
    let s = source.edge_source(edge)?;
    let t = source.edge_target(edge)?;
    target.add_vertex(s.clone());
    target.add_vertex(t.clone());
    target.add_edge_with(&s, &t, edge.clone())
}

/// Adds every vertex and then every edge of `source` to `destination`.
///
/// Returns whether `destination` changed.
pub fn add_graph<D, S>(destination: &mut D, source: &S) -> Result<bool>
where
    D: Graph<Vertex = S::Vertex, Edge = S::Edge> + ?Sized,
    S: Graph + ?Sized,
{
    let mut modified = add_all_vertices(destination, source.vertex_set());
    modified |= add_all_edges(destination, source, source.edge_set())?;
    Ok(modified)
}

/// Like [`add_graph`], but each edge is recreated from target to source with the
/// destination's edge factory. Both graphs must be directed.
pub fn add_graph_reversed<D, S>(destination: &mut D, source: &S) -> Result<()>
where
    D: Graph<Vertex = S::Vertex, Edge = S::Edge> + ?Sized,
    S: Graph + ?Sized,
{
    for directed in [source.is_directed(), destination.is_directed()] {
        if !directed {
            return Err(Error::WrongMode {
                operation: "add_graph_reversed",
                mode: Direction::Undirected,
            });
        }
    }

    add_all_vertices(destination, source.vertex_set());
    for e in source.edge_set() {
        let s = source.edge_source(&e)?;
        let t = source.edge_target(&e)?;
        destination.add_edge(&t, &s)?;
    }
    Ok(())
}

/// Adds each edge of `source` listed in `edges`, registering endpoints as needed.
pub fn add_all_edges<D, S, I>(destination: &mut D, source: &S, edges: I) -> Result<bool>
where
    D: Graph<Vertex = S::Vertex, Edge = S::Edge> + ?Sized,
    S: Graph + ?Sized,
    I: IntoIterator<Item = S::Edge>,
{
    let mut modified = false;
    for e in edges {
        modified |= add_edge_from(destination, source, &e)?;
    }
    Ok(modified)
}

pub fn add_all_vertices<G, I>(destination: &mut G, vertices: I) -> bool
where
    G: Graph + ?Sized,
    I: IntoIterator<Item = G::Vertex>,
{
    let mut modified = false;
    for v in vertices {
        modified |= destination.add_vertex(v);
    }
    modified
}

/// The vertex at the other end of each edge touching `v`.
pub fn neighbor_list_of<G>(g: &G, v: &G::Vertex) -> Result<Vec<G::Vertex>>
where
    G: Graph + ?Sized,
{
    g.edges_of(v)?
        .iter()
        .map(|e| opposite_vertex(g, e, v))
        .collect()
}

pub fn predecessor_list_of<G>(g: &G, v: &G::Vertex) -> Result<Vec<G::Vertex>>
where
    G: Graph + ?Sized,
{
    g.incoming_edges_of(v)?
        .iter()
        .map(|e| opposite_vertex(g, e, v))
        .collect()
}

pub fn successor_list_of<G>(g: &G, v: &G::Vertex) -> Result<Vec<G::Vertex>>
where
    G: Graph + ?Sized,
{
    g.outgoing_edges_of(v)?
        .iter()
        .map(|e| opposite_vertex(g, e, v))
        .collect()
}

/// An undirected view of `g`: a projection for directed graphs, a plain delegator otherwise.
pub fn undirected_graph<G>(g: SharedGraph<G>) -> Box<dyn Graph<Vertex = G::Vertex, Edge = G::Edge>>
where
    G: Graph + 'static,
{
    let directed = g.borrow().is_directed();
    if directed {
        Box::new(AsUndirectedGraph::new_unchecked(g))
    } else {
        Box::new(GraphDelegator::new(g))
    }
}

/// Whether `v` is an endpoint of `e`.
pub fn test_incidence<G>(g: &G, e: &G::Edge, v: &G::Vertex) -> Result<bool>
where
    G: Graph + ?Sized,
{
    Ok(g.edge_source(e)? == *v || g.edge_target(e)? == *v)
}

pub fn opposite_vertex<G>(g: &G, e: &G::Edge, v: &G::Vertex) -> Result<G::Vertex>
where
    G: Graph + ?Sized,
{
    let source = g.edge_source(e)?;
    let target = g.edge_target(e)?;
    if *v == source {
        Ok(target)
    } else if *v == target {
        Ok(source)
    } else {
        Err(Error::NotIncident {
            vertex: format!("{v:?}"),
            edge: format!("{e:?}"),
        })
    }
}

/// Vertices visited by `path`, starting with its start vertex.
pub fn path_vertex_list<P>(path: &P) -> Result<Vec<<P::G as Graph>::Vertex>>
where
    P: GraphPath + ?Sized,
{
    let g = path.graph();
    let mut v = path.start_vertex().clone();
    let mut vertices = Vec::with_capacity(path.edge_list().len() + 1);
    vertices.push(v.clone());
    for e in path.edge_list() {
        v = opposite_vertex(g, e, &v)?;
        vertices.push(v.clone());
    }
    Ok(vertices)
}
