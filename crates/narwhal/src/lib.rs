#![forbid(unsafe_code)]

//! Mutable graph containers over caller-supplied vertex and edge identities.
//!
//! A [`BaseGraph`] is directed or undirected, and may allow loops, multiple edges between
//! the same vertices, and edge weights; all of this is fixed at construction by a
//! [`GraphPolicy`] (see [`GraphKind`] for the named presets). Algorithms consume the
//! [`Graph`] trait, which views in [`view`] implement as well: [`GraphDelegator`] forwards to
//! a shared backing graph and [`AsUndirectedGraph`] presents a directed graph as undirected.
//!
//! ```
//! use narwhal::{BaseGraph, EdgeId, Graph, IdEdgeFactory};
//!
//! let mut g: BaseGraph<u32, EdgeId> = BaseGraph::default_directed(IdEdgeFactory::new());
//! g.add_vertex(1);
//! g.add_vertex(2);
//! let e = g.add_edge(&1, &2).unwrap().unwrap();
//! assert_eq!(g.edge_source(&e).unwrap(), 1);
//! assert_eq!(g.out_degree_of(&1).unwrap(), 1);
//! ```

pub mod edge;
pub mod edge_set;
pub mod error;
pub mod factory;
pub mod graph;
pub mod graphs;
pub mod path;
pub mod policy;
pub mod view;

pub use edge::{DEFAULT_EDGE_WEIGHT, EdgeAttr, EdgeId, EdgeKey, EdgeRecord, VertexId, VertexKey};
pub use edge_set::{ArrayEdgeSet, EdgeSet, IndexEdgeSet, Set};
pub use error::{Error, ErrorKind, Result};
pub use factory::{
    ArrayEdgeSetFactory, EdgeFactory, EdgeSetFactory, IdEdgeFactory, IdVertexFactory,
    IndexEdgeSetFactory, VertexFactory,
};
pub use graph::{BaseGraph, Graph};
pub use path::{GraphPath, GraphWalk};
pub use policy::{Direction, GraphKind, GraphPolicy};
pub use view::{AsUndirectedGraph, GraphDelegator, SharedGraph, shared};
