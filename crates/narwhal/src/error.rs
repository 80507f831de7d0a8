//! Error types shared by graph containers, views and utilities.

use crate::policy::Direction;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: unknown vertex or edge, a disallowed loop, an edge lacking a weight,
    /// an empty walk.
    InvalidArgument,
    /// A query that the graph's direction mode does not support.
    WrongMode,
    /// An operation a view refuses to perform.
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no such vertex in graph: {vertex}")]
    VertexNotFound { vertex: String },

    #[error("no such edge in graph: {edge}")]
    EdgeNotFound { edge: String },

    #[error("loops not allowed: {vertex}")]
    LoopsNotAllowed { vertex: String },

    #[error("edge does not carry a weight: {edge}")]
    EdgeNotWeighted { edge: String },

    #[error("vertex {vertex} is not incident to edge {edge}")]
    NotIncident { vertex: String, edge: String },

    #[error("a walk needs at least one vertex")]
    EmptyWalk,

    #[error("no such operation in {mode} graph: {operation}")]
    WrongMode {
        operation: &'static str,
        mode: Direction,
    },

    #[error("{operation}: {reason}")]
    Unsupported {
        operation: &'static str,
        reason: &'static str,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::VertexNotFound { .. }
            | Error::EdgeNotFound { .. }
            | Error::LoopsNotAllowed { .. }
            | Error::EdgeNotWeighted { .. }
            | Error::NotIncident { .. }
            | Error::EmptyWalk => ErrorKind::InvalidArgument,
            Error::WrongMode { .. } => ErrorKind::WrongMode,
            Error::Unsupported { .. } => ErrorKind::Unsupported,
        }
    }

    pub(crate) fn vertex_not_found(vertex: &impl std::fmt::Debug) -> Self {
        Error::VertexNotFound {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn edge_not_found(edge: &impl std::fmt::Debug) -> Self {
        Error::EdgeNotFound {
            edge: format!("{edge:?}"),
        }
    }
}
