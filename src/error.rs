use thiserror::Error;

/// Builds an [`Error::NotMember`] with a formatted message.
macro_rules! not_member {
    ($msg:expr) => {
        crate::Error::NotMember($msg.to_string())
    };

    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::NotMember(format!($fmt, $($arg)*))
    };
}

/// Builds an [`Error::GraphError`] with a formatted message.
macro_rules! graph_error {
    ($msg:expr) => {
        crate::Error::GraphError($msg.to_string())
    };

    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::GraphError(format!($fmt, $($arg)*))
    };
}

/// Builds an [`Error::InvalidArgument`] with a formatted message.
macro_rules! invalid_argument {
    ($msg:expr) => {
        crate::Error::InvalidArgument($msg.to_string())
    };

    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidArgument(format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The graph engine separates caller misuse from violated graph invariants. Valid negative
/// results (no path between two nodes, no cycle, a lookup miss) are never errors; they are
/// reported through `Option::None` by the respective operation.
///
/// # Error Categories
///
/// ## Caller Misuse
/// - [`Error::InvalidArgument`] - A required handle or value is absent, stale or malformed
///
/// ## Domain Errors
/// - [`Error::NotMember`] - A node or edge that must belong to the graph does not
/// - [`Error::NotAcyclic`] - An operation that needs an acyclic graph received a cyclic one
/// - [`Error::GraphError`] - Any other violated graph invariant
///
/// Every failing mutation returns before touching the graph, so an `Err` always leaves
/// the graph exactly as it was.
///
/// # Examples
///
/// ```rust
/// use nodegraph::{Error, Graph, NodeId};
///
/// let mut graph: Graph<(), ()> = Graph::new();
/// let a = graph.add_node(());
///
/// match graph.add_edge(a, NodeId::new(42)) {
///     Ok(_) => unreachable!(),
///     Err(Error::InvalidArgument(message)) => assert!(message.contains("sink")),
///     Err(other) => panic!("unexpected error: {other}"),
/// }
/// assert_eq!(graph.edge_count(), 0);
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A required argument was absent or does not refer to a live element.
    ///
    /// Raised synchronously before any mutation happens, typically when a stale
    /// or foreign [`crate::NodeId`] / [`crate::EdgeId`] is handed to a mutation,
    /// or when an input value is outside the accepted domain (for example a
    /// negative edge weight passed to a shortest path search).
    #[error("Invalid argument - {0}")]
    InvalidArgument(String),

    /// A node or edge that the operation requires to be part of the graph is not.
    ///
    /// This is a domain error: the argument itself is well formed, but the graph
    /// does not contain it (e.g. a tree-flow root that belongs to another graph).
    #[error("Not a member of the graph - {0}")]
    NotMember(String),

    /// The operation requires an acyclic graph.
    ///
    /// Returned when a tree flow is forced on a graph that contains a cycle.
    #[error("The graph contains a cycle")]
    NotAcyclic,

    /// The arenas violate a structural invariant.
    ///
    /// Reported by [`crate::Graph::validate`], e.g. when an edge is missing from the
    /// adjacency of one of its endpoints or joins a removed node.
    #[error("{0}")]
    GraphError(String),
}

impl Error {
    /// Returns `true` for errors describing a violated graph invariant rather than
    /// caller misuse.
    #[must_use]
    pub fn is_domain_error(&self) -> bool {
        !matches!(self, Error::InvalidArgument(_))
    }
}
