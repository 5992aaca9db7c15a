//! Trait definitions for graph abstractions.
//!
//! The structural algorithms (traversal, connectivity, strongly connected components,
//! topological ordering) are written against these traits instead of the concrete
//! [`crate::Graph`] type, so they only see the adjacency they actually need.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Core properties: node count, handle bound and node iteration
//! - [`Successors`] - Forward traversal (sinks of outgoing edges)
//! - [`Predecessors`] - Backward traversal (sources of incoming edges)
//! - [`Neighbors`] - Traversal that ignores edge direction
//!
//! For an undirected graph all three adjacency traits describe the same relation:
//! the opposite endpoint of every incident edge.

use crate::graph::node::NodeId;

/// Base trait providing core graph properties.
///
/// Node handles are arena slots and removed slots are never reused, so the live
/// handles of a graph are not necessarily contiguous. Algorithms that keep per-node
/// state in a vector size it with [`GraphBase::node_bound`] and index it with
/// [`NodeId::index`].
///
/// # Examples
///
/// ```rust
/// use nodegraph::{Graph, GraphBase};
///
/// let mut graph: Graph<&str, ()> = Graph::new();
/// let a = graph.add_node("A");
/// graph.add_node("B");
/// graph.remove_node(a);
///
/// assert_eq!(GraphBase::node_count(&graph), 1);
/// assert_eq!(graph.node_bound(), 2);
/// ```
pub trait GraphBase {
    /// Returns the number of live nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an upper bound (exclusive) for the index of every node handle.
    fn node_bound(&self) -> usize;

    /// Returns an iterator over all live node handles, in insertion order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;

    /// Returns `true` if `node` refers to a live node.
    fn contains_node(&self, node: NodeId) -> bool;
}

/// Trait for graphs that support forward edge traversal.
///
/// # Examples
///
/// ```rust
/// use nodegraph::{Graph, NodeId, Successors};
///
/// let mut graph: Graph<&str, ()> = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
///
/// graph.add_edge(a, b)?;
/// graph.add_edge(a, c)?;
///
/// let successors: Vec<NodeId> = Successors::successors(&graph, a).collect();
/// assert_eq!(successors, vec![b, c]);
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor nodes of the given node.
    ///
    /// For a directed edge `(u, v)`, node `v` is a successor of `u`. Parallel edges
    /// yield the successor once per edge. A handle that is not live yields nothing.
    ///
    /// # Arguments
    ///
    /// * `node` - The node whose successors to iterate
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the predecessor nodes of the given node.
    ///
    /// For a directed edge `(u, v)`, node `u` is a predecessor of `v`.
    ///
    /// # Arguments
    ///
    /// * `node` - The node whose predecessors to iterate
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that can be walked without regard to edge direction.
///
/// Connectivity (weak components, splitting, tree flow) is defined over this
/// relation.
pub trait Neighbors: GraphBase {
    /// Returns the opposite endpoint of every edge incident to `node`.
    ///
    /// A self-loop yields `node` itself.
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}
