//! Edge handle and edge storage for the multigraph.
//!
//! This module provides the [`EdgeId`] type, a strongly-typed handle for an edge slot
//! within a [`crate::Graph`], and [`Edge`], the data stored in that slot.

use std::fmt;

use crate::graph::{layout::Point, node::NodeId};

/// A strongly-typed handle for an edge within a graph.
///
/// `EdgeId` wraps a `usize` arena slot, providing type safety to prevent
/// accidental mixing of edge handles with node handles or identifiers.
/// Edge handles are assigned sequentially starting from 0 when edges are added to a graph.
///
/// # Examples
///
/// ```rust
/// use nodegraph::{EdgeId, Graph};
///
/// let mut graph: Graph<&str, &str> = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let edge: EdgeId = graph.add_edge(a, b)?;
///
/// assert_eq!(graph.edge_endpoints(edge), Some((a, b)));
/// # Ok::<(), nodegraph::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw slot index.
    ///
    /// This constructor is primarily intended for internal use and testing.
    /// Normal usage should obtain `EdgeId` values from [`crate::Graph::add_edge`].
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw slot index of this handle.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

/// A connection between two nodes of a [`crate::Graph`].
///
/// Endpoints can only change through [`crate::Graph::reverse_edge`], which keeps the
/// adjacency views of both nodes consistent. Weight, identifier, payload and the
/// layout fields (point list, segment index) are freely editable through
/// [`crate::Graph::edge_mut`].
#[derive(Debug, Clone)]
pub struct Edge<E> {
    pub(crate) identifier: i64,
    pub(crate) source: NodeId,
    pub(crate) sink: NodeId,
    pub(crate) weight: f64,
    pub(crate) reversed: bool,
    pub(crate) segment_index: usize,
    pub(crate) points: Vec<Point>,
    pub(crate) payload: E,
}

impl<E> Edge<E> {
    pub(crate) fn new(identifier: i64, source: NodeId, sink: NodeId, weight: f64, payload: E) -> Self {
        Edge {
            identifier,
            source,
            sink,
            weight,
            reversed: false,
            segment_index: 0,
            points: Vec::new(),
            payload,
        }
    }

    /// Returns the caller-visible identifier of this edge.
    #[must_use]
    pub fn identifier(&self) -> i64 {
        self.identifier
    }

    /// Replaces the identifier of this edge.
    pub fn set_identifier(&mut self, identifier: i64) {
        self.identifier = identifier;
    }

    /// The node this edge starts at.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The node this edge ends at.
    #[must_use]
    pub fn sink(&self) -> NodeId {
        self.sink
    }

    /// Returns `(source, sink)`.
    #[must_use]
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.source, self.sink)
    }

    /// Given one endpoint, returns the other one.
    ///
    /// Returns `None` if `node` is not an endpoint of this edge. For a self-loop the
    /// node itself is returned.
    #[must_use]
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if node == self.source {
            Some(self.sink)
        } else if node == self.sink {
            Some(self.source)
        } else {
            None
        }
    }

    /// Returns `true` if both endpoints are the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.sink
    }

    /// The numeric weight of this edge.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Replaces the weight of this edge.
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Returns `true` if the edge has been flipped an odd number of times.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Layout segment index. Never read by the algorithms.
    #[must_use]
    pub fn segment_index(&self) -> usize {
        self.segment_index
    }

    /// Sets the layout segment index.
    pub fn set_segment_index(&mut self, index: usize) {
        self.segment_index = index;
    }

    /// Layout point list. Never read by the algorithms.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Replaces the layout point list.
    pub fn set_points(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    /// Returns the edge payload.
    #[must_use]
    pub fn payload(&self) -> &E {
        &self.payload
    }

    /// Returns the edge payload mutably.
    pub fn payload_mut(&mut self) -> &mut E {
        &mut self.payload
    }

    pub(crate) fn flip(&mut self) {
        std::mem::swap(&mut self.source, &mut self.sink);
        self.reversed = !self.reversed;
    }

    /// Copies the edge onto new endpoints, keeping weight, flags, layout and payload.
    pub(crate) fn remapped(&self, source: NodeId, sink: NodeId) -> Self
    where
        E: Clone,
    {
        Edge {
            identifier: self.identifier,
            source,
            sink,
            weight: self.weight,
            reversed: self.reversed,
            segment_index: self.segment_index,
            points: self.points.clone(),
            payload: self.payload.clone(),
        }
    }
}
