//! Node handle and node storage for the multigraph.
//!
//! This module provides the [`NodeId`] type, a strongly-typed handle for a node slot
//! inside a [`crate::Graph`] arena, and [`Node`], the data stored in that slot: the
//! caller-visible identifier, the adjacency views and the opaque payload.
//!
//! A handle is not the same thing as an identifier. Handles are assigned by the graph,
//! are never reused after removal and are only meaningful for the graph that issued
//! them. Identifiers are plain integers chosen by the caller (or derived from
//! insertion order) and may temporarily collide.

use std::fmt;

use strum::{Display, EnumCount, EnumIter};

use crate::graph::{edge::EdgeId, layout::Rect};

/// A strongly-typed handle for a node within a graph.
///
/// `NodeId` wraps a `usize` arena slot, providing type safety to prevent
/// accidental mixing of node handles with edge handles or identifiers. Handles are
/// assigned sequentially starting from 0 when nodes are added to a graph.
///
/// # Examples
///
/// ```rust
/// use nodegraph::{Graph, NodeId};
///
/// let mut graph: Graph<&str, ()> = Graph::new();
/// let node_a: NodeId = graph.add_node("A");
/// let node_b: NodeId = graph.add_node("B");
///
/// assert_ne!(node_a, node_b);
/// assert_eq!(node_a.index(), 0);
/// ```
///
/// # Thread Safety
///
/// `NodeId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw slot index.
    ///
    /// This constructor is primarily intended for internal use and testing.
    /// Normal usage should obtain `NodeId` values from [`crate::Graph::add_node`].
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw slot index of this handle.
    ///
    /// The index can be used to index into vectors sized by
    /// [`crate::graph::GraphBase::node_bound`].
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

/// Selects one of the three adjacency views every node carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum Direction {
    /// Edges whose sink is the node
    Incoming,
    /// Edges whose source is the node
    Outgoing,
    /// Every edge touching the node
    All,
}

/// A vertex stored in a [`crate::Graph`].
///
/// The adjacency views are maintained exclusively by the owning graph; they can be
/// read through [`Node::view`], [`Node::incoming`], [`Node::outgoing`] and
/// [`Node::links`], but only graph mutations change them. When the node belongs to
/// an undirected graph, the incoming and outgoing views both alias the full link
/// list.
///
/// The layout rectangle is owned by a rendering collaborator. The graph stores it
/// and hands it back unchanged.
#[derive(Debug, Clone)]
pub struct Node<N> {
    pub(crate) identifier: i64,
    pub(crate) directed: bool,
    pub(crate) adjacency: [Vec<EdgeId>; <Direction as EnumCount>::COUNT],
    pub(crate) root: bool,
    pub(crate) bounds: Option<Rect>,
    pub(crate) payload: N,
}

impl<N> Node<N> {
    pub(crate) fn new(identifier: i64, directed: bool, payload: N) -> Self {
        Node {
            identifier,
            directed,
            adjacency: Default::default(),
            root: false,
            bounds: None,
            payload,
        }
    }

    /// Returns the caller-visible identifier of this node.
    #[must_use]
    pub fn identifier(&self) -> i64 {
        self.identifier
    }

    /// Replaces the identifier of this node.
    ///
    /// Identifiers are not checked for uniqueness here; see
    /// [`crate::Graph::ensure_unique_identifiers`].
    pub fn set_identifier(&mut self, identifier: i64) {
        self.identifier = identifier;
    }

    /// Returns `true` if the owning graph is directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the requested adjacency view.
    ///
    /// In undirected mode, [`Direction::Incoming`] and [`Direction::Outgoing`] resolve
    /// to the same list as [`Direction::All`].
    #[must_use]
    pub fn view(&self, direction: Direction) -> &[EdgeId] {
        let direction = if self.directed {
            direction
        } else {
            Direction::All
        };
        &self.adjacency[direction as usize]
    }

    /// Edges arriving at this node.
    #[must_use]
    pub fn incoming(&self) -> &[EdgeId] {
        self.view(Direction::Incoming)
    }

    /// Edges leaving this node.
    #[must_use]
    pub fn outgoing(&self) -> &[EdgeId] {
        self.view(Direction::Outgoing)
    }

    /// Every edge touching this node, in attachment order.
    #[must_use]
    pub fn links(&self) -> &[EdgeId] {
        self.view(Direction::All)
    }

    /// Total number of incident edges. A self-loop counts once.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.links().len()
    }

    /// Returns `true` if this node was marked as the root of a tree.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.root
    }

    /// Sets or clears the root marker.
    pub fn set_root(&mut self, root: bool) {
        self.root = root;
    }

    /// Returns the opaque layout rectangle, if one was attached.
    #[must_use]
    pub fn bounds(&self) -> Option<&Rect> {
        self.bounds.as_ref()
    }

    /// Attaches or clears the opaque layout rectangle.
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
    }

    /// Returns the node payload.
    #[must_use]
    pub fn payload(&self) -> &N {
        &self.payload
    }

    /// Returns the node payload mutably.
    pub fn payload_mut(&mut self) -> &mut N {
        &mut self.payload
    }

    /// Records `edge` in the views matching the role(s) this node plays in it.
    pub(crate) fn attach(&mut self, edge: EdgeId, is_source: bool, is_sink: bool) {
        if is_source {
            self.adjacency[Direction::Outgoing as usize].push(edge);
        }
        if is_sink {
            self.adjacency[Direction::Incoming as usize].push(edge);
        }
        self.adjacency[Direction::All as usize].push(edge);
    }

    /// Removes `edge` from every view.
    pub(crate) fn detach(&mut self, edge: EdgeId) {
        for view in &mut self.adjacency {
            view.retain(|&e| e != edge);
        }
    }

    /// Copies the node without its adjacency, for placing it into another graph.
    pub(crate) fn detached_copy(&self, directed: bool) -> Self
    where
        N: Clone,
    {
        Node {
            identifier: self.identifier,
            directed,
            adjacency: Default::default(),
            root: self.root,
            bounds: self.bounds.clone(),
            payload: self.payload.clone(),
        }
    }
}
