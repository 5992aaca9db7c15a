//! Core multigraph implementation.
//!
//! This module provides [`Graph`], the mutable directed/undirected multigraph every
//! algorithm in this crate operates on. Nodes and edges live in two arenas addressed
//! by [`NodeId`] and [`EdgeId`] handles; adjacency is stored as handle lists on the
//! nodes, so nodes and edges never own each other.
//!
//! Removal tombstones the slot instead of shifting the arena. An outstanding handle to
//! a removed element therefore never aliases a different element: lookups through it
//! return `None` and mutations through it fail with [`crate::Error::InvalidArgument`].

use std::collections::HashSet;

use crate::{
    config::GraphConfig,
    graph::{
        edge::{Edge, EdgeId},
        node::{Direction, Node, NodeId},
        traits::{GraphBase, Neighbors, Predecessors, Successors},
    },
    Result,
};

/// How [`Graph::copy_selected`] carries an edge into the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeCopy {
    Skip,
    Keep,
    /// Copy with source and sink swapped and the reversed flag toggled.
    Reverse,
}

/// A mutable multigraph with typed node and edge payloads.
///
/// `Graph` supports:
///
/// - Generic node payloads (`N`) and edge payloads (`E`)
/// - Directed and undirected mode, switchable at runtime
/// - Parallel edges and self-loops
/// - Caller-visible integer identifiers on nodes and edges, independent of handles
/// - Weighted edges (default weight taken from [`GraphConfig`])
///
/// # Memory Layout
///
/// - Nodes are stored in a slot vector indexed by `NodeId`
/// - Edges are stored in a slot vector indexed by `EdgeId`
/// - Each node keeps incoming, outgoing and all-links views of `EdgeId`s
///
/// Removed slots stay in place as tombstones. [`Clone`] produces a compacted copy with
/// fresh handles and the same identifiers.
///
/// # Payload Factories
///
/// Some operations create nodes or edges on demand ([`Graph::add_edge_by_identifiers`],
/// [`crate::parse`]). Their payloads come from the factories the graph was built with:
/// [`Graph::new`] and [`Graph::with_config`] use `Default::default`, and
/// [`Graph::with_factories`] accepts explicit constructors for payload types that have
/// no sensible default.
///
/// # Thread Safety
///
/// `Graph<N, E>` is [`Send`] and [`Sync`] when both `N` and `E` are. Mutation requires
/// `&mut self`; shared read access from several threads is safe.
///
/// # Examples
///
/// ```rust
/// use nodegraph::Graph;
///
/// let mut graph: Graph<&str, ()> = Graph::new();
///
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
///
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.are_connected(a, b, true));
/// assert!(!graph.are_connected(b, a, true));
/// assert!(graph.are_connected(b, a, false));
/// # Ok::<(), nodegraph::Error>(())
/// ```
#[derive(Debug)]
pub struct Graph<N, E> {
    nodes: Vec<Option<Node<N>>>,
    edges: Vec<Option<Edge<E>>>,
    live_nodes: usize,
    live_edges: usize,
    next_edge_identifier: i64,
    config: GraphConfig,
    node_factory: fn() -> N,
    edge_factory: fn() -> E,
}

impl<N: Default, E: Default> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Default, E: Default> Graph<N, E> {
    /// Creates a new, empty directed graph with unit edge weights.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nodegraph::Graph;
    ///
    /// let graph: Graph<String, u32> = Graph::new();
    /// assert!(graph.is_empty());
    /// assert!(graph.is_directed());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Creates a new, empty graph with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Directed mode, default edge weight and identifier policy
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nodegraph::{Graph, GraphConfig};
    ///
    /// let graph: Graph<(), ()> = Graph::with_config(GraphConfig::undirected());
    /// assert!(!graph.is_directed());
    /// ```
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Self::with_factories(config, N::default, E::default)
    }
}

impl<N, E> Graph<N, E> {
    /// Creates a new, empty graph whose on-demand payloads come from the given factories.
    ///
    /// # Arguments
    ///
    /// * `config` - Directed mode, default edge weight and identifier policy
    /// * `node_factory` - Produces the payload of nodes created on demand
    /// * `edge_factory` - Produces the payload of edges added without an explicit payload
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nodegraph::{Graph, GraphConfig};
    ///
    /// struct Label(&'static str);
    ///
    /// fn unnamed() -> Label {
    ///     Label("unnamed")
    /// }
    ///
    /// let mut graph: Graph<Label, ()> =
    ///     Graph::with_factories(GraphConfig::directed(), unnamed, || ());
    /// graph.add_edge_by_identifiers(1, 2);
    ///
    /// let node = graph.find_node(2).and_then(|id| graph.node(id)).unwrap();
    /// assert_eq!(node.payload().0, "unnamed");
    /// ```
    #[must_use]
    pub fn with_factories(config: GraphConfig, node_factory: fn() -> N, edge_factory: fn() -> E) -> Self {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
            live_nodes: 0,
            live_edges: 0,
            next_edge_identifier: 0,
            config,
            node_factory,
            edge_factory,
        }
    }

    /// Creates an empty graph sharing this graph's configuration and payload factories.
    #[must_use]
    pub fn empty_like(&self) -> Self {
        Self::with_factories(self.config, self.node_factory, self.edge_factory)
    }

    /// Returns the configuration this graph was created with.
    ///
    /// The `directed` field tracks [`Graph::set_directed`].
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns `true` if edges of this graph have a direction.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    /// Switches the graph between directed and undirected mode.
    ///
    /// Every node is synchronized with the new mode. Edge endpoints are kept, so
    /// switching back restores the previous directed structure.
    pub fn set_directed(&mut self, directed: bool) {
        self.config.directed = directed;
        for node in self.nodes.iter_mut().flatten() {
            node.directed = directed;
        }
    }

    /// Produces a fresh node payload from the node factory.
    #[must_use]
    pub fn new_node_payload(&self) -> N {
        (self.node_factory)()
    }

    /// Produces a fresh edge payload from the edge factory.
    #[must_use]
    pub fn new_edge_payload(&self) -> E {
        (self.edge_factory)()
    }

    /// Adds a node and returns its handle.
    ///
    /// With automatic identifiers enabled (the default), the node receives
    /// `max(existing identifiers) + 1`, or `0` for an empty graph. Otherwise it
    /// receives `0`.
    ///
    /// # Arguments
    ///
    /// * `payload` - The data to associate with the new node
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nodegraph::{Graph, NodeId};
    ///
    /// let mut graph: Graph<&str, ()> = Graph::new();
    /// let a = graph.add_node("A");
    /// let b = graph.add_node("B");
    ///
    /// assert_eq!(a, NodeId::new(0));
    /// assert_eq!(graph.node(b).map(|n| n.identifier()), Some(1));
    /// ```
    pub fn add_node(&mut self, payload: N) -> NodeId {
        let identifier = if self.config.auto_identifiers {
            self.next_node_identifier()
        } else {
            0
        };
        self.add_node_with_identifier(identifier, payload)
    }

    /// Adds a node carrying an explicit identifier and returns its handle.
    ///
    /// The identifier is not checked against existing nodes.
    pub fn add_node_with_identifier(&mut self, identifier: i64, payload: N) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes
            .push(Some(Node::new(identifier, self.config.directed, payload)));
        self.live_nodes += 1;
        id
    }

    /// Returns the identifier the next automatically numbered node would receive.
    #[must_use]
    pub fn next_node_identifier(&self) -> i64 {
        self.nodes()
            .map(|(_, node)| node.identifier)
            .max()
            .map_or(0, |max| max.saturating_add(1))
    }

    /// Adds an edge with the default weight and a factory payload.
    ///
    /// # Arguments
    ///
    /// * `source` - The node the edge starts at
    /// * `sink` - The node the edge ends at
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] if either handle is not a live node of this
    /// graph. The graph is left unchanged.
    pub fn add_edge(&mut self, source: NodeId, sink: NodeId) -> Result<EdgeId> {
        let payload = self.new_edge_payload();
        let weight = self.config.default_weight;
        self.add_edge_with(source, sink, weight, payload)
    }

    /// Adds an edge with an explicit weight and payload.
    ///
    /// No uniqueness check is performed; parallel edges and self-loops are kept.
    ///
    /// # Arguments
    ///
    /// * `source` - The node the edge starts at
    /// * `sink` - The node the edge ends at
    /// * `weight` - Numeric weight used by the weighted algorithms
    /// * `payload` - The data to associate with the edge
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] if either handle is not a live node of this
    /// graph. The graph is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nodegraph::Graph;
    ///
    /// let mut graph: Graph<(), &str> = Graph::new();
    /// let a = graph.add_node(());
    /// let b = graph.add_node(());
    ///
    /// let edge = graph.add_edge_with(a, b, 2.5, "a->b")?;
    /// let stored = graph.edge(edge).unwrap();
    /// assert_eq!(stored.weight(), 2.5);
    /// assert_eq!(*stored.payload(), "a->b");
    /// # Ok::<(), nodegraph::Error>(())
    /// ```
    pub fn add_edge_with(&mut self, source: NodeId, sink: NodeId, weight: f64, payload: E) -> Result<EdgeId> {
        if !self.contains_node(source) {
            return Err(invalid_argument!(
                "source node {} does not exist in graph with {} nodes",
                source,
                self.live_nodes
            ));
        }
        if !self.contains_node(sink) {
            return Err(invalid_argument!(
                "sink node {} does not exist in graph with {} nodes",
                sink,
                self.live_nodes
            ));
        }

        let identifier = self.next_edge_identifier;
        Ok(self.link(Edge::new(identifier, source, sink, weight, payload)))
    }

    /// Adds an edge between the nodes carrying identifiers `source` and `sink`,
    /// creating either node first if no node carries its identifier.
    ///
    /// Nodes created here take their payload from the node factory.
    pub fn add_edge_by_identifiers(&mut self, source: i64, sink: i64) -> EdgeId {
        let from = self.find_or_create_node(source);
        let to = self.find_or_create_node(sink);
        let payload = self.new_edge_payload();
        let weight = self.config.default_weight;
        let identifier = self.next_edge_identifier;
        self.link(Edge::new(identifier, from, to, weight, payload))
    }

    /// Returns the first node carrying `identifier`, creating it if there is none.
    pub fn find_or_create_node(&mut self, identifier: i64) -> NodeId {
        match self.find_node(identifier) {
            Some(node) => node,
            None => {
                let payload = self.new_node_payload();
                self.add_node_with_identifier(identifier, payload)
            }
        }
    }

    /// Stores an edge whose endpoints are known to be live and wires adjacency.
    fn link(&mut self, edge: Edge<E>) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        let (source, sink) = edge.endpoints();
        self.next_edge_identifier = self.next_edge_identifier.max(edge.identifier.saturating_add(1));

        if source == sink {
            if let Some(node) = self.slot_mut(source) {
                node.attach(id, true, true);
            }
        } else {
            if let Some(node) = self.slot_mut(source) {
                node.attach(id, true, false);
            }
            if let Some(node) = self.slot_mut(sink) {
                node.attach(id, false, true);
            }
        }

        self.edges.push(Some(edge));
        self.live_edges += 1;
        log::trace!("linked {id}: {source} -> {sink}");
        id
    }

    /// Copies a node from another graph, without adjacency.
    pub(crate) fn insert_node_copy(&mut self, node: &Node<N>) -> NodeId
    where
        N: Clone,
    {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Some(node.detached_copy(self.config.directed)));
        self.live_nodes += 1;
        id
    }

    /// Copies an edge from another graph onto live endpoints of this graph.
    pub(crate) fn insert_edge_copy(&mut self, edge: &Edge<E>, source: NodeId, sink: NodeId) -> EdgeId
    where
        E: Clone,
    {
        self.link(edge.remapped(source, sink))
    }

    /// Copies every node and the edges `select` keeps into a fresh graph with
    /// compacted handles. Edges are visited in insertion order.
    pub(crate) fn copy_selected(&self, mut select: impl FnMut(EdgeId, &Edge<E>) -> EdgeCopy) -> Self
    where
        N: Clone,
        E: Clone,
    {
        let mut graph = self.empty_like();
        graph.next_edge_identifier = self.next_edge_identifier;

        let mut remap: Vec<Option<NodeId>> = vec![None; self.node_bound()];
        for (id, node) in self.nodes() {
            remap[id.index()] = Some(graph.insert_node_copy(node));
        }
        for (id, edge) in self.edges() {
            let (Some(source), Some(sink)) = (remap[edge.source.index()], remap[edge.sink.index()]) else {
                continue;
            };
            match select(id, edge) {
                EdgeCopy::Skip => {}
                EdgeCopy::Keep => {
                    graph.insert_edge_copy(edge, source, sink);
                }
                EdgeCopy::Reverse => {
                    let mut copy = edge.remapped(source, sink);
                    copy.flip();
                    graph.link(copy);
                }
            }
        }
        graph
    }

    /// Removes a node together with every edge incident to it.
    ///
    /// Returns `false` (and does nothing) if `node` is not a live node of this graph.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nodegraph::Graph;
    ///
    /// let mut graph: Graph<(), ()> = Graph::new();
    /// let a = graph.add_node(());
    /// let b = graph.add_node(());
    /// graph.add_edge(a, b)?;
    ///
    /// assert!(graph.remove_node(a));
    /// assert!(!graph.remove_node(a));
    /// assert_eq!(graph.edge_count(), 0);
    /// assert_eq!(graph.node(b).map(|n| n.degree()), Some(0));
    /// # Ok::<(), nodegraph::Error>(())
    /// ```
    pub fn remove_node(&mut self, node: NodeId) -> bool {
        if !self.contains_node(node) {
            return false;
        }

        self.remove_all_links_from(node);
        if let Some(slot) = self.nodes.get_mut(node.index()) {
            *slot = None;
        }
        self.live_nodes -= 1;
        true
    }

    /// Removes an edge, detaching it from both endpoints.
    ///
    /// Returns `false` (and does nothing) if `edge` is not a live edge of this graph.
    pub fn remove_link(&mut self, edge: EdgeId) -> bool {
        let Some(removed) = self.edges.get_mut(edge.index()).and_then(Option::take) else {
            return false;
        };

        for endpoint in [removed.source, removed.sink] {
            if let Some(node) = self.slot_mut(endpoint) {
                node.detach(edge);
            }
        }
        self.live_edges -= 1;
        true
    }

    /// Removes every edge incident to `node` and returns how many were removed.
    pub fn remove_all_links_from(&mut self, node: NodeId) -> usize {
        let links: Vec<EdgeId> = self.links(node).to_vec();
        links
            .into_iter()
            .filter(|&edge| self.remove_link(edge))
            .count()
    }

    /// Swaps source and sink of an edge, toggles its reversed flag and rewires the
    /// adjacency views of both endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] if `edge` is not a live edge of this graph.
    pub fn reverse_edge(&mut self, edge: EdgeId) -> Result<()> {
        let (source, sink) = self
            .edge_endpoints(edge)
            .ok_or_else(|| invalid_argument!("edge {} does not exist", edge))?;

        if let Some(stored) = self.edges.get_mut(edge.index()).and_then(Option::as_mut) {
            stored.flip();
        }

        if source != sink {
            if let Some(node) = self.slot_mut(source) {
                node.detach(edge);
                node.attach(edge, false, true);
            }
            if let Some(node) = self.slot_mut(sink) {
                node.detach(edge);
                node.attach(edge, true, false);
            }
        }
        Ok(())
    }

    /// Checks whether an edge connects `a` to `b`.
    ///
    /// With `strict = true` an edge whose source is `a` and whose sink is `b` is
    /// required; with `strict = false` either direction is accepted. In an undirected
    /// graph direction is ignored altogether. Runs in `O(degree(a))`.
    #[must_use]
    pub fn are_connected(&self, a: NodeId, b: NodeId, strict: bool) -> bool {
        let Some(node) = self.node(a) else {
            return false;
        };

        let reaches = |view: &[EdgeId]| {
            view.iter()
                .any(|&e| self.edge(e).and_then(|edge| edge.opposite(a)) == Some(b))
        };
        reaches(node.outgoing()) || (!strict && reaches(node.incoming()))
    }

    /// Finds the first live node carrying `identifier`.
    #[must_use]
    pub fn find_node(&self, identifier: i64) -> Option<NodeId> {
        self.nodes()
            .find(|(_, node)| node.identifier == identifier)
            .map(|(id, _)| id)
    }

    /// Finds an edge between the nodes carrying identifiers `source` and `sink`.
    ///
    /// See [`Graph::are_connected`] for the meaning of `strict`.
    #[must_use]
    pub fn find_edge(&self, source: i64, sink: i64, strict: bool) -> Option<EdgeId> {
        let from = self.find_node(source)?;
        let node = self.node(from)?;

        let lookup = |view: &[EdgeId]| {
            view.iter().copied().find(|&e| {
                self.edge(e)
                    .and_then(|edge| edge.opposite(from))
                    .and_then(|other| self.node(other))
                    .is_some_and(|other| other.identifier == sink)
            })
        };
        lookup(node.outgoing()).or_else(|| if strict { None } else { lookup(node.incoming()) })
    }

    /// Re-derives node and edge identifiers from their position in insertion order.
    pub fn assign_identifiers(&mut self) {
        let mut next = 0i64;
        for node in self.nodes.iter_mut().flatten() {
            node.identifier = next;
            next += 1;
        }

        let mut next = 0i64;
        for edge in self.edges.iter_mut().flatten() {
            edge.identifier = next;
            next += 1;
        }
        self.next_edge_identifier = next;
        log::debug!(
            "assigned identifiers to {} nodes and {} edges",
            self.live_nodes,
            self.live_edges
        );
    }

    /// Returns `true` if no two nodes and no two edges share an identifier.
    #[must_use]
    pub fn have_unique_identifiers(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.live_nodes);
        if !self.nodes().all(|(_, node)| seen.insert(node.identifier)) {
            return false;
        }

        seen.clear();
        self.edges().all(|(_, edge)| seen.insert(edge.identifier))
    }

    /// Assigns positional identifiers if any node or edge identifier is duplicated.
    ///
    /// Returns `true` if identifiers were reassigned.
    pub fn ensure_unique_identifiers(&mut self) -> bool {
        if self.have_unique_identifiers() {
            return false;
        }
        self.assign_identifiers();
        true
    }

    /// Adds `delta` to every node identifier.
    ///
    /// Used to move two graphs into disjoint identifier ranges before a merge.
    pub fn shift_identifiers(&mut self, delta: i64) {
        for node in self.nodes.iter_mut().flatten() {
            node.identifier = node.identifier.saturating_add(delta);
        }
    }

    /// Returns the node stored behind `node`, if it is live.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&Node<N>> {
        self.nodes.get(node.index()).and_then(Option::as_ref)
    }

    /// Returns the node stored behind `node` mutably, if it is live.
    ///
    /// Identifier, payload, root marker and layout can be edited; adjacency cannot.
    pub fn node_mut(&mut self, node: NodeId) -> Option<&mut Node<N>> {
        self.slot_mut(node)
    }

    fn slot_mut(&mut self, node: NodeId) -> Option<&mut Node<N>> {
        self.nodes.get_mut(node.index()).and_then(Option::as_mut)
    }

    /// Returns the edge stored behind `edge`, if it is live.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&Edge<E>> {
        self.edges.get(edge.index()).and_then(Option::as_ref)
    }

    /// Returns the edge stored behind `edge` mutably, if it is live.
    ///
    /// Endpoints can only change through [`Graph::reverse_edge`].
    pub fn edge_mut(&mut self, edge: EdgeId) -> Option<&mut Edge<E>> {
        self.edges.get_mut(edge.index()).and_then(Option::as_mut)
    }

    /// Returns `(source, sink)` of a live edge.
    #[must_use]
    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edge(edge).map(Edge::endpoints)
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.live_nodes
    }

    /// Returns the number of live edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    /// Returns an exclusive upper bound for node handle indices.
    #[must_use]
    pub fn node_bound(&self) -> usize {
        self.nodes.len()
    }

    /// Returns an exclusive upper bound for edge handle indices.
    #[must_use]
    pub fn edge_bound(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_nodes == 0
    }

    /// Returns `true` if `node` is a live node of this graph.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.node(node).is_some()
    }

    /// Returns `true` if `edge` is a live edge of this graph.
    #[must_use]
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.edge(edge).is_some()
    }

    /// Iterates over live node handles in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().map(|(id, _)| id)
    }

    /// Iterates over live edge handles in insertion order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges().map(|(id, _)| id)
    }

    /// Iterates over live nodes with their handles, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<N>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|node| (NodeId::new(i), node)))
    }

    /// Iterates over live edges with their handles, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<E>)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|edge| (EdgeId::new(i), edge)))
    }

    /// Returns the requested adjacency view of `node`, or an empty slice if the node
    /// is not live.
    #[must_use]
    pub fn view(&self, node: NodeId, direction: Direction) -> &[EdgeId] {
        self.node(node)
            .map(|n| n.view(direction))
            .unwrap_or_default()
    }

    /// Every edge incident to `node`.
    #[must_use]
    pub fn links(&self, node: NodeId) -> &[EdgeId] {
        self.view(node, Direction::All)
    }

    /// Iterates over the edges leaving `node`.
    pub fn outgoing_edges(&self, node: NodeId) -> impl Iterator<Item = (EdgeId, &Edge<E>)> + '_ {
        self.view_edges(node, Direction::Outgoing)
    }

    /// Iterates over the edges arriving at `node`.
    pub fn incoming_edges(&self, node: NodeId) -> impl Iterator<Item = (EdgeId, &Edge<E>)> + '_ {
        self.view_edges(node, Direction::Incoming)
    }

    fn view_edges(&self, node: NodeId, direction: Direction) -> impl Iterator<Item = (EdgeId, &Edge<E>)> + '_ {
        self.view(node, direction)
            .iter()
            .filter_map(move |&e| self.edge(e).map(|edge| (e, edge)))
    }

    fn opposite_ends(&self, node: NodeId, direction: Direction) -> impl Iterator<Item = NodeId> + '_ {
        self.view(node, direction)
            .iter()
            .filter_map(move |&e| self.edge(e).and_then(|edge| edge.opposite(node)))
    }

    /// Iterates over the successors of `node`.
    ///
    /// In a directed graph these are the sinks of its outgoing edges; in an undirected
    /// graph the opposite endpoint of every incident edge. Parallel edges yield the
    /// successor once per edge.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.opposite_ends(node, Direction::Outgoing)
    }

    /// Iterates over the predecessors of `node`.
    pub fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.opposite_ends(node, Direction::Incoming)
    }

    /// Iterates over the opposite endpoint of every edge incident to `node`.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.opposite_ends(node, Direction::All)
    }

    /// Number of edges incident to `node`. A self-loop counts once.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.links(node).len()
    }

    /// Number of edges leaving `node`.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.view(node, Direction::Outgoing).len()
    }

    /// Number of edges arriving at `node`.
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.view(node, Direction::Incoming).len()
    }

    /// Iterates over nodes without incoming edges.
    pub fn entry_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_ids().filter(move |&n| self.in_degree(n) == 0)
    }

    /// Iterates over nodes without outgoing edges.
    pub fn exit_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_ids().filter(move |&n| self.out_degree(n) == 0)
    }

    /// Nodes carrying the root marker.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes()
            .filter(|(_, node)| node.root)
            .map(|(id, _)| id)
    }

    /// Checks the structural invariants of the arenas.
    ///
    /// Every live edge must join two live nodes and be recorded in the matching
    /// views of both endpoints, every recorded handle must name a live edge incident
    /// to the node, and the live counters must match the arenas.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GraphError`] describing the first violation found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nodegraph::Graph;
    ///
    /// let mut graph: Graph<(), ()> = Graph::new();
    /// let a = graph.add_node(());
    /// let b = graph.add_node(());
    /// let edge = graph.add_edge(a, b)?;
    /// graph.reverse_edge(edge)?;
    /// graph.remove_node(a);
    /// graph.validate()?;
    /// # Ok::<(), nodegraph::Error>(())
    /// ```
    pub fn validate(&self) -> Result<()> {
        let nodes = self.nodes.iter().flatten().count();
        if nodes != self.live_nodes {
            return Err(graph_error!("node counter is {} but {} nodes are live", self.live_nodes, nodes));
        }
        let edges = self.edges.iter().flatten().count();
        if edges != self.live_edges {
            return Err(graph_error!("edge counter is {} but {} edges are live", self.live_edges, edges));
        }

        for (id, edge) in self.edges() {
            let (source, sink) = edge.endpoints();
            let (Some(from), Some(to)) = (self.node(source), self.node(sink)) else {
                return Err(graph_error!("edge {} joins {} and {}, which are not both live", id, source, sink));
            };
            let recorded = from.adjacency[Direction::Outgoing as usize].contains(&id)
                && from.adjacency[Direction::All as usize].contains(&id)
                && to.adjacency[Direction::Incoming as usize].contains(&id)
                && to.adjacency[Direction::All as usize].contains(&id);
            if !recorded {
                return Err(graph_error!("edge {} is missing from the adjacency of {} or {}", id, source, sink));
            }
        }

        for (id, node) in self.nodes() {
            for view in &node.adjacency {
                let stray = view
                    .iter()
                    .find(|&&e| !self.edge(e).is_some_and(|edge| edge.opposite(id).is_some()));
                if let Some(stray) = stray {
                    return Err(graph_error!("node {} records edge {} it is not an endpoint of", id, stray));
                }
            }
        }
        Ok(())
    }

    /// Checks that `node` is live, for operations that treat a foreign handle as a
    /// domain error.
    pub(crate) fn require_member(&self, node: NodeId, role: &str) -> Result<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(not_member!("{} {} is not a node of this graph", role, node))
        }
    }
}

impl<N: Clone, E: Clone> Clone for Graph<N, E> {
    /// Deep-copies the graph into compacted arenas.
    ///
    /// Identifiers, weights, flags, layout and payloads are preserved; handles are
    /// reissued densely in insertion order.
    fn clone(&self) -> Self {
        self.copy_selected(|_, _| EdgeCopy::Keep)
    }
}

impl<N, E> GraphBase for Graph<N, E> {
    fn node_count(&self) -> usize {
        self.live_nodes
    }

    fn node_bound(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        Graph::node_ids(self)
    }

    fn contains_node(&self, node: NodeId) -> bool {
        Graph::contains_node(self, node)
    }
}

impl<N, E> Successors for Graph<N, E> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        Graph::successors(self, node)
    }
}

impl<N, E> Predecessors for Graph<N, E> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        Graph::predecessors(self, node)
    }
}

impl<N, E> Neighbors for Graph<N, E> {
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        Graph::neighbors(self, node)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::GraphConfig,
        graph::{
            edge::EdgeId,
            layout::{Point, Rect},
            multigraph::Graph,
            node::{Direction, NodeId},
            traits::{GraphBase, Predecessors, Successors},
        },
        Error,
    };

    /// Creates a simple linear graph: A -> B -> C
    fn create_linear_graph() -> Graph<&'static str, ()> {
        let mut graph = Graph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let c = graph.add_node("C");
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, c).unwrap();
        graph
    }

    /// Creates a diamond graph: A -> B, A -> C, B -> D, C -> D
    fn create_diamond_graph() -> Graph<&'static str, ()> {
        let mut graph = Graph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let c = graph.add_node("C");
        let d = graph.add_node("D");
        graph.add_edge(a, b).unwrap();
        graph.add_edge(a, c).unwrap();
        graph.add_edge(b, d).unwrap();
        graph.add_edge(c, d).unwrap();
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph: Graph<(), ()> = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_directed());
    }

    #[test]
    fn test_default() {
        let graph: Graph<(), ()> = Graph::default();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_add_node_assigns_identifiers() {
        let mut graph: Graph<&str, ()> = Graph::new();

        let a = graph.add_node("A");
        assert_eq!(a, NodeId::new(0));
        assert_eq!(graph.node(a).unwrap().identifier(), 0);

        let b = graph.add_node_with_identifier(10, "B");
        let c = graph.add_node("C");
        assert_eq!(graph.node(b).unwrap().identifier(), 10);
        assert_eq!(graph.node(c).unwrap().identifier(), 11);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_add_node_without_auto_identifiers() {
        let mut graph: Graph<(), ()> =
            Graph::with_config(GraphConfig::directed().with_auto_identifiers(false));
        let a = graph.add_node(());
        let b = graph.add_node(());

        assert_eq!(graph.node(a).unwrap().identifier(), 0);
        assert_eq!(graph.node(b).unwrap().identifier(), 0);
        assert!(!graph.have_unique_identifiers());
    }

    #[test]
    fn test_node_access() {
        let mut graph: Graph<String, ()> = Graph::new();
        let a = graph.add_node(String::from("hello"));

        graph.node_mut(a).unwrap().payload_mut().push_str(" world");
        assert_eq!(graph.node(a).unwrap().payload(), "hello world");
        assert!(graph.node(NodeId::new(999)).is_none());
    }

    #[test]
    fn test_add_edge() {
        let mut graph: Graph<&str, &str> = Graph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");

        let edge = graph.add_edge_with(a, b, 3.0, "A->B").unwrap();
        assert_eq!(edge, EdgeId::new(0));
        assert_eq!(graph.edge_endpoints(edge), Some((a, b)));
        assert_eq!(*graph.edge(edge).unwrap().payload(), "A->B");
        assert!((graph.edge(edge).unwrap().weight() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_add_edge_uses_default_weight() {
        let mut graph: Graph<(), ()> = Graph::with_config(GraphConfig::directed().with_default_weight(4.0));
        let a = graph.add_node(());
        let b = graph.add_node(());
        let edge = graph.add_edge(a, b).unwrap();
        assert!((graph.edge(edge).unwrap().weight() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_add_edge_invalid_source() {
        let mut graph: Graph<(), ()> = Graph::new();
        let a = graph.add_node(());
        let result = graph.add_edge(NodeId::new(99), a);
        assert!(matches!(result, Err(Error::InvalidArgument(ref m)) if m.contains("source")));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(a), 0);
    }

    #[test]
    fn test_add_edge_invalid_sink() {
        let mut graph: Graph<(), ()> = Graph::new();
        let a = graph.add_node(());
        let result = graph.add_edge(a, NodeId::new(99));
        assert!(matches!(result, Err(Error::InvalidArgument(ref m)) if m.contains("sink")));
        assert_eq!(graph.degree(a), 0);
    }

    #[test]
    fn test_add_edge_to_removed_node_fails() {
        let mut graph: Graph<(), ()> = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.remove_node(b);

        assert!(graph.add_edge(a, b).is_err());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_multiple_edges_and_self_loop() {
        let mut graph: Graph<(), ()> = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());

        graph.add_edge(a, b).unwrap();
        graph.add_edge(a, b).unwrap();
        graph.add_edge(a, a).unwrap();

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.out_degree(a), 3);
        assert_eq!(graph.in_degree(a), 1);
        assert_eq!(graph.degree(a), 3);
        assert_eq!(graph.successors(a).collect::<Vec<_>>(), vec![b, b, a]);
    }

    #[test]
    fn test_successors_and_predecessors() {
        let graph = create_diamond_graph();
        let a = NodeId::new(0);
        let d = NodeId::new(3);

        assert_eq!(graph.successors(a).collect::<Vec<_>>(), vec![NodeId::new(1), NodeId::new(2)]);
        assert_eq!(graph.predecessors(d).collect::<Vec<_>>(), vec![NodeId::new(1), NodeId::new(2)]);
        assert_eq!(graph.predecessors(a).count(), 0);
        assert_eq!(graph.neighbors(NodeId::new(1)).collect::<Vec<_>>(), vec![a, d]);
    }

    #[test]
    fn test_undirected_adjacency() {
        let mut graph: Graph<(), ()> = Graph::with_config(GraphConfig::undirected());
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.add_edge(a, b).unwrap();
        graph.add_edge(c, b).unwrap();

        assert_eq!(graph.successors(b).collect::<Vec<_>>(), vec![a, c]);
        assert_eq!(graph.predecessors(b).collect::<Vec<_>>(), vec![a, c]);
        assert!(graph.are_connected(b, a, true));
        assert!(graph.are_connected(a, b, true));
        assert_eq!(graph.out_degree(b), 2);
        assert_eq!(graph.entry_nodes().count(), 0);
    }

    #[test]
    fn test_set_directed_round_trip() {
        let mut graph = create_linear_graph();
        let b = NodeId::new(1);
        assert_eq!(graph.successors(b).count(), 1);

        graph.set_directed(false);
        assert!(!graph.node(b).unwrap().is_directed());
        assert_eq!(graph.successors(b).count(), 2);

        graph.set_directed(true);
        assert_eq!(graph.successors(b).collect::<Vec<_>>(), vec![NodeId::new(2)]);
    }

    #[test]
    fn test_are_connected() {
        let graph = create_linear_graph();
        let (a, b, c) = (NodeId::new(0), NodeId::new(1), NodeId::new(2));

        assert!(graph.are_connected(a, b, true));
        assert!(!graph.are_connected(b, a, true));
        assert!(graph.are_connected(b, a, false));
        assert!(!graph.are_connected(a, c, false));
        assert!(!graph.are_connected(NodeId::new(77), a, false));
    }

    #[test]
    fn test_remove_link() {
        let mut graph = create_linear_graph();
        let edge = EdgeId::new(0);

        assert!(graph.remove_link(edge));
        assert!(!graph.remove_link(edge));
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.contains_edge(edge));
        assert_eq!(graph.out_degree(NodeId::new(0)), 0);
        assert_eq!(graph.in_degree(NodeId::new(1)), 0);
    }

    #[test]
    fn test_remove_node_cascades() {
        let mut graph = create_diamond_graph();
        let b = NodeId::new(1);

        assert!(graph.remove_node(b));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.node_bound(), 4);
        assert!(graph.node(b).is_none());
        assert_eq!(graph.out_degree(NodeId::new(0)), 1);
        assert_eq!(graph.in_degree(NodeId::new(3)), 1);

        for (_, edge) in graph.edges() {
            assert!(graph.contains_node(edge.source()));
            assert!(graph.contains_node(edge.sink()));
        }
    }

    #[test]
    fn test_remove_all_links_from() {
        let mut graph = create_diamond_graph();
        assert_eq!(graph.remove_all_links_from(NodeId::new(3)), 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.degree(NodeId::new(3)), 0);
        assert!(graph.contains_node(NodeId::new(3)));
    }

    #[test]
    fn test_reverse_edge() {
        let mut graph = create_linear_graph();
        let (a, b) = (NodeId::new(0), NodeId::new(1));
        let edge = EdgeId::new(0);

        graph.reverse_edge(edge).unwrap();
        assert_eq!(graph.edge_endpoints(edge), Some((b, a)));
        assert!(graph.edge(edge).unwrap().is_reversed());
        assert!(graph.are_connected(b, a, true));
        assert!(!graph.are_connected(a, b, true));
        assert_eq!(graph.in_degree(a), 1);
        assert_eq!(graph.out_degree(b), 2);

        graph.remove_link(edge);
        assert!(matches!(graph.reverse_edge(edge), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_find_node_and_edge() {
        let mut graph: Graph<(), ()> = Graph::new();
        graph.add_edge_by_identifiers(5, 7);
        graph.add_edge_by_identifiers(7, 9);

        assert_eq!(graph.node_count(), 3);
        let seven = graph.find_node(7).unwrap();
        assert_eq!(graph.node(seven).unwrap().identifier(), 7);
        assert!(graph.find_node(6).is_none());

        assert!(graph.find_edge(5, 7, true).is_some());
        assert!(graph.find_edge(7, 5, true).is_none());
        assert!(graph.find_edge(7, 5, false).is_some());
        assert!(graph.find_edge(5, 9, false).is_none());
    }

    #[test]
    fn test_identifier_maintenance() {
        let mut graph: Graph<(), ()> = Graph::new();
        graph.add_node_with_identifier(3, ());
        graph.add_node_with_identifier(3, ());
        assert!(!graph.have_unique_identifiers());

        assert!(graph.ensure_unique_identifiers());
        assert!(graph.have_unique_identifiers());
        assert!(!graph.ensure_unique_identifiers());

        let ids: Vec<i64> = graph.nodes().map(|(_, n)| n.identifier()).collect();
        assert_eq!(ids, vec![0, 1]);

        graph.shift_identifiers(100);
        let ids: Vec<i64> = graph.nodes().map(|(_, n)| n.identifier()).collect();
        assert_eq!(ids, vec![100, 101]);
    }

    #[test]
    fn test_duplicate_edge_identifiers_detected() {
        let mut graph = create_linear_graph();
        graph.edge_mut(EdgeId::new(1)).unwrap().set_identifier(0);
        assert!(!graph.have_unique_identifiers());
        graph.ensure_unique_identifiers();
        assert_eq!(graph.edge(EdgeId::new(1)).unwrap().identifier(), 1);
    }

    #[test]
    fn test_entry_and_exit_nodes() {
        let graph = create_diamond_graph();
        assert_eq!(graph.entry_nodes().collect::<Vec<_>>(), vec![NodeId::new(0)]);
        assert_eq!(graph.exit_nodes().collect::<Vec<_>>(), vec![NodeId::new(3)]);
    }

    #[test]
    fn test_graph_clone_compacts() {
        let mut graph = create_diamond_graph();
        graph.remove_node(NodeId::new(0));
        graph
            .node_mut(NodeId::new(1))
            .unwrap()
            .set_bounds(Some(Rect::new(1.0, 1.0, 2.0, 2.0)));
        graph
            .edge_mut(EdgeId::new(2))
            .unwrap()
            .set_points(vec![Point::new(0.5, 0.5)]);

        let cloned = graph.clone();
        assert_eq!(cloned.node_count(), 3);
        assert_eq!(cloned.node_bound(), 3);
        assert_eq!(cloned.edge_count(), 2);

        let ids: Vec<i64> = cloned.nodes().map(|(_, n)| n.identifier()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(*cloned.node(NodeId::new(0)).unwrap().payload(), "B");
        assert!(cloned.node(NodeId::new(0)).unwrap().bounds().is_some());
        assert_eq!(cloned.edge(EdgeId::new(0)).unwrap().points().len(), 1);
        assert!(cloned.are_connected(NodeId::new(0), NodeId::new(2), true));
    }

    #[test]
    fn test_clone_is_independent() {
        let graph = create_linear_graph();
        let mut cloned = graph.clone();
        cloned.remove_node(NodeId::new(0));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(cloned.node_count(), 2);
    }

    #[test]
    fn test_trait_impls() {
        let graph = create_diamond_graph();
        assert_eq!(GraphBase::node_count(&graph), 4);
        assert_eq!(GraphBase::node_ids(&graph).count(), 4);
        assert_eq!(Successors::successors(&graph, NodeId::new(0)).count(), 2);
        assert_eq!(Predecessors::predecessors(&graph, NodeId::new(3)).count(), 2);
    }

    #[test]
    fn test_large_graph() {
        let mut graph: Graph<usize, ()> = Graph::new();
        let nodes: Vec<NodeId> = (0..1000).map(|i| graph.add_node(i)).collect();
        for pair in nodes.windows(2) {
            graph.add_edge(pair[0], pair[1]).unwrap();
        }

        assert_eq!(graph.node_count(), 1000);
        assert_eq!(graph.edge_count(), 999);
        assert_eq!(graph.entry_nodes().count(), 1);
        assert_eq!(graph.exit_nodes().count(), 1);
    }

    #[test]
    fn test_validate_after_mutations() {
        let mut graph = create_diamond_graph();
        let a = NodeId::new(0);
        let extra = graph.add_edge(a, a).unwrap();
        graph.reverse_edge(EdgeId::new(1)).unwrap();
        graph.set_directed(false);
        graph.remove_link(extra);
        graph.remove_node(NodeId::new(3));
        assert!(graph.validate().is_ok());
        assert!(graph.clone().validate().is_ok());
    }

    #[test]
    fn test_validate_detects_dangling_edge() {
        let mut graph = create_linear_graph();
        graph.nodes[2] = None;
        graph.live_nodes -= 1;

        let err = graph.validate().unwrap_err();
        assert!(matches!(err, Error::GraphError(ref message) if message.contains("not both live")));
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_validate_detects_missing_adjacency() {
        let mut graph = create_linear_graph();
        graph.nodes[1].as_mut().unwrap().adjacency[Direction::Incoming as usize].clear();
        assert!(matches!(graph.validate(), Err(Error::GraphError(_))));
    }

    #[test]
    fn test_validate_detects_counter_drift() {
        let mut graph = create_linear_graph();
        graph.live_edges += 1;
        assert!(matches!(graph.validate(), Err(Error::GraphError(_))));
    }
}
