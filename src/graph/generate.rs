//! Graph generators for tests, benchmarks and demos.
//!
//! The randomized generators draw from a caller-supplied [`rand::Rng`], so a seeded
//! generator such as [`rand::rngs::StdRng`] reproduces the same graph every run:
//!
//! ```rust
//! use nodegraph::generate::random_connected_graph;
//! use nodegraph::Graph;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let first: Graph<(), ()> = random_connected_graph(&mut StdRng::seed_from_u64(7), 20, 10, 5);
//! let second: Graph<(), ()> = random_connected_graph(&mut StdRng::seed_from_u64(7), 20, 10, 5);
//! assert!(first.has_identical_structure_with(&second));
//! ```
//!
//! Node identifiers are assigned densely from `0` in creation order, and every
//! generated edge points from the older node to the newer one.

use rand::Rng;

use crate::graph::{multigraph::Graph, node::NodeId};

/// Adds a complete tree to `graph`, with identifiers continuing after the nodes
/// already present. Returns the tree's root.
fn grow_balanced<N: Default, E: Default>(graph: &mut Graph<N, E>, branching: usize, depth: usize) -> NodeId {
    let mut next = i64::try_from(graph.node_count()).unwrap_or(i64::MAX);
    let mut add = |graph: &mut Graph<N, E>| {
        let node = graph.add_node_with_identifier(next, N::default());
        next = next.saturating_add(1);
        node
    };

    let root = add(graph);
    if let Some(node) = graph.node_mut(root) {
        node.set_root(true);
    }

    let mut level = vec![root];
    for _ in 0..depth {
        let mut below = Vec::with_capacity(level.len() * branching);
        for &parent in &level {
            for _ in 0..branching {
                let child = add(graph);
                if graph.add_edge(parent, child).is_ok() {
                    below.push(child);
                }
            }
        }
        level = below;
    }
    root
}

/// Builds a complete tree where every node above the last level has `branching`
/// children.
///
/// The tree has `depth + 1` levels, so `depth = 0` yields a single node. Edges point
/// from parent to child and the root carries the root marker.
///
/// # Examples
///
/// ```rust
/// use nodegraph::{generate::balanced_tree, Graph};
///
/// let tree: Graph<(), ()> = balanced_tree(2, 3);
/// assert_eq!(tree.node_count(), 15);
/// assert_eq!(tree.edge_count(), 14);
/// ```
#[must_use]
pub fn balanced_tree<N: Default, E: Default>(branching: usize, depth: usize) -> Graph<N, E> {
    let mut graph = Graph::new();
    grow_balanced(&mut graph, branching, depth);
    graph
}

/// Builds `trees` disjoint copies of [`balanced_tree`] in one graph.
///
/// Each tree occupies its own contiguous identifier range.
#[must_use]
pub fn balanced_forest<N: Default, E: Default>(trees: usize, branching: usize, depth: usize) -> Graph<N, E> {
    let mut graph = Graph::new();
    for _ in 0..trees {
        grow_balanced(&mut graph, branching, depth);
    }
    log::debug!("generated forest of {} trees, {} nodes", trees, graph.node_count());
    graph
}

/// Builds a random tree with `nodes` nodes.
///
/// Node `k > 0` is attached below a uniformly chosen earlier node, so node `0` is
/// the root of every generated tree.
///
/// # Examples
///
/// ```rust
/// use nodegraph::{generate::random_tree, is_connected, Graph};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let tree: Graph<(), ()> = random_tree(&mut StdRng::seed_from_u64(1), 50);
/// assert_eq!(tree.edge_count(), 49);
/// assert!(is_connected(&tree));
/// ```
#[must_use]
pub fn random_tree<N, E, R>(rng: &mut R, nodes: usize) -> Graph<N, E>
where
    N: Default,
    E: Default,
    R: Rng + ?Sized,
{
    let mut graph = Graph::new();
    let mut created: Vec<NodeId> = Vec::with_capacity(nodes);

    for k in 0..nodes {
        let identifier = i64::try_from(k).unwrap_or(i64::MAX);
        let node = graph.add_node_with_identifier(identifier, N::default());
        if k == 0 {
            if let Some(root) = graph.node_mut(node) {
                root.set_root(true);
            }
        } else {
            let parent = created[rng.gen_range(0..k)];
            let linked = graph.add_edge(parent, node);
            debug_assert!(linked.is_ok(), "tree endpoints are live");
        }
        created.push(node);
    }
    graph
}

/// Builds a random connected graph: a [`random_tree`] plus `extra_edges` random
/// edges between distinct nodes.
///
/// Every edge, tree edges included, gets an integral weight drawn uniformly from
/// `1..=max_weight`; a `max_weight` of `0` is treated as `1`. Extra edges may
/// duplicate existing ones. With fewer than two nodes no extra edge is added.
#[must_use]
pub fn random_connected_graph<N, E, R>(rng: &mut R, nodes: usize, extra_edges: usize, max_weight: u32) -> Graph<N, E>
where
    N: Default,
    E: Default,
    R: Rng + ?Sized,
{
    let mut graph: Graph<N, E> = random_tree(rng, nodes);
    let max_weight = max_weight.max(1);

    let tree_edges: Vec<_> = graph.edge_ids().collect();
    for edge in tree_edges {
        let weight = f64::from(rng.gen_range(1..=max_weight));
        if let Some(stored) = graph.edge_mut(edge) {
            stored.set_weight(weight);
        }
    }

    let mut extra = 0;
    if nodes >= 2 {
        let ids: Vec<NodeId> = graph.node_ids().collect();
        for _ in 0..extra_edges {
            let a = rng.gen_range(0..nodes);
            let mut b = rng.gen_range(0..nodes - 1);
            if b >= a {
                b += 1;
            }
            let (older, newer) = (ids[a.min(b)], ids[a.max(b)]);
            let weight = f64::from(rng.gen_range(1..=max_weight));
            let payload = graph.new_edge_payload();
            if graph.add_edge_with(older, newer, weight, payload).is_ok() {
                extra += 1;
            }
        }
    }

    log::debug!(
        "generated connected graph with {} nodes and {} edges ({} extra)",
        graph.node_count(),
        graph.edge_count(),
        extra
    );
    graph
}
