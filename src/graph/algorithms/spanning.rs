//! Minimum spanning trees.
//!
//! - [`kruskal`] - global edge order, forest heads tracked in a union-find
//! - [`prim`] - grows a single tree outward from a start node
//!
//! Both ignore edge direction when choosing edges and return a copy of the input
//! that keeps every node but only the selected edges. The copy has fresh, compacted
//! handles; identifiers, weights and payloads carry over.

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{
    graph::{
        algorithms::{shortest::find_tree_root, tree::tree_flow},
        edge::EdgeId,
        multigraph::{EdgeCopy, Graph},
        node::NodeId,
    },
    Result,
};

/// Union-find over node slots with path compression and union by rank.
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        DisjointSet {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = id;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Joins the sets of `a` and `b`. Returns `false` if they already were one set.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            Ordering::Less => self.parent[root_a] = root_b,
            Ordering::Greater => self.parent[root_b] = root_a,
            Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }
}

/// Heap entry: an edge and the node it would bring into the tree.
///
/// Ordered so that [`BinaryHeap`] pops the lightest edge first, the lower handle
/// winning between equal weights.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    weight: f64,
    edge: EdgeId,
    from: NodeId,
    to: NodeId,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.edge.cmp(&self.edge))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// All edges enter a min-priority heap keyed by weight. An edge is accepted when its
/// endpoints lie in different trees of the forest built so far; the search stops
/// once `|V| - 1` edges are accepted. Self-loops and parallel duplicates are never
/// accepted.
///
/// # Arguments
///
/// * `graph` - The graph to span
/// * `reroot` - When `true`, the forest is passed through [`tree_flow`] rooted at
///   the node reported by [`find_tree_root`], so its edges point away from the root
///
/// # Errors
///
/// Only the rerooting step can fail, with the errors of [`tree_flow`].
///
/// # Complexity
///
/// - Time: O(E log E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use nodegraph::{kruskal, Graph};
///
/// let mut graph: Graph<(), ()> = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// graph.add_edge_with(a, b, 1.0, ())?;
/// graph.add_edge_with(b, c, 2.0, ())?;
/// graph.add_edge_with(a, c, 5.0, ())?;
///
/// let tree = kruskal(&graph, false)?;
/// assert_eq!(tree.edge_count(), 2);
/// assert!(!tree.are_connected(a, c, false));
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn kruskal<N: Clone, E: Clone>(graph: &Graph<N, E>, reroot: bool) -> Result<Graph<N, E>> {
    let mut heap: BinaryHeap<Candidate> = graph
        .edges()
        .map(|(edge, stored)| Candidate {
            weight: stored.weight(),
            edge,
            from: stored.source(),
            to: stored.sink(),
        })
        .collect();

    let wanted = graph.node_count().saturating_sub(1);
    let mut forest = DisjointSet::new(graph.node_bound());
    let mut selected = vec![false; graph.edge_bound()];
    let mut accepted = 0;

    while accepted < wanted {
        let Some(candidate) = heap.pop() else {
            break;
        };
        if forest.union(candidate.from.index(), candidate.to.index()) {
            selected[candidate.edge.index()] = true;
            accepted += 1;
        }
    }

    log::debug!("kruskal accepted {} of {} edges", accepted, graph.edge_count());
    let tree = graph.copy_selected(|edge, _| {
        if selected[edge.index()] {
            EdgeCopy::Keep
        } else {
            EdgeCopy::Skip
        }
    });

    if reroot {
        let root = find_tree_root(&tree);
        tree_flow(&tree, root)
    } else {
        Ok(tree)
    }
}

/// Computes a minimum spanning tree of the component containing `start` with
/// Prim's algorithm.
///
/// Edges leaving the tree enter a min-priority heap; each pop that reaches a new
/// node records the edge that reached it. Nodes outside `start`'s component stay
/// in the result without edges.
///
/// # Arguments
///
/// * `graph` - The graph to span
/// * `start` - The node the tree grows from
/// * `orient` - When `true`, selected edges that point toward `start` are reversed
///   in the result, so every tree edge points away from it
///
/// # Errors
///
/// Returns [`crate::Error::NotMember`] if `start` is not a live node of `graph`.
///
/// # Complexity
///
/// - Time: O(E log E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use nodegraph::{prim, Graph};
///
/// let mut graph: Graph<(), ()> = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// graph.add_edge_with(b, a, 1.0, ())?;
/// graph.add_edge_with(b, c, 1.0, ())?;
/// graph.add_edge_with(c, a, 3.0, ())?;
///
/// let tree = prim(&graph, a, true)?;
/// assert_eq!(tree.edge_count(), 2);
/// assert!(tree.are_connected(a, b, true));
/// assert!(tree.are_connected(b, c, true));
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn prim<N: Clone, E: Clone>(graph: &Graph<N, E>, start: NodeId, orient: bool) -> Result<Graph<N, E>> {
    graph.require_member(start, "start")?;

    let mut reached = vec![false; graph.node_bound()];
    let mut chosen: Vec<EdgeCopy> = vec![EdgeCopy::Skip; graph.edge_bound()];
    let mut heap = BinaryHeap::new();

    let push_links = |heap: &mut BinaryHeap<Candidate>, from: NodeId| {
        for (edge, stored) in graph.links(from).iter().filter_map(|&e| Some((e, graph.edge(e)?))) {
            if let Some(to) = stored.opposite(from) {
                heap.push(Candidate {
                    weight: stored.weight(),
                    edge,
                    from,
                    to,
                });
            }
        }
    };

    reached[start.index()] = true;
    push_links(&mut heap, start);

    while let Some(candidate) = heap.pop() {
        if reached[candidate.to.index()] {
            continue;
        }
        reached[candidate.to.index()] = true;

        let toward_root = graph
            .edge(candidate.edge)
            .is_some_and(|edge| edge.source() != candidate.from);
        chosen[candidate.edge.index()] = if orient && toward_root {
            EdgeCopy::Reverse
        } else {
            EdgeCopy::Keep
        };
        push_links(&mut heap, candidate.to);
    }

    Ok(graph.copy_selected(|edge, _| chosen[edge.index()]))
}

#[cfg(test)]
mod tests {
    use super::DisjointSet;
    use crate::{
        config::GraphConfig,
        graph::{
            algorithms::{
                components::is_connected,
                scc::is_acyclic,
                spanning::{kruskal, prim},
            },
            multigraph::Graph,
            node::NodeId,
        },
        Error,
    };

    /// Weighted square with a diagonal:
    /// 0-1 (1), 1-2 (2), 2-3 (1), 3-0 (4), 0-2 (3)
    fn create_weighted_square() -> Graph<(), ()> {
        let mut graph = Graph::new();
        let nodes: Vec<NodeId> = (0..4).map(|_| graph.add_node(())).collect();
        for (from, to, weight) in [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0), (3, 0, 4.0), (0, 2, 3.0)] {
            graph.add_edge_with(nodes[from], nodes[to], weight, ()).unwrap();
        }
        graph
    }

    fn total_weight(graph: &Graph<(), ()>) -> f64 {
        graph.edges().map(|(_, e)| e.weight()).sum()
    }

    #[test]
    fn test_disjoint_set() {
        let mut set = DisjointSet::new(4);
        assert_ne!(set.find(0), set.find(1));
        assert!(set.union(0, 1));
        assert!(set.union(2, 3));
        assert!(!set.union(1, 0));
        assert_ne!(set.find(1), set.find(3));
        assert!(set.union(1, 3));
        assert_eq!(set.find(0), set.find(2));
    }

    #[test]
    fn test_kruskal_minimum_weight() {
        let graph = create_weighted_square();
        let tree = kruskal(&graph, false).unwrap();

        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.edge_count(), 3);
        assert_eq!(total_weight(&tree), 4.0);
        assert!(is_connected(&tree));
        assert!(is_acyclic(&tree));
    }

    #[test]
    fn test_kruskal_keeps_identifiers() {
        let graph = create_weighted_square();
        let tree = kruskal(&graph, false).unwrap();
        let ids: Vec<i64> = tree.edges().map(|(_, e)| e.identifier()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_kruskal_skips_loops_and_parallel_edges() {
        let mut graph: Graph<(), ()> = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge_with(a, a, 0.0, ()).unwrap();
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, a).unwrap();

        let tree = kruskal(&graph, false).unwrap();
        assert_eq!(tree.edge_count(), 1);
        assert!(tree.edges().all(|(_, e)| !e.is_self_loop()));
    }

    #[test]
    fn test_kruskal_forest() {
        let mut graph: Graph<(), ()> = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        let d = graph.add_node(());
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, a).unwrap();
        graph.add_edge(c, d).unwrap();

        let tree = kruskal(&graph, false).unwrap();
        assert_eq!(tree.edge_count(), 2);
    }

    #[test]
    fn test_kruskal_reroot() {
        // Star around 1 whose edges all point at the center
        let mut graph: Graph<(), ()> = Graph::new();
        let nodes: Vec<NodeId> = (0..4).map(|_| graph.add_node(())).collect();
        graph.add_edge(nodes[0], nodes[1]).unwrap();
        graph.add_edge(nodes[2], nodes[1]).unwrap();
        graph.add_edge(nodes[3], nodes[1]).unwrap();

        let tree = kruskal(&graph, true).unwrap();
        assert_eq!(tree.edge_count(), 3);
        assert_eq!(tree.roots().count(), 1);
        let root = tree.roots().next().unwrap();
        assert_eq!(tree.in_degree(root), 0);
        assert!(tree.node_ids().filter(|&n| n != root).all(|n| tree.in_degree(n) == 1));
    }

    #[test]
    fn test_kruskal_empty_graph() {
        let graph: Graph<(), ()> = Graph::new();
        let tree = kruskal(&graph, true).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_prim_matches_kruskal_weight() {
        let graph = create_weighted_square();
        let tree = prim(&graph, NodeId::new(3), false).unwrap();

        assert_eq!(tree.edge_count(), 3);
        assert_eq!(total_weight(&tree), 4.0);
        assert!(is_connected(&tree));
    }

    #[test]
    fn test_prim_orient_points_away_from_start() {
        let graph = create_weighted_square();
        let start = NodeId::new(3);
        let tree = prim(&graph, start, true).unwrap();

        assert_eq!(tree.in_degree(start), 0);
        for node in [0, 1, 2] {
            assert_eq!(tree.in_degree(NodeId::new(node)), 1);
        }
        // Every selected edge was reached against its direction
        let reversed = tree.edges().filter(|(_, e)| e.is_reversed()).count();
        assert_eq!(reversed, 3);
    }

    #[test]
    fn test_prim_without_orient_keeps_directions() {
        let graph = create_weighted_square();
        let tree = prim(&graph, NodeId::new(3), false).unwrap();
        assert!(tree.edges().all(|(_, e)| !e.is_reversed()));
        assert!(tree.are_connected(NodeId::new(2), NodeId::new(3), true));
    }

    #[test]
    fn test_prim_spans_only_start_component() {
        let mut graph: Graph<(), ()> = Graph::with_config(GraphConfig::undirected());
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        let d = graph.add_node(());
        graph.add_edge(a, b).unwrap();
        graph.add_edge(c, d).unwrap();

        let tree = prim(&graph, a, false).unwrap();
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.edge_count(), 1);
        assert!(tree.are_connected(a, b, false));
    }

    #[test]
    fn test_prim_rejects_foreign_start() {
        let graph = create_weighted_square();
        let err = prim(&graph, NodeId::new(17), false).unwrap_err();
        assert!(matches!(err, Error::NotMember(_)));
    }
}
