//! Distances and paths.
//!
//! - [`all_pairs_distances`] - hop counts between every ordered pair of nodes
//! - [`find_tree_root`] - the node whose farthest reachable node is farthest away
//! - [`dijkstra`] - weighted shortest path between two nodes
//! - [`find_longest_path`] - longest path (in edges) of an acyclic graph
//!
//! Hop-count searches follow [`Successors`]; in an undirected graph that is every
//! incident edge.

use std::{
    cmp::Reverse,
    collections::{HashMap, VecDeque},
};

use rayon::prelude::*;

use crate::{
    graph::{
        algorithms::{components::component_labels, topological::topological_sort},
        multigraph::Graph,
        node::NodeId,
        path::{GraphPath, Twig},
        traits::Successors,
    },
    Result,
};

/// Breadth-first hop counts from `source` to every node it reaches, itself included.
fn distances_from<G: Successors>(graph: &G, source: NodeId) -> Vec<(NodeId, usize)> {
    let mut seen = vec![false; graph.node_bound()];
    seen[source.index()] = true;
    let mut queue = VecDeque::from([(source, 0usize)]);
    let mut reached = Vec::new();

    while let Some((node, distance)) = queue.pop_front() {
        reached.push((node, distance));
        for next in graph.successors(node) {
            if !seen[next.index()] {
                seen[next.index()] = true;
                queue.push_back((next, distance + 1));
            }
        }
    }
    reached
}

/// Computes hop distances between every ordered pair `(from, to)` where `to` is
/// reachable from `from`.
///
/// Each source is searched independently on the rayon thread pool; the graph is
/// only read. Unreachable pairs are absent from the map and every node is at
/// distance `0` from itself.
///
/// # Complexity
///
/// - Time: O(V * (V + E)) total work
/// - Space: O(V²) for the result
///
/// # Examples
///
/// ```rust
/// use nodegraph::{all_pairs_distances, Graph};
///
/// let mut graph: Graph<(), ()> = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
///
/// let distances = all_pairs_distances(&graph);
/// assert_eq!(distances.get(&(a, c)), Some(&2));
/// assert_eq!(distances.get(&(c, a)), None);
/// assert_eq!(distances.get(&(b, b)), Some(&0));
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn all_pairs_distances<G>(graph: &G) -> HashMap<(NodeId, NodeId), usize>
where
    G: Successors + Sync,
{
    let sources: Vec<NodeId> = graph.node_ids().collect();
    sources
        .par_iter()
        .flat_map_iter(|&source| {
            distances_from(graph, source)
                .into_iter()
                .map(move |(target, distance)| ((source, target), distance))
        })
        .collect()
}

/// Returns the node whose farthest reachable node is at the greatest hop distance.
///
/// Ties are resolved toward the earliest node in insertion order. For a tree whose
/// edges point away from its root this is the root. Returns `None` for an empty
/// graph.
///
/// # Examples
///
/// ```rust
/// use nodegraph::{find_tree_root, Graph};
///
/// let mut graph: Graph<(), ()> = Graph::new();
/// let leaf = graph.add_node(());
/// let root = graph.add_node(());
/// let middle = graph.add_node(());
/// graph.add_edge(root, middle)?;
/// graph.add_edge(middle, leaf)?;
///
/// assert_eq!(find_tree_root(&graph), Some(root));
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn find_tree_root<G: Successors>(graph: &G) -> Option<NodeId> {
    let mut best: Option<(NodeId, usize)> = None;
    for node in graph.node_ids() {
        let farthest = distances_from(graph, node)
            .into_iter()
            .map(|(_, distance)| distance)
            .max()
            .unwrap_or(0);
        if best.map_or(true, |(_, top)| farthest > top) {
            best = Some((node, farthest));
        }
    }
    best.map(|(node, _)| node)
}

/// Finds the lightest path from `source` to `target`.
///
/// Edge weights are honored. The next node to settle is picked by a linear scan over
/// the tentative distances, and every reached node records a [`Twig`] to its
/// predecessor, from which the path is rebuilt.
///
/// # Arguments
///
/// * `graph` - The graph to search
/// * `source` - The start node
/// * `target` - The destination node
///
/// # Returns
///
/// - `Ok(None)` if the two nodes lie in different connected components, if `target`
///   cannot be reached along edge directions, or if the path would have fewer than
///   two nodes (`source == target`)
/// - `Ok(Some(path))` otherwise
///
/// # Errors
///
/// - [`crate::Error::NotMember`] if `source` or `target` is not a live node
/// - [`crate::Error::InvalidArgument`] if the graph holds a negative or NaN weight
///
/// # Complexity
///
/// - Time: O(V² + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use nodegraph::{dijkstra, Graph};
///
/// let mut graph: Graph<(), ()> = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// graph.add_edge_with(a, b, 1.0, ())?;
/// graph.add_edge_with(b, c, 1.0, ())?;
/// graph.add_edge_with(a, c, 5.0, ())?;
///
/// let path = dijkstra(&graph, a, c)?.unwrap();
/// assert_eq!(path.nodes(), &[a, b, c]);
/// assert_eq!(path.weight(), 2.0);
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn dijkstra<N, E>(graph: &Graph<N, E>, source: NodeId, target: NodeId) -> Result<Option<GraphPath>> {
    graph.require_member(source, "source")?;
    graph.require_member(target, "target")?;

    if let Some((edge, _)) = graph
        .edges()
        .find(|(_, edge)| edge.weight().is_nan() || edge.weight() < 0.0)
    {
        log::warn!("dijkstra rejected {edge}: weights must be non-negative");
        return Err(invalid_argument!("edge {} has a negative or NaN weight", edge));
    }

    let (labels, _) = component_labels(graph);
    if labels[source.index()] != labels[target.index()] {
        return Ok(None);
    }

    let bound = graph.node_bound();
    let mut distance = vec![f64::INFINITY; bound];
    let mut settled = vec![false; bound];
    let mut twigs: Vec<Option<Twig>> = vec![None; bound];
    distance[source.index()] = 0.0;

    loop {
        let closest = graph
            .node_ids()
            .filter(|n| !settled[n.index()] && distance[n.index()].is_finite())
            .min_by(|a, b| distance[a.index()].total_cmp(&distance[b.index()]));
        let Some(u) = closest else {
            break;
        };
        if u == target {
            break;
        }
        settled[u.index()] = true;

        for (e, edge) in graph.outgoing_edges(u) {
            let Some(v) = edge.opposite(u) else {
                continue;
            };
            let candidate = distance[u.index()] + edge.weight();
            if candidate < distance[v.index()] {
                distance[v.index()] = candidate;
                twigs[v.index()] = Some(Twig { node: u, edge: e });
            }
        }
    }

    if !distance[target.index()].is_finite() {
        return Ok(None);
    }

    let path = GraphPath::from_twigs(graph, &twigs, target);
    if path.nodes().len() < 2 {
        return Ok(None);
    }
    log::trace!("shortest path {source} -> {target}: {} edges", path.length());
    Ok(Some(path))
}

/// Finds a longest path (by edge count) of an acyclic graph.
///
/// Nodes are relaxed in topological order with unit weights. The path ends at the
/// node with the greatest distance and is rebuilt from predecessor edges. Ties go
/// to the node inserted first.
///
/// # Returns
///
/// `None` if the graph is empty or contains a cycle. A graph without edges yields a
/// single-node path.
///
/// # Examples
///
/// ```rust
/// use nodegraph::{find_longest_path, Graph};
///
/// let mut graph: Graph<(), ()> = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// let d = graph.add_node(());
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
/// graph.add_edge(a, d)?;
///
/// let path = find_longest_path(&graph).unwrap();
/// assert_eq!(path.nodes(), &[a, b, c]);
/// assert_eq!(path.length(), 2);
/// # Ok::<(), nodegraph::Error>(())
/// ```
#[must_use]
pub fn find_longest_path<N, E>(graph: &Graph<N, E>) -> Option<GraphPath> {
    let order = topological_sort(graph)?;

    let bound = graph.node_bound();
    let mut distance = vec![0usize; bound];
    let mut twigs: Vec<Option<Twig>> = vec![None; bound];

    for &u in &order {
        for (e, edge) in graph.outgoing_edges(u) {
            let Some(v) = edge.opposite(u) else {
                continue;
            };
            if distance[u.index()] + 1 > distance[v.index()] {
                distance[v.index()] = distance[u.index()] + 1;
                twigs[v.index()] = Some(Twig { node: u, edge: e });
            }
        }
    }

    let end = graph
        .node_ids()
        .min_by_key(|node| Reverse(distance[node.index()]))?;

    Some(GraphPath::from_twigs(graph, &twigs, end))
}
