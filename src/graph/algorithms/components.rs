//! Weakly connected components.
//!
//! Connectivity here ignores edge direction: two nodes share a component when a
//! chain of edges, followed either way, joins them. The flood fill runs on a
//! work list, so component size is bounded by heap memory rather than the call
//! stack.

use crate::graph::{multigraph::Graph, node::NodeId, traits::Neighbors};

/// Labels every live node with the index of its component.
///
/// Returns the label vector (indexed by [`NodeId::index`], `None` for removed slots)
/// and the number of components. Components are numbered in the order of their
/// first node.
pub fn component_labels<G: Neighbors>(graph: &G) -> (Vec<Option<usize>>, usize) {
    let mut labels = vec![None; graph.node_bound()];
    let mut count = 0;
    let mut work = Vec::new();

    for start in graph.node_ids() {
        if labels[start.index()].is_some() {
            continue;
        }

        labels[start.index()] = Some(count);
        work.push(start);
        while let Some(node) = work.pop() {
            for next in graph.neighbors(node) {
                if labels[next.index()].is_none() {
                    labels[next.index()] = Some(count);
                    work.push(next);
                }
            }
        }
        count += 1;
    }

    (labels, count)
}

/// Computes the connected components of a graph, ignoring edge direction.
///
/// # Returns
///
/// One vector per component, ordered by the component's first node. Members keep
/// the graph's insertion order.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use nodegraph::{connected_components, Graph};
///
/// let mut graph: Graph<(), ()> = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// graph.add_edge(b, a)?;
///
/// assert_eq!(connected_components(&graph), vec![vec![a, b], vec![c]]);
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn connected_components<G: Neighbors>(graph: &G) -> Vec<Vec<NodeId>> {
    let (labels, count) = component_labels(graph);
    let mut components = vec![Vec::new(); count];
    for node in graph.node_ids() {
        if let Some(label) = labels[node.index()] {
            components[label].push(node);
        }
    }
    components
}

/// Returns the number of connected components. An empty graph has none.
pub fn number_of_components<G: Neighbors>(graph: &G) -> usize {
    component_labels(graph).1
}

/// Returns `true` if the graph consists of exactly one connected component.
///
/// An empty graph is not connected.
pub fn is_connected<G: Neighbors>(graph: &G) -> bool {
    number_of_components(graph) == 1
}

/// Splits a graph into one independent graph per connected component.
///
/// Each piece shares the source graph's configuration and payload factories. Nodes
/// and edges keep their identifiers, weights, flags, layout and payloads, and appear
/// in the same relative order as in the source graph.
///
/// # Examples
///
/// ```rust
/// use nodegraph::{split, Graph};
///
/// let mut graph: Graph<&str, ()> = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// let d = graph.add_node("D");
/// graph.add_edge(a, b)?;
/// graph.add_edge(d, c)?;
///
/// let parts = split(&graph);
/// assert_eq!(parts.len(), 2);
/// assert!(parts.iter().all(|part| part.node_count() == 2 && part.edge_count() == 1));
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn split<N: Clone, E: Clone>(graph: &Graph<N, E>) -> Vec<Graph<N, E>> {
    let (labels, count) = component_labels(graph);
    let mut parts: Vec<Graph<N, E>> = (0..count).map(|_| graph.empty_like()).collect();
    let mut remap: Vec<Option<NodeId>> = vec![None; graph.node_bound()];

    for (id, node) in graph.nodes() {
        if let Some(label) = labels[id.index()] {
            remap[id.index()] = Some(parts[label].insert_node_copy(node));
        }
    }

    for (_, edge) in graph.edges() {
        let (source, sink) = edge.endpoints();
        let Some(label) = labels[source.index()] else {
            continue;
        };
        if let (Some(from), Some(to)) = (remap[source.index()], remap[sink.index()]) {
            parts[label].insert_edge_copy(edge, from, to);
        }
    }

    log::debug!("split graph with {} nodes into {} components", graph.node_count(), count);
    parts
}
