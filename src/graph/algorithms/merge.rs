//! Combining two graphs by node identifier.

use std::collections::HashMap;

use crate::graph::{multigraph::Graph, node::NodeId};

/// Merges `other` into a copy of `base`, matching nodes by identifier.
///
/// - A node of `other` whose identifier is absent from `base` is copied together
///   with all of its outgoing edges.
/// - For a node already present, each outgoing edge is added only if the matching
///   result node has no link with the same `(source id, sink id)` pair yet.
///
/// The pair check inspects the node's full link list and compares identifiers in
/// order, so in a directed graph `a -> b` does not hide `b -> a`. When identifiers
/// repeat inside one graph, the first node carrying an identifier is the one merged
/// into. The result keeps `base`'s configuration and payload factories; to merge two
/// unrelated graphs side by side, shift one of them into a disjoint identifier
/// range first with [`Graph::shift_identifiers`].
///
/// # Complexity
///
/// - Time: O(V + E * d), `d` being the largest degree of a shared node
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use nodegraph::{merge, Graph};
///
/// let mut left: Graph<(), ()> = Graph::new();
/// left.add_edge_by_identifiers(0, 1);
///
/// let mut right: Graph<(), ()> = Graph::new();
/// right.add_edge_by_identifiers(0, 1);
/// right.add_edge_by_identifiers(1, 2);
///
/// let merged = merge(&left, &right);
/// assert_eq!(merged.node_count(), 3);
/// assert_eq!(merged.edge_count(), 2);
/// ```
#[must_use]
pub fn merge<N: Clone, E: Clone>(base: &Graph<N, E>, other: &Graph<N, E>) -> Graph<N, E> {
    let mut result = base.clone();

    let mut by_identifier: HashMap<i64, NodeId> = HashMap::new();
    for (id, node) in result.nodes() {
        by_identifier.entry(node.identifier()).or_insert(id);
    }

    let mut remap: Vec<Option<NodeId>> = vec![None; other.node_bound()];
    let mut fresh = vec![false; other.node_bound()];
    for (id, node) in other.nodes() {
        let target = match by_identifier.get(&node.identifier()) {
            Some(&existing) => existing,
            None => {
                let copied = result.insert_node_copy(node);
                by_identifier.insert(node.identifier(), copied);
                fresh[id.index()] = true;
                copied
            }
        };
        remap[id.index()] = Some(target);
    }

    let mut added = 0;
    for (_, edge) in other.edges() {
        let (source, sink) = edge.endpoints();
        let (Some(from), Some(to)) = (remap[source.index()], remap[sink.index()]) else {
            continue;
        };

        if !fresh[source.index()] && has_link_between(&result, from, to) {
            continue;
        }
        result.insert_edge_copy(edge, from, to);
        added += 1;
    }

    log::debug!(
        "merged {} nodes and {} edges into a graph of {} nodes",
        other.node_count(),
        added,
        base.node_count()
    );
    result
}

/// Looks for a link of `from` whose endpoint identifiers equal those of `from` and
/// `to`, in that order.
fn has_link_between<N, E>(graph: &Graph<N, E>, from: NodeId, to: NodeId) -> bool {
    let identifier = |node: NodeId| graph.node(node).map(|n| n.identifier());
    let wanted = (identifier(from), identifier(to));

    graph
        .links(from)
        .iter()
        .filter_map(|&e| graph.edge(e))
        .any(|edge| (identifier(edge.source()), identifier(edge.sink())) == wanted)
}
