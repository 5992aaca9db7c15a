//! Structural equality of graphs, judged by identifiers alone.

use std::collections::{HashMap, HashSet};

use crate::graph::multigraph::Graph;

/// Returns the `(source id, sink id)` pair of every live edge, with multiplicity.
fn identifier_pairs<N, E>(graph: &Graph<N, E>) -> impl Iterator<Item = (i64, i64)> + '_ {
    graph.edges().filter_map(|(_, edge)| {
        let source = graph.node(edge.source())?.identifier();
        let sink = graph.node(edge.sink())?.identifier();
        Some((source, sink))
    })
}

/// Checks whether two graphs have the same shape in terms of identifiers.
///
/// The graphs are identical when
///
/// - their node counts and edge counts are equal,
/// - every node identifier of either graph occurs in the other, and
/// - every edge of `a`, taken as its `(source id, sink id)` pair, can be matched
///   to a distinct edge of `b` with the same pair.
///
/// Pairs are compared in order even for undirected graphs. Payloads, weights,
/// flags and layout are ignored, and so are handles, so a graph and its clone are
/// identical.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use nodegraph::{has_identical_structure_with, Graph};
///
/// let mut a: Graph<(), ()> = Graph::new();
/// a.add_edge_by_identifiers(1, 2);
/// a.add_edge_by_identifiers(2, 3);
///
/// let mut b: Graph<String, u64> = Graph::new();
/// b.add_edge_by_identifiers(2, 3);
/// b.add_edge_by_identifiers(1, 2);
/// assert!(has_identical_structure_with(&a, &b));
///
/// b.add_edge_by_identifiers(3, 1);
/// assert!(!has_identical_structure_with(&a, &b));
/// ```
#[must_use]
pub fn has_identical_structure_with<N1, E1, N2, E2>(a: &Graph<N1, E1>, b: &Graph<N2, E2>) -> bool {
    if a.node_count() != b.node_count() || a.edge_count() != b.edge_count() {
        return false;
    }

    let ids_a: HashSet<i64> = a.nodes().map(|(_, n)| n.identifier()).collect();
    let ids_b: HashSet<i64> = b.nodes().map(|(_, n)| n.identifier()).collect();
    if ids_a != ids_b {
        return false;
    }

    // Unconsumed edges of `b`, by identifier pair
    let mut unmatched: HashMap<(i64, i64), usize> = HashMap::new();
    for pair in identifier_pairs(b) {
        *unmatched.entry(pair).or_insert(0) += 1;
    }

    for pair in identifier_pairs(a) {
        match unmatched.get_mut(&pair) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}

impl<N, E> Graph<N, E> {
    /// Method form of [`has_identical_structure_with`].
    #[must_use]
    pub fn has_identical_structure_with<N2, E2>(&self, other: &Graph<N2, E2>) -> bool {
        has_identical_structure_with(self, other)
    }
}
