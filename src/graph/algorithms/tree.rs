//! Tree flow: reinterpreting an acyclic graph as a forest of parent → child edges.

use crate::{
    graph::{
        algorithms::scc::is_acyclic,
        multigraph::{EdgeCopy, Graph},
        node::NodeId,
    },
    Error, Result,
};

/// Reorients an acyclic graph so that every edge points from parent to child.
///
/// The walk follows all links, ignoring direction, starting at `root` (when given)
/// and then at every node still unvisited, in insertion order, so forests get one
/// root per component. Every node that starts a walk carries the root marker in
/// the result; every other node has it cleared.
///
/// The result is a fresh directed graph holding copies of all nodes and of the
/// edges the walk used. An edge that was walked against its direction is stored
/// parent → child with its reversed flag toggled. Edges the walk did not need
/// (for example the second path into the bottom of a diamond) are not copied.
///
/// # Arguments
///
/// * `graph` - The graph to reorient
/// * `root` - The node to grow the first tree from, or `None` to start at the
///   first node
///
/// # Errors
///
/// - [`Error::NotAcyclic`] if the graph contains a cycle
/// - [`Error::NotMember`] if `root` is not a live node of `graph`
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use nodegraph::{tree_flow, Graph};
///
/// // a <- b -> c, rooted at a
/// let mut graph: Graph<&str, ()> = Graph::new();
/// let a = graph.add_node("a");
/// let b = graph.add_node("b");
/// let c = graph.add_node("c");
/// graph.add_edge(b, a)?;
/// graph.add_edge(b, c)?;
///
/// let tree = tree_flow(&graph, Some(a))?;
/// assert_eq!(tree.roots().collect::<Vec<_>>(), vec![a]);
/// assert!(tree.are_connected(a, b, true));
/// assert!(tree.are_connected(b, c, true));
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn tree_flow<N: Clone, E: Clone>(graph: &Graph<N, E>, root: Option<NodeId>) -> Result<Graph<N, E>> {
    if let Some(root) = root {
        graph.require_member(root, "tree root")?;
    }
    if !is_acyclic(graph) {
        return Err(Error::NotAcyclic);
    }

    let mut visited = vec![false; graph.node_bound()];
    let mut starts = vec![false; graph.node_bound()];
    // Some(flipped) for every edge of the forest
    let mut tree_edges: Vec<Option<bool>> = vec![None; graph.edge_bound()];
    let mut work = Vec::new();

    for start in root.into_iter().chain(graph.node_ids()) {
        if visited[start.index()] {
            continue;
        }
        visited[start.index()] = true;
        starts[start.index()] = true;
        work.push(start);

        while let Some(parent) = work.pop() {
            for &e in graph.links(parent) {
                let Some(edge) = graph.edge(e) else {
                    continue;
                };
                let Some(child) = edge.opposite(parent) else {
                    continue;
                };
                if visited[child.index()] {
                    continue;
                }
                visited[child.index()] = true;
                tree_edges[e.index()] = Some(edge.source() != parent);
                work.push(child);
            }
        }
    }

    let mut tree = graph.copy_selected(|e, _| match tree_edges[e.index()] {
        None => EdgeCopy::Skip,
        Some(false) => EdgeCopy::Keep,
        Some(true) => EdgeCopy::Reverse,
    });
    tree.set_directed(true);

    // copy_selected issues handles densely in insertion order
    for (position, original) in graph.node_ids().enumerate() {
        if let Some(node) = tree.node_mut(NodeId::new(position)) {
            node.set_root(starts[original.index()]);
        }
    }

    log::debug!(
        "tree flow over {} nodes kept {} of {} edges",
        graph.node_count(),
        tree.edge_count(),
        graph.edge_count()
    );
    Ok(tree)
}
