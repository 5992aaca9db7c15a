//! Topological sorting.
//!
//! A topological ordering is a linear ordering of vertices such that for every
//! directed edge (u, v), vertex u comes before v in the ordering. It exists if and
//! only if the graph has no cycle.
//!
//! The ordering is the reverse of the depth-first finishing order. Each node carries
//! a three-state marker (unvisited, in progress, finished); reaching an in-progress
//! node means a back edge, so the graph is cyclic and no ordering exists.

use crate::graph::{node::NodeId, traits::Successors};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Finished,
}

/// Computes a topological ordering of all nodes of a graph.
///
/// Roots are taken in insertion order and successors in adjacency order, so the
/// result is deterministic.
///
/// # Arguments
///
/// * `graph` - The graph to sort topologically
///
/// # Returns
///
/// `Some(order)` with every source before every sink it reaches, or `None` if the
/// graph contains a cycle (self-loops included). In an undirected graph every edge
/// can be walked back, so any edge makes the result `None`.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use nodegraph::{topological_sort, Graph};
///
/// // A simple DAG: A -> B -> D, A -> C -> D
/// let mut graph: Graph<&str, ()> = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// let d = graph.add_node("D");
/// graph.add_edge(a, b)?;
/// graph.add_edge(a, c)?;
/// graph.add_edge(b, d)?;
/// graph.add_edge(c, d)?;
///
/// let order = topological_sort(&graph).unwrap();
/// let pos = |n| order.iter().position(|&x| x == n).unwrap();
/// assert!(pos(a) < pos(b) && pos(a) < pos(c));
/// assert!(pos(b) < pos(d) && pos(c) < pos(d));
///
/// graph.add_edge(d, a)?;
/// assert!(topological_sort(&graph).is_none());
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn topological_sort<G: Successors>(graph: &G) -> Option<Vec<NodeId>> {
    let mut marks = vec![Mark::Unvisited; graph.node_bound()];
    let mut finished = Vec::with_capacity(graph.node_count());
    let mut stack: Vec<(NodeId, Vec<NodeId>, usize)> = Vec::new();

    for root in graph.node_ids() {
        if marks[root.index()] != Mark::Unvisited {
            continue;
        }

        marks[root.index()] = Mark::InProgress;
        stack.push((root, graph.successors(root).collect(), 0));

        while let Some((node, successors, next)) = stack.last_mut() {
            let Some(&succ) = successors.get(*next) else {
                marks[node.index()] = Mark::Finished;
                finished.push(*node);
                stack.pop();
                continue;
            };
            *next += 1;

            match marks[succ.index()] {
                Mark::InProgress => {
                    log::trace!("back edge {} -> {}, no topological order", node, succ);
                    return None;
                }
                Mark::Unvisited => {
                    marks[succ.index()] = Mark::InProgress;
                    stack.push((succ, graph.successors(succ).collect(), 0));
                }
                Mark::Finished => {}
            }
        }
    }

    finished.reverse();
    Some(finished)
}
