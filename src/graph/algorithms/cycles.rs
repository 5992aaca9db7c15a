//! Cycle queries limited to the part of a graph reachable from a start node.
//!
//! Both queries run a three-state depth-first search (unvisited, in progress,
//! finished) on an explicit frame stack. An edge into an in-progress node is a back
//! edge and closes a cycle; the in-progress nodes are exactly the frames on the
//! stack, which yields the cycle path directly.
//!
//! In an undirected graph every link is walkable both ways, so the edge a frame
//! was entered through is not taken back. The parent is tracked by edge rather
//! than by node: a second, parallel edge to the parent still closes a cycle.
//!
//! Whole-graph questions are answered by [`crate::is_acyclic`] and
//! [`crate::find_cycles`].

use crate::graph::{edge::EdgeId, multigraph::Graph, node::NodeId};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Finished,
}

struct Frame {
    node: NodeId,
    entered_by: Option<EdgeId>,
    links: Vec<(EdgeId, NodeId)>,
    next: usize,
}

impl Frame {
    fn new<N, E>(graph: &Graph<N, E>, node: NodeId, entered_by: Option<EdgeId>) -> Self {
        let links = graph
            .outgoing_edges(node)
            .filter_map(|(id, edge)| edge.opposite(node).map(|other| (id, other)))
            .collect();
        Frame {
            node,
            entered_by,
            links,
            next: 0,
        }
    }
}

/// Checks if the graph contains a cycle reachable from the start node.
///
/// # Arguments
///
/// * `graph` - The graph to check for cycles
/// * `start` - The starting node for the search
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use nodegraph::{has_cycle, Graph};
///
/// let mut graph: Graph<(), ()> = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
/// assert!(!has_cycle(&graph, a));
///
/// graph.add_edge(c, a)?;
/// assert!(has_cycle(&graph, a));
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn has_cycle<N, E>(graph: &Graph<N, E>, start: NodeId) -> bool {
    find_cycle(graph, start).is_some()
}

/// Finds a cycle reachable from the start node.
///
/// # Returns
///
/// `Some(path)` where the path starts and ends with the same node, or `None` if no
/// cycle is reachable (including when `start` is not a live node). A self-loop is
/// reported as `[n, n]`. In an undirected graph a single edge is not a cycle, but
/// two parallel edges are.
///
/// # Examples
///
/// ```rust
/// use nodegraph::{find_cycle, Graph};
///
/// let mut graph: Graph<char, ()> = Graph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
/// graph.add_edge(c, b)?;
///
/// assert_eq!(find_cycle(&graph, a), Some(vec![b, c, b]));
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn find_cycle<N, E>(graph: &Graph<N, E>, start: NodeId) -> Option<Vec<NodeId>> {
    if !graph.contains_node(start) {
        return None;
    }

    let undirected = !graph.is_directed();
    let mut marks = vec![Mark::Unvisited; graph.node_bound()];
    marks[start.index()] = Mark::InProgress;
    let mut stack = vec![Frame::new(graph, start, None)];

    while let Some(frame) = stack.last_mut() {
        let Some(&(edge, next)) = frame.links.get(frame.next) else {
            marks[frame.node.index()] = Mark::Finished;
            stack.pop();
            continue;
        };
        frame.next += 1;
        if undirected && frame.entered_by == Some(edge) {
            continue;
        }

        match marks[next.index()] {
            Mark::InProgress => {
                let from = stack.iter().position(|f| f.node == next)?;
                let mut cycle: Vec<NodeId> = stack[from..].iter().map(|f| f.node).collect();
                cycle.push(next);
                return Some(cycle);
            }
            Mark::Unvisited => {
                marks[next.index()] = Mark::InProgress;
                stack.push(Frame::new(graph, next, Some(edge)));
            }
            Mark::Finished => {}
        }
    }

    None
}
