//! Graph traversal algorithms.
//!
//! This module provides depth-first and breadth-first traversal over any graph
//! implementing [`Successors`]. In a directed [`crate::Graph`] successors follow
//! outgoing edges; in an undirected one they are the opposite endpoint of every link.
//!
//! # Algorithms
//!
//! - [`dfs`] - Depth-first search iterator (pre-order)
//! - [`bfs`] - Breadth-first search iterator
//! - [`depth_first`] / [`breadth_first`] - Traversals driving a [`Visitor`]
//! - [`postorder`] - Depth-first search with post-order visitation
//! - [`reverse_postorder`] - Reverse post-order
//!
//! # Iteration vs Collection
//!
//! The [`dfs`] and [`bfs`] functions return iterators for lazy evaluation,
//! avoiding unnecessary allocations when only partial traversal is needed.
//! The [`postorder`] and [`reverse_postorder`] functions return collected
//! vectors since the order requires full traversal anyway.
//!
//! Every depth-first routine runs on an explicit stack of `(node, next-child)` frames,
//! so arbitrarily deep graphs do not grow the call stack.

use std::{collections::VecDeque, ops::ControlFlow};

use crate::graph::{node::NodeId, traits::Successors, visitor::Visitor};

/// One event of a depth-first walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// The node was discovered
    Enter {
        node: NodeId,
        depth: usize,
        parent: Option<NodeId>,
    },
    /// All descendants of the node have been finished
    Exit(NodeId),
}

struct Frame {
    node: NodeId,
    depth: usize,
    children: Vec<NodeId>,
    next: usize,
}

/// Lazy depth-first walk emitting enter and exit events.
pub(crate) struct Walk<'g, G: Successors> {
    graph: &'g G,
    stack: Vec<Frame>,
    visited: Vec<bool>,
    start: Option<NodeId>,
}

impl<'g, G: Successors> Walk<'g, G> {
    pub(crate) fn new(graph: &'g G, start: NodeId) -> Self {
        Walk {
            graph,
            stack: Vec::new(),
            visited: vec![false; graph.node_bound()],
            start: graph.contains_node(start).then_some(start),
        }
    }

    fn enter(&mut self, node: NodeId, depth: usize, parent: Option<NodeId>) -> Step {
        self.visited[node.index()] = true;
        self.stack.push(Frame {
            node,
            depth,
            children: self.graph.successors(node).collect(),
            next: 0,
        });
        Step::Enter {
            node,
            depth,
            parent,
        }
    }
}

impl<G: Successors> Iterator for Walk<'_, G> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if let Some(start) = self.start.take() {
            return Some(self.enter(start, 0, None));
        }

        loop {
            let frame = self.stack.last_mut()?;
            if let Some(&child) = frame.children.get(frame.next) {
                frame.next += 1;
                let (parent, depth) = (frame.node, frame.depth + 1);
                if !self.visited[child.index()] {
                    return Some(self.enter(child, depth, Some(parent)));
                }
            } else {
                let node = frame.node;
                self.stack.pop();
                return Some(Step::Exit(node));
            }
        }
    }
}

/// Depth-first search iterator over graph nodes.
///
/// Visits each node reachable from the start exactly once, in pre-order, taking
/// successors in adjacency order.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Successors`]
pub struct DfsIterator<'g, G: Successors> {
    walk: Walk<'g, G>,
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Step::Enter { node, .. } = self.walk.next()? {
                return Some(node);
            }
        }
    }
}

/// Returns a depth-first search iterator starting from the given node.
///
/// Nodes not reachable from the start node are not visited. A start handle that
/// is not live yields an empty iteration.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The starting node for traversal
///
/// # Complexity
///
/// - Time: O(V + E) where V is the number of vertices and E is the number of edges
/// - Space: O(V + E) for the visited set and the frame stack
///
/// # Examples
///
/// ```rust
/// use nodegraph::{dfs, Graph, NodeId};
///
/// let mut graph: Graph<&str, ()> = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// let d = graph.add_node("D");
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, d)?;
/// graph.add_edge(a, c)?;
///
/// let order: Vec<NodeId> = dfs(&graph, a).collect();
/// assert_eq!(order, vec![a, b, d, c]);
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn dfs<G: Successors>(graph: &G, start: NodeId) -> DfsIterator<'_, G> {
    DfsIterator {
        walk: Walk::new(graph, start),
    }
}

/// Breadth-first search iterator over graph nodes.
///
/// Visits each reachable node exactly once, exploring all nodes at distance d
/// before visiting any node at distance d+1.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Successors`]
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<NodeId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        if !graph.contains_node(start) {
            return BfsIterator {
                graph,
                queue: VecDeque::new(),
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; graph.node_bound()];
        visited[start.index()] = true;

        let mut queue = VecDeque::new();
        queue.push_back(start);

        BfsIterator {
            graph,
            queue,
            visited,
        }
    }
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;

        for succ in self.graph.successors(node) {
            if !self.visited[succ.index()] {
                self.visited[succ.index()] = true;
                self.queue.push_back(succ);
            }
        }

        Some(node)
    }
}

/// Returns a breadth-first search iterator starting from the given node.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The starting node for traversal
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited set and queue
///
/// # Examples
///
/// ```rust
/// use nodegraph::{bfs, Graph, NodeId};
///
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
/// let order: Vec<NodeId> = bfs(&graph, a).collect();
/// assert_eq!(order, vec![a, b, c, d]);
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn bfs<G: Successors>(graph: &G, start: NodeId) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, start)
}

/// Breadth-first traversal reporting each node to a [`Visitor`].
///
/// The visitor is called when a node is dequeued, with its BFS depth and the node
/// it was discovered from. Returning [`ControlFlow::Break`] stops the traversal
/// before the next dequeue.
///
/// # Returns
///
/// [`ControlFlow::Break`] if the visitor stopped the traversal,
/// [`ControlFlow::Continue`] if every reachable node was visited.
pub fn breadth_first<G: Successors>(graph: &G, start: NodeId, mut visitor: Visitor<'_>) -> ControlFlow<()> {
    if !graph.contains_node(start) {
        return ControlFlow::Continue(());
    }

    let mut visited = vec![false; graph.node_bound()];
    visited[start.index()] = true;
    let mut queue = VecDeque::from([(start, 0usize, None)]);

    while let Some((node, depth, parent)) = queue.pop_front() {
        visitor.visit(node, depth, parent)?;

        for succ in graph.successors(node) {
            if !visited[succ.index()] {
                visited[succ.index()] = true;
                queue.push_back((succ, depth + 1, Some(node)));
            }
        }
    }
    ControlFlow::Continue(())
}

/// Depth-first (pre-order) traversal reporting each node to a [`Visitor`].
///
/// The visitor is called when a node is discovered, with its depth in the DFS tree
/// and its DFS parent. Returning [`ControlFlow::Break`] stops the traversal before
/// the next node is discovered.
///
/// # Examples
///
/// ```rust
/// use std::ops::ControlFlow;
///
/// use nodegraph::{depth_first, Graph, NodeId, Visitor};
///
/// let mut graph: Graph<(), ()> = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
///
/// let mut tree = Vec::new();
/// let mut record = |node: NodeId, parent: Option<NodeId>| {
///     tree.push((node, parent));
///     ControlFlow::Continue(())
/// };
/// let flow = depth_first(&graph, a, Visitor::Parent(&mut record));
///
/// assert!(flow.is_continue());
/// assert_eq!(tree, vec![(a, None), (b, Some(a)), (c, Some(b))]);
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn depth_first<G: Successors>(graph: &G, start: NodeId, mut visitor: Visitor<'_>) -> ControlFlow<()> {
    for step in Walk::new(graph, start) {
        if let Step::Enter {
            node,
            depth,
            parent,
        } = step
        {
            visitor.visit(node, depth, parent)?;
        }
    }
    ControlFlow::Continue(())
}

/// Computes the postorder traversal of nodes reachable from the start.
///
/// In postorder, a node is emitted after all its descendants have been emitted.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The starting node for traversal
///
/// # Examples
///
/// ```rust
/// use nodegraph::{postorder, Graph};
///
/// let mut graph: Graph<&str, ()> = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
///
/// assert_eq!(postorder(&graph, a), vec![c, b, a]);
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn postorder<G: Successors>(graph: &G, start: NodeId) -> Vec<NodeId> {
    Walk::new(graph, start)
        .filter_map(|step| match step {
            Step::Exit(node) => Some(node),
            Step::Enter { .. } => None,
        })
        .collect()
}

/// Computes the reverse postorder traversal of nodes reachable from the start.
///
/// In a DAG every node comes before all of its successors.
pub fn reverse_postorder<G: Successors>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let mut result = postorder(graph, start);
    result.reverse();
    result
}
