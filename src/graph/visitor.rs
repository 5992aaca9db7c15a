//! Traversal callbacks.
//!
//! [`Visitor`] is a tagged union over the three callback shapes the traversal
//! functions understand. Each callback returns [`ControlFlow`]; returning
//! [`ControlFlow::Break`] tells the traversal that the visitor has completed, and the
//! traversal stops before visiting another node.

use std::ops::ControlFlow;

use crate::graph::node::NodeId;

/// A traversal callback.
///
/// # Examples
///
/// ```rust
/// use std::ops::ControlFlow;
///
/// use nodegraph::{breadth_first, Graph, NodeId, Visitor};
///
/// let mut graph: Graph<(), ()> = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
///
/// let mut seen = Vec::new();
/// let mut record = |node: NodeId, depth: usize| {
///     seen.push((node, depth));
///     if node == b {
///         ControlFlow::Break(())
///     } else {
///         ControlFlow::Continue(())
///     }
/// };
///
/// breadth_first(&graph, a, Visitor::Depth(&mut record));
/// assert_eq!(seen, vec![(a, 0), (b, 1)]);
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub enum Visitor<'a> {
    /// Receives the visited node
    Plain(&'a mut dyn FnMut(NodeId) -> ControlFlow<()>),
    /// Receives the visited node and its distance (in tree edges) from the start
    Depth(&'a mut dyn FnMut(NodeId, usize) -> ControlFlow<()>),
    /// Receives the visited node and the node it was discovered from
    Parent(&'a mut dyn FnMut(NodeId, Option<NodeId>) -> ControlFlow<()>),
}

impl Visitor<'_> {
    /// Dispatches one visit to the wrapped callback.
    pub fn visit(&mut self, node: NodeId, depth: usize, parent: Option<NodeId>) -> ControlFlow<()> {
        match self {
            Visitor::Plain(callback) => callback(node),
            Visitor::Depth(callback) => callback(node, depth),
            Visitor::Parent(callback) => callback(node, parent),
        }
    }
}

impl std::fmt::Debug for Visitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shape = match self {
            Visitor::Plain(_) => "Plain",
            Visitor::Depth(_) => "Depth",
            Visitor::Parent(_) => "Parent",
        };
        write!(f, "Visitor::{shape}")
    }
}
