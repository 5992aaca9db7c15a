//! Path result types.

use crate::graph::{edge::EdgeId, multigraph::Graph, node::NodeId};

/// A predecessor record: the node a search came from and the edge it followed.
///
/// Shortest path and spanning tree searches keep one `Twig` per reached node and
/// rebuild paths by walking the records backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Twig {
    /// The predecessor node
    pub node: NodeId,
    /// The edge that led from `node` to the reached node
    pub edge: EdgeId,
}

/// An ordered walk through a graph: `nodes[i]` and `nodes[i + 1]` are joined by `edges[i]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphPath {
    nodes: Vec<NodeId>,
    edges: Vec<EdgeId>,
    weight: f64,
}

impl GraphPath {
    /// Rebuilds the path ending at `target` from per-node predecessor records.
    ///
    /// `twigs` is indexed by [`NodeId::index`]; the walk stops at the first node
    /// without a record. Edge weights are summed from `graph`.
    pub(crate) fn from_twigs<N, E>(graph: &Graph<N, E>, twigs: &[Option<Twig>], target: NodeId) -> Self {
        let mut nodes = vec![target];
        let mut edges = Vec::new();
        let mut current = target;

        while let Some(twig) = twigs.get(current.index()).copied().flatten() {
            edges.push(twig.edge);
            nodes.push(twig.node);
            current = twig.node;
            if nodes.len() > twigs.len() {
                break;
            }
        }

        nodes.reverse();
        edges.reverse();
        let weight = edges
            .iter()
            .filter_map(|&e| graph.edge(e))
            .map(|edge| edge.weight())
            .sum();

        GraphPath {
            nodes,
            edges,
            weight,
        }
    }

    /// The visited nodes, in walk order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The traversed edges, in walk order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Number of edges on the path.
    #[must_use]
    pub fn length(&self) -> usize {
        self.edges.len()
    }

    /// Sum of the weights of the traversed edges.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns `true` if the path has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node of the path.
    #[must_use]
    pub fn source(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node of the path.
    #[must_use]
    pub fn target(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Resolves the path's nodes to their identifiers in `graph`.
    #[must_use]
    pub fn identifiers<N, E>(&self, graph: &Graph<N, E>) -> Vec<i64> {
        self.nodes
            .iter()
            .filter_map(|&n| graph.node(n))
            .map(|node| node.identifier())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_twigs() {
        let mut graph: Graph<(), ()> = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        let ab = graph.add_edge_with(a, b, 2.0, ()).unwrap();
        let bc = graph.add_edge_with(b, c, 0.5, ()).unwrap();

        let twigs = vec![
            None,
            Some(Twig { node: a, edge: ab }),
            Some(Twig { node: b, edge: bc }),
        ];
        let path = GraphPath::from_twigs(&graph, &twigs, c);

        assert_eq!(path.nodes(), &[a, b, c]);
        assert_eq!(path.edges(), &[ab, bc]);
        assert_eq!(path.length(), 2);
        assert!((path.weight() - 2.5).abs() < f64::EPSILON);
        assert_eq!(path.source(), Some(a));
        assert_eq!(path.target(), Some(c));
        assert_eq!(path.identifiers(&graph), vec![0, 1, 2]);
    }

    #[test]
    fn test_single_node_path() {
        let mut graph: Graph<(), ()> = Graph::new();
        let a = graph.add_node(());
        let path = GraphPath::from_twigs(&graph, &[None], a);
        assert_eq!(path.nodes(), &[a]);
        assert_eq!(path.length(), 0);
        assert!(!path.is_empty());
        assert!(GraphPath::default().is_empty());
    }
}
