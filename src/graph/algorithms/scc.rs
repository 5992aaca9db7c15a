//! Strongly Connected Components (SCC) using Tarjan's algorithm.
//!
//! A strongly connected component is a maximal set of vertices such that there is
//! a path from every vertex to every other vertex in the set. Components with more
//! than one member, or a single member carrying a self-loop, are exactly the places
//! where a directed graph has cycles.
//!
//! The depth-first search behind Tarjan's algorithm runs on an explicit work stack,
//! so graph depth is bounded by heap memory rather than the call stack.

use std::collections::HashSet;

use crate::graph::{multigraph::Graph, node::NodeId, traits::Successors};

/// Computes the strongly connected components of a graph.
///
/// Uses Tarjan's algorithm with a single DFS pass. The algorithm maintains
/// a stack of vertices and assigns each vertex an index and "lowlink" value.
/// When a vertex's lowlink equals its index, it's the root of an SCC.
///
/// # Arguments
///
/// * `graph` - The graph to analyze
///
/// # Returns
///
/// A vector of SCCs, where each SCC is a vector of `NodeId`s. The SCCs are
/// returned in **reverse topological order** (if there's an edge from SCC A to
/// SCC B, then A appears after B in the result). Every live node appears in
/// exactly one SCC.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use nodegraph::{strongly_connected_components, Graph};
///
/// // Simple cycle: A -> B -> C -> A
/// let mut graph: Graph<char, ()> = Graph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
/// graph.add_edge(c, a)?;
///
/// let sccs = strongly_connected_components(&graph);
/// assert_eq!(sccs.len(), 1);
/// assert_eq!(sccs[0].len(), 3);
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn strongly_connected_components<G>(graph: &G) -> Vec<Vec<NodeId>>
where
    G: Successors,
{
    if graph.node_count() == 0 {
        return Vec::new();
    }

    let mut state = TarjanState::new(graph.node_bound());
    for node in graph.node_ids() {
        if state.index[node.index()].is_none() {
            state.strongconnect(graph, node);
        }
    }

    log::trace!("found {} strongly connected components", state.sccs.len());
    state.sccs
}

/// A suspended visit of one node: its successors and the next one to look at.
struct Frame {
    node: NodeId,
    successors: Vec<NodeId>,
    next: usize,
}

/// Internal state for Tarjan's algorithm.
struct TarjanState {
    /// Discovery index for each node (None if not yet visited)
    index: Vec<Option<usize>>,
    /// Lowlink value for each node
    lowlink: Vec<usize>,
    /// Whether a node is currently on the stack
    on_stack: Vec<bool>,
    /// The component stack
    stack: Vec<NodeId>,
    /// Current index counter
    current_index: usize,
    /// Collected SCCs
    sccs: Vec<Vec<NodeId>>,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        Self {
            index: vec![None; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            current_index: 0,
            sccs: Vec::new(),
        }
    }

    fn discover<G: Successors>(&mut self, graph: &G, v: NodeId) -> Frame {
        let v_idx = v.index();
        self.index[v_idx] = Some(self.current_index);
        self.lowlink[v_idx] = self.current_index;
        self.current_index += 1;
        self.stack.push(v);
        self.on_stack[v_idx] = true;

        Frame {
            node: v,
            successors: graph.successors(v).collect(),
            next: 0,
        }
    }

    fn strongconnect<G: Successors>(&mut self, graph: &G, root: NodeId) {
        let mut work = vec![self.discover(graph, root)];

        while let Some(frame) = work.last_mut() {
            let v_idx = frame.node.index();

            if let Some(&w) = frame.successors.get(frame.next) {
                frame.next += 1;
                let w_idx = w.index();

                match self.index[w_idx] {
                    None => {
                        let next = self.discover(graph, w);
                        work.push(next);
                    }
                    Some(w_index) if self.on_stack[w_idx] => {
                        self.lowlink[v_idx] = self.lowlink[v_idx].min(w_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            // All successors done: propagate lowlink to the parent frame
            let v = frame.node;
            work.pop();
            if let Some(parent) = work.last() {
                let p_idx = parent.node.index();
                self.lowlink[p_idx] = self.lowlink[p_idx].min(self.lowlink[v_idx]);
            }

            if Some(self.lowlink[v_idx]) == self.index[v_idx] {
                let mut scc = Vec::new();
                while let Some(w) = self.stack.pop() {
                    self.on_stack[w.index()] = false;
                    scc.push(w);
                    if w == v {
                        break;
                    }
                }
                self.sccs.push(scc);
            }
        }
    }
}

/// Returns the cyclic parts of a graph as strongly connected components.
///
/// With `exclude_singletons = false` every SCC is returned, including trivial
/// single-node components. With `exclude_singletons = true` only components with
/// more than one member, or a single member carrying a self-loop, are returned;
/// for a directed graph these are exactly its cycles.
///
/// In an undirected graph every link can be walked back, so the strongly connected
/// components are the connected components. There a component is cyclic when it
/// holds at least as many edges as nodes, i.e. when it is not a tree. A single
/// edge is therefore not a cycle, while two parallel edges or a self-loop are.
///
/// # Examples
///
/// ```rust
/// use nodegraph::{find_cycles, Graph};
///
/// let mut graph: Graph<(), ()> = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, a)?;
/// graph.add_edge(b, c)?;
///
/// assert_eq!(find_cycles(&graph, false).len(), 2);
/// assert_eq!(find_cycles(&graph, true).len(), 1);
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn find_cycles<N, E>(graph: &Graph<N, E>, exclude_singletons: bool) -> Vec<Vec<NodeId>> {
    let sccs = strongly_connected_components(graph);
    if !exclude_singletons {
        return sccs;
    }

    if graph.is_directed() {
        return sccs
            .into_iter()
            .filter(|scc| match scc.as_slice() {
                [single] => graph.successors(*single).any(|w| w == *single),
                _ => true,
            })
            .collect();
    }

    let mut member = vec![None; graph.node_bound()];
    for (index, scc) in sccs.iter().enumerate() {
        for &node in scc {
            member[node.index()] = Some(index);
        }
    }
    let mut edge_counts = vec![0usize; sccs.len()];
    for (_, edge) in graph.edges() {
        if let Some(index) = member[edge.source().index()] {
            edge_counts[index] += 1;
        }
    }

    sccs.into_iter()
        .zip(edge_counts)
        .filter(|(scc, edges)| *edges >= scc.len())
        .map(|(scc, _)| scc)
        .collect()
}

/// Returns `true` if the graph contains no cycle.
///
/// Equivalent to [`find_cycles`] with `exclude_singletons = true` coming back
/// empty. For a directed graph this means no strongly connected component is
/// cyclic. For an undirected graph it means the graph is a forest: every connected
/// component has one edge fewer than it has nodes (which rules out self-loops and
/// parallel edges).
///
/// # Examples
///
/// ```rust
/// use nodegraph::{is_acyclic, Graph, GraphConfig};
///
/// let mut graph: Graph<(), ()> = Graph::with_config(GraphConfig::undirected());
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
/// assert!(is_acyclic(&graph));
///
/// graph.add_edge(c, a)?;
/// assert!(!is_acyclic(&graph));
/// # Ok::<(), nodegraph::Error>(())
/// ```
#[must_use]
pub fn is_acyclic<N, E>(graph: &Graph<N, E>) -> bool {
    find_cycles(graph, true).is_empty()
}

/// Returns the condensation of a graph: each SCC collapsed to a single node.
///
/// # Arguments
///
/// * `graph` - The original graph
/// * `sccs` - The SCCs as returned by [`strongly_connected_components`]
///
/// # Returns
///
/// A tuple containing:
/// - A vector indexed by [`NodeId::index`] mapping each live node to its SCC index
///   (`None` for removed slots)
/// - The deduplicated edges `(from_scc, to_scc)` between different SCCs; they form
///   a DAG
///
/// # Examples
///
/// ```rust
/// use nodegraph::{condensation, strongly_connected_components, Graph};
///
/// let mut graph: Graph<char, ()> = Graph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
///
/// // Cycle A -> B -> A, plus B -> C
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, a)?;
/// graph.add_edge(b, c)?;
///
/// let sccs = strongly_connected_components(&graph);
/// let (node_to_scc, edges) = condensation(&graph, &sccs);
///
/// assert_eq!(node_to_scc[a.index()], node_to_scc[b.index()]);
/// assert_eq!(edges.len(), 1);
/// # Ok::<(), nodegraph::Error>(())
/// ```
pub fn condensation<G>(graph: &G, sccs: &[Vec<NodeId>]) -> (Vec<Option<usize>>, Vec<(usize, usize)>)
where
    G: Successors,
{
    let mut node_to_scc = vec![None; graph.node_bound()];
    for (scc_idx, scc) in sccs.iter().enumerate() {
        for &node in scc {
            node_to_scc[node.index()] = Some(scc_idx);
        }
    }

    let mut edges = Vec::new();
    let mut seen_edges = HashSet::new();

    for from_node in graph.node_ids() {
        let Some(from_scc) = node_to_scc[from_node.index()] else {
            continue;
        };

        for to_node in graph.successors(from_node) {
            if let Some(to_scc) = node_to_scc[to_node.index()] {
                if from_scc != to_scc && seen_edges.insert((from_scc, to_scc)) {
                    edges.push((from_scc, to_scc));
                }
            }
        }
    }

    (node_to_scc, edges)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{
        config::GraphConfig,
        graph::{
            algorithms::scc::{condensation, find_cycles, is_acyclic, strongly_connected_components},
            multigraph::Graph,
            node::NodeId,
        },
    };

    fn graph_with_edges(count: usize, edges: &[(usize, usize)]) -> Graph<(), ()> {
        let mut graph = Graph::new();
        let nodes: Vec<NodeId> = (0..count).map(|_| graph.add_node(())).collect();
        for &(from, to) in edges {
            graph.add_edge(nodes[from], nodes[to]).unwrap();
        }
        graph
    }

    fn as_sets(sccs: &[Vec<NodeId>]) -> Vec<HashSet<usize>> {
        sccs.iter()
            .map(|scc| scc.iter().map(|n| n.index()).collect())
            .collect()
    }

    #[test]
    fn test_scc_empty_graph() {
        let graph: Graph<(), ()> = Graph::new();
        assert!(strongly_connected_components(&graph).is_empty());
        assert!(is_acyclic(&graph));
    }

    #[test]
    fn test_scc_single_node() {
        let graph = graph_with_edges(1, &[]);
        let sccs = strongly_connected_components(&graph);
        assert_eq!(sccs, vec![vec![NodeId::new(0)]]);
        assert!(find_cycles(&graph, true).is_empty());
    }

    #[test]
    fn test_scc_single_node_self_loop() {
        let graph = graph_with_edges(1, &[(0, 0)]);
        assert_eq!(strongly_connected_components(&graph).len(), 1);
        assert_eq!(find_cycles(&graph, true), vec![vec![NodeId::new(0)]]);
        assert!(!is_acyclic(&graph));
    }

    #[test]
    fn test_scc_linear_chain() {
        let graph = graph_with_edges(3, &[(0, 1), (1, 2)]);
        let sccs = strongly_connected_components(&graph);
        assert_eq!(sccs.len(), 3);
        // Reverse topological order: the sink comes first
        assert_eq!(sccs[0], vec![NodeId::new(2)]);
        assert_eq!(sccs[2], vec![NodeId::new(0)]);
        assert!(is_acyclic(&graph));
    }

    #[test]
    fn test_scc_simple_cycle() {
        let graph = graph_with_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        let sccs = strongly_connected_components(&graph);
        assert_eq!(as_sets(&sccs), vec![HashSet::from([0, 1, 2])]);
        assert!(!is_acyclic(&graph));
    }

    #[test]
    fn test_scc_connected_cycles() {
        // {0, 1} -> {2, 3} -> 4
        let graph = graph_with_edges(5, &[(0, 1), (1, 0), (1, 2), (2, 3), (3, 2), (3, 4)]);
        let sccs = strongly_connected_components(&graph);
        assert_eq!(
            as_sets(&sccs),
            vec![HashSet::from([4]), HashSet::from([2, 3]), HashSet::from([0, 1])]
        );

        let cycles = find_cycles(&graph, true);
        assert_eq!(cycles.len(), 2);
    }

    #[test]
    fn test_scc_figure_eight() {
        let graph = graph_with_edges(3, &[(0, 1), (1, 0), (1, 2), (2, 1)]);
        let sccs = strongly_connected_components(&graph);
        assert_eq!(as_sets(&sccs), vec![HashSet::from([0, 1, 2])]);
    }

    #[test]
    fn test_scc_partition_covers_every_node() {
        let graph = graph_with_edges(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (5, 5)]);
        let sccs = strongly_connected_components(&graph);

        let mut seen = HashSet::new();
        for scc in &sccs {
            for node in scc {
                assert!(seen.insert(*node), "{node} appears in two components");
            }
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(find_cycles(&graph, true).len(), 2);
    }

    #[test]
    fn test_scc_skips_removed_nodes() {
        let mut graph = graph_with_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        graph.remove_node(NodeId::new(1));
        let sccs = strongly_connected_components(&graph);
        assert_eq!(sccs.len(), 2);
        assert!(is_acyclic(&graph));
    }

    #[test]
    fn test_scc_large_cycle() {
        let count = 5_000;
        let mut edges: Vec<(usize, usize)> = (0..count - 1).map(|i| (i, i + 1)).collect();
        edges.push((count - 1, 0));
        let graph = graph_with_edges(count, &edges);

        let sccs = strongly_connected_components(&graph);
        assert_eq!(sccs.len(), 1);
        assert_eq!(sccs[0].len(), count);
    }

    #[test]
    fn test_condensation_basic() {
        let graph = graph_with_edges(4, &[(0, 1), (1, 0), (1, 2), (2, 3)]);
        let sccs = strongly_connected_components(&graph);
        let (node_to_scc, edges) = condensation(&graph, &sccs);

        assert_eq!(node_to_scc[0], node_to_scc[1]);
        assert_ne!(node_to_scc[1], node_to_scc[2]);
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_condensation_no_edges() {
        let graph = graph_with_edges(3, &[]);
        let sccs = strongly_connected_components(&graph);
        let (node_to_scc, edges) = condensation(&graph, &sccs);
        assert!(edges.is_empty());
        assert!(node_to_scc.iter().all(Option::is_some));
    }

    #[test]
    fn test_undirected_acyclic_is_forest() {
        let mut graph: Graph<(), ()> = Graph::with_config(GraphConfig::undirected());
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        let d = graph.add_node(());
        graph.add_edge(a, b).unwrap();
        graph.add_edge(c, d).unwrap();
        assert!(is_acyclic(&graph));

        graph.add_edge(b, a).unwrap();
        assert!(!is_acyclic(&graph));
    }

    #[test]
    fn test_undirected_self_loop_is_cyclic() {
        let mut graph: Graph<(), ()> = Graph::with_config(GraphConfig::undirected());
        let a = graph.add_node(());
        graph.add_edge(a, a).unwrap();
        assert!(!is_acyclic(&graph));
    }

    fn undirected_with_edges(count: usize, edges: &[(usize, usize)]) -> Graph<(), ()> {
        let mut graph = graph_with_edges(count, edges);
        graph.set_directed(false);
        graph
    }

    #[test]
    fn test_undirected_single_edge_has_no_cycles() {
        let graph = undirected_with_edges(2, &[(0, 1)]);
        assert!(find_cycles(&graph, true).is_empty());
        assert!(is_acyclic(&graph));
        assert_eq!(find_cycles(&graph, false).len(), 1);
    }

    #[test]
    fn test_undirected_tree_has_no_cycles() {
        let graph = undirected_with_edges(6, &[(0, 1), (1, 2), (1, 3), (4, 5)]);
        assert!(find_cycles(&graph, true).is_empty());
        assert!(is_acyclic(&graph));
    }

    #[test]
    fn test_undirected_cycles_match_forest_test() {
        // Parallel pair {0, 1}, tree {2, 3}, triangle {4, 5, 6}, looped {7}
        let graph = undirected_with_edges(
            8,
            &[(0, 1), (1, 0), (2, 3), (4, 5), (5, 6), (6, 4), (7, 7)],
        );
        let cycles = find_cycles(&graph, true);
        let mut cyclic = as_sets(&cycles);
        cyclic.sort_by_key(|set| set.iter().min().copied());
        assert_eq!(
            cyclic,
            vec![HashSet::from([0, 1]), HashSet::from([4, 5, 6]), HashSet::from([7])]
        );
        assert!(!is_acyclic(&graph));
    }
}
