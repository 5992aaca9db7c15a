//! Algorithms operating on [`crate::Graph`].
//!
//! Structural algorithms are generic over the traits in [`crate::graph::traits`];
//! algorithms that read weights, rebuild graphs or compare identifiers take a
//! [`crate::Graph`] directly. None of them recurse: depth-first formulations keep
//! their frames on an explicit stack, so graph depth is bounded by heap memory.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] / [`bfs`] - lazy depth-first / breadth-first iterators
//! - [`depth_first`] / [`breadth_first`] - visitor-driven walks with early exit
//! - [`postorder`] / [`reverse_postorder`] - finishing orders
//!
//! ## Connectivity and Cycles
//!
//! - [`connected_components`], [`number_of_components`], [`is_connected`], [`split`]
//! - [`strongly_connected_components`], [`find_cycles`], [`is_acyclic`], [`condensation`]
//! - [`has_cycle`] / [`find_cycle`] - cycles reachable from a start node
//!
//! ## Orders, Paths and Trees
//!
//! - [`topological_sort`]
//! - [`dijkstra`], [`find_longest_path`], [`all_pairs_distances`], [`find_tree_root`]
//! - [`kruskal`], [`prim`] - minimum spanning trees
//! - [`tree_flow`] - parent → child reorientation of an acyclic graph
//!
//! ## Whole Graphs
//!
//! - [`merge`] - combine two graphs by node identifier
//! - [`has_identical_structure_with`] - identifier-level equality
//! - [`to_links_list`] / [`parse`] - the `{"i,j",...}` incidence-list format
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | General traversal |
//! | Topological Sort | O(V + E) | Dependency ordering |
//! | SCC | O(V + E) | Cycle detection, condensation |
//! | Dijkstra | O(V² + E) | Weighted shortest path |
//! | Kruskal / Prim | O(E log E) | Minimum spanning tree |
//! | All pairs | O(V (V + E)) | Distance tables, tree roots |
//!
//! # Examples
//!
//! ```rust
//! use nodegraph::{algorithms, Graph};
//!
//! let mut graph: Graph<&str, ()> = Graph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.add_edge(a, b)?;
//! graph.add_edge(b, c)?;
//!
//! let order: Vec<_> = algorithms::dfs(&graph, a).collect();
//! assert_eq!(order, vec![a, b, c]);
//! assert!(algorithms::is_acyclic(&graph));
//!
//! graph.add_edge(c, a)?;
//! assert!(algorithms::has_cycle(&graph, a));
//! # Ok::<(), nodegraph::Error>(())
//! ```

mod components;
mod cycles;
mod links;
mod merge;
mod scc;
mod shortest;
mod spanning;
mod structure;
mod topological;
mod traversal;
mod tree;

pub use components::{component_labels, connected_components, is_connected, number_of_components, split};
pub use cycles::{find_cycle, has_cycle};
pub use links::{parse, to_links_list, LinksList};
pub use merge::merge;
pub use scc::{condensation, find_cycles, is_acyclic, strongly_connected_components};
pub use shortest::{all_pairs_distances, dijkstra, find_longest_path, find_tree_root};
pub use spanning::{kruskal, prim};
pub use structure::has_identical_structure_with;
pub use topological::topological_sort;
pub use traversal::{bfs, breadth_first, depth_first, dfs, postorder, reverse_postorder, BfsIterator, DfsIterator};
pub use tree::tree_flow;
