//! # nodegraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types, traits
//! and algorithms of the nodegraph library. Import it with a glob to get the graph,
//! its handles and every algorithm in one line.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all nodegraph operations
pub use crate::Error;

/// The result type used throughout nodegraph
pub use crate::Result;

/// Options a graph is created with
pub use crate::GraphConfig;

// ================================================================================================
// Graph Structure
// ================================================================================================

/// The multigraph and its stored elements
pub use crate::graph::{Edge, Graph, Node};

/// Handles and adjacency view selectors
pub use crate::graph::{Direction, EdgeId, NodeId};

/// Opaque layout values
pub use crate::graph::{Point, Rect};

/// Adjacency traits the structural algorithms are generic over
pub use crate::graph::{GraphBase, Neighbors, Predecessors, Successors};

// ================================================================================================
// Traversal
// ================================================================================================

/// Lazy iterators and visitor-driven walks
pub use crate::graph::algorithms::{
    bfs, breadth_first, depth_first, dfs, postorder, reverse_postorder, BfsIterator, DfsIterator,
};

/// Traversal callbacks
pub use crate::graph::Visitor;

// ================================================================================================
// Connectivity and Cycles
// ================================================================================================

/// Weakly connected components
pub use crate::graph::algorithms::{connected_components, is_connected, number_of_components, split};

/// Strongly connected components and cycle queries
pub use crate::graph::algorithms::{
    condensation, find_cycle, find_cycles, has_cycle, is_acyclic, strongly_connected_components,
};

// ================================================================================================
// Orders, Paths and Trees
// ================================================================================================

/// Topological ordering
pub use crate::graph::algorithms::topological_sort;

/// Path searches and their results
pub use crate::graph::algorithms::{all_pairs_distances, dijkstra, find_longest_path, find_tree_root};
pub use crate::graph::{GraphPath, Twig};

/// Spanning trees and tree flow
pub use crate::graph::algorithms::{kruskal, prim, tree_flow};

// ================================================================================================
// Whole Graphs
// ================================================================================================

/// Merging, comparison and the incidence-list format
pub use crate::graph::algorithms::{has_identical_structure_with, merge, parse, to_links_list, LinksList};
