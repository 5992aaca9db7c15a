// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # nodegraph
//!
//! A mutable directed/undirected multigraph together with the algorithms that
//! operate on it: traversal, connectivity, cycle detection, shortest paths,
//! spanning trees, topological sorting, tree re-rooting, merging and splitting,
//! structural comparison and a compact incidence-list text format.
//!
//! ## Features
//!
//! - **Arena storage** - nodes and edges live in slot vectors addressed by
//!   [`NodeId`] / [`EdgeId`] handles; adjacency lists hold handles, never references
//! - **Multigraph semantics** - parallel edges and self-loops are first-class
//! - **Runtime direction** - a graph can be switched between directed and undirected
//! - **No recursion** - every depth-first algorithm keeps its frames on the heap
//! - **Typed payloads** - arbitrary node and edge payloads, with factories for
//!   payloads created on demand
//!
//! ## Quick Start
//!
//! ```rust
//! use nodegraph::prelude::*;
//!
//! let mut graph: Graph<&str, ()> = Graph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! let d = graph.add_node("D");
//! graph.add_edge(a, b)?;
//! graph.add_edge(b, c)?;
//! graph.add_edge(c, d)?;
//! graph.add_edge(a, d)?;
//!
//! assert!(is_acyclic(&graph));
//! assert_eq!(topological_sort(&graph), Some(vec![a, b, c, d]));
//!
//! let path = dijkstra(&graph, a, d)?.unwrap();
//! assert_eq!(path.nodes(), &[a, d]);
//!
//! let tree = kruskal(&graph, false)?;
//! assert_eq!(tree.edge_count(), 3);
//! # Ok::<(), nodegraph::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Operations that can fail return [`Result`]. Caller misuse (a stale handle handed
//! to a mutation) is [`Error::InvalidArgument`]; a violated graph invariant (a
//! cyclic graph given to [`tree_flow`], a root that is not a member) is a domain
//! error. Valid negative answers such as "no path" are `None`, never an error.
//!
//! ## Logging
//!
//! The crate reports through the [`log`] facade: rejected inputs at `warn`, bulk
//! operations at `debug`, per-edge wiring at `trace`. No logger is installed.

#[macro_use]
pub(crate) mod error;

/// Options a graph is created with.
pub mod config;

/// The multigraph, its element types and its algorithms.
pub mod graph;

/// Convenient re-exports of the most commonly used types, traits and algorithms.
///
/// # Example
///
/// ```rust
/// use nodegraph::prelude::*;
///
/// let graph: Graph<(), ()> = parse(["0,1", "1,2"]);
/// assert!(is_connected(&graph));
/// ```
pub mod prelude;

/// `nodegraph` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `nodegraph` Error type
///
/// Separates caller misuse from violated graph invariants.
pub use error::Error;

pub use config::GraphConfig;

pub use graph::{
    algorithms, generate, Direction, Edge, EdgeId, Graph, GraphBase, GraphPath, Neighbors, Node, NodeId,
    Point, Predecessors, Rect, Successors, Twig, Visitor,
};

pub use graph::algorithms::{
    all_pairs_distances, bfs, breadth_first, condensation, connected_components, depth_first, dfs,
    dijkstra, find_cycle, find_cycles, find_longest_path, find_tree_root, has_cycle,
    has_identical_structure_with, is_acyclic, is_connected, kruskal, merge, number_of_components, parse,
    postorder, prim, reverse_postorder, split, strongly_connected_components, to_links_list,
    topological_sort, tree_flow, LinksList,
};
