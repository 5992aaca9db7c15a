//! The multigraph and everything that operates on it.
//!
//! # Architecture
//!
//! - [`node`] / [`edge`] - handles ([`NodeId`], [`EdgeId`]) and the stored elements
//! - [`multigraph`] - [`Graph`], the arena-backed multigraph with structural mutation
//! - [`traits`] - the adjacency traits structural algorithms are written against
//! - [`visitor`] - callback shapes for visitor-driven traversals
//! - [`path`] - [`GraphPath`] and [`Twig`], the results of path searches
//! - [`layout`] - opaque layout values carried for a rendering collaborator
//! - [`algorithms`] - traversal, connectivity, paths, spanning trees and more
//! - [`generate`] - balanced and seeded random graph generators
//!
//! # Handles and Identifiers
//!
//! Every node and edge has two names. The *handle* is the arena slot the graph
//! issued; it is what mutation and lookup take, it is never reused after removal and
//! it means nothing to another graph. The *identifier* is a caller-visible integer
//! that survives clones, splits and merges, and is what the text format writes.
//!
//! ```rust
//! use nodegraph::Graph;
//!
//! let mut graph: Graph<(), ()> = Graph::new();
//! let a = graph.add_node_with_identifier(40, ());
//! let b = graph.add_node_with_identifier(2, ());
//! graph.add_edge(a, b)?;
//!
//! let copy = graph.clone();
//! assert_eq!(copy.find_node(40).map(|n| n.index()), Some(0));
//! assert!(copy.find_edge(40, 2, true).is_some());
//! # Ok::<(), nodegraph::Error>(())
//! ```

pub mod algorithms;
pub mod edge;
pub mod generate;
pub mod layout;
pub mod multigraph;
pub mod node;
pub mod path;
pub mod traits;
pub mod visitor;

pub use edge::{Edge, EdgeId};
pub use layout::{Point, Rect};
pub use multigraph::Graph;
pub use node::{Direction, Node, NodeId};
pub use path::{GraphPath, Twig};
pub use traits::{GraphBase, Neighbors, Predecessors, Successors};
pub use visitor::Visitor;
