//! Graph construction configuration
//!
//! This module provides the options a [`crate::Graph`] is created with. The
//! configuration is a small `Copy` value so it can be handed to every graph an
//! algorithm builds (clones, spanning trees, split components) without ceremony.

/// Configuration for graph construction
///
/// Controls the directed mode of a graph, the weight assigned to edges created
/// without an explicit weight, and whether nodes added without an identifier get
/// one derived automatically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphConfig {
    /// Whether edges have a direction. In an undirected graph the incoming and
    /// outgoing adjacency views of every node alias its full link list.
    pub directed: bool,

    /// Weight given to edges added through [`crate::Graph::add_edge`].
    pub default_weight: f64,

    /// When `true`, nodes added without an explicit identifier receive
    /// `max(existing identifiers) + 1`; when `false` they all receive `0` and the
    /// caller is expected to run [`crate::Graph::ensure_unique_identifiers`].
    pub auto_identifiers: bool,
}

impl Default for GraphConfig {
    /// Directed graph, unit weights, automatic identifiers.
    fn default() -> Self {
        Self::directed()
    }
}

impl GraphConfig {
    /// Configuration for a directed graph with unit weights
    #[must_use]
    pub const fn directed() -> Self {
        Self {
            directed: true,
            default_weight: 1.0,
            auto_identifiers: true,
        }
    }

    /// Configuration for an undirected graph with unit weights
    #[must_use]
    pub const fn undirected() -> Self {
        Self {
            directed: false,
            default_weight: 1.0,
            auto_identifiers: true,
        }
    }

    /// Returns a copy of this configuration with a different default edge weight
    #[must_use]
    pub const fn with_default_weight(mut self, weight: f64) -> Self {
        self.default_weight = weight;
        self
    }

    /// Returns a copy of this configuration with automatic identifiers switched on or off
    #[must_use]
    pub const fn with_auto_identifiers(mut self, enabled: bool) -> Self {
        self.auto_identifiers = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let directed = GraphConfig::directed();
        assert!(directed.directed);
        assert!((directed.default_weight - 1.0).abs() < f64::EPSILON);
        assert!(directed.auto_identifiers);

        let undirected = GraphConfig::undirected();
        assert!(!undirected.directed);
        assert_eq!(GraphConfig::default(), GraphConfig::directed());
    }

    #[test]
    fn test_builders() {
        let config = GraphConfig::undirected()
            .with_default_weight(2.5)
            .with_auto_identifiers(false);
        assert!(!config.directed);
        assert!((config.default_weight - 2.5).abs() < f64::EPSILON);
        assert!(!config.auto_identifiers);
    }
}
