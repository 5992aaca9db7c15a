//! The incidence-list text format.
//!
//! A graph's edges are written as `"i,j"` tokens, `i` being the source node's
//! identifier and `j` the sink node's, in edge insertion order. A whole list renders
//! as `{"0,1","1,2"}`; the empty list renders as `{}`.
//!
//! Isolated nodes have no representation in this format, so reading a list back
//! reproduces a graph only when every node has at least one link.

use std::{fmt, str::FromStr};

use crate::{graph::multigraph::Graph, Error, Result};

/// An ordered list of `"i,j"` link tokens.
///
/// # Examples
///
/// ```rust
/// use nodegraph::LinksList;
///
/// let list: LinksList = r#"{"0,1","1,2"}"#.parse()?;
/// assert_eq!(list.tokens(), &["0,1", "1,2"]);
/// assert_eq!(list.to_string(), r#"{"0,1","1,2"}"#);
/// # Ok::<(), nodegraph::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinksList(Vec<String>);

impl LinksList {
    /// Returns the tokens in order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list holds no token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the tokens.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Consumes the list, returning the tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for LinksList {
    fn from(tokens: Vec<String>) -> Self {
        LinksList(tokens)
    }
}

impl<'a> IntoIterator for &'a LinksList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for LinksList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (position, token) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(",")?;
            }
            write!(f, "\"{token}\"")?;
        }
        f.write_str("}")
    }
}

impl FromStr for LinksList {
    type Err = Error;

    /// Reads the `{"i,j",...}` form.
    ///
    /// Only the braces, quotes and separators are checked here; the tokens are
    /// validated when they are applied to a graph.
    fn from_str(text: &str) -> Result<Self> {
        let inner = text
            .trim()
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| invalid_argument!("links list must be enclosed in braces: {:?}", text))?;

        let mut tokens = Vec::new();
        let mut rest = inner.trim_start();
        while !rest.is_empty() {
            let quoted = rest
                .strip_prefix('"')
                .ok_or_else(|| invalid_argument!("expected a quoted token at {:?}", rest))?;
            let end = quoted
                .find('"')
                .ok_or_else(|| invalid_argument!("unterminated token in {:?}", text))?;
            tokens.push(quoted[..end].to_string());

            rest = quoted[end + 1..].trim_start();
            if let Some(after) = rest.strip_prefix(',') {
                rest = after.trim_start();
                if rest.is_empty() {
                    return Err(invalid_argument!("trailing separator in {:?}", text));
                }
            } else if !rest.is_empty() {
                return Err(invalid_argument!("expected ',' between tokens at {:?}", rest));
            }
        }

        Ok(LinksList(tokens))
    }
}

/// Splits an `"i,j"` token into its two identifiers.
fn parse_token(token: &str) -> Option<(i64, i64)> {
    let (source, sink) = token.split_once(',')?;
    Some((source.trim().parse().ok()?, sink.trim().parse().ok()?))
}

/// Writes every live edge of `graph` as an `"i,j"` token, in insertion order.
///
/// # Examples
///
/// ```rust
/// use nodegraph::{to_links_list, Graph};
///
/// let mut graph: Graph<(), ()> = Graph::new();
/// graph.add_edge_by_identifiers(4, 2);
/// graph.add_edge_by_identifiers(2, 9);
///
/// assert_eq!(to_links_list(&graph).to_string(), r#"{"4,2","2,9"}"#);
/// ```
#[must_use]
pub fn to_links_list<N, E>(graph: &Graph<N, E>) -> LinksList {
    let tokens = graph
        .edges()
        .filter_map(|(_, edge)| {
            let source = graph.node(edge.source())?.identifier();
            let sink = graph.node(edge.sink())?.identifier();
            Some(format!("{source},{sink}"))
        })
        .collect();
    LinksList(tokens)
}

/// Builds a new directed graph from `"i,j"` tokens.
///
/// Nodes are created on demand the first time their identifier appears, and every
/// valid token adds one edge, so repeated tokens produce parallel edges. Malformed
/// tokens are skipped with a warning.
///
/// # Examples
///
/// ```rust
/// use nodegraph::{parse, Graph};
///
/// let graph: Graph<(), ()> = parse(["0,1", "1,2", "oops", "1,2"]);
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// ```
#[must_use]
pub fn parse<N, E, I>(tokens: I) -> Graph<N, E>
where
    N: Default,
    E: Default,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut graph = Graph::new();
    graph.extend_from_links(tokens);
    graph
}

impl<N, E> Graph<N, E> {
    /// Adds one edge per valid `"i,j"` token, creating missing nodes with the
    /// graph's node factory.
    ///
    /// Returns the number of edges added. Malformed tokens are skipped and logged at
    /// `warn` level.
    pub fn extend_from_links<I>(&mut self, tokens: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut added = 0;
        for token in tokens {
            let token = token.as_ref();
            match parse_token(token) {
                Some((source, sink)) => {
                    self.add_edge_by_identifiers(source, sink);
                    added += 1;
                }
                None => log::warn!("skipping malformed link token {token:?}"),
            }
        }
        added
    }
}
