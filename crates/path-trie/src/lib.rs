//! # Path Trie
//!
//! A prefix tree mapping URL path patterns to the pattern that registered
//! them, with support for:
//! - Static segments (`/about`)
//! - Named parameters (`/p/:lang/doc`)
//! - Trailing catch-alls (`/static/*filepath`)
//!
//! ## Matching Model
//!
//! Lookup is a depth-first walk with backtracking. At every level the
//! candidates are the children whose segment equals the request segment
//! plus every wildcard child, tried in **insertion order**. The first branch
//! that ends on a registered pattern wins:
//! - A static route only beats a parameterized sibling if it was inserted first
//! - A `*name` node matches regardless of the remaining depth
//! - Reaching a node with no registered pattern fails that branch
//!
//! Parameter bindings are recovered after the match by walking the matched
//! pattern alongside the request path.
//!
//! ## Lifecycle
//!
//! Build once with [`PathTrie::insert`], then share it read-only. `search`
//! takes `&self` and the trie holds plain owned data, so a built trie can be
//! wrapped in an `Arc` and queried from any number of threads.
//!
//! ## Example
//!
//! ```
//! use path_trie::PathTrie;
//!
//! let mut trie = PathTrie::new();
//! trie.insert("/p/go/doc").unwrap();
//! trie.insert("/p/:lang/doc").unwrap();
//! trie.insert("/static/*filepath").unwrap();
//!
//! let m = trie.search("/p/python/doc").unwrap();
//! assert_eq!(m.pattern, "/p/:lang/doc");
//! assert_eq!(m.param("lang"), Some("python"));
//!
//! let m = trie.search("/static/css/a.css").unwrap();
//! assert_eq!(m.param("filepath"), Some("css/a.css"));
//!
//! assert!(trie.search("/p/go").is_none());
//! ```

use std::collections::HashMap;

// ============================================================================
// Module Declarations
// ============================================================================

mod config;
mod error;
mod node;
pub mod path;
pub mod route;

pub use config::{SiblingPolicy, TrieConfig};
pub use error::PatternError;
pub use node::TrieNode;
pub use path::split_segments;
pub use route::{bind_params, classify_segment, SegmentKind};

use node::Registration;

// ============================================================================
// Core Types
// ============================================================================

/// Result of resolving a request path against the trie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// The registered pattern that matched
    pub pattern: &'a str,
    /// Parameter bindings extracted from the request path
    pub params: HashMap<String, String>,
    /// The terminal node the search stopped on
    pub node: &'a TrieNode,
}

impl<'a> RouteMatch<'a> {
    /// Value bound to the parameter `name`
    ///
    /// # Examples
    ///
    /// ```
    /// use path_trie::PathTrie;
    ///
    /// let trie = PathTrie::new().with_pattern("/hello/:name").unwrap();
    /// let m = trie.search("/hello/geektutu").unwrap();
    /// assert_eq!(m.param("name"), Some("geektutu"));
    /// assert_eq!(m.param("other"), None);
    /// ```
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Route trie: insert patterns, resolve request paths
///
/// # Examples
///
/// ```
/// use path_trie::PathTrie;
///
/// let trie = PathTrie::from_patterns(["/", "/hello", "/hello/:name"]).unwrap();
///
/// assert_eq!(trie.len(), 3);
/// assert_eq!(trie.search("/").unwrap().pattern, "/");
/// assert_eq!(trie.search("/hello/b").unwrap().pattern, "/hello/:name");
/// assert!(trie.search("/hello/b/c").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathTrie {
    root: TrieNode,
    config: TrieConfig,
    len: usize,
}

impl PathTrie {
    /// Creates an empty trie with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty trie with the given configuration
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: TrieNode::root(),
            config,
            len: 0,
        }
    }

    /// Builds a trie from patterns, inserted in iteration order
    ///
    /// Stops at the first pattern that fails validation.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        patterns
            .into_iter()
            .try_fold(Self::new(), |trie, pattern| trie.with_pattern(pattern.as_ref()))
    }

    /// Inserts a pattern (functional builder)
    ///
    /// Consumes self and returns the trie with `pattern` registered.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, PatternError> {
        self.insert(pattern)?;
        Ok(self)
    }

    /// Registers a route pattern
    ///
    /// The pattern is split on `/` (empty segments skipped) and every segment
    /// is walked from the root, reusing an existing child per the configured
    /// [`SiblingPolicy`] or appending a new one. The last node is marked
    /// terminal for `pattern`.
    ///
    /// Inserting the same pattern again leaves the trie unchanged.
    ///
    /// # Errors
    ///
    /// With `validate_patterns` enabled (the default), malformed patterns
    /// are rejected; see [`PatternError`]. With it disabled, nothing is
    /// rejected: all-slash patterns register on the root node and the empty
    /// pattern registers nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use path_trie::{PathTrie, PatternError};
    ///
    /// let mut trie = PathTrie::new();
    /// trie.insert("/p/:lang/doc").unwrap();
    /// trie.insert("/p/:lang/doc").unwrap();
    /// assert_eq!(trie.len(), 1);
    ///
    /// assert_eq!(trie.insert(""), Err(PatternError::Empty));
    /// ```
    pub fn insert(&mut self, pattern: &str) -> Result<(), PatternError> {
        let segments = match route::parse_pattern(pattern, true) {
            Ok(segments) => segments,
            Err(err) if self.config.validate_patterns => return Err(err),
            Err(err) => {
                tracing::warn!("Accepting malformed route pattern: {}", err);
                split_segments(pattern)
            }
        };

        // an empty pattern can never be reported as a match, so it registers nothing
        if pattern.is_empty() {
            return Ok(());
        }

        match self
            .root
            .insert(pattern, &segments, self.config.sibling_policy)
        {
            Registration::New => {
                self.len += 1;
                tracing::debug!("Registered route pattern {}", pattern);
            }
            Registration::Unchanged => {
                tracing::debug!("Route pattern {} already registered", pattern);
            }
            Registration::Replaced(previous) => {
                tracing::warn!(
                    "Route pattern {} replaced {} on a shared trie node",
                    pattern,
                    previous
                );
            }
        }

        Ok(())
    }

    /// Resolves a request path to its terminal node
    ///
    /// Returns `None` when no registered pattern covers the whole path.
    ///
    /// # Examples
    ///
    /// ```
    /// use path_trie::PathTrie;
    ///
    /// let trie = PathTrie::new().with_pattern("/p/:lang").unwrap();
    ///
    /// let node = trie.find("/p/rust").unwrap();
    /// assert_eq!(node.segment(), ":lang");
    /// assert_eq!(node.pattern(), Some("/p/:lang"));
    /// assert!(trie.find("/p").is_none());
    /// ```
    pub fn find(&self, path: &str) -> Option<&TrieNode> {
        let segments = split_segments(path);
        self.root.search(&segments, 0)
    }

    /// Resolves a request path to its pattern and parameter bindings
    ///
    /// `:name` segments bind the request segment at their depth; a trailing
    /// `*name` binds the rest of the path joined with `/`.
    pub fn search(&self, path: &str) -> Option<RouteMatch<'_>> {
        let segments = split_segments(path);

        let Some(node) = self.root.search(&segments, 0) else {
            tracing::debug!("No route matches {}", path);
            return None;
        };

        // terminal nodes always carry a pattern
        let pattern = node.pattern()?;
        tracing::trace!("Path {} matched route pattern {}", path, pattern);

        Some(RouteMatch {
            pattern,
            params: route::params::bind_segments(&split_segments(pattern), &segments),
            node,
        })
    }

    /// All registered patterns, depth-first in insertion order
    ///
    /// # Examples
    ///
    /// ```
    /// use path_trie::PathTrie;
    ///
    /// let trie = PathTrie::from_patterns(["/b", "/a/:x", "/a"]).unwrap();
    /// assert_eq!(trie.patterns(), vec!["/b", "/a", "/a/:x"]);
    /// ```
    pub fn patterns(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect_patterns(&mut out);
        out
    }

    /// Number of terminal nodes (distinct registered routes)
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no pattern has been registered
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// The root node (empty segment)
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// The configuration this trie was built with
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }
}
