//! Trie node
//!
//! One node per distinct path segment reachable from the root. Nodes are
//! created during insertion only and never removed; the only later
//! mutations are appending children and setting the terminal pattern.

use crate::config::SiblingPolicy;
use crate::route::pattern::is_wildcard_segment;

/// A single segment in the route trie
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Full pattern terminating here, `None` for intermediate nodes
    pattern: Option<String>,
    /// Literal segment text, e.g. `"doc"`, `":lang"`, `"*filepath"`
    segment: String,
    /// Children in insertion order
    children: Vec<TrieNode>,
    /// Whether `segment` starts with `:` or `*`
    is_wildcard: bool,
}

/// Outcome of setting the terminal pattern on a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Registration {
    /// The node was not terminal before
    New,
    /// The node already carried this exact pattern
    Unchanged,
    /// The node carried a different pattern, which was overwritten
    Replaced(String),
}

impl TrieNode {
    /// Creates the root node (empty segment, no pattern)
    pub(crate) fn root() -> Self {
        Self::default()
    }

    fn new(segment: &str) -> Self {
        Self {
            pattern: None,
            segment: segment.to_string(),
            children: Vec::new(),
            is_wildcard: is_wildcard_segment(segment),
        }
    }

    /// The registered pattern ending at this node, if any
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Literal segment text of this node (empty for the root)
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Children in insertion order
    pub fn children(&self) -> &[TrieNode] {
        &self.children
    }

    /// True for `:name` and `*name` segments
    pub fn is_wildcard(&self) -> bool {
        self.is_wildcard
    }

    /// True for `*name` segments, which absorb any remaining depth
    pub fn is_catch_all(&self) -> bool {
        self.segment.starts_with('*')
    }

    /// True when some pattern terminates exactly here
    pub fn is_terminal(&self) -> bool {
        self.pattern.is_some()
    }

    /// First child whose segment equals `segment` or that is a wildcard
    ///
    /// Children are scanned in insertion order, so an earlier wildcard wins
    /// over a later literal sibling.
    ///
    /// # Examples
    ///
    /// ```
    /// use path_trie::PathTrie;
    ///
    /// let mut trie = PathTrie::new();
    /// trie.insert("/p/:lang").unwrap();
    /// trie.insert("/p/go").unwrap();
    ///
    /// let p = &trie.root().children()[0];
    /// assert_eq!(p.match_child("go").map(|n| n.segment()), Some(":lang"));
    /// assert_eq!(p.match_child("rust").map(|n| n.segment()), Some(":lang"));
    /// ```
    pub fn match_child(&self, segment: &str) -> Option<&TrieNode> {
        self.children
            .iter()
            .find(|child| child.segment == segment || child.is_wildcard)
    }

    /// Every child whose segment equals `segment`, plus every wildcard child
    ///
    /// Insertion order is preserved; this is the candidate order search
    /// tries when backtracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use path_trie::PathTrie;
    ///
    /// let mut trie = PathTrie::new();
    /// trie.insert("/p/go/doc").unwrap();
    /// trie.insert("/p/:lang/doc").unwrap();
    /// trie.insert("/p/rust/doc").unwrap();
    ///
    /// let p = &trie.root().children()[0];
    /// let segments: Vec<&str> = p.match_children("go").iter().map(|n| n.segment()).collect();
    /// assert_eq!(segments, vec!["go", ":lang"]);
    /// ```
    pub fn match_children(&self, segment: &str) -> Vec<&TrieNode> {
        self.children
            .iter()
            .filter(|child| child.segment == segment || child.is_wildcard)
            .collect()
    }

    /// Index of the child insertion should descend into, per policy
    fn child_index(&self, segment: &str, policy: SiblingPolicy) -> Option<usize> {
        match policy {
            SiblingPolicy::Coexist => self.children.iter().position(|c| c.segment == segment),
            SiblingPolicy::MergeIntoWildcard => self
                .children
                .iter()
                .position(|c| c.segment == segment || c.is_wildcard),
        }
    }

    /// Walks (and extends) the trie along `segments`, marking the last node
    /// as terminal for `pattern`
    pub(crate) fn insert(
        &mut self,
        pattern: &str,
        segments: &[&str],
        policy: SiblingPolicy,
    ) -> Registration {
        let mut node = self;

        for segment in segments {
            let idx = match node.child_index(segment, policy) {
                Some(idx) => idx,
                None => {
                    node.children.push(TrieNode::new(segment));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[idx];
        }

        match node.pattern.replace(pattern.to_string()) {
            None => Registration::New,
            Some(previous) if previous == pattern => Registration::Unchanged,
            Some(previous) => Registration::Replaced(previous),
        }
    }

    /// Depth-first search with backtracking; first terminal hit wins
    ///
    /// A node matches when all segments are consumed or when it is a
    /// catch-all; reaching a non-terminal node at that point fails the
    /// branch.
    pub(crate) fn search(&self, segments: &[&str], depth: usize) -> Option<&TrieNode> {
        if depth == segments.len() || self.is_catch_all() {
            return self.is_terminal().then_some(self);
        }

        self.match_children(segments[depth])
            .into_iter()
            .find_map(|child| child.search(segments, depth + 1))
    }

    /// Appends every terminal pattern below (and including) this node,
    /// depth-first in insertion order
    pub(crate) fn collect_patterns<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(pattern) = self.pattern() {
            out.push(pattern);
        }
        for child in &self.children {
            child.collect_patterns(out);
        }
    }

    /// Total number of nodes in this subtree, root included
    pub(crate) fn node_count(&self) -> usize {
        1 + self.children.iter().map(TrieNode::node_count).sum::<usize>()
    }
}
