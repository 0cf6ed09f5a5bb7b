//! Path segmentation shared by pattern registration and lookup
//!
//! Patterns and request paths must be split by the same rule, otherwise a
//! registered route could never be reached. This module is that one rule.

/// Splits a path into its non-empty `/`-delimited segments
///
/// Leading, trailing and repeated slashes produce empty pieces, which are
/// skipped. No decoding or case folding happens here.
///
/// # Examples
///
/// ```
/// use path_trie::path::split_segments;
///
/// assert_eq!(split_segments("/p/:lang/doc"), vec!["p", ":lang", "doc"]);
/// assert_eq!(split_segments("//static///css/"), vec!["static", "css"]);
/// assert!(split_segments("/").is_empty());
/// assert!(split_segments("").is_empty());
/// ```
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
