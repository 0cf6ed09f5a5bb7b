//! Parameter binding for matched routes
//!
//! The trie search only returns the terminal node; bindings are recovered
//! afterwards by walking the matched pattern alongside the request path.

use std::collections::HashMap;

use crate::path::split_segments;
use crate::route::pattern::{classify_segment, SegmentKind};

/// Binds the parameters of `pattern` against the segments of `path`
///
/// - `:name` binds the request segment at the same depth
/// - `*name` binds every remaining request segment joined with `/`, and ends the walk
/// - static segments bind nothing
///
/// A parameter whose depth lies beyond the request path is left unbound.
///
/// # Examples
///
/// ```
/// use path_trie::route::bind_params;
///
/// let params = bind_params("/p/:lang/doc", "/p/python/doc");
/// assert_eq!(params.get("lang").map(String::as_str), Some("python"));
///
/// let params = bind_params("/static/*filepath", "/static/css/a.css");
/// assert_eq!(params.get("filepath").map(String::as_str), Some("css/a.css"));
/// ```
pub fn bind_params(pattern: &str, path: &str) -> HashMap<String, String> {
    let path_segments = split_segments(path);
    bind_segments(&split_segments(pattern), &path_segments)
}

/// Same as [`bind_params`], over already-split segments
pub fn bind_segments(pattern_segments: &[&str], path_segments: &[&str]) -> HashMap<String, String> {
    let mut params = HashMap::new();

    for (idx, segment) in pattern_segments.iter().enumerate() {
        match classify_segment(segment) {
            SegmentKind::Static(_) => {}
            SegmentKind::Param(name) => {
                if let Some(value) = path_segments.get(idx) {
                    params.insert(name.to_string(), value.to_string());
                }
            }
            SegmentKind::CatchAll(name) => {
                let rest = path_segments.get(idx..).unwrap_or_default();
                params.insert(name.to_string(), rest.join("/"));
                break;
            }
        }
    }

    params
}
