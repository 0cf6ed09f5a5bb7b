//! Segment classification for route patterns
//!
//! Pure functions mapping one pattern segment to its kind. The leading
//! character decides: `:` is a named parameter, `*` a catch-all, anything
//! else is literal text.

/// Kind of a single route pattern segment
///
/// # Examples
///
/// ```
/// use path_trie::route::pattern::{classify_segment, SegmentKind};
///
/// assert_eq!(classify_segment("doc"), SegmentKind::Static("doc"));
/// assert_eq!(classify_segment(":lang"), SegmentKind::Param("lang"));
/// assert_eq!(classify_segment("*filepath"), SegmentKind::CatchAll("filepath"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind<'a> {
    /// Literal text that must match the request segment exactly
    Static(&'a str),
    /// `:name`, binds exactly one request segment
    Param(&'a str),
    /// `*name`, binds every remaining request segment
    CatchAll(&'a str),
}

impl<'a> SegmentKind<'a> {
    /// Parameter name for `Param` and `CatchAll`, `None` for static text
    pub fn param_name(&self) -> Option<&'a str> {
        match self {
            SegmentKind::Static(_) => None,
            SegmentKind::Param(name) | SegmentKind::CatchAll(name) => Some(name),
        }
    }
}

/// Classifies a segment into a [`SegmentKind`] (pure function)
///
/// The returned names borrow from `segment`; no allocation happens.
pub fn classify_segment(segment: &str) -> SegmentKind<'_> {
    if let Some(name) = segment.strip_prefix(':') {
        SegmentKind::Param(name)
    } else if let Some(name) = segment.strip_prefix('*') {
        SegmentKind::CatchAll(name)
    } else {
        SegmentKind::Static(segment)
    }
}

/// Whether a segment is a wildcard (`:name` or `*name`)
///
/// # Examples
///
/// ```
/// use path_trie::route::pattern::is_wildcard_segment;
///
/// assert!(is_wildcard_segment(":id"));
/// assert!(is_wildcard_segment("*rest"));
/// assert!(!is_wildcard_segment("users"));
/// assert!(!is_wildcard_segment(""));
/// ```
pub fn is_wildcard_segment(segment: &str) -> bool {
    matches!(segment.as_bytes().first(), Some(b':') | Some(b'*'))
}
