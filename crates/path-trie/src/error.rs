/// Errors raised while registering a route pattern
///
/// Only produced when pattern validation is enabled (the default, see
/// [`TrieConfig::validate_patterns`](crate::TrieConfig)). A failed search is
/// never an error: lookups return `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The pattern is the empty string
    #[error("route pattern is empty")]
    Empty,

    /// The pattern does not begin with `/`
    #[error("route pattern must start with '/': {0}")]
    MissingLeadingSlash(String),

    /// A `:` or `*` segment without a name
    #[error("unnamed parameter segment `{segment}` in route pattern {pattern}")]
    UnnamedParameter { pattern: String, segment: String },

    /// The same parameter name appears twice in one pattern
    #[error("parameter `{name}` is declared more than once in route pattern {pattern}")]
    DuplicateParameter { pattern: String, name: String },

    /// A catch-all segment followed by further segments
    #[error("catch-all segment `{segment}` must be the last segment of route pattern {pattern}")]
    CatchAllNotLast { pattern: String, segment: String },
}
