//! Route pattern parsing and validation
//!
//! Turns a pattern string into the segment list that gets inserted into the
//! trie. In strict mode malformed patterns are rejected with a
//! [`PatternError`]; in lenient mode every input is accepted as-is.

use std::collections::HashSet;

use crate::error::PatternError;
use crate::path::split_segments;
use crate::route::pattern::{classify_segment, SegmentKind};

/// Splits and (optionally) validates a route pattern
///
/// # Rules enforced when `strict` is true
///
/// 1. The pattern is not empty
/// 2. It starts with `/`
/// 3. Every `:` / `*` segment carries a name
/// 4. No parameter name is used twice
/// 5. A `*name` segment is the last one
///
/// The pattern `/` is valid and yields zero segments (the root route).
///
/// # Examples
///
/// ```
/// use path_trie::route::parser::parse_pattern;
/// use path_trie::PatternError;
///
/// assert_eq!(parse_pattern("/p/:lang/doc", true).unwrap(), vec!["p", ":lang", "doc"]);
/// assert_eq!(parse_pattern("", true), Err(PatternError::Empty));
///
/// // lenient: the empty pattern becomes a zero-segment insertion
/// assert!(parse_pattern("", false).unwrap().is_empty());
/// ```
pub fn parse_pattern(pattern: &str, strict: bool) -> Result<Vec<&str>, PatternError> {
    let segments = split_segments(pattern);
    if strict {
        validate(pattern, &segments)?;
    }
    Ok(segments)
}

fn validate(pattern: &str, segments: &[&str]) -> Result<(), PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }
    if !pattern.starts_with('/') {
        return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
    }

    let mut seen = HashSet::new();
    let last = segments.len().saturating_sub(1);

    for (idx, segment) in segments.iter().enumerate() {
        let kind = classify_segment(segment);

        if let Some(name) = kind.param_name() {
            if name.is_empty() {
                return Err(PatternError::UnnamedParameter {
                    pattern: pattern.to_string(),
                    segment: segment.to_string(),
                });
            }
            if !seen.insert(name) {
                return Err(PatternError::DuplicateParameter {
                    pattern: pattern.to_string(),
                    name: name.to_string(),
                });
            }
        }

        if matches!(kind, SegmentKind::CatchAll(_)) && idx != last {
            return Err(PatternError::CatchAllNotLast {
                pattern: pattern.to_string(),
                segment: segment.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static() {
        assert_eq!(parse_pattern("/hello", true).unwrap(), vec!["hello"]);
    }

    #[test]
    fn test_parse_root() {
        assert!(parse_pattern("/", true).unwrap().is_empty());
        assert!(parse_pattern("///", true).unwrap().is_empty());
    }

    #[test]
    fn test_parse_catch_all_last() {
        assert_eq!(
            parse_pattern("/static/*filepath", true).unwrap(),
            vec!["static", "*filepath"]
        );
    }

    #[test]
    fn test_reject_missing_slash() {
        assert_eq!(
            parse_pattern("hello", true),
            Err(PatternError::MissingLeadingSlash("hello".to_string()))
        );
    }

    #[test]
    fn test_reject_unnamed() {
        assert_eq!(
            parse_pattern("/users/:", true),
            Err(PatternError::UnnamedParameter {
                pattern: "/users/:".to_string(),
                segment: ":".to_string(),
            })
        );
        assert!(matches!(
            parse_pattern("/files/*", true),
            Err(PatternError::UnnamedParameter { .. })
        ));
    }

    #[test]
    fn test_reject_duplicate_name() {
        assert_eq!(
            parse_pattern("/a/:id/b/:id", true),
            Err(PatternError::DuplicateParameter {
                pattern: "/a/:id/b/:id".to_string(),
                name: "id".to_string(),
            })
        );
        // a param and a catch-all share one namespace
        assert!(matches!(
            parse_pattern("/a/:rest/*rest", true),
            Err(PatternError::DuplicateParameter { .. })
        ));
    }

    #[test]
    fn test_reject_catch_all_not_last() {
        assert_eq!(
            parse_pattern("/static/*filepath/raw", true),
            Err(PatternError::CatchAllNotLast {
                pattern: "/static/*filepath/raw".to_string(),
                segment: "*filepath".to_string(),
            })
        );
    }

    #[test]
    fn test_lenient_accepts_everything() {
        assert_eq!(parse_pattern("hello", false).unwrap(), vec!["hello"]);
        assert_eq!(parse_pattern("/a/*/b", false).unwrap(), vec!["a", "*", "b"]);
        assert!(parse_pattern("", false).unwrap().is_empty());
    }
}
