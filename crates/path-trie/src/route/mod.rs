//! Route pattern handling
//!
//! Everything that interprets the text of a pattern lives here: segment
//! classification, parsing/validation, and post-match parameter binding.
//! The trie itself only compares segment strings.

pub mod params;
pub mod parser;
pub mod pattern;

pub use params::bind_params;
pub use parser::parse_pattern;
pub use pattern::{classify_segment, is_wildcard_segment, SegmentKind};
