// File: src/config.rs
// Purpose: Trie behaviour configuration, optionally parsed from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How insertion treats a new literal segment next to an existing wildcard
///
/// # Examples
///
/// ```
/// use path_trie::{PathTrie, SiblingPolicy, TrieConfig};
///
/// let config = TrieConfig {
///     sibling_policy: SiblingPolicy::MergeIntoWildcard,
///     ..TrieConfig::default()
/// };
/// let mut trie = PathTrie::with_config(config);
/// trie.insert("/p/:lang").unwrap();
/// trie.insert("/p/go").unwrap();
///
/// // "/p/go" was folded into the existing ":lang" node
/// assert_eq!(trie.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiblingPolicy {
    /// Reuse a child only when its segment text is identical.
    /// Literal and wildcard children live side by side.
    #[default]
    Coexist,
    /// Reuse the first child that is literally equal OR a wildcard.
    /// Literal patterns registered after a wildcard at the same depth
    /// collapse into the wildcard node.
    MergeIntoWildcard,
}

/// Trie configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieConfig {
    /// Child reuse rule applied during insertion
    #[serde(default)]
    pub sibling_policy: SiblingPolicy,

    /// Reject malformed patterns at insert time (default: true)
    ///
    /// When disabled, malformed patterns are absorbed silently: an empty or
    /// all-slash pattern is stored on the root node.
    #[serde(default = "default_true")]
    pub validate_patterns: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            sibling_policy: SiblingPolicy::default(),
            validate_patterns: default_true(),
        }
    }
}

impl TrieConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read trie config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse trie config file: {:?}", path))
    }

    /// Parse configuration from a TOML document
    ///
    /// # Examples
    ///
    /// ```
    /// use path_trie::{SiblingPolicy, TrieConfig};
    ///
    /// let config = TrieConfig::from_toml_str(r#"sibling_policy = "merge_into_wildcard""#).unwrap();
    /// assert_eq!(config.sibling_policy, SiblingPolicy::MergeIntoWildcard);
    /// assert!(config.validate_patterns);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: TrieConfig = toml::from_str(content).context("Invalid trie configuration")?;
        Ok(config)
    }
}
