/*!
 * Path filtering for cpdr
 *
 * Decides whether a filesystem path is excluded from tree rendering and
 * content aggregation, based on built-in and user-supplied ignore patterns.
 */

use std::path::Path;

use once_cell::sync::Lazy;

/// Patterns that are always ignored, regardless of user configuration
pub static BUILTIN_IGNORE: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec![".terraform", ".module", "__pycache__"]);

/// An ordered, immutable set of literal ignore patterns.
///
/// Patterns are plain strings, not globs or regexes. A path is excluded
/// when any non-empty pattern equals its basename, equals any of its
/// components, or occurs anywhere in the path string.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    patterns: Vec<String>,
}

impl IgnoreSet {
    /// Build an ignore set from user-supplied patterns plus the built-ins.
    ///
    /// User patterns are whitespace-trimmed; empty entries are dropped.
    pub fn new(user_patterns: &[String]) -> Self {
        let mut patterns: Vec<String> =
            BUILTIN_IGNORE.iter().map(|p| p.to_string()).collect();
        patterns.extend(
            user_patterns
                .iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
        );
        Self { patterns }
    }

    /// The patterns in this set, built-ins first
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Check whether `path` must be excluded.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        let basename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        for pattern in &self.patterns {
            if pattern.is_empty() {
                continue;
            }
            if basename == *pattern {
                return true;
            }
            if path
                .components()
                .any(|c| c.as_os_str().to_string_lossy() == *pattern)
            {
                return true;
            }
            // Legacy broad match: the original tool excluded on plain
            // substring containment, so keep accepting it.
            if path_str.contains(pattern.as_str()) {
                return true;
            }
        }

        false
    }
}
