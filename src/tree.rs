/*!
 * ASCII directory tree rendering
 */

use std::fs;
use std::path::Path;

use crate::config::Config;

/// Branch drawn in front of the last entry of a directory
const BRANCH_LAST: &str = "└── ";
/// Branch drawn in front of every other entry
const BRANCH_MID: &str = "├── ";
/// Prefix continuation under a last entry
const INDENT_LAST: &str = "    ";
/// Prefix continuation under a non-last entry
const INDENT_MID: &str = "│   ";

/// Renders a recursive ASCII tree of a directory.
///
/// Ignored paths and entries beyond the configured depth are pruned.
/// Paths that cannot be inspected produce no output; the failure is
/// reported on stderr in debug mode and never aborts the render.
pub struct TreeRenderer {
    config: Config,
}

impl TreeRenderer {
    /// Create a new renderer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Render the tree rooted at `path`.
    ///
    /// Returns an empty string when the root itself is ignored or
    /// inaccessible.
    pub fn render(&self, path: &Path) -> String {
        self.render_entry(path, "", true, 0)
    }

    fn render_entry(&self, path: &Path, prefix: &str, is_last: bool, depth: i32) -> String {
        if self.config.ignore_set.is_ignored(path) {
            return String::new();
        }
        if self.config.max_depth >= 0 && depth > self.config.max_depth {
            return String::new();
        }

        let basename = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy();

        let metadata = match fs::symlink_metadata(path) {
            Ok(m) => m,
            Err(e) => {
                if self.config.debug {
                    eprintln!("Error accessing path {}: {}", path.display(), e);
                }
                return String::new();
            }
        };

        let branch = if is_last { BRANCH_LAST } else { BRANCH_MID };

        if metadata.file_type().is_symlink() {
            // a broken link counts as a stat failure; an intact link is
            // rendered as a leaf, never followed
            return match fs::metadata(path) {
                Ok(_) => format!("{}{}{}\n", prefix, branch, basename),
                Err(e) => {
                    if self.config.debug {
                        eprintln!("Error accessing path {}: {}", path.display(), e);
                    }
                    String::new()
                }
            };
        }

        if !metadata.is_dir() {
            return format!("{}{}{}\n", prefix, branch, basename);
        }

        let mut output = format!("{}{}{}/\n", prefix, branch, basename);
        let child_prefix = format!(
            "{}{}",
            prefix,
            if is_last { INDENT_LAST } else { INDENT_MID }
        );

        let mut entries = match fs::read_dir(path) {
            Ok(iter) => iter.filter_map(|e| e.ok()).collect::<Vec<_>>(),
            Err(e) => {
                // keep the directory's own line, just stop descending
                if self.config.debug {
                    eprintln!("Error reading directory {}: {}", path.display(), e);
                }
                return output;
            }
        };
        entries.sort_by_key(|e| e.file_name());

        let count = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            output.push_str(&self.render_entry(
                &entry.path(),
                &child_prefix,
                i == count - 1,
                depth + 1,
            ));
        }

        output
    }
}
