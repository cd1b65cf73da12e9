/*!
 * File content aggregation for cpdr
 *
 * Appends the contents of non-ignored files, framed by header and
 * separator lines, to the shared output buffer.
 */

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::report::FileReportInfo;

/// Separator printed under each file header
pub const DASH_SEPARATOR: &str = "--------------------------------------------------";
/// Separator printed after each file body
pub const EQUALS_SEPARATOR: &str = "==================================================";

/// Statistics collected while aggregating file contents
#[derive(Debug, Clone, Default)]
pub struct WriterStatistics {
    /// Number of files appended to the buffer
    pub files_processed: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Details for each file
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Appends file contents to the output buffer
pub struct ContentWriter {
    /// Writer configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
    /// Aggregation statistics
    statistics: WriterStatistics,
}

impl ContentWriter {
    /// Create a new content writer
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self {
            config,
            progress,
            statistics: WriterStatistics::default(),
        }
    }

    /// Get aggregation statistics
    pub fn statistics(&self) -> &WriterStatistics {
        &self.statistics
    }

    /// Append every non-ignored file under `root` to `buffer`.
    ///
    /// Subdirectories are visited recursively; only leaf files are
    /// written. An ignored file is skipped individually, never the
    /// whole subtree. Walk errors are logged and skipped so the
    /// remaining entries still get aggregated.
    pub fn append_tree(&mut self, buffer: &mut String, root: &Path) {
        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    eprintln!("Failed to walk directory {}: {}", root.display(), e);
                    continue;
                }
            };
            if entry.file_type().is_file() {
                self.append_file(buffer, entry.path());
            }
        }
    }

    /// Append a single file's content to `buffer`.
    ///
    /// Ignored files produce no output. Read failures are recorded
    /// inline in the buffer as an `Error reading ...` line, so the
    /// failure stays visible in the copied text itself.
    pub fn append_file(&mut self, buffer: &mut String, path: &Path) {
        if self.config.ignore_set.is_ignored(path) {
            return;
        }

        self.progress.inc(1);
        let display_path = path.to_string_lossy().replace('\\', "/");
        self.progress.set_message(format!("Current file: {}", display_path));

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                buffer.push_str(&format!("Error reading {}: {}\n\n", display_path, e));
                return;
            }
        };

        buffer.push_str(&format!("File: {}\n", display_path));
        buffer.push_str(DASH_SEPARATOR);
        buffer.push('\n');
        buffer.push_str(&content);
        buffer.push_str("\n\n");
        buffer.push_str(EQUALS_SEPARATOR);
        buffer.push_str("\n\n");

        let lines = content.lines().count();
        let chars = content.chars().count();
        self.statistics.files_processed += 1;
        self.statistics.total_lines += lines;
        self.statistics.total_chars += chars;
        self.statistics
            .file_details
            .insert(display_path, FileReportInfo { lines, chars });
    }
}
