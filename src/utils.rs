/*!
 * Utility functions for cpdr
 */

use std::path::Path;

use walkdir::WalkDir;

use crate::config::Config;

/// Count the files that would be aggregated under `path`, for progress
/// tracking. Walk errors are ignored here; the aggregation pass reports
/// them.
pub fn count_files(path: &Path, config: &Config) -> u64 {
    if path.is_file() {
        return if config.ignore_set.is_ignored(path) { 0 } else { 1 };
    }

    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| !config.ignore_set.is_ignored(e.path()))
        .count() as u64
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
