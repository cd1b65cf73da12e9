/*!
 * Pipeline driver for cpdr
 *
 * Resolves input paths, renders a tree per top-level directory, then
 * aggregates file contents and delivers the assembled buffer to the
 * system clipboard.
 */

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use crate::clipboard;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::report::RunReport;
use crate::tree::TreeRenderer;
use crate::utils::count_files;
use crate::writer::{ContentWriter, WriterStatistics, DASH_SEPARATOR, EQUALS_SEPARATOR};

/// Single-run driver owning the output buffer
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Create a new pipeline
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the run and return its report.
    ///
    /// Per-path failures (resolution, traversal, reads) are logged and
    /// skipped. A clipboard failure is recorded in the report but does
    /// not fail the run.
    pub fn run(&self) -> Result<RunReport> {
        let start_time = Instant::now();

        let (buffer, statistics) = self.assemble();

        if self.config.debug {
            println!("Debug: Output to be copied to clipboard:");
            println!("{}", buffer);
        }

        let clipboard_error = match clipboard::copy_to_clipboard(&buffer) {
            Ok(()) => None,
            Err(e) => {
                eprintln!("Failed to set clipboard: {}", e);
                Some(e.to_string())
            }
        };

        Ok(RunReport {
            structure_only: self.config.structure_only,
            files_processed: statistics.files_processed,
            total_lines: statistics.total_lines,
            total_chars: statistics.total_chars,
            output_bytes: buffer.len() as u64,
            duration: start_time.elapsed(),
            clipboard_error,
            file_details: statistics.file_details,
        })
    }

    /// Assemble the output buffer: directory trees first, then file
    /// contents unless structure-only mode is on
    pub fn assemble(&self) -> (String, WriterStatistics) {
        let inputs = self.resolve_inputs();
        let mut buffer = String::new();

        self.write_trees(&mut buffer, &top_level_dirs(&inputs));

        let statistics = if self.config.structure_only {
            WriterStatistics::default()
        } else {
            self.write_contents(&mut buffer, &inputs)
        };

        (buffer, statistics)
    }

    /// Resolve every input to an absolute path, skipping the ones that
    /// cannot be resolved
    fn resolve_inputs(&self) -> Vec<PathBuf> {
        let mut resolved = Vec::with_capacity(self.config.paths.len());
        for path in &self.config.paths {
            match fs::canonicalize(path) {
                Ok(abs_path) => resolved.push(abs_path),
                Err(e) => eprintln!("Failed to resolve {}: {}", path, e),
            }
        }
        resolved
    }

    /// Render a tree for each top-level directory into the buffer
    fn write_trees(&self, buffer: &mut String, top_dirs: &[PathBuf]) {
        let renderer = TreeRenderer::new(self.config.clone());

        buffer.push_str("Directory Trees:\n");
        buffer.push_str(EQUALS_SEPARATOR);
        buffer.push('\n');

        for dir in top_dirs {
            buffer.push_str(&format!("\nTree for {}:\n", dir.display()));
            match self.config.format {
                OutputFormat::Text => {
                    let tree = renderer.render(dir);
                    if tree.is_empty() {
                        if self.config.debug {
                            eprintln!("Warning: Empty tree generated for {}", dir.display());
                        }
                        buffer.push_str("(empty or inaccessible)\n");
                    } else {
                        buffer.push_str(&tree);
                    }
                }
                OutputFormat::Json => {
                    buffer.push_str("JSON output not implemented yet.\n");
                }
            }
            buffer.push('\n');
            buffer.push_str(DASH_SEPARATOR);
            buffer.push('\n');
        }

        buffer.push('\n');
        buffer.push_str(EQUALS_SEPARATOR);
        buffer.push_str("\n\n");
    }

    /// Aggregate file contents for every resolved input, directories
    /// recursively and plain files directly
    fn write_contents(&self, buffer: &mut String, inputs: &[PathBuf]) -> WriterStatistics {
        let total_files: u64 = inputs.iter().map(|p| count_files(p, &self.config)).sum();

        let progress = ProgressBar::new(total_files);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)")
                .unwrap(),
        );
        progress.set_prefix("Copying");

        let mut writer = ContentWriter::new(self.config.clone(), Arc::new(progress.clone()));
        for path in inputs {
            if path.is_dir() {
                writer.append_tree(buffer, path);
            } else {
                writer.append_file(buffer, path);
            }
        }

        progress.finish_and_clear();
        writer.statistics().clone()
    }
}

/// Reduce resolved inputs to the minimal set of top-level directories.
///
/// A file input maps to its parent directory. A directory that is a
/// strict subpath of another retained directory is dropped. The result
/// is in ascending lexicographic order.
pub fn top_level_dirs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut dirs: BTreeSet<PathBuf> = BTreeSet::new();
    for path in inputs {
        if path.is_dir() {
            dirs.insert(path.clone());
        } else if let Some(parent) = path.parent() {
            dirs.insert(parent.to_path_buf());
        }
    }

    let mut top_dirs: Vec<PathBuf> = Vec::new();
    for dir in dirs {
        if !top_dirs.iter().any(|top| is_strict_subpath(&dir, top)) {
            top_dirs.push(dir);
        }
    }
    top_dirs
}

fn is_strict_subpath(path: &Path, ancestor: &Path) -> bool {
    path != ancestor && path.starts_with(ancestor)
}
