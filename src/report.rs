/*!
 * Run reporting for cpdr
 *
 * Prints the end-of-run confirmation line and, in debug mode, a
 * per-file statistics table rendered with the tabled library.
 */

use std::collections::HashMap;
use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::utils::format_file_size;

/// Information about a single aggregated file
#[derive(Debug, Clone, Default)]
pub struct FileReportInfo {
    /// Number of lines in the file
    pub lines: usize,
    /// Number of characters in the file
    pub chars: usize,
}

/// Outcome of a pipeline run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Whether only directory structure was generated
    pub structure_only: bool,
    /// Number of files aggregated into the buffer
    pub files_processed: usize,
    /// Total number of lines aggregated
    pub total_lines: usize,
    /// Total number of characters aggregated
    pub total_chars: usize,
    /// Size of the assembled output buffer in bytes
    pub output_bytes: u64,
    /// Time taken for the run
    pub duration: Duration,
    /// Clipboard failure, if the write did not succeed
    pub clipboard_error: Option<String>,
    /// Details for each aggregated file
    pub file_details: HashMap<String, FileReportInfo>,
}

#[derive(Tabled)]
struct FileRow {
    #[tabled(rename = "File")]
    path: String,
    #[tabled(rename = "Lines")]
    lines: usize,
    #[tabled(rename = "Chars")]
    chars: usize,
}

/// Report printer for run results
pub struct Reporter {
    /// Include the per-file statistics table
    debug: bool,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Print the run summary to stdout
    pub fn print_summary(&self, report: &RunReport) {
        if self.debug {
            println!("{}", self.generate_statistics(report));
        }

        println!("{}", self.confirmation_line(report));
    }

    /// The one-line confirmation distinguishing structure-only from
    /// full-content runs
    pub fn confirmation_line(&self, report: &RunReport) -> &'static str {
        match (report.structure_only, report.clipboard_error.is_some()) {
            (true, false) => "Directory structure has been copied to the clipboard",
            (false, false) => "File contents have been copied to the clipboard",
            (true, true) => {
                "Directory structure was generated but could not be copied to the clipboard"
            }
            (false, true) => {
                "File contents were generated but could not be copied to the clipboard"
            }
        }
    }

    /// Render the debug statistics block
    fn generate_statistics(&self, report: &RunReport) -> String {
        let mut rows: Vec<FileRow> = report
            .file_details
            .iter()
            .map(|(path, info)| FileRow {
                path: path.clone(),
                lines: info.lines,
                chars: info.chars,
            })
            .collect();
        rows.sort_by(|a, b| a.path.cmp(&b.path));

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

        format!(
            "{}\nFiles: {}  Lines: {}  Chars: {}  Output: {}  Elapsed: {:.2?}",
            table,
            report.files_processed,
            report.total_lines,
            report.total_chars,
            format_file_size(report.output_bytes),
            report.duration,
        )
    }
}
