/*!
 * cpdr - Copy directory trees and file contents to the system clipboard
 *
 * This library walks one or more filesystem paths, renders an ASCII
 * directory tree, concatenates non-ignored file contents and delivers
 * the assembled text to the system clipboard.
 */

pub mod clipboard;
pub mod config;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod report;
pub mod tree;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Config, OutputFormat};
pub use error::{CpdrError, Result};
pub use filter::IgnoreSet;
pub use pipeline::Pipeline;
pub use report::{FileReportInfo, Reporter, RunReport};
pub use tree::TreeRenderer;
pub use writer::ContentWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
