/*!
 * Configuration handling for cpdr
 */

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;
use crate::filter::IgnoreSet;

/// Output format for rendered directory trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text ASCII tree (default)
    Text,
    /// Structured JSON tree (not implemented yet)
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

/// Command-line arguments for cpdr
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "cpdr",
    version = env!("CARGO_PKG_VERSION"),
    about = "Copy directory trees and file contents to the system clipboard",
    long_about = "Walks the given paths, renders an ASCII tree of each top-level \
directory, appends the contents of every non-ignored file and places the \
assembled text on the system clipboard."
)]
pub struct Args {
    /// Files or directories to process
    #[clap(required_unless_present = "generate")]
    pub paths: Vec<String>,

    /// Generate only directory structure, skip file contents
    #[clap(short = 's', long = "structure")]
    pub structure: bool,

    /// Comma-separated list of patterns to ignore
    #[clap(short = 'i', long = "ignore", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Maximum depth for directory trees (-1 for no limit)
    #[clap(short = 'd', long = "depth", default_value = "-1", allow_hyphen_values = true)]
    pub depth: i32,

    /// Output format for trees
    #[clap(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    /// Enable debug output
    #[clap(long)]
    pub debug: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Input paths to process, in the order given
    pub paths: Vec<String>,

    /// Render trees only, aggregate no file contents
    pub structure_only: bool,

    /// Combined built-in and user ignore patterns
    pub ignore_set: IgnoreSet,

    /// Maximum tree depth (-1 means unlimited)
    pub max_depth: i32,

    /// Output format for trees
    pub format: OutputFormat,

    /// Emit extra diagnostics for recoverable failures
    pub debug: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            paths: args.paths,
            structure_only: args.structure,
            ignore_set: IgnoreSet::new(&args.ignore),
            max_depth: args.depth,
            format: args.format,
            debug: args.debug,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.paths.is_empty(), InvalidArgument, "no paths specified");
        Ok(())
    }
}
