/*!
 * ctxdump - Concatenate a project's text files into one context file
 *
 * Walks a directory tree, keeps files whose names end in an allowlisted
 * suffix, and appends each one under a delimiter header to a single
 * plain-text output file.
 */

pub mod collector;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


use std::sync::Arc;

use indicatif::ProgressBar;

// Re-export main components for easier access
pub use collector::{CollectionStats, Collector};
pub use config::Config;
pub use error::{CtxDumpError, Result};
pub use report::{ReportFormat, Reporter, ScanReport};
pub use scanner::Scanner;
pub use types::{FileEntry, FileOutcome, ReadFailure};
pub use utils::{count_files, format_file_size};
pub use writer::ContextWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run one collection pass without a visible progress bar
pub fn build_context(config: Config) -> Result<CollectionStats> {
    config.validate()?;
    Collector::new(config, Arc::new(ProgressBar::hidden())).run()
}
