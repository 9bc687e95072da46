/*!
 * The single collection pass: walk, read, append
 */

use std::path::PathBuf;
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{CtxDumpError, Result};
use crate::scanner::Scanner;
use crate::types::FileOutcome;
use crate::writer::ContextWriter;

/// Counters gathered during one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionStats {
    /// Canonical root that was walked
    pub root: PathBuf,
    /// Files whose content was written
    pub files_processed: usize,
    /// Eligible files that got an error placeholder
    pub files_failed: usize,
    /// Bytes of file content written
    pub content_bytes: u64,
}

/// Runs the walk and writes every eligible file into the output
pub struct Collector {
    config: Config,
    /// Progress bar; also carries the per-file console lines
    pub progress: Arc<ProgressBar>,
}

impl Collector {
    /// Create a new collector
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Create the output file and fill it in one sequential pass
    ///
    /// Read failures of individual files are written as placeholders and
    /// never abort the run. A failure to create or write the output, or to
    /// walk the root, does; whatever was written up to that point is left
    /// on disk.
    pub fn run(&self) -> Result<CollectionStats> {
        let scanner = Scanner::new(self.config.clone());
        let root = scanner.root()?;
        let output = &self.config.output_file;

        info!("Collecting {} into {}", root.display(), output.display());

        let mut writer =
            ContextWriter::create(output).map_err(|e| CtxDumpError::io(output, e))?;
        writer
            .write_banner(&root)
            .map_err(|e| CtxDumpError::io(output, e))?;

        let mut stats = CollectionStats {
            root: root.clone(),
            ..CollectionStats::default()
        };

        for entry in scanner.walk(&root) {
            let entry = entry?;
            self.progress
                .set_message(format!("Current file: {}", entry.display_path));

            let outcome = scanner.read_file(&entry.path);
            writer
                .write_entry(&entry, &outcome)
                .map_err(|e| CtxDumpError::io(output, e))?;

            match &outcome {
                FileOutcome::Read(_) => {
                    stats.files_processed += 1;
                    self.announce(format!("Added: {}", entry.name));
                }
                FileOutcome::Failed(failure) => {
                    stats.files_failed += 1;
                    warn!("Failed to read {}: {}", entry.display_path, failure);
                }
            }
            self.progress.inc(1);
        }

        stats.content_bytes = writer.content_bytes();
        writer.finish().map_err(|e| CtxDumpError::io(output, e))?;

        info!(
            "Wrote {} files ({} failed) to {}",
            stats.files_processed,
            stats.files_failed,
            output.display()
        );

        Ok(stats)
    }

    /// Print an operator line without tearing the progress bar
    fn announce(&self, line: String) {
        if self.progress.is_hidden() {
            println!("{}", line);
        } else {
            self.progress.println(line);
        }
    }
}
