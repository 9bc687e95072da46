/*!
 * Reporting functionality for ctxdump
 *
 * Prints the end-of-run summary lines followed by a table rendered with
 * the tabled library.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::collector::CollectionStats;
use crate::utils::format_file_size;

/// Statistics for a finished run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Scanned root directory
    pub root: String,
    /// Output file path
    pub output_file: String,
    /// Time taken by the collection pass
    pub duration: Duration,
    /// Number of files whose content was written
    pub files_processed: usize,
    /// Number of files replaced by an error placeholder
    pub files_failed: usize,
    /// Bytes of file content written
    pub content_bytes: u64,
}

impl ScanReport {
    /// Build a report from collector statistics
    pub fn new(stats: &CollectionStats, output_file: String, duration: Duration) -> Self {
        Self {
            root: stats.root.display().to_string(),
            output_file,
            duration,
            files_processed: stats.files_processed,
            files_failed: stats.files_failed,
            content_bytes: stats.content_bytes,
        }
    }
}

/// Format of the report output
pub enum ReportFormat {
    /// Summary lines plus a console table
    ConsoleTable,
}

/// Report generator for scan results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string based on scan statistics
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) {
        println!("\n{}", self.generate_report(report));
    }

    fn create_summary_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Root",
                value: report.root.clone(),
            },
            SummaryRow {
                key: "📄 Output File",
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "✅ Files Processed",
                value: report.files_processed.to_string(),
            },
            SummaryRow {
                key: "⚠️ Read Failures",
                value: report.files_failed.to_string(),
            },
            SummaryRow {
                key: "📦 Content Size",
                value: format_file_size(report.content_bytes),
            },
            SummaryRow {
                key: "⏱️ Process Time",
                value: format!("{:.4?}", report.duration),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn generate_console_report(&self, report: &ScanReport) -> String {
        format!(
            "--- FINISHED ---\nProcessed {} files.\nOutput file: {}\n\n{}",
            report.files_processed,
            report.output_file,
            self.create_summary_table(report)
        )
    }
}
