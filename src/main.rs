/*!
 * Command-line interface for ctxdump
 */

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use ctxdump::config::{Args, Config};
use ctxdump::report::{ReportFormat, Reporter, ScanReport};
use ctxdump::utils::count_files;
use ctxdump::{Collector, Scanner};

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "ctxdump", &mut io::stdout());
        return Ok(());
    }

    init_tracing(args.verbose);
    let show_progress = !args.no_progress;

    // Create and validate configuration
    let config = Config::from_args(args);
    config.validate()?;

    let root = Scanner::new(config.clone()).root()?;
    println!("--- Starting context build in: {} ---", root.display());

    let progress = if show_progress {
        let progress = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ⏱️  {elapsed_precise}")
        {
            progress.set_style(style);
        }
        progress.enable_steady_tick(Duration::from_millis(100));
        progress
    } else {
        ProgressBar::hidden()
    };

    // Count files for progress tracking
    progress.set_prefix("📊 Setup");
    progress.set_message(format!("📂 Scanning directory: {}", root.display()));
    let total_files = count_files(&root, &config);
    progress.set_length(total_files);
    progress.set_prefix("📊 Processing");

    let collector = Collector::new(config.clone(), Arc::new(progress.clone()));

    let start_time = Instant::now();
    let stats = collector.run()?;
    let duration = start_time.elapsed();

    progress.finish_and_clear();

    let report = ScanReport::new(&stats, config.output_file.display().to_string(), duration);
    Reporter::new(ReportFormat::ConsoleTable).print_report(&report);

    Ok(())
}

/// Log to stderr, honouring `RUST_LOG` when set
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
