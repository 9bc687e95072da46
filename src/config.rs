/*!
 * Configuration handling for ctxdump
 */

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;
use crate::utils::{DEFAULT_EXTENSIONS, DEFAULT_IGNORE, DEFAULT_OUTPUT_NAME, SCRIPT_NAME};

/// Command-line arguments for ctxdump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "ctxdump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate a project's text files into a single context file",
    long_about = "Walks a directory tree, picks files with known text extensions and writes them, each under a delimiter header naming its path, into one plain-text file."
)]
pub struct Args {
    /// Root directory to walk
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Output file name
    #[clap(default_value = DEFAULT_OUTPUT_NAME)]
    pub output_file: String,

    /// Comma-separated file suffixes to include (default: .py,.md,.json,.js,.html,.css,.txt)
    #[clap(long, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Comma-separated directory names to skip (default: venv,.git,__pycache__,node_modules,.idea,.vscode)
    #[clap(long, value_delimiter = ',')]
    pub ignore_dirs: Vec<String>,

    /// File name of the collector script, never included in the output
    #[clap(long, default_value = SCRIPT_NAME)]
    pub script_name: String,

    /// Files larger than this many bytes get an error placeholder instead of content
    #[clap(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,

    /// Disable the progress spinner
    #[clap(long)]
    pub no_progress: bool,

    /// Enable debug logging on stderr
    #[clap(short, long)]
    pub verbose: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to walk
    pub target_dir: PathBuf,

    /// Output file path
    pub output_file: PathBuf,

    /// File name suffixes eligible for inclusion, in order
    pub extensions: Vec<String>,

    /// Directory names pruned before descent
    pub ignore_dirs: BTreeSet<String>,

    /// Name of the collector script itself
    pub script_name: Option<String>,

    /// Per-file size limit in bytes
    pub max_file_size: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("."),
            output_file: PathBuf::from(DEFAULT_OUTPUT_NAME),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignore_dirs: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            script_name: Some(SCRIPT_NAME.to_string()),
            max_file_size: None,
        }
    }
}

impl Config {
    /// Default configuration rooted at `target_dir`
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            ..Self::default()
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let defaults = Self::default();

        let extensions = if args.extensions.is_empty() {
            defaults.extensions
        } else {
            args.extensions
                .iter()
                .filter_map(|ext| normalize_extension(ext))
                .collect()
        };

        let ignore_dirs = if args.ignore_dirs.is_empty() {
            defaults.ignore_dirs
        } else {
            args.ignore_dirs
                .into_iter()
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
                .collect()
        };

        let script_name = Some(args.script_name).filter(|s| !s.is_empty());

        Self {
            target_dir: PathBuf::from(args.directory_path),
            output_file: PathBuf::from(args.output_file),
            extensions,
            ignore_dirs,
            script_name,
            max_file_size: args.max_file_size,
        }
    }

    /// File name component of the output path
    pub fn output_name(&self) -> Option<String> {
        self.output_file
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.is_dir(),
            PathNotFound,
            "Target directory not found: {}",
            self.target_dir.display()
        );

        // Check if output file directory exists
        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent == Path::new("") || parent.is_dir(),
                PathNotFound,
                "Output directory not found: {}",
                parent.display()
            );
        }

        ensure!(
            self.output_name().is_some(),
            Config,
            "Output path has no file name: {}",
            self.output_file.display()
        );

        ensure!(
            !self.extensions.is_empty(),
            Config,
            "At least one file extension is required"
        );

        Ok(())
    }
}

/// Turn user input like `rs` or ` .rs ` into `.rs`
fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim();
    if ext.is_empty() {
        return None;
    }
    if ext.starts_with('.') {
        Some(ext.to_string())
    } else {
        Some(format!(".{}", ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CtxDumpError;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_builtin_lists() {
        let config = Config::default();

        assert_eq!(
            config.extensions,
            vec![".py", ".md", ".json", ".js", ".html", ".css", ".txt"]
        );
        assert!(config.ignore_dirs.contains(".git"));
        assert!(config.ignore_dirs.contains("node_modules"));
        assert_eq!(config.ignore_dirs.len(), 6);
        assert_eq!(config.script_name.as_deref(), Some("unificar.py"));
        assert_eq!(
            config.output_name().as_deref(),
            Some("CONTEXTO_COMPLETO_ALICIA.txt")
        );
        assert_eq!(config.max_file_size, None);
    }

    #[test]
    fn from_args_uses_defaults_when_lists_are_empty() {
        let args = Args::parse_from(["ctxdump"]);
        let config = Config::from_args(args);

        assert_eq!(config.target_dir, PathBuf::from("."));
        assert_eq!(config.output_file, PathBuf::from(DEFAULT_OUTPUT_NAME));
        assert_eq!(config.extensions.len(), DEFAULT_EXTENSIONS.len());
        assert_eq!(config.ignore_dirs.len(), DEFAULT_IGNORE.len());
    }

    #[test]
    fn from_args_normalizes_overrides() {
        let args = Args::parse_from([
            "ctxdump",
            "--extensions",
            "rs, .toml,,",
            "--ignore-dirs",
            "target,.git",
            "--script-name",
            "",
            "--max-file-size",
            "1024",
            "src",
            "out.txt",
        ]);
        let config = Config::from_args(args);

        assert_eq!(config.extensions, vec![".rs", ".toml"]);
        assert_eq!(
            config.ignore_dirs.iter().map(String::as_str).collect::<Vec<_>>(),
            vec![".git", "target"]
        );
        assert_eq!(config.script_name, None);
        assert_eq!(config.max_file_size, Some(1024));
        assert_eq!(config.target_dir, PathBuf::from("src"));
        assert_eq!(config.output_file, PathBuf::from("out.txt"));
    }

    #[test]
    fn validate_rejects_missing_root() {
        let temp_dir = tempdir().unwrap();
        let config = Config::new(temp_dir.path().join("nope"));

        let err = config.validate().unwrap_err();
        assert!(matches!(err, CtxDumpError::PathNotFound(_)));
    }

    #[test]
    fn validate_rejects_missing_output_directory() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            output_file: temp_dir.path().join("missing").join("out.txt"),
            ..Config::new(temp_dir.path())
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Output directory not found"));
    }

    #[test]
    fn validate_rejects_empty_allowlist() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            extensions: vec![],
            ..Config::new(temp_dir.path())
        };

        assert!(matches!(
            config.validate().unwrap_err(),
            CtxDumpError::Config(_)
        ));
    }

    #[test]
    fn validate_accepts_bare_output_name() {
        let temp_dir = tempdir().unwrap();
        let config = Config::new(temp_dir.path());

        assert!(config.validate().is_ok());
    }
}
