/*!
 * Utility functions for ctxdump
 */

use std::path::Path;

use once_cell::sync::Lazy;

use crate::config::Config;
use crate::scanner::Scanner;

/// Default output file name
pub const DEFAULT_OUTPUT_NAME: &str = "CONTEXTO_COMPLETO_ALICIA.txt";

/// Name of the collector script, never part of its own output
pub const SCRIPT_NAME: &str = "unificar.py";

/// Default file suffixes eligible for inclusion
pub const DEFAULT_EXTENSIONS: &[&str] = &[".py", ".md", ".json", ".js", ".html", ".css", ".txt"];

/// Default directory names pruned from the walk
pub static DEFAULT_IGNORE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version Control
        ".git",
        // Python
        "venv",
        "__pycache__",
        // Dependencies
        "node_modules",
        // IDEs & Editors
        ".idea",
        ".vscode",
    ]
});

/// Count eligible files for progress tracking
///
/// Walk errors are ignored here; the real pass reports them.
pub fn count_files(root: &Path, config: &Config) -> u64 {
    let scanner = Scanner::new(config.clone());
    scanner.walk(root).filter(Result::is_ok).count() as u64
}

/// Header path for `path`: relative to `root`, prefixed with `./`
pub fn display_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    Path::new(".").join(relative).display().to_string()
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn formats_sizes() {
        assert_eq!(format_file_size(0), "0 bytes");
        assert_eq!(format_file_size(1023), "1023 bytes");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
        assert_eq!(format_file_size(2 * 1024 * 1024 * 1024), "2.00 GB");
    }

    #[test]
    fn display_path_is_dot_prefixed() {
        let root = PathBuf::from("/project");
        let nested = root.join("src").join("app.js");

        assert_eq!(
            display_path(&nested, &root),
            Path::new(".").join("src").join("app.js").display().to_string()
        );
        assert_eq!(display_path(&root.join("a.py"), &root), "./a.py");
    }

    #[test]
    fn counts_only_eligible_files() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.py"), "print(1)").unwrap();
        fs::write(root.join("b.rs"), "fn main() {}").unwrap();
        fs::create_dir(root.join("node_modules")).unwrap();
        fs::write(root.join("node_modules").join("dep.js"), "x").unwrap();
        fs::create_dir(root.join("docs")).unwrap();
        fs::write(root.join("docs").join("guide.md"), "# guide").unwrap();

        assert_eq!(count_files(root, &Config::new(root)), 2);
    }
}
