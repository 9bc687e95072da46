/*!
 * Plain-text context writer for ctxdump
 *
 * Output layout:
 *
 * ```text
 * RESUMEN TÉCNICO DEL PROYECTO
 * RUTA: /abs/root
 *
 *
 * ============================================================
 * ARCHIVO: ./src/app.js
 * ============================================================
 *
 * <verbatim content or error placeholder>
 * ```
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::types::{FileEntry, FileOutcome};

/// Width of the `=` rule around each header
pub const DELIMITER_WIDTH: usize = 60;

/// First banner line
pub const BANNER_TITLE: &str = "RESUMEN TÉCNICO DEL PROYECTO";

/// Label preceding each file path
pub const HEADER_LABEL: &str = "ARCHIVO";

/// Prefix of the placeholder written in place of unreadable content
pub const PLACEHOLDER_PREFIX: &str = "ERROR LEYENDO ARCHIVO";

/// Writer for the concatenated context file
pub struct ContextWriter<W: Write> {
    inner: W,
    /// Bytes of file content written so far
    content_bytes: u64,
}

impl ContextWriter<BufWriter<File>> {
    /// Create or truncate the output file
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ContextWriter<W> {
    /// Wrap an existing writer
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            content_bytes: 0,
        }
    }

    /// Write the two-line project banner followed by a blank line
    pub fn write_banner(&mut self, root: &Path) -> io::Result<()> {
        write!(
            self.inner,
            "{}\nRUTA: {}\n\n",
            BANNER_TITLE,
            root.display()
        )
    }

    /// Write the delimiter block for `entry` followed by its content or a placeholder
    pub fn write_entry(&mut self, entry: &FileEntry, outcome: &FileOutcome) -> io::Result<()> {
        let rule = "=".repeat(DELIMITER_WIDTH);
        write!(
            self.inner,
            "\n{rule}\n{}: {}\n{rule}\n\n",
            HEADER_LABEL,
            entry.display_path,
            rule = rule
        )?;

        match outcome {
            FileOutcome::Read(content) => {
                self.inner.write_all(content.as_bytes())?;
                self.content_bytes += content.len() as u64;
            }
            FileOutcome::Failed(failure) => {
                writeln!(self.inner, "[{}: {}]", PLACEHOLDER_PREFIX, failure)?;
            }
        }

        Ok(())
    }

    /// Bytes of file content written so far, excluding headers and placeholders
    pub fn content_bytes(&self) -> u64 {
        self.content_bytes
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
