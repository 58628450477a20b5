use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::trace;

use super::logging::report_error;

/// Buffered line-oriented reader over a text file. The underlying stream is
/// owned exclusively and released when the reader is dropped.
pub struct FileReader {
    path: PathBuf,
    reader: BufReader<File>,
    at_start: bool,
}

impl FileReader {
    /// Opens `path` for sequential line reading.
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                return report_error(format!(
                    "failed to open {} for reading: {}",
                    path.display(),
                    e
                ))
            }
        };

        trace!("opened {} for reading", path.display());
        Ok(FileReader {
            path,
            reader: BufReader::new(file),
            at_start: true,
        })
    }

    /// Reads the whole file at `path` into a string.
    pub fn read_file<P: AsRef<Path>>(path: P) -> anyhow::Result<String> {
        let mut reader = FileReader::open(path)?;
        reader.read_to_string()
    }

    /// Reads the next line without its terminator. `None` marks the end of
    /// the input.
    pub fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .with_context(|| format!("failed reading from {}", self.path.display()))?;
        self.at_start = false;

        if read == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }

    /// Reads all remaining lines, each followed by a newline.
    pub fn read_rest(&mut self) -> anyhow::Result<String> {
        let mut contents = String::new();
        while let Some(line) = self.read_line()? {
            contents.push_str(&line);
            contents.push('\n');
        }

        Ok(contents)
    }

    /// Reads the entire file, rewinding first if part of it was already
    /// consumed.
    pub fn read_to_string(&mut self) -> anyhow::Result<String> {
        if !self.at_start {
            self.rewind()?;
        }

        self.read_rest()
    }

    /// Drops the current stream and reopens the file at the beginning.
    pub fn rewind(&mut self) -> anyhow::Result<()> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                return report_error(format!(
                    "failed to reopen {} for reading: {}",
                    self.path.display(),
                    e
                ))
            }
        };

        self.reader = BufReader::new(file);
        self.at_start = true;
        trace!("rewound {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
