use std::fmt::{self, Display};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::trace;

use super::logging::report_error;

/// Buffered text writer that flushes after every write. Creating one
/// truncates the target file; the stream is released when the writer is
/// dropped.
pub struct FileWriter {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileWriter {
    /// Creates (or truncates) `path` for writing.
    pub fn create<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let writer = FileWriter::open_stream(&path)?;

        Ok(FileWriter { path, writer })
    }

    /// Writes `content` to `path`, leaving the file with only that content.
    pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> anyhow::Result<()> {
        let mut writer = FileWriter::create(path)?;
        writer.write(content)
    }

    fn open_stream(path: &Path) -> anyhow::Result<BufWriter<File>> {
        match File::create(path) {
            Ok(file) => {
                trace!("opened {} for writing", path.display());
                Ok(BufWriter::new(file))
            }
            Err(e) => report_error(format!(
                "failed to open {} for writing: {}",
                path.display(),
                e
            )),
        }
    }

    /// Appends `text` and flushes it to disk immediately.
    pub fn write(&mut self, text: &str) -> anyhow::Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush())
            .with_context(|| format!("failed writing to {}", self.path.display()))
    }

    /// Writes `text` followed by a newline.
    pub fn write_line(&mut self, text: &str) -> anyhow::Result<()> {
        self.write(text)?;
        self.write("\n")
    }

    /// Truncates the file and restarts the stream from empty.
    pub fn reopen(&mut self) -> anyhow::Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("failed flushing {}", self.path.display()))?;
        self.writer = FileWriter::open_stream(&self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Display for FileWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileWriter({})", self.path.display())
    }
}

#[cfg(test)]
mod file_writer_tests {
    use std::fs;
    use std::path::PathBuf;

    use super::FileWriter;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("kitbag_writer_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_write_is_visible_immediately() {
        let _ = env_logger::builder().is_test(true).try_init();

        let path = temp_path("flush");
        let mut writer = FileWriter::create(&path).unwrap();
        writer.write("hello").unwrap();

        // Flushed on every write, so the file is current while still open.
        assert_eq!("hello", fs::read_to_string(&path).unwrap());

        writer.write(" world").unwrap();
        assert_eq!("hello world", fs::read_to_string(&path).unwrap());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_reopen_discards_prior_content() {
        let path = temp_path("reopen");
        let mut writer = FileWriter::create(&path).unwrap();
        writer.write("to be discarded").unwrap();

        writer.reopen().unwrap();
        writer.write("x").unwrap();

        assert_eq!("x", fs::read_to_string(&path).unwrap());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_create_truncates_existing_file() {
        let path = temp_path("truncate");
        fs::write(&path, "previous").unwrap();

        let mut writer = FileWriter::create(&path).unwrap();
        writer.write("new").unwrap();

        assert_eq!("new", fs::read_to_string(&path).unwrap());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_line_appends_newline() {
        let path = temp_path("line");
        let mut writer = FileWriter::create(&path).unwrap();
        writer.write_line("a").unwrap();
        writer.write_line("b").unwrap();

        assert_eq!("a\nb\n", fs::read_to_string(&path).unwrap());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_file_one_shot() {
        let path = temp_path("one_shot");
        FileWriter::write_file(&path, "content").unwrap();

        assert_eq!("content", fs::read_to_string(&path).unwrap());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unwritable_path_propagates_failure() {
        let path = temp_path("nested").join("missing_dir").join("file");
        assert!(FileWriter::create(&path).is_err());
    }

    #[test]
    fn test_display_names_the_path() {
        let path = temp_path("display");
        let writer = FileWriter::create(&path).unwrap();

        assert_eq!(
            format!("FileWriter({})", path.display()),
            writer.to_string()
        );

        drop(writer);
        fs::remove_file(&path).ok();
    }
}
