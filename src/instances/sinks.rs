//! Consumers that write values out.

use std::cell::RefCell;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

use crate::error::ConsumeError;
use crate::function::Consumer;

/// Writes each value on its own line, after a fixed prefix.
///
/// # Examples
///
/// ```rust
/// use funcops::function::Consumer;
/// use funcops::instances::sinks::PrefixedLine;
///
/// let sink = PrefixedLine::new("LOG: ", Vec::<u8>::new());
/// sink.accept("started").unwrap();
/// sink.accept(&42).unwrap();
///
/// assert_eq!(sink.into_inner(), b"LOG: started\nLOG: 42\n");
/// ```
#[derive(Debug)]
pub struct PrefixedLine<W> {
    prefix: String,
    writer: RefCell<W>,
}

impl<W: Write> PrefixedLine<W> {
    /// Creates a sink writing to `writer`.
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: RefCell::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl PrefixedLine<Stdout> {
    /// Creates a sink writing to standard output.
    pub fn stdout(prefix: impl Into<String>) -> Self {
        Self::new(prefix, io::stdout())
    }
}

impl<T, W> Consumer<T> for PrefixedLine<W>
where
    T: Display + ?Sized,
    W: Write,
{
    fn accept(&self, value: &T) -> Result<(), ConsumeError> {
        let mut writer = self.writer.borrow_mut();
        writeln!(writer, "{}{value}", self.prefix)
            .and_then(|()| writer.flush())
            .map_err(ConsumeError::Write)
    }
}

/// Appends each value verbatim to a file, creating the file if needed.
///
/// The file is opened in append mode on every call and never truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAppender {
    path: PathBuf,
}

impl FileAppender {
    /// Creates an appender targeting `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this appender writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append_error(&self, source: io::Error) -> ConsumeError {
        ConsumeError::Append {
            path: self.path.clone(),
            source,
        }
    }
}

impl Consumer<str> for FileAppender {
    fn accept(&self, value: &str) -> Result<(), ConsumeError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.append_error(source))?;
        file.write_all(value.as_bytes())
            .map_err(|source| self.append_error(source))?;

        tracing::debug!(
            path = %self.path.display(),
            bytes = value.len(),
            "appended to file"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_prefixed_line_reports_write_failure() {
        let sink = PrefixedLine::new("> ", BrokenPipe);
        let error = sink.accept("lost").unwrap_err();
        assert!(matches!(
            error,
            ConsumeError::Write(ref source) if source.kind() == io::ErrorKind::BrokenPipe
        ));
    }

    #[test]
    fn test_file_appender_reports_path_on_failure() {
        let directory = tempfile::tempdir().unwrap();
        let appender = FileAppender::new(directory.path());

        let error = appender.accept("x").unwrap_err();
        assert!(matches!(
            error,
            ConsumeError::Append { ref path, .. } if path == directory.path()
        ));
    }
}
