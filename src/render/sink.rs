//! Filesystem seam for the renderer: real runs write through [`DirSink`],
//! tests inject an in-memory recorder.

use std::fs;
use std::path::PathBuf;

use crate::error::Error;

/// Destination for the generated documents. Implementations map their own
/// I/O failures to [`Error::Write`] with the full target path.
pub trait OutputSink {
    /// Create the output directory; succeeds if it already exists.
    fn create_dir_if_absent(&self) -> Result<(), Error>;

    /// Write one named document inside the output directory, replacing any
    /// previous content.
    fn write_text(&self, file_name: &str, contents: &str) -> Result<(), Error>;
}

/// Writes documents into one directory on the local filesystem.
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl OutputSink for DirSink {
    fn create_dir_if_absent(&self) -> Result<(), Error> {
        fs::create_dir_all(&self.dir).map_err(|source| Error::Write {
            path: self.dir.clone(),
            source,
        })
    }

    fn write_text(&self, file_name: &str, contents: &str) -> Result<(), Error> {
        let path = self.dir.join(file_name);
        fs::write(&path, contents).map_err(|source| Error::Write { path, source })
    }
}

/// Records writes in memory instead of touching the filesystem. Test-only
/// replacement for the original's subclass-override mocking.
#[cfg(test)]
pub(crate) struct MemorySink {
    pub writes: std::cell::RefCell<Vec<(String, String)>>,
    pub dirs_created: std::cell::Cell<usize>,
}

#[cfg(test)]
impl MemorySink {
    pub(crate) fn new() -> Self {
        Self {
            writes: std::cell::RefCell::new(Vec::new()),
            dirs_created: std::cell::Cell::new(0),
        }
    }

    pub(crate) fn file_names(&self) -> Vec<String> {
        self.writes
            .borrow()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub(crate) fn contents_of(&self, file_name: &str) -> Option<String> {
        self.writes
            .borrow()
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, contents)| contents.clone())
    }
}

#[cfg(test)]
impl OutputSink for MemorySink {
    fn create_dir_if_absent(&self) -> Result<(), Error> {
        self.dirs_created.set(self.dirs_created.get() + 1);
        Ok(())
    }

    fn write_text(&self, file_name: &str, contents: &str) -> Result<(), Error> {
        self.writes
            .borrow_mut()
            .push((file_name.to_string(), contents.to_string()));
        Ok(())
    }
}

#[cfg(test)]
impl<S: OutputSink> OutputSink for &S {
    fn create_dir_if_absent(&self) -> Result<(), Error> {
        (*self).create_dir_if_absent()
    }

    fn write_text(&self, file_name: &str, contents: &str) -> Result<(), Error> {
        (*self).write_text(file_name, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_sink_writes_into_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirSink::new(dir.path().join("pages"));

        sink.create_dir_if_absent().unwrap();
        sink.write_text("Test One.html", "<html></html>").unwrap();

        let written = fs::read_to_string(dir.path().join("pages/Test One.html")).unwrap();
        assert_eq!(written, "<html></html>");
    }

    #[test]
    fn dir_creation_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirSink::new(dir.path().join("pages"));

        sink.create_dir_if_absent().unwrap();
        sink.create_dir_if_absent().unwrap();
    }

    #[test]
    fn write_failure_reports_the_target_path() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirSink::new(dir.path().join("missing"));

        // Directory never created, so the write fails.
        let err = sink.write_text("Test One.html", "x").unwrap_err();
        match err {
            Error::Write { path, .. } => {
                assert!(path.ends_with("missing/Test One.html"));
            }
            other => panic!("expected Error::Write, got {other:?}"),
        }
    }
}
