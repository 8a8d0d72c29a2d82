use std::{
    fs::{DirBuilder, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::common::consts::{DEFAULT_LOG_FILE, STDERR_LOG_FILE};

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("unable to create log directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("unable to create log file {}: {source}", path.display())]
    CreateFile { path: PathBuf, source: io::Error },
    #[error("unable to open log file {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
}

/// Make sure `path` exists and open it for appending.
///
/// Missing parent directories are created with mode `0775`, a missing file
/// is created empty, then the file is opened read-write in append mode.
pub fn prepare_file<P: AsRef<Path>>(path: P) -> Result<File, LoggerError> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty() && !d.exists()) {
        dir_builder().create(dir).map_err(|source| LoggerError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    if !path.exists() {
        File::create(path).map_err(|source| LoggerError::CreateFile {
            path: path.to_path_buf(),
            source,
        })?;
    }
    OpenOptions::new().read(true).append(true).open(path).map_err(|source| LoggerError::Open {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn dir_builder() -> DirBuilder {
    use std::os::unix::fs::DirBuilderExt;

    let mut builder = DirBuilder::new();
    builder.recursive(true).mode(0o775);
    builder
}

#[cfg(not(unix))]
fn dir_builder() -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    builder
}

/// Where a logger writes its lines
#[derive(Debug)]
pub enum Destination {
    Stdout,
    Stderr,
    File(File),
}

impl Destination {
    /// Map the standard stream paths to the process streams, prepare a file otherwise
    pub fn resolve(path: &str) -> Result<Self, LoggerError> {
        match path {
            DEFAULT_LOG_FILE => Ok(Destination::Stdout),
            STDERR_LOG_FILE => Ok(Destination::Stderr),
            _ => prepare_file(path).map(Destination::File),
        }
    }
}

impl Write for Destination {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match self {
            Destination::Stdout => io::stdout().lock().write(buf),
            Destination::Stderr => io::stderr().lock().write(buf),
            Destination::File(f) => f.write(buf),
        }
    }

    fn write_all(
        &mut self,
        buf: &[u8],
    ) -> io::Result<()> {
        match self {
            Destination::Stdout => io::stdout().lock().write_all(buf),
            Destination::Stderr => io::stderr().lock().write_all(buf),
            Destination::File(f) => f.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Destination::Stdout => io::stdout().flush(),
            Destination::Stderr => io::stderr().flush(),
            Destination::File(f) => f.flush(),
        }
    }
}
