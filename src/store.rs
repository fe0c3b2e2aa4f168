//! Persistence of the registry to its CSV data file.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::codec;
use crate::registry::{LoadReport, Registry};

/// Failures to reach the data file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("could not create {}: {source}", path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("could not write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// The data file backing a registry.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every boat from the data file.
    ///
    /// A file that cannot be opened is an error; a file with no usable lines
    /// is an empty registry.
    pub fn load(&self) -> Result<(Registry, LoadReport), StoreError> {
        let file = File::open(&self.path).map_err(|source| StoreError::Open {
            path: self.path.clone(),
            source,
        })?;

        let (registry, report) =
            Registry::load(BufReader::new(file)).map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(
            path = %self.path.display(),
            loaded = report.loaded,
            skipped = report.skipped,
            "loaded registry"
        );
        Ok((registry, report))
    }

    /// Overwrite the data file with the registry, in storage order.
    ///
    /// The file is synced to disk before this returns. Returns the number of
    /// boats written.
    pub fn save(&self, registry: &Registry) -> Result<usize, StoreError> {
        let file = File::create(&self.path).map_err(|source| StoreError::Create {
            path: self.path.clone(),
            source,
        })?;

        write_lines(file, registry).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(path = %self.path.display(), boats = registry.len(), "saved registry");
        Ok(registry.len())
    }
}

fn write_lines(file: File, registry: &Registry) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    for boat in registry {
        writeln!(writer, "{}", codec::format_line(boat))?;
    }
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}
