//! File I/O probe: write a large buffer to a temporary file and read it back.
//!
//! The file is a `NamedTempFile`, removed when the handle drops. That covers
//! every exit path, including a failed write or read.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::timer::measure;
use super::Probe;
use crate::error::ProbeError;
use crate::models::ProbeId;

pub const FILE_IO_BUFFER_LEN: usize = 100_000_000;
pub const FILL_BYTE: u8 = b'A';

/// Read the whole file from its current position.
pub fn read_to_end(file: &mut File) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)?;
    Ok(buf)
}

#[derive(Clone, Debug)]
pub struct FileIoProbe {
    len: usize,
    /// Directory for the temp file; system temp dir when unset
    dir: Option<PathBuf>,
}

impl Default for FileIoProbe {
    fn default() -> Self {
        FileIoProbe {
            len: FILE_IO_BUFFER_LEN,
            dir: None,
        }
    }
}

impl FileIoProbe {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    #[must_use]
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    fn create_temp(&self) -> io::Result<NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("hwscore-io-").suffix(".tmp");
        match &self.dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
    }

    /// Timed write + read of `data` using `read` for the read-back step.
    ///
    /// Returns elapsed seconds and the path the file had. Deleting the file is
    /// not part of the timed region.
    pub fn round_trip_with<R>(&self, data: &[u8], read: R) -> Result<(f64, PathBuf), ProbeError>
    where
        R: FnOnce(&mut File) -> io::Result<Vec<u8>>,
    {
        let (outcome, elapsed) = measure(|| -> Result<(NamedTempFile, Vec<u8>), ProbeError> {
            let mut temp = self.create_temp()?;
            temp.write_all(data)?;
            temp.flush()?;
            let mut reader = temp.reopen()?;
            let read_back = read(&mut reader)?;
            Ok((temp, read_back))
        });
        let (temp, read_back) = outcome?;

        let path = temp.path().to_path_buf();
        temp.close()?;
        log::debug!("[FILE_IO] Removed {}", path.display());

        if read_back.len() != data.len() {
            return Err(ProbeError::Verification(format!(
                "read back {} bytes, wrote {}",
                read_back.len(),
                data.len()
            )));
        }
        Ok((elapsed, path))
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }
}

impl Probe for FileIoProbe {
    fn id(&self) -> ProbeId {
        ProbeId::FileIo
    }

    fn run(&self) -> Result<f64, ProbeError> {
        let data = vec![FILL_BYTE; self.len];
        let (elapsed, _path) = self.round_trip_with(&data, read_to_end)?;
        Ok(elapsed)
    }
}
