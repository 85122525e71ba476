//! Core VFS trait and handle types.

use std::fmt;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;

use super::embedded::EmbeddedFile;
use super::local::LocalFile;
use crate::error::Result;

/// Kind of entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// File metadata returned by [`Handle::stat`] and [`Handle::readdir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Base name of the entry (not full path).
    pub name: String,
    pub kind: EntryKind,
    /// Size in bytes.
    pub size: u64,
    pub modified: SystemTime,
    /// Unix permission bits.
    pub mode: u32,
}

impl Metadata {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Read-only filesystem over the asset table.
///
/// Paths are slash-rooted virtual paths; every implementation canonicalizes
/// them before resolving, so `/sub/../a.js` and `/a.js` name the same asset.
pub trait Filesystem: Send + Sync + fmt::Debug {
    /// Open a path for reading.
    fn open(&self, path: &str) -> Result<Handle>;

    /// Read the entire contents of a file.
    fn read(&self, path: &str) -> Result<Arc<[u8]>> {
        let mut handle = self.open(path)?;
        let mut buf = Vec::new();
        handle
            .read_to_end(&mut buf)
            .map_err(|source| crate::VfsError::Io {
                path: crate::path::clean(path),
                source,
            })?;
        Ok(Arc::from(buf))
    }

    /// Get metadata for a path.
    fn stat(&self, path: &str) -> Result<Metadata> {
        self.open(path)?.stat()
    }

    /// Check if a path resolves.
    fn exists(&self, path: &str) -> bool {
        self.open(path).is_ok()
    }

    /// Get the real filesystem path for a virtual path.
    ///
    /// `Some` only for backings that read from disk.
    fn real_path(&self, path: &str) -> Option<PathBuf> {
        let _ = path;
        None
    }
}

/// An open asset: readable, seekable, with metadata.
#[derive(Debug)]
pub enum Handle {
    Embedded(EmbeddedFile),
    Local(LocalFile),
}

impl Handle {
    pub fn stat(&self) -> Result<Metadata> {
        match self {
            Handle::Embedded(f) => Ok(f.stat()),
            Handle::Local(f) => f.stat(),
        }
    }

    /// List directory entries.
    ///
    /// Embedded handles always return an empty list. Local handles read the
    /// real directory; `count == 0` returns every remaining entry, otherwise
    /// at most `count`, continuing where the previous call stopped.
    pub fn readdir(&mut self, count: usize) -> Result<Vec<Metadata>> {
        match self {
            Handle::Embedded(_) => Ok(Vec::new()),
            Handle::Local(f) => f.readdir(count),
        }
    }

    /// Release the handle.
    pub fn close(self) -> Result<()> {
        match self {
            Handle::Embedded(_) => Ok(()),
            Handle::Local(f) => {
                drop(f);
                Ok(())
            }
        }
    }

    /// Read everything from the current position to the end.
    pub fn read_all(&mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

impl Read for Handle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Handle::Embedded(f) => f.read(buf),
            Handle::Local(f) => f.read(buf),
        }
    }
}

impl Seek for Handle {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self {
            Handle::Embedded(f) => f.seek(pos),
            Handle::Local(f) => f.seek(pos),
        }
    }
}
