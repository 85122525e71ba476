//! Local backing: the table's local paths opened from disk.
//!
//! Used in development mode so edits to the source tree show up without
//! regenerating the table.

use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::UNIX_EPOCH;

use super::traits::{EntryKind, Filesystem, Handle, Metadata};
use crate::asset::AssetTable;
use crate::error::{Result, VfsError};

/// Filesystem view that maps virtual paths to real files.
///
/// Only the table's `local_path` is used; payloads are ignored. Relative
/// local paths are resolved against `root`. There is no caching: every open
/// goes to disk.
#[derive(Debug, Clone)]
pub struct LocalFs {
    table: Arc<AssetTable>,
    root: PathBuf,
}

impl LocalFs {
    /// Create a local backing resolving relative paths against the current
    /// directory.
    pub fn new(table: Arc<AssetTable>) -> Self {
        Self::with_root(table, ".")
    }

    pub fn with_root(table: Arc<AssetTable>, root: impl Into<PathBuf>) -> Self {
        Self {
            table,
            root: root.into(),
        }
    }

    /// Get the root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Translate a virtual path into the real path it is served from.
    fn resolve(&self, path: &str) -> Result<(String, PathBuf)> {
        let record = self.table.lookup(path)?;
        Ok((record.path().to_string(), self.root.join(record.local_path())))
    }
}

impl Filesystem for LocalFs {
    fn open(&self, path: &str) -> Result<Handle> {
        let (key, real) = self.resolve(path)?;
        tracing::trace!(path = %key, real = %real.display(), "local open");
        let file = File::open(&real).map_err(|e| VfsError::from_io(key.clone(), e))?;
        Ok(Handle::Local(LocalFile {
            path: key,
            real,
            file,
            readdir_offset: 0,
        }))
    }

    fn real_path(&self, path: &str) -> Option<PathBuf> {
        self.resolve(path).ok().map(|(_, real)| real)
    }
}

/// Open local file.
#[derive(Debug)]
pub struct LocalFile {
    path: String,
    real: PathBuf,
    file: File,
    readdir_offset: usize,
}

impl LocalFile {
    /// Real path this handle was opened from.
    pub fn real_path(&self) -> &Path {
        &self.real
    }

    pub fn stat(&self) -> Result<Metadata> {
        let meta = self
            .file
            .metadata()
            .map_err(|e| VfsError::from_io(self.path.clone(), e))?;
        let name = self
            .real
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| crate::path::base_name(&self.path).to_string());
        Ok(to_metadata(name, &meta))
    }

    pub fn readdir(&mut self, count: usize) -> Result<Vec<Metadata>> {
        let io_err = |e: io::Error| VfsError::from_io(self.path.clone(), e);
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.real).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let meta = entry.metadata().map_err(io_err)?;
            entries.push(to_metadata(
                entry.file_name().to_string_lossy().into_owned(),
                &meta,
            ));
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let remaining = entries.into_iter().skip(self.readdir_offset);
        let batch: Vec<Metadata> = if count == 0 {
            remaining.collect()
        } else {
            remaining.take(count).collect()
        };
        self.readdir_offset += batch.len();
        Ok(batch)
    }
}

fn to_metadata(name: String, meta: &fs::Metadata) -> Metadata {
    Metadata {
        name,
        kind: if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        },
        size: meta.len(),
        modified: meta.modified().unwrap_or(UNIX_EPOCH),
        mode: permissions(meta),
    }
}

#[cfg(unix)]
fn permissions(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn permissions(meta: &fs::Metadata) -> u32 {
    if meta.permissions().readonly() { 0o444 } else { 0o644 }
}

impl Read for LocalFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Seek for LocalFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AssetRecord;
    use tempfile::TempDir;

    fn setup() -> (LocalFs, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/sub")).unwrap();
        fs::write(dir.path().join("src/a.txt"), b"local a").unwrap();
        fs::write(dir.path().join("src/sub/b.txt"), b"bb").unwrap();

        let table = AssetTable::new([
            AssetRecord::directory("/", "src"),
            AssetRecord::file("/a.txt", "src/a.txt", 7, 0, ""),
            AssetRecord::file("/gone.txt", "src/gone.txt", 3, 0, ""),
        ])
        .unwrap();
        (LocalFs::with_root(Arc::new(table), dir.path()), dir)
    }

    #[test]
    fn test_open_reads_disk() {
        let (fs, _dir) = setup();
        let mut handle = fs.open("/a.txt").unwrap();
        assert_eq!(handle.read_all().unwrap(), b"local a");
        let meta = handle.stat().unwrap();
        assert_eq!(meta.name(), "a.txt");
        assert_eq!(meta.size(), 7);
    }

    #[test]
    fn test_no_cache_between_opens() {
        let (fs, dir) = setup();
        assert_eq!(&*fs.read("/a.txt").unwrap(), b"local a");
        std::fs::write(dir.path().join("src/a.txt"), b"edited").unwrap();
        assert_eq!(&*fs.read("/a.txt").unwrap(), b"edited");
    }

    #[test]
    fn test_unmapped_path_not_found() {
        let (fs, _dir) = setup();
        // Exists on disk but not in the table.
        let err = fs.open("/sub/b.txt").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_missing_file_not_found() {
        let (fs, _dir) = setup();
        let err = fs.open("/gone.txt").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.path(), "/gone.txt");
    }

    #[test]
    fn test_canonicalizes_before_lookup() {
        let (fs, _dir) = setup();
        assert_eq!(&*fs.read("/x/../a.txt").unwrap(), b"local a");
    }

    #[test]
    fn test_readdir_on_directory() {
        let (fs, _dir) = setup();
        let mut handle = fs.open("/").unwrap();
        assert!(handle.stat().unwrap().is_dir());

        let first = handle.readdir(1).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].name(), "a.txt");

        let rest = handle.readdir(0).unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].name(), "sub");
        assert!(rest[0].is_dir());

        assert!(handle.readdir(0).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_error_reports_canonical_path() {
        let (fs, _dir) = setup();
        // Directories open on unix but fail to read.
        let err = fs.read("/x/../").unwrap_err();
        assert!(matches!(err, VfsError::Io { .. }), "{err:?}");
        assert_eq!(err.path(), "/");
    }

    #[test]
    fn test_real_path() {
        let (fs, dir) = setup();
        assert_eq!(fs.real_path("/a.txt"), Some(dir.path().join("src/a.txt")));
        assert_eq!(fs.real_path("/nope"), None);
    }
}
